use crate::model::{DevId, Developer, SubjectEvent};
use crate::notify::{Observers, Token};

use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq)]
pub struct RecentEntry {
    pub id: DevId,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RecentEvent {
    Add(RecentEntry),
}

// Bounded, deduplicating list of the last developers visited. Stored oldest
// first, read newest first. Fed by fresh loads only, never by edits.
pub struct RecentList {
    entries: Rc<RefCell<Vec<RecentEntry>>>,
    observers: Rc<RefCell<Observers<RecentEvent>>>,
    limit: usize,
}

impl RecentList {
    pub const DEFAULT_LIMIT: usize = 5;

    pub fn attach(subject: &mut Developer, limit: usize) -> RecentList {
        let entries: Rc<RefCell<Vec<RecentEntry>>> = Rc::new(RefCell::new(Vec::new()));
        let observers = Rc::new(RefCell::new(Observers::new()));

        {
            let entries = Rc::clone(&entries);
            let observers = Rc::clone(&observers);

            subject.observe(move |profile, event| {
                if let SubjectEvent::FreshLoad = event {
                    let entry = RecentEntry {
                        id: profile.id,
                        label: profile.name.clone(),
                    };
                    RecentList::remember(&mut entries.borrow_mut(), entry.clone(), limit);
                    observers.borrow_mut().notify(&RecentEvent::Add(entry));
                }
            });
        }

        RecentList {
            entries,
            observers,
            limit,
        }
    }

    fn remember(entries: &mut Vec<RecentEntry>, entry: RecentEntry, limit: usize) {
        if let Some(pos) = entries.iter().position(|e| e.id == entry.id) {
            entries.remove(pos);
        }
        entries.push(entry);
        if entries.len() > limit {
            entries.remove(0);
        }
    }

    pub fn subscribe<F>(&self, callback: F) -> Token
    where
        F: FnMut(&RecentEvent) + 'static,
    {
        self.observers.borrow_mut().subscribe(callback)
    }

    pub fn unsubscribe(&self, token: Token) {
        self.observers.borrow_mut().cancel(token);
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    // Most recent first. A copy: callers cannot reach the internal list.
    pub fn list(&self) -> Vec<RecentEntry> {
        self.entries.borrow().iter().rev().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::store::Record;

    use std::cell::RefCell;
    use std::rc::Rc;

    use quickcheck::quickcheck;

    fn record(n: DevId) -> Record {
        Record {
            dev: format!("dev{}", n),
            favorite_languages: Vec::new(),
        }
    }

    fn visit(dev: &mut Developer, id: DevId) {
        dev.load(id, &record(id));
    }

    fn ids(list: &[RecentEntry]) -> Vec<DevId> {
        list.iter().map(|entry| entry.id).collect()
    }

    #[test]
    fn visits_read_newest_first_with_dedup() {
        let mut dev = Developer::new();
        let recent = RecentList::attach(&mut dev, RecentList::DEFAULT_LIMIT);

        for id in &[1, 2, 3, 1, 4, 5, 6] {
            visit(&mut dev, *id);
        }

        assert_eq!(ids(&recent.list()), vec![6, 5, 4, 1, 3]);
        assert_eq!(recent.len(), 5);
    }

    #[test]
    fn revisiting_moves_to_front_without_growing() {
        let mut dev = Developer::new();
        let recent = RecentList::attach(&mut dev, RecentList::DEFAULT_LIMIT);

        visit(&mut dev, 1);
        visit(&mut dev, 2);
        visit(&mut dev, 1);

        assert_eq!(ids(&recent.list()), vec![1, 2]);
        assert_eq!(recent.len(), 2);
    }

    #[test]
    fn relabels_on_revisit() {
        let mut dev = Developer::new();
        let recent = RecentList::attach(&mut dev, RecentList::DEFAULT_LIMIT);

        visit(&mut dev, 1);
        dev.load(
            1,
            &Record {
                dev: "renamed".into(),
                favorite_languages: Vec::new(),
            },
        );

        let list = recent.list();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].label, "renamed");
    }

    #[test]
    fn edits_do_not_touch_the_list() {
        let mut dev = Developer::new();
        let recent = RecentList::attach(&mut dev, RecentList::DEFAULT_LIMIT);

        visit(&mut dev, 1);
        dev.set_name("edited");
        dev.add_language("go");

        assert_eq!(recent.len(), 1);
        assert_eq!(recent.list()[0].label, "dev1");
    }

    #[test]
    fn respects_a_custom_limit() {
        let mut dev = Developer::new();
        let recent = RecentList::attach(&mut dev, 2);

        for id in 1..=4 {
            visit(&mut dev, id);
        }

        assert_eq!(ids(&recent.list()), vec![4, 3]);
    }

    #[test]
    fn list_is_a_defensive_copy() {
        let mut dev = Developer::new();
        let recent = RecentList::attach(&mut dev, RecentList::DEFAULT_LIMIT);

        visit(&mut dev, 1);
        let mut copy = recent.list();
        copy.clear();

        assert_eq!(recent.len(), 1);
    }

    #[test]
    fn add_notifications_carry_the_entry() {
        let mut dev = Developer::new();
        let recent = RecentList::attach(&mut dev, RecentList::DEFAULT_LIMIT);

        let events: Rc<RefCell<Vec<RecentEvent>>> = Rc::new(RefCell::new(Vec::new()));
        {
            let events = Rc::clone(&events);
            recent.subscribe(move |event| events.borrow_mut().push(event.clone()));
        }

        visit(&mut dev, 3);

        assert_eq!(
            *events.borrow(),
            vec![RecentEvent::Add(RecentEntry {
                id: 3,
                label: "dev3".into(),
            })]
        );
    }

    quickcheck! {
        fn prop_bounded_and_unique(visits: Vec<u8>) -> bool {
            let mut dev = Developer::new();
            let recent = RecentList::attach(&mut dev, RecentList::DEFAULT_LIMIT);

            for id in &visits {
                visit(&mut dev, u64::from(*id));
            }

            let list = recent.list();
            let bounded = list.len() <= RecentList::DEFAULT_LIMIT;
            let unique = list
                .iter()
                .all(|entry| list.iter().filter(|e| e.id == entry.id).count() == 1);
            let freshest = visits
                .last()
                .map(|id| list[0].id == u64::from(*id))
                .unwrap_or(list.is_empty());

            bounded && unique && freshest
        }
    }
}
