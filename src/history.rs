use crate::model::{Developer, Snapshot, SubjectEvent};
use crate::notify::{Observers, Token};

use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HistoryEvent {
    Reset,
    Save,
    Undo,
    Redo,
}

// The snapshot timeline. states[cursor] is the last state the subject was
// known to have, either because it was just recorded or just replayed.
#[derive(Debug)]
struct Timeline {
    states: Vec<Snapshot>,
    cursor: usize,
}

impl Timeline {
    fn seeded(initial: Snapshot) -> Timeline {
        Timeline {
            states: vec![initial],
            cursor: 0,
        }
    }

    fn reseed(&mut self, current: Snapshot) {
        self.states = vec![current];
        self.cursor = 0;
    }

    fn record(&mut self, current: Snapshot) {
        // A new edit after a rewind abandons the old future for good.
        self.states.truncate(self.cursor + 1);
        self.states.push(current);
        self.cursor = self.states.len() - 1;
    }

    fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    fn can_redo(&self) -> bool {
        self.cursor + 1 < self.states.len()
    }
}

// Clears the replay flag on every exit path out of a restore.
struct ReplayGuard {
    flag: Rc<Cell<bool>>,
}

impl ReplayGuard {
    fn enter(flag: &Rc<Cell<bool>>) -> ReplayGuard {
        flag.set(true);
        ReplayGuard {
            flag: Rc::clone(flag),
        }
    }
}

impl Drop for ReplayGuard {
    fn drop(&mut self) {
        self.flag.set(false);
    }
}

pub struct HistoryStack {
    timeline: Rc<RefCell<Timeline>>,
    observers: Rc<RefCell<Observers<HistoryEvent>>>,
    replaying: Rc<Cell<bool>>,
}

impl HistoryStack {
    // Binds to one subject for its whole life: seeds the timeline with the
    // subject's current state and starts listening.
    pub fn attach(subject: &mut Developer) -> HistoryStack {
        let timeline = Rc::new(RefCell::new(Timeline::seeded(subject.snapshot())));
        let observers = Rc::new(RefCell::new(Observers::new()));
        let replaying = Rc::new(Cell::new(false));

        {
            let timeline = Rc::clone(&timeline);
            let observers = Rc::clone(&observers);
            let replaying = Rc::clone(&replaying);

            subject.observe(move |profile, event| {
                if replaying.get() {
                    // While a snapshot is being replayed the stack is not
                    // listening. Its own restore signal is expected; an edit
                    // here means a collaborator bypassed the contract.
                    if let SubjectEvent::Restored = event {
                        return;
                    }
                    panic!("subject mutated during history replay: {:?}", event);
                }

                let emitted = match event {
                    SubjectEvent::FreshLoad => {
                        timeline.borrow_mut().reseed(profile.snapshot());
                        HistoryEvent::Reset
                    }
                    SubjectEvent::NameChanged
                    | SubjectEvent::LanguageAdded
                    | SubjectEvent::LanguageRemoved => {
                        timeline.borrow_mut().record(profile.snapshot());
                        HistoryEvent::Save
                    }
                    // A restore issued by somebody else's timeline is not an
                    // edit and must not be recorded.
                    SubjectEvent::Restored => return,
                };

                observers.borrow_mut().notify(&emitted);
            });
        }

        HistoryStack {
            timeline,
            observers,
            replaying,
        }
    }

    pub fn subscribe<F>(&self, callback: F) -> Token
    where
        F: FnMut(&HistoryEvent) + 'static,
    {
        self.observers.borrow_mut().subscribe(callback)
    }

    pub fn unsubscribe(&self, token: Token) {
        self.observers.borrow_mut().cancel(token);
    }

    pub fn can_undo(&self) -> bool {
        self.timeline.borrow().can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.timeline.borrow().can_redo()
    }

    pub fn depth(&self) -> usize {
        self.timeline.borrow().states.len()
    }

    pub fn reset(&self, subject: &Developer) {
        self.timeline.borrow_mut().reseed(subject.snapshot());
        self.observers.borrow_mut().notify(&HistoryEvent::Reset);
    }

    pub fn undo(&self, subject: &mut Developer) -> bool {
        let target = {
            let mut timeline = self.timeline.borrow_mut();
            if !timeline.can_undo() {
                return false;
            }
            timeline.cursor -= 1;
            timeline.states[timeline.cursor].clone()
        };

        self.replay(subject, &target);
        self.observers.borrow_mut().notify(&HistoryEvent::Undo);
        true
    }

    pub fn redo(&self, subject: &mut Developer) -> bool {
        let target = {
            let mut timeline = self.timeline.borrow_mut();
            if !timeline.can_redo() {
                return false;
            }
            timeline.cursor += 1;
            timeline.states[timeline.cursor].clone()
        };

        self.replay(subject, &target);
        self.observers.borrow_mut().notify(&HistoryEvent::Redo);
        true
    }

    fn replay(&self, subject: &mut Developer, target: &Snapshot) {
        let _replaying = ReplayGuard::enter(&self.replaying);
        subject.restore_from(target);
    }
}
