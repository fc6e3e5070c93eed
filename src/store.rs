use crate::model::DevId;

use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub dev: String,
    pub favorite_languages: Vec<String>,
}

// In-memory stand-in for the remote persistence layer. Read-only: the app
// never writes profiles back.
pub struct Store {
    records: HashMap<DevId, Record>,
}

impl Store {
    pub fn empty() -> Store {
        Store {
            records: HashMap::new(),
        }
    }

    pub fn with_fixtures() -> Store {
        let mut store = Store::empty();

        store.insert(
            1,
            Record {
                dev: "Alice".into(),
                favorite_languages: vec!["javascript".into(), "ruby".into(), "python".into()],
            },
        );
        store.insert(
            2,
            Record {
                dev: "Bob".into(),
                favorite_languages: vec!["lisp".into(), "haskell".into(), "clojure".into()],
            },
        );
        store.insert(
            3,
            Record {
                dev: "Carol".into(),
                favorite_languages: vec!["smalltalk".into(), "ruby".into(), "coffeescript".into()],
            },
        );

        store
    }

    pub fn insert(&mut self, id: DevId, record: Record) {
        self.records.insert(id, record);
    }

    pub fn fetch(&self, id: DevId) -> Result<&Record, String> {
        self.records
            .get(&id)
            .ok_or_else(|| format!("no developer with id {}", id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetches_seeded_records() {
        let store = Store::with_fixtures();

        let alice = store.fetch(1).unwrap();
        assert_eq!(alice.dev, "Alice");
        assert_eq!(alice.favorite_languages, vec!["javascript", "ruby", "python"]);

        assert_eq!(store.fetch(3).unwrap().dev, "Carol");
    }

    #[test]
    fn unknown_ids_fail_with_a_descriptive_error() {
        let store = Store::with_fixtures();

        let error = store.fetch(42).unwrap_err();
        assert!(error.contains("42"));
    }
}
