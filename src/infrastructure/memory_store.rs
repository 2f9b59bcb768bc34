use std::collections::HashMap;
use std::sync::Mutex;

use crate::error::AppResult;
use crate::infrastructure::store::{Collection, Store};

/// In-memory store. Backs the tests and any run that does not need state to
/// outlive the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<Collection, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }
}

impl Store for MemoryStore {
    fn load(&self, collection: Collection) -> Option<String> {
        self.entries.lock().unwrap().get(&collection).cloned()
    }

    fn save(&self, collection: Collection, payload: &str) -> AppResult<()> {
        self.entries
            .lock()
            .unwrap()
            .insert(collection, payload.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_replaces_prior_contents() {
        let store = MemoryStore::new();
        store.save(Collection::Events, "[1]").unwrap();
        store.save(Collection::Events, "[2]").unwrap();
        assert_eq!(store.load(Collection::Events).as_deref(), Some("[2]"));
    }

    #[test]
    fn test_collections_are_independent() {
        let store = MemoryStore::new();
        store.save(Collection::Events, "[]").unwrap();
        assert!(store.load(Collection::Registrations).is_none());
    }
}
