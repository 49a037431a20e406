use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};
use crate::errors::StorageResult;
use super::KeyValueStore;

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let store = MemoryStore::default();
        assert_eq!(store.get("users").unwrap(), None);

        store.set("users", "[]").unwrap();
        assert_eq!(store.get("users").unwrap().as_deref(), Some("[]"));

        store.set("users", "[1]").unwrap();
        assert_eq!(store.get("users").unwrap().as_deref(), Some("[1]"));

        store.remove("users").unwrap();
        assert_eq!(store.get("users").unwrap(), None);

        // Removing twice is fine
        store.remove("users").unwrap();
    }
}
