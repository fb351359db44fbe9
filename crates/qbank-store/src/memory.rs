//! In-memory collection store

use crate::error::{Result, StoreError};
use qbank_domain::{Collection, CollectionStore};
use serde_json::Value;
use std::cell::RefCell;
use std::collections::BTreeMap;

/// Collections held as raw JSON documents in memory
///
/// Documents are kept unparsed so tests can seed malformed collections.
#[derive(Debug, Default)]
pub struct MemoryStore {
    documents: RefCell<BTreeMap<String, Value>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert of a raw document
    pub fn with_document(self, name: &str, document: Value) -> Self {
        self.insert_document(name, document);
        self
    }

    /// Insert or replace a raw document
    pub fn insert_document(&self, name: &str, document: Value) {
        self.documents.borrow_mut().insert(name.to_string(), document);
    }

    /// Current raw document of a collection
    pub fn document(&self, name: &str) -> Option<Value> {
        self.documents.borrow().get(name).cloned()
    }
}

impl CollectionStore for MemoryStore {
    type Error = StoreError;

    fn list_collections(&self) -> Result<Vec<String>> {
        Ok(self.documents.borrow().keys().cloned().collect())
    }

    fn load_collection(&self, name: &str) -> Result<Collection> {
        let document = self
            .document(name)
            .ok_or_else(|| StoreError::NotFound(name.to_string()))?;
        Ok(Collection::from_document(name, document)?)
    }

    fn save_collection(&self, collection: &Collection) -> Result<()> {
        self.insert_document(collection.name(), collection.to_document());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_round_trip() {
        let store = MemoryStore::new().with_document("b", json!({"open_questions": []}));
        store.insert_document("a", json!({"mcq_questions": [{"id": "m1"}]}));

        assert_eq!(store.list_collections().unwrap(), vec!["a", "b"]);
        let a = store.load_collection("a").unwrap();
        assert_eq!(a.len(), 1);
        store.save_collection(&a).unwrap();
        assert_eq!(store.document("a"), Some(json!({"mcq_questions": [{"id": "m1"}]})));
    }

    #[test]
    fn test_missing_and_malformed() {
        let store = MemoryStore::new().with_document("bad", json!("not a collection"));
        assert!(matches!(store.load_collection("nope"), Err(StoreError::NotFound(n)) if n == "nope"));
        assert!(matches!(store.load_collection("bad"), Err(StoreError::Collection(_))));
    }

    #[test]
    fn test_default_update() {
        let store = MemoryStore::new().with_document("c", json!({"open_questions": [{}]}));
        let len = store
            .update_collection("c", |c| {
                for r in c.records_mut() {
                    r.set_list("positions", ["devops"]);
                }
                c.len()
            })
            .unwrap();
        assert_eq!(len, 1);
        assert_eq!(
            store.document("c"),
            Some(json!({"open_questions": [{"positions": ["devops"]}]}))
        );
    }
}
