use std::collections::HashSet;
use std::sync::{Arc, RwLock};

use crate::errors::{KnowledgeError, KnowledgeResult};
use crate::models::Document;

#[derive(Debug, Default)]
struct StoreInner {
    docs: Vec<Arc<Document>>,
    ids: HashSet<String>,
}

/// In-memory document store, append-only for the life of the process.
///
/// Reads take a shared lock and copy out cheap `Arc` handles, so
/// concurrent `rank`/`all`/`count` calls never block each other; the
/// rare insert takes the write lock and can never expose a
/// partially-inserted document.
#[derive(Debug, Default)]
pub struct KnowledgeStore {
    inner: RwLock<StoreInner>,
}

impl KnowledgeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bulk-initialize the store. Fails fast on the first duplicate id,
    /// leaving nothing inserted.
    pub fn load(&self, documents: Vec<Document>) -> KnowledgeResult<usize> {
        let mut inner = self.inner.write().expect("store lock poisoned");

        let mut seen: HashSet<&str> = inner.ids.iter().map(|s| s.as_str()).collect();
        for doc in &documents {
            if !seen.insert(doc.id.as_str()) {
                return Err(KnowledgeError::DuplicateId(doc.id.clone()));
            }
        }

        for doc in documents {
            inner.ids.insert(doc.id.clone());
            inner.docs.push(Arc::new(doc));
        }
        Ok(inner.docs.len())
    }

    /// Insert one document, rejecting a duplicate id without touching
    /// existing state. Returns the new total count.
    pub fn insert(&self, document: Document) -> KnowledgeResult<usize> {
        let mut inner = self.inner.write().expect("store lock poisoned");
        if inner.ids.contains(&document.id) {
            return Err(KnowledgeError::DuplicateId(document.id));
        }
        inner.ids.insert(document.id.clone());
        inner.docs.push(Arc::new(document));
        Ok(inner.docs.len())
    }

    /// Snapshot of all documents in insertion order.
    pub fn all(&self) -> Vec<Arc<Document>> {
        self.inner.read().expect("store lock poisoned").docs.clone()
    }

    pub fn count(&self) -> usize {
        self.inner.read().expect("store lock poisoned").docs.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(id: &str) -> Document {
        Document::new(id, format!("Title {id}"), "some content", "general")
    }

    #[test]
    fn test_load_and_count() {
        let store = KnowledgeStore::new();
        let count = store.load(vec![doc("a"), doc("b"), doc("c")]).unwrap();
        assert_eq!(count, 3);
        assert_eq!(store.count(), 3);
    }

    #[test]
    fn test_load_rejects_duplicate_ids() {
        let store = KnowledgeStore::new();
        let err = store.load(vec![doc("a"), doc("a")]).unwrap_err();
        assert!(matches!(err, KnowledgeError::DuplicateId(id) if id == "a"));
        // Nothing was inserted
        assert_eq!(store.count(), 0);
    }

    #[test]
    fn test_insert_rejects_duplicate_without_mutation() {
        let store = KnowledgeStore::new();
        store.load(vec![doc("a")]).unwrap();
        assert!(store.insert(doc("a")).is_err());
        assert_eq!(store.count(), 1);
    }

    #[test]
    fn test_all_preserves_insertion_order() {
        let store = KnowledgeStore::new();
        store.load(vec![doc("a"), doc("b")]).unwrap();
        store.insert(doc("c")).unwrap();

        let docs = store.all();
        let ids: Vec<&str> = docs.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_inserted_document_immediately_visible() {
        let store = KnowledgeStore::new();
        store.load(vec![doc("a")]).unwrap();
        let count = store.insert(doc("b")).unwrap();
        assert_eq!(count, 2);
        assert!(store.all().iter().any(|d| d.id == "b"));
    }
}
