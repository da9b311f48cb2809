use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, Bson, Document};
use std::collections::HashMap;
use std::sync::Mutex;

use super::{DocumentStore, StoreError, UpdateCounts};

/// Insertion-ordered document store used by the test suites.
#[derive(Default)]
pub struct MemoryStore {
    collections: Mutex<HashMap<String, Vec<Document>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, collection: &str) -> usize {
        self.collections
            .lock()
            .unwrap()
            .get(collection)
            .map(Vec::len)
            .unwrap_or(0)
    }
}

/// Numbers compare by value across widths, as the server does for
/// equality filters.
fn bson_eq(stored: &Bson, wanted: &Bson) -> bool {
    match (stored, wanted) {
        (Bson::Int32(_) | Bson::Int64(_), Bson::Int32(_) | Bson::Int64(_)) => {
            as_i64(stored) == as_i64(wanted)
        }
        (
            Bson::Int32(_) | Bson::Int64(_) | Bson::Double(_),
            Bson::Int32(_) | Bson::Int64(_) | Bson::Double(_),
        ) => as_f64(stored) == as_f64(wanted),
        _ => stored == wanted,
    }
}

fn as_i64(value: &Bson) -> Option<i64> {
    match value {
        Bson::Int32(n) => Some(i64::from(*n)),
        Bson::Int64(n) => Some(*n),
        _ => None,
    }
}

fn as_f64(value: &Bson) -> Option<f64> {
    match value {
        Bson::Int32(n) => Some(f64::from(*n)),
        Bson::Int64(n) => Some(*n as f64),
        Bson::Double(n) => Some(*n),
        _ => None,
    }
}

fn matches(document: &Document, filter: &Document) -> bool {
    filter
        .iter()
        .all(|(key, value)| document.get(key).is_some_and(|stored| bson_eq(stored, value)))
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn insert_one(&self, collection: &str, mut document: Document) -> Result<Bson, StoreError> {
        let id = match document.get("_id") {
            Some(id) => id.clone(),
            None => {
                let id = Bson::ObjectId(ObjectId::new());
                document.insert("_id", id.clone());
                id
            }
        };
        self.collections
            .lock()
            .unwrap()
            .entry(collection.to_string())
            .or_default()
            .push(document);
        Ok(id)
    }

    async fn find_one(&self, collection: &str, filter: Document) -> Result<Option<Document>, StoreError> {
        let collections = self.collections.lock().unwrap();
        Ok(collections
            .get(collection)
            .and_then(|docs| docs.iter().find(|d| matches(d, &filter)).cloned()))
    }

    async fn find_many(&self, collection: &str, filter: Document) -> Result<Vec<Document>, StoreError> {
        let collections = self.collections.lock().unwrap();
        Ok(collections
            .get(collection)
            .map(|docs| docs.iter().filter(|d| matches(d, &filter)).cloned().collect())
            .unwrap_or_default())
    }

    async fn update_one(
        &self,
        collection: &str,
        filter: Document,
        update: Document,
    ) -> Result<UpdateCounts, StoreError> {
        let set = update
            .get_document("$set")
            .map_err(|e| StoreError::Driver(e.to_string()))?
            .clone();

        let mut collections = self.collections.lock().unwrap();
        let target = collections
            .get_mut(collection)
            .and_then(|docs| docs.iter_mut().find(|d| matches(d, &filter)));

        let Some(document) = target else {
            return Ok(UpdateCounts { matched: 0, modified: 0 });
        };

        let mut modified = false;
        for (key, value) in set {
            if document.get(&key) != Some(&value) {
                document.insert(key, value);
                modified = true;
            }
        }
        Ok(UpdateCounts { matched: 1, modified: u64::from(modified) })
    }

    async fn delete_one(&self, collection: &str, filter: Document) -> Result<u64, StoreError> {
        let mut collections = self.collections.lock().unwrap();
        let Some(docs) = collections.get_mut(collection) else {
            return Ok(0);
        };
        match docs.iter().position(|d| matches(d, &filter)) {
            Some(index) => {
                docs.remove(index);
                Ok(1)
            }
            None => Ok(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::doc;

    #[tokio::test]
    async fn test_numeric_filters_match_across_widths() {
        let store = MemoryStore::new();
        store.insert_one("tables", doc! { "table_id": 4i32, "owner": "Ariel" }).await.unwrap();

        for wanted in [Bson::Int32(4), Bson::Int64(4), Bson::Double(4.0)] {
            let found = store.find_one("tables", doc! { "table_id": wanted }).await.unwrap();
            assert!(found.is_some());
        }
        assert!(store.find_one("tables", doc! { "table_id": 4.5 }).await.unwrap().is_none());
        assert!(store.find_one("tables", doc! { "table_id": "4" }).await.unwrap().is_none());

        let deleted = store.delete_one("tables", doc! { "table_id": 4i64 }).await.unwrap();
        assert_eq!(deleted, 1);
        assert_eq!(store.count("tables"), 0);
    }
}
