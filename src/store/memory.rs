//! In-memory reference store
//!
//! Unique indexes are maintained as key maps updated on every write, so
//! a violation is detected before the document is committed. Missing
//! indexed fields participate in keys as null. Violations surface with
//! numeric class 11000 and the violated index's name in the message,
//! which is the contract the retry loop classifies against.

use std::collections::HashMap;
use std::sync::Mutex;

use serde_json::Value;
use uuid::Uuid;

use crate::schema::{IndexDef, Schema};

use super::errors::{StoreError, StoreResult};
use super::{DocumentStore, StoreFuture};

/// A maintained unique index: encoded key -> document id
#[derive(Debug)]
struct UniqueIndex {
    def: IndexDef,
    entries: HashMap<String, String>,
}

impl UniqueIndex {
    fn new(def: IndexDef) -> Self {
        Self {
            def,
            entries: HashMap::new(),
        }
    }

    /// Canonical key: JSON array of the indexed field values in index
    /// order, null for absent fields.
    fn key_for(&self, document: &Value) -> String {
        let values: Vec<Value> = self
            .def
            .fields
            .iter()
            .map(|field| document.get(field).cloned().unwrap_or(Value::Null))
            .collect();
        Value::Array(values).to_string()
    }

    /// Human-readable key for conflict messages
    fn dup_key_display(&self, document: &Value) -> String {
        let pairs: Vec<String> = self
            .def
            .fields
            .iter()
            .map(|field| {
                format!("{}: {}", field, document.get(field).unwrap_or(&Value::Null))
            })
            .collect();
        format!("{{ {} }}", pairs.join(", "))
    }
}

/// One collection: documents by id plus enforced unique indexes
#[derive(Debug, Default)]
struct Collection {
    documents: HashMap<String, Value>,
    indexes: Vec<UniqueIndex>,
}

/// In-memory document store enforcing compound unique indexes
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: Mutex<HashMap<String, Collection>>,
}

impl MemoryStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a collection enforcing the schema's unique indexes.
    /// Non-unique index declarations carry no enforcement and are
    /// ignored here.
    pub fn create_collection(&self, schema: &Schema) -> StoreResult<()> {
        let mut collections = self.lock_collections()?;
        if collections.contains_key(&schema.collection) {
            return Err(StoreError::collection_exists(&schema.collection));
        }

        let indexes = schema
            .indexes
            .iter()
            .filter(|index| index.unique)
            .cloned()
            .map(UniqueIndex::new)
            .collect();
        collections.insert(
            schema.collection.clone(),
            Collection {
                documents: HashMap::new(),
                indexes,
            },
        );
        Ok(())
    }

    /// Synchronous save path, also backing the async trait impl.
    ///
    /// Order per write:
    /// 1. Resolve or assign the document id
    /// 2. Check every unique index, excluding the document itself
    /// 3. Commit: retire the previous version's index entries, add the
    ///    new ones, store the document
    pub fn save_document(&self, collection: &str, document: &Value) -> StoreResult<Value> {
        let mut collections = self.lock_collections()?;
        let coll = collections
            .get_mut(collection)
            .ok_or_else(|| StoreError::unknown_collection(collection))?;

        if !document.is_object() {
            return Err(StoreError::invalid_document("document must be a JSON object"));
        }
        let mut doc = document.clone();

        let id = match doc.get("_id") {
            None | Some(Value::Null) => {
                let id = Uuid::new_v4().to_string();
                doc["_id"] = Value::String(id.clone());
                id
            }
            Some(Value::String(id)) => id.clone(),
            Some(_) => return Err(StoreError::invalid_document("_id must be a string")),
        };

        for index in &coll.indexes {
            let key = index.key_for(&doc);
            if let Some(holder) = index.entries.get(&key) {
                if holder != &id {
                    return Err(StoreError::duplicate_key(
                        collection,
                        &index.def.name,
                        &index.dup_key_display(&doc),
                    ));
                }
            }
        }

        if let Some(previous) = coll.documents.get(&id).cloned() {
            for index in &mut coll.indexes {
                let old_key = index.key_for(&previous);
                index.entries.remove(&old_key);
            }
        }
        for index in &mut coll.indexes {
            let key = index.key_for(&doc);
            index.entries.insert(key, id.clone());
        }
        coll.documents.insert(id, doc.clone());

        Ok(doc)
    }

    /// Fetch a stored document by id
    pub fn document(&self, collection: &str, id: &str) -> Option<Value> {
        let collections = self.lock_collections().ok()?;
        collections.get(collection)?.documents.get(id).cloned()
    }

    /// Number of documents in a collection
    pub fn count(&self, collection: &str) -> usize {
        self.lock_collections()
            .ok()
            .and_then(|collections| collections.get(collection).map(|c| c.documents.len()))
            .unwrap_or(0)
    }

    /// All values stored at a field across a collection, unordered
    pub fn field_values(&self, collection: &str, field: &str) -> Vec<Value> {
        match self.lock_collections() {
            Ok(collections) => collections
                .get(collection)
                .map(|coll| {
                    coll.documents
                        .values()
                        .filter_map(|doc| doc.get(field).cloned())
                        .collect()
                })
                .unwrap_or_default(),
            Err(_) => Vec::new(),
        }
    }

    fn lock_collections(
        &self,
    ) -> StoreResult<std::sync::MutexGuard<'_, HashMap<String, Collection>>> {
        self.collections
            .lock()
            .map_err(|_| StoreError::io("collections lock poisoned"))
    }
}

impl DocumentStore for MemoryStore {
    fn save<'a>(&'a self, collection: &'a str, document: &'a Value) -> StoreFuture<'a, Value> {
        Box::pin(async move { self.save_document(collection, document) })
    }
}
