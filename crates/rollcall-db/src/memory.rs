//! Process-local document store.
//!
//! Commits are applied to a copy of the collections and swapped in only when
//! every write succeeds, so a failed precondition leaves nothing behind.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::BTreeMap;
use tokio::sync::RwLock;
use tracing::debug;

use crate::{
    DocPath, Document, DocumentStore, Fields, StoreError, TransformKind, Write, WriteOp,
};

type Collections = BTreeMap<&'static str, BTreeMap<String, Fields>>;

#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: RwLock<Collections>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of documents in `collection`.
    pub async fn count(&self, collection: &str) -> usize {
        self.collections
            .read()
            .await
            .get(collection)
            .map(BTreeMap::len)
            .unwrap_or(0)
    }
}

fn apply_transform(fields: &mut Fields, field: &str, kind: &TransformKind) {
    let current = match fields.remove(field) {
        Some(Value::Array(items)) => items,
        _ => Vec::new(),
    };

    let updated = match kind {
        TransformKind::ArrayUnion(values) => {
            let mut items = current;
            for value in values {
                if !items.contains(value) {
                    items.push(value.clone());
                }
            }
            items
        }
        TransformKind::ArrayRemove(values) => current
            .into_iter()
            .filter(|item| !values.contains(item))
            .collect(),
    };

    fields.insert(field.to_string(), Value::Array(updated));
}

fn apply_write(collections: &mut Collections, write: &Write) -> Result<(), StoreError> {
    let path: &DocPath = &write.path;
    let documents = collections.entry(path.collection()).or_default();

    match &write.op {
        WriteOp::Delete => {
            documents.remove(path.id());
            return Ok(());
        }
        WriteOp::Set(fields) => {
            documents.insert(path.id().to_string(), fields.clone());
        }
        WriteOp::Update { fields, must_exist } => {
            if *must_exist && !documents.contains_key(path.id()) {
                return Err(StoreError::NotFound(path.to_string()));
            }
            let document = documents.entry(path.id().to_string()).or_default();
            for (key, value) in fields {
                document.insert(key.clone(), value.clone());
            }
        }
    }

    if let Some(document) = documents.get_mut(path.id()) {
        for transform in &write.transforms {
            apply_transform(document, &transform.field, &transform.kind);
        }
    }

    Ok(())
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn get(&self, path: &DocPath) -> Result<Option<Document>, StoreError> {
        Ok(self
            .collections
            .read()
            .await
            .get(path.collection())
            .and_then(|documents| documents.get(path.id()))
            .map(|fields| Document::new(path.id(), fields.clone())))
    }

    async fn list(&self, collection: &'static str) -> Result<Vec<Document>, StoreError> {
        Ok(self
            .collections
            .read()
            .await
            .get(collection)
            .map(|documents| {
                documents
                    .iter()
                    .map(|(id, fields)| Document::new(id.clone(), fields.clone()))
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn commit(&self, writes: Vec<Write>) -> Result<(), StoreError> {
        let mut collections = self.collections.write().await;
        let mut staged = collections.clone();

        for write in &writes {
            apply_write(&mut staged, write)?;
        }

        *collections = staged;
        debug!(writes = writes.len(), "Committed batch");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::string_values;
    use serde_json::json;

    fn fields(value: Value) -> Fields {
        match value {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    fn path(collection: &'static str, id: &str) -> DocPath {
        DocPath::new(collection, id).unwrap()
    }

    #[tokio::test]
    async fn test_set_then_get() {
        let store = MemoryStore::new();
        store
            .commit(vec![Write::set(path("Users", "u1"), fields(json!({"name": "Ada"})))])
            .await
            .unwrap();

        let doc = store.get(&path("Users", "u1")).await.unwrap().unwrap();
        assert_eq!(doc.id, "u1");
        assert_eq!(doc.fields["name"], "Ada");
        assert!(store.get(&path("Users", "u2")).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_set_replaces_and_merge_keeps_fields() {
        let store = MemoryStore::new();
        let p = path("School", "7");

        store
            .commit(vec![Write::set(p.clone(), fields(json!({"name": "Elm", "teachers": ["a"]})))])
            .await
            .unwrap();
        store
            .commit(vec![Write::merge(p.clone(), fields(json!({"address": "12 Elm Rd"})))])
            .await
            .unwrap();

        let doc = store.get(&p).await.unwrap().unwrap();
        assert_eq!(doc.fields["name"], "Elm");
        assert_eq!(doc.fields["address"], "12 Elm Rd");

        store
            .commit(vec![Write::set(p.clone(), fields(json!({"name": "Oak"})))])
            .await
            .unwrap();
        let doc = store.get(&p).await.unwrap().unwrap();
        assert!(!doc.fields.contains_key("address"));
    }

    #[tokio::test]
    async fn test_array_union_dedupes_and_remove_drops_all() {
        let store = MemoryStore::new();
        let p = path("Semester", "fall");

        store
            .commit(vec![
                Write::merge(p.clone(), Fields::new())
                    .array_union("teachers", string_values(["a", "b"])),
            ])
            .await
            .unwrap();
        store
            .commit(vec![
                Write::update(p.clone(), Fields::new())
                    .array_union("teachers", string_values(["b", "c"])),
            ])
            .await
            .unwrap();

        let doc = store.get(&p).await.unwrap().unwrap();
        assert_eq!(doc.fields["teachers"], json!(["a", "b", "c"]));

        store
            .commit(vec![
                Write::update(p.clone(), Fields::new())
                    .array_remove("teachers", string_values(["b", "missing"])),
            ])
            .await
            .unwrap();
        let doc = store.get(&p).await.unwrap().unwrap();
        assert_eq!(doc.fields["teachers"], json!(["a", "c"]));
    }

    #[tokio::test]
    async fn test_failed_precondition_leaves_no_partial_state() {
        let store = MemoryStore::new();

        let result = store
            .commit(vec![
                Write::set(path("Teacher", "rec1"), fields(json!({"name": "Ada"}))),
                Write::update(path("Semester", "missing"), Fields::new())
                    .array_union("teachers", string_values(["rec1"])),
            ])
            .await;

        assert!(matches!(result, Err(StoreError::NotFound(p)) if p == "Semester/missing"));
        assert!(store.get(&path("Teacher", "rec1")).await.unwrap().is_none());
        assert_eq!(store.count("Teacher").await, 0);
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let store = MemoryStore::new();
        let p = path("Classroom", "42");

        store
            .commit(vec![Write::set(p.clone(), Fields::new())])
            .await
            .unwrap();
        store.commit(vec![Write::delete(p.clone())]).await.unwrap();
        store.commit(vec![Write::delete(p.clone())]).await.unwrap();

        assert!(store.get(&p).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_returns_documents_of_one_collection() {
        let store = MemoryStore::new();
        store
            .commit(vec![
                Write::set(path("Users", "u1"), Fields::new()),
                Write::set(path("Users", "u2"), Fields::new()),
                Write::set(path("Semester", "fall"), Fields::new()),
            ])
            .await
            .unwrap();

        let users = store.list("Users").await.unwrap();
        assert_eq!(users.len(), 2);
        assert!(store.list("Teacher").await.unwrap().is_empty());
    }
}
