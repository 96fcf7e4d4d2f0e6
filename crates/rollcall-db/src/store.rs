use async_trait::async_trait;
use serde::de::DeserializeOwned;

use rollcall_models::Entity;

use crate::{DocPath, Document, StoreError, Write};

/// A document database with atomic multi-document commits.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Reads one document; `None` when it does not exist.
    async fn get(&self, path: &DocPath) -> Result<Option<Document>, StoreError>;

    /// Reads every document of a top-level collection.
    async fn list(&self, collection: &'static str) -> Result<Vec<Document>, StoreError>;

    /// Applies `writes` atomically. A failed precondition aborts the whole commit.
    async fn commit(&self, writes: Vec<Write>) -> Result<(), StoreError>;
}

impl<'a> dyn DocumentStore + 'a {
    pub async fn fetch<E>(&self, id: &str) -> Result<Option<E>, StoreError>
    where
        E: Entity + DeserializeOwned,
    {
        let path = DocPath::of::<E>(id)?;
        match self.get(&path).await? {
            Some(doc) => Ok(Some(doc.decode()?)),
            None => Ok(None),
        }
    }

    pub async fn fetch_all<E>(&self) -> Result<Vec<E>, StoreError>
    where
        E: Entity + DeserializeOwned,
    {
        self.list(E::COLLECTION)
            .await?
            .into_iter()
            .map(Document::decode)
            .collect()
    }

    /// Commits a single write.
    pub async fn apply(&self, write: Write) -> Result<(), StoreError> {
        self.commit(vec![write]).await
    }
}
