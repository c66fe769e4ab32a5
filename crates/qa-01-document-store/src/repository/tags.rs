//! Tag catalogue documents keyed by tag name.

use shared_types::{ContentError, ContentResult, Tag};
use std::sync::Arc;
use tracing::instrument;

use crate::domain::codec;
use crate::domain::document::Collection;
use crate::domain::errors::StoreError;
use crate::ports::outbound::DocumentStore;

pub struct TagRepository<S: ?Sized> {
    store: Arc<S>,
}

impl<S: ?Sized> Clone for TagRepository<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: DocumentStore + ?Sized> TagRepository<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Add a tag. `Conflict` if the name is taken.
    #[instrument(skip(self, tag), fields(tag = %tag.name))]
    pub async fn insert(&self, tag: &Tag) -> ContentResult<()> {
        let body = codec::encode(tag)?;
        match self.store.insert(Collection::Tags, &tag.name, body).await {
            Ok(_) => Ok(()),
            Err(StoreError::DuplicateKey { key }) => {
                Err(ContentError::Conflict(format!("tag {key} already exists")))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Remove a tag by name. `NotFound` if absent.
    #[instrument(skip(self))]
    pub async fn remove(&self, name: &str) -> ContentResult<()> {
        if self.store.delete(Collection::Tags, name).await? {
            Ok(())
        } else {
            Err(ContentError::NotFound(format!("tag {name}")))
        }
    }

    /// Every tag, sorted by name.
    pub async fn list(&self) -> ContentResult<Vec<Tag>> {
        let mut tags = self
            .store
            .scan(Collection::Tags)
            .await?
            .iter()
            .map(|doc| codec::decode::<Tag>(&doc.body).map_err(ContentError::from))
            .collect::<ContentResult<Vec<Tag>>>()?;
        tags.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(tags)
    }
}
