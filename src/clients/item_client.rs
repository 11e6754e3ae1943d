//! # Item Client
//!
//! Provides a high-level API for the catalog: validated CRUD plus the collection queries
//! (`search`, `total`, `stats`) and `clear`.
use crate::item_actor::ItemError;
use crate::model::{CatalogAnswer, CatalogQuery, CatalogStats, Item, ItemDraft, ItemId};
use async_trait::async_trait;
use resource_framework::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the Item actor.
#[derive(Clone)]
pub struct ItemClient {
    inner: ResourceClient<Item>,
}

impl ItemClient {
    pub fn new(inner: ResourceClient<Item>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Item> for ItemClient {
    type Error = ItemError;

    fn inner(&self) -> &ResourceClient<Item> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e.into()
    }
}

impl ItemClient {
    #[instrument(skip(self, draft))]
    pub async fn create_item(&self, draft: ItemDraft) -> Result<Item, ItemError> {
        debug!(?draft, "create_item called");
        let params = draft.into_create()?;
        self.create(params).await
    }

    #[instrument(skip(self, draft))]
    pub async fn replace_item(&self, id: ItemId, draft: ItemDraft) -> Result<Item, ItemError> {
        debug!(?draft, "replace_item called");
        let params = draft.into_create()?;
        self.replace(id, params).await
    }

    #[instrument(skip(self, draft))]
    pub async fn merge_item(&self, id: ItemId, draft: ItemDraft) -> Result<Item, ItemError> {
        debug!(?draft, "merge_item called");
        let patch = draft.into_patch()?;
        self.merge(id, patch).await
    }

    /// Items whose name contains `needle`, ignoring case, in store order.
    #[instrument(skip(self))]
    pub async fn search(&self, needle: &str) -> Result<Vec<Item>, ItemError> {
        match self.ask(CatalogQuery::Search(needle.to_string())).await? {
            CatalogAnswer::Matches(items) => Ok(items),
            other => Err(unexpected(other)),
        }
    }

    /// Sum of all prices.
    #[instrument(skip(self))]
    pub async fn total(&self) -> Result<f64, ItemError> {
        match self.ask(CatalogQuery::Total).await? {
            CatalogAnswer::Total(total) => Ok(total),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn stats(&self) -> Result<CatalogStats, ItemError> {
        match self.ask(CatalogQuery::Stats).await? {
            CatalogAnswer::Stats(stats) => Ok(stats),
            other => Err(unexpected(other)),
        }
    }

    /// Deletes every item, returning how many were removed.
    #[instrument(skip(self))]
    pub async fn clear(&self) -> Result<usize, ItemError> {
        debug!("Sending request");
        self.inner.clear().await.map_err(Self::map_error)
    }

    async fn ask(&self, query: CatalogQuery) -> Result<CatalogAnswer, ItemError> {
        debug!(?query, "Sending query");
        self.inner.query(query).await.map_err(Self::map_error)
    }
}

fn unexpected(answer: CatalogAnswer) -> ItemError {
    ItemError::ActorCommunicationError(format!("unexpected catalog answer: {answer:?}"))
}
