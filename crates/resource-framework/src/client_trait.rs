//! # ActorClient Trait
//!
//! Provides a common interface for resource-specific clients. Implementors supply the inner
//! `ResourceClient` and an error mapping; the full CRUD surface comes for free.
use crate::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;
use std::num::NonZeroUsize;

/// Trait for resource-specific clients to inherit the standard CRUD operations.
///
/// # Example
///
/// ```rust
/// use resource_framework::{ActorClient, ActorEntity, FrameworkError, ResourceClient, SequentialId};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
/// struct NoteId(u32);
/// impl std::fmt::Display for NoteId {
///     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { write!(f, "{}", self.0) }
/// }
/// impl SequentialId for NoteId {
///     fn first() -> Self { NoteId(1) }
///     fn successor(self) -> Self { NoteId(self.0 + 1) }
/// }
///
/// #[derive(Clone, Debug)]
/// struct Note { id: NoteId, text: String }
/// #[derive(Debug, thiserror::Error)]
/// #[error("{0}")]
/// struct NoteError(String);
///
/// impl ActorEntity for Note {
///     type Id = NoteId;
///     type Create = String;
///     type Update = String;
///     type Query = ();
///     type QueryResult = ();
///     type Context = ();
///     type Error = NoteError;
///
///     fn id(&self) -> NoteId { self.id }
///     fn from_create_params(id: NoteId, text: String) -> Result<Self, NoteError> {
///         Ok(Self { id, text })
///     }
///     fn on_update(&mut self, text: String) -> Result<(), NoteError> {
///         self.text = text;
///         Ok(())
///     }
///     fn query(_: &[Self], _: ()) {}
/// }
///
/// struct NoteClient {
///     inner: ResourceClient<Note>,
/// }
///
/// #[async_trait]
/// impl ActorClient<Note> for NoteClient {
///     type Error = NoteError;
///
///     fn inner(&self) -> &ResourceClient<Note> {
///         &self.inner
///     }
///
///     fn map_error(e: FrameworkError) -> Self::Error {
///         NoteError(e.to_string())
///     }
/// }
///
/// // create(), get(), list(), replace(), merge() and delete() are provided.
/// async fn usage(client: NoteClient) {
///     let _ = client.get(NoteId(1)).await;
///     let _ = client.delete(NoteId(1)).await;
/// }
/// ```
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Store a new record built from a validated payload.
    #[tracing::instrument(skip(self))]
    async fn create(&self, params: T::Create) -> Result<T, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().create(params).await.map_err(Self::map_error)
    }

    /// Fetch a record by ID. An unknown id is reported as not found.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<T, Self::Error> {
        tracing::debug!("Sending request");
        match self.inner().get(id).await {
            Ok(Some(item)) => Ok(item),
            Ok(None) => Err(Self::map_error(FrameworkError::NotFound(id.to_string()))),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// The first `limit` records in store order, or all of them.
    #[tracing::instrument(skip(self))]
    async fn list(&self, limit: Option<NonZeroUsize>) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list(limit).await.map_err(Self::map_error)
    }

    /// Overwrite every mutable field of a record (PUT).
    #[tracing::instrument(skip(self))]
    async fn replace(&self, id: T::Id, params: T::Create) -> Result<T, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().replace(id, params).await.map_err(Self::map_error)
    }

    /// Apply only the fields present in `update` (PATCH).
    #[tracing::instrument(skip(self))]
    async fn merge(&self, id: T::Id, update: T::Update) -> Result<T, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().update(id, update).await.map_err(Self::map_error)
    }

    /// Delete a record by ID, returning it.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<T, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }
}
