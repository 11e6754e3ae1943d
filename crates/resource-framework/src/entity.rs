//! # ActorEntity Trait
//!
//! The `ActorEntity` trait defines the contract every resource (todo, catalog item, …) must
//! implement to be managed by the generic `ResourceActor`. It names the payload types for
//! create / full replace / partial merge, a collection-level query type, the context injected
//! into the async hooks, and the entity's error type.
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::on_replace`] rebuilds the record from a full payload, keeping its id.
//! - [`ActorEntity::on_create`] and [`ActorEntity::on_delete`] do nothing by default.
//!
//! You only implement what your resource needs; the actor supplies the rest.

use async_trait::async_trait;
use std::fmt::{Debug, Display};

/// An identifier the store can allocate on its own.
///
/// New records get `max(existing) + 1`; an empty collection starts at [`SequentialId::first`].
pub trait SequentialId: Copy + Ord + Send + Sync + Display + Debug + 'static {
    /// The id handed to the first record of an empty collection.
    fn first() -> Self;

    /// The id immediately after `self`.
    fn successor(self) -> Self;
}

/// Trait that any resource entity must implement to be managed by ResourceActor.
///
/// # Architecture Note
/// By defining a contract (`ActorEntity`) that every resource type must satisfy, we write the
/// `ResourceActor` logic *once* and reuse it for todos and catalog items alike.
///
/// Associated types keep payloads apart: a `Todo` actor only accepts a `TodoCreate`, and the
/// compiler rejects an `ItemCreate` sent its way.
///
/// # Validation
/// `Create` and `Update` are expected to be *already validated* types. The actor never sees raw
/// input; by the time a payload reaches the store it can only describe a legal record.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    type Id: SequentialId;

    /// The full payload used by create and replace (DTO - Data Transfer Object).
    type Create: Send + Sync + Debug;

    /// The partial payload used by merge. Absent fields must leave the record untouched.
    type Update: Send + Sync + Debug;

    /// A read-only question about the whole collection (e.g. "sum of prices").
    type Query: Send + Sync + Debug;

    /// The answer to a [`ActorEntity::Query`].
    type QueryResult: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the async hooks.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this entity.
    ///
    /// One error enum per actor rather than one per message: clients match on a single type.
    type Error: std::error::Error + Send + Sync + 'static;

    /// The record's identifier. Immutable after creation.
    fn id(&self) -> Self::Id;

    /// Construct the full Entity from the ID and Payload.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Overwrite every mutable field from a full payload.
    fn on_replace(&mut self, params: Self::Create) -> Result<(), Self::Error> {
        *self = Self::from_create_params(self.id(), params)?;
        Ok(())
    }

    /// Apply the fields present in a partial payload.
    fn on_update(&mut self, update: Self::Update) -> Result<(), Self::Error>;

    /// Answer a collection-level query over the records in store order.
    fn query(records: &[Self], query: Self::Query) -> Self::QueryResult;

    // --- Lifecycle Hooks (Async) ---

    /// Called after the entity is built and before it is stored.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called immediately before the entity is removed from the store.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }
}
