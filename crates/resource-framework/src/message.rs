//! # Generic Messages
//!
//! This module defines the generic message types used for communication between
//! the `ResourceClient` and `ResourceActor`.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use std::num::NonZeroUsize;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// # Resource-Oriented Architecture
/// Each actor manages one type of resource (the [`ActorEntity`]). Instead of ad-hoc messages
/// per operation, every resource speaks the same small vocabulary:
///
/// - **Create**: validated [`ActorEntity::Create`] payload in, stored record out.
/// - **Get**: one record by id.
/// - **List**: the first `limit` records in store order, or all of them.
/// - **Replace**: full payload overwriting every mutable field (PUT).
/// - **Update**: partial [`ActorEntity::Update`] payload touching only present fields (PATCH).
/// - **Delete**: removes a record and hands it back.
/// - **Query**: a read-only [`ActorEntity::Query`] over the whole collection.
/// - **Clear**: empties the collection.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        limit: Option<NonZeroUsize>,
        respond_to: Response<Vec<T>>,
    },
    Replace {
        id: T::Id,
        params: T::Create,
        respond_to: Response<T>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<T>,
    },
    Query {
        query: T::Query,
        respond_to: Response<T::QueryResult>,
    },
    Clear {
        respond_to: Response<usize>,
    },
}
