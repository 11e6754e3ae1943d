//! Error types for the Item actor.

use crate::validation::ValidationError;
use resource_framework::FrameworkError;
use thiserror::Error;

/// Errors that can occur during catalog operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ItemError {
    /// The requested item was not found.
    #[error("Item not found: {0}")]
    NotFound(String),

    /// The item payload was rejected before reaching the store.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for ItemError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => ItemError::NotFound(id),
            FrameworkError::EntityError(inner) => match inner.downcast::<ItemError>() {
                Ok(item_error) => *item_error,
                Err(other) => ItemError::ActorCommunicationError(other.to_string()),
            },
            other => ItemError::ActorCommunicationError(other.to_string()),
        }
    }
}
