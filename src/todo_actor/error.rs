//! Error types for the Todo actor.

use crate::validation::ValidationError;
use resource_framework::FrameworkError;
use thiserror::Error;

/// Errors that can occur during todo operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TodoError {
    /// The requested todo was not found.
    #[error("Todo not found: {0}")]
    NotFound(String),

    /// The todo payload was rejected before reaching the store.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for TodoError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => TodoError::NotFound(id),
            FrameworkError::EntityError(inner) => match inner.downcast::<TodoError>() {
                Ok(todo_error) => *todo_error,
                Err(other) => TodoError::ActorCommunicationError(other.to_string()),
            },
            other => TodoError::ActorCommunicationError(other.to_string()),
        }
    }
}
