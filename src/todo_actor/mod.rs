//! # Todo Actor
//!
//! The todo list resource: plain CRUD, no collection queries.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](resource_framework::ActorEntity) implementation for [`Todo`]
//! - [`error`] - [`TodoError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use crud_recipe::model::{Priority, TodoCreate};
//! use crud_recipe::todo_actor;
//! use resource_framework::ActorClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = todo_actor::new(8);
//!     tokio::spawn(actor.run(()));
//!
//!     let todo = client.create(TodoCreate::new("Shop", "milk", Priority::High)?).await?;
//!     assert_eq!(todo.id.0, 1);
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::TodoClient;
use crate::model::Todo;
use resource_framework::ResourceActor;

/// Creates a new Todo actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Todo>, TodoClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, TodoClient::new(generic_client))
}
