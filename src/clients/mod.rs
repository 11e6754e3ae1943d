//! Type-safe wrappers around [`ResourceClient`](resource_framework::ResourceClient).
//!
//! The generic CRUD surface comes from [`ActorClient`](resource_framework::ActorClient); the
//! wrappers add draft validation and the resource-specific calls.

pub mod item_client;
pub mod todo_client;

pub use item_client::*;
pub use todo_client::*;
