//! # Resource Framework
//!
//! Building blocks for in-memory resource services. It implements a
//! **Resource-Oriented Architecture (ROA)** on top of the **Actor Model**: every resource type
//! (a todo, a catalog item, ...) lives in its own actor, and every actor speaks the same small
//! CRUD vocabulary.
//!
//! ## Why ROA + Actor Model?
//!
//! ### Resource-Oriented Architecture (ROA)
//!
//! - Uniform operations on well-defined resources: create, get, list, replace, merge, delete
//! - Collection-level queries (search, aggregates) and a bulk clear
//! - The same API surface for every resource type
//!
//! ### Actor Model
//!
//! - Isolated state (no shared memory, no locks)
//! - Message-passing concurrency
//! - Sequential processing within each actor: concurrent callers observe a single-threaded
//!   collection, so id allocation and read-modify-write updates never race
//!
//! **Further Reading**:
//! - [Actor Model (Wikipedia)](https://en.wikipedia.org/wiki/Actor_model)
//! - [Actors in Rust](https://ryhl.io/blog/actors-with-tokio/) - Practical guide to implementing actors with Tokio
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - validation-free record logic: build, replace, merge, query
//! 2. **Storage Layer** ([`CollectionStore`]) - ordered records and `max + 1` id allocation
//! 3. **Runtime Layer** ([`ResourceActor`]) - message processing and concurrency
//! 4. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - type-safe communication
//!
//! ## Example
//!
//! ```rust
//! use resource_framework::{ActorEntity, ResourceActor, SequentialId};
//!
//! #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
//! struct NoteId(u32);
//! impl std::fmt::Display for NoteId {
//!     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { write!(f, "{}", self.0) }
//! }
//! impl SequentialId for NoteId {
//!     fn first() -> Self { NoteId(1) }
//!     fn successor(self) -> Self { NoteId(self.0 + 1) }
//! }
//!
//! #[derive(Clone, Debug)]
//! struct Note { id: NoteId, text: String }
//!
//! #[derive(Debug, thiserror::Error)]
//! #[error("note error")]
//! struct NoteError;
//!
//! impl ActorEntity for Note {
//!     type Id = NoteId;
//!     type Create = String;
//!     type Update = String;
//!     type Query = ();
//!     type QueryResult = usize;
//!     type Context = ();
//!     type Error = NoteError;
//!
//!     fn id(&self) -> NoteId { self.id }
//!     fn from_create_params(id: NoteId, text: String) -> Result<Self, NoteError> {
//!         Ok(Self { id, text })
//!     }
//!     fn on_update(&mut self, text: String) -> Result<(), NoteError> {
//!         self.text = text;
//!         Ok(())
//!     }
//!     fn query(records: &[Self], _: ()) -> usize { records.len() }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = ResourceActor::<Note>::new(10);
//!     tokio::spawn(actor.run(()));
//!
//!     let note = client.create("buy milk".into()).await.unwrap();
//!     assert_eq!(note.id, NoteId(1));
//!     assert_eq!(client.query(()).await.unwrap(), 1);
//! }
//! ```
//!
//! ## Context Injection Pattern
//!
//! Dependencies are injected at **runtime** via `run(context)`, not at construction time, and
//! handed to the async `on_create` / `on_delete` hooks. Resources without dependencies use `()`.
//!
//! ## Testing
//!
//! The [`mock`] module provides a `MockClient` that answers a real `ResourceClient<T>` from a
//! queue of expectations, so client logic can be unit tested without spawning actors.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod store;
pub mod tracing;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::{ActorEntity, SequentialId};
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
pub use store::CollectionStore;
