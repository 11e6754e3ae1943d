//! # Item Actor
//!
//! The product catalog resource. Besides CRUD it answers [`CatalogQuery`] questions over the
//! whole collection (name search, price total, stats) and supports a bulk clear.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](resource_framework::ActorEntity) implementation for [`Item`]
//! - [`error`] - [`ItemError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client
//!
//! [`CatalogQuery`]: crate::model::CatalogQuery

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::ItemClient;
use crate::model::Item;
use resource_framework::ResourceActor;

/// Creates a new Item actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Item>, ItemClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, ItemClient::new(generic_client))
}
