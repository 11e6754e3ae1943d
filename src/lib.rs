//! # CRUD Recipe
//!
//! Three small services on top of [`resource_framework`]:
//!
//! - a **todo list** with validated create / replace / merge and prefix listing,
//! - a **product catalog** with name search, price total and stats,
//! - an **iris prediction** endpoint wrapping a pre-trained linear classifier.
//!
//! ## Layout
//!
//! - [`model`] - records, request drafts and validated payloads
//! - [`validation`] - field rules and the structured [`ValidationError`](validation::ValidationError)
//! - [`todo_actor`], [`item_actor`] - the `ActorEntity` implementations and resource errors
//! - [`clients`] - type-safe wrappers around the actors' clients
//! - [`inference`] - model loading and the inference state machine
//! - [`api`] - one transport-agnostic function per HTTP route
//! - [`config`], [`lifecycle`] - environment settings and system orchestration

pub mod api;
pub mod clients;
pub mod config;
pub mod inference;
pub mod item_actor;
pub mod lifecycle;
pub mod model;
pub mod todo_actor;
pub mod validation;
