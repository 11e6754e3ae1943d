//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the `tracing_subscriber` formatter used by every binary built on
//! this framework.
//!
//! ## Configuration
//!
//! Log levels come from `RUST_LOG`. The compact format hides the module prefix
//! (`with_target(false)`): actors tag their lines with an `entity_type` field instead.
//!
//! ```bash
//! # Lifecycle and mutations only
//! RUST_LOG=info cargo run
//!
//! # Every request, with its payload
//! RUST_LOG=debug cargo run
//!
//! # Only the framework
//! RUST_LOG=resource_framework=debug cargo run
//! ```
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: `Actor started`, and `Shutdown` with the final collection size
//! - **Mutations** (`info`): `Created`, `Replaced`, `Updated`, `Deleted`, `Cleared`
//! - **Reads** (`debug`): `Get`, `List`, `Query`
//! - **Failures** (`warn`): the entity id and the error that stopped the request
//!
//! With `RUST_LOG=info` a short session looks like:
//!
//! ```text
//! INFO Actor started entity_type="Todo"
//! INFO Created entity_type="Todo" id=6 size=6
//! INFO Updated entity_type="Item" id=3
//! WARN Not found entity_type="Item" id=42
//! INFO Shutdown entity_type="Todo" size=6
//! ```

/// Initializes the global subscriber. Call once, at the top of `main`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // entity_type replaces the module path
        .compact()
        .init();
}
