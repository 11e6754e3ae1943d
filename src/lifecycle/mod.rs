//! # System Lifecycle & Orchestration
//!
//! Individual actors are simple; wiring them together is where the complexity lives. This
//! module is the "conductor" that starts every service, hands out their clients and shuts them
//! down again.
//!
//! **Key Responsibilities:**
//! 1. **Actor Creation** - one actor per resource (todos, catalog items)
//! 2. **Model Loading** - the single load attempt of the [`InferenceAdapter`](crate::inference::InferenceAdapter)
//! 3. **Seeding** - the sample collections, when `SEED_DATA` is on
//! 4. **Graceful Shutdown** - drop the clients, then await every actor task
//!
//! ## The ServiceSystem Pattern
//!
//! ```rust,no_run
//! use crud_recipe::config::Config;
//! use crud_recipe::lifecycle::ServiceSystem;
//! use resource_framework::ActorClient;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let system = ServiceSystem::start(&Config::from_env()?).await?;
//!
//! let todos = system.todo_client.list(None).await?;
//! println!("{} todos", todos.len());
//!
//! system.shutdown().await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - closes the sender side of every channel
//! 2. **Actors detect closure** - `receiver.recv()` returns `None` once queued requests are served
//! 3. **Actors log their final state** and exit
//! 4. **Await completion** - a panicked actor task is reported as an error
//!
//! Clones of a client held elsewhere keep their actor alive; drop them before shutting down.

pub mod seed;
pub mod service_system;

pub use service_system::*;
