//! Pure data structures (records, drafts and validated payloads) for every resource.

pub mod item;
pub mod prediction;
pub mod todo;

pub use item::*;
pub use prediction::*;
pub use todo::*;
