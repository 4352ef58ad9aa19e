//! Record Store Module
//!
//! The authoritative in-memory collection of task records. Everything the
//! service knows about tasks lives here; the cache layer only ever holds a
//! serialized snapshot of what this store returned.

mod store;


// Re-export public types
pub use store::{IdPolicy, NewTask, TaskPatch, TaskStore};
