//! Cache-Aside Coordination Module
//!
//! The protocol layer between the record store and the cache provider:
//! lookup-or-populate on reads, mutate-then-invalidate on writes.

mod coordinator;
mod stats;

// Re-export public types
pub use coordinator::TaskService;
pub use stats::{ServiceStats, StatsSnapshot};

// == Public Constants ==
/// The single cache key holding the serialized full task list.
pub const TASK_LIST_KEY: &str = "tasks";
