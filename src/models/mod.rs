//! Data model and DTOs for the task service
//!
//! Defines the task record itself plus the request/response bodies used for
//! serializing/deserializing HTTP traffic.

pub mod requests;
pub mod responses;
pub mod task;

// Re-export commonly used types
pub use requests::{CreateTaskRequest, UpdateTaskRequest};
pub use responses::{ErrorResponse, HealthResponse, StatsResponse};
pub use task::{Task, TaskId};
