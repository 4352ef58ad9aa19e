//! Request DTOs for the task service API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

use crate::models::TaskId;
use crate::store::{NewTask, TaskPatch};

/// Request body for POST /tasks.
///
/// Under the server-assigned identifier policy any `id` in the payload is
/// ignored; under the client-supplied policy it is required.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTaskRequest {
    /// Candidate identifier (client-supplied policy only)
    #[serde(default)]
    pub id: Option<TaskId>,
    /// Task name
    #[serde(alias = "title")]
    pub name: String,
    /// Completion flag, defaults to false
    #[serde(default)]
    pub completed: bool,
}

impl CreateTaskRequest {
    /// Converts the request into a store-level candidate record.
    pub fn into_new_task(self) -> NewTask {
        NewTask {
            id: self.id,
            name: self.name,
            completed: self.completed,
        }
    }
}

/// Request body for PUT /tasks/{id}.
///
/// An `id` in the payload is accepted but never used: the path-supplied
/// identifier is authoritative.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTaskRequest {
    /// Ignored; the path identifier wins
    #[serde(default)]
    pub id: Option<TaskId>,
    /// Replacement task name
    #[serde(alias = "title")]
    pub name: String,
    /// Replacement completion flag
    #[serde(default)]
    pub completed: bool,
}

impl UpdateTaskRequest {
    /// Converts the request into a store-level patch, dropping any payload id.
    pub fn into_patch(self) -> TaskPatch {
        TaskPatch {
            name: self.name,
            completed: self.completed,
        }
    }
}
