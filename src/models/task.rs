//! Task record types
//!
//! Defines the task record held by the store and its JSON wire shape.

use std::fmt;

use serde::{Deserialize, Serialize};

// == Task Id ==
/// Identifier of a task record.
///
/// Serialized untagged, so the wire value is a bare number (server-assigned
/// policy) or a bare string (client-supplied policy).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TaskId {
    /// Server-assigned numeric identifier
    Num(u64),
    /// Client-supplied string identifier
    Text(String),
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskId::Num(n) => write!(f, "{}", n),
            TaskId::Text(s) => f.write_str(s),
        }
    }
}

// == Task ==
/// A single task record.
///
/// The textual field is accepted as either `name` or `title` on input;
/// responses always emit `name`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Record identifier, authoritative once stored
    pub id: TaskId,
    /// Human-readable task name
    #[serde(alias = "title")]
    pub name: String,
    /// Completion flag
    #[serde(default)]
    pub completed: bool,
}
