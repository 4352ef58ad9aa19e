//! Task Store Module
//!
//! Authoritative, mutex-guarded collection of task records. Sole source of
//! truth; the cache layer never holds a reference into this map.

use std::collections::HashMap;
use std::str::FromStr;
use std::sync::{Mutex, MutexGuard};

use crate::error::{Result, ServiceError};
use crate::models::{Task, TaskId};

// == Identifier Policy ==
/// Rule governing how record identifiers are assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdPolicy {
    /// The store assigns monotonically increasing numeric ids; caller ids are
    /// ignored.
    ServerAssigned,
    /// The caller supplies a string id in the payload; create and update both
    /// use it as the key.
    ClientSupplied,
}

impl IdPolicy {
    /// Parses a path-supplied identifier under this policy.
    ///
    /// Server-assigned ids must be decimal integers; client-supplied ids are
    /// any non-empty string.
    pub fn parse_id(&self, raw: &str) -> Result<TaskId> {
        match self {
            IdPolicy::ServerAssigned => raw
                .parse::<u64>()
                .map(TaskId::Num)
                .map_err(|_| ServiceError::MalformedId(raw.to_string())),
            IdPolicy::ClientSupplied => {
                if raw.is_empty() {
                    Err(ServiceError::MalformedId(raw.to_string()))
                } else {
                    Ok(TaskId::Text(raw.to_string()))
                }
            }
        }
    }
}

impl FromStr for IdPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "server" => Ok(IdPolicy::ServerAssigned),
            "client" => Ok(IdPolicy::ClientSupplied),
            other => Err(format!("unknown id policy: {}", other)),
        }
    }
}

// == Candidate and Patch Types ==
/// A candidate record for insertion; the store decides the final identifier.
#[derive(Debug, Clone)]
pub struct NewTask {
    /// Caller-proposed identifier (client-supplied policy only)
    pub id: Option<TaskId>,
    /// Task name
    pub name: String,
    /// Completion flag
    pub completed: bool,
}

/// Replacement values for a task's mutable fields.
#[derive(Debug, Clone)]
pub struct TaskPatch {
    /// Replacement name
    pub name: String,
    /// Replacement completion flag
    pub completed: bool,
}

// == Task Store ==
/// Mutex-guarded map of task records keyed by identifier.
///
/// Every operation takes the exclusive lock for its full duration, including
/// the list snapshot copy, so no writer can observe or produce a torn read.
/// All operations are in-memory and bounded; the lock is released before any
/// serialization or cache I/O happens in the layers above.
#[derive(Debug)]
pub struct TaskStore {
    inner: Mutex<StoreInner>,
    policy: IdPolicy,
}

#[derive(Debug)]
struct StoreInner {
    tasks: HashMap<TaskId, Task>,
    next_id: u64,
}

impl TaskStore {
    // == Constructor ==
    /// Creates an empty store using the given identifier policy.
    pub fn new(policy: IdPolicy) -> Self {
        Self {
            inner: Mutex::new(StoreInner {
                tasks: HashMap::new(),
                next_id: 1,
            }),
            policy,
        }
    }

    /// Returns the active identifier policy.
    pub fn policy(&self) -> IdPolicy {
        self.policy
    }

    fn locked(&self) -> MutexGuard<'_, StoreInner> {
        // A poisoned lock means a store operation panicked mid-mutation;
        // the in-memory map cannot be trusted past that point.
        self.inner.lock().expect("task store lock poisoned")
    }

    // == List ==
    /// Returns a snapshot copy of all records.
    ///
    /// Map iteration order is not guaranteed; callers must rely only on
    /// set-equality.
    pub fn list(&self) -> Vec<Task> {
        self.locked().tasks.values().cloned().collect()
    }

    // == Create ==
    /// Inserts a record, assigning its identifier per the active policy, and
    /// returns the stored record.
    ///
    /// Never fails for well-formed input: under the server-assigned policy
    /// any caller-proposed id is ignored; under the client-supplied policy a
    /// missing id is the one malformed-input case.
    pub fn create(&self, candidate: NewTask) -> Result<Task> {
        let mut inner = self.locked();

        let id = match self.policy {
            IdPolicy::ServerAssigned => {
                let id = TaskId::Num(inner.next_id);
                inner.next_id += 1;
                id
            }
            IdPolicy::ClientSupplied => candidate.id.ok_or(ServiceError::MissingId)?,
        };

        let task = Task {
            id: id.clone(),
            name: candidate.name,
            completed: candidate.completed,
        };
        inner.tasks.insert(id, task.clone());
        Ok(task)
    }

    // == Update ==
    /// Replaces the mutable fields of an existing record and returns it.
    ///
    /// The stored identifier is authoritative and preserved.
    pub fn update(&self, id: &TaskId, patch: TaskPatch) -> Result<Task> {
        let mut inner = self.locked();

        match inner.tasks.get_mut(id) {
            Some(task) => {
                task.name = patch.name;
                task.completed = patch.completed;
                Ok(task.clone())
            }
            None => Err(ServiceError::NotFound(id.clone())),
        }
    }

    // == Delete ==
    /// Removes a record by identifier.
    pub fn delete(&self, id: &TaskId) -> Result<()> {
        let mut inner = self.locked();

        if inner.tasks.remove(id).is_some() {
            Ok(())
        } else {
            Err(ServiceError::NotFound(id.clone()))
        }
    }

    // == Length ==
    /// Returns the current number of records.
    pub fn len(&self) -> usize {
        self.locked().tasks.len()
    }

    /// Returns true if the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.locked().tasks.is_empty()
    }
}
