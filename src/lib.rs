//! Task Cache - A task record service with cache-aside reads
//!
//! CRUD over an authoritative in-memory task store, fronted by a
//! TTL-limited, write-invalidated cache of the serialized task list.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod service;
pub mod store;

pub use api::AppState;
pub use config::Config;
pub use service::TaskService;
