//! API Module
//!
//! HTTP handlers and routing for the task service REST API.
//!
//! # Endpoints
//! - `GET /tasks` - List all tasks (cache-aside)
//! - `POST /tasks` - Create a task
//! - `PUT /tasks/:id` - Update a task
//! - `DELETE /tasks/:id` - Delete a task
//! - `GET /stats` - Cache-effectiveness counters
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
