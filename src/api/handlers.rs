//! API Handlers
//!
//! HTTP request handlers mapping each endpoint to a coordinator call.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::error::Result;
use crate::models::{
    CreateTaskRequest, HealthResponse, StatsResponse, Task, UpdateTaskRequest,
};
use crate::service::TaskService;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// The cache-aside coordinator
    pub service: Arc<TaskService>,
}

impl AppState {
    /// Creates a new AppState around the given coordinator.
    pub fn new(service: Arc<TaskService>) -> Self {
        Self { service }
    }
}

/// Handler for GET /tasks
///
/// Returns the serialized task list; on a cache hit these are the cached
/// bytes verbatim, so the body is emitted raw rather than re-encoded.
pub async fn list_tasks(State(state): State<AppState>) -> Result<Response> {
    let bytes = state.service.get_all().await?;
    Ok((
        [(header::CONTENT_TYPE, "application/json")],
        bytes,
    )
        .into_response())
}

/// Handler for POST /tasks
///
/// Creates a task and returns it with its assigned identifier.
pub async fn create_task(
    State(state): State<AppState>,
    Json(req): Json<CreateTaskRequest>,
) -> Result<(StatusCode, Json<Task>)> {
    let task = state.service.create(req.into_new_task()).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

/// Handler for PUT /tasks/{id}
///
/// The path identifier is authoritative; any id in the body is discarded.
pub async fn update_task(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    Json(req): Json<UpdateTaskRequest>,
) -> Result<Json<Task>> {
    let id = state.service.parse_id(&raw_id)?;
    let task = state.service.update(&id, req.into_patch()).await?;
    Ok(Json(task))
}

/// Handler for DELETE /tasks/{id}
pub async fn delete_task(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<StatusCode> {
    let id = state.service.parse_id(&raw_id)?;
    state.service.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Handler for GET /stats
///
/// Returns the coordinator's cache-effectiveness counters.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(StatsResponse::new(state.service.stats()))
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
