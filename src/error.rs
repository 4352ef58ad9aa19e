//! Error types for the task service
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::models::TaskId;

// == Service Error Enum ==
/// Unified error type for the task service.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Task identifier absent from the store
    #[error("Task not found: {0}")]
    NotFound(TaskId),

    /// Path identifier does not parse under the active identifier policy
    #[error("Invalid task id: {0}")]
    MalformedId(String),

    /// Client-supplied policy requires an id in the create payload
    #[error("Missing task id in request payload")]
    MissingId,

    /// A cache get/set/delete failed mid-request
    #[error("Cache operation failed: {0}")]
    Cache(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<redis::RedisError> for ServiceError {
    fn from(err: redis::RedisError) -> Self {
        ServiceError::Cache(err.to_string())
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::MalformedId(_) | ServiceError::MissingId => StatusCode::BAD_REQUEST,
            ServiceError::Cache(_) | ServiceError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the task service.
pub type Result<T> = std::result::Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        let response = ServiceError::NotFound(TaskId::Num(7)).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_malformed_id_maps_to_400() {
        let response = ServiceError::MalformedId("abc".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_cache_error_maps_to_500() {
        let response = ServiceError::Cache("connection reset".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_error_display() {
        let err = ServiceError::NotFound(TaskId::Text("t-1".to_string()));
        assert_eq!(err.to_string(), "Task not found: t-1");
    }
}
