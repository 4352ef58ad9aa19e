//! Integration Tests for API Endpoints
//!
//! Tests the full request/response cycle for each endpoint, including
//! cache-aside behavior observable through the HTTP surface.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use task_cache::api::create_router;
use task_cache::cache::MemoryCache;
use task_cache::service::TaskService;
use task_cache::store::{IdPolicy, TaskStore};
use task_cache::AppState;

// == Helper Functions ==

fn create_test_app(policy: IdPolicy) -> Router {
    let service = TaskService::new(
        TaskStore::new(policy),
        Arc::new(MemoryCache::new()),
        Duration::from_secs(600),
    );
    create_router(AppState::new(Arc::new(service)))
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_to_bytes(body: Body) -> Vec<u8> {
    axum::body::to_bytes(body, usize::MAX).await.unwrap().to_vec()
}

async fn post_task(app: &Router, body: Value) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/tasks")
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    (status, body_to_json(response.into_body()).await)
}

async fn get_tasks_raw(app: &Router) -> (StatusCode, Vec<u8>) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/tasks")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    (status, body_to_bytes(response.into_body()).await)
}

async fn get_tasks(app: &Router) -> Vec<Value> {
    let (status, bytes) = get_tasks_raw(app).await;
    assert_eq!(status, StatusCode::OK);
    serde_json::from_slice::<Value>(&bytes)
        .unwrap()
        .as_array()
        .unwrap()
        .clone()
}

fn ids_of(tasks: &[Value]) -> Vec<Value> {
    let mut ids: Vec<Value> = tasks.iter().map(|t| t["id"].clone()).collect();
    ids.sort_by_key(|id| id.to_string());
    ids
}

// == Full Lifecycle ==

#[tokio::test]
async fn test_full_crud_lifecycle() {
    let app = create_test_app(IdPolicy::ServerAssigned);

    // Create two tasks; ids are server-assigned in order
    let (status, a) = post_task(&app, json!({"name": "A"})).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(a["id"], 1);
    assert_eq!(a["name"], "A");
    assert_eq!(a["completed"], false);

    let (status, b) = post_task(&app, json!({"name": "B"})).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(b["id"], 2);

    // List is set-equal to both tasks (order unspecified)
    let tasks = get_tasks(&app).await;
    assert_eq!(tasks.len(), 2);
    assert_eq!(ids_of(&tasks), vec![json!(1), json!(2)]);

    // Update task 1
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri("/tasks/1")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"name":"A2","completed":true}"#))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_to_json(response.into_body()).await;
    assert_eq!(updated["id"], 1);
    assert_eq!(updated["name"], "A2");
    assert_eq!(updated["completed"], true);

    // Delete task 2
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/tasks/2")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // Only task 1 remains, with its updated fields
    let tasks = get_tasks(&app).await;
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0]["id"], 1);
    assert_eq!(tasks[0]["name"], "A2");

    // Deleting task 2 again is not found
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/tasks/2")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// == Caching Behavior ==

#[tokio::test]
async fn test_repeated_gets_are_byte_identical() {
    let app = create_test_app(IdPolicy::ServerAssigned);
    post_task(&app, json!({"name": "A"})).await;
    post_task(&app, json!({"name": "B"})).await;

    let (_, first) = get_tasks_raw(&app).await;
    let (_, second) = get_tasks_raw(&app).await;
    let (_, third) = get_tasks_raw(&app).await;

    assert_eq!(first, second);
    assert_eq!(second, third);
}

#[tokio::test]
async fn test_write_invalidates_cached_list() {
    let app = create_test_app(IdPolicy::ServerAssigned);
    post_task(&app, json!({"name": "A"})).await;

    // Populate the cache
    assert_eq!(get_tasks(&app).await.len(), 1);

    // A write must make the next read reflect the store again
    post_task(&app, json!({"name": "B"})).await;
    assert_eq!(get_tasks(&app).await.len(), 2);
}

#[tokio::test]
async fn test_failed_write_does_not_discard_cached_list() {
    let app = create_test_app(IdPolicy::ServerAssigned);
    post_task(&app, json!({"name": "A"})).await;

    let (_, cached) = get_tasks_raw(&app).await;

    // Not-found delete leaves the cache untouched
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/tasks/99")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let (_, after) = get_tasks_raw(&app).await;
    assert_eq!(cached, after);
}

#[tokio::test]
async fn test_stats_reflect_cache_traffic() {
    let app = create_test_app(IdPolicy::ServerAssigned);

    get_tasks(&app).await; // miss
    get_tasks(&app).await; // hit
    get_tasks(&app).await; // hit

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/stats")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let stats = body_to_json(response.into_body()).await;
    assert_eq!(stats["cache_misses"], 1);
    assert_eq!(stats["cache_hits"], 2);
    assert!(stats.get("hit_rate").is_some());
}

// == Identifier Policies ==

#[tokio::test]
async fn test_client_supplied_policy_roundtrip() {
    let app = create_test_app(IdPolicy::ClientSupplied);

    let (status, task) =
        post_task(&app, json!({"id": "errand-1", "name": "groceries"})).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(task["id"], "errand-1");

    // The path identifier overrides any id in the update payload
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri("/tasks/errand-1")
                .header("content-type", "application/json")
                .body(Body::from(
                    r#"{"id":"something-else","name":"groceries+","completed":true}"#,
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_to_json(response.into_body()).await;
    assert_eq!(updated["id"], "errand-1");
    assert_eq!(updated["completed"], true);

    let tasks = get_tasks(&app).await;
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0]["id"], "errand-1");
}

#[tokio::test]
async fn test_client_supplied_policy_requires_id() {
    let app = create_test_app(IdPolicy::ClientSupplied);

    let (status, body) = post_task(&app, json!({"name": "no id"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.get("error").is_some());
}

#[tokio::test]
async fn test_title_alias_accepted() {
    let app = create_test_app(IdPolicy::ServerAssigned);

    let (status, task) = post_task(&app, json!({"title": "aliased"})).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(task["name"], "aliased");
}

// == Error Responses ==

#[tokio::test]
async fn test_malformed_id_rejected() {
    let app = create_test_app(IdPolicy::ServerAssigned);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/tasks/not-a-number")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_to_json(response.into_body()).await;
    assert!(json.get("error").is_some());
}

#[tokio::test]
async fn test_malformed_body_rejected() {
    let app = create_test_app(IdPolicy::ServerAssigned);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/tasks")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"not json"#))
                .unwrap(),
        )
        .await
        .unwrap();

    // Axum returns 400 for syntax errors, 422 for schema errors
    assert!(
        response.status() == StatusCode::BAD_REQUEST
            || response.status() == StatusCode::UNPROCESSABLE_ENTITY
    );
}

#[tokio::test]
async fn test_update_unknown_id_not_found() {
    let app = create_test_app(IdPolicy::ServerAssigned);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri("/tasks/7")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"name":"ghost"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// == Full-Server Test (OS-assigned port) ==

#[tokio::test]
async fn test_server_on_dynamic_port() {
    let app = create_test_app(IdPolicy::ServerAssigned);

    // Port 0 avoids collisions across parallel test runs
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let client = reqwest::Client::new();
    let base = format!("http://{}", addr);

    let created: Value = client
        .post(format!("{}/tasks", base))
        .json(&json!({"name": "over the wire"}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(created["id"], 1);

    let tasks: Value = client
        .get(format!("{}/tasks", base))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(tasks.as_array().unwrap().len(), 1);

    server.abort();
}
