//! Handler tests for the Todos domain
//!
//! These run the todos router against the in-memory repository:
//! - Request decoding and validation
//! - Response shapes and status codes
//! - The `{"error": ...}` envelope on failures

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_todos::*;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt; // For oneshot()

// Helper to parse JSON response body
async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn app() -> Router {
    handlers::router(TodoService::new(InMemoryTodoRepository::new()))
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn create(app: &Router, title: &str) -> Todo {
    let response = app
        .clone()
        .oneshot(json_request("POST", "/", json!({ "title": title })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    json_body(response.into_body()).await
}

#[tokio::test]
async fn test_create_todo_returns_201() {
    let app = app();

    let response = app
        .oneshot(json_request("POST", "/", json!({ "title": "Buy milk" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["title"], "Buy milk");
    assert_eq!(body["completed"], false);
    assert!(body["id"].is_string());
    assert!(body["createdAt"].is_string());
    assert_eq!(body["createdAt"], body["updatedAt"]);
}

#[tokio::test]
async fn test_create_ignores_supplied_completed() {
    let app = app();

    let response = app
        .oneshot(json_request(
            "POST",
            "/",
            json!({ "title": "Already done?", "completed": true }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let todo: Todo = json_body(response.into_body()).await;
    assert!(!todo.completed);
}

#[tokio::test]
async fn test_create_without_title_is_400() {
    let app = app();

    let response = app
        .oneshot(json_request("POST", "/", json!({ "completed": false })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = json_body(response.into_body()).await;
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_create_with_malformed_json_is_400() {
    let app = app();

    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from("{\"title\": "))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_is_newest_first() {
    let app = app();

    let first = create(&app, "first").await;
    let second = create(&app, "second").await;

    let response = app.oneshot(empty_request("GET", "/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let todos: Vec<Todo> = json_body(response.into_body()).await;
    let ids: Vec<_> = todos.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![second.id, first.id]);
}

#[tokio::test]
async fn test_get_todo() {
    let app = app();
    let created = create(&app, "Read a book").await;

    let response = app
        .oneshot(empty_request("GET", &format!("/{}", created.id)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let todo: Todo = json_body(response.into_body()).await;
    assert_eq!(todo, created);
}

#[tokio::test]
async fn test_get_missing_todo_is_404() {
    let app = app();

    let response = app
        .oneshot(empty_request("GET", &format!("/{}", uuid::Uuid::now_v7())))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body, json!({ "error": "Todo not found" }));
}

#[tokio::test]
async fn test_get_with_invalid_uuid_is_400() {
    let app = app();

    let response = app
        .oneshot(empty_request("GET", "/not-a-uuid"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_patch_completed_only() {
    let app = app();
    let created = create(&app, "Walk the dog").await;

    let response = app
        .oneshot(json_request(
            "PATCH",
            &format!("/{}", created.id),
            json!({ "completed": true }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let todo: Todo = json_body(response.into_body()).await;
    assert!(todo.completed);
    assert_eq!(todo.title, "Walk the dog");
    assert_eq!(todo.created_at, created.created_at);
    assert!(todo.updated_at >= created.updated_at);
}

#[tokio::test]
async fn test_empty_patch_returns_unchanged_todo() {
    let app = app();
    let created = create(&app, "Untouched").await;

    let response = app
        .oneshot(json_request("PATCH", &format!("/{}", created.id), json!({})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let todo: Todo = json_body(response.into_body()).await;
    assert_eq!(todo, created);
}

#[tokio::test]
async fn test_patch_missing_todo_is_404() {
    let app = app();

    let response = app
        .oneshot(json_request(
            "PATCH",
            &format!("/{}", uuid::Uuid::now_v7()),
            json!({ "title": "Nope" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["error"], "Todo not found");
}

#[tokio::test]
async fn test_patch_with_wrong_type_is_400() {
    let app = app();
    let created = create(&app, "Typed").await;

    let response = app
        .oneshot(json_request(
            "PATCH",
            &format!("/{}", created.id),
            json!({ "completed": "yes" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_patch_with_null_is_400() {
    let app = app();
    let created = create(&app, "Keep me").await;

    for body in [json!({ "title": null }), json!({ "completed": null })] {
        let response = app
            .clone()
            .oneshot(json_request("PATCH", &format!("/{}", created.id), body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = json_body(response.into_body()).await;
        assert!(body["error"].is_string());
    }

    let response = app
        .oneshot(empty_request("GET", &format!("/{}", created.id)))
        .await
        .unwrap();
    let todo: Todo = json_body(response.into_body()).await;
    assert_eq!(todo, created);
}

#[tokio::test]
async fn test_delete_twice() {
    let app = app();
    let created = create(&app, "Temporary").await;
    let uri = format!("/{}", created.id);

    let response = app
        .clone()
        .oneshot(empty_request("DELETE", &uri))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert!(bytes.is_empty());

    let response = app
        .clone()
        .oneshot(empty_request("DELETE", &uri))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app.oneshot(empty_request("GET", &uri)).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
