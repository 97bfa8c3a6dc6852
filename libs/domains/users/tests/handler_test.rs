//! Handler tests for Users domain
//!
//! These tests drive the users router directly:
//! - Request deserialization and validation
//! - Envelope serialization
//! - HTTP status codes
//! - Error responses

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use core_config::pagination::PaginationConfig;
use domain_users::*;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt; // For oneshot()

// Helper to parse JSON response body
async fn json_body(body: Body) -> Value {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn app() -> (Router, InMemoryUserRepository) {
    let repo = InMemoryUserRepository::new();
    let service = UserService::new(repo.clone());
    (handlers::router(service), repo)
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_list_users_returns_paginated_envelope() {
    let (app, _) = app();

    let response = app.oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"].as_array().unwrap().len(), 4);
    assert_eq!(
        body["pagination"],
        json!({"page": 1, "limit": 10, "total": 4, "totalPages": 1})
    );
    assert_eq!(body["data"][0]["email"], "john@example.com");
    assert!(body["data"][0]["createdAt"].is_string());
}

#[tokio::test]
async fn test_list_users_second_page() {
    let (app, _) = app();

    let response = app.oneshot(get("/?page=2&limit=3")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
    assert_eq!(body["data"][0]["email"], "bob@example.com");
    assert_eq!(body["pagination"]["totalPages"], 2);
}

#[tokio::test]
async fn test_list_users_clamps_limit() {
    let repo = InMemoryUserRepository::new();
    let service = UserService::with_pagination(
        repo,
        PaginationConfig {
            default_page: 1,
            default_limit: 10,
            max_limit: 2,
        },
    );
    let app = handlers::router(service);

    let response = app.oneshot(get("/?limit=50")).await.unwrap();
    let body = json_body(response.into_body()).await;
    assert_eq!(body["pagination"]["limit"], 2);
    assert_eq!(body["data"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_list_users_clamps_limit_beyond_u32() {
    let (app, _) = app();

    let response = app.oneshot(get("/?limit=99999999999")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["pagination"]["limit"], 100);
    assert_eq!(body["data"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_list_users_rejects_bad_paging() {
    for uri in ["/?page=0", "/?limit=0", "/?page=abc", "/?limit=-3"] {
        let (app, _) = app();
        let response = app.oneshot(get(uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "uri {}", uri);

        let body = json_body(response.into_body()).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "VALIDATION_ERROR");
    }
}

#[tokio::test]
async fn test_create_user_handler_returns_201() {
    let (app, repo) = app();

    let response = app
        .oneshot(json_request(
            "POST",
            "/",
            json!({"name": "Eve Adams", "email": "eve@example.com"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "User created successfully");
    assert_eq!(body["data"]["name"], "Eve Adams");
    assert_eq!(body["data"]["createdAt"], body["data"]["updatedAt"]);

    assert_eq!(repo.find_all().await.unwrap().len(), 5);
}

#[tokio::test]
async fn test_create_user_handler_validates_input() {
    let (app, repo) = app();

    let response = app
        .oneshot(json_request(
            "POST",
            "/",
            json!({"name": "", "email": "not-an-email"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["error"], "VALIDATION_ERROR");
    assert!(body["details"]["name"].is_array());
    assert!(body["details"]["email"].is_array());
    assert_eq!(repo.find_all().await.unwrap().len(), 4);
}

#[tokio::test]
async fn test_create_user_handler_rejects_malformed_json() {
    let (app, _) = app();

    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from("{\"name\": "))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["error"], "INVALID_JSON");
}

#[tokio::test]
async fn test_create_user_handler_conflicts_on_duplicate_email() {
    let (app, repo) = app();

    let response = app
        .oneshot(json_request(
            "POST",
            "/",
            json!({"name": "Another John", "email": "john@example.com"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "DUPLICATE_RESOURCE");
    assert_eq!(body["message"], "User with this email already exists");
    assert_eq!(repo.find_all().await.unwrap().len(), 4);
}

#[tokio::test]
async fn test_get_user_handler() {
    let (app, repo) = app();
    let jane = repo.find_all().await.unwrap().remove(1);

    let response = app
        .oneshot(get(&format!("/{}", jane.id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["data"]["id"], jane.id.to_string());
    assert_eq!(body["data"]["name"], "Jane Smith");
    assert!(body.get("message").is_none());
}

#[tokio::test]
async fn test_get_user_handler_not_found() {
    let (app, _) = app();
    let id = uuid::Uuid::new_v4();

    let response = app.oneshot(get(&format!("/{}", id))).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["error"], "NOT_FOUND");
    assert_eq!(body["message"], format!("User with id {} not found", id));
}

#[tokio::test]
async fn test_get_user_handler_invalid_uuid() {
    let (app, _) = app();

    let response = app.oneshot(get("/not-a-uuid")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["error"], "INVALID_UUID");
}

#[tokio::test]
async fn test_update_user_handler() {
    let (app, repo) = app();
    let john = repo.find_all().await.unwrap().remove(0);

    let response = app
        .oneshot(json_request(
            "PUT",
            &format!("/{}", john.id),
            json!({"name": "John Updated"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["message"], "User updated successfully");
    assert_eq!(body["data"]["name"], "John Updated");
    assert_eq!(body["data"]["email"], "john@example.com");
}

#[tokio::test]
async fn test_update_user_handler_conflict_and_not_found() {
    let (app, repo) = app();
    let john = repo.find_all().await.unwrap().remove(0);

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/{}", john.id),
            json!({"email": "alice@example.com"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let response = app
        .oneshot(json_request(
            "PUT",
            &format!("/{}", uuid::Uuid::new_v4()),
            json!({"name": "Nobody"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_user_handler_validates_input() {
    let (app, repo) = app();
    let john = repo.find_all().await.unwrap().remove(0);

    let response = app
        .oneshot(json_request(
            "PUT",
            &format!("/{}", john.id),
            json!({"name": "x".repeat(101)}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_user_handler() {
    let (app, repo) = app();
    let bob = repo.find_all().await.unwrap().remove(3);

    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/{}", bob.id))
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert!(bytes.is_empty());

    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/{}", bob.id))
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[test]
fn test_api_doc_lists_user_paths() {
    use utoipa::OpenApi;

    let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
    assert!(doc["paths"].get("/{id}").is_some());
    assert!(doc["components"]["schemas"].get("User").is_some());
}
