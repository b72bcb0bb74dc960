//! End-to-end tests for the item endpoints, driven through the full router.

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use item_tracker_backend::{
    create_router,
    domain::models::item::{Item, ItemDraft},
    domain::ItemService,
    initialize_backend,
    storage::ItemStorage,
    AppState, ServerConfig,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

const ALLOWED_ORIGIN: &str = "http://localhost:3000";

fn test_app() -> Router {
    let cors = ServerConfig::default()
        .cors_layer()
        .expect("default CORS config is valid");
    create_router(initialize_backend(), cors)
}

/// Storage whose every call fails, to exercise the 500 path
struct FailingStorage;

impl ItemStorage for FailingStorage {
    fn list(&self) -> anyhow::Result<Vec<Item>> {
        Err(anyhow::anyhow!("lock poisoned"))
    }

    fn get(&self, _id: i64) -> anyhow::Result<Option<Item>> {
        Err(anyhow::anyhow!("lock poisoned"))
    }

    fn create(&self, _draft: ItemDraft) -> anyhow::Result<Item> {
        Err(anyhow::anyhow!("lock poisoned"))
    }

    fn update(&self, _id: i64, _draft: ItemDraft) -> anyhow::Result<Option<Item>> {
        Err(anyhow::anyhow!("lock poisoned"))
    }

    fn delete(&self, _id: i64) -> anyhow::Result<bool> {
        Err(anyhow::anyhow!("lock poisoned"))
    }

    fn len(&self) -> anyhow::Result<usize> {
        Err(anyhow::anyhow!("lock poisoned"))
    }
}

fn failing_app() -> Router {
    let state = AppState {
        item_service: ItemService::new(Arc::new(FailingStorage)),
    };
    create_router(state, ServerConfig::default().cors_layer().unwrap())
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(value) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

#[tokio::test]
async fn test_item_lifecycle_scenarios() {
    let app = test_app();

    // Create
    let (status, body) = send(&app, Method::POST, "/items/", Some(json!({"name": "Buy milk"}))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        body,
        json!({"id": 1, "name": "Buy milk", "description": null, "completed": false})
    );

    // Read back
    let (status, fetched) = send(&app, Method::GET, "/items/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, body);

    // Unknown id
    let (status, body) = send(&app, Method::GET, "/items/999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"detail": "Item not found"}));

    // Full replace
    let (status, body) = send(
        &app,
        Method::PUT,
        "/items/1",
        Some(json!({"name": "Buy oat milk", "completed": true})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"id": 1, "name": "Buy oat milk", "description": null, "completed": true})
    );

    // Delete, then it is gone
    let (status, body) = send(&app, Method::DELETE, "/items/1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, _) = send(&app, Method::GET, "/items/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(&app, Method::DELETE, "/items/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"detail": "Item not found"}));
}

#[tokio::test]
async fn test_create_without_name_is_rejected() {
    let app = test_app();

    let (status, body) = send(&app, Method::POST, "/items/", Some(json!({}))).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        body,
        json!({"detail": [{"loc": ["body", "name"], "msg": "Field required", "type": "missing"}]})
    );

    let (_, items) = send(&app, Method::GET, "/items/", None).await;
    assert_eq!(items, json!([]));
}

#[tokio::test]
async fn test_validation_reports_every_field() {
    let app = test_app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/items/",
        Some(json!({"name": 5, "description": 1, "completed": "no"})),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let kinds: Vec<&str> = body["detail"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["type"].as_str().unwrap())
        .collect();
    assert_eq!(kinds, vec!["string_type", "string_type", "bool_type"]);
}

#[tokio::test]
async fn test_malformed_json_is_unprocessable() {
    let app = test_app();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/items/")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{\"name\": "))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_put_validates_before_lookup() {
    let app = test_app();

    let (status, _) = send(&app, Method::PUT, "/items/1", Some(json!({"completed": true}))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, _) = send(&app, Method::PUT, "/items/1", Some(json!({"name": "x"}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, items) = send(&app, Method::GET, "/items/", None).await;
    assert_eq!(items, json!([]));
}

#[tokio::test]
async fn test_non_integer_id_is_unprocessable() {
    let app = test_app();

    let (status, body) = send(&app, Method::GET, "/items/abc", None).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["detail"][0]["loc"], json!(["path", "item_id"]));
    assert_eq!(body["detail"][0]["type"], "int_parsing");
}

#[tokio::test]
async fn test_list_keeps_insertion_order_and_ids_are_not_reused() {
    let app = test_app();
    for name in ["first", "second", "third"] {
        send(&app, Method::POST, "/items", Some(json!({"name": name}))).await;
    }
    send(&app, Method::DELETE, "/items/3", None).await;

    let (_, created) = send(&app, Method::POST, "/items/", Some(json!({"name": "fourth"}))).await;
    assert_eq!(created["id"], 4);

    let (status, items) = send(&app, Method::GET, "/items", None).await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = items
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["first", "second", "fourth"]);
}

#[tokio::test]
async fn test_round_trip_with_all_fields() {
    let app = test_app();

    send(
        &app,
        Method::POST,
        "/items/",
        Some(json!({"name": "A", "description": "B", "completed": true})),
    )
    .await;
    let (_, item) = send(&app, Method::GET, "/items/1", None).await;

    assert_eq!(
        item,
        json!({"id": 1, "name": "A", "description": "B", "completed": true})
    );
}

#[tokio::test]
async fn test_unknown_route_returns_json_404() {
    let app = test_app();

    let (status, body) = send(&app, Method::GET, "/widgets", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"detail": "Not Found"}));

    let (status, body) = send(&app, Method::GET, "/items/1/", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"detail": "Not Found"}));
}

#[tokio::test]
async fn test_cors_preflight_from_allowed_origin() {
    let app = test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::OPTIONS)
                .uri("/items/1")
                .header(header::ORIGIN, ALLOWED_ORIGIN)
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "DELETE")
                .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "x-custom-header")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let headers = response.headers();
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], ALLOWED_ORIGIN);
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_METHODS], "DELETE");
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_HEADERS], "x-custom-header");
}

#[tokio::test]
async fn test_cors_ignores_unlisted_origin() {
    let app = test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::GET)
                .uri("/items/")
                .header(header::ORIGIN, "http://evil.example.com")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .is_none());
}

#[tokio::test]
async fn test_simple_request_from_allowed_origin_gets_cors_headers() {
    let app = test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::GET)
                .uri("/items/")
                .header(header::ORIGIN, ALLOWED_ORIGIN)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        ALLOWED_ORIGIN
    );
}

#[tokio::test]
async fn test_wrong_method_returns_json_405() {
    let app = test_app();

    let (status, body) = send(&app, Method::POST, "/items/1", Some(json!({"name": "x"}))).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body, json!({"detail": "Method Not Allowed"}));

    let (status, body) = send(&app, Method::PATCH, "/items/", None).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body, json!({"detail": "Method Not Allowed"}));

    let (status, _) = send(&app, Method::DELETE, "/items", None).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_storage_failure_returns_generic_500() {
    let app = failing_app();

    for (method, uri, body) in [
        (Method::GET, "/items/", None),
        (Method::GET, "/items/1", None),
        (Method::POST, "/items/", Some(json!({"name": "x"}))),
        (Method::PUT, "/items/1", Some(json!({"name": "x"}))),
        (Method::DELETE, "/items/1", None),
    ] {
        let (status, body) = send(&app, method, uri, body).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"detail": "Internal Server Error"}));
        assert!(!body.to_string().contains("lock poisoned"));
    }
}
