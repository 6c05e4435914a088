// Router-level tests for the Eventbook HTTP API
// Run with: cargo test -p eventbook-api --test api_test
// Uses the in-memory store; no database required.

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use eventbook_api::app::build_router;
use eventbook_api::config::CorsConfig;
use eventbook_api::storage::InMemoryDatabase;
use eventbook_api::EventService;
use eventbook_core::{Event, EventStore, NewEvent, Result, StoreError};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tower::ServiceExt;
use uuid::Uuid;

/// In-memory store whose operations can be made to fail on demand
#[derive(Default)]
struct FlakyStore {
    inner: InMemoryDatabase,
    fail_inserts: AtomicBool,
    fail_lists: AtomicBool,
}

impl FlakyStore {
    fn failing_inserts() -> Self {
        let store = Self::default();
        store.fail_inserts.store(true, Ordering::SeqCst);
        store
    }

    fn failing_everything() -> Self {
        let store = Self::failing_inserts();
        store.fail_lists.store(true, Ordering::SeqCst);
        store
    }
}

#[async_trait]
impl EventStore for FlakyStore {
    async fn ensure_schema(&self) -> Result<()> {
        self.inner.ensure_schema().await
    }

    async fn insert(&self, event: NewEvent) -> Result<Event> {
        if self.fail_inserts.load(Ordering::SeqCst) {
            return Err(StoreError::database("connection refused by 10.0.0.5:5432"));
        }
        self.inner.insert(event).await
    }

    async fn list_all(&self) -> Result<Vec<Event>> {
        if self.fail_lists.load(Ordering::SeqCst) {
            return Err(StoreError::database("connection refused by 10.0.0.5:5432"));
        }
        self.inner.list_all().await
    }
}

fn app_with(store: Arc<dyn EventStore>) -> Router {
    build_router(Arc::new(EventService::new(store)), &CorsConfig::default())
}

fn app() -> Router {
    app_with(Arc::new(InMemoryDatabase::new()))
}

fn conference_body() -> Value {
    json!({
        "type": "Conference",
        "description": "Tech Conference 2024",
        "budget": 5000,
        "numberOfPersons": 100,
        "date": "2024-12-25",
        "payload": {"room": "A1"}
    })
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, HeaderMap, Vec<u8>) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, headers, body.to_vec())
}

async fn post_event(app: &Router, body: impl Into<Body>) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/events")
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .unwrap();
    let (status, _, body) = send(app, request).await;
    (status, serde_json::from_slice(&body).unwrap())
}

async fn list_events(app: &Router) -> (StatusCode, Value) {
    let request = Request::builder()
        .uri("/events")
        .body(Body::empty())
        .unwrap();
    let (status, _, body) = send(app, request).await;
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_health_ok_even_when_storage_fails() {
    let app = app_with(Arc::new(FlakyStore::failing_everything()));

    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let (status, headers, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers[header::CONTENT_TYPE], "application/json");
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body, json!({"status": "ok"}));
}

#[tokio::test]
async fn test_create_conference_event() {
    let app = app();

    let request = Request::builder()
        .method(Method::POST)
        .uri("/events")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(conference_body().to_string()))
        .unwrap();
    let (status, headers, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(headers[header::CONTENT_TYPE], "application/json");

    let event: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(event["type"], "Conference");
    assert_eq!(event["description"], "Tech Conference 2024");
    assert_eq!(event["budget"], 5000.0);
    assert_eq!(event["numberOfPersons"], 100);
    assert_eq!(event["date"], "2024-12-25");
    assert_eq!(event["payload"], json!({"room": "A1"}));
    assert!(Uuid::parse_str(event["id"].as_str().unwrap()).is_ok());
    assert!(event["createdAt"]
        .as_str()
        .unwrap()
        .parse::<chrono::DateTime<chrono::Utc>>()
        .is_ok());
}

#[tokio::test]
async fn test_list_after_create_returns_event() {
    let app = app();

    let (status, created) = post_event(&app, conference_body().to_string()).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = list_events(&app).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"events": [created]}));
}

#[tokio::test]
async fn test_list_empty_is_array() {
    let app = app();

    let (status, body) = list_events(&app).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"events": []}));
}

#[tokio::test]
async fn test_list_is_newest_first() {
    let app = app();

    let mut a = conference_body();
    a["type"] = json!("Birthday");
    let mut b = conference_body();
    b["type"] = json!("Wedding");

    let (_, created_a) = post_event(&app, a.to_string()).await;
    let (_, created_b) = post_event(&app, b.to_string()).await;

    let (_, body) = list_events(&app).await;
    let events = body["events"].as_array().unwrap();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0]["id"], created_b["id"]);
    assert_eq!(events[1]["id"], created_a["id"]);
}

#[tokio::test]
async fn test_ids_unique_across_creations() {
    let app = app();
    let mut ids = std::collections::HashSet::new();

    for _ in 0..10 {
        let (status, event) = post_event(&app, conference_body().to_string()).await;
        assert_eq!(status, StatusCode::CREATED);
        assert!(ids.insert(event["id"].as_str().unwrap().to_string()));
    }

    let (_, body) = list_events(&app).await;
    assert_eq!(body["events"].as_array().unwrap().len(), 10);
}

#[tokio::test]
async fn test_missing_required_fields_rejected() {
    let app = app();

    for field in ["type", "description", "date"] {
        let mut body = conference_body();
        body[field] = json!("");
        let (status, error) = post_event(&app, body.to_string()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "empty {field}");
        assert_eq!(error, json!({"error": "Missing required fields"}));

        let mut body = conference_body();
        body.as_object_mut().unwrap().remove(field);
        let (status, _) = post_event(&app, body.to_string()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "absent {field}");
    }

    let (_, body) = list_events(&app).await;
    assert_eq!(body, json!({"events": []}));
}

#[tokio::test]
async fn test_malformed_json_rejected() {
    let app = app();

    for raw in ["{\"type\": \"Conference\"", "not json", ""] {
        let (status, error) = post_event(&app, raw.to_string()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "body {raw:?}");
        assert_eq!(error, json!({"error": "Invalid request body"}));
    }

    let mut wrong_type = conference_body();
    wrong_type["numberOfPersons"] = json!("a hundred");
    let (status, _) = post_event(&app, wrong_type.to_string()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, body) = list_events(&app).await;
    assert_eq!(body, json!({"events": []}));
}

#[tokio::test]
async fn test_non_object_body_rejected() {
    let app = app();

    let positional = json!([
        "Conference",
        "Tech Conference 2024",
        5000,
        100,
        "2024-12-25",
        {"room": "A1"}
    ]);
    for raw in [positional.to_string(), "[]".to_string(), "42".to_string(), "null".to_string()] {
        let (status, error) = post_event(&app, raw.clone()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "body {raw:?}");
        assert_eq!(error, json!({"error": "Invalid request body"}));
    }

    let (_, body) = list_events(&app).await;
    assert_eq!(body, json!({"events": []}));
}

#[tokio::test]
async fn test_null_numbers_default_to_zero() {
    let app = app();

    let mut body = conference_body();
    body["budget"] = Value::Null;
    body["numberOfPersons"] = Value::Null;
    let (status, created) = post_event(&app, body.to_string()).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["budget"], json!(0.0));
    assert_eq!(created["numberOfPersons"], json!(0));
}

#[tokio::test]
async fn test_null_required_field_is_missing() {
    let app = app();

    let mut body = conference_body();
    body["date"] = Value::Null;
    let (status, error) = post_event(&app, body.to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error, json!({"error": "Missing required fields"}));
}

#[tokio::test]
async fn test_content_type_not_required() {
    let app = app();

    let request = Request::builder()
        .method(Method::POST)
        .uri("/events")
        .header(header::CONTENT_TYPE, "text/plain")
        .body(Body::from(conference_body().to_string()))
        .unwrap();
    let (status, _, _) = send(&app, request).await;

    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_payload_round_trips() {
    let app = app();
    let payload = json!({
        "room": "A1",
        "catering": {"vegan": 4, "regular": 96},
        "speakers": ["Ada", "Grace"],
        "confirmed": true,
        "notes": null
    });

    let mut body = conference_body();
    body["payload"] = payload.clone();
    let (status, created) = post_event(&app, body.to_string()).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["payload"], payload);

    let (_, listed) = list_events(&app).await;
    assert_eq!(listed["events"][0]["payload"], payload);
}

#[tokio::test]
async fn test_absent_payload_stored_as_null() {
    let app = app();

    let mut body = conference_body();
    body.as_object_mut().unwrap().remove("payload");
    let (status, created) = post_event(&app, body.to_string()).await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(created["payload"].is_null());
}

#[tokio::test]
async fn test_storage_failure_on_create() {
    let store = Arc::new(FlakyStore::failing_inserts());
    let app = app_with(store.clone());

    let (status, error) = post_event(&app, conference_body().to_string()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(error, json!({"error": "Failed to create event"}));

    let (status, body) = list_events(&app).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"events": []}));
    assert!(store.inner.is_empty());
}

#[tokio::test]
async fn test_storage_failure_on_list() {
    let app = app_with(Arc::new(FlakyStore::failing_everything()));

    let (status, error) = list_events(&app).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(error, json!({"error": "Failed to fetch events"}));
}

#[tokio::test]
async fn test_cors_allowed_origin() {
    let app = app();

    let request = Request::builder()
        .uri("/events")
        .header(header::ORIGIN, "http://localhost:5173")
        .body(Body::empty())
        .unwrap();
    let (status, headers, _) = send(&app, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        headers[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "http://localhost:5173"
    );
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");
}

#[tokio::test]
async fn test_cors_unknown_origin_gets_no_allow_origin() {
    let app = app();

    let request = Request::builder()
        .uri("/events")
        .header(header::ORIGIN, "http://evil.example.com")
        .body(Body::empty())
        .unwrap();
    let (status, headers, _) = send(&app, request).await;

    assert_eq!(status, StatusCode::OK);
    assert!(headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
}

#[tokio::test]
async fn test_preflight_returns_no_content() {
    let app = app();

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/events")
        .header(header::ORIGIN, "http://localhost:3000")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap();
    let (status, headers, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_empty());
    assert_eq!(
        headers[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "http://localhost:3000"
    );
    assert!(headers.contains_key(header::ACCESS_CONTROL_ALLOW_METHODS));
}

#[tokio::test]
async fn test_preflight_without_origin_returns_no_content() {
    let app = app();

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/anything")
        .body(Body::empty())
        .unwrap();
    let (status, _, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_empty());
}

#[tokio::test]
async fn test_wildcard_origin_configuration_is_ignored() {
    let cors = CorsConfig {
        allowed_origins: vec!["*".to_string(), "http://localhost:3000".to_string()],
    };
    let app = build_router(
        Arc::new(EventService::new(Arc::new(InMemoryDatabase::new()))),
        &cors,
    );

    let request = Request::builder()
        .uri("/events")
        .header(header::ORIGIN, "http://localhost:3000")
        .body(Body::empty())
        .unwrap();
    let (_, headers, _) = send(&app, request).await;
    assert_eq!(
        headers[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "http://localhost:3000"
    );

    let request = Request::builder()
        .uri("/events")
        .header(header::ORIGIN, "http://evil.example.com")
        .body(Body::empty())
        .unwrap();
    let (_, headers, _) = send(&app, request).await;
    assert!(headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
}
