//! Helpers shared by the router tests.

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::util::ServiceExt; // for `oneshot`

use crate::domain::models::NewActivity;
use crate::storage::{ActivityRepository, DbConnection};
use crate::AppState;

/// Fresh in-memory database plus the state built on it
pub async fn setup_test_state() -> (AppState, DbConnection) {
    let db = DbConnection::init_test().await.expect("Failed to create test database");
    (AppState::new(db.clone()), db)
}

pub async fn seed_activity(db: &DbConnection, name: &str, difficulty: i64) -> i64 {
    ActivityRepository::new(db.clone())
        .store_activity(&NewActivity { name: name.to_string(), difficulty })
        .await
        .expect("Failed to seed activity")
}

/// Send one request and return the status and the body (Null when empty)
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}
