//! # REST API for Activities
//!
//! `GET /activities` and `DELETE /activities/:id`.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{delete, get},
    Router,
};
use tracing::info;

use super::mappers::activity_mapper::ActivityMapper;
use crate::AppState;

/// Create the activity API router
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/activities", get(list_activities))
        .route("/activities/:id", delete(delete_activity))
}

/// List all activities
pub async fn list_activities(State(state): State<AppState>) -> Response {
    info!("GET /activities");

    match state.activity_service.list_activities().await {
        Ok(activities) => (StatusCode::OK, Json(ActivityMapper::to_list_dto(activities))).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Delete an activity and its signups
pub async fn delete_activity(State(state): State<AppState>, Path(activity_id): Path<i64>) -> Response {
    info!("DELETE /activities/{}", activity_id);

    match state.activity_service.delete_activity(activity_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => e.into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::rest::test_utils::{seed_activity, send, setup_test_state};
    use axum::http::Method;
    use serde_json::{json, Value};

    #[tokio::test]
    async fn test_list_activities() {
        let (state, db) = setup_test_state().await;
        let archery = seed_activity(&db, "Archery", 2).await;
        let hiking = seed_activity(&db, "Hiking", 4).await;
        let app = router().with_state(state);

        let (status, body) = send(&app, Method::GET, "/activities", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!([
                { "id": archery, "name": "Archery", "difficulty": 2 },
                { "id": hiking, "name": "Hiking", "difficulty": 4 },
            ])
        );
    }

    #[tokio::test]
    async fn test_delete_activity_then_list_excludes_it() {
        let (state, db) = setup_test_state().await;
        let archery = seed_activity(&db, "Archery", 2).await;
        let hiking = seed_activity(&db, "Hiking", 4).await;
        let app = router().with_state(state);

        let (status, body) = send(&app, Method::DELETE, &format!("/activities/{}", archery), None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert_eq!(body, Value::Null);

        let (_, list) = send(&app, Method::GET, "/activities", None).await;
        assert_eq!(list, json!([{ "id": hiking, "name": "Hiking", "difficulty": 4 }]));
    }

    #[tokio::test]
    async fn test_delete_missing_activity() {
        let (state, _db) = setup_test_state().await;
        let app = router().with_state(state);

        let (status, body) = send(&app, Method::DELETE, "/activities/999", None).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "error": "Activity not found" }));
    }
}
