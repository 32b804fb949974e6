//! # REST API for Signups
//!
//! `POST /signups`.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::post,
    Router,
};
use tracing::info;

use super::errors::rejected_body;
use super::mappers::signup_mapper::SignupMapper;
use crate::AppState;
use shared::CreateSignupRequest;

/// Create the signup API router
pub fn router() -> Router<AppState> {
    Router::new().route("/signups", post(create_signup))
}

/// Sign a camper up for an activity
pub async fn create_signup(
    State(state): State<AppState>,
    payload: Result<Json<CreateSignupRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return rejected_body(rejection),
    };
    info!("POST /signups - request: {:?}", request);

    let command = SignupMapper::to_create_command(request);
    match state.signup_service.create_signup(command).await {
        Ok(detail) => (StatusCode::CREATED, Json(SignupMapper::to_detail_dto(detail))).into_response(),
        Err(e) => e.into_response(),
    }
}
