//! # REST API for Campers
//!
//! `GET/POST /campers` and `GET/PATCH /campers/:id`.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use tracing::info;

use super::errors::rejected_body;
use super::mappers::camper_mapper::CamperMapper;
use crate::AppState;
use shared::{CreateCamperRequest, UpdateCamperRequest};

/// Create the camper API router
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/campers", get(list_campers).post(create_camper))
        .route("/campers/:id", get(get_camper).patch(update_camper))
}

/// List all campers in abbreviated form
pub async fn list_campers(State(state): State<AppState>) -> Response {
    info!("GET /campers");

    match state.camper_service.list_campers().await {
        Ok(campers) => (StatusCode::OK, Json(CamperMapper::to_summary_list_dto(campers))).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Create a camper
pub async fn create_camper(
    State(state): State<AppState>,
    payload: Result<Json<CreateCamperRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return rejected_body(rejection),
    };
    info!("POST /campers - request: {:?}", request);

    let command = CamperMapper::to_create_command(request);
    match state.camper_service.create_camper(command).await {
        Ok(created) => (StatusCode::CREATED, Json(CamperMapper::to_detail_dto(created))).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Get a camper with their signups. Answers 202 on success.
pub async fn get_camper(State(state): State<AppState>, Path(camper_id): Path<i64>) -> Response {
    info!("GET /campers/{}", camper_id);

    match state.camper_service.get_camper(camper_id).await {
        Ok(camper) => (StatusCode::ACCEPTED, Json(CamperMapper::to_detail_dto(camper))).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Partially update a camper. Answers 202 with the abbreviated form.
pub async fn update_camper(
    State(state): State<AppState>,
    Path(camper_id): Path<i64>,
    payload: Result<Json<UpdateCamperRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return rejected_body(rejection),
    };
    info!("PATCH /campers/{} - request: {:?}", camper_id, request);

    let command = CamperMapper::to_update_command(request);
    match state.camper_service.update_camper(camper_id, command).await {
        Ok(camper) => (StatusCode::ACCEPTED, Json(CamperMapper::to_summary_dto(camper))).into_response(),
        Err(e) => e.into_response(),
    }
}
