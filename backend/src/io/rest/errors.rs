//! Translation of domain errors into HTTP responses.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use tracing::{error, warn};

use crate::domain::CampError;
use shared::{ErrorResponse, ValidationErrorResponse};

impl IntoResponse for CampError {
    fn into_response(self) -> Response {
        match self {
            CampError::Validation(reason) => {
                warn!("Rejected payload: {}", reason);
                validation_failed()
            }
            CampError::NotFound(entity) => (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse::new(format!("{} not found", entity))),
            )
                .into_response(),
            CampError::Storage(e) => {
                error!("Storage failure: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse::new("Internal server error")),
                )
                    .into_response()
            }
        }
    }
}

/// The single body every rejected payload gets
pub fn validation_failed() -> Response {
    (StatusCode::BAD_REQUEST, Json(ValidationErrorResponse::generic())).into_response()
}

/// Malformed or mistyped JSON is answered like any other invalid payload
pub fn rejected_body(rejection: JsonRejection) -> Response {
    warn!("Unreadable request body: {}", rejection.body_text());
    validation_failed()
}
