//! # Camp Signup Backend
//!
//! REST backend for a summer-camp signup system: campers, activities and the
//! signups joining them, stored in SQLite.
//!
//! ```text
//! IO Layer (axum handlers, mappers)
//!     ↓
//! Domain Layer (validation, services)
//!     ↓
//! Storage Layer (sqlx repositories)
//! ```

pub mod config;
pub mod domain;
pub mod io;
pub mod storage;

use anyhow::Result;
use axum::{
    http::Method,
    routing::get,
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::ServerConfig;
use crate::domain::{ActivityService, CamperService, SignupService};
use crate::io::rest::{activity_apis, camper_apis, signup_apis};
use crate::storage::DbConnection;

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub camper_service: CamperService,
    pub activity_service: ActivityService,
    pub signup_service: SignupService,
}

impl AppState {
    pub fn new(db: DbConnection) -> Self {
        Self {
            camper_service: CamperService::new(db.clone()),
            activity_service: ActivityService::new(db.clone()),
            signup_service: SignupService::new(db),
        }
    }
}

/// Connect to the configured database and build the services on it
pub async fn initialize_backend(config: &ServerConfig) -> Result<AppState> {
    info!("Setting up database at {}", config.database_url);
    let db = DbConnection::new(&config.database_url).await?;

    info!("Setting up application state");
    Ok(AppState::new(db))
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState, config: &ServerConfig) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
        .allow_headers(Any);
    let cors = match &config.cors_origin {
        Some(origin) => cors.allow_origin(origin.clone()),
        None => cors.allow_origin(Any),
    };

    Router::new()
        .route("/", get(home))
        .merge(camper_apis::router())
        .merge(activity_apis::router())
        .merge(signup_apis::router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state)
}

/// Health-check placeholder: 200 with an empty body
async fn home() -> &'static str {
    ""
}
