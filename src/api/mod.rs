//! REST API endpoints.
//!
//! Axum-based HTTP API serving season standings, single-driver
//! statistics and head-to-head comparisons to the dashboard.

pub mod routes;
pub mod state;

use axum::{
    http::{HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use thiserror::Error;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::calculate::comparison::ComparisonError;
use crate::storage::StorageError;

use self::state::AppState;

/// API error types.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<StorageError> for ApiError {
    fn from(e: StorageError) -> Self {
        match e {
            StorageError::UnknownSeason(_) | StorageError::SeasonFileMissing(_) => {
                ApiError::NotFound(e.to_string())
            }
            StorageError::Io(_) | StorageError::Csv(_) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<ComparisonError> for ApiError {
    fn from(e: ComparisonError) -> Self {
        ApiError::NotFound(e.to_string())
    }
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        };

        let body = ErrorResponse {
            error: ErrorDetail {
                code: code.to_string(),
                message: self.to_string(),
            },
        };

        (status, Json(body)).into_response()
    }
}

fn cors_layer(origin: &str) -> CorsLayer {
    if origin == "*" {
        return CorsLayer::permissive();
    }

    match origin.parse::<HeaderValue>() {
        Ok(value) => CorsLayer::new()
            .allow_origin(value)
            .allow_methods([Method::GET]),
        Err(e) => {
            warn!("Ignoring invalid CORS origin {:?}: {}", origin, e);
            CorsLayer::new()
        }
    }
}

/// Build the API router.
pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(&state.cors_origin);

    Router::new()
        .route("/api/health", get(routes::seasons::health))
        .route("/api/seasons", get(routes::seasons::list_seasons))
        .route(
            "/api/seasons/:year/standings",
            get(routes::standings::season_standings),
        )
        .route(
            "/api/seasons/:year/drivers/:driver",
            get(routes::standings::driver_detail),
        )
        .route(
            "/api/seasons/:year/compare",
            get(routes::comparison::head_to_head),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
