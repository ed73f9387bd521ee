//! HTTP gateway (Axum) exposing the evaluation pipeline.
//!
//! Failed evaluations still answer with an [`Envelope`](crate::pipeline::Envelope); the
//! status code and the `x-transeval-status` header say which stage failed.

pub mod error;
pub mod handler;
pub mod state;

#[cfg(test)]
mod handler_tests;

use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode, header::HeaderValue},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

pub use error::GatewayError;
pub use handler::{evaluate_handler, languages_handler, models_handler};
pub use state::AppState;

use crate::constants::{TRANSEVAL_STATUS_HEADER, TRANSEVAL_STATUS_OK, TRANSEVAL_STATUS_READY};

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(health_handler))
        .route("/ready", get(ready_handler))
        .route("/v1/languages", get(languages_handler))
        .route("/v1/models", get(models_handler))
        .route("/v1/evaluate", post(evaluate_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ReadyResponse {
    pub status: String,
    pub components: ComponentStatus,
}

#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ComponentStatus {
    pub http: String,
    pub embedding: String,
    pub embedder_mode: String,
}

fn status_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        TRANSEVAL_STATUS_HEADER,
        HeaderValue::from_static(TRANSEVAL_STATUS_OK),
    );
    headers
}

#[tracing::instrument]
pub async fn health_handler() -> Response {
    (
        StatusCode::OK,
        status_headers(),
        Json(HealthResponse {
            status: TRANSEVAL_STATUS_OK.to_string(),
        }),
    )
        .into_response()
}

// Everything is loaded before the router exists, so readiness only reports the embedder mode.
#[tracing::instrument(skip(state))]
pub async fn ready_handler(State(state): State<AppState>) -> Response {
    let embedder_mode = if state.embedder_is_stub() { "stub" } else { "real" };

    (
        StatusCode::OK,
        status_headers(),
        Json(ReadyResponse {
            status: TRANSEVAL_STATUS_OK.to_string(),
            components: ComponentStatus {
                http: TRANSEVAL_STATUS_READY.to_string(),
                embedding: TRANSEVAL_STATUS_READY.to_string(),
                embedder_mode: embedder_mode.to_string(),
            },
        }),
    )
        .into_response()
}
