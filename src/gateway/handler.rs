use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use tracing::{debug, instrument};

use crate::config::CatalogEntry;
use crate::constants::{TRANSEVAL_STATUS_HEADER, TRANSEVAL_STATUS_OK};
use crate::gateway::error::GatewayError;
use crate::gateway::state::AppState;
use crate::pipeline::{Envelope, EvaluationResult, TranslationRequest};

/// `POST /v1/evaluate`: runs one request through the pipeline and answers with its envelope.
#[instrument(skip_all, fields(model = tracing::field::Empty))]
pub async fn evaluate_handler(
    State(state): State<AppState>,
    payload: Result<Json<TranslationRequest>, JsonRejection>,
) -> Result<Response, GatewayError> {
    let Json(request) = payload?;
    if let Some(model) = request.model_name.as_deref() {
        tracing::Span::current().record("model", model);
    }

    debug!(
        text_len = request.text.len(),
        evaluate = request.evaluate,
        "Evaluation request received"
    );

    match state.evaluator.evaluate(&request).await {
        EvaluationResult::Failure { error, kind } => Err(GatewayError::EvaluationFailed {
            kind,
            message: error,
        }),
        success => {
            let mut headers = HeaderMap::new();
            headers.insert(
                TRANSEVAL_STATUS_HEADER,
                HeaderValue::from_static(TRANSEVAL_STATUS_OK),
            );
            Ok((StatusCode::OK, headers, Json(Envelope::from(success))).into_response())
        }
    }
}

pub async fn languages_handler(State(state): State<AppState>) -> Json<Vec<CatalogEntry>> {
    Json(state.catalog().languages().to_vec())
}

pub async fn models_handler(State(state): State<AppState>) -> Json<Vec<CatalogEntry>> {
    Json(state.catalog().models().to_vec())
}
