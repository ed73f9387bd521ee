use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::constants::TRANSEVAL_STATUS_HEADER;
use crate::pipeline::{Envelope, FailureKind};

#[derive(Debug, Error)]
pub enum GatewayError {
    /// Body could not be decoded into a request.
    #[error("invalid request body: {0}")]
    InvalidBody(#[from] JsonRejection),

    /// The pipeline ran and failed.
    #[error("{message}")]
    EvaluationFailed { kind: FailureKind, message: String },
}

impl GatewayError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::InvalidBody(rejection) => rejection.status(),
            GatewayError::EvaluationFailed { kind, .. } => match kind {
                FailureKind::Validation => StatusCode::BAD_REQUEST,
                FailureKind::Transport | FailureKind::Shape | FailureKind::Parse => {
                    StatusCode::BAD_GATEWAY
                }
                FailureKind::Scoring => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }

    fn status_tag(&self) -> &'static str {
        match self {
            GatewayError::InvalidBody(_) => "invalid_request",
            GatewayError::EvaluationFailed { kind, .. } => kind.as_str(),
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let mut headers = HeaderMap::new();
        headers.insert(
            TRANSEVAL_STATUS_HEADER,
            HeaderValue::from_static(self.status_tag()),
        );

        let body = Json(Envelope {
            success: false,
            reference_translation: None,
            openai_translation: None,
            similarity_score: None,
            evaluation: None,
            raw_response: None,
            error: Some(self.to_string()),
        });

        (status, headers, body).into_response()
    }
}
