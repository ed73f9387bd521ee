use thiserror::Error;

use crate::provider::ProviderError;
use crate::scoring::ScoringError;

/// Failure of one evaluation run. Never escapes [`Evaluator::evaluate`](super::Evaluator::evaluate).
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Invalid request: {0}")]
    Validation(String),

    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error("Similarity scoring failed: {0}")]
    Scoring(#[from] ScoringError),
}

impl PipelineError {
    pub fn validation(reason: impl Into<String>) -> Self {
        PipelineError::Validation(reason.into())
    }

    /// Machine-readable failure kind carried alongside the message.
    pub fn kind(&self) -> FailureKind {
        match self {
            PipelineError::Validation(_) => FailureKind::Validation,
            PipelineError::Provider(ProviderError::Transport { .. }) => FailureKind::Transport,
            PipelineError::Provider(ProviderError::Shape { .. }) => FailureKind::Shape,
            PipelineError::Provider(ProviderError::Parse { .. }) => FailureKind::Parse,
            PipelineError::Scoring(_) => FailureKind::Scoring,
        }
    }
}

/// Category of a failed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    Validation,
    Transport,
    Shape,
    Parse,
    Scoring,
}

impl FailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::Validation => "validation_error",
            FailureKind::Transport => "transport_error",
            FailureKind::Shape => "shape_error",
            FailureKind::Parse => "parse_error",
            FailureKind::Scoring => "scoring_error",
        }
    }
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
