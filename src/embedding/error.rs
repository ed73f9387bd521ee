use std::path::PathBuf;
use thiserror::Error;

/// Failures while loading or running the sentence embedder.
#[derive(Debug, Error)]
pub enum EmbeddingError {
    /// `model_dir` or one of its required files is missing.
    #[error("sentence embedder files missing: {path}")]
    ModelNotFound { path: PathBuf },

    #[error("could not load sentence embedder: {reason}")]
    ModelLoadFailed { reason: String },

    #[error("could not embed text: {reason}")]
    InferenceFailed { reason: String },

    #[error("could not tokenize text: {reason}")]
    TokenizationFailed { reason: String },

    #[error("bad sentence embedder config: {reason}")]
    InvalidConfig { reason: String },
}

impl From<candle_core::Error> for EmbeddingError {
    fn from(err: candle_core::Error) -> Self {
        EmbeddingError::InferenceFailed {
            reason: err.to_string(),
        }
    }
}
