//! Cross-cutting, shared constants.
//!
//! Embedding dimensions are defaults only: a loaded model reports its own hidden size and
//! the embedder rejects a mismatch at load time (see [`crate::embedding::EmbedderConfig`]).

use std::time::Duration;

/// Output dimension of MiniLM-class sentence embedders.
pub const DEFAULT_EMBEDDING_DIM: usize = 384;

/// Tokens kept per input before truncation.
pub const DEFAULT_MAX_SEQ_LEN: usize = 256;

/// Upper bound for every outbound provider call.
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 60;

/// [`DEFAULT_HTTP_TIMEOUT_SECS`] as a [`Duration`].
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS);

/// Scores above this are reported as high similarity.
pub const SIMILARITY_HIGH_THRESHOLD: f32 = 0.80;

/// Scores above this (and not high) are reported as moderate similarity.
pub const SIMILARITY_MODERATE_THRESHOLD: f32 = 0.60;

/// Response header carrying the outcome of an evaluation request.
pub const TRANSEVAL_STATUS_HEADER: &str = "x-transeval-status";
/// Status value for healthy / successful responses.
pub const TRANSEVAL_STATUS_OK: &str = "ok";
/// Status value for a ready component.
pub const TRANSEVAL_STATUS_READY: &str = "ready";
