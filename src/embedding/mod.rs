//! Sentence embeddings for similarity scoring.
//!
//! - [`SentenceEmbedder`] wraps a BERT-family encoder (or a deterministic stub).
//! - [`TextEmbedder`] is the seam the scorer depends on, so tests can inject fakes.
//! - [`shared_embedder`] hands out the one process-wide instance.

/// BERT encoder with mean pooling.
pub mod bert;
/// Embedder configuration.
pub mod config;
/// Device selection (CPU / Metal / CUDA).
pub mod device;
mod error;
#[cfg(any(test, feature = "mock"))]
mod mock;
/// Sentence embedder implementation.
pub mod sentence;
mod shared;
/// Tokenizer loading helpers.
pub mod utils;


pub use config::{EMBEDDING_DIM, EmbedderConfig, MAX_SEQ_LEN};
pub use error::EmbeddingError;
#[cfg(any(test, feature = "mock"))]
pub use mock::MockEmbedder;
pub use sentence::SentenceEmbedder;
pub use shared::shared_embedder;

/// Maps text to a fixed-dimension dense vector.
///
/// Implementations must be safe to call concurrently; nothing is mutated after construction.
pub trait TextEmbedder: Send + Sync {
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError>;

    fn embedding_dim(&self) -> usize;

    /// `true` for deterministic test backends.
    fn is_stub(&self) -> bool {
        false
    }
}
