//! Process-wide embedder handle.
//!
//! The first successful call loads the model; every later call returns the same `Arc`,
//! whatever config it passes. Callers hand the handle to
//! [`SimilarityScorer`](crate::scoring::SimilarityScorer) explicitly.

use std::sync::{Arc, OnceLock};

use parking_lot::Mutex;
use tracing::debug;

use super::config::EmbedderConfig;
use super::error::EmbeddingError;
use super::sentence::SentenceEmbedder;

static SHARED: OnceLock<Arc<SentenceEmbedder>> = OnceLock::new();
static INIT_LOCK: Mutex<()> = parking_lot::const_mutex(());

/// Returns the shared embedder, loading it on first use.
pub fn shared_embedder(config: EmbedderConfig) -> Result<Arc<SentenceEmbedder>, EmbeddingError> {
    if let Some(existing) = SHARED.get() {
        return Ok(Arc::clone(existing));
    }

    let _guard = INIT_LOCK.lock();
    if let Some(existing) = SHARED.get() {
        return Ok(Arc::clone(existing));
    }

    debug!(stub = config.testing_stub, "Initializing shared sentence embedder");
    let embedder = Arc::new(SentenceEmbedder::load(config)?);
    let _ = SHARED.set(Arc::clone(&embedder));
    Ok(embedder)
}
