use std::collections::HashMap;

use parking_lot::Mutex;

use crate::embedding::{EmbeddingError, TextEmbedder};

/// Embedder with canned vectors, for tests that need exact similarity values.
///
/// Texts without a registered vector fall back to a one-hot vector keyed on text length.
#[derive(Default)]
pub struct MockEmbedder {
    dim: usize,
    vectors: HashMap<String, Vec<f32>>,
    fail_with: Option<String>,
    calls: Mutex<Vec<String>>,
}

impl MockEmbedder {
    pub fn new(dim: usize) -> Self {
        Self {
            dim,
            ..Default::default()
        }
    }

    pub fn with_vector(mut self, text: impl Into<String>, vector: Vec<f32>) -> Self {
        self.vectors.insert(text.into(), vector);
        self
    }

    /// Every call to [`TextEmbedder::embed`] fails with this reason.
    pub fn failing(mut self, reason: impl Into<String>) -> Self {
        self.fail_with = Some(reason.into());
        self
    }

    /// Texts seen so far, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }
}

impl TextEmbedder for MockEmbedder {
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        self.calls.lock().push(text.to_string());

        if let Some(reason) = &self.fail_with {
            return Err(EmbeddingError::InferenceFailed {
                reason: reason.clone(),
            });
        }

        if let Some(vector) = self.vectors.get(text) {
            return Ok(vector.clone());
        }

        let mut vector = vec![0.0; self.dim.max(1)];
        let slot = text.chars().count() % vector.len();
        vector[slot] = 1.0;
        Ok(vector)
    }

    fn embedding_dim(&self) -> usize {
        self.dim
    }

    fn is_stub(&self) -> bool {
        true
    }
}
