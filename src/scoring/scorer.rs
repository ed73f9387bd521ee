use std::sync::Arc;

use tracing::debug;

use crate::embedding::TextEmbedder;

use super::error::ScoringError;

/// Cosine similarity `dot(a, b) / (|a| * |b|)`.
///
/// Mismatched lengths, empty inputs and zero-norm vectors score `0.0`.
#[inline]
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let (dot, norm_a_sq, norm_b_sq) = a
        .iter()
        .zip(b.iter())
        .fold((0.0f32, 0.0f32, 0.0f32), |(dot, na, nb), (&av, &bv)| {
            (dot + av * bv, na + av * av, nb + bv * bv)
        });

    let norm_a = norm_a_sq.sqrt();
    let norm_b = norm_b_sq.sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot / (norm_a * norm_b)
    }
}

/// Scores semantic closeness of two texts through an injected embedder.
#[derive(Clone)]
pub struct SimilarityScorer {
    embedder: Arc<dyn TextEmbedder>,
}

impl std::fmt::Debug for SimilarityScorer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimilarityScorer")
            .field("embedding_dim", &self.embedder.embedding_dim())
            .field("stub", &self.embedder.is_stub())
            .finish()
    }
}

impl SimilarityScorer {
    pub fn new(embedder: Arc<dyn TextEmbedder>) -> Self {
        Self { embedder }
    }

    pub fn embedder(&self) -> &Arc<dyn TextEmbedder> {
        &self.embedder
    }

    pub fn is_stub(&self) -> bool {
        self.embedder.is_stub()
    }

    /// Embeds both texts and returns their cosine similarity (unclamped).
    ///
    /// Empty strings are handed to the embedder as-is.
    pub fn similarity(&self, text_a: &str, text_b: &str) -> Result<f32, ScoringError> {
        let a = self.embedder.embed(text_a)?;
        let b = self.embedder.embed(text_b)?;

        if a.len() != b.len() {
            return Err(ScoringError::DimensionMismatch {
                left: a.len(),
                right: b.len(),
            });
        }

        let score = cosine_similarity(&a, &b);
        if !score.is_finite() {
            return Err(ScoringError::ComputationFailed {
                reason: format!("non-finite similarity {score}"),
            });
        }

        debug!(
            len_a = text_a.len(),
            len_b = text_b.len(),
            score = score,
            "Computed similarity"
        );

        Ok(score)
    }
}
