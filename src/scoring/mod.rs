//! Embedding-based similarity between a reference and a candidate translation.
//!
//! [`SimilarityScorer`] embeds each text independently and returns the cosine similarity
//! of the two vectors. Scores are nominally in `[0, 1]` but float error (or genuinely
//! opposed vectors) can push them slightly outside; use [`clamp_unit`] before display.

pub mod error;
pub mod scorer;
pub mod types;


pub use error::ScoringError;
pub use scorer::{SimilarityScorer, cosine_similarity};
pub use types::{SimilarityBand, clamp_unit};
