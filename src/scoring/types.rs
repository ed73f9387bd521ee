use crate::constants::{SIMILARITY_HIGH_THRESHOLD, SIMILARITY_MODERATE_THRESHOLD};

/// Clamps a similarity score into `[0, 1]` (NaN maps to 0).
pub fn clamp_unit(score: f32) -> f32 {
    if score.is_nan() {
        0.0
    } else {
        score.clamp(0.0, 1.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Coarse reading of a similarity score.
pub enum SimilarityBand {
    /// Above 0.8.
    High,
    /// Above 0.6, up to 0.8.
    Moderate,
    /// 0.6 or below.
    Low,
}

impl SimilarityBand {
    pub fn from_score(score: f32) -> Self {
        let score = clamp_unit(score);
        if score > SIMILARITY_HIGH_THRESHOLD {
            SimilarityBand::High
        } else if score > SIMILARITY_MODERATE_THRESHOLD {
            SimilarityBand::Moderate
        } else {
            SimilarityBand::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SimilarityBand::High => "high",
            SimilarityBand::Moderate => "moderate",
            SimilarityBand::Low => "low",
        }
    }
}

impl std::fmt::Display for SimilarityBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
