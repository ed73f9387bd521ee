use serde::{Deserialize, Serialize};

/// The five judge categories, best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VerdictCategory {
    #[serde(rename = "excellent", alias = "Excellent")]
    Excellent,
    #[serde(rename = "very good", alias = "Very Good", alias = "Very good")]
    VeryGood,
    #[serde(rename = "good", alias = "Good")]
    Good,
    #[serde(rename = "bad", alias = "Bad")]
    Bad,
    #[serde(rename = "very bad", alias = "Very Bad", alias = "Very bad")]
    VeryBad,
}

impl VerdictCategory {
    pub const ALL: [VerdictCategory; 5] = [
        VerdictCategory::Excellent,
        VerdictCategory::VeryGood,
        VerdictCategory::Good,
        VerdictCategory::Bad,
        VerdictCategory::VeryBad,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            VerdictCategory::Excellent => "excellent",
            VerdictCategory::VeryGood => "very good",
            VerdictCategory::Good => "good",
            VerdictCategory::Bad => "bad",
            VerdictCategory::VeryBad => "very bad",
        }
    }

    /// Rubric wording shown to the judge for this category.
    pub fn description(&self) -> &'static str {
        match self {
            VerdictCategory::Excellent => "Near perfect match with reference translation",
            VerdictCategory::VeryGood => "High similarity with only minor differences",
            VerdictCategory::Good => "Acceptable similarity with some noticeable differences",
            VerdictCategory::Bad => "Significant differences from reference translation",
            VerdictCategory::VeryBad => "Major deviations making it unsuitable",
        }
    }

    /// `true` for excellent, very good and good.
    pub fn is_acceptable(&self) -> bool {
        matches!(
            self,
            VerdictCategory::Excellent | VerdictCategory::VeryGood | VerdictCategory::Good
        )
    }
}

impl std::fmt::Display for VerdictCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parsed judge output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationVerdict {
    pub category: VerdictCategory,
    pub reason: String,
}
