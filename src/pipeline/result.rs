use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::llm::EvaluationVerdict;

use super::error::{FailureKind, PipelineError};

/// Everything a successful run produced.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EvaluationReport {
    pub reference_translation: String,
    pub openai_translation: Option<String>,
    pub similarity_score: Option<f32>,
    pub evaluation: Option<EvaluationVerdict>,
    /// Reference endpoint body as received. Diagnostic only.
    pub raw_response: Option<Value>,
}

impl EvaluationReport {
    pub fn reference_only(reference_translation: String, raw_response: Value) -> Self {
        Self {
            reference_translation,
            raw_response: Some(raw_response),
            ..Default::default()
        }
    }
}

/// Outcome of [`Evaluator::evaluate`](super::Evaluator::evaluate): a full report or one error.
#[derive(Debug, Clone, PartialEq)]
pub enum EvaluationResult {
    Success(EvaluationReport),
    Failure { error: String, kind: FailureKind },
}

impl EvaluationResult {
    pub fn is_success(&self) -> bool {
        matches!(self, EvaluationResult::Success(_))
    }

    pub fn report(&self) -> Option<&EvaluationReport> {
        match self {
            EvaluationResult::Success(report) => Some(report),
            EvaluationResult::Failure { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            EvaluationResult::Success(_) => None,
            EvaluationResult::Failure { error, .. } => Some(error),
        }
    }

    pub fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            EvaluationResult::Success(_) => None,
            EvaluationResult::Failure { kind, .. } => Some(*kind),
        }
    }
}

impl From<PipelineError> for EvaluationResult {
    fn from(err: PipelineError) -> Self {
        EvaluationResult::Failure {
            kind: err.kind(),
            error: err.to_string(),
        }
    }
}

impl From<Result<EvaluationReport, PipelineError>> for EvaluationResult {
    fn from(result: Result<EvaluationReport, PipelineError>) -> Self {
        match result {
            Ok(report) => EvaluationResult::Success(report),
            Err(err) => err.into(),
        }
    }
}

/// Flat wire form of an [`EvaluationResult`]. Absent fields are omitted, not null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_translation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub openai_translation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub similarity_score: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evaluation: Option<EvaluationVerdict>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_response: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<EvaluationResult> for Envelope {
    fn from(result: EvaluationResult) -> Self {
        match result {
            EvaluationResult::Success(report) => Envelope {
                success: true,
                reference_translation: Some(report.reference_translation),
                openai_translation: report.openai_translation,
                similarity_score: report.similarity_score,
                evaluation: report.evaluation,
                raw_response: report.raw_response,
                error: None,
            },
            EvaluationResult::Failure { error, .. } => Envelope {
                success: false,
                reference_translation: None,
                openai_translation: None,
                similarity_score: None,
                evaluation: None,
                raw_response: None,
                error: Some(error),
            },
        }
    }
}
