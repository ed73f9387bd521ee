use std::ops::Deref;

use serde::{Deserialize, Serialize};

use super::error::PipelineError;

/// One evaluation job as submitted by a caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationRequest {
    pub text: String,
    pub source_language: String,
    pub target_language: String,
    #[serde(default)]
    pub evaluate: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_name: Option<String>,
    #[serde(
        default,
        alias = "endpoint_url",
        skip_serializing_if = "Option::is_none"
    )]
    pub endpoint_override: Option<String>,
}

impl TranslationRequest {
    /// A reference-only request.
    pub fn new(
        text: impl Into<String>,
        source_language: impl Into<String>,
        target_language: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            source_language: source_language.into(),
            target_language: target_language.into(),
            evaluate: false,
            model_name: None,
            endpoint_override: None,
        }
    }

    /// Turns on the LLM stages with `model_name`.
    pub fn with_evaluation(mut self, model_name: impl Into<String>) -> Self {
        self.evaluate = true;
        self.model_name = Some(model_name.into());
        self
    }

    pub fn with_endpoint_override(mut self, url: impl Into<String>) -> Self {
        self.endpoint_override = Some(url.into());
        self
    }

    /// Model to evaluate with, if evaluation was requested and a usable name given.
    pub fn evaluation_model(&self) -> Option<&str> {
        if !self.evaluate {
            return None;
        }
        self.model_name
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty())
    }

    /// Checks caller-side invariants. Runs before any network call.
    pub fn validate(&self) -> Result<(), PipelineError> {
        if self.text.trim().is_empty() {
            return Err(PipelineError::validation("text must not be empty"));
        }

        for (field, code) in [
            ("source_language", &self.source_language),
            ("target_language", &self.target_language),
        ] {
            if code.trim().is_empty() {
                return Err(PipelineError::validation(format!("{field} must not be empty")));
            }
        }

        if self.evaluate {
            let model = self.evaluation_model().ok_or_else(|| {
                PipelineError::validation("model_name is required when evaluate is true")
            })?;
            if !is_valid_model_name(model) {
                return Err(PipelineError::validation(format!(
                    "model_name '{model}' may only contain ASCII letters, digits, '.', '_' or '-'"
                )));
            }
        }

        if let Some(url) = &self.endpoint_override {
            check_endpoint(url)?;
        }

        Ok(())
    }
}

// The model name becomes a URL path segment.
fn is_valid_model_name(model: &str) -> bool {
    model
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
}

fn check_endpoint(url: &str) -> Result<(), PipelineError> {
    let parsed = reqwest::Url::parse(url).map_err(|e| {
        PipelineError::validation(format!("endpoint_override '{url}' is not a valid URL: {e}"))
    })?;

    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(PipelineError::validation(format!(
            "endpoint_override must use http or https, got '{other}'"
        ))),
    }
}

/// Trimmed, non-blank lines of the source text in their original order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LineBatch(Vec<String>);

impl LineBatch {
    pub fn from_text(text: &str) -> Self {
        Self(
            text.split('\n')
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }

    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

impl Deref for LineBatch {
    type Target = [String];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
