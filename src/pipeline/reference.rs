use serde_json::Value;

use crate::provider::{Provider, ProviderError};

/// The two body shapes a reference endpoint may answer with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReferenceTranslation {
    /// `{"text": "..."}`
    SingleText(String),
    /// `{"translations": [{"text": "..."} | "...", ...]}`
    TranslationList(Vec<String>),
}

impl ReferenceTranslation {
    /// Classifies a raw response body. `text` wins when both keys are present.
    pub fn from_response(body: &Value) -> Result<Self, ProviderError> {
        let Some(object) = body.as_object() else {
            return Err(ProviderError::shape(
                Provider::Translation,
                format!("expected a JSON object, got {}", json_type(body)),
            ));
        };

        if let Some(text) = object.get("text") {
            return Ok(ReferenceTranslation::SingleText(stringify(text)));
        }

        match object.get("translations") {
            Some(Value::Array(items)) => Ok(ReferenceTranslation::TranslationList(
                items.iter().map(item_text).collect(),
            )),
            Some(other) => Err(ProviderError::shape(
                Provider::Translation,
                format!("'translations' must be an array, got {}", json_type(other)),
            )),
            None => Err(ProviderError::shape(
                Provider::Translation,
                "Unexpected translation response format: missing 'text' and 'translations'",
            )),
        }
    }

    /// Single reference string; list items are joined with one space in order.
    pub fn normalize(&self) -> String {
        match self {
            ReferenceTranslation::SingleText(text) => text.clone(),
            ReferenceTranslation::TranslationList(parts) => parts.join(" "),
        }
    }
}

fn item_text(item: &Value) -> String {
    match item {
        Value::Object(fields) => match fields.get("text") {
            Some(text) => stringify(text),
            None => item.to_string(),
        },
        other => stringify(other),
    }
}

fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
