//! Enumerated languages and chat models offered to callers.
//!
//! The pipeline only consults the catalog to render display names inside LLM prompts;
//! codes it does not know are passed through unchanged.

use serde::Serialize;

/// A code with its human-readable name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    pub code: String,
    pub name: String,
}

impl CatalogEntry {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }
}

const DEFAULT_LANGUAGES: &[(&str, &str)] = &[
    ("EN-US", "English (US)"),
    ("JA-JP", "Japanese"),
    ("KO-KR", "Korean"),
    ("ZH-CN", "Chinese (Simplified)"),
    ("ZH-TW", "Chinese (Traditional)"),
    ("ES-ES", "Spanish"),
    ("FR-FR", "French"),
    ("DE-DE", "German"),
    ("IT-IT", "Italian"),
    ("PT-PT", "Portuguese"),
    ("RU-RU", "Russian"),
];

const DEFAULT_MODELS: &[(&str, &str)] = &[
    ("gpt-35-turbo", "GPT-3.5 Turbo"),
    ("gpt-4", "GPT-4"),
    ("gpt-4o", "GPT-4o"),
    ("o3-mini", "O3 Mini"),
    ("gemini-15-pro", "Gemini 1.5 Pro"),
    ("gemini-15-flash", "Gemini 1.5 Flash"),
    ("deepseek-chat", "DeepSeek Chat"),
];

/// Ordered language and model tables.
#[derive(Debug, Clone)]
pub struct Catalog {
    languages: Vec<CatalogEntry>,
    models: Vec<CatalogEntry>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(
            DEFAULT_LANGUAGES
                .iter()
                .map(|(code, name)| CatalogEntry::new(*code, *name))
                .collect(),
            DEFAULT_MODELS
                .iter()
                .map(|(code, name)| CatalogEntry::new(*code, *name))
                .collect(),
        )
    }
}

impl Catalog {
    pub fn new(languages: Vec<CatalogEntry>, models: Vec<CatalogEntry>) -> Self {
        Self { languages, models }
    }

    pub fn languages(&self) -> &[CatalogEntry] {
        &self.languages
    }

    pub fn models(&self) -> &[CatalogEntry] {
        &self.models
    }

    /// Display name for a language code, or the code itself when unknown.
    pub fn language_name<'a>(&'a self, code: &'a str) -> &'a str {
        self.languages
            .iter()
            .find(|entry| entry.code.eq_ignore_ascii_case(code))
            .map(|entry| entry.name.as_str())
            .unwrap_or(code)
    }

    pub fn has_model(&self, code: &str) -> bool {
        self.models.iter().any(|entry| entry.code == code)
    }
}
