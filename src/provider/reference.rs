use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, instrument};

use super::error::{Provider, ProviderError};
use super::status_error;

#[async_trait]
/// Reference-translation endpoint.
pub trait ReferenceTranslator: Send + Sync {
    /// Translates `lines` and returns the provider's JSON body untouched.
    ///
    /// `endpoint_override`, when present, replaces the configured URL verbatim.
    async fn translate(
        &self,
        lines: &[String],
        source_lang: &str,
        target_lang: &str,
        endpoint_override: Option<&str>,
    ) -> Result<Value, ProviderError>;
}

#[derive(Serialize)]
struct TranslatePayload<'a> {
    text: &'a [String],
    source_lang: &'a str,
    target_lang: &'a str,
}

/// `reqwest` implementation of [`ReferenceTranslator`].
#[derive(Clone)]
pub struct HttpReferenceTranslator {
    http: reqwest::Client,
    default_url: String,
    api_key: Option<String>,
}

impl std::fmt::Debug for HttpReferenceTranslator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpReferenceTranslator")
            .field("default_url", &self.default_url)
            .field("has_api_key", &self.api_key.is_some())
            .finish()
    }
}

impl HttpReferenceTranslator {
    pub fn new(http: reqwest::Client, default_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            http,
            default_url: default_url.into(),
            api_key,
        }
    }

    pub fn default_url(&self) -> &str {
        &self.default_url
    }
}

#[async_trait]
impl ReferenceTranslator for HttpReferenceTranslator {
    #[instrument(skip(self, lines), fields(lines = lines.len(), url = tracing::field::Empty))]
    async fn translate(
        &self,
        lines: &[String],
        source_lang: &str,
        target_lang: &str,
        endpoint_override: Option<&str>,
    ) -> Result<Value, ProviderError> {
        let url = endpoint_override.unwrap_or(&self.default_url);
        tracing::Span::current().record("url", tracing::field::display(url));

        let payload = TranslatePayload {
            text: lines,
            source_lang,
            target_lang,
        };

        let mut builder = self.http.post(url).json(&payload);
        if let Some(key) = &self.api_key {
            builder = builder.header(reqwest::header::AUTHORIZATION, key);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| ProviderError::from_reqwest(Provider::Translation, e))?;

        if !response.status().is_success() {
            return Err(status_error(Provider::Translation, response).await);
        }

        let body: Value = response.json().await.map_err(|e| {
            ProviderError::transport(Provider::Translation, format!("invalid JSON body: {e}"))
        })?;

        debug!("Reference translation received");
        Ok(body)
    }
}
