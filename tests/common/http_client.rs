//! HTTP client helpers for tests.

use std::time::Duration;

use transeval::constants::TRANSEVAL_STATUS_HEADER;
use transeval::pipeline::{Envelope, TranslationRequest};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

pub struct TestClient {
    client: reqwest::Client,
    base_url: String,
}

impl TestClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Posts `request` and returns `(http status, status header, envelope)`.
    pub async fn evaluate(
        &self,
        request: &TranslationRequest,
    ) -> Result<(u16, String, Envelope), reqwest::Error> {
        let resp = self
            .client
            .post(self.url("/v1/evaluate"))
            .json(request)
            .send()
            .await?;

        let status = resp.status().as_u16();
        let status_header = resp
            .headers()
            .get(TRANSEVAL_STATUS_HEADER)
            .and_then(|h| h.to_str().ok())
            .unwrap_or("unknown")
            .to_string();

        Ok((status, status_header, resp.json().await?))
    }

    pub async fn get_json(&self, path: &str) -> Result<serde_json::Value, reqwest::Error> {
        self.client
            .get(self.url(path))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }
}
