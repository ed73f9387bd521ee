//! Test server harness: the real router and HTTP clients, with both upstream APIs faked.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use wiremock::MockServer;

use transeval::config::Config;
use transeval::embedding::{SentenceEmbedder, TextEmbedder};
use transeval::gateway::{AppState, create_router};
use transeval::pipeline::Evaluator;

pub const TRANSLATION_PATH: &str = "/v2/translate";
pub const LLM_DEPLOYMENTS_PATH: &str = "/openai/deployments";
pub const TRANSLATION_KEY: &str = "translation-test-key";
pub const LLM_KEY: &str = "llm-test-key";

#[derive(Clone)]
pub struct TestServerConfig {
    pub http_timeout: Duration,
    /// Defaults to the stub sentence embedder.
    pub embedder: Option<Arc<dyn TextEmbedder>>,
}

impl Default for TestServerConfig {
    fn default() -> Self {
        Self {
            http_timeout: Duration::from_secs(5),
            embedder: None,
        }
    }
}

pub struct TestServer {
    pub addr: SocketAddr,
    pub translation: MockServer,
    pub llm: MockServer,
    _server_handle: JoinHandle<()>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl TestServer {
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn translation_url(&self) -> String {
        format!("{}{}", self.translation.uri(), TRANSLATION_PATH)
    }

    pub fn completion_path(model: &str) -> String {
        format!("{LLM_DEPLOYMENTS_PATH}/{model}/chat/completions")
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ServerStartupError {
    #[error("Failed to bind to address: {0}")]
    BindError(#[from] std::io::Error),
    #[error("Server startup failed: {0}")]
    StartupFailed(String),
}

/// Starts the gateway on an ephemeral port, pointed at two fresh wiremock servers.
///
/// Mocks are mounted by each test on `server.translation` / `server.llm`.
pub async fn spawn_test_server(config: TestServerConfig) -> Result<TestServer, ServerStartupError> {
    let translation = MockServer::start().await;
    let llm = MockServer::start().await;

    let app_config = Config {
        translation_url: format!("{}{}", translation.uri(), TRANSLATION_PATH),
        translation_api_key: Some(TRANSLATION_KEY.to_string()),
        llm_base_url: format!("{}{}", llm.uri(), LLM_DEPLOYMENTS_PATH),
        llm_api_key: Some(LLM_KEY.to_string()),
        http_timeout: config.http_timeout,
        ..Config::default()
    };
    app_config
        .validate()
        .map_err(|e| ServerStartupError::StartupFailed(e.to_string()))?;

    let embedder: Arc<dyn TextEmbedder> = match config.embedder {
        Some(embedder) => embedder,
        None => Arc::new(
            SentenceEmbedder::stub().map_err(|e| ServerStartupError::StartupFailed(e.to_string()))?,
        ),
    };

    let evaluator = Evaluator::from_config(&app_config, embedder)
        .map_err(|e| ServerStartupError::StartupFailed(e.to_string()))?;
    let app = create_router(AppState::new(evaluator));

    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
    let server_handle = tokio::spawn(async move {
        let _ = axum::serve(listener, app)
            .with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
            })
            .await;
    });

    Ok(TestServer {
        addr,
        translation,
        llm,
        _server_handle: server_handle,
        shutdown_tx: Some(shutdown_tx),
    })
}
