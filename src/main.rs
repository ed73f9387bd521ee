//! Transeval HTTP server entrypoint.

use std::net::SocketAddr;
use std::time::Duration;

use mimalloc::MiMalloc;
use tokio::net::TcpListener;
use tokio::signal;

use transeval::config::Config;
use transeval::embedding::{EmbedderConfig, TextEmbedder, shared_embedder};
use transeval::gateway::{AppState, create_router};
use transeval::pipeline::Evaluator;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if std::env::args().any(|arg| arg == "--health-check") {
        std::process::exit(run_health_check().await);
    }

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;
    config.validate()?;
    let addr: SocketAddr = config.socket_addr().parse()?;

    tracing::info!(
        bind_addr = %config.bind_addr,
        port = config.port,
        timeout_secs = config.http_timeout.as_secs(),
        "Transeval starting"
    );

    if config.embedding_model_path.is_none() {
        tracing::warn!("No TRANSEVAL_EMBEDDING_MODEL_PATH configured, running embedder in stub mode");
    }
    let embedder_config = EmbedderConfig::from_optional_dir(config.embedding_model_path.clone());
    let embedder = tokio::task::spawn_blocking(move || shared_embedder(embedder_config)).await??;
    tracing::info!(
        dim = embedder.embedding_dim(),
        stub = embedder.is_stub(),
        "Embedder ready"
    );

    let evaluator = Evaluator::from_config(&config, embedder)?;
    let app = create_router(AppState::new(evaluator));

    let listener = TcpListener::bind(addr).await?;
    tracing::info!(addr = %addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Transeval shutdown complete");
    Ok(())
}

async fn run_health_check() -> i32 {
    let port = std::env::var("TRANSEVAL_PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(8080);

    let url = format!("http://127.0.0.1:{port}/healthz");

    let Ok(client) = reqwest::Client::builder()
        .timeout(Duration::from_secs(1))
        .build()
    else {
        return 1;
    };

    match client.get(&url).send().await {
        Ok(res) if res.status().is_success() => 0,
        _ => 1,
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
