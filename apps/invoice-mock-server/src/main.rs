//! Invoice Mock Server
//!
//! HTTP mock of the invoice listing API. Responses come from JSON fixtures
//! keyed by subscriber MSISDN, read fresh from disk on every request.

mod config;
mod dto;
mod handlers;
mod routes;

use anyhow::{Context, Result};
use invoice_mock_domain::InvoiceService;
use invoice_mock_fs::FsFixtureRepository;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, Settings};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub invoice_service: Arc<InvoiceService<FsFixtureRepository>>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let settings = Settings::from_env()?;

    init_tracing(&settings);

    info!("Starting invoice mock service");

    let default_fixture = settings.mocks_dir.join("default.json");
    if !tokio::fs::try_exists(&default_fixture).await.unwrap_or(false) {
        warn!(
            path = %default_fixture.display(),
            "Default fixture is missing, unknown subscribers will get MOCK_ERROR"
        );
    }

    info!(mocks_dir = %settings.mocks_dir.display(), "Initializing fixture repository");

    let repository = FsFixtureRepository::new(settings.mocks_dir.clone());

    // Create shared application state
    let state = AppState {
        invoice_service: Arc::new(InvoiceService::new(repository)),
    };

    // Build HTTP router
    let app = routes::create_router(state);

    let addr = settings.bind_address();

    info!(addr = %addr, "Starting HTTP server");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shutdown complete");
    Ok(())
}

/// Initialize tracing; `RUST_LOG` wins over the configured level
fn init_tracing(settings: &Settings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_level));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match settings.log_format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.init(),
    }
}

/// Wait for Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            warn!(error = %err, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                warn!(error = %err, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
