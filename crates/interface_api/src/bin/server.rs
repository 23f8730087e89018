//! Duty Drawback Claims - API Server Binary
//!
//! This binary starts the HTTP API server for recording and listing duty
//! drawback claims.
//!
//! # Usage
//!
//! ```bash
//! # Run with default configuration
//! cargo run --bin drawback-api
//!
//! # Run with environment variables
//! API_PORT=9000 API_DATA_FILE=/var/lib/drawback/claims.json cargo run --bin drawback-api
//! ```
//!
//! # Environment Variables
//!
//! * `API_HOST` - Server host (default: 0.0.0.0)
//! * `API_PORT` - Server port (default: 8000)
//! * `API_DATA_FILE` - Claim data file (default: data/dutydrawback_claims.json)
//! * `API_MAX_LOG_SIZE` - Header/body log truncation threshold in bytes (default: 10024)
//! * `API_MAX_BODY_SIZE` - Largest accepted request body in bytes (default: 2097152)
//! * `API_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)
//! * `API_LOG_FILE` - File receiving a copy of the log, empty to disable (default: server.log)

use std::fs::OpenOptions;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::{Arc, Mutex};

use infra_store::FileClaimStore;
use interface_api::{config::ApiConfig, create_router};
use tokio::net::TcpListener;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Main entry point for the API server.
///
/// Loads configuration, initializes logging, prepares the claim file and
/// starts the HTTP server.
///
/// # Errors
///
/// Returns an error if:
/// - Configuration values in the environment are malformed
/// - The log file cannot be opened
/// - Server fails to bind to the configured address
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = ApiConfig::from_env()?;

    init_tracing(&config.log_level, config.log_file())?;

    tracing::info!(
        host = %config.host,
        port = %config.port,
        data_file = %config.data_file.display(),
        "Starting Duty Drawback Claims API Server"
    );

    let store = Arc::new(FileClaimStore::new(&config.data_file));
    prepare_store(&store).await;

    let app = create_router(store, config.clone());

    let addr: SocketAddr = config.server_addr().parse()?;

    tracing::info!(%addr, "Server listening");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Initializes the tracing subscriber.
///
/// Logs go to stdout and, when `log_file` is set, are appended to that file
/// without ANSI colors. `RUST_LOG` overrides `log_level`.
fn init_tracing(log_level: &str, log_file: Option<&Path>) -> std::io::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = match log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            Some(
                fmt::layer()
                    .with_ansi(false)
                    .with_target(true)
                    .with_writer(Mutex::new(file)),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .with(file_layer)
        .init();
    Ok(())
}

/// Creates the claim file if needed and reports what it holds.
///
/// A corrupt file does not stop the server; requests touching it answer 500
/// until the file is repaired.
async fn prepare_store(store: &FileClaimStore) {
    match store.read_data().await {
        Ok(claims) => tracing::info!(
            path = %store.path().display(),
            claims = claims.len(),
            "Claim store ready"
        ),
        Err(err) => tracing::error!(
            path = %store.path().display(),
            error = %err,
            "Claim store is unreadable"
        ),
    }
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
///
/// In-flight requests complete before the process exits.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "Failed to install Ctrl+C handler");
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
                tracing::error!(error = %err, "Failed to install SIGTERM handler");
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
