//! # brandgate-api: Binary Entry Point
//!
//! Starts the Axum HTTP server. Configuration comes from the environment:
//! `PORT` (default 8080), `BRAND_CONFIG` (site document path, built-in site
//! when unset), `LOG_FORMAT=json` and `RUST_LOG`.

use brandgate_api::state::AppConfig;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env();

    // Initialize structured tracing.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if config.log_json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    // Bootstrap: load and validate the site before accepting connections.
    let state = brandgate_api::bootstrap::bootstrap(config).map_err(|e| {
        tracing::error!("Bootstrap failed: {e}");
        e
    })?;
    let port = state.config.port;

    let app = brandgate_api::app(state);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("brandgate API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
