//! Main entry point.
//! Loads the environment, sets up logging and serves the backend with Axum.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use dotenv::dotenv;
use log::{info, warn};
use start_stream::{backend, consts};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let port = consts::http_port().context("Invalid server configuration")?;
    let app = backend::router::get_router();

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to open web server listener on {}", addr))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Failed to bind Axum to listener")?;

    info!("Server stopped");
    Ok(())
}

/// Resolves on ctrl-c. Never resolves if the signal cannot be listened to.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}
