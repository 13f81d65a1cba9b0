//! HTTP server startup logic.

use std::net::SocketAddr;

use axum::Router;
use axum_server::Handle;

use crate::config::{AppConfig, ConfigError};

use super::shutdown;

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid server address: {0}")]
    Address(#[from] ConfigError),

    #[error("Server error: {0}")]
    Server(#[from] std::io::Error),
}

/// Start the HTTP server based on configuration.
///
/// Installs the SIGTERM/SIGINT handler and blocks until the server shuts down.
pub async fn start_server(app: Router, config: &AppConfig) -> Result<(), ServerError> {
    let addr = config.http.socket_addr()?;
    let handle = Handle::new();

    shutdown::setup_shutdown_handler(handle.clone(), config.http.shutdown_grace());

    serve(app, addr, handle).await?;
    tracing::info!("Server shut down");
    Ok(())
}

/// Serve `app` on `addr` until `handle` is told to shut down.
///
/// Bind to port 0 and await `handle.listening()` to learn the chosen port.
pub async fn serve(app: Router, addr: SocketAddr, handle: Handle) -> Result<(), ServerError> {
    tracing::info!(%addr, "Starting HTTP server");

    axum_server::bind(addr)
        .handle(handle)
        .serve(app.into_make_service())
        .await?;

    Ok(())
}
