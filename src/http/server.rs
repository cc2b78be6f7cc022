//! HTTP server startup logic.
//!
//! Binds a plain HTTP listener on all interfaces and serves the router until
//! a termination signal triggers graceful shutdown. A failed bind is fatal
//! and surfaces to the caller; there is no retry.

use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;

use crate::config::ServerConfig;

use super::shutdown;

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// Start the HTTP server.
///
/// Binds to all interfaces on the configured port and logs the startup line
/// once the bind has succeeded. This function blocks until the server shuts
/// down: it serves until a termination signal arrives, then drains in-flight
/// connections and returns.
pub async fn start_server(app: Router, config: &ServerConfig) -> Result<(), ServerError> {
    let addr = config.socket_addr();

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    tracing::info!("Starting server at http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown::shutdown_signal())
        .await?;

    Ok(())
}
