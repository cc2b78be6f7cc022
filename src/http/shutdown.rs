//! Graceful shutdown signal handling.
//!
//! When SIGTERM or SIGINT is received, the server will:
//! 1. Stop accepting new connections
//! 2. Wait for existing connections to complete
//! 3. Shutdown gracefully, letting the process exit with status 0

/// Completes when a termination signal (Ctrl+C or SIGTERM) is received.
///
/// Passed to `axum::serve(...).with_graceful_shutdown`, which stops accepting
/// connections and drains in-flight requests once this future resolves.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
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
