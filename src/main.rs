//! Deployment demo server.
//!
//! This is the application entry point. It initializes tracing, resolves the
//! listen port from the environment, sets up the axum router with the two
//! fixed routes, and runs the HTTP server until a termination signal arrives.
//! A failed bind is fatal: the error is printed to stderr and the process
//! exits non-zero.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use deploy_demo::config::{ServerConfig, DEFAULT_LOG_FILTER};
use deploy_demo::http;
use deploy_demo::routes::create_router;

/// Deployment demo: a minimal web service for deployment smoke tests
#[derive(Parser, Debug)]
#[command(name = "deploy-demo", version, about)]
struct Args {
    /// Log level filter (e.g., "deploy_demo=debug,axum=info")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&log_filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Resolve the listen port (PORT environment variable, default 3000)
    let config = ServerConfig::from_env();

    // Create router
    let app = create_router();

    // Run until shutdown; a bind failure is fatal and exits non-zero
    if let Err(err) = http::start_server(app, &config).await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}
