//! HTTP route handlers.
//!
//! Two fixed routes: the welcome page at `/` and the health check at
//! `/health`. Any other path gets axum's default 404 response; a non-GET
//! method on a known path gets the default 405. The handlers hold no state
//! and perform no I/O, so the router carries no application state.

pub mod health;
pub mod home;

use axum::{routing::get, Router};

/// Creates the axum router with all routes.
pub fn create_router() -> Router {
    Router::new()
        .route("/", get(home::index))
        .route("/health", get(health::health))
}
