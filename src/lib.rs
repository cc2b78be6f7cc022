//! Deployment pipeline smoke-test service.
//!
//! A minimal web server with two fixed routes: a plain-text welcome message
//! at `/` and a JSON health check at `/health`. The listen port comes from
//! the `PORT` environment variable, defaulting to 3000. The service exists to
//! validate deployment pipelines, not to do real work.

pub mod config;
pub mod http;
pub mod routes;
