//! HTTP server module.
//!
//! Plain HTTP serving with graceful shutdown on SIGTERM/SIGINT. Binding the
//! listener is the only step that can fail; once listening, the server runs
//! until a termination signal arrives.

mod server;
mod shutdown;

pub use server::{start_server, ServerError};
