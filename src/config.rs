//! Runtime configuration and constants.
//!
//! The only tunable is the listen port, read once at process start from the
//! `PORT` environment variable and fixed for the process lifetime. Everything
//! else (bind host, response bodies, log filter) is compiled in.

use std::net::SocketAddr;

// =============================================================================
// Defaults and Fixed Strings
// =============================================================================

/// Environment variable consulted for the listen port
pub const PORT_ENV_VAR: &str = "PORT";

/// Port used when `PORT` is unset or invalid
pub const DEFAULT_PORT: u16 = 3000;

/// Body of the welcome page at `/`
pub const WELCOME_MESSAGE: &str = "Welcome to the AWS Application Deployment demo!";

/// Default log filter when neither `--log-level` nor `RUST_LOG` is set
pub const DEFAULT_LOG_FILTER: &str = "deploy_demo=debug";

/// Server configuration, resolved once at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// TCP port the listener binds to
    pub port: u16,
}

impl ServerConfig {
    /// Resolve configuration from the process environment.
    ///
    /// Reads `PORT`; a value that does not parse as a nonzero TCP port falls
    /// back to [`DEFAULT_PORT`].
    pub fn from_env() -> Self {
        let raw = std::env::var(PORT_ENV_VAR).ok();
        Self {
            port: resolve_port(raw.as_deref()),
        }
    }

    /// Address the server binds to: all interfaces on the resolved port.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

/// Parse a raw `PORT` value.
///
/// Falls back to [`DEFAULT_PORT`] when the variable is unset, empty, or not a
/// positive port number. Port 0 counts as invalid: it would bind a random
/// ephemeral port instead of the one the deployment expects.
fn resolve_port(raw: Option<&str>) -> u16 {
    match raw {
        None => DEFAULT_PORT,
        Some(value) => match value.parse::<u16>() {
            Ok(port) if port > 0 => port,
            _ => {
                tracing::warn!(
                    value,
                    fallback = DEFAULT_PORT,
                    "Invalid PORT value, using default port"
                );
                DEFAULT_PORT
            }
        },
    }
}
