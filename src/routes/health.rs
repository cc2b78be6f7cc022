//! Health check endpoint for container orchestration.
//!
//! Provides a simple liveness probe that returns a fixed JSON payload when the
//! process is running. Used by Kubernetes, ECS, systemd, and load balancers to
//! verify the service is alive.

use axum::Json;
use serde::Serialize;

/// Payload returned by the health check endpoint.
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    status: &'static str,
}

/// Health check handler.
///
/// Returns `{"status":"OK"}` to indicate the service is running.
/// This is a liveness probe - it only checks that the process can respond to HTTP.
pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus { status: "OK" })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn health_reports_ok() {
        let Json(payload) = health().await;
        assert_eq!(payload.status, "OK");
    }

    #[test]
    fn health_status_serializes_to_the_expected_body() {
        let body = serde_json::to_string(&HealthStatus { status: "OK" })
            .expect("HealthStatus should serialize");
        assert_eq!(body, r#"{"status":"OK"}"#);
    }
}
