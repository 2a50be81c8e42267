use chrono::Utc;
use poem_openapi::{Object, OpenApi, payload::Json, payload::PlainText};
use serde::{Deserialize, Serialize};

use crate::api::tags::ApiTags;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct HealthCheckResponse {
    /// Service status
    pub status: String,
    /// Current server timestamp
    pub timestamp: String,
    /// Service version
    pub version: String,
}

/// Liveness endpoints. They never touch the cart store.
pub struct Api;

impl Api {
    pub fn new() -> Self {
        Self
    }
}

#[OpenApi]
impl Api {
    /// Liveness probe kept for existing load balancer checks
    #[oai(path = "/", method = "get", tag = "ApiTags::Health")]
    async fn root(&self) -> PlainText<String> {
        PlainText("ok".to_string())
    }

    /// Health check endpoint
    ///
    /// Returns `healthy`, the server time (RFC 3339) and the crate version.
    #[oai(path = "/health", method = "get", tag = "ApiTags::Health")]
    async fn health_check(&self) -> Json<HealthCheckResponse> {
        Json(HealthCheckResponse {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        })
    }
}
