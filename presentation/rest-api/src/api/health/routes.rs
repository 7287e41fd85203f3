use chrono::Utc;
use poem_openapi::{Object, OpenApi, payload::Json};
use serde::{Deserialize, Serialize};

use crate::api::tags::ApiTags;

/// Service metadata returned at the root path
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct ServiceInfoResponse {
    /// Human-readable banner
    pub message: String,
    /// Service version
    pub version: String,
}

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

/// Liveness and metadata endpoints. Both are public and side-effect free.
pub struct Api;

impl Api {
    pub fn new() -> Self {
        Self
    }
}

#[OpenApi]
impl Api {
    /// Service banner
    ///
    /// Confirms the API is running and reports its version.
    #[oai(path = "/", method = "get", tag = "ApiTags::Health")]
    async fn root(&self) -> Json<ServiceInfoResponse> {
        Json(ServiceInfoResponse {
            message: "EcoScan API is running".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        })
    }

    /// Health check endpoint
    ///
    /// Returns the current status of the service.
    ///
    /// ## Response
    /// - `status`: "healthy" if service is running
    /// - `timestamp`: Current server timestamp in ISO 8601 format
    /// - `version`: Service version from Cargo.toml
    #[oai(path = "/health", method = "get", tag = "ApiTags::Health")]
    async fn health_check(&self) -> Json<HealthCheckResponse> {
        Json(HealthCheckResponse {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        })
    }
}
