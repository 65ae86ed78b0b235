use axum::response::Json;
use serde::Serialize;
use tracing::instrument;

pub const HEALTH_MESSAGE: &str = "API is running correctly";

/// Health payload; unlike other endpoints it is not wrapped in `data`
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub success: bool,
    pub message: &'static str,
    pub timestamp: String,
    pub service: &'static str,
    pub version: &'static str,
}

/// Health check endpoint handler
#[instrument(name = "health_check")]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        success: true,
        message: HEALTH_MESSAGE,
        timestamp: chrono::Utc::now().to_rfc3339(),
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    })
}
