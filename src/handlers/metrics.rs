use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;
use tracing::instrument;

use super::api::{ApiError, INTERNAL_ERROR_MESSAGE};
use crate::models::ApiResponse;
use crate::observability::Metrics;

const PROMETHEUS_CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

/// `GET /metrics` in the Prometheus text format
///
/// Encoding failures answer with the same error envelope as the API routes.
#[instrument(name = "metrics_handler", skip(metrics))]
pub async fn metrics_handler(State(metrics): State<Arc<Metrics>>) -> Result<Response, ApiError> {
    let body = metrics.encode().map_err(|e| {
        crate::error_with_trace!(error = %e, "Failed to encode metrics");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(INTERNAL_ERROR_MESSAGE)),
        )
    })?;

    Ok(([(header::CONTENT_TYPE, PROMETHEUS_CONTENT_TYPE)], body).into_response())
}
