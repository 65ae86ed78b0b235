use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use opentelemetry::trace::TraceContextExt;
use std::{sync::Arc, time::Instant};
use tracing::{error, info, instrument, warn, Instrument};
use tracing_opentelemetry::OpenTelemetrySpanExt;

use super::Metrics;

// Label used for requests that matched no route, keeping metric cardinality bounded.
const UNMATCHED_ENDPOINT: &str = "unmatched";

/// Middleware for automatic request tracing and metrics collection
pub async fn observability_middleware(
    metrics: Arc<Metrics>,
    request: Request,
    next: Next,
) -> Response {
    let start_time = Instant::now();
    let method = request.method().to_string();
    let uri = request.uri().to_string();

    let user_agent = request
        .headers()
        .get("user-agent")
        .and_then(|value| value.to_str().ok())
        .unwrap_or("unknown")
        .to_string();

    // First hop of X-Forwarded-For, then X-Real-IP
    let client_ip = request
        .headers()
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .or_else(|| {
            request
                .headers()
                .get("x-real-ip")
                .and_then(|value| value.to_str().ok())
        })
        .unwrap_or("unknown")
        .trim()
        .to_string();

    let endpoint = request
        .extensions()
        .get::<MatchedPath>()
        .map(|matched_path| matched_path.as_str().to_string())
        .unwrap_or_else(|| UNMATCHED_ENDPOINT.to_string());

    let span_name = format!("{} {}", method, endpoint);

    let span = tracing::info_span!(
        target: "storefront_rs::http",
        "{}", span_name,
        otel.name = %span_name,
        otel.kind = "server",
        http.method = %method,
        http.route = %endpoint,
        http.url = %uri,
        http.user_agent = %user_agent,
        client.address = %client_ip,
        http.response.status_code = tracing::field::Empty,
        http.response_time_ms = tracing::field::Empty,
    );

    async {
        metrics.increment_in_flight(&method, &endpoint);

        let trace_id = tracing::Span::current()
            .context()
            .span()
            .span_context()
            .trace_id()
            .to_string();

        info!(trace_id = %trace_id, method = %method, path = %uri, user_agent = %user_agent, client_ip = %client_ip, "Processing request");

        let response = next.run(request).await;

        let duration = start_time.elapsed();
        let duration_ms = duration.as_millis();
        let status_code = response.status().as_u16();

        let current_span = tracing::Span::current();
        current_span.record("http.response.status_code", status_code);
        current_span.record("http.response_time_ms", duration_ms);

        // Only server errors mark the span as failed; 4xx are client mistakes.
        let otel_context = current_span.context();
        let otel_span = otel_context.span();
        if status_code >= 500 {
            otel_span.set_status(opentelemetry::trace::Status::error("HTTP server error"));
        } else {
            otel_span.set_status(opentelemetry::trace::Status::Ok);
        }

        metrics.record_http_request(&method, &endpoint, status_code, duration.as_secs_f64());
        metrics.decrement_in_flight(&method, &endpoint);

        if status_code >= 500 {
            error!(
                trace_id = %trace_id,
                method = %method,
                path = %uri,
                status_code = status_code,
                duration_ms = duration_ms,
                "Request failed"
            );
        } else if status_code >= 400 {
            warn!(
                trace_id = %trace_id,
                method = %method,
                path = %uri,
                status_code = status_code,
                duration_ms = duration_ms,
                "Request rejected"
            );
        } else {
            info!(
                trace_id = %trace_id,
                method = %method,
                path = %uri,
                status_code = status_code,
                duration_ms = duration_ms,
                "Request completed successfully"
            );
        }

        response
    }
    .instrument(span)
    .await
}

/// Wraps business operations with a span, an outcome log line and a counter
pub struct BusinessTracingMiddleware {
    metrics: Arc<Metrics>,
}

impl BusinessTracingMiddleware {
    pub fn new(metrics: Arc<Metrics>) -> Self {
        Self { metrics }
    }

    /// Trace a catalog read
    #[instrument(skip_all, fields(operation = %operation))]
    pub async fn trace_catalog_operation<F, T, E>(&self, operation: &str, future: F) -> Result<T, E>
    where
        F: std::future::Future<Output = Result<T, E>>,
        E: std::fmt::Display,
    {
        let start_time = Instant::now();

        match future.await {
            Ok(result) => {
                self.metrics.record_catalog_operation(operation, true);

                info!(
                    duration_ms = start_time.elapsed().as_millis(),
                    "Catalog operation completed successfully"
                );

                Ok(result)
            }
            Err(error) => {
                self.metrics.record_catalog_operation(operation, false);

                warn!(
                    error = %error,
                    duration_ms = start_time.elapsed().as_millis(),
                    "Catalog operation failed"
                );

                Err(error)
            }
        }
    }

    /// Trace a cart operation
    #[instrument(skip_all, fields(
        operation = %operation,
        cart_id = cart_id,
    ))]
    pub async fn trace_cart_operation<F, T, E>(
        &self,
        operation: &str,
        cart_id: Option<&str>,
        future: F,
    ) -> Result<T, E>
    where
        F: std::future::Future<Output = Result<T, E>>,
        E: std::fmt::Display,
    {
        let start_time = Instant::now();

        info!("Starting cart operation");

        match future.await {
            Ok(result) => {
                self.metrics.record_cart_operation(operation, true);

                info!(
                    duration_ms = start_time.elapsed().as_millis(),
                    "Cart operation completed successfully"
                );

                Ok(result)
            }
            Err(error) => {
                self.metrics.record_cart_operation(operation, false);

                warn!(
                    error = %error,
                    duration_ms = start_time.elapsed().as_millis(),
                    "Cart operation failed"
                );

                Err(error)
            }
        }
    }
}
