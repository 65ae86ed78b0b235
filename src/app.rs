use axum::{extract::DefaultBodyLimit, middleware, routing::get, Router};
use tower_http::{catch_panic::CatchPanicLayer, timeout::TimeoutLayer};

use crate::config::ServerConfig;
use crate::handlers::{
    api::{create_api_router, ApiState},
    cors_layer, handle_panic, health_check, metrics_handler, not_found_handler,
    request_timeout_middleware, security_headers_middleware,
};
use crate::observability::observability_middleware;

/// Build the full application router with every middleware layer applied
pub fn create_app(server: &ServerConfig, state: ApiState) -> Router {
    let metrics = state.metrics.clone();
    let metrics_for_middleware = metrics.clone();

    Router::new()
        .route("/api/health", get(health_check))
        .route("/metrics", get(metrics_handler))
        .with_state(metrics)
        .merge(create_api_router(state))
        .fallback(not_found_handler)
        // Innermost first: panics are converted before the observability
        // middleware sees the response, so they are counted as 500s.
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(middleware::from_fn(move |req, next| {
            observability_middleware(metrics_for_middleware.clone(), req, next)
        }))
        .layer(DefaultBodyLimit::max(server.max_request_size))
        .layer(TimeoutLayer::new(server.request_timeout()))
        // Outside the timeout so timed-out requests still get the envelope and headers.
        .layer(middleware::from_fn(request_timeout_middleware))
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(cors_layer())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observability::Metrics;
    use crate::repositories::{InMemoryCartRepository, InMemoryProductRepository};
    use crate::services::{CartService, CatalogService};
    use axum::{
        body::Body,
        http::{header, Method, Request, StatusCode},
    };
    use serde_json::Value;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn test_app(server: &ServerConfig) -> (Router, Arc<Metrics>) {
        let products = Arc::new(InMemoryProductRepository::seeded().unwrap());
        let metrics = Arc::new(Metrics::new().unwrap());
        let state = ApiState::new(
            Arc::new(CatalogService::new(products.clone())),
            Arc::new(CartService::new(
                Arc::new(InMemoryCartRepository::new()),
                products,
            )),
            metrics.clone(),
        );
        (create_app(server, state), metrics)
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let (app, _) = test_app(&ServerConfig::default());

        let response = app
            .oneshot(Request::builder().uri("/api/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()["x-frame-options"], "DENY");
        let body = body_json(response).await;
        assert_eq!(body["success"], true);
        assert!(body["timestamp"].is_string());
    }

    #[tokio::test]
    async fn test_unknown_route_returns_not_found_envelope() {
        let (app, metrics) = test_app(&ServerConfig::default());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/orders")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body, serde_json::json!({"success": false, "message": "Endpoint not found"}));

        assert!(metrics.encode().unwrap().contains("status_code=\"404\""));
    }

    #[tokio::test]
    async fn test_oversized_body_rejected() {
        let server = ServerConfig {
            max_request_size: 64,
            ..ServerConfig::default()
        };
        let (app, _) = test_app(&server);

        let padding = "x".repeat(256);
        let body = format!(r#"{{"productId":"1","cartId":"{}"}}"#, padding);
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/cart/add")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
        let body = body_json(response).await;
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn test_requests_are_counted_by_route() {
        let (app, metrics) = test_app(&ServerConfig::default());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/products/1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let count = metrics
            .http_requests_total
            .with_label_values(&["GET", "/api/products/:id", "200"])
            .get();
        assert_eq!(count, 1.0);
    }
}
