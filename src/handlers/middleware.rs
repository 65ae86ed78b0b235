use axum::{
    body::Body,
    extract::Request,
    http::{header, HeaderValue, Method, StatusCode, Uri},
    middleware::Next,
    response::{IntoResponse, Json, Response},
};
use std::any::Any;
use tower_http::cors::{Any as AnyOrigin, CorsLayer};
use tracing::{error, warn};

use super::api::{ApiError, INTERNAL_ERROR_MESSAGE};
use crate::models::ApiResponse;

pub const NOT_FOUND_MESSAGE: &str = "Endpoint not found";
pub const REQUEST_TIMEOUT_MESSAGE: &str = "Request timed out";

/// CORS policy: any origin, the four verbs the API uses, JSON and auth headers
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

/// Security headers middleware
pub async fn security_headers_middleware(request: Request<Body>, next: Next) -> Response {
    let mut response = next.run(request).await;
    let headers = response.headers_mut();

    headers.insert(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );
    headers.insert(header::X_FRAME_OPTIONS, HeaderValue::from_static("DENY"));
    headers.insert(
        header::REFERRER_POLICY,
        HeaderValue::from_static("strict-origin-when-cross-origin"),
    );

    response
}

/// Wrap the empty 408 produced by the timeout layer in the error envelope
pub async fn request_timeout_middleware(request: Request<Body>, next: Next) -> Response {
    let response = next.run(request).await;
    if response.status() != StatusCode::REQUEST_TIMEOUT {
        return response;
    }

    warn!("Request exceeded the configured timeout");
    (
        StatusCode::REQUEST_TIMEOUT,
        Json(ApiResponse::error(REQUEST_TIMEOUT_MESSAGE)),
    )
        .into_response()
}

/// Fallback for requests that match no route
pub async fn not_found_handler(uri: Uri) -> ApiError {
    warn!(path = %uri, "No route matched request");
    (
        StatusCode::NOT_FOUND,
        Json(ApiResponse::error(NOT_FOUND_MESSAGE)),
    )
}

/// Turn a handler panic into the generic 500 envelope, logging the payload
pub fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = panic.downcast_ref::<&str>() {
        message.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    error!(panic = %detail, "Handler panicked");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiResponse::error(INTERNAL_ERROR_MESSAGE)),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{middleware, routing::get, Router};
    use serde_json::Value;
    use std::time::Duration;
    use tower::ServiceExt;
    use tower_http::{catch_panic::CatchPanicLayer, timeout::TimeoutLayer};

    async fn body_json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_security_headers_added() {
        let app = Router::new()
            .route("/test", get(|| async { "ok" }))
            .layer(middleware::from_fn(security_headers_middleware));

        let response = app
            .oneshot(Request::builder().uri("/test").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.headers()["x-content-type-options"], "nosniff");
        assert_eq!(response.headers()["x-frame-options"], "DENY");
    }

    #[tokio::test]
    async fn test_not_found_envelope() {
        let app = Router::new()
            .route("/test", get(|| async { "ok" }))
            .fallback(not_found_handler);

        let response = app
            .oneshot(Request::builder().uri("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], NOT_FOUND_MESSAGE);
    }

    #[tokio::test]
    async fn test_panic_becomes_internal_error_envelope() {
        async fn boom() -> &'static str {
            panic!("database password leaked here")
        }

        let app = Router::new()
            .route("/boom", get(boom))
            .layer(CatchPanicLayer::custom(handle_panic));

        let response = app
            .oneshot(Request::builder().uri("/boom").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["message"], INTERNAL_ERROR_MESSAGE);
        assert!(!body.to_string().contains("password"));
    }

    #[tokio::test]
    async fn test_timeout_answers_with_envelope() {
        async fn slow() -> &'static str {
            tokio::time::sleep(Duration::from_secs(5)).await;
            "too late"
        }

        let app = Router::new()
            .route("/slow", get(slow))
            .route("/fast", get(|| async { "ok" }))
            .layer(TimeoutLayer::new(Duration::from_millis(20)))
            .layer(middleware::from_fn(request_timeout_middleware));

        let response = app
            .clone()
            .oneshot(Request::builder().uri("/slow").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::REQUEST_TIMEOUT);
        let body = body_json(response).await;
        assert_eq!(
            body,
            serde_json::json!({"success": false, "message": REQUEST_TIMEOUT_MESSAGE})
        );

        let response = app
            .oneshot(Request::builder().uri("/fast").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_cors_preflight() {
        let app = Router::new()
            .route("/test", get(|| async { "ok" }))
            .layer(cors_layer());

        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri("/test")
            .header(header::ORIGIN, "http://localhost:5173")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "DELETE")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.headers()["access-control-allow-origin"], "*");
        let methods = response.headers()["access-control-allow-methods"]
            .to_str()
            .unwrap();
        assert!(methods.contains("DELETE"));
    }
}
