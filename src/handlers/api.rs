use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::Json,
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;
use tracing::{instrument, warn};

use crate::models::{
    AddCartItemRequest, ApiResponse, Cart, CartQuery, Product, RemoveCartItemRequest,
    ServiceError,
};
use crate::observability::{BusinessTracingMiddleware, Metrics};
use crate::services::{CartService, CatalogService};

pub const PRODUCT_ADDED_MESSAGE: &str = "Product added to cart";
pub const ITEM_REMOVED_MESSAGE: &str = "Item removed from cart";
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Error half of every handler result: a status and a failure envelope
pub type ApiError = (StatusCode, Json<ApiResponse<()>>);

type ApiResult<T> = Result<Json<ApiResponse<T>>, ApiError>;

/// Shared application state containing all services
#[derive(Clone)]
pub struct ApiState {
    pub catalog_service: Arc<CatalogService>,
    pub cart_service: Arc<CartService>,
    pub business_tracing: Arc<BusinessTracingMiddleware>,
    pub metrics: Arc<Metrics>,
}

impl ApiState {
    pub fn new(
        catalog_service: Arc<CatalogService>,
        cart_service: Arc<CartService>,
        metrics: Arc<Metrics>,
    ) -> Self {
        Self {
            catalog_service,
            cart_service,
            business_tracing: Arc::new(BusinessTracingMiddleware::new(metrics.clone())),
            metrics,
        }
    }

    async fn refresh_active_carts(&self) {
        match self.cart_service.cart_count().await {
            Ok(count) => self.metrics.set_active_carts(count),
            Err(err) => warn!("Failed to count carts: {}", err),
        }
    }
}

/// Catalog and cart routes under `/api`
pub fn create_api_router(state: ApiState) -> Router {
    Router::new()
        // Catalog endpoints (read-only)
        .route("/api/products", get(list_products))
        .route("/api/products/:id", get(get_product))
        // Cart endpoints
        .route("/api/cart", get(get_cart))
        .route("/api/cart/add", post(add_to_cart))
        .route("/api/cart/remove", delete(remove_from_cart))
        .with_state(state)
}

// =============================================================================
// CATALOG ENDPOINTS
// =============================================================================

#[instrument(name = "list_products", skip(state))]
pub async fn list_products(State(state): State<ApiState>) -> ApiResult<Vec<Product>> {
    state
        .business_tracing
        .trace_catalog_operation("list_products", state.catalog_service.list_products())
        .await
        .map(|products| Json(ApiResponse::ok(products)))
        .map_err(service_error_to_response)
}

#[instrument(name = "get_product", skip(state), fields(product_id = %id))]
pub async fn get_product(
    State(state): State<ApiState>,
    Path(id): Path<String>,
) -> ApiResult<Product> {
    state
        .business_tracing
        .trace_catalog_operation("get_product", state.catalog_service.get_product(&id))
        .await
        .map(|product| Json(ApiResponse::ok(product)))
        .map_err(service_error_to_response)
}

// =============================================================================
// CART ENDPOINTS
// =============================================================================

/// Add a product to a cart, creating the cart when needed
#[instrument(name = "add_to_cart", skip(state, payload))]
pub async fn add_to_cart(
    State(state): State<ApiState>,
    payload: Result<Json<AddCartItemRequest>, JsonRejection>,
) -> ApiResult<Cart> {
    let Json(request) = payload.map_err(json_rejection_to_response)?;
    let cart_id = request.cart_id.clone();

    let result = state
        .business_tracing
        .trace_cart_operation(
            "add_item",
            cart_id.as_deref(),
            state.cart_service.add_item(request),
        )
        .await;

    match result {
        Ok(cart) => {
            state.refresh_active_carts().await;
            crate::info_with_trace!(cart_id = %cart.id(), "Product added to cart");
            Ok(Json(ApiResponse::ok_with_message(cart, PRODUCT_ADDED_MESSAGE)))
        }
        Err(err) => Err(service_error_to_response(err)),
    }
}

#[instrument(name = "get_cart", skip(state, query))]
pub async fn get_cart(
    State(state): State<ApiState>,
    query: Result<Query<CartQuery>, QueryRejection>,
) -> ApiResult<Cart> {
    let Query(query) = query.map_err(|rejection| {
        bad_request(format!("Invalid query string: {}", rejection.body_text()))
    })?;

    state
        .business_tracing
        .trace_cart_operation(
            "get_cart",
            query.cart_id.as_deref(),
            state.cart_service.get_cart(query.cart_id.as_deref()),
        )
        .await
        .map(|cart| Json(ApiResponse::ok(cart)))
        .map_err(service_error_to_response)
}

/// Remove every line for a product from a cart
#[instrument(name = "remove_from_cart", skip(state, payload))]
pub async fn remove_from_cart(
    State(state): State<ApiState>,
    payload: Result<Json<RemoveCartItemRequest>, JsonRejection>,
) -> ApiResult<Cart> {
    let Json(request) = payload.map_err(json_rejection_to_response)?;
    let cart_id = request.cart_id.clone();

    state
        .business_tracing
        .trace_cart_operation(
            "remove_item",
            cart_id.as_deref(),
            state.cart_service.remove_item(request),
        )
        .await
        .map(|cart| Json(ApiResponse::ok_with_message(cart, ITEM_REMOVED_MESSAGE)))
        .map_err(service_error_to_response)
}

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

fn bad_request(message: String) -> ApiError {
    (StatusCode::BAD_REQUEST, Json(ApiResponse::error(message)))
}

/// Body-size rejections keep their 413; every other body problem is a 400
fn json_rejection_to_response(rejection: JsonRejection) -> ApiError {
    let status = match rejection.status() {
        StatusCode::PAYLOAD_TOO_LARGE => StatusCode::PAYLOAD_TOO_LARGE,
        _ => StatusCode::BAD_REQUEST,
    };

    warn!(status = status.as_u16(), "Rejected request body: {}", rejection.body_text());
    (
        status,
        Json(ApiResponse::error(format!(
            "Invalid request body: {}",
            rejection.body_text()
        ))),
    )
}

/// Convert ServiceError to HTTP response
///
/// Repository failures are logged in full but answered with a generic message.
pub fn service_error_to_response(err: ServiceError) -> ApiError {
    let status = match &err {
        ServiceError::ProductNotFound { .. } | ServiceError::CartNotFound { .. } => {
            StatusCode::NOT_FOUND
        }
        ServiceError::ValidationError { .. } | ServiceError::OutOfStock { .. } => {
            StatusCode::BAD_REQUEST
        }
        ServiceError::Repository { .. } => {
            crate::error_with_trace!(error = %err, "Request failed with internal error");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error(INTERNAL_ERROR_MESSAGE)),
            );
        }
    };

    (status, Json(ApiResponse::error(err.to_string())))
}
