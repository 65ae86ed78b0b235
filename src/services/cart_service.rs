use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{info, instrument};

use crate::models::{
    optional_id, require_id, validate_cart_quantity, AddCartItemRequest, Cart,
    RemoveCartItemRequest, ServiceError, ServiceResult, DEFAULT_CART_QUANTITY,
};
use crate::repositories::{CartRepository, ProductRepository};

/// Service for managing shopping carts
pub struct CartService {
    cart_repository: Arc<dyn CartRepository>,
    product_repository: Arc<dyn ProductRepository>,
    // Held across find -> mutate -> save so concurrent mutations cannot interleave.
    mutation_lock: Mutex<()>,
}

impl CartService {
    /// Create a new CartService
    pub fn new(
        cart_repository: Arc<dyn CartRepository>,
        product_repository: Arc<dyn ProductRepository>,
    ) -> Self {
        Self {
            cart_repository,
            product_repository,
            mutation_lock: Mutex::new(()),
        }
    }

    /// Add a product to a cart, creating the cart when the id is absent or unknown
    #[instrument(skip(self, request), fields(
        product_id = request.product_id.as_deref(),
        cart_id = request.cart_id.as_deref(),
        quantity = request.quantity,
    ))]
    pub async fn add_item(&self, request: AddCartItemRequest) -> ServiceResult<Cart> {
        info!("Adding item to cart");

        let product_id = require_id(request.product_id.as_deref(), "productId")?;
        let quantity = request.quantity.unwrap_or(DEFAULT_CART_QUANTITY);
        validate_cart_quantity(quantity)?;

        let product = self
            .product_repository
            .find_by_id(product_id)
            .await?
            .ok_or_else(|| ServiceError::ProductNotFound {
                product_id: product_id.to_string(),
            })?;

        if !product.in_stock {
            return Err(ServiceError::OutOfStock {
                product_id: product.id,
            });
        }

        let _guard = self.mutation_lock.lock().await;

        let existing = match optional_id(request.cart_id.as_deref()) {
            Some(cart_id) => self.cart_repository.find_cart(cart_id).await?,
            None => None,
        };

        let mut cart = match existing {
            Some(cart) => cart,
            None => {
                let cart = Cart::with_generated_id();
                info!(cart_id = %cart.id(), "Creating new cart");
                cart
            }
        };

        cart.add_item(&product, quantity)?;

        let saved = self.cart_repository.save_cart(cart).await?;

        info!(
            cart_id = %saved.id(),
            items = saved.items().len(),
            units = saved.item_count(),
            subtotal = %saved.subtotal(),
            "Item added to cart successfully"
        );
        Ok(saved)
    }

    /// Get a cart by ID
    #[instrument(skip(self))]
    pub async fn get_cart(&self, cart_id: Option<&str>) -> ServiceResult<Cart> {
        let cart_id = require_id(cart_id, "cartId")?;

        let cart = self
            .cart_repository
            .find_cart(cart_id)
            .await?
            .ok_or_else(|| ServiceError::CartNotFound {
                cart_id: cart_id.to_string(),
            })?;

        info!("Cart retrieved with {} items", cart.items().len());
        Ok(cart)
    }

    /// Remove every line for a product from a cart
    ///
    /// Removing a product that is not in the cart is not an error.
    #[instrument(skip(self, request), fields(
        cart_id = request.cart_id.as_deref(),
        product_id = request.product_id.as_deref(),
    ))]
    pub async fn remove_item(&self, request: RemoveCartItemRequest) -> ServiceResult<Cart> {
        info!("Removing item from cart");

        let cart_id = require_id(request.cart_id.as_deref(), "cartId")?;
        let product_id = require_id(request.product_id.as_deref(), "productId")?;

        let _guard = self.mutation_lock.lock().await;

        let mut cart = self
            .cart_repository
            .find_cart(cart_id)
            .await?
            .ok_or_else(|| ServiceError::CartNotFound {
                cart_id: cart_id.to_string(),
            })?;

        if !cart.remove_item(product_id) {
            info!("Product not in cart, nothing removed");
        }

        let saved = self.cart_repository.save_cart(cart).await?;

        info!("Item removed from cart successfully");
        Ok(saved)
    }

    /// Number of carts currently held in memory
    pub async fn cart_count(&self) -> ServiceResult<usize> {
        Ok(self.cart_repository.count_carts().await?)
    }
}
