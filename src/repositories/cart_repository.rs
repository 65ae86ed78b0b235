use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::{debug, instrument};

use crate::models::{Cart, RepositoryResult};

/// Trait defining the interface for cart data access operations
#[async_trait]
pub trait CartRepository: Send + Sync {
    /// Find a cart by its ID
    async fn find_cart(&self, cart_id: &str) -> RepositoryResult<Option<Cart>>;

    /// Save a cart (create or replace)
    async fn save_cart(&self, cart: Cart) -> RepositoryResult<Cart>;

    /// Count carts currently held
    async fn count_carts(&self) -> RepositoryResult<usize>;
}

/// Cart store kept in process memory
///
/// Carts are never evicted; they live until the process exits.
#[derive(Debug, Default)]
pub struct InMemoryCartRepository {
    carts: RwLock<HashMap<String, Cart>>,
}

impl InMemoryCartRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CartRepository for InMemoryCartRepository {
    #[instrument(skip(self))]
    async fn find_cart(&self, cart_id: &str) -> RepositoryResult<Option<Cart>> {
        let carts = self.carts.read().await;
        Ok(carts.get(cart_id).cloned())
    }

    #[instrument(skip(self, cart), fields(cart_id = %cart.id(), items = cart.items().len()))]
    async fn save_cart(&self, cart: Cart) -> RepositoryResult<Cart> {
        let mut carts = self.carts.write().await;
        carts.insert(cart.id().to_string(), cart.clone());
        debug!(total_carts = carts.len(), "Cart saved");
        Ok(cart)
    }

    async fn count_carts(&self) -> RepositoryResult<usize> {
        let carts = self.carts.read().await;
        Ok(carts.len())
    }
}
