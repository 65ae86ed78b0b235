use std::sync::Arc;
use tracing::instrument;

use crate::models::{require_id, Product, ServiceError, ServiceResult};
use crate::repositories::ProductRepository;

/// Service exposing the read-only product catalog
pub struct CatalogService {
    repository: Arc<dyn ProductRepository>,
}

impl CatalogService {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }

    /// List every product in catalog order
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> ServiceResult<Vec<Product>> {
        crate::info_with_trace!("Listing products");

        let products = self.repository.find_all().await?;

        crate::info_with_trace!("Found {} products", products.len());
        Ok(products)
    }

    /// Get a specific product by ID
    #[instrument(skip(self), fields(product_id = %product_id))]
    pub async fn get_product(&self, product_id: &str) -> ServiceResult<Product> {
        crate::info_with_trace!("Retrieving product details");

        let product_id = require_id(Some(product_id), "id")?;

        self.repository
            .find_by_id(product_id)
            .await?
            .ok_or_else(|| ServiceError::ProductNotFound {
                product_id: product_id.to_string(),
            })
    }

    pub async fn product_count(&self) -> ServiceResult<usize> {
        Ok(self.repository.count().await?)
    }
}
