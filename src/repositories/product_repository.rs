use async_trait::async_trait;
use std::collections::HashMap;
use tracing::{debug, info, instrument};

use super::seed_data::seed_products;
use crate::models::{validate_product, Product, RepositoryError, RepositoryResult};

/// Trait defining the interface for catalog data access operations
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// All products in catalog order
    async fn find_all(&self) -> RepositoryResult<Vec<Product>>;

    /// Find a product by its ID
    async fn find_by_id(&self, id: &str) -> RepositoryResult<Option<Product>>;

    /// Count products in the catalog
    async fn count(&self) -> RepositoryResult<usize>;
}

/// Read-only catalog held in memory for the lifetime of the process
#[derive(Debug)]
pub struct InMemoryProductRepository {
    products: Vec<Product>,
    index: HashMap<String, usize>,
}

impl InMemoryProductRepository {
    /// Build a catalog from `products`, rejecting duplicate ids and invalid records
    pub fn new(products: Vec<Product>) -> RepositoryResult<Self> {
        let mut index = HashMap::with_capacity(products.len());

        for (position, product) in products.iter().enumerate() {
            validate_product(product).map_err(|e| RepositoryError::ConstraintViolation {
                message: format!("product {}: {}", product.id, e),
            })?;

            if index.insert(product.id.clone(), position).is_some() {
                return Err(RepositoryError::DuplicateKey {
                    id: product.id.clone(),
                });
            }
        }

        info!("Catalog loaded with {} products", products.len());
        Ok(Self { products, index })
    }

    /// Catalog pre-populated with the storefront's seed products
    pub fn seeded() -> RepositoryResult<Self> {
        Self::new(seed_products())
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    #[instrument(skip(self))]
    async fn find_all(&self) -> RepositoryResult<Vec<Product>> {
        Ok(self.products.clone())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: &str) -> RepositoryResult<Option<Product>> {
        let product = self
            .index
            .get(id)
            .and_then(|&position| self.products.get(position))
            .cloned();

        debug!(found = product.is_some(), "Product lookup");
        Ok(product)
    }

    async fn count(&self) -> RepositoryResult<usize> {
        Ok(self.products.len())
    }
}
