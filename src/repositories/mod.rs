pub mod cart_repository;
pub mod product_repository;
pub mod seed_data;

pub use cart_repository::{CartRepository, InMemoryCartRepository};
pub use product_repository::{InMemoryProductRepository, ProductRepository};
pub use seed_data::seed_products;
