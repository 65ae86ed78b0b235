use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use serde_json::Value;
use tokio::net::TcpListener;

use storefront_rs::{
    config::ServerConfig,
    create_app,
    handlers::ApiState,
    repositories::{InMemoryCartRepository, InMemoryProductRepository},
    services::{CartService, CatalogService},
    Metrics,
};

pub struct TestEnvironment {
    pub client: Client,
    pub base_url: String,
}

impl TestEnvironment {
    /// Serve the full application on an ephemeral local port
    pub async fn start() -> Self {
        let products = Arc::new(InMemoryProductRepository::seeded().unwrap());
        let state = ApiState::new(
            Arc::new(CatalogService::new(products.clone())),
            Arc::new(CartService::new(
                Arc::new(InMemoryCartRepository::new()),
                products,
            )),
            Arc::new(Metrics::new().unwrap()),
        );
        let app = create_app(&ServerConfig::default(), state);

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .unwrap();

        Self {
            client,
            base_url: format!("http://{}", addr),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// POST /api/cart/add and return (status, body)
    pub async fn add_to_cart(&self, body: Value) -> (u16, Value) {
        let response = self
            .client
            .post(self.url("/api/cart/add"))
            .json(&body)
            .send()
            .await
            .unwrap();
        let status = response.status().as_u16();
        (status, response.json().await.unwrap())
    }

    pub async fn get_cart(&self, cart_id: &str) -> (u16, Value) {
        let response = self
            .client
            .get(self.url("/api/cart"))
            .query(&[("cartId", cart_id)])
            .send()
            .await
            .unwrap();
        let status = response.status().as_u16();
        (status, response.json().await.unwrap())
    }

    pub async fn remove_from_cart(&self, body: Value) -> (u16, Value) {
        let response = self
            .client
            .delete(self.url("/api/cart/remove"))
            .json(&body)
            .send()
            .await
            .unwrap();
        let status = response.status().as_u16();
        (status, response.json().await.unwrap())
    }
}
