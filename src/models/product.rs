use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Catalog product as exposed to the storefront
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: Decimal,
    /// Pre-discount price, never lower than `price`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<Decimal>,
    pub description: String,
    pub image: String,
    pub category: String,
    pub in_stock: bool,
}
