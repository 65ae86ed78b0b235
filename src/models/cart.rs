use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Product, ValidationError, ValidationResult, MAX_CART_QUANTITY, MIN_CART_QUANTITY};

/// Shopping cart held in process memory
///
/// Fields are private so that `subtotal` and `total` can only change through
/// [`Cart::add_item`] and [`Cart::remove_item`], which recompute them.
/// Carts are built in process and only ever serialized.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    id: String,
    items: Vec<CartItem>,
    subtotal: Decimal,
    total: Decimal,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Line of a cart, carrying a snapshot of the product taken when it was first added
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub product_id: String,
    pub quantity: u32,
    pub product: Product,
}

/// Request model for `POST /api/cart/add`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddCartItemRequest {
    pub product_id: Option<String>,
    pub quantity: Option<u32>,
    pub cart_id: Option<String>,
}

/// Request model for `DELETE /api/cart/remove`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveCartItemRequest {
    pub cart_id: Option<String>,
    pub product_id: Option<String>,
}

/// Query parameters for `GET /api/cart`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartQuery {
    pub cart_id: Option<String>,
}

impl Cart {
    /// Create an empty cart with the given id
    pub fn new(id: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            items: Vec::new(),
            subtotal: Decimal::ZERO,
            total: Decimal::ZERO,
            created_at: now,
            updated_at: now,
        }
    }

    /// Create an empty cart with a freshly generated UUID v4 id
    pub fn with_generated_id() -> Self {
        Self::new(Uuid::new_v4().to_string())
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn subtotal(&self) -> Decimal {
        self.subtotal
    }

    pub fn total(&self) -> Decimal {
        self.total
    }

    /// Add a product to the cart or increase the quantity of its existing line
    ///
    /// A new line snapshots `product`; an existing line keeps its original
    /// snapshot and only its quantity changes. A line may never hold more than
    /// `MAX_CART_QUANTITY` units; a rejected add leaves the cart untouched.
    pub fn add_item(&mut self, product: &Product, quantity: u32) -> ValidationResult<()> {
        let existing_quantity = self
            .items
            .iter()
            .find(|item| item.product_id == product.id)
            .map_or(0, |item| item.quantity);

        let new_quantity = existing_quantity
            .checked_add(quantity)
            .filter(|total| *total <= MAX_CART_QUANTITY)
            .ok_or_else(|| ValidationError::OutOfRange {
                field: "quantity".to_string(),
                min: MIN_CART_QUANTITY.to_string(),
                max: MAX_CART_QUANTITY.to_string(),
                value: (u64::from(existing_quantity) + u64::from(quantity)).to_string(),
            })?;

        match self
            .items
            .iter_mut()
            .find(|item| item.product_id == product.id)
        {
            Some(existing_item) => existing_item.quantity = new_quantity,
            None => self.items.push(CartItem::new(product.clone(), quantity)),
        }
        self.recalculate_totals();
        Ok(())
    }

    /// Remove every line for `product_id`, returning whether anything was removed
    pub fn remove_item(&mut self, product_id: &str) -> bool {
        let original_len = self.items.len();
        self.items.retain(|item| item.product_id != product_id);
        self.recalculate_totals();
        self.items.len() != original_len
    }

    /// Total number of units across all lines
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    // No tax or shipping model: total mirrors subtotal.
    fn recalculate_totals(&mut self) {
        self.subtotal = self.items.iter().map(CartItem::line_total).sum();
        self.total = self.subtotal;
        self.updated_at = Utc::now();
    }
}

impl CartItem {
    pub fn new(product: Product, quantity: u32) -> Self {
        Self {
            product_id: product.id.clone(),
            quantity,
            product,
        }
    }

    /// Snapshot price times quantity
    pub fn line_total(&self) -> Decimal {
        self.product.price * Decimal::from(self.quantity)
    }
}
