use rust_decimal::Decimal;

use super::{Product, ValidationError, ValidationResult};

/// Validation constants
pub const MAX_PRODUCT_NAME_LENGTH: usize = 200;
pub const MIN_CART_QUANTITY: u32 = 1;
pub const MAX_CART_QUANTITY: u32 = 1000;
pub const DEFAULT_CART_QUANTITY: u32 = 1;

/// Require a non-blank identifier
///
/// Ids are matched exactly, so a non-blank value is returned untouched.
pub fn require_id<'a>(value: Option<&'a str>, field: &str) -> ValidationResult<&'a str> {
    optional_id(value).ok_or_else(|| ValidationError::RequiredField {
        field: field.to_string(),
    })
}

/// Blank identifiers count as absent
pub fn optional_id(value: Option<&str>) -> Option<&str> {
    value.filter(|id| !id.trim().is_empty())
}

/// Validate the quantity requested for a cart line
pub fn validate_cart_quantity(quantity: u32) -> ValidationResult<()> {
    if !(MIN_CART_QUANTITY..=MAX_CART_QUANTITY).contains(&quantity) {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: MIN_CART_QUANTITY.to_string(),
            max: MAX_CART_QUANTITY.to_string(),
            value: quantity.to_string(),
        });
    }

    Ok(())
}

/// Validate a catalog record before it is accepted into the catalog
pub fn validate_product(product: &Product) -> ValidationResult<()> {
    require_id(Some(product.id.as_str()), "id")?;

    let name = product.name.trim();
    if name.is_empty() {
        return Err(ValidationError::RequiredField {
            field: "name".to_string(),
        });
    }
    if name.len() > MAX_PRODUCT_NAME_LENGTH {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max_length: MAX_PRODUCT_NAME_LENGTH,
            actual_length: name.len(),
        });
    }

    if product.price <= Decimal::ZERO {
        return Err(ValidationError::InvalidValue {
            field: "price".to_string(),
            value: product.price.to_string(),
            reason: "Price must be positive".to_string(),
        });
    }

    if let Some(original_price) = product.original_price {
        if original_price < product.price {
            return Err(ValidationError::InvalidValue {
                field: "originalPrice".to_string(),
                value: original_price.to_string(),
                reason: format!("Original price cannot be lower than price {}", product.price),
            });
        }
    }

    Ok(())
}
