use thiserror::Error;

/// Service-level errors that can occur in business logic
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Product not found: {product_id}")]
    ProductNotFound { product_id: String },

    #[error("Cart not found: {cart_id}")]
    CartNotFound { cart_id: String },

    #[error("Product is out of stock: {product_id}")]
    OutOfStock { product_id: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Repository error: {source}")]
    Repository {
        #[from]
        source: RepositoryError,
    },
}

/// Repository-level errors for data access operations
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Duplicate key: {id}")]
    DuplicateKey { id: String },

    #[error("Constraint violation: {message}")]
    ConstraintViolation { message: String },

    #[error("Storage unavailable: {message}")]
    Unavailable { message: String },
}

/// Validation errors for input data
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Required field missing: {field}")]
    RequiredField { field: String },

    #[error("Invalid field value: {field}={value}, reason={reason}")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Field too long: {field}, max_length={max_length}, actual_length={actual_length}")]
    TooLong {
        field: String,
        max_length: usize,
        actual_length: usize,
    },

    #[error("Value out of range: {field}, min={min}, max={max}, value={value}")]
    OutOfRange {
        field: String,
        min: String,
        max: String,
        value: String,
    },
}

impl From<ValidationError> for ServiceError {
    fn from(err: ValidationError) -> Self {
        ServiceError::ValidationError {
            message: err.to_string(),
        }
    }
}

/// Result type alias for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Result type alias for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Result type alias for validation operations
pub type ValidationResult<T> = Result<T, ValidationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = ServiceError::ProductNotFound {
            product_id: "42".to_string(),
        };
        assert_eq!(error.to_string(), "Product not found: 42");

        let error = ServiceError::OutOfStock {
            product_id: "4".to_string(),
        };
        assert_eq!(error.to_string(), "Product is out of stock: 4");

        let validation_error = ValidationError::RequiredField {
            field: "productId".to_string(),
        };
        assert_eq!(
            validation_error.to_string(),
            "Required field missing: productId"
        );
    }

    #[test]
    fn test_error_conversion() {
        let validation_error = ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: "1".to_string(),
            max: "1000".to_string(),
            value: "0".to_string(),
        };

        let service_error: ServiceError = validation_error.into();
        match service_error {
            ServiceError::ValidationError { message } => {
                assert!(message.contains("Value out of range: quantity"));
            }
            _ => panic!("Expected ValidationError conversion"),
        }
    }

    #[test]
    fn test_repository_error_conversion() {
        let repo_error = RepositoryError::Unavailable {
            message: "lock timeout".to_string(),
        };

        let service_error: ServiceError = repo_error.into();
        assert!(matches!(
            service_error,
            ServiceError::Repository {
                source: RepositoryError::Unavailable { .. }
            }
        ));
    }
}
