use thiserror::Error;

/// Errors from cart store operations.
#[derive(Debug, Error)]
pub enum CartError {
    /// No item name contains the query.
    #[error("no cart item matches '{query}'")]
    NotFound { query: String },

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Errors from session persistence (used by trait definitions in dishcart-core).
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("io error: {0}")]
    Io(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_error_display() {
        let err = CartError::NotFound {
            query: "rice".to_string(),
        };
        assert_eq!(err.to_string(), "no cart item matches 'rice'");
    }

    #[test]
    fn test_repository_error_is_transparent_in_cart_error() {
        let err: CartError = RepositoryError::Io("disk full".to_string()).into();
        assert_eq!(err.to_string(), "io error: disk full");
    }
}
