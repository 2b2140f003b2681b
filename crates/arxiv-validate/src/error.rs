//! SPI error types
//!
//! Errors raised by provider registration and lookup. Validation outcomes
//! are never errors at this level: a rejected input is reported as a
//! [`ValidationError`](crate::context::ValidationError) appended to the
//! context, not as an `Err`.

use thiserror::Error;

/// Error that can occur while managing validator providers.
#[derive(Debug, Error)]
pub enum SpiError {
    /// A factory with the same id is already registered.
    #[error("validator factory already registered: {id}")]
    DuplicateFactory { id: String },

    /// No factory is registered under the requested id.
    #[error("validator factory not found: {id}")]
    FactoryNotFound { id: String },
}

/// Result type for SPI operations.
pub type SpiResult<T> = Result<T, SpiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SpiError::DuplicateFactory {
            id: "some-factory".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "validator factory already registered: some-factory"
        );

        let err = SpiError::FactoryNotFound {
            id: "missing".to_string(),
        };
        assert_eq!(err.to_string(), "validator factory not found: missing");
    }
}
