//! # Engine Errors
//!
//! ```text
//! EngineError
//! ├── Core(CoreError)     - bad input or unknown id, store never touched
//! │   ├── Validation(..)
//! │   ├── FoodItemNotFound(id)
//! │   └── OfferNotFound(id)
//! └── Storage(DbError)    - store failure, propagated as-is, never retried
//! ```

use thiserror::Error;

use menu_core::{CoreError, ValidationError};
use menu_db::DbError;

/// Errors from the offer engine and catalog service.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Storage error: {0}")]
    Storage(#[from] DbError),
}

impl From<ValidationError> for EngineError {
    fn from(err: ValidationError) -> Self {
        EngineError::Core(CoreError::Validation(err))
    }
}

impl EngineError {
    /// True for validation failures, not-found included.
    pub fn is_validation(&self) -> bool {
        matches!(self, EngineError::Core(_))
    }

    /// True when an id did not resolve.
    pub fn is_not_found(&self) -> bool {
        match self {
            EngineError::Core(err) => err.is_not_found(),
            EngineError::Storage(DbError::NotFound { .. }) => true,
            EngineError::Storage(_) => false,
        }
    }
}

pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_is_a_validation_failure() {
        let err = EngineError::from(CoreError::OfferNotFound(4));
        assert!(err.is_validation());
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Offer not found with ID: 4");
    }

    #[test]
    fn test_validation_error_converts() {
        let err = EngineError::from(ValidationError::MustBePositive {
            field: "price".to_string(),
        });
        assert!(err.is_validation());
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_storage_error_is_not_validation() {
        let err = EngineError::from(DbError::PoolExhausted);
        assert!(!err.is_validation());
        assert!(!err.is_not_found());
    }
}
