//! # Error Types
//!
//! Domain-specific error types for menu-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  menu-core errors (this file)                                          │
//! │  ├── CoreError        - Referenced entity missing, or invalid input    │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  menu-db errors                                                        │
//! │  └── DbError          - Storage failures                               │
//! │                                                                         │
//! │  menu-engine errors                                                    │
//! │  └── EngineError      - CoreError | DbError                            │
//! │                                                                         │
//! │  menu-api errors                                                       │
//! │  └── ApiError         - What HTTP clients see (serialized)             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A "not found" is a specialisation of a validation failure: the caller
//! handed us an id that does not resolve. [`CoreError::is_not_found`] lets
//! presentation layers distinguish it without a separate propagation path.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Food item cannot be found.
    ///
    /// ## When This Occurs
    /// - `get_food_item_by_id` with an unknown id
    /// - An offer references a food item that does not exist
    #[error("Food item not found with ID: {0}")]
    FoodItemNotFound(i64),

    /// Offer cannot be found.
    #[error("Offer not found with ID: {0}")]
    OfferNotFound(i64),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CoreError {
    /// True when the error names an id that does not resolve.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            CoreError::FoodItemNotFound(_) | CoreError::OfferNotFound(_)
        )
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised before any store call is made.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Discount percentage outside `(0, 100]`.
    #[error("{field} must be greater than 0 and at most 100, got {value}")]
    PercentageOutOfRange { field: String, value: f64 },

    /// An offer window whose end precedes its start.
    #[error("end date {end} is before start date {start}")]
    EndBeforeStart { start: String, end: String },

    /// Invalid format (e.g., a malformed date).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            CoreError::FoodItemNotFound(42).to_string(),
            "Food item not found with ID: 42"
        );
        assert_eq!(
            CoreError::OfferNotFound(7).to_string(),
            "Offer not found with ID: 7"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::PercentageOutOfRange {
            field: "discount_percentage".to_string(),
            value: 120.0,
        };
        assert_eq!(
            err.to_string(),
            "discount_percentage must be greater than 0 and at most 100, got 120"
        );

        let err = ValidationError::EndBeforeStart {
            start: "2024-02-01".to_string(),
            end: "2024-01-01".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "end date 2024-01-01 is before start date 2024-02-01"
        );
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::MustBePositive {
            field: "price".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
        assert!(!core_err.is_not_found());
    }

    #[test]
    fn test_not_found_classification() {
        assert!(CoreError::FoodItemNotFound(1).is_not_found());
        assert!(CoreError::OfferNotFound(1).is_not_found());
    }
}
