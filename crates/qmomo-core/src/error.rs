//! # Error Types
//!
//! Domain-specific error types for qmomo-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  qmomo-core errors (this file)                                         │
//! │  ├── CoreError        - Business rule violations                       │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → session facade → UI message       │
//! │                                                                         │
//! │  Every error here is a recoverable, local validation failure: the      │
//! │  caller re-prompts the user. None is fatal to the session.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (item id, variant, ...)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message
//!
//! ## Deliberately Missing
//! There is no `UnknownCartKey` error: removing or re-quantifying a cart
//! line that does not exist is a no-op, favoring idempotence over
//! strictness.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent business rule violations or domain logic failures.
/// They should be caught and translated to user-friendly messages.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Checkout was attempted with no cart lines.
    ///
    /// ## When This Occurs
    /// - The "Confirm & Pay" action fires on an empty cart
    ///
    /// ## Guarantee
    /// No order is created and no profile state is mutated.
    #[error("Cannot checkout an empty cart")]
    EmptyCart,

    /// Menu item cannot be found in the catalog.
    #[error("Menu item not found: {0}")]
    ItemNotFound(String),

    /// The selected variant is not one of the item's listed variants.
    ///
    /// ## When This Occurs
    /// - Adding "Grilled" momos when the item only offers Steamed/Fried
    #[error("Item {item} has no variant '{variant}'")]
    UnknownVariant { item: String, variant: String },

    /// Cart has exceeded maximum allowed distinct lines.
    #[error("Cart cannot have more than {max} lines")]
    CartTooLarge { max: usize },

    /// Line quantity exceeds maximum allowed.
    #[error("Quantity {requested} exceeds maximum allowed ({max})")]
    QuantityTooLarge { requested: i64, max: i64 },

    /// Validation error (wraps ValidationError).
    ///
    /// ## Note
    /// Invalid reviews (rating out of [1,5], empty comment) surface through
    /// this variant.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
/// Used for early validation before business logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Review rating is outside the 1-5 star range.
    #[error("rating must be between 1 and 5, got {rating}")]
    RatingOutOfRange { rating: u8 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },
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
        let err = CoreError::UnknownVariant {
            item: "m1".to_string(),
            variant: "Grilled".to_string(),
        };
        assert_eq!(err.to_string(), "Item m1 has no variant 'Grilled'");

        assert_eq!(
            CoreError::EmptyCart.to_string(),
            "Cannot checkout an empty cart"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::RatingOutOfRange { rating: 6 };
        assert_eq!(err.to_string(), "rating must be between 1 and 5, got 6");

        let err = ValidationError::Required {
            field: "comment".to_string(),
        };
        assert_eq!(err.to_string(), "comment is required");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::RatingOutOfRange { rating: 0 };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
