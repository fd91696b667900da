//! # Validation Module
//!
//! Input validation utilities for the qmomo storefront.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Storefront UI (TypeScript)                                   │
//! │  ├── Basic format checks (empty comment, star picker bounds)           │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE (Rust)                                           │
//! │  ├── Business rule validation                                          │
//! │  └── The authoritative check - the UI cannot be trusted                │
//! │                                                                         │
//! │  Every failure here is recoverable: the caller re-prompts the user.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use qmomo_core::validation::{validate_rating, validate_quantity};
//!
//! assert!(validate_rating(5).is_ok());
//! assert!(validate_rating(6).is_err());
//! assert!(validate_quantity(3).is_ok());
//! ```

use crate::error::ValidationError;
use crate::MAX_LINE_QUANTITY;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Review Validators
// =============================================================================

/// Validates a review star rating.
///
/// ## Rules
/// - Must be an integer in 1..=5 inclusive
pub fn validate_rating(rating: u8) -> ValidationResult<()> {
    if !(1..=5).contains(&rating) {
        return Err(ValidationError::RatingOutOfRange { rating });
    }

    Ok(())
}

/// Validates a review comment.
///
/// ## Rules
/// - Must not be empty after trimming
/// - Must be at most 500 characters
///
/// ## Returns
/// The trimmed comment string.
pub fn validate_comment(comment: &str) -> ValidationResult<String> {
    let comment = comment.trim();

    if comment.is_empty() {
        return Err(ValidationError::Required {
            field: "comment".to_string(),
        });
    }

    if comment.len() > 500 {
        return Err(ValidationError::TooLong {
            field: "comment".to_string(),
            max: 500,
        });
    }

    Ok(comment.to_string())
}

/// Validates a reviewer display name.
///
/// ## Rules
/// - Must not be empty after trimming
/// - Must be at most 50 characters
///
/// ## Returns
/// The trimmed name.
pub fn validate_user_name(name: &str) -> ValidationResult<String> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "user name".to_string(),
        });
    }

    if name.len() > 50 {
        return Err(ValidationError::TooLong {
            field: "user name".to_string(),
            max: 50,
        });
    }

    Ok(name.to_string())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a cart line quantity.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed MAX_LINE_QUANTITY (99)
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Product Detail: quantity stepper                                       │
/// │                                                                         │
/// │  User taps "+" until quantity = 3                                      │
/// │       │                                                                 │
/// │       ▼                                                                 │
/// │  validate_quantity(3) ← THIS FUNCTION                                  │
/// │       │                                                                 │
/// │       ├── qty <= 0? → Error: "quantity must be positive"               │
/// │       ├── qty > 99? → Error: quantity out of range                     │
/// │       └── OK → Cart::add proceeds                                      │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_LINE_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_LINE_QUANTITY,
        });
    }

    Ok(())
}

/// Validates a menu price in whole rupees.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (promotional freebies)
pub fn validate_price_rupees(rupees: i64) -> ValidationResult<()> {
    if rupees < 0 {
        return Err(ValidationError::MustBePositive {
            field: "price".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
