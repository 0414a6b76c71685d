//! # Error Types
//!
//! Domain-specific error types for krona-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  krona-core errors (this file)                                         │
//! │  ├── DiscountError    - Rule configuration failures                    │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  Flow: ValidationError → DiscountError → host API error → shopper      │
//! │                                                                         │
//! │  NOTE: the calculation paths themselves never error. An ineligible     │
//! │  item yields None (a normal outcome, not a failure) and numeric edge   │
//! │  cases propagate as arithmetic results.                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field names, limits)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

// =============================================================================
// Discount Error
// =============================================================================

/// Errors raised while constructing or updating a discount rule.
///
/// These surface on the administrative path only; once a rule exists, its
/// calculations are total functions.
#[derive(Debug, Error)]
pub enum DiscountError {
    /// Rule configuration failed validation.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when administrative input doesn't meet requirements.
/// Used for early validation before a rule is handed to the host's storage.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., invalid UUID).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with DiscountError.
pub type DiscountResult<T> = Result<T, DiscountError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ValidationError::OutOfRange {
            field: "percent".to_string(),
            min: 0,
            max: 10_000,
        };
        assert_eq!(err.to_string(), "percent must be between 0 and 10000");

        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");
    }

    #[test]
    fn test_validation_converts_to_discount_error() {
        let validation_err = ValidationError::MustBePositive {
            field: "quantity".to_string(),
        };
        let err: DiscountError = validation_err.into();
        assert!(matches!(err, DiscountError::Validation(_)));
        assert_eq!(err.to_string(), "Validation error: quantity must be positive");
    }
}
