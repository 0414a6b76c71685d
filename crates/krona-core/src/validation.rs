//! # Validation Module
//!
//! Guards for the administrative surface that creates and updates discount
//! rules. Calculations never validate (numeric oddities propagate as
//! arithmetic); these checks run once, before a rule reaches the host's
//! storage, mirroring the fixed-precision column it lands in
//! (5 total digits, 2 fractional — so 999.99 at most).
//!
//! ## Usage
//! ```rust
//! use krona_core::validation::{validate_percent_bps, validate_label};
//!
//! validate_percent_bps(1000).unwrap(); // 10.00%
//! validate_label("Summer sale").unwrap();
//! ```

use crate::error::ValidationError;
use crate::{MAX_FLAT_AMOUNT_CENTS, MAX_LABEL_LEN, MAX_PERCENT_BPS};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Rule Field Validators
// =============================================================================

/// Validates a rule label (the receipt line text).
///
/// ## Rules
/// - Must not be empty after trimming
/// - Must be at most 100 characters
pub fn validate_label(label: &str) -> ValidationResult<()> {
    let label = label.trim();

    if label.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if label.len() > MAX_LABEL_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_LABEL_LEN,
        });
    }

    Ok(())
}

/// Validates a discount percentage in basis points.
///
/// ## Rules
/// - Must be between 0 and 10000 (0.00% to 100.00%)
///
/// ## Example
/// ```rust
/// use krona_core::validation::validate_percent_bps;
///
/// assert!(validate_percent_bps(1000).is_ok());  // 10.00%
/// assert!(validate_percent_bps(10000).is_ok()); // 100.00%
/// assert!(validate_percent_bps(10001).is_err());
/// ```
pub fn validate_percent_bps(bps: u32) -> ValidationResult<()> {
    if bps > MAX_PERCENT_BPS {
        return Err(ValidationError::OutOfRange {
            field: "percent".to_string(),
            min: 0,
            max: MAX_PERCENT_BPS as i64,
        });
    }

    Ok(())
}

/// Validates a flat discount amount in cents.
///
/// ## Rules
/// - Must be non-negative
/// - Must fit the persisted precision (at most 99999 cents = 999.99)
pub fn validate_flat_amount_cents(cents: i64) -> ValidationResult<()> {
    if !(0..=MAX_FLAT_AMOUNT_CENTS).contains(&cents) {
        return Err(ValidationError::OutOfRange {
            field: "amount".to_string(),
            min: 0,
            max: MAX_FLAT_AMOUNT_CENTS,
        });
    }

    Ok(())
}

// =============================================================================
// Cart Input Validators
// =============================================================================

/// Validates a line quantity.
///
/// ## Rules
/// - Must be positive (> 0)
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// UUID Validators
// =============================================================================

/// Validates a rule or product identifier.
///
/// ## Rules
/// - Must be a valid UUID format (36 characters with hyphens)
///
/// ## Example
/// ```rust
/// use krona_core::validation::validate_id;
///
/// assert!(validate_id("550e8400-e29b-41d4-a716-446655440000").is_ok());
/// assert!(validate_id("not-a-uuid").is_err());
/// ```
pub fn validate_id(id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    uuid::Uuid::parse_str(id).map_err(|_| ValidationError::InvalidFormat {
        field: "id".to_string(),
        reason: "must be a valid UUID".to_string(),
    })?;

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_label() {
        assert!(validate_label("Summer sale").is_ok());
        assert!(validate_label("10% off everything").is_ok());

        assert!(validate_label("").is_err());
        assert!(validate_label("   ").is_err());
        assert!(validate_label(&"A".repeat(101)).is_err());
        assert!(validate_label(&"A".repeat(100)).is_ok());
    }

    #[test]
    fn test_validate_percent_bps() {
        assert!(validate_percent_bps(0).is_ok());
        assert!(validate_percent_bps(1000).is_ok());
        assert!(validate_percent_bps(10_000).is_ok());
        assert!(validate_percent_bps(10_001).is_err());
    }

    #[test]
    fn test_validate_flat_amount_cents() {
        assert!(validate_flat_amount_cents(0).is_ok());
        assert!(validate_flat_amount_cents(237).is_ok());
        assert!(validate_flat_amount_cents(99_999).is_ok());

        assert!(validate_flat_amount_cents(-1).is_err());
        assert!(validate_flat_amount_cents(100_000).is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(999).is_ok());

        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-1).is_err());
    }

    #[test]
    fn test_validate_id() {
        assert!(validate_id("550e8400-e29b-41d4-a716-446655440000").is_ok());
        assert!(validate_id("").is_err());
        assert!(validate_id("not-a-uuid").is_err());
    }
}
