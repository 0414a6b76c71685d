//! # Cash Rounding Module
//!
//! Swedish rounding: snapping amounts to the nearest 5-cent coin for
//! currencies that no longer mint anything smaller.
//!
//! ## How the Snap Works
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  NEAREST-5-CENT ROUNDING                                                │
//! │                                                                         │
//! │  $2.37 × 20 = 47.4  → round → 47  → ÷ 20 → $2.35                       │
//! │  $2.38 × 20 = 47.6  → round → 48  → ÷ 20 → $2.40                       │
//! │                                                                         │
//! │  Every output lands on the grid  …, 0.00, 0.05, 0.10, 0.15, …          │
//! │  Rounding an already-rounded value returns it unchanged.                │
//! │                                                                         │
//! │  In integer cents the same snap is: round(cents / 5) × 5                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Explicit, Not Ambient
//! Whether rounding is active is a property of the tenant's currency, so it
//! arrives as a [`CashRounding`] parameter on every calculation instead of a
//! process-wide flag. `CashRounding::Off` (the default) is a strict identity.
//!
//! ## Tie Breaking
//! All rounding in this crate breaks ties away from zero (the `(n + d/2) / d`
//! integer idiom). Ties cannot actually occur at the 5-cent snap once an
//! amount is whole cents; they can occur when quantizing raw percentage
//! products, and there they round away from zero, sign-symmetrically.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Integer Rounding Helper
// =============================================================================

/// Divides `numer / denom`, rounding to the nearest integer with ties away
/// from zero. `denom` must be positive; negative numerators round
/// symmetrically to positive ones.
pub(crate) const fn div_round_half_away(numer: i128, denom: i128) -> i128 {
    if numer >= 0 {
        (numer + denom / 2) / denom
    } else {
        -((-numer + denom / 2) / denom)
    }
}

// =============================================================================
// Cash Rounding
// =============================================================================

/// Cash rounding convention for the active currency.
///
/// ## Usage
/// ```rust
/// use krona_core::money::Money;
/// use krona_core::rounding::CashRounding;
///
/// let raw = Money::from_cents(237); // $2.37
///
/// assert_eq!(CashRounding::NearestFiveCents.apply(raw).cents(), 235);
/// assert_eq!(CashRounding::Off.apply(raw).cents(), 237);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum CashRounding {
    /// No cash rounding; amounts pass through unchanged.
    Off,
    /// Snap to the nearest multiple of 5 cents (Swedish rounding).
    NearestFiveCents,
}

/// Absent configuration means no rounding.
impl Default for CashRounding {
    fn default() -> Self {
        CashRounding::Off
    }
}

impl CashRounding {
    /// Whether any snapping happens at all.
    #[inline]
    pub const fn is_enabled(&self) -> bool {
        matches!(self, CashRounding::NearestFiveCents)
    }

    /// Rounds a whole-cent amount to this convention.
    ///
    /// ## Contract
    /// - `Off`: returns `amount` unchanged, bit for bit.
    /// - `NearestFiveCents`: nearest multiple of 5 cents, sign-preserving.
    /// - Idempotent: applying twice equals applying once.
    ///
    /// ## Example
    /// ```rust
    /// use krona_core::money::Money;
    /// use krona_core::rounding::CashRounding;
    ///
    /// let snap = CashRounding::NearestFiveCents;
    /// assert_eq!(snap.apply(Money::from_cents(237)).cents(), 235);
    /// assert_eq!(snap.apply(Money::from_cents(238)).cents(), 240);
    /// assert_eq!(snap.apply(Money::from_cents(-237)).cents(), -235);
    /// ```
    pub fn apply(&self, amount: Money) -> Money {
        match self {
            CashRounding::Off => amount,
            CashRounding::NearestFiveCents => {
                let snapped = div_round_half_away(amount.cents() as i128, 5) * 5;
                Money::from_cents(snapped as i64)
            }
        }
    }

    /// Rounds a raw fractional amount, expressed as `numer / denom` cents,
    /// directly to this convention.
    ///
    /// Used by the per-item percentage path, which snaps the raw product
    /// `subtotal × rate` to the 5-cent grid in a single step instead of
    /// quantizing to whole cents first. With rounding off the value still
    /// has to land on a whole cent (integer money carries no smaller unit),
    /// so it is rounded to the nearest cent, ties away from zero.
    pub fn round_fraction(&self, numer: i128, denom: i64) -> Money {
        let cents = match self {
            CashRounding::Off => div_round_half_away(numer, denom as i128),
            CashRounding::NearestFiveCents => {
                div_round_half_away(numer, denom as i128 * 5) * 5
            }
        };
        Money::from_cents(cents as i64)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_off_is_identity() {
        for cents in [-237, -1, 0, 1, 2, 3, 237, 238, 99_999] {
            let m = Money::from_cents(cents);
            assert_eq!(CashRounding::Off.apply(m), m);
        }
    }

    #[test]
    fn test_snaps_to_five_cent_grid() {
        let snap = CashRounding::NearestFiveCents;
        for cents in -1000..=1000 {
            let rounded = snap.apply(Money::from_cents(cents));
            assert_eq!(
                rounded.cents() % 5,
                0,
                "{cents} snapped to {} which is off-grid",
                rounded.cents()
            );
            // Never further than half a step away
            assert!((rounded.cents() - cents).abs() <= 2);
        }
    }

    #[test]
    fn test_idempotent() {
        let snap = CashRounding::NearestFiveCents;
        for cents in -1000..=1000 {
            let once = snap.apply(Money::from_cents(cents));
            assert_eq!(snap.apply(once), once);
        }
    }

    #[test]
    fn test_known_values() {
        let snap = CashRounding::NearestFiveCents;
        // $2.37 → $2.35 (×20 = 47.4, rounds down)
        assert_eq!(snap.apply(Money::from_cents(237)).cents(), 235);
        // $2.38 → $2.40 (×20 = 47.6, rounds up)
        assert_eq!(snap.apply(Money::from_cents(238)).cents(), 240);
        // Already on the grid
        assert_eq!(snap.apply(Money::from_cents(235)).cents(), 235);
        assert_eq!(snap.apply(Money::zero()).cents(), 0);
    }

    #[test]
    fn test_sign_symmetric() {
        let snap = CashRounding::NearestFiveCents;
        for cents in 0..=1000 {
            let pos = snap.apply(Money::from_cents(cents)).cents();
            let neg = snap.apply(Money::from_cents(-cents)).cents();
            assert_eq!(neg, -pos, "asymmetric at {cents}");
        }
    }

    #[test]
    fn test_round_fraction_enabled() {
        let snap = CashRounding::NearestFiveCents;
        // 10% of $7.00: 700 × 1000 / 10000 = 70 cents, already on the grid
        assert_eq!(snap.round_fraction(700 * 1000, 10_000).cents(), 70);
        // 10% of $7.03: 70.3 cents → 70
        assert_eq!(snap.round_fraction(703 * 1000, 10_000).cents(), 70);
        // 10% of $7.28: 72.8 cents → 75
        assert_eq!(snap.round_fraction(728 * 1000, 10_000).cents(), 75);
    }

    #[test]
    fn test_round_fraction_disabled_quantizes_to_cent() {
        let off = CashRounding::Off;
        // 70.3 cents → 70 cents
        assert_eq!(off.round_fraction(703 * 1000, 10_000).cents(), 70);
        // 70.5 cents → 71 cents (ties away from zero)
        assert_eq!(off.round_fraction(705 * 1000, 10_000).cents(), 71);
        // -70.5 cents → -71 cents
        assert_eq!(off.round_fraction(-705 * 1000, 10_000).cents(), -71);
    }

    #[test]
    fn test_div_round_half_away() {
        assert_eq!(div_round_half_away(474, 10), 47);
        assert_eq!(div_round_half_away(476, 10), 48);
        assert_eq!(div_round_half_away(475, 10), 48); // tie, away from zero
        assert_eq!(div_round_half_away(-475, 10), -48);
        assert_eq!(div_round_half_away(0, 10), 0);
    }

    #[test]
    fn test_default_is_off() {
        assert_eq!(CashRounding::default(), CashRounding::Off);
        assert!(!CashRounding::default().is_enabled());
        assert!(CashRounding::NearestFiveCents.is_enabled());
    }

    #[test]
    fn test_serde_round_trip() {
        let json = serde_json::to_string(&CashRounding::NearestFiveCents).unwrap();
        assert_eq!(json, "\"nearest_five_cents\"");
        let back: CashRounding = serde_json::from_str(&json).unwrap();
        assert_eq!(back, CashRounding::NearestFiveCents);
    }
}
