//! # Discount Module
//!
//! Discount rules and their calculations.
//!
//! ## How the Host Composes Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Discount Pipeline                                  │
//! │                                                                         │
//! │  Host loads configured rules from its storage                          │
//! │       │                                                                 │
//! │       ├── cart-level rule ──► rule.cart_adjustment(cart, rounding)     │
//! │       │                                                                 │
//! │       └── item-level rule ──► for each line:                           │
//! │                               rule.item_adjustment(item, cart, …)      │
//! │                                      │                                  │
//! │                                      ├── Some(adjustment) → breakdown  │
//! │                                      └── None → skip (NOT an error)    │
//! │                                                                         │
//! │  One rule = one kind + one amount. Dispatch by enum, no inheritance.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Sign Convention (read this before wiring a host)
//! The three kinds do not share a sign:
//!
//! - [`DiscountRule::cart_adjustment`] returns a **negative** amount, ready
//!   to be summed into the cart total as-is.
//! - [`DiscountRule::item_adjustment`] returns the **positive** magnitude of
//!   the reduction; the host subtracts it from the line.
//!
//! This asymmetry is long-standing observed behavior in the storefronts this
//! engine was built for, and hosts depend on it. Do not "fix" one side
//! without migrating every consumer of the other.
//!
//! ## Rounding Asymmetry
//! The cart-wide percentage is quantized to a whole cent first and then cash
//! rounded; the per-item percentage snaps the raw product straight to the
//! 5-cent grid with no intermediate cent step. Again observed behavior,
//! preserved deliberately; the two can differ by a cent on the same figures.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;
use uuid::Uuid;

use crate::error::DiscountResult;
use crate::money::Money;
use crate::rounding::CashRounding;
use crate::types::{Cart, CartItem, Percent, PriceAdjustment, Product};
use crate::validation::{validate_flat_amount_cents, validate_label, validate_percent_bps};

// =============================================================================
// Eligibility
// =============================================================================

/// Decides whether a rule applies to a product within a given cart.
///
/// Supplied by the host: campaign scoping, category matching, customer
/// groups - whatever the storefront supports. The engine only asks the
/// question; a `false` answer simply means "no adjustment for this line".
pub trait Eligibility {
    /// Whether `product` qualifies for the rule, scoped to `cart`.
    fn is_eligible(&self, product: &Product, cart: &Cart) -> bool;
}

/// Eligibility that matches every product. For hosts without scoping rules
/// and for exercising the engine stand-alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllProducts;

impl Eligibility for AllProducts {
    #[inline]
    fn is_eligible(&self, _product: &Product, _cart: &Cart) -> bool {
        true
    }
}

// =============================================================================
// Discount Kind
// =============================================================================

/// The three supported discount shapes.
///
/// One rule holds exactly one kind; the host selects the calculation by
/// matching on it rather than by subclassing anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DiscountKind {
    /// A percentage off the whole cart's gross total.
    CartPercent { percent: Percent },

    /// A percentage off each eligible line's subtotal.
    ItemPercent { percent: Percent },

    /// A flat amount off each eligible line, regardless of line size.
    ItemFlat { amount: Money },
}

// =============================================================================
// Discount Rule
// =============================================================================

/// A configured discount rule.
///
/// Immutable once persisted; the host's administrative surface replaces a
/// rule rather than mutating amounts in place. The `name` is used verbatim
/// as the receipt label of every adjustment the rule produces.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DiscountRule {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Receipt label, shown to the shopper verbatim.
    pub name: String,

    /// What this rule computes.
    pub kind: DiscountKind,

    /// When the rule was created.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    /// When the rule was last updated.
    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
}

impl DiscountRule {
    /// Creates a new rule with a fresh identity, validating the
    /// configuration against the persisted precision (two fractional
    /// digits, 999.99 / 100.00% at most).
    ///
    /// ## Example
    /// ```rust
    /// use krona_core::discount::{DiscountKind, DiscountRule};
    /// use krona_core::types::Percent;
    ///
    /// let rule = DiscountRule::new(
    ///     "Summer sale",
    ///     DiscountKind::CartPercent { percent: Percent::from_bps(1000) },
    /// )
    /// .unwrap();
    /// assert_eq!(rule.name, "Summer sale");
    /// ```
    pub fn new(name: impl Into<String>, kind: DiscountKind) -> DiscountResult<Self> {
        let name = name.into();
        validate_label(&name)?;
        match kind {
            DiscountKind::CartPercent { percent } | DiscountKind::ItemPercent { percent } => {
                validate_percent_bps(percent.bps())?
            }
            DiscountKind::ItemFlat { amount } => validate_flat_amount_cents(amount.cents())?,
        }

        let now = Utc::now();
        Ok(DiscountRule {
            id: Uuid::new_v4().to_string(),
            name,
            kind,
            created_at: now,
            updated_at: now,
        })
    }

    /// Computes this rule's cart-wide adjustment.
    ///
    /// Only [`DiscountKind::CartPercent`] rules participate at the cart
    /// level; any other kind yields `None` (the host simply moves on).
    ///
    /// ## Calculation
    /// 1. `total = Σ unit_price × quantity` over all lines
    /// 2. take the percentage, quantized to a whole cent
    /// 3. cash round per `rounding`
    /// 4. negate - the amount is ready to add into the total
    ///
    /// ## Example
    /// ```rust
    /// use krona_core::discount::{DiscountKind, DiscountRule};
    /// use krona_core::rounding::CashRounding;
    /// use krona_core::types::{Cart, CartItem, Percent, Product};
    ///
    /// let cart = Cart::from_items(vec![CartItem {
    ///     product: Product {
    ///         id: "550e8400-e29b-41d4-a716-446655440000".into(),
    ///         sku: "MUG-01".into(),
    ///         name: "Mug".into(),
    ///         unit_price_cents: 1000,
    ///         is_active: true,
    ///     },
    ///     quantity: 2,
    ///     line_subtotal_cents: 2000,
    /// }]);
    ///
    /// let rule = DiscountRule::new(
    ///     "10% off",
    ///     DiscountKind::CartPercent { percent: Percent::from_bps(1000) },
    /// )
    /// .unwrap();
    ///
    /// let adj = rule
    ///     .cart_adjustment(&cart, CashRounding::NearestFiveCents)
    ///     .unwrap();
    /// assert_eq!(adj.amount_cents, -200); // -10% of $20.00
    /// ```
    pub fn cart_adjustment(&self, cart: &Cart, rounding: CashRounding) -> Option<PriceAdjustment> {
        let DiscountKind::CartPercent { percent } = self.kind else {
            return None;
        };

        let total = cart.total();
        let discount = rounding.apply(total.percent_of(percent));
        debug!(
            rule = %self.name,
            total = %total,
            discount = %discount,
            "cart adjustment computed"
        );
        Some(PriceAdjustment::new(&self.name, -discount))
    }

    /// Computes this rule's adjustment for a single cart line.
    ///
    /// Only item-level kinds participate; a cart-level rule yields `None`.
    /// An ineligible product also yields `None` - absence means "this rule
    /// does not touch this line", never an error, and never a zero-amount
    /// entry in the breakdown.
    ///
    /// ## Calculation
    /// - `ItemPercent`: the raw product `rate × line_subtotal` is cash
    ///   rounded directly (no intermediate cent quantization).
    /// - `ItemFlat`: the flat amount is cash rounded; the line subtotal is
    ///   not consulted and the amount is NOT clamped to it.
    ///
    /// Both return the positive magnitude of the reduction (see the module
    /// docs on sign conventions).
    pub fn item_adjustment<E: Eligibility>(
        &self,
        item: &CartItem,
        cart: &Cart,
        eligibility: &E,
        rounding: CashRounding,
    ) -> Option<PriceAdjustment> {
        let discount = match self.kind {
            DiscountKind::CartPercent { .. } => return None,
            DiscountKind::ItemPercent { percent } => {
                if !eligibility.is_eligible(&item.product, cart) {
                    return None;
                }
                let numer = item.line_subtotal_cents as i128 * percent.bps() as i128;
                rounding.round_fraction(numer, 10_000)
            }
            DiscountKind::ItemFlat { amount } => {
                if !eligibility.is_eligible(&item.product, cart) {
                    return None;
                }
                rounding.apply(amount)
            }
        };

        debug!(
            rule = %self.name,
            sku = %item.product.sku,
            discount = %discount,
            "item adjustment computed"
        );
        Some(PriceAdjustment::new(&self.name, discount))
    }

    /// Walks every line of `cart`, collecting the adjustments this rule
    /// produces. Ineligible lines are skipped, not zero-filled, so the
    /// returned vector can be shorter than the cart.
    pub fn line_adjustments<E: Eligibility>(
        &self,
        cart: &Cart,
        eligibility: &E,
        rounding: CashRounding,
    ) -> Vec<PriceAdjustment> {
        cart.items()
            .iter()
            .filter_map(|item| self.item_adjustment(item, cart, eligibility, rounding))
            .collect()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
