//! # Domain Types
//!
//! Core domain types the discount engine reads and produces.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │    CartItem     │   │      Cart       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (UUID)      │   │  product        │   │  items (Vec)    │       │
//! │  │  sku (business) │   │  quantity       │   │  total()        │       │
//! │  │  unit_price     │   │  line_subtotal  │   │                 │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │    Percent      │   │ PriceAdjustment │                             │
//! │  │  ─────────────  │   │  ─────────────  │                             │
//! │  │  bps (u32)      │   │  label          │                             │
//! │  │  1000 = 10.00%  │   │  amount (signed)│                             │
//! │  └─────────────────┘   └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The cart and its items are owned by the host storefront; this crate only
//! reads them. `PriceAdjustment` is the one thing it produces: an ephemeral
//! labelled amount the host folds into its price breakdown, never persisted
//! here.

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Percent
// =============================================================================

/// A percentage represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 1000 bps = 10.00%, which is exactly the two-fractional-digit resolution
/// discount percentages are configured with. No floats anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Percent(u32);

impl Percent {
    /// Creates a percentage from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        Percent(bps)
    }

    /// Creates a percentage from a float (for convenience at config edges).
    pub fn from_percentage(pct: f64) -> Self {
        Percent((pct * 100.0).round() as u32)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero percent.
    #[inline]
    pub const fn zero() -> Self {
        Percent(0)
    }

    /// Checks if the rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for Percent {
    fn default() -> Self {
        Percent::zero()
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product as the discount engine sees it.
///
/// ## Dual-Key Identity Pattern
/// - `id`: UUID v4 - immutable, used for relations
/// - `sku`: business identifier - human-readable, potentially mutable
///
/// The host's catalog carries far more than this (stock, tax class, media);
/// pricing only needs identity and the unit price.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Stock Keeping Unit - business identifier.
    pub sku: String,

    /// Display name shown to the shopper and on receipts.
    pub name: String,

    /// Unit price in cents (smallest currency unit).
    pub unit_price_cents: i64,

    /// Whether the product is active (soft delete).
    pub is_active: bool,
}

impl Product {
    /// Returns the unit price as a Money type.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }
}

// =============================================================================
// Cart Item
// =============================================================================

/// A line in the shopper's cart.
///
/// `line_subtotal_cents` is the host-computed price for the whole line,
/// possibly already reduced by earlier adjustments; it is NOT re-derived
/// from `unit_price × quantity` here.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CartItem {
    /// The product on this line.
    pub product: Product,

    /// Quantity ordered.
    pub quantity: i64,

    /// Line subtotal in cents, after any previously applied adjustments.
    pub line_subtotal_cents: i64,
}

impl CartItem {
    /// Returns the line subtotal as Money.
    #[inline]
    pub fn line_subtotal(&self) -> Money {
        Money::from_cents(self.line_subtotal_cents)
    }

    /// Returns `unit_price × quantity`, ignoring prior adjustments.
    #[inline]
    pub fn gross_line_total(&self) -> Money {
        self.product.unit_price().multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Cart
// =============================================================================

/// An ordered collection of cart items. Read-only from the engine's
/// perspective; the host owns mutation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Creates an empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Creates a cart from existing items, preserving order.
    pub fn from_items(items: Vec<CartItem>) -> Self {
        Cart { items }
    }

    /// The items, in insertion order.
    #[inline]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Number of lines in the cart.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart has no lines.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Gross cart total: `Σ unit_price × quantity` over all lines.
    ///
    /// Deliberately built from unit prices rather than line subtotals, so a
    /// cart-wide percentage is taken off the undiscounted merchandise value.
    ///
    /// ## Example
    /// ```rust
    /// use krona_core::types::{Cart, CartItem, Product};
    ///
    /// let cart = Cart::from_items(vec![
    ///     CartItem {
    ///         product: Product {
    ///             id: "550e8400-e29b-41d4-a716-446655440000".into(),
    ///             sku: "MUG-01".into(),
    ///             name: "Mug".into(),
    ///             unit_price_cents: 1000,
    ///             is_active: true,
    ///         },
    ///         quantity: 2,
    ///         line_subtotal_cents: 2000,
    ///     },
    /// ]);
    /// assert_eq!(cart.total().cents(), 2000);
    /// ```
    pub fn total(&self) -> Money {
        self.items
            .iter()
            .map(CartItem::gross_line_total)
            .fold(Money::zero(), |acc, line| acc + line)
    }
}

// =============================================================================
// Price Adjustment
// =============================================================================

/// A labelled, signed amount produced by one discount calculation.
///
/// The host appends these to its price breakdown: the label is shown on the
/// receipt verbatim, the amount is folded into the final total. Negative
/// amounts reduce the total. Ephemeral; recomputed on every cart change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PriceAdjustment {
    /// Receipt label, taken verbatim from the rule's name.
    pub label: String,

    /// Signed amount in cents.
    pub amount_cents: i64,
}

impl PriceAdjustment {
    /// Creates an adjustment from a label and a signed amount.
    pub fn new(label: impl Into<String>, amount: Money) -> Self {
        PriceAdjustment {
            label: label.into(),
            amount_cents: amount.cents(),
        }
    }

    /// Returns the signed amount as Money.
    #[inline]
    pub fn amount(&self) -> Money {
        Money::from_cents(self.amount_cents)
    }
}

impl fmt::Display for PriceAdjustment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label, self.amount())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn product(sku: &str, unit_price_cents: i64) -> Product {
        Product {
            id: "550e8400-e29b-41d4-a716-446655440000".to_string(),
            sku: sku.to_string(),
            name: format!("Product {sku}"),
            unit_price_cents,
            is_active: true,
        }
    }

    #[test]
    fn test_percent_from_bps() {
        let rate = Percent::from_bps(1000);
        assert_eq!(rate.bps(), 1000);
        assert!((rate.percentage() - 10.0).abs() < 0.001);
    }

    #[test]
    fn test_percent_from_percentage() {
        assert_eq!(Percent::from_percentage(10.0).bps(), 1000);
        assert_eq!(Percent::from_percentage(8.25).bps(), 825);
        assert!(Percent::default().is_zero());
    }

    #[test]
    fn test_cart_total() {
        // Two mugs at $10.00 plus one pot at $15.00 = $35.00
        let cart = Cart::from_items(vec![
            CartItem {
                product: product("MUG-01", 1000),
                quantity: 2,
                line_subtotal_cents: 2000,
            },
            CartItem {
                product: product("POT-01", 1500),
                quantity: 1,
                line_subtotal_cents: 1500,
            },
        ]);
        assert_eq!(cart.total().cents(), 3500);
        assert_eq!(cart.len(), 2);
        assert!(!cart.is_empty());
    }

    #[test]
    fn test_empty_cart_total_is_zero() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), crate::money::Money::zero());
    }

    #[test]
    fn test_cart_total_ignores_line_subtotals() {
        // Line subtotal already carries a prior reduction; the gross total
        // must still come from unit price × quantity.
        let cart = Cart::from_items(vec![CartItem {
            product: product("MUG-01", 1000),
            quantity: 2,
            line_subtotal_cents: 1800,
        }]);
        assert_eq!(cart.total().cents(), 2000);
    }

    #[test]
    fn test_adjustment_display() {
        let adj = PriceAdjustment::new("Summer sale", Money::from_cents(-350));
        assert_eq!(format!("{adj}"), "Summer sale: -$3.50");
        assert_eq!(adj.amount().cents(), -350);
    }

    #[test]
    fn test_adjustment_serde_round_trip() {
        let adj = PriceAdjustment::new("10% off", Money::from_cents(-350));
        let json = serde_json::to_string(&adj).unwrap();
        let back: PriceAdjustment = serde_json::from_str(&json).unwrap();
        assert_eq!(back, adj);
    }
}
