//! # krona-core: Pure Pricing Logic for Krona
//!
//! This crate is the **heart** of Krona. It computes cart discounts with
//! Swedish cash rounding as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Krona Architecture                               │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Host Storefront Backend                        │   │
//! │  │   catalog ──► cart service ──► checkout ──► receipt             │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ rules + cart in, adjustments out      │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ krona-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   money   │  │ rounding  │  │ discount  │  │   types   │  │   │
//! │  │   │   Money   │  │   Cash    │  │   Rule    │  │   Cart    │  │   │
//! │  │   │  Percent* │  │ Rounding  │  │   Kind    │  │ CartItem  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                          (*lives in types)                      │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                                                         │
//! │  Persistence of rules, product eligibility scoping, localization of    │
//! │  labels: host concerns, reached only through this crate's seams        │
//! │  (the rule structs and the Eligibility trait).                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer-cent arithmetic (no floating point!)
//! - [`rounding`] - Swedish 5-cent cash rounding, threaded as a parameter
//! - [`types`] - Cart, CartItem, Product, Percent, PriceAdjustment
//! - [`discount`] - Discount rules and their calculations
//! - [`validation`] - Administrative input validation
//! - [`error`] - Typed error enums
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every calculation is deterministic - same cart,
//!    rule, and rounding in, same adjustment out
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are cents (i64), percentages
//!    are basis points - no float ever touches an amount
//! 4. **Explicit Rounding**: Whether 5-cent rounding applies is a parameter,
//!    never ambient global state
//!
//! ## Example Usage
//!
//! ```rust
//! use krona_core::discount::{DiscountKind, DiscountRule};
//! use krona_core::rounding::CashRounding;
//! use krona_core::types::{Cart, CartItem, Percent, Product};
//!
//! let cart = Cart::from_items(vec![CartItem {
//!     product: Product {
//!         id: "550e8400-e29b-41d4-a716-446655440000".into(),
//!         sku: "MUG-01".into(),
//!         name: "Mug".into(),
//!         unit_price_cents: 1000, // $10.00
//!         is_active: true,
//!     },
//!     quantity: 2,
//!     line_subtotal_cents: 2000,
//! }]);
//!
//! let rule = DiscountRule::new(
//!     "Summer sale",
//!     DiscountKind::CartPercent { percent: Percent::from_bps(1000) }, // 10%
//! )
//! .unwrap();
//!
//! let adj = rule
//!     .cart_adjustment(&cart, CashRounding::NearestFiveCents)
//!     .unwrap();
//! assert_eq!(adj.label, "Summer sale");
//! assert_eq!(adj.amount_cents, -200); // negative: a reduction
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod discount;
pub mod error;
pub mod money;
pub mod rounding;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use krona_core::Money` instead of
// `use krona_core::money::Money`

pub use discount::{AllProducts, DiscountKind, DiscountRule, Eligibility};
pub use error::{DiscountError, ValidationError};
pub use money::Money;
pub use rounding::CashRounding;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum discount percentage, in basis points (100.00%).
pub const MAX_PERCENT_BPS: u32 = 10_000;

/// Maximum flat discount amount, in cents.
///
/// ## Why 99999?
/// The host persists amounts in a fixed-precision column of 5 total digits
/// with 2 fractional, so 999.99 is the largest representable value.
pub const MAX_FLAT_AMOUNT_CENTS: i64 = 99_999;

/// Maximum length of a rule label, in characters.
pub const MAX_LABEL_LEN: usize = 100;
