//! # qmomo-core: Pure Business Logic for the qmomo Storefront
//!
//! This crate is the **heart** of the qmomo demo storefront. It contains all
//! business logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        qmomo Architecture                               │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Storefront UI (out of scope)                 │   │
//! │  │    Menu Grid ──► Product Detail ──► Cart ──► Order History     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    qmomo-session                                │   │
//! │  │    list_catalog, add_to_cart, checkout, add_review, ...        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ qmomo-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │  loyalty  │  │   │
//! │  │   │ MenuItem  │  │   Money   │  │   Cart    │  │   Tiers   │  │   │
//! │  │   │   Order   │  │  ₹ math   │  │ CartLine  │  │  Q-Coins  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │ checkout  │  │  reviews  │  │  history  │  │ validation│  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (MenuItem, Review, Order, UserProfile, ...)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//! - [`catalog`] - The read-only menu catalog and its demo seed
//! - [`cart`] - Cart lines keyed by (item, variant, delivery speed)
//! - [`loyalty`] - Tier lookup, progress and Q-Coin accrual
//! - [`checkout`] - Converts a priced cart into an immutable order
//! - [`reviews`] - Review creation and rating aggregation
//! - [`history`] - Order history sorting
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are whole rupees (i64); tier
//!    multipliers are basis points, so Q-Coin math never touches a float
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use qmomo_core::loyalty::{self, TierName};
//! use qmomo_core::money::Money;
//!
//! // 450 Q-Coins sits inside the Bronze band (0..500)
//! assert_eq!(loyalty::current_tier(450), TierName::Bronze);
//! assert_eq!(loyalty::progress_percent(450), 90.0);
//!
//! // A ₹235 order at Silver earns floor(23 × 1.1) = 25 Q-Coins
//! let earned = loyalty::points_earned(Money::from_rupees(235), TierName::Silver);
//! assert_eq!(earned, 25);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod error;
pub mod history;
pub mod loyalty;
pub mod money;
pub mod reviews;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use qmomo_core::Money` instead of
// `use qmomo_core::money::Money`

pub use cart::{Cart, CartLine};
pub use catalog::Catalog;
pub use checkout::CheckoutSummary;
pub use error::{CoreError, CoreResult, ValidationError};
pub use history::SortCriterion;
pub use loyalty::{LoyaltyTier, TierName};
pub use money::Money;
pub use reviews::{RatingStats, RecentReview};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Per-unit surcharge for express delivery, in whole rupees.
///
/// ## Business Reason
/// Express delivery costs a flat ₹29 extra per unit, regardless of loyalty
/// tier. The tier benefit waives the per-order delivery fee, never this.
pub const EXPRESS_SURCHARGE_RUPEES: i64 = 29;

/// Flat per-order delivery fee charged to Bronze members, in whole rupees.
///
/// ## Business Reason
/// Free delivery is a Silver/Gold benefit. Bronze members pay a flat ₹40
/// per order, applied once at checkout-summary time (never stored on the
/// order total).
pub const BRONZE_DELIVERY_FEE_RUPEES: i64 = 40;

/// Rupees of order subtotal per base Q-Coin earned.
///
/// ## Business Reason
/// The loyalty program's headline rule: "Earn 1 Q-Coin per ₹10". Tier
/// multipliers apply on top of this base rate.
pub const RUPEES_PER_POINT: i64 = 10;

/// Maximum distinct lines allowed in a single cart
///
/// ## Business Reason
/// Prevents runaway carts and ensures reasonable order sizes for a
/// single-session storefront.
pub const MAX_CART_LINES: usize = 50;

/// Maximum quantity of a single cart line
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g. typing 100 instead of 10).
pub const MAX_LINE_QUANTITY: i64 = 99;
