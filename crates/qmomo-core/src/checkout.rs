//! # Checkout Engine
//!
//! Converts a priced cart into an immutable [`Order`] and commits the
//! loyalty/history updates as one visible step.
//!
//! ## Checkout Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         checkout()                                      │
//! │                                                                         │
//! │  1. cart empty? ──────────────► Err(EmptyCart), nothing mutated        │
//! │  2. subtotal   = cart.total_price()                                    │
//! │  3. tier       = current_tier(profile.points)                          │
//! │  4. points     = floor(floor(subtotal/10) × multiplier)                │
//! │  5. order      = frozen snapshot (uuid id, deep-copied lines,          │
//! │                  subtotal as total, status Delivered, timestamp)       │
//! │  6. commit     = prepend history + add points + clear cart             │
//! │                                                                         │
//! │  Steps 5-6 are a single atomic in-memory transition: no caller can     │
//! │  observe the order without the point/history/cart updates.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The stored order total is the item subtotal; the Bronze delivery fee is
//! a display-only addition surfaced through [`CheckoutSummary`].

use chrono::Utc;
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::cart::Cart;
use crate::error::{CoreError, CoreResult};
use crate::loyalty::{self, TierName};
use crate::money::Money;
use crate::types::{Order, OrderStatus, UserProfile};

// =============================================================================
// Checkout Summary
// =============================================================================

/// The checkout-screen totals: subtotal, tier-dependent delivery fee and
/// the amount the customer actually pays.
///
/// ## Note
/// `grand_total_rupees` (subtotal + fee) is what the summary screen shows;
/// only `subtotal_rupees` is recorded on the order.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CheckoutSummary {
    /// Item subtotal including per-unit speed surcharges.
    pub subtotal_rupees: i64,

    /// Flat delivery fee (₹40 for Bronze, ₹0 otherwise).
    pub delivery_fee_rupees: i64,

    /// Subtotal + delivery fee.
    pub grand_total_rupees: i64,
}

impl CheckoutSummary {
    /// Returns the subtotal as Money.
    #[inline]
    pub fn subtotal(&self) -> Money {
        Money::from_rupees(self.subtotal_rupees)
    }

    /// Returns the grand total as Money.
    #[inline]
    pub fn grand_total(&self) -> Money {
        Money::from_rupees(self.grand_total_rupees)
    }
}

/// Computes the display totals for a cart under a tier, without mutating
/// anything.
pub fn summary(cart: &Cart, tier: TierName) -> CheckoutSummary {
    let subtotal = cart.total_price();
    let fee = loyalty::delivery_fee(tier);

    CheckoutSummary {
        subtotal_rupees: subtotal.rupees(),
        delivery_fee_rupees: fee.rupees(),
        grand_total_rupees: (subtotal + fee).rupees(),
    }
}

// =============================================================================
// Checkout
// =============================================================================

/// Converts the cart into an immutable order and commits it.
///
/// On success the returned order has already been prepended to
/// `profile.history`, its points added to `profile.points`, and the cart
/// cleared. On `EmptyCart` nothing is mutated.
///
/// ## Rules
/// - `base_points = floor(subtotal / 10)`
/// - `points_earned = floor(base_points × tier multiplier)` with the tier
///   in effect BEFORE this order's points are credited
/// - Order status is `Delivered` immediately (no fulfillment backend)
/// - Lines are deep-copied: later catalog or cart changes never alter the
///   order
pub fn checkout(cart: &mut Cart, profile: &mut UserProfile) -> CoreResult<Order> {
    if cart.is_empty() {
        return Err(CoreError::EmptyCart);
    }

    let subtotal = cart.total_price();
    let tier = loyalty::current_tier(profile.points);
    let points = loyalty::points_earned(subtotal, tier);

    let order = Order {
        id: Uuid::new_v4().to_string(),
        lines: cart.lines.clone(),
        total_rupees: subtotal.rupees(),
        status: OrderStatus::Delivered,
        created_at: Utc::now(),
        points_earned: points,
    };

    // Commit: history prepend, point credit and cart clear together form
    // the single visible state transition.
    profile.history.insert(0, order.clone());
    profile.points += points;
    cart.clear();

    Ok(order)
}

// =============================================================================
// Unit Tests
// =============================================================================
