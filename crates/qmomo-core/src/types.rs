//! # Domain Types
//!
//! Core domain types used throughout the qmomo storefront.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    MenuItem     │   │      Order      │   │    Review       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (catalog)   │   │  id (UUID)      │   │  id (UUID)      │       │
//! │  │  category       │   │  lines (frozen) │   │  rating 1..=5   │       │
//! │  │  price_rupees   │   │  total_rupees   │   │  comment        │       │
//! │  │  variants       │   │  points_earned  │   │  created_at     │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Category     │   │  DeliverySpeed  │   │  OrderStatus    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  Momos          │   │  Standard  +₹0  │   │  Preparing      │       │
//! │  │  Burgers ...    │   │  Express  +₹29  │   │  Delivered ...  │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cart::CartLine;
use crate::money::Money;
use crate::EXPRESS_SURCHARGE_RUPEES;

// =============================================================================
// Category
// =============================================================================

/// A menu category chip in the storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Momos,
    Burgers,
    Fries,
    Pizzas,
    Drinks,
}

impl Category {
    /// All categories, in the order the storefront lists them.
    pub const ALL: [Category; 5] = [
        Category::Momos,
        Category::Burgers,
        Category::Fries,
        Category::Pizzas,
        Category::Drinks,
    ];
}

// =============================================================================
// Delivery Speed
// =============================================================================

/// How fast a cart line should be delivered.
///
/// The surcharge is per unit and independent of loyalty tier; the tier
/// benefit waives the per-order delivery fee, not this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum DeliverySpeed {
    /// Regular delivery, no surcharge.
    Standard,
    /// Expedited delivery, fixed surcharge per unit.
    Express,
}

impl DeliverySpeed {
    /// Fixed per-unit surcharge for this speed.
    ///
    /// ## Surcharge Table
    /// | Speed    | Surcharge |
    /// |----------|-----------|
    /// | Standard | ₹0        |
    /// | Express  | ₹29       |
    #[inline]
    pub const fn surcharge(&self) -> Money {
        match self {
            DeliverySpeed::Standard => Money::zero(),
            DeliverySpeed::Express => Money::from_rupees(EXPRESS_SURCHARGE_RUPEES),
        }
    }
}

impl Default for DeliverySpeed {
    fn default() -> Self {
        DeliverySpeed::Standard
    }
}

// =============================================================================
// Review
// =============================================================================

/// A customer review attached to a menu item.
///
/// Immutable once created; the review aggregator prepends new reviews so
/// lists are always most-recent-first.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Review {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Display name of the reviewer.
    pub user_name: String,

    /// Star rating, always within 1..=5.
    pub rating: u8,

    /// Free-text comment, never empty.
    pub comment: String,

    /// When the review was posted.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Menu Item
// =============================================================================

/// A purchasable item in the menu catalog.
///
/// Owned by the [`crate::catalog::Catalog`]; everything except the review
/// list is immutable for the item's lifetime.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MenuItem {
    /// Unique catalog identifier (e.g. "m1").
    pub id: String,

    /// Display name shown on cards and receipts.
    pub name: String,

    /// Menu category this item belongs to.
    pub category: Category,

    /// Short marketing description.
    pub description: String,

    /// Unit price in whole rupees.
    pub price_rupees: i64,

    /// Image URL for the storefront card.
    pub image: String,

    /// Ordered list of variant labels (e.g. Steamed / Fried).
    /// Empty when the item has no variants.
    pub variants: Vec<String>,

    /// Customer reviews, most recent first. Appended over the item's
    /// lifetime by the review aggregator.
    pub reviews: Vec<Review>,

    /// Whether the item appears in the featured carousel.
    pub featured: bool,
}

impl MenuItem {
    /// Returns the unit price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_rupees(self.price_rupees)
    }

    /// Checks whether `variant` is one of this item's listed variants.
    pub fn has_variant(&self, variant: &str) -> bool {
        self.variants.iter().any(|v| v == variant)
    }
}

// =============================================================================
// Order Status
// =============================================================================

/// The status of a placed order.
///
/// With no real fulfillment backend, checkout marks orders `Delivered`
/// immediately; the intermediate states exist for the tracking display
/// only and are never persisted mid-way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Kitchen is preparing the order.
    Preparing,
    /// Order left the kitchen.
    OutForDelivery,
    /// Order reached the customer.
    Delivered,
}

// =============================================================================
// Order
// =============================================================================

/// A completed order.
///
/// Uses the snapshot pattern to freeze cart data at checkout time: later
/// catalog price changes never retroactively alter a past order's total.
/// Created exactly once per checkout and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Order {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Deep-copied cart lines at checkout time (frozen).
    pub lines: Vec<CartLine>,

    /// Item subtotal in whole rupees at checkout time (frozen).
    ///
    /// ## Note
    /// The Bronze delivery fee is a display-only addition at
    /// checkout-summary time and is deliberately NOT part of this total.
    pub total_rupees: i64,

    /// Order status (always `Delivered` at creation).
    pub status: OrderStatus,

    /// When the order was placed.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    /// Q-Coins earned by this order, fixed at creation.
    pub points_earned: i64,
}

impl Order {
    /// Returns the order total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_rupees(self.total_rupees)
    }
}

// =============================================================================
// User Profile
// =============================================================================

/// The single per-session user profile.
///
/// ## Invariants
/// - `points` is non-negative and monotonically non-decreasing
/// - `history` is most-recent-first
/// - Both are mutated only by checkout
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UserProfile {
    /// Display name.
    pub name: String,

    /// Current Q-Coin balance.
    pub points: i64,

    /// Past orders, most recent first.
    pub history: Vec<Order>,
}

impl UserProfile {
    /// Creates a fresh profile with no points and no history.
    pub fn new(name: impl Into<String>) -> Self {
        UserProfile {
            name: name.into(),
            points: 0,
            history: Vec::new(),
        }
    }

    /// The demo profile the storefront boots with.
    pub fn demo() -> Self {
        UserProfile {
            name: "Momo Lover".to_string(),
            points: 450,
            history: Vec::new(),
        }
    }

    /// Number of orders placed this session.
    pub fn total_orders(&self) -> usize {
        self.history.len()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speed_surcharge_table() {
        assert_eq!(DeliverySpeed::Standard.surcharge(), Money::zero());
        assert_eq!(DeliverySpeed::Express.surcharge(), Money::from_rupees(29));
        assert_eq!(DeliverySpeed::default(), DeliverySpeed::Standard);
    }

    #[test]
    fn test_has_variant() {
        let item = MenuItem {
            id: "m1".to_string(),
            name: "Classical Veggie".to_string(),
            category: Category::Momos,
            description: String::new(),
            price_rupees: 60,
            image: String::new(),
            variants: vec!["Steamed".to_string(), "Fried".to_string()],
            reviews: Vec::new(),
            featured: false,
        };

        assert!(item.has_variant("Steamed"));
        assert!(item.has_variant("Fried"));
        assert!(!item.has_variant("Grilled"));
        assert_eq!(item.price(), Money::from_rupees(60));
    }

    #[test]
    fn test_demo_profile() {
        let profile = UserProfile::demo();
        assert_eq!(profile.name, "Momo Lover");
        assert_eq!(profile.points, 450);
        assert_eq!(profile.total_orders(), 0);
    }
}
