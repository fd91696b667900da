//! # Cart
//!
//! The in-memory shopping cart: lines keyed by (item id, variant, delivery
//! speed), with pricing derived from frozen snapshots.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Storefront Action        Facade Call             Cart State Change    │
//! │  ─────────────────        ───────────             ─────────────────    │
//! │                                                                         │
//! │  Tap "Add to Feast" ─────► add() ────────────────► merge or push line  │
//! │                                                                         │
//! │  Quantity Stepper ───────► update_quantity() ────► set / remove line   │
//! │                                                                         │
//! │  Tap Trash Icon ─────────► remove() ─────────────► delete exact key    │
//! │                                                                         │
//! │  Checkout Succeeds ──────► clear() ──────────────► lines.clear()       │
//! │                                                                         │
//! │  NOTE: Removing a key that is not present is a NO-OP, never an error.  │
//! │        Idempotence beats strictness for cart mutations.                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{DeliverySpeed, MenuItem};
use crate::validation::validate_quantity;
use crate::{MAX_CART_LINES, MAX_LINE_QUANTITY};

// =============================================================================
// Cart Line
// =============================================================================

/// A line in the shopping cart.
///
/// ## Design Notes
/// - `item_id` references the catalog item
/// - `name` and `unit_price_rupees` are frozen copies taken when the line
///   was created: if the catalog price changes afterwards, this line (and
///   any order snapshotting it) keeps the original price
/// - The line's identity key is `(item_id, variant, speed)`
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CartLine {
    /// Catalog item id.
    pub item_id: String,

    /// Item name at time of adding (frozen).
    pub name: String,

    /// Unit price in whole rupees at time of adding (frozen).
    pub unit_price_rupees: i64,

    /// Selected variant, when the item offers variants.
    pub variant: Option<String>,

    /// Delivery speed selected for this line.
    pub speed: DeliverySpeed,

    /// Quantity in cart, always ≥ 1.
    pub quantity: i64,

    /// When this line was first added.
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl CartLine {
    /// Creates a new cart line from a menu item, freezing its price.
    fn from_item(
        item: &MenuItem,
        variant: Option<&str>,
        quantity: i64,
        speed: DeliverySpeed,
    ) -> Self {
        CartLine {
            item_id: item.id.clone(),
            name: item.name.clone(),
            unit_price_rupees: item.price_rupees,
            variant: variant.map(|v| v.to_string()),
            speed,
            quantity,
            added_at: Utc::now(),
        }
    }

    /// Checks whether this line matches the given cart key.
    fn matches_key(&self, item_id: &str, variant: Option<&str>, speed: DeliverySpeed) -> bool {
        self.item_id == item_id && self.variant.as_deref() == variant && self.speed == speed
    }

    /// Effective unit price including the delivery-speed surcharge.
    #[inline]
    pub fn unit_price_with_speed(&self) -> Money {
        Money::from_rupees(self.unit_price_rupees) + self.speed.surcharge()
    }

    /// Line total: (unit price + speed surcharge) × quantity.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price_with_speed().multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
///
/// ## Invariants
/// - Lines are unique by `(item_id, variant, speed)`; same-key adds merge
///   by summing quantities
/// - Line quantity is always ≥ 1; reaching 0 removes the line
/// - Maximum distinct lines: 50; maximum quantity per line: 99
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Cart {
    /// Lines in the cart.
    pub lines: Vec<CartLine>,

    /// When the cart was created/last cleared.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            lines: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Adds a menu item to the cart or increases quantity if a line with
    /// the same `(item_id, variant, speed)` key already exists.
    ///
    /// ## Behavior
    /// - Validates the quantity (must be 1..=99)
    /// - Rejects a variant the item does not offer
    /// - Same key already in cart: quantities are summed (never a
    ///   duplicate line)
    /// - New key: a line is pushed with the item's price frozen
    pub fn add(
        &mut self,
        item: &MenuItem,
        variant: Option<&str>,
        quantity: i64,
        speed: DeliverySpeed,
    ) -> CoreResult<()> {
        validate_quantity(quantity)?;

        if let Some(v) = variant {
            if !item.has_variant(v) {
                return Err(CoreError::UnknownVariant {
                    item: item.id.clone(),
                    variant: v.to_string(),
                });
            }
        }

        // Merge with an existing line when the key matches
        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|l| l.matches_key(&item.id, variant, speed))
        {
            let new_qty = line.quantity + quantity;
            if new_qty > MAX_LINE_QUANTITY {
                return Err(CoreError::QuantityTooLarge {
                    requested: new_qty,
                    max: MAX_LINE_QUANTITY,
                });
            }
            line.quantity = new_qty;
            return Ok(());
        }

        if self.lines.len() >= MAX_CART_LINES {
            return Err(CoreError::CartTooLarge {
                max: MAX_CART_LINES,
            });
        }

        self.lines
            .push(CartLine::from_item(item, variant, quantity, speed));
        Ok(())
    }

    /// Removes the line matching the exact `(item_id, variant, speed)` key.
    ///
    /// Removing a non-existent key is a no-op by design.
    pub fn remove(&mut self, item_id: &str, variant: Option<&str>, speed: DeliverySpeed) {
        self.lines
            .retain(|l| !l.matches_key(item_id, variant, speed));
    }

    /// Sets the quantity of the line matching the key.
    ///
    /// ## Behavior
    /// - Quantity 0: removes the line (a zero-quantity line never persists)
    /// - Key not present: no-op (idempotent, like `remove`)
    pub fn update_quantity(
        &mut self,
        item_id: &str,
        variant: Option<&str>,
        speed: DeliverySpeed,
        quantity: i64,
    ) -> CoreResult<()> {
        if quantity == 0 {
            self.remove(item_id, variant, speed);
            return Ok(());
        }

        validate_quantity(quantity)?;

        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|l| l.matches_key(item_id, variant, speed))
        {
            line.quantity = quantity;
        }
        Ok(())
    }

    /// Clears all lines from the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.created_at = Utc::now();
    }

    /// Total price: Σ (unit price + speed surcharge) × quantity.
    pub fn total_price(&self) -> Money {
        self.lines.iter().map(|l| l.line_total()).sum()
    }

    /// Total quantity across all lines (the cart badge number).
    pub fn total_count(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Number of distinct lines in the cart.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;

    fn momo_item(id: &str, price: i64) -> MenuItem {
        MenuItem {
            id: id.to_string(),
            name: format!("Momo {id}"),
            category: Category::Momos,
            description: String::new(),
            price_rupees: price,
            image: String::new(),
            variants: vec!["Steamed".to_string(), "Fried".to_string()],
            reviews: Vec::new(),
            featured: false,
        }
    }

    #[test]
    fn test_add_line() {
        let mut cart = Cart::new();
        let item = momo_item("m1", 60);

        cart.add(&item, Some("Steamed"), 2, DeliverySpeed::Standard)
            .unwrap();

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.total_count(), 2);
        assert_eq!(cart.total_price(), Money::from_rupees(120));
    }

    #[test]
    fn test_same_key_merges_quantities() {
        let mut cart = Cart::new();
        let item = momo_item("m1", 60);

        cart.add(&item, Some("Steamed"), 2, DeliverySpeed::Standard)
            .unwrap();
        cart.add(&item, Some("Steamed"), 3, DeliverySpeed::Standard)
            .unwrap();

        // Exactly one line whose quantity is the sum
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.lines[0].quantity, 5);
    }

    #[test]
    fn test_different_variant_or_speed_is_a_new_line() {
        let mut cart = Cart::new();
        let item = momo_item("m1", 60);

        cart.add(&item, Some("Steamed"), 1, DeliverySpeed::Standard)
            .unwrap();
        cart.add(&item, Some("Fried"), 1, DeliverySpeed::Standard)
            .unwrap();
        cart.add(&item, Some("Steamed"), 1, DeliverySpeed::Express)
            .unwrap();

        assert_eq!(cart.line_count(), 3);
    }

    #[test]
    fn test_express_surcharge_is_per_unit() {
        let mut cart = Cart::new();
        let item = momo_item("m1", 60);

        cart.add(&item, None, 3, DeliverySpeed::Express).unwrap();

        // (60 + 29) × 3 = 267
        assert_eq!(cart.total_price(), Money::from_rupees(267));
    }

    #[test]
    fn test_unknown_variant_rejected() {
        let mut cart = Cart::new();
        let item = momo_item("m1", 60);

        let err = cart
            .add(&item, Some("Grilled"), 1, DeliverySpeed::Standard)
            .unwrap_err();
        assert!(matches!(err, CoreError::UnknownVariant { .. }));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_exact_key_only() {
        let mut cart = Cart::new();
        let item = momo_item("m1", 60);

        cart.add(&item, Some("Steamed"), 1, DeliverySpeed::Standard)
            .unwrap();
        cart.add(&item, Some("Fried"), 1, DeliverySpeed::Standard)
            .unwrap();

        cart.remove("m1", Some("Steamed"), DeliverySpeed::Standard);

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.lines[0].variant.as_deref(), Some("Fried"));
    }

    #[test]
    fn test_remove_missing_key_is_noop() {
        let mut cart = Cart::new();
        let item = momo_item("m1", 60);
        cart.add(&item, None, 1, DeliverySpeed::Standard).unwrap();

        cart.remove("nope", None, DeliverySpeed::Standard);
        cart.remove("m1", Some("Fried"), DeliverySpeed::Standard);
        cart.remove("m1", None, DeliverySpeed::Express);

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.total_count(), 1);
    }

    #[test]
    fn test_update_quantity_zero_removes() {
        let mut cart = Cart::new();
        let item = momo_item("m1", 60);
        cart.add(&item, None, 2, DeliverySpeed::Standard).unwrap();

        cart.update_quantity("m1", None, DeliverySpeed::Standard, 0)
            .unwrap();

        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_quantity_missing_key_is_noop() {
        let mut cart = Cart::new();
        let item = momo_item("m1", 60);
        cart.add(&item, None, 2, DeliverySpeed::Standard).unwrap();

        cart.update_quantity("nope", None, DeliverySpeed::Standard, 7)
            .unwrap();

        assert_eq!(cart.lines[0].quantity, 2);
    }

    #[test]
    fn test_quantity_validation() {
        let mut cart = Cart::new();
        let item = momo_item("m1", 60);

        assert!(cart.add(&item, None, 0, DeliverySpeed::Standard).is_err());
        assert!(cart.add(&item, None, -3, DeliverySpeed::Standard).is_err());
        assert!(cart.is_empty());

        cart.add(&item, None, 98, DeliverySpeed::Standard).unwrap();
        let err = cart
            .add(&item, None, 2, DeliverySpeed::Standard)
            .unwrap_err();
        assert!(matches!(err, CoreError::QuantityTooLarge { .. }));
    }

    #[test]
    fn test_price_frozen_at_add_time() {
        let mut cart = Cart::new();
        let mut item = momo_item("m1", 60);

        cart.add(&item, None, 1, DeliverySpeed::Standard).unwrap();

        // Catalog price changes after the line was created
        item.price_rupees = 999;

        assert_eq!(cart.total_price(), Money::from_rupees(60));
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        let item = momo_item("m1", 60);
        cart.add(&item, None, 2, DeliverySpeed::Standard).unwrap();
        assert!(!cart.is_empty());

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total_price(), Money::zero());
    }
}
