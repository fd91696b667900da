//! # Session
//!
//! The per-visit state object: one catalog, one cart, one user profile.
//!
//! ## Facade Surface
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Session Operations                                   │
//! │                                                                         │
//! │  Browse:   list_catalog(category?)  featured()  item(id)               │
//! │  Cart:     add_to_cart  remove_from_cart  update_cart_quantity         │
//! │            cart_total  cart_count                                       │
//! │  Order:    checkout_summary  checkout                                   │
//! │  Reviews:  add_review  rating_stats  recent_reviews                     │
//! │  Loyalty:  current_tier  next_tier  progress_percent                    │
//! │  History:  sorted_history                                               │
//! │                                                                         │
//! │  All operations are synchronous and run to completion; there is no     │
//! │  shared state outside this object.                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use qmomo_core::{
    cart::Cart,
    catalog::Catalog,
    checkout::{self, CheckoutSummary},
    error::{CoreError, CoreResult},
    history::{self, SortCriterion},
    loyalty::{self, LoyaltyTier, TierName},
    money::Money,
    reviews::{self, RatingStats, RecentReview},
    types::{Category, DeliverySpeed, MenuItem, Order, Review, UserProfile},
};

// =============================================================================
// Checkout Outcome
// =============================================================================

/// What the UI needs after a successful checkout: the committed order and
/// the display summary (subtotal / delivery fee / grand total) that was in
/// effect when the customer confirmed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutOutcome {
    pub order: Order,
    pub summary: CheckoutSummary,
}

// =============================================================================
// Session
// =============================================================================

/// A single storefront visit: catalog, cart and profile under one owner.
///
/// ## Invariant Preservation
/// All mutations flow through the methods below (which delegate to
/// qmomo-core); nothing else hands out `&mut` access to the fields.
#[derive(Debug, Clone)]
pub struct Session {
    catalog: Catalog,
    cart: Cart,
    profile: UserProfile,
}

impl Session {
    /// Creates a session over a catalog seed and a user profile.
    pub fn new(catalog: Catalog, profile: UserProfile) -> Self {
        Session {
            catalog,
            cart: Cart::new(),
            profile,
        }
    }

    /// The stock demo session: demo menu, "Momo Lover" at 450 Q-Coins.
    pub fn demo() -> Self {
        Session::new(Catalog::demo(), UserProfile::demo())
    }

    // -------------------------------------------------------------------------
    // Browse
    // -------------------------------------------------------------------------

    /// Lists catalog items, optionally filtered by category.
    pub fn list_catalog(&self, category: Option<Category>) -> Vec<&MenuItem> {
        debug!(?category, "list_catalog");
        self.catalog.list(category)
    }

    /// Items flagged for the featured carousel.
    pub fn featured(&self) -> Vec<&MenuItem> {
        self.catalog.featured()
    }

    /// Looks up a single item for the detail view.
    pub fn item(&self, item_id: &str) -> CoreResult<&MenuItem> {
        self.catalog
            .get(item_id)
            .ok_or_else(|| CoreError::ItemNotFound(item_id.to_string()))
    }

    // -------------------------------------------------------------------------
    // Cart
    // -------------------------------------------------------------------------

    /// Adds a catalog item to the cart, freezing its current price.
    ///
    /// Lines with the same (item, variant, speed) key merge; see
    /// [`Cart::add`].
    pub fn add_to_cart(
        &mut self,
        item_id: &str,
        variant: Option<&str>,
        quantity: i64,
        speed: DeliverySpeed,
    ) -> CoreResult<()> {
        debug!(item_id, ?variant, quantity, ?speed, "add_to_cart");

        let item = self
            .catalog
            .get(item_id)
            .ok_or_else(|| CoreError::ItemNotFound(item_id.to_string()))?;
        self.cart.add(item, variant, quantity, speed)?;

        info!(item_id, quantity, cart_count = self.cart.total_count(), "Added to cart");
        Ok(())
    }

    /// Removes the cart line matching the exact key; missing keys are a
    /// no-op.
    pub fn remove_from_cart(&mut self, item_id: &str, variant: Option<&str>, speed: DeliverySpeed) {
        debug!(item_id, ?variant, ?speed, "remove_from_cart");
        self.cart.remove(item_id, variant, speed);
    }

    /// Sets the quantity of a cart line (0 removes it).
    pub fn update_cart_quantity(
        &mut self,
        item_id: &str,
        variant: Option<&str>,
        speed: DeliverySpeed,
        quantity: i64,
    ) -> CoreResult<()> {
        debug!(item_id, ?variant, ?speed, quantity, "update_cart_quantity");
        self.cart.update_quantity(item_id, variant, speed, quantity)
    }

    /// Current cart total: Σ (unit price + speed surcharge) × quantity.
    pub fn cart_total(&self) -> Money {
        self.cart.total_price()
    }

    /// Total quantity across cart lines (the badge number).
    pub fn cart_count(&self) -> i64 {
        self.cart.total_count()
    }

    /// Read access to the cart lines for display.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    // -------------------------------------------------------------------------
    // Checkout
    // -------------------------------------------------------------------------

    /// The checkout-screen totals under the user's current tier.
    pub fn checkout_summary(&self) -> CheckoutSummary {
        let tier = loyalty::current_tier(self.profile.points);
        checkout::summary(&self.cart, tier)
    }

    /// Converts the cart into an order and commits it atomically.
    ///
    /// Returns the committed order together with the summary that was
    /// displayed at confirmation time (fee computed with the tier in
    /// effect BEFORE the new points were credited).
    pub fn checkout(&mut self) -> CoreResult<CheckoutOutcome> {
        debug!("checkout");

        let summary = self.checkout_summary();
        let order = checkout::checkout(&mut self.cart, &mut self.profile)?;

        info!(
            order_id = %order.id,
            total = %order.total(),
            points_earned = order.points_earned,
            balance = self.profile.points,
            "Order placed"
        );

        Ok(CheckoutOutcome { order, summary })
    }

    // -------------------------------------------------------------------------
    // Reviews
    // -------------------------------------------------------------------------

    /// Posts a review on behalf of the session user.
    pub fn add_review(&mut self, item_id: &str, rating: u8, comment: &str) -> CoreResult<Review> {
        debug!(item_id, rating, "add_review");

        let user_name = self.profile.name.clone();
        let review = reviews::add_review(&mut self.catalog, item_id, &user_name, rating, comment)?;

        info!(item_id, review_id = %review.id, rating, "Review posted");
        Ok(review)
    }

    /// Rating histogram and average for an item.
    pub fn rating_stats(&self, item_id: &str) -> CoreResult<RatingStats> {
        Ok(reviews::rating_stats(self.item(item_id)?))
    }

    /// The newest reviews across the catalog, truncated to `limit`.
    pub fn recent_reviews(&self, limit: usize) -> Vec<RecentReview> {
        reviews::recent_reviews(&self.catalog, limit)
    }

    // -------------------------------------------------------------------------
    // Loyalty
    // -------------------------------------------------------------------------

    /// The user's current tier.
    pub fn current_tier(&self) -> TierName {
        loyalty::current_tier(self.profile.points)
    }

    /// The next tier to unlock, if any.
    pub fn next_tier(&self) -> Option<TierName> {
        loyalty::next_tier(self.profile.points)
    }

    /// Progress through the current tier band, 0..=100.
    pub fn progress_percent(&self) -> f64 {
        loyalty::progress_percent(self.profile.points)
    }

    /// Display projection of the current tier for the loyalty card.
    pub fn tier_card(&self) -> LoyaltyTier {
        LoyaltyTier::from(self.current_tier())
    }

    // -------------------------------------------------------------------------
    // History / Profile
    // -------------------------------------------------------------------------

    /// Order history sorted by the criterion, descending, non-destructive.
    pub fn sorted_history(&self, criterion: SortCriterion) -> Vec<Order> {
        history::sort_history(&self.profile.history, criterion)
    }

    /// Read access to the user profile.
    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    /// Read access to the catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
