//! # Catalog
//!
//! The read-only menu catalog: the external collaborator that seeds the
//! storefront with purchasable items.
//!
//! The catalog owns its [`MenuItem`]s. Items are immutable except for
//! their review lists, which the review aggregator appends to over the
//! session. [`Catalog::demo`] carries the stock storefront menu for demos
//! and tests.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::types::{Category, MenuItem, Review};

// =============================================================================
// Catalog
// =============================================================================

/// The menu catalog supplied to a session as a static in-memory seed.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Catalog {
    items: Vec<MenuItem>,
}

impl Catalog {
    /// Creates a catalog from a list of items.
    pub fn new(items: Vec<MenuItem>) -> Self {
        Catalog { items }
    }

    /// All items, in menu order.
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Number of items in the catalog.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Checks if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Looks up an item by id.
    pub fn get(&self, item_id: &str) -> Option<&MenuItem> {
        self.items.iter().find(|i| i.id == item_id)
    }

    /// Looks up an item by id for mutation (review attachment).
    pub fn get_mut(&mut self, item_id: &str) -> Option<&mut MenuItem> {
        self.items.iter_mut().find(|i| i.id == item_id)
    }

    /// Lists items, optionally filtered by category.
    ///
    /// `None` returns the full menu in catalog order.
    pub fn list(&self, category: Option<Category>) -> Vec<&MenuItem> {
        match category {
            Some(cat) => self.items.iter().filter(|i| i.category == cat).collect(),
            None => self.items.iter().collect(),
        }
    }

    /// Items flagged for the featured carousel.
    pub fn featured(&self) -> Vec<&MenuItem> {
        self.items.iter().filter(|i| i.featured).collect()
    }

    /// The stock demo menu the storefront ships with.
    pub fn demo() -> Self {
        Catalog::new(vec![
            // ---------------------------------------------------------------
            // Momos
            // ---------------------------------------------------------------
            demo_item(
                "m1",
                "Classical Veggie",
                Category::Momos,
                "Traditional veggie filling steamed to perfection with Himalayan spices.",
                60,
                &["Steamed", "Fried"],
                vec![
                    seed_review("Anjali S.", 5, "Best momos in town! So juicy.", 24),
                    seed_review("Rahul K.", 4, "Really good, but a bit spicy for me.", 48),
                ],
                false,
            ),
            demo_item(
                "m2",
                "Paneer Delight",
                Category::Momos,
                "Soft paneer chunks mixed with aromatic herbs and bell peppers.",
                75,
                &["Steamed", "Fried"],
                vec![seed_review("Priya M.", 5, "The paneer is so fresh!", 14)],
                true,
            ),
            demo_item(
                "m3",
                "Momo Mushroom",
                Category::Momos,
                "Earthy mushrooms sautéed with garden greens and garlic.",
                85,
                &["Steamed", "Fried"],
                Vec::new(),
                false,
            ),
            demo_item(
                "m4",
                "Cheese Burst",
                Category::Momos,
                "A blend of three cheeses that melts in your mouth with every bite.",
                70,
                &["Steamed", "Fried"],
                vec![seed_review("Vikram R.", 4, "Cheesy goodness!", 1)],
                false,
            ),
            demo_item(
                "m5",
                "Choco Bliss",
                Category::Momos,
                "A sweet twist! Dark chocolate filling inside a delicate wrapper.",
                75,
                &["Baked"],
                Vec::new(),
                false,
            ),
            // ---------------------------------------------------------------
            // Burgers
            // ---------------------------------------------------------------
            demo_item(
                "b1",
                "Junior Delight",
                Category::Burgers,
                "Perfectly sized veggie patty with fresh lettuce and mayo.",
                55,
                &[],
                Vec::new(),
                false,
            ),
            demo_item(
                "b2",
                "Mighty Monsters",
                Category::Burgers,
                "Double patty, extra cheese, and our signature Q-Sauce.",
                79,
                &[],
                vec![seed_review("Chef J.", 5, "Huge and delicious.", 0)],
                true,
            ),
            // ---------------------------------------------------------------
            // Fries
            // ---------------------------------------------------------------
            demo_item(
                "f1",
                "Tiny Treat",
                Category::Fries,
                "Golden, crispy, and lightly salted classic fries.",
                45,
                &[],
                Vec::new(),
                false,
            ),
            // ---------------------------------------------------------------
            // Pizzas
            // ---------------------------------------------------------------
            demo_item(
                "p1",
                "Margherita",
                Category::Pizzas,
                "Fresh basil, gooey mozzarella, and our hand-crushed tomato sauce.",
                99,
                &[],
                Vec::new(),
                false,
            ),
            demo_item(
                "p5",
                "Paneer Peri-Peri",
                Category::Pizzas,
                "Spiced paneer, onions, and bell peppers with peri-peri drizzle.",
                239,
                &[],
                Vec::new(),
                true,
            ),
            // ---------------------------------------------------------------
            // Drinks
            // ---------------------------------------------------------------
            demo_item(
                "d1",
                "Queen's Cold Coffee",
                Category::Drinks,
                "Brewed over 12 hours for a smooth, rich, and creamy finish.",
                75,
                &[],
                Vec::new(),
                true,
            ),
        ])
    }
}

/// Builds a demo menu item.
#[allow(clippy::too_many_arguments)]
fn demo_item(
    id: &str,
    name: &str,
    category: Category,
    description: &str,
    price_rupees: i64,
    variants: &[&str],
    reviews: Vec<Review>,
    featured: bool,
) -> MenuItem {
    MenuItem {
        id: id.to_string(),
        name: name.to_string(),
        category,
        description: description.to_string(),
        price_rupees,
        image: format!("https://images.qmomo.dev/{id}.jpg"),
        variants: variants.iter().map(|v| v.to_string()).collect(),
        reviews,
        featured,
    }
}

/// Builds a seed review posted `hours_ago` hours in the past.
fn seed_review(user_name: &str, rating: u8, comment: &str, hours_ago: i64) -> Review {
    Review {
        id: Uuid::new_v4().to_string(),
        user_name: user_name.to_string(),
        rating,
        comment: comment.to_string(),
        created_at: Utc::now() - Duration::hours(hours_ago),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
