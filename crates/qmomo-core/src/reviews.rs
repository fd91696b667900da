//! # Review Aggregator
//!
//! Attaches new reviews to catalog items and computes per-item rating
//! statistics and the cross-catalog recent-reviews strip.
//!
//! ## Review Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Review Lifecycle                                    │
//! │                                                                         │
//! │  "Rate this dish" form                                                 │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  add_review(catalog, item_id, user, rating, comment)                   │
//! │        │                                                                │
//! │        ├── rating ∉ 1..=5          → Err(Validation)                   │
//! │        ├── comment empty           → Err(Validation)                   │
//! │        ├── item_id unknown         → Err(ItemNotFound)                 │
//! │        │                                                                │
//! │        └── OK → uuid id + timestamp, PREPENDED to item.reviews         │
//! │                 (lists stay most-recent-first)                         │
//! │                                                                         │
//! │  rating_stats(item)      → star histogram + average (0.0 when empty)   │
//! │  recent_reviews(catalog) → flatten, sort by time desc, truncate        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::catalog::Catalog;
use crate::error::{CoreError, CoreResult};
use crate::types::{MenuItem, Review};
use crate::validation::{validate_comment, validate_rating, validate_user_name};

// =============================================================================
// Add Review
// =============================================================================

/// Validates and attaches a new review to a catalog item.
///
/// Generates a unique id and the current timestamp, then prepends the
/// review to the item's list so displays are most-recent-first. Returns a
/// copy of the created review.
pub fn add_review(
    catalog: &mut Catalog,
    item_id: &str,
    user_name: &str,
    rating: u8,
    comment: &str,
) -> CoreResult<Review> {
    validate_rating(rating)?;
    let comment = validate_comment(comment)?;
    let user_name = validate_user_name(user_name)?;

    let item = catalog
        .get_mut(item_id)
        .ok_or_else(|| CoreError::ItemNotFound(item_id.to_string()))?;

    let review = Review {
        id: Uuid::new_v4().to_string(),
        user_name,
        rating,
        comment,
        created_at: Utc::now(),
    };

    item.reviews.insert(0, review.clone());
    Ok(review)
}

// =============================================================================
// Rating Stats
// =============================================================================

/// Per-item rating statistics for the ratings summary card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RatingStats {
    /// Review counts per star; index 0 holds 1-star, index 4 holds 5-star.
    pub counts: [i64; 5],

    /// Total number of reviews. Always equals the sum of `counts`.
    pub total: i64,

    /// Mean rating, `0.0` when there are no reviews (never NaN).
    pub average: f64,
}

impl RatingStats {
    /// Count of reviews with the given star rating (1..=5).
    pub fn star_count(&self, star: u8) -> i64 {
        debug_assert!((1..=5).contains(&star));
        self.counts[(star - 1) as usize]
    }
}

/// Computes the star histogram and average rating for an item.
pub fn rating_stats(item: &MenuItem) -> RatingStats {
    let mut counts = [0_i64; 5];
    let mut sum = 0_i64;

    for review in &item.reviews {
        // Ratings are validated on creation, but seed data could be off;
        // out-of-range ratings are skipped rather than panicking
        if (1..=5).contains(&review.rating) {
            counts[(review.rating - 1) as usize] += 1;
            sum += review.rating as i64;
        }
    }

    let total: i64 = counts.iter().sum();
    let average = if total > 0 {
        sum as f64 / total as f64
    } else {
        0.0
    };

    RatingStats {
        counts,
        total,
        average,
    }
}

// =============================================================================
// Recent Reviews
// =============================================================================

/// A review paired with the item it belongs to, for the community strip.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RecentReview {
    /// Catalog id of the reviewed item.
    pub item_id: String,

    /// Name of the reviewed item.
    pub item_name: String,

    /// The review itself.
    pub review: Review,
}

/// The newest reviews across the whole catalog.
///
/// Flattens every item's reviews, sorts by timestamp descending (stable:
/// ties keep their original relative order) and truncates to `limit`.
pub fn recent_reviews(catalog: &Catalog, limit: usize) -> Vec<RecentReview> {
    let mut all: Vec<RecentReview> = catalog
        .items()
        .iter()
        .flat_map(|item| {
            item.reviews.iter().map(|r| RecentReview {
                item_id: item.id.clone(),
                item_name: item.name.clone(),
                review: r.clone(),
            })
        })
        .collect();

    // sort_by is stable, so equal timestamps preserve catalog order
    all.sort_by(|a, b| b.review.created_at.cmp(&a.review.created_at));
    all.truncate(limit);
    all
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;
    use chrono::Duration;

    fn bare_item(id: &str) -> MenuItem {
        MenuItem {
            id: id.to_string(),
            name: format!("Item {id}"),
            category: Category::Momos,
            description: String::new(),
            price_rupees: 60,
            image: String::new(),
            variants: Vec::new(),
            reviews: Vec::new(),
            featured: false,
        }
    }

    fn review_at(rating: u8, hours_ago: i64) -> Review {
        Review {
            id: Uuid::new_v4().to_string(),
            user_name: "Tester".to_string(),
            rating,
            comment: "ok".to_string(),
            created_at: Utc::now() - Duration::hours(hours_ago),
        }
    }

    #[test]
    fn test_add_review_prepends() {
        let mut catalog = Catalog::new(vec![bare_item("m1")]);

        add_review(&mut catalog, "m1", "Anjali S.", 5, "So juicy!").unwrap();
        let newest = add_review(&mut catalog, "m1", "Rahul K.", 4, "Great").unwrap();

        let reviews = &catalog.get("m1").unwrap().reviews;
        assert_eq!(reviews.len(), 2);
        assert_eq!(reviews[0].id, newest.id);
        assert_eq!(reviews[0].user_name, "Rahul K.");
    }

    #[test]
    fn test_add_review_validation() {
        let mut catalog = Catalog::new(vec![bare_item("m1")]);

        let err = add_review(&mut catalog, "m1", "A", 6, "great").unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));

        let err = add_review(&mut catalog, "m1", "A", 0, "great").unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));

        let err = add_review(&mut catalog, "m1", "A", 5, "").unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));

        // No review slipped through
        assert!(catalog.get("m1").unwrap().reviews.is_empty());
    }

    #[test]
    fn test_add_review_unknown_item() {
        let mut catalog = Catalog::new(vec![bare_item("m1")]);

        let err = add_review(&mut catalog, "zzz", "A", 5, "great").unwrap_err();
        assert!(matches!(err, CoreError::ItemNotFound(_)));
    }

    #[test]
    fn test_rating_stats() {
        let mut item = bare_item("m1");
        item.reviews = vec![review_at(5, 1), review_at(4, 2), review_at(5, 3)];

        let stats = rating_stats(&item);

        assert_eq!(stats.total, 3);
        assert_eq!(stats.star_count(5), 2);
        assert_eq!(stats.star_count(4), 1);
        assert_eq!(stats.star_count(1), 0);
        assert_eq!(stats.counts.iter().sum::<i64>(), stats.total);
        assert!((stats.average - 14.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_rating_stats_empty_is_zero_not_nan() {
        let stats = rating_stats(&bare_item("m1"));

        assert_eq!(stats.total, 0);
        assert_eq!(stats.average, 0.0);
        assert!(!stats.average.is_nan());
    }

    #[test]
    fn test_recent_reviews_sorted_and_truncated() {
        let mut a = bare_item("m1");
        a.reviews = vec![review_at(5, 10), review_at(4, 30)];
        let mut b = bare_item("b1");
        b.reviews = vec![review_at(3, 1), review_at(2, 20)];
        let catalog = Catalog::new(vec![a, b]);

        let recent = recent_reviews(&catalog, 3);

        assert_eq!(recent.len(), 3);
        // Strictly descending by timestamp
        for pair in recent.windows(2) {
            assert!(pair[0].review.created_at >= pair[1].review.created_at);
        }
        // Newest overall is the 1-hour-old review on b1
        assert_eq!(recent[0].item_id, "b1");
        assert_eq!(recent[0].review.rating, 3);
    }

    #[test]
    fn test_recent_reviews_ties_keep_catalog_order() {
        let now = Utc::now();
        let mut a = bare_item("m1");
        let mut tie_a = review_at(5, 0);
        tie_a.created_at = now;
        a.reviews = vec![tie_a];

        let mut b = bare_item("b1");
        let mut tie_b = review_at(1, 0);
        tie_b.created_at = now;
        b.reviews = vec![tie_b];

        let catalog = Catalog::new(vec![a, b]);
        let recent = recent_reviews(&catalog, 5);

        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].item_id, "m1");
        assert_eq!(recent[1].item_id, "b1");
    }

    #[test]
    fn test_recent_reviews_respects_limit() {
        let catalog = Catalog::demo();
        assert!(recent_reviews(&catalog, 2).len() <= 2);
        assert!(recent_reviews(&catalog, 0).is_empty());
    }
}
