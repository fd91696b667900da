//! # History Sorter
//!
//! Orders past orders by a chosen criterion for the profile screen.
//!
//! Sorting is non-destructive (the stored history stays most-recent-first)
//! and always descending. Ties are stable: repeated sorts of unchanged
//! input always produce the same sequence.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::Order;

// =============================================================================
// Sort Criterion
// =============================================================================

/// What to sort the order history by. All criteria sort descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum SortCriterion {
    /// Newest order first.
    Date,
    /// Largest total first.
    Amount,
    /// Most Q-Coins earned first.
    Points,
}

impl Default for SortCriterion {
    fn default() -> Self {
        SortCriterion::Date
    }
}

// =============================================================================
// Sort
// =============================================================================

/// Returns a new ordering of `orders` by the criterion, descending.
///
/// The input is not mutated. `sort_by` is stable, so orders comparing
/// equal keep their prior relative order, making repeated sorts
/// idempotent.
pub fn sort_history(orders: &[Order], criterion: SortCriterion) -> Vec<Order> {
    let mut sorted = orders.to_vec();
    match criterion {
        SortCriterion::Date => sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortCriterion::Amount => sorted.sort_by(|a, b| b.total_rupees.cmp(&a.total_rupees)),
        SortCriterion::Points => sorted.sort_by(|a, b| b.points_earned.cmp(&a.points_earned)),
    }
    sorted
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::OrderStatus;
    use chrono::{Duration, Utc};

    fn order(id: &str, hours_ago: i64, total: i64, points: i64) -> Order {
        Order {
            id: id.to_string(),
            lines: Vec::new(),
            total_rupees: total,
            status: OrderStatus::Delivered,
            created_at: Utc::now() - Duration::hours(hours_ago),
            points_earned: points,
        }
    }

    fn ids(orders: &[Order]) -> Vec<&str> {
        orders.iter().map(|o| o.id.as_str()).collect()
    }

    #[test]
    fn test_sort_by_date_descending() {
        let history = vec![order("a", 5, 100, 10), order("b", 1, 50, 5), order("c", 10, 200, 20)];

        let sorted = sort_history(&history, SortCriterion::Date);

        assert_eq!(ids(&sorted), vec!["b", "a", "c"]);
        // Non-destructive: input untouched
        assert_eq!(ids(&history), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_sort_by_amount_descending() {
        let history = vec![order("a", 5, 100, 10), order("b", 1, 50, 5), order("c", 10, 200, 20)];

        let sorted = sort_history(&history, SortCriterion::Amount);
        assert_eq!(ids(&sorted), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_sort_by_points_descending() {
        let history = vec![order("a", 5, 100, 10), order("b", 1, 50, 25), order("c", 10, 200, 20)];

        let sorted = sort_history(&history, SortCriterion::Points);
        assert_eq!(ids(&sorted), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_sort_is_idempotent() {
        let history = vec![
            order("a", 5, 100, 10),
            order("b", 1, 100, 5),
            order("c", 10, 100, 20),
        ];

        let once = sort_history(&history, SortCriterion::Amount);
        let twice = sort_history(&once, SortCriterion::Amount);

        assert_eq!(ids(&once), ids(&twice));
    }

    #[test]
    fn test_ties_are_stable() {
        // Equal totals: prior relative order is preserved
        let history = vec![order("a", 5, 100, 1), order("b", 3, 100, 2), order("c", 1, 100, 3)];

        let sorted = sort_history(&history, SortCriterion::Amount);
        assert_eq!(ids(&sorted), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_default_criterion_is_date() {
        assert_eq!(SortCriterion::default(), SortCriterion::Date);
    }
}
