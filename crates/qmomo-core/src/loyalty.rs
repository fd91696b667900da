//! # Loyalty Engine
//!
//! Tier lookup, tier progress and Q-Coin accrual.
//!
//! ## The Tier Ladder
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Loyalty Tiers                                   │
//! │                                                                         │
//! │   Q-Coins:  0 ────────────── 500 ──────────────── 1500 ──────────►     │
//! │             │    Bronze       │       Silver        │      Gold         │
//! │             │    1.0× coins   │   1.1× coins        │   1.2× coins      │
//! │             │    ₹40 delivery │   free delivery     │   free delivery   │
//! │                                                                         │
//! │   current_tier(P)  = highest tier whose threshold ≤ P                  │
//! │   next_tier(P)     = lowest tier whose threshold > P (None at Gold)    │
//! │   progress_percent = linear interpolation inside the current band      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Thresholds are strictly increasing and Bronze starts at 0, so
//! `current_tier` always succeeds and the interpolation denominator is
//! always positive.
//!
//! ## Q-Coin Accrual
//! Base points are `floor(subtotal / 10)` ("1 Q-Coin per ₹10"); the tier
//! multiplier is applied in basis points with integer floor division, so
//! accrual is exact and reproducible:
//!
//! ```rust
//! use qmomo_core::loyalty::{points_earned, TierName};
//! use qmomo_core::money::Money;
//!
//! // ₹235 at Silver: base = 23, earned = floor(23 × 1.1) = 25
//! assert_eq!(points_earned(Money::from_rupees(235), TierName::Silver), 25);
//! ```
//!
//! All functions in this module are side-effect free.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::{BRONZE_DELIVERY_FEE_RUPEES, RUPEES_PER_POINT};

// =============================================================================
// Tier Name
// =============================================================================

/// A loyalty rank, unlocked by a Q-Coin threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum TierName {
    Bronze,
    Silver,
    Gold,
}

impl TierName {
    /// All tiers, ordered by ascending threshold.
    pub const ALL: [TierName; 3] = [TierName::Bronze, TierName::Silver, TierName::Gold];

    /// Minimum Q-Coin balance required for this tier.
    ///
    /// Bronze is 0, so every balance satisfies at least one tier.
    #[inline]
    pub const fn min_points(&self) -> i64 {
        match self {
            TierName::Bronze => 0,
            TierName::Silver => 500,
            TierName::Gold => 1500,
        }
    }

    /// Q-Coin multiplier in basis points (10000 = 1.0×).
    ///
    /// ## Multiplier Table
    /// | Tier   | Multiplier | bps   |
    /// |--------|------------|-------|
    /// | Bronze | 1.0×       | 10000 |
    /// | Silver | 1.1×       | 11000 |
    /// | Gold   | 1.2×       | 12000 |
    #[inline]
    pub const fn multiplier_bps(&self) -> i64 {
        match self {
            TierName::Bronze => 10_000,
            TierName::Silver => 11_000,
            TierName::Gold => 12_000,
        }
    }

    /// Benefit descriptions shown on the tier card.
    pub const fn benefits(&self) -> &'static [&'static str] {
        match self {
            TierName::Bronze => &["Earn 1 Q-Coin per ₹10"],
            TierName::Silver => &["10% Bonus Q-Coins", "Free Delivery"],
            TierName::Gold => &["20% Bonus Q-Coins", "Early Access", "Secret Menu"],
        }
    }

    /// Display color for the tier badge.
    pub const fn color(&self) -> &'static str {
        match self {
            TierName::Bronze => "#CD7F32",
            TierName::Silver => "#C0C0C0",
            TierName::Gold => "#EAB308",
        }
    }
}

// =============================================================================
// Loyalty Tier (display projection)
// =============================================================================

/// Serializable projection of a [`TierName`] for the UI layer.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LoyaltyTier {
    pub name: TierName,
    pub min_points: i64,
    pub benefits: Vec<String>,
    pub color: String,
}

impl From<TierName> for LoyaltyTier {
    fn from(name: TierName) -> Self {
        LoyaltyTier {
            name,
            min_points: name.min_points(),
            benefits: name.benefits().iter().map(|b| b.to_string()).collect(),
            color: name.color().to_string(),
        }
    }
}

// =============================================================================
// Tier Lookup
// =============================================================================

/// Returns the highest tier whose threshold is ≤ `points`.
///
/// Bronze's threshold is 0, so this always succeeds (no error case).
pub fn current_tier(points: i64) -> TierName {
    TierName::ALL
        .iter()
        .rev()
        .copied()
        .find(|t| points >= t.min_points())
        .unwrap_or(TierName::Bronze)
}

/// Returns the lowest tier whose threshold exceeds `points`, or `None`
/// when the top tier is already reached.
pub fn next_tier(points: i64) -> Option<TierName> {
    TierName::ALL
        .iter()
        .copied()
        .find(|t| t.min_points() > points)
}

/// Progress through the current tier band, in percent.
///
/// Linear interpolation between the current tier's threshold and the next
/// tier's threshold, clamped to [0, 100]; defined as 100 when there is no
/// next tier. The denominator is always positive because thresholds
/// strictly increase.
pub fn progress_percent(points: i64) -> f64 {
    let Some(next) = next_tier(points) else {
        return 100.0;
    };
    let current_min = current_tier(points).min_points();
    let next_min = next.min_points();

    let pct = (points - current_min) as f64 / (next_min - current_min) as f64 * 100.0;
    pct.clamp(0.0, 100.0)
}

// =============================================================================
// Q-Coin Accrual
// =============================================================================

/// Base Q-Coins for an order subtotal: `floor(subtotal / 10)`.
#[inline]
pub fn base_points(subtotal: Money) -> i64 {
    subtotal.rupees() / RUPEES_PER_POINT
}

/// Q-Coins earned by an order: base points scaled by the tier multiplier,
/// floored.
///
/// A pure function of the order subtotal and the tier in effect at
/// checkout time; the result is fixed on the order and never recomputed.
pub fn points_earned(subtotal: Money, tier: TierName) -> i64 {
    base_points(subtotal) * tier.multiplier_bps() / 10_000
}

/// Flat per-order delivery fee for a tier.
///
/// Bronze pays ₹40; Silver and Gold have the free-delivery benefit.
pub fn delivery_fee(tier: TierName) -> Money {
    match tier {
        TierName::Bronze => Money::from_rupees(BRONZE_DELIVERY_FEE_RUPEES),
        TierName::Silver | TierName::Gold => Money::zero(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thresholds_strictly_increasing() {
        for pair in TierName::ALL.windows(2) {
            assert!(pair[0].min_points() < pair[1].min_points());
        }
        assert_eq!(TierName::Bronze.min_points(), 0);
    }

    #[test]
    fn test_current_tier_boundaries() {
        assert_eq!(current_tier(0), TierName::Bronze);
        assert_eq!(current_tier(450), TierName::Bronze);
        assert_eq!(current_tier(499), TierName::Bronze);
        assert_eq!(current_tier(500), TierName::Silver);
        assert_eq!(current_tier(1499), TierName::Silver);
        assert_eq!(current_tier(1500), TierName::Gold);
        assert_eq!(current_tier(99_999), TierName::Gold);
    }

    #[test]
    fn test_current_tier_is_highest_satisfied() {
        // No tier above the current one may also be satisfied
        for points in [0, 250, 500, 750, 1500, 5000] {
            let tier = current_tier(points);
            assert!(tier.min_points() <= points);
            for t in TierName::ALL {
                if t.min_points() > tier.min_points() {
                    assert!(t.min_points() > points);
                }
            }
        }
    }

    #[test]
    fn test_next_tier() {
        assert_eq!(next_tier(0), Some(TierName::Silver));
        assert_eq!(next_tier(499), Some(TierName::Silver));
        assert_eq!(next_tier(500), Some(TierName::Gold));
        assert_eq!(next_tier(1499), Some(TierName::Gold));
        assert_eq!(next_tier(1500), None);
    }

    #[test]
    fn test_progress_percent() {
        assert_eq!(progress_percent(0), 0.0);
        assert_eq!(progress_percent(250), 50.0);
        assert_eq!(progress_percent(450), 90.0);
        // Band resets at the Silver boundary
        assert_eq!(progress_percent(500), 0.0);
        assert_eq!(progress_percent(1000), 50.0);
        // Max tier reached
        assert_eq!(progress_percent(1500), 100.0);
        assert_eq!(progress_percent(9000), 100.0);
    }

    #[test]
    fn test_progress_monotonic_within_band() {
        let mut last = -1.0;
        for points in 0..500 {
            let pct = progress_percent(points);
            assert!(pct >= last, "progress dipped at {points}");
            assert!((0.0..=100.0).contains(&pct));
            last = pct;
        }
    }

    #[test]
    fn test_base_points_floors() {
        assert_eq!(base_points(Money::from_rupees(235)), 23);
        assert_eq!(base_points(Money::from_rupees(9)), 0);
        assert_eq!(base_points(Money::from_rupees(10)), 1);
    }

    #[test]
    fn test_points_earned_by_tier() {
        let subtotal = Money::from_rupees(235);
        // base = 23
        assert_eq!(points_earned(subtotal, TierName::Bronze), 23);
        // floor(23 × 1.1) = 25
        assert_eq!(points_earned(subtotal, TierName::Silver), 25);
        // floor(23 × 1.2) = 27
        assert_eq!(points_earned(subtotal, TierName::Gold), 27);
    }

    #[test]
    fn test_delivery_fee_waiver() {
        assert_eq!(delivery_fee(TierName::Bronze), Money::from_rupees(40));
        assert_eq!(delivery_fee(TierName::Silver), Money::zero());
        assert_eq!(delivery_fee(TierName::Gold), Money::zero());
    }
}
