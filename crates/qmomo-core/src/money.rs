//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Rupees                                           │
//! │    The qmomo menu is priced in whole rupees (₹60, ₹75, ₹239), so the   │
//! │    smallest currency unit IS the rupee. Every subtotal, surcharge and  │
//! │    delivery fee is exact i64 arithmetic.                               │
//! │                                                                         │
//! │  Q-Coin multipliers (1.1×, 1.2×) are expressed in basis points in the  │
//! │  loyalty module, so even point accrual never touches a float.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use qmomo_core::money::Money;
//!
//! // Create from whole rupees (the only constructor)
//! let price = Money::from_rupees(75); // ₹75
//!
//! // Arithmetic operations
//! let doubled = price * 2;                       // ₹150
//! let total = price + Money::from_rupees(29);    // ₹104
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in whole rupees.
///
/// ## Design Decisions
/// - **i64 (signed)**: Leaves room for refunds/adjustments in later versions
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for JSON serialization
///
/// ## Where Money Flows
/// ```text
/// MenuItem.price_rupees ──► CartLine.unit_price ──► CartLine.line_total
///                                                        │
/// Cart.total_price ──► CheckoutSummary ──► Order.total ──┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from whole rupees.
    ///
    /// ## Example
    /// ```rust
    /// use qmomo_core::money::Money;
    ///
    /// let price = Money::from_rupees(75); // ₹75
    /// assert_eq!(price.rupees(), 75);
    /// ```
    #[inline]
    pub const fn from_rupees(rupees: i64) -> Self {
        Money(rupees)
    }

    /// Returns the value in whole rupees.
    #[inline]
    pub const fn rupees(&self) -> i64 {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use qmomo_core::money::Money;
    ///
    /// let unit_price = Money::from_rupees(60); // ₹60
    /// let line_total = unit_price.multiply_quantity(3);
    /// assert_eq!(line_total.rupees(), 180); // ₹180
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for logs and debugging. Use frontend formatting for actual UI
/// display to handle localization properly.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}₹{}", sign, self.0.abs())
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by integer (for quantity calculations).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

/// Summing an iterator of Money values (cart totals).
impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rupees() {
        let money = Money::from_rupees(75);
        assert_eq!(money.rupees(), 75);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_rupees(75)), "₹75");
        assert_eq!(format!("{}", Money::from_rupees(0)), "₹0");
        assert_eq!(format!("{}", Money::from_rupees(-40)), "-₹40");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_rupees(100);
        let b = Money::from_rupees(29);

        assert_eq!((a + b).rupees(), 129);
        assert_eq!((a - b).rupees(), 71);
        let result: Money = a * 3;
        assert_eq!(result.rupees(), 300);
    }

    #[test]
    fn test_multiply_quantity() {
        let unit_price = Money::from_rupees(60);
        let line_total = unit_price.multiply_quantity(3);
        assert_eq!(line_total.rupees(), 180);
    }

    #[test]
    fn test_sum() {
        let total: Money = [60, 75, 29]
            .iter()
            .map(|&r| Money::from_rupees(r))
            .sum();
        assert_eq!(total.rupees(), 164);
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());

        let positive = Money::from_rupees(40);
        assert!(positive.is_positive());

        let negative = Money::from_rupees(-40);
        assert!(negative.is_negative());
    }
}
