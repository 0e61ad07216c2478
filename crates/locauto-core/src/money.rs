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
//! │  OUR SOLUTION: integer minor units                                      │
//! │    The canonical currency is XOF (FCFA), which has NO minor unit:       │
//! │    1 minor unit = 1 franc. 25 000 FCFA/day × 3 days = 75 000, exactly.  │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use locauto_core::money::Money;
//!
//! // Create from minor units (preferred)
//! let daily_rate = Money::from_minor(25_000); // 25 000 FCFA
//!
//! // Arithmetic operations
//! let three_days = daily_rate * 3;            // 75 000 FCFA
//!
//! // NEVER do this:
//! // let bad = Money::from_float(24999.99); // NO SUCH METHOD EXISTS!
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit.
///
/// For XOF (FCFA) the smallest unit is the franc itself, so `Money(25_000)`
/// is 25 000 FCFA. Currency symbol and formatting belong to the app layer.
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative values for refunds and overpayments
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for JSON serialization
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from minor units.
    ///
    /// ## Example
    /// ```rust
    /// use locauto_core::money::Money;
    ///
    /// let rate = Money::from_minor(25_000);
    /// assert_eq!(rate.minor(), 25_000);
    /// ```
    #[inline]
    pub const fn from_minor(minor: i64) -> Self {
        Money(minor)
    }

    /// Returns the value in minor units.
    #[inline]
    pub const fn minor(&self) -> i64 {
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

    /// Returns the absolute value.
    #[inline]
    pub const fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// Multiplies money by a number of rental days.
    ///
    /// ## Example
    /// ```rust
    /// use locauto_core::money::Money;
    ///
    /// let daily_rate = Money::from_minor(25_000);
    /// let total = daily_rate.multiply_days(3);
    /// assert_eq!(total.minor(), 75_000);
    /// ```
    ///
    /// ## User Workflow
    /// ```text
    /// Vehicle: Toyota Corolla, 25 000 FCFA/day
    /// Rental: 2024-06-01 → 2024-06-04 (3 days)
    ///      │
    ///      ▼
    /// multiply_days(3) ← THIS FUNCTION
    ///      │
    ///      ▼
    /// Total: 75 000 FCFA
    /// ```
    #[inline]
    pub const fn multiply_days(&self, days: i64) -> Self {
        Money(self.0 * days)
    }

    /// Clamps a negative value to zero.
    ///
    /// Used for displayed balances: an overpaid reservation shows a zero
    /// outstanding balance, not a negative one.
    #[inline]
    pub const fn max_zero(&self) -> Self {
        if self.0 < 0 {
            Money(0)
        } else {
            *self
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for debugging and logs. Use `ConfigState::format_currency` in the
/// app for actual UI display to handle locale properly.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} FCFA", self.0)
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

/// Multiplication by integer (for day-count calculations).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

/// Summation over payment amounts.
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_minor() {
        let money = Money::from_minor(25_000);
        assert_eq!(money.minor(), 25_000);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_minor(25_000)), "25000 FCFA");
        assert_eq!(format!("{}", Money::from_minor(0)), "0 FCFA");
        assert_eq!(format!("{}", Money::from_minor(-500)), "-500 FCFA");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_minor(1000);
        let b = Money::from_minor(500);

        assert_eq!((a + b).minor(), 1500);
        assert_eq!((a - b).minor(), 500);
        let result: Money = a * 3;
        assert_eq!(result.minor(), 3000);
    }

    #[test]
    fn test_multiply_days() {
        let daily_rate = Money::from_minor(25_000);
        assert_eq!(daily_rate.multiply_days(3).minor(), 75_000);
        assert_eq!(daily_rate.multiply_days(1).minor(), 25_000);
        assert_eq!(daily_rate.multiply_days(0).minor(), 0);
    }

    #[test]
    fn test_sum_over_payments() {
        let payments = [
            Money::from_minor(10_000),
            Money::from_minor(5_000),
            Money::from_minor(2_500),
        ];
        let total: Money = payments.iter().copied().sum();
        assert_eq!(total.minor(), 17_500);
    }

    #[test]
    fn test_max_zero() {
        assert_eq!(Money::from_minor(-300).max_zero(), Money::zero());
        assert_eq!(Money::from_minor(300).max_zero(), Money::from_minor(300));
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());

        let positive = Money::from_minor(100);
        assert!(positive.is_positive());

        let negative = Money::from_minor(-100);
        assert!(negative.is_negative());
    }
}
