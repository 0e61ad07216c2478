//! # Pricing Calculator
//!
//! Pure rental pricing: (start date, end date, daily rate) → day count and
//! total price.
//!
//! ## Pricing Policy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Rental Day Counting                                                    │
//! │                                                                         │
//! │  2024-06-01 → 2024-06-04   =  3 days  (calendar-day difference)         │
//! │  2024-06-01 → 2024-06-01   =  1 day   (24-hour minimum rental)          │
//! │  2024-06-04 → 2024-06-01   =  0 days  (invalid range → zero quote)      │
//! │  missing date              =  0 days  (zero quote, submit disabled)     │
//! │                                                                         │
//! │  total = days × daily_rate                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Invalid input never raises: the wizard recomputes the quote on every
//! date change and simply disables the continue button while the total is
//! zero. Dates are `NaiveDate`, so time-of-day and DST cannot skew the
//! day count.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

/// The result of pricing a rental period.
///
/// A zero quote (`days == 0`, `total == 0`) means the inputs were missing
/// or invalid; callers gate submission on `is_payable()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct RentalQuote {
    /// Billed rental days (1-day minimum for valid ranges).
    pub days: i64,
    /// Total price in minor currency units.
    pub total: Money,
}

impl RentalQuote {
    /// The zero quote returned for missing or invalid inputs.
    pub const fn zero() -> Self {
        RentalQuote {
            days: 0,
            total: Money::zero(),
        }
    }

    /// Whether this quote can proceed to reservation creation.
    #[inline]
    pub fn is_payable(&self) -> bool {
        self.total.is_positive()
    }
}

impl Default for RentalQuote {
    fn default() -> Self {
        RentalQuote::zero()
    }
}

/// Prices a rental period.
///
/// Pure and cheap; safe to call on every date-change event.
///
/// ## Rules
/// - Both dates present and `end >= start`: billed days are the calendar
///   difference, with a same-day rental counting as 1 day (24-hour
///   minimum).
/// - Anything else (missing date, `end < start`): zero quote. No error is
///   raised; the caller disables submission instead.
///
/// ## Example
/// ```rust
/// use chrono::NaiveDate;
/// use locauto_core::money::Money;
/// use locauto_core::pricing::quote_rental;
///
/// let start = NaiveDate::from_ymd_opt(2024, 6, 1);
/// let end = NaiveDate::from_ymd_opt(2024, 6, 4);
/// let quote = quote_rental(start, end, Money::from_minor(50));
/// assert_eq!(quote.days, 3);
/// assert_eq!(quote.total, Money::from_minor(150));
/// ```
pub fn quote_rental(
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    daily_rate: Money,
) -> RentalQuote {
    let (start, end) = match (start, end) {
        (Some(s), Some(e)) => (s, e),
        _ => return RentalQuote::zero(),
    };

    if end < start {
        return RentalQuote::zero();
    }

    // Same-day start/end bills the 1-day minimum.
    let days = (end - start).num_days().max(1);

    RentalQuote {
        days,
        total: daily_rate.multiply_days(days),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, day)
    }

    #[test]
    fn test_multi_day_rental() {
        // start=2024-06-01, end=2024-06-04, rate=50 → 3 days, total 150
        let quote = quote_rental(d(2024, 6, 1), d(2024, 6, 4), Money::from_minor(50));
        assert_eq!(quote.days, 3);
        assert_eq!(quote.total, Money::from_minor(150));
        assert!(quote.is_payable());
    }

    #[test]
    fn test_same_day_counts_as_one_day() {
        // start == end → 1-day minimum, total = rate
        let quote = quote_rental(d(2024, 6, 1), d(2024, 6, 1), Money::from_minor(50));
        assert_eq!(quote.days, 1);
        assert_eq!(quote.total, Money::from_minor(50));
    }

    #[test]
    fn test_inverted_range_is_zero_quote() {
        let quote = quote_rental(d(2024, 6, 4), d(2024, 6, 1), Money::from_minor(50));
        assert_eq!(quote, RentalQuote::zero());
        assert!(!quote.is_payable());
    }

    #[test]
    fn test_missing_dates_are_zero_quote() {
        assert_eq!(
            quote_rental(None, d(2024, 6, 4), Money::from_minor(50)),
            RentalQuote::zero()
        );
        assert_eq!(
            quote_rental(d(2024, 6, 1), None, Money::from_minor(50)),
            RentalQuote::zero()
        );
        assert_eq!(
            quote_rental(None, None, Money::from_minor(50)),
            RentalQuote::zero()
        );
    }

    #[test]
    fn test_month_boundary() {
        let quote = quote_rental(d(2024, 1, 30), d(2024, 2, 2), Money::from_minor(10_000));
        assert_eq!(quote.days, 3);
        assert_eq!(quote.total, Money::from_minor(30_000));
    }

    #[test]
    fn test_leap_day() {
        let quote = quote_rental(d(2024, 2, 28), d(2024, 3, 1), Money::from_minor(1_000));
        // 2024 is a leap year: Feb 28 → Mar 1 spans Feb 29
        assert_eq!(quote.days, 2);
    }

    #[test]
    fn test_zero_rate_is_not_payable() {
        // A free rental cannot proceed; submission stays disabled.
        let quote = quote_rental(d(2024, 6, 1), d(2024, 6, 4), Money::zero());
        assert_eq!(quote.days, 3);
        assert!(!quote.is_payable());
    }
}
