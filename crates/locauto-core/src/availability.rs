//! # Availability Resolver
//!
//! Derives a display-only availability projection for a vehicle from its
//! embedded reservation list and today's date.
//!
//! ## Resolution
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  resolve_availability(status, reservations, today)                      │
//! │                                                                         │
//! │  active = status ∈ {confirmee, en_cours}  AND  return date ≥ today      │
//! │                                                                         │
//! │  any active?  ──► RentedUntil(earliest return date)                     │
//! │  none, but vehicle.statut says "louee"? ──► RentedUnknown               │
//! │  otherwise ──► AvailableNow                                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Advisory Only
//! The projection is for display. The vehicle's stored status field is the
//! authoritative server value and the two can disagree (the embedded list
//! may be partial); when they do, the UI shows the neutral `RentedUnknown`
//! message rather than inferring availability. This result must never gate
//! a business decision; double-booking is prevented server-side.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::{Reservation, VehicleStatus};

/// Display-only availability of a vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "kind", content = "until", rename_all = "camelCase")]
pub enum Availability {
    /// No active reservation holds the vehicle.
    AvailableNow,
    /// Rented; the earliest active return date is the next available date.
    RentedUntil(#[ts(as = "String")] NaiveDate),
    /// The status flag says rented but no active reservation is visible.
    /// Shown as a neutral message; never fabricate a date.
    RentedUnknown,
}

/// Resolves the availability projection for a vehicle.
///
/// Reservations with a missing return date are skipped (treated as not
/// active) rather than raising; the lenient wire decoder already turned
/// malformed dates into `None`.
///
/// Ties on the earliest return date resolve to the first one seen; true
/// duplicates are a data anomaly, not something this projection arbitrates.
pub fn resolve_availability(
    vehicle_status: VehicleStatus,
    reservations: &[Reservation],
    today: NaiveDate,
) -> Availability {
    let next_return = reservations
        .iter()
        .filter(|r| r.status.is_active())
        .filter_map(|r| r.end_date)
        .filter(|end| *end >= today)
        .min();

    match next_return {
        Some(date) => Availability::RentedUntil(date),
        None if vehicle_status == VehicleStatus::Rented => Availability::RentedUnknown,
        None => Availability::AvailableNow,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use crate::types::ReservationStatus;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn reservation(status: ReservationStatus, end: Option<NaiveDate>) -> Reservation {
        Reservation {
            id: 1,
            vehicle_id: 1,
            client_id: 1,
            pickup_agency_id: 1,
            return_agency_id: 1,
            start_date: Some(day(2024, 6, 1)),
            end_date: end,
            status,
            total_price: Money::from_minor(50_000),
        }
    }

    #[test]
    fn test_cancelled_reservations_are_excluded() {
        // confirmed returning 07-10, cancelled returning 07-05, today 07-01
        // → rented until 07-10 (the cancelled one does not count)
        let reservations = vec![
            reservation(ReservationStatus::Confirmed, Some(day(2024, 7, 10))),
            reservation(ReservationStatus::Cancelled, Some(day(2024, 7, 5))),
        ];
        let availability = resolve_availability(
            VehicleStatus::Rented,
            &reservations,
            day(2024, 7, 1),
        );
        assert_eq!(availability, Availability::RentedUntil(day(2024, 7, 10)));
    }

    #[test]
    fn test_earliest_active_return_wins() {
        let reservations = vec![
            reservation(ReservationStatus::Confirmed, Some(day(2024, 7, 20))),
            reservation(ReservationStatus::InProgress, Some(day(2024, 7, 8))),
        ];
        let availability = resolve_availability(
            VehicleStatus::Rented,
            &reservations,
            day(2024, 7, 1),
        );
        assert_eq!(availability, Availability::RentedUntil(day(2024, 7, 8)));
    }

    #[test]
    fn test_rented_flag_without_reservations_is_unknown() {
        // Never fabricate a date when the list is empty or partial.
        let availability = resolve_availability(VehicleStatus::Rented, &[], day(2024, 7, 1));
        assert_eq!(availability, Availability::RentedUnknown);
    }

    #[test]
    fn test_available_when_nothing_active() {
        let reservations = vec![
            reservation(ReservationStatus::Completed, Some(day(2024, 5, 10))),
            reservation(ReservationStatus::Cancelled, Some(day(2024, 7, 10))),
        ];
        let availability = resolve_availability(
            VehicleStatus::Available,
            &reservations,
            day(2024, 7, 1),
        );
        assert_eq!(availability, Availability::AvailableNow);
    }

    #[test]
    fn test_past_return_dates_do_not_count() {
        // Active status but the return date already passed: not holding
        // the vehicle anymore.
        let reservations = vec![reservation(
            ReservationStatus::Confirmed,
            Some(day(2024, 6, 20)),
        )];
        let availability = resolve_availability(
            VehicleStatus::Available,
            &reservations,
            day(2024, 7, 1),
        );
        assert_eq!(availability, Availability::AvailableNow);
    }

    #[test]
    fn test_return_date_today_still_counts() {
        let reservations = vec![reservation(
            ReservationStatus::InProgress,
            Some(day(2024, 7, 1)),
        )];
        let availability = resolve_availability(
            VehicleStatus::Rented,
            &reservations,
            day(2024, 7, 1),
        );
        assert_eq!(availability, Availability::RentedUntil(day(2024, 7, 1)));
    }

    #[test]
    fn test_missing_dates_are_skipped_not_errors() {
        let reservations = vec![
            reservation(ReservationStatus::Confirmed, None), // malformed wire date
            reservation(ReservationStatus::Confirmed, Some(day(2024, 7, 15))),
        ];
        let availability = resolve_availability(
            VehicleStatus::Rented,
            &reservations,
            day(2024, 7, 1),
        );
        assert_eq!(availability, Availability::RentedUntil(day(2024, 7, 15)));
    }
}
