//! # Reservation Wizard State
//!
//! Manages the three-step reservation wizard.
//!
//! ## Wizard Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Reservation Wizard Flow                              │
//! │                                                                         │
//! │  open_reservation_wizard(vehicle)                                       │
//! │       │  (profile complete, price frozen from the vehicle detail)       │
//! │       ▼                                                                 │
//! │  ┌─────────┐  submit_reservation   ┌─────────┐  submit_payment          │
//! │  │ Details │ ────────────────────► │ Payment │ ───────────────►         │
//! │  │         │  POST /reservations   │         │  POST /paiements         │
//! │  └─────────┘                       └─────────┘          │               │
//! │       ▲                                 │               ▼               │
//! │       │ set_wizard_dates                │          ┌─────────┐          │
//! │       │ set_wizard_agencies             │          │ Success │          │
//! │       │ (quote recomputed)              │          └─────────┘          │
//! │                                         │                               │
//! │  NO BACKWARD TRANSITION: once the reservation row exists, editing      │
//! │  dates would desynchronize wizard and server. Close and start over.    │
//! │                                                                         │
//! │  close at any stage: wizard dropped, created reservation KEPT           │
//! │  (payable later from "Mes réservations")                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Stale Responses
//! Submits run without holding the wizard lock. Each open/close bumps an
//! epoch counter; a network response that comes back after the wizard was
//! closed (or reopened for another vehicle) finds a different epoch and is
//! dropped instead of mutating the wrong wizard.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::warn;

use locauto_core::pricing::{quote_rental, RentalQuote};
use locauto_core::types::Vehicle;
use locauto_core::validation::validate_rental_period;
use locauto_core::{CoreError, CoreResult, Money};

// =============================================================================
// Wizard Stage
// =============================================================================

/// The wizard's current step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WizardStage {
    /// Dates, agencies and the live quote.
    Details,
    /// Reservation created, awaiting payment.
    Payment,
    /// Payment captured, confirmation shown.
    Success,
}

impl WizardStage {
    fn name(&self) -> &'static str {
        match self {
            WizardStage::Details => "details",
            WizardStage::Payment => "payment",
            WizardStage::Success => "success",
        }
    }
}

// =============================================================================
// Vehicle Snapshot
// =============================================================================

/// Frozen copy of the vehicle data the wizard was opened with.
///
/// ## Price Freezing
/// The daily rate is captured when the wizard opens. If the back-office
/// changes the price mid-flow, this wizard keeps quoting the rate the
/// client saw; the server revalidates at creation time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleSnapshot {
    pub vehicle_id: i64,
    pub brand: String,
    pub model: String,
    pub daily_rate: Money,
}

impl VehicleSnapshot {
    pub fn from_vehicle(vehicle: &Vehicle) -> Self {
        VehicleSnapshot {
            vehicle_id: vehicle.id,
            brand: vehicle.brand.clone(),
            model: vehicle.model.clone(),
            daily_rate: vehicle.daily_rate,
        }
    }
}

// =============================================================================
// Reservation Wizard
// =============================================================================

/// Everything a reservation submission needs, validated and frozen.
#[derive(Debug, Clone)]
pub struct SubmissionDetails {
    pub client_id: i64,
    pub vehicle_id: i64,
    pub pickup_agency_id: i64,
    pub return_agency_id: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total: Money,
}

/// The reservation wizard.
///
/// ## Invariants
/// - The quote always reflects the current dates and the frozen rate
/// - `reservation_id` is `Some` exactly from the Payment stage onwards
/// - `submitting` blocks a second submit while one is in flight
/// - Stages only move forward
#[derive(Debug, Clone)]
pub struct ReservationWizard {
    pub vehicle: VehicleSnapshot,
    /// The authenticated client's profile id, captured at open.
    pub client_id: i64,
    pub stage: WizardStage,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub pickup_agency_id: Option<i64>,
    pub return_agency_id: Option<i64>,
    pub quote: RentalQuote,
    pub reservation_id: Option<i64>,
    pub submitting: bool,
}

impl ReservationWizard {
    /// Opens a wizard at the Details step for the given vehicle and client.
    pub fn new(vehicle: VehicleSnapshot, client_id: i64) -> Self {
        ReservationWizard {
            vehicle,
            client_id,
            stage: WizardStage::Details,
            start_date: None,
            end_date: None,
            pickup_agency_id: None,
            return_agency_id: None,
            quote: RentalQuote::zero(),
            reservation_id: None,
            submitting: false,
        }
    }

    /// Updates the rental dates and recomputes the quote.
    ///
    /// Only legal at the Details step; after the reservation exists the
    /// dates are fixed server-side.
    pub fn set_dates(
        &mut self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> CoreResult<()> {
        self.ensure_stage(WizardStage::Details)?;
        self.start_date = start;
        self.end_date = end;
        self.quote = quote_rental(start, end, self.vehicle.daily_rate);
        Ok(())
    }

    /// Updates the pickup/return agencies. Only legal at the Details step.
    pub fn set_agencies(&mut self, pickup: Option<i64>, ret: Option<i64>) -> CoreResult<()> {
        self.ensure_stage(WizardStage::Details)?;
        self.pickup_agency_id = pickup;
        self.return_agency_id = ret;
        Ok(())
    }

    /// Whether the Details step has everything a submission needs.
    pub fn can_submit(&self) -> bool {
        self.stage == WizardStage::Details
            && !self.submitting
            && self.pickup_agency_id.is_some()
            && self.return_agency_id.is_some()
            && self.quote.is_payable()
            && validate_rental_period(self.start_date, self.end_date).is_ok()
    }

    /// Validates the Details step and marks the wizard as submitting.
    ///
    /// Returns the frozen submission details; the caller performs the
    /// network call without holding the wizard lock and reports back via
    /// [`complete_submit`](Self::complete_submit) or
    /// [`fail_submit`](Self::fail_submit).
    pub fn begin_submit(&mut self) -> CoreResult<SubmissionDetails> {
        self.ensure_stage(WizardStage::Details)?;
        if self.submitting {
            return Err(CoreError::InvalidWizardStage {
                current: "submitting",
            });
        }

        validate_rental_period(self.start_date, self.end_date)?;
        let (start, end) = match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => (start, end),
            // already rejected by validate_rental_period above
            _ => {
                return Err(CoreError::InvalidRentalPeriod {
                    reason: "Veuillez choisir les dates de départ et de retour".to_string(),
                })
            }
        };
        let (pickup, ret) = match (self.pickup_agency_id, self.return_agency_id) {
            (Some(pickup), Some(ret)) => (pickup, ret),
            _ => {
                return Err(CoreError::InvalidRentalPeriod {
                    reason: "Veuillez choisir les agences de départ et de retour".to_string(),
                })
            }
        };
        if !self.quote.is_payable() {
            return Err(CoreError::InvalidPaymentAmount {
                reason: "Le montant de la réservation doit être positif".to_string(),
            });
        }

        self.submitting = true;
        Ok(SubmissionDetails {
            client_id: self.client_id,
            vehicle_id: self.vehicle.vehicle_id,
            pickup_agency_id: pickup,
            return_agency_id: ret,
            start_date: start,
            end_date: end,
            total: self.quote.total,
        })
    }

    /// Records the created reservation and advances to the Payment step.
    pub fn complete_submit(&mut self, reservation_id: i64) {
        self.submitting = false;
        self.reservation_id = Some(reservation_id);
        self.stage = WizardStage::Payment;
    }

    /// Submission failed; stay at Details so the user can correct and retry.
    pub fn fail_submit(&mut self) {
        self.submitting = false;
    }

    /// Validates the Payment step and marks the wizard as submitting.
    ///
    /// Returns the reservation id and the frozen total to pay.
    pub fn begin_payment(&mut self) -> CoreResult<(i64, Money)> {
        self.ensure_stage(WizardStage::Payment)?;
        if self.submitting {
            return Err(CoreError::InvalidWizardStage {
                current: "submitting",
            });
        }
        let reservation_id = self.reservation_id.ok_or(CoreError::InvalidWizardStage {
            current: "payment without reservation",
        })?;

        self.submitting = true;
        Ok((reservation_id, self.quote.total))
    }

    /// Payment captured; advance to Success.
    pub fn complete_payment(&mut self) {
        self.submitting = false;
        self.stage = WizardStage::Success;
    }

    /// Payment failed; stay at Payment. The reservation remains
    /// `en_attente` server-side and is payable later.
    pub fn fail_payment(&mut self) {
        self.submitting = false;
    }

    fn ensure_stage(&self, expected: WizardStage) -> CoreResult<()> {
        if self.stage == expected {
            Ok(())
        } else {
            Err(CoreError::InvalidWizardStage {
                current: self.stage.name(),
            })
        }
    }
}

// =============================================================================
// Snapshot DTO
// =============================================================================

/// Wizard snapshot for the frontend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardSnapshot {
    pub stage: WizardStage,
    pub vehicle: VehicleSnapshot,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub pickup_agency_id: Option<i64>,
    pub return_agency_id: Option<i64>,
    pub days: i64,
    pub total: Money,
    pub reservation_id: Option<i64>,
    pub submitting: bool,
    pub can_submit: bool,
}

impl From<&ReservationWizard> for WizardSnapshot {
    fn from(wizard: &ReservationWizard) -> Self {
        WizardSnapshot {
            stage: wizard.stage,
            vehicle: wizard.vehicle.clone(),
            start_date: wizard.start_date,
            end_date: wizard.end_date,
            pickup_agency_id: wizard.pickup_agency_id,
            return_agency_id: wizard.return_agency_id,
            days: wizard.quote.days,
            total: wizard.quote.total,
            reservation_id: wizard.reservation_id,
            submitting: wizard.submitting,
            can_submit: wizard.can_submit(),
        }
    }
}

// =============================================================================
// Wizard State
// =============================================================================

/// Tauri-managed wizard state.
///
/// ## Thread Safety
/// - `Mutex<Option<ReservationWizard>>`: at most one wizard at a time,
///   exclusive access for every mutation
/// - `AtomicU64` epoch: bumped on every open/close, so responses from a
///   previous wizard generation are detected and dropped
///
/// The lock is only held for in-memory mutations, never across a network
/// call.
#[derive(Debug)]
pub struct WizardState {
    wizard: Mutex<Option<ReservationWizard>>,
    epoch: AtomicU64,
}

impl WizardState {
    /// Creates the state with no open wizard.
    pub fn new() -> Self {
        WizardState {
            wizard: Mutex::new(None),
            epoch: AtomicU64::new(0),
        }
    }

    /// The current wizard generation.
    pub fn epoch(&self) -> u64 {
        self.epoch.load(Ordering::SeqCst)
    }

    /// Opens a fresh wizard, replacing any previous one.
    pub fn open(&self, vehicle: VehicleSnapshot, client_id: i64) -> WizardSnapshot {
        let mut guard = self.wizard.lock().expect("wizard mutex poisoned");
        self.epoch.fetch_add(1, Ordering::SeqCst);
        let wizard = ReservationWizard::new(vehicle, client_id);
        let snapshot = WizardSnapshot::from(&wizard);
        *guard = Some(wizard);
        snapshot
    }

    /// Closes the wizard. Any reservation already created stays on the
    /// server and is payable later from the reservation list.
    pub fn close(&self) -> Option<i64> {
        let mut guard = self.wizard.lock().expect("wizard mutex poisoned");
        self.epoch.fetch_add(1, Ordering::SeqCst);
        guard.take().and_then(|w| w.reservation_id)
    }

    /// Runs `f` against the open wizard, read-only.
    pub fn with_wizard<F, R>(&self, f: F) -> Result<R, CoreError>
    where
        F: FnOnce(&ReservationWizard) -> R,
    {
        let guard = self.wizard.lock().expect("wizard mutex poisoned");
        match guard.as_ref() {
            Some(wizard) => Ok(f(wizard)),
            None => Err(CoreError::InvalidWizardStage { current: "closed" }),
        }
    }

    /// Runs `f` against the open wizard with write access.
    pub fn with_wizard_mut<F, R>(&self, f: F) -> Result<R, CoreError>
    where
        F: FnOnce(&mut ReservationWizard) -> R,
    {
        let mut guard = self.wizard.lock().expect("wizard mutex poisoned");
        match guard.as_mut() {
            Some(wizard) => Ok(f(wizard)),
            None => Err(CoreError::InvalidWizardStage { current: "closed" }),
        }
    }

    /// Applies `f` only if the wizard generation still matches `epoch`.
    ///
    /// Returns `false` when the response is stale (wizard closed or
    /// reopened since the request started); the caller drops the update.
    pub fn if_current<F>(&self, epoch: u64, f: F) -> bool
    where
        F: FnOnce(&mut ReservationWizard),
    {
        let mut guard = self.wizard.lock().expect("wizard mutex poisoned");
        if self.epoch.load(Ordering::SeqCst) != epoch {
            warn!(epoch, "dropping stale wizard update");
            return false;
        }
        match guard.as_mut() {
            Some(wizard) => {
                f(wizard);
                true
            }
            None => false,
        }
    }
}

impl Default for WizardState {
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

    fn snapshot() -> VehicleSnapshot {
        VehicleSnapshot {
            vehicle_id: 3,
            brand: "Toyota".to_string(),
            model: "Corolla".to_string(),
            daily_rate: Money::from_minor(25_000),
        }
    }

    fn d(y: i32, m: u32, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, day)
    }

    #[test]
    fn test_happy_path_sequencing() {
        let mut wizard = ReservationWizard::new(snapshot(), 11);
        assert_eq!(wizard.stage, WizardStage::Details);
        assert!(!wizard.can_submit());

        wizard.set_dates(d(2024, 6, 1), d(2024, 6, 4)).unwrap();
        assert_eq!(wizard.quote.days, 3);
        assert_eq!(wizard.quote.total, Money::from_minor(75_000));
        assert!(!wizard.can_submit()); // agencies missing

        wizard.set_agencies(Some(1), Some(2)).unwrap();
        assert!(wizard.can_submit());

        let details = wizard.begin_submit().unwrap();
        assert_eq!(details.client_id, 11);
        assert_eq!(details.vehicle_id, 3);
        assert_eq!(details.total, Money::from_minor(75_000));
        assert!(wizard.submitting);

        wizard.complete_submit(7);
        assert_eq!(wizard.stage, WizardStage::Payment);
        assert_eq!(wizard.reservation_id, Some(7));

        let (reservation_id, total) = wizard.begin_payment().unwrap();
        assert_eq!(reservation_id, 7);
        assert_eq!(total, Money::from_minor(75_000));

        wizard.complete_payment();
        assert_eq!(wizard.stage, WizardStage::Success);
    }

    #[test]
    fn test_same_day_rental_bills_one_day() {
        let mut wizard = ReservationWizard::new(snapshot(), 11);
        wizard.set_dates(d(2024, 6, 1), d(2024, 6, 1)).unwrap();
        assert_eq!(wizard.quote.days, 1);
        assert_eq!(wizard.quote.total, Money::from_minor(25_000));
    }

    #[test]
    fn test_quote_recomputed_on_date_change() {
        let mut wizard = ReservationWizard::new(snapshot(), 11);
        wizard.set_dates(d(2024, 6, 1), d(2024, 6, 4)).unwrap();
        assert_eq!(wizard.quote.days, 3);

        wizard.set_dates(d(2024, 6, 1), d(2024, 6, 8)).unwrap();
        assert_eq!(wizard.quote.days, 7);
        assert_eq!(wizard.quote.total, Money::from_minor(175_000));
    }

    #[test]
    fn test_no_edits_after_details() {
        let mut wizard = ReservationWizard::new(snapshot(), 11);
        wizard.set_dates(d(2024, 6, 1), d(2024, 6, 4)).unwrap();
        wizard.set_agencies(Some(1), Some(2)).unwrap();
        wizard.begin_submit().unwrap();
        wizard.complete_submit(7);

        assert!(matches!(
            wizard.set_dates(d(2024, 6, 1), d(2024, 6, 10)),
            Err(CoreError::InvalidWizardStage { .. })
        ));
        assert!(matches!(
            wizard.set_agencies(Some(3), Some(3)),
            Err(CoreError::InvalidWizardStage { .. })
        ));
    }

    #[test]
    fn test_double_submit_blocked() {
        let mut wizard = ReservationWizard::new(snapshot(), 11);
        wizard.set_dates(d(2024, 6, 1), d(2024, 6, 4)).unwrap();
        wizard.set_agencies(Some(1), Some(2)).unwrap();

        wizard.begin_submit().unwrap();
        assert!(matches!(
            wizard.begin_submit(),
            Err(CoreError::InvalidWizardStage { .. })
        ));

        // Failed submit unblocks a retry.
        wizard.fail_submit();
        assert!(wizard.begin_submit().is_ok());
    }

    #[test]
    fn test_submit_requires_valid_period() {
        let mut wizard = ReservationWizard::new(snapshot(), 11);
        wizard.set_agencies(Some(1), Some(2)).unwrap();

        // No dates at all.
        assert!(wizard.begin_submit().is_err());

        // Inverted range.
        wizard.set_dates(d(2024, 6, 4), d(2024, 6, 1)).unwrap();
        assert!(wizard.begin_submit().is_err());
        assert!(!wizard.submitting);
    }

    #[test]
    fn test_payment_requires_payment_stage() {
        let mut wizard = ReservationWizard::new(snapshot(), 11);
        assert!(matches!(
            wizard.begin_payment(),
            Err(CoreError::InvalidWizardStage { .. })
        ));
    }

    #[test]
    fn test_failed_payment_stays_payable() {
        let mut wizard = ReservationWizard::new(snapshot(), 11);
        wizard.set_dates(d(2024, 6, 1), d(2024, 6, 4)).unwrap();
        wizard.set_agencies(Some(1), Some(2)).unwrap();
        wizard.begin_submit().unwrap();
        wizard.complete_submit(7);

        wizard.begin_payment().unwrap();
        wizard.fail_payment();
        assert_eq!(wizard.stage, WizardStage::Payment);
        assert!(wizard.begin_payment().is_ok());
    }

    #[test]
    fn test_close_keeps_created_reservation() {
        let state = WizardState::new();
        state.open(snapshot(), 11);
        state
            .with_wizard_mut(|w| {
                w.set_dates(d(2024, 6, 1), d(2024, 6, 4)).unwrap();
                w.set_agencies(Some(1), Some(2)).unwrap();
                w.begin_submit().unwrap();
                w.complete_submit(7);
            })
            .unwrap();

        // Close reports the reservation id; nothing is deleted anywhere.
        assert_eq!(state.close(), Some(7));
        assert!(state.with_wizard(|_| ()).is_err());
    }

    #[test]
    fn test_stale_response_dropped_after_close() {
        let state = WizardState::new();
        state.open(snapshot(), 11);
        let epoch = state.epoch();

        // Wizard closed while the (simulated) request was in flight.
        state.close();
        let applied = state.if_current(epoch, |w| w.complete_submit(7));
        assert!(!applied);
    }

    #[test]
    fn test_stale_response_dropped_after_reopen() {
        let state = WizardState::new();
        state.open(snapshot(), 11);
        let epoch = state.epoch();

        // Reopened for another vehicle: the old response must not touch
        // the new wizard.
        state.open(
            VehicleSnapshot {
                vehicle_id: 9,
                brand: "Hyundai".to_string(),
                model: "i10".to_string(),
                daily_rate: Money::from_minor(15_000),
            },
            11,
        );
        let applied = state.if_current(epoch, |w| w.complete_submit(7));
        assert!(!applied);
        state
            .with_wizard(|w| assert_eq!(w.stage, WizardStage::Details))
            .unwrap();
    }

    #[test]
    fn test_current_response_applies() {
        let state = WizardState::new();
        state.open(snapshot(), 11);
        state
            .with_wizard_mut(|w| {
                w.set_dates(d(2024, 6, 1), d(2024, 6, 4)).unwrap();
                w.set_agencies(Some(1), Some(2)).unwrap();
                w.begin_submit().unwrap();
            })
            .unwrap();

        let applied = state.if_current(state.epoch(), |w| w.complete_submit(7));
        assert!(applied);
        state
            .with_wizard(|w| assert_eq!(w.stage, WizardStage::Payment))
            .unwrap();
    }
}
