//! # Reservation Commands
//!
//! The reservation wizard flow plus reservation history and balances.
//!
//! ## Locking Discipline
//! Wizard mutations happen under the wizard mutex, but the mutex is never
//! held across a network call:
//!
//! ```text
//! submit_reservation
//!   1. lock    ── begin_submit(): validate, freeze details, submitting=true
//!   2. unlock  ── POST /reservations (seconds, no lock held)
//!   3. lock    ── if_current(epoch): complete_submit / fail_submit
//! ```
//!
//! Step 3 checks the wizard generation: if the user closed or reopened
//! the wizard while the request was in flight, the response is dropped.
//! A reservation created by a dropped response stays on the server and
//! shows up in "Mes réservations".

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tauri::State;
use tracing::{debug, info, warn};

use crate::error::ApiError;
use crate::state::{ApiState, VehicleSnapshot, WizardSnapshot, WizardState};
use locauto_api::{CreatePaymentRequest, CreateReservationRequest};
use locauto_core::types::{wire, PaymentMethod, Reservation};
use locauto_core::validation::validate_payment_amount;
use locauto_core::{CoreError, Money};

// =============================================================================
// DTOs
// =============================================================================

/// A reservation row for the "Mes réservations" list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationDto {
    pub id: i64,
    pub vehicle_id: i64,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub status: String,
    pub status_label: String,
    pub total_price: Money,
}

impl From<Reservation> for ReservationDto {
    fn from(reservation: Reservation) -> Self {
        ReservationDto {
            id: reservation.id,
            vehicle_id: reservation.vehicle_id,
            start_date: reservation.start_date,
            end_date: reservation.end_date,
            status_label: reservation.status.label_fr().to_string(),
            status: serde_json::to_value(reservation.status)
                .ok()
                .and_then(|v| v.as_str().map(String::from))
                .unwrap_or_default(),
            total_price: reservation.total_price,
        }
    }
}

/// One page of the reservation history.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationListResponse {
    pub items: Vec<ReservationDto>,
    pub current_page: u32,
    pub last_page: u32,
    pub total: u64,
}

/// Outstanding balance of a reservation, always recomputed from the
/// payment list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceResponse {
    pub reservation_id: i64,
    pub total_price: Money,
    pub total_paid: Money,
    pub outstanding: Money,
}

// =============================================================================
// Wizard Commands
// =============================================================================

#[tauri::command]
pub async fn open_reservation_wizard(
    api: State<'_, ApiState>,
    wizard: State<'_, WizardState>,
    vehicle_id: i64,
) -> Result<WizardSnapshot, ApiError> {
    debug!(vehicle_id, "open_reservation_wizard command");

    let token = api.require_token()?;

    // Refresh the user first: profile completeness gates the wizard and
    // the profile may have been completed since login.
    let user = api
        .api()
        .auth()
        .me(&token)
        .await
        .map_err(|e| api.handle_remote(e))?;

    let client_id = user
        .client
        .as_ref()
        .filter(|c| c.is_complete())
        .map(|c| c.id);
    api.update_user(user);
    let client_id = client_id.ok_or(CoreError::IncompleteProfile)?;

    // Fetch the vehicle detail to freeze the price the client is quoted.
    let vehicle = api
        .api()
        .vehicles()
        .get(vehicle_id, Some(&token))
        .await
        .map_err(|e| api.handle_remote(e))?;

    let snapshot = wizard.open(VehicleSnapshot::from_vehicle(&vehicle), client_id);
    info!(vehicle_id, "reservation wizard opened");
    Ok(snapshot)
}

#[tauri::command]
pub fn set_wizard_dates(
    wizard: State<'_, WizardState>,
    start_date: Option<String>,
    end_date: Option<String>,
) -> Result<WizardSnapshot, ApiError> {
    debug!(?start_date, ?end_date, "set_wizard_dates command");

    let start = parse_picker_date(start_date.as_deref())?;
    let end = parse_picker_date(end_date.as_deref())?;

    wizard
        .with_wizard_mut(|w| {
            w.set_dates(start, end)?;
            Ok(WizardSnapshot::from(&*w))
        })
        .map_err(ApiError::from)?
        .map_err(ApiError::from)
}

#[tauri::command]
pub fn set_wizard_agencies(
    wizard: State<'_, WizardState>,
    pickup_agency_id: Option<i64>,
    return_agency_id: Option<i64>,
) -> Result<WizardSnapshot, ApiError> {
    debug!(?pickup_agency_id, ?return_agency_id, "set_wizard_agencies command");

    wizard
        .with_wizard_mut(|w| {
            w.set_agencies(pickup_agency_id, return_agency_id)?;
            Ok(WizardSnapshot::from(&*w))
        })
        .map_err(ApiError::from)?
        .map_err(ApiError::from)
}

#[tauri::command]
pub fn get_wizard(wizard: State<'_, WizardState>) -> Option<WizardSnapshot> {
    wizard.with_wizard(WizardSnapshot::from).ok()
}

#[tauri::command]
pub async fn submit_reservation(
    api: State<'_, ApiState>,
    wizard: State<'_, WizardState>,
) -> Result<WizardSnapshot, ApiError> {
    debug!("submit_reservation command");

    let token = api.require_token()?;
    let epoch = wizard.epoch();
    let details = wizard
        .with_wizard_mut(|w| w.begin_submit())
        .map_err(ApiError::from)?
        .map_err(ApiError::from)?;

    let request = CreateReservationRequest::new(
        details.client_id,
        details.vehicle_id,
        details.pickup_agency_id,
        details.return_agency_id,
        details.start_date,
        details.end_date,
        details.total,
    );

    // Network call with the wizard lock released.
    match api.api().reservations().create(&request, &token).await {
        Ok(reservation) => {
            let applied = wizard.if_current(epoch, |w| w.complete_submit(reservation.id));
            if !applied {
                // Wizard closed or reopened mid-flight. The reservation
                // exists server-side and stays payable from the list.
                warn!(
                    reservation_id = reservation.id,
                    "wizard changed during submit, reservation kept server-side"
                );
                return Err(ApiError::wizard(
                    "L'assistant a été fermé. Retrouvez votre réservation dans « Mes réservations ».",
                ));
            }
            wizard
                .with_wizard(WizardSnapshot::from)
                .map_err(ApiError::from)
        }
        Err(e) => {
            wizard.if_current(epoch, |w| w.fail_submit());
            Err(api.handle_remote(e))
        }
    }
}

#[tauri::command]
pub async fn submit_payment(
    api: State<'_, ApiState>,
    wizard: State<'_, WizardState>,
    method: PaymentMethod,
) -> Result<WizardSnapshot, ApiError> {
    debug!(?method, "submit_payment command");

    let token = api.require_token()?;
    let epoch = wizard.epoch();
    let (reservation_id, total) = wizard
        .with_wizard_mut(|w| w.begin_payment())
        .map_err(ApiError::from)?
        .map_err(ApiError::from)?;

    if let Err(e) = validate_payment_amount(total.minor()) {
        wizard.if_current(epoch, |w| w.fail_payment());
        return Err(CoreError::from(e).into());
    }

    let request = CreatePaymentRequest {
        reservation_id,
        amount: total,
        method,
        payment_date: Utc::now().date_naive(),
    };

    match api.api().payments().create(&request, &token).await {
        Ok(payment) => {
            info!(reservation_id, payment_id = payment.id, "payment captured");
            let applied = wizard.if_current(epoch, |w| w.complete_payment());
            if !applied {
                warn!(reservation_id, "wizard changed during payment, response dropped");
                return Err(ApiError::wizard(
                    "L'assistant a été fermé. Le paiement a bien été enregistré.",
                ));
            }
            wizard
                .with_wizard(WizardSnapshot::from)
                .map_err(ApiError::from)
        }
        Err(e) => {
            // The reservation stays en_attente and payable later.
            wizard.if_current(epoch, |w| w.fail_payment());
            Err(api.handle_remote(e))
        }
    }
}

#[tauri::command]
pub fn close_reservation_wizard(wizard: State<'_, WizardState>) -> Option<i64> {
    let kept = wizard.close();
    if let Some(reservation_id) = kept {
        info!(reservation_id, "wizard closed, reservation kept");
    }
    kept
}

// =============================================================================
// History & Balances
// =============================================================================

#[tauri::command]
pub async fn my_reservations(
    api: State<'_, ApiState>,
    page: Option<u32>,
) -> Result<ReservationListResponse, ApiError> {
    debug!(?page, "my_reservations command");

    let token = api.require_token()?;
    let reservations = api
        .api()
        .reservations()
        .mine(page.unwrap_or(1), &token)
        .await
        .map_err(|e| api.handle_remote(e))?;

    Ok(ReservationListResponse {
        current_page: reservations.current_page,
        last_page: reservations.last_page,
        total: reservations.total,
        items: reservations
            .data
            .into_iter()
            .map(ReservationDto::from)
            .collect(),
    })
}

#[tauri::command]
pub async fn reservation_balance(
    api: State<'_, ApiState>,
    reservation_id: i64,
) -> Result<BalanceResponse, ApiError> {
    debug!(reservation_id, "reservation_balance command");

    let token = api.require_token()?;
    let (reservation, payments) = tokio::try_join!(
        api.api().reservations().get(reservation_id, &token),
        api.api().payments().for_reservation(reservation_id, &token),
    )
    .map_err(|e| api.handle_remote(e))?;

    let raw = reservation.outstanding_balance(&payments);
    Ok(BalanceResponse {
        reservation_id,
        total_price: reservation.total_price,
        total_paid: reservation.total_price - raw,
        // An overpaid reservation shows a zero balance, never a negative one.
        outstanding: raw.max_zero(),
    })
}

#[tauri::command]
pub async fn cancel_reservation(
    api: State<'_, ApiState>,
    reservation_id: i64,
) -> Result<ReservationDto, ApiError> {
    debug!(reservation_id, "cancel_reservation command");

    let token = api.require_token()?;
    let reservation = api
        .api()
        .reservations()
        .cancel(reservation_id, &token)
        .await
        .map_err(|e| api.handle_remote(e))?;

    info!(reservation_id, "reservation cancelled");
    Ok(ReservationDto::from(reservation))
}

// =============================================================================
// Helpers
// =============================================================================

/// Parses a date coming from the frontend date picker.
///
/// `None` clears the date; a present but malformed value is a hard
/// validation error (pickers emit `YYYY-MM-DD`, anything else is a bug).
fn parse_picker_date(raw: Option<&str>) -> Result<Option<NaiveDate>, ApiError> {
    match raw {
        None => Ok(None),
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => wire::parse_day(s)
            .map(Some)
            .ok_or_else(|| ApiError::validation(format!("Format de date invalide: {s}"))),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use locauto_core::types::ReservationStatus;

    #[test]
    fn test_parse_picker_date() {
        assert_eq!(parse_picker_date(None).unwrap(), None);
        assert_eq!(parse_picker_date(Some("")).unwrap(), None);
        assert_eq!(
            parse_picker_date(Some("2024-06-01")).unwrap(),
            NaiveDate::from_ymd_opt(2024, 6, 1)
        );
        assert!(parse_picker_date(Some("01/06/2024")).is_err());
    }

    #[test]
    fn test_reservation_dto_carries_canonical_status() {
        let reservation = Reservation {
            id: 7,
            vehicle_id: 3,
            client_id: 11,
            pickup_agency_id: 1,
            return_agency_id: 2,
            start_date: NaiveDate::from_ymd_opt(2024, 6, 1),
            end_date: NaiveDate::from_ymd_opt(2024, 6, 4),
            status: ReservationStatus::Confirmed,
            total_price: Money::from_minor(75_000),
        };

        let dto = ReservationDto::from(reservation);
        assert_eq!(dto.status, "confirmee");
        assert_eq!(dto.status_label, "Confirmée");
    }
}
