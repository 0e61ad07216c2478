//! # Reservation Endpoint
//!
//! Reservation creation and history.
//!
//! ## Creation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Wizard Details step, "Continuer" clicked                               │
//! │       │                                                                 │
//! │       │  CreateReservationRequest (status en_attente, frozen total)     │
//! │       ▼                                                                 │
//! │  POST /reservations                                                     │
//! │       │                                                                 │
//! │       ├── 201 {reservation: {...}} ──► wizard advances to Payment       │
//! │       ├── 422 field errors        ──► inline alert, stays on Details    │
//! │       └── business rejection      ──► API message verbatim              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The reservation is created BEFORE payment, in `en_attente` status. The
//! server confirms it once the payment is captured. Closing the wizard
//! after this point never deletes the created reservation.

use locauto_core::types::Reservation;
use locauto_core::Money;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::client::HttpClient;
use crate::error::RemoteResult;
use crate::pagination::Page;

// =============================================================================
// Payloads
// =============================================================================

/// Payload for `POST /reservations`.
///
/// `prix_total` carries the client-computed quote; the server recomputes
/// and rejects mismatches, so a stale catalog price cannot silently
/// change what the client is charged.
#[derive(Debug, Clone, Serialize)]
pub struct CreateReservationRequest {
    pub client_id: i64,

    #[serde(rename = "voiture_id")]
    pub vehicle_id: i64,

    #[serde(rename = "agence_depart_id")]
    pub pickup_agency_id: i64,

    #[serde(rename = "agence_retour_id")]
    pub return_agency_id: i64,

    #[serde(rename = "date_depart")]
    pub start_date: NaiveDate,

    #[serde(rename = "date_retour")]
    pub end_date: NaiveDate,

    /// Always "en_attente" at creation; the server owns later transitions.
    #[serde(rename = "statut")]
    pub status: &'static str,

    #[serde(rename = "prix_total")]
    pub total_price: Money,
}

impl CreateReservationRequest {
    pub fn new(
        client_id: i64,
        vehicle_id: i64,
        pickup_agency_id: i64,
        return_agency_id: i64,
        start_date: NaiveDate,
        end_date: NaiveDate,
        total_price: Money,
    ) -> Self {
        CreateReservationRequest {
            client_id,
            vehicle_id,
            pickup_agency_id,
            return_agency_id,
            start_date,
            end_date,
            status: "en_attente",
            total_price,
        }
    }
}

/// Creation response envelope: `{message, reservation}`.
#[derive(Debug, Deserialize)]
struct CreateReservationResponse {
    reservation: Reservation,
}

// =============================================================================
// Endpoint
// =============================================================================

/// Reservation operations.
#[derive(Debug, Clone)]
pub struct ReservationEndpoint {
    client: HttpClient,
}

impl ReservationEndpoint {
    pub fn new(client: HttpClient) -> Self {
        ReservationEndpoint { client }
    }

    /// Creates a reservation in `en_attente` status.
    pub async fn create(
        &self,
        request: &CreateReservationRequest,
        token: &str,
    ) -> RemoteResult<Reservation> {
        let response: CreateReservationResponse = self
            .client
            .post("/reservations", request, Some(token))
            .await?;
        info!(
            reservation_id = response.reservation.id,
            vehicle_id = request.vehicle_id,
            "reservation created"
        );
        Ok(response.reservation)
    }

    /// Lists the authenticated client's reservations, newest first.
    pub async fn mine(&self, page: u32, token: &str) -> RemoteResult<Page<Reservation>> {
        self.client
            .get_with_query("/mes-reservations", &[("page", page)], Some(token))
            .await
    }

    /// Fetches a single reservation.
    pub async fn get(&self, id: i64, token: &str) -> RemoteResult<Reservation> {
        self.client
            .get(&format!("/reservations/{id}"), Some(token))
            .await
    }

    /// Cancels a reservation. Only `en_attente` reservations can be
    /// cancelled client-side; the server enforces this.
    pub async fn cancel(&self, id: i64, token: &str) -> RemoteResult<Reservation> {
        self.client
            .put(
                &format!("/reservations/{id}/annuler"),
                &(),
                Some(token),
            )
            .await
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_wire_shape() {
        let request = CreateReservationRequest::new(
            11,
            3,
            1,
            2,
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 6, 4).unwrap(),
            Money::from_minor(75_000),
        );

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["client_id"], 11);
        assert_eq!(value["voiture_id"], 3);
        assert_eq!(value["agence_depart_id"], 1);
        assert_eq!(value["agence_retour_id"], 2);
        assert_eq!(value["date_depart"], "2024-06-01");
        assert_eq!(value["date_retour"], "2024-06-04");
        assert_eq!(value["statut"], "en_attente");
        assert_eq!(value["prix_total"], 75_000);
    }

    #[test]
    fn test_create_response_envelope_decoding() {
        let json = r#"{
            "message": "Réservation créée",
            "reservation": {
                "id": 7,
                "voiture_id": 3,
                "client_id": 11,
                "agence_depart_id": 1,
                "agence_retour_id": 2,
                "date_depart": "2024-06-01",
                "date_retour": "2024-06-04",
                "statut": "en attente",
                "prix_total": 75000
            }
        }"#;
        let response: CreateReservationResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.reservation.id, 7);
        assert_eq!(response.reservation.total_price, Money::from_minor(75_000));
    }
}
