//! # Payment Endpoint
//!
//! Payment capture against a reservation.
//!
//! ## Payment Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Wizard Payment step, method chosen, "Payer" clicked                    │
//! │       │                                                                 │
//! │       │  CreatePaymentRequest (frozen wizard total, chosen method)      │
//! │       ▼                                                                 │
//! │  POST /paiements                                                        │
//! │       │                                                                 │
//! │       ├── 201 ──► wizard advances to Success                            │
//! │       └── error ──► reservation stays en_attente, payable from          │
//! │                     "Mes réservations" later                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use locauto_core::types::{Payment, PaymentMethod};
use locauto_core::Money;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::client::HttpClient;
use crate::error::RemoteResult;

// =============================================================================
// Payloads
// =============================================================================

/// Payload for `POST /paiements`.
#[derive(Debug, Clone, Serialize)]
pub struct CreatePaymentRequest {
    #[serde(rename = "reservation_id")]
    pub reservation_id: i64,

    #[serde(rename = "montant")]
    pub amount: Money,

    #[serde(rename = "methode")]
    pub method: PaymentMethod,

    /// Day of payment, client-side date.
    #[serde(rename = "date_paiement")]
    pub payment_date: NaiveDate,
}

/// Creation response envelope: `{message, paiement}`.
#[derive(Debug, Deserialize)]
struct CreatePaymentResponse {
    #[serde(rename = "paiement")]
    payment: Payment,
}

// =============================================================================
// Endpoint
// =============================================================================

/// Payment operations.
#[derive(Debug, Clone)]
pub struct PaymentEndpoint {
    client: HttpClient,
}

impl PaymentEndpoint {
    pub fn new(client: HttpClient) -> Self {
        PaymentEndpoint { client }
    }

    /// Records a payment against a reservation.
    ///
    /// On success the server confirms the reservation; the returned
    /// payment row reflects the captured amount and status.
    pub async fn create(
        &self,
        request: &CreatePaymentRequest,
        token: &str,
    ) -> RemoteResult<Payment> {
        let response: CreatePaymentResponse =
            self.client.post("/paiements", request, Some(token)).await?;
        info!(
            payment_id = response.payment.id,
            reservation_id = request.reservation_id,
            "payment recorded"
        );
        Ok(response.payment)
    }

    /// Lists the payments recorded against one reservation. Feeds the
    /// outstanding-balance recomputation.
    pub async fn for_reservation(
        &self,
        reservation_id: i64,
        token: &str,
    ) -> RemoteResult<Vec<Payment>> {
        self.client
            .get(
                &format!("/reservations/{reservation_id}/paiements"),
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
        let request = CreatePaymentRequest {
            reservation_id: 7,
            amount: Money::from_minor(75_000),
            method: PaymentMethod::OrangeMoney,
            payment_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["reservation_id"], 7);
        assert_eq!(value["montant"], 75_000);
        assert_eq!(value["methode"], "orange_money");
        assert_eq!(value["date_paiement"], "2024-06-01");
    }

    #[test]
    fn test_create_response_envelope_decoding() {
        let json = r#"{
            "message": "Paiement enregistré",
            "paiement": {
                "id": 31,
                "reservation_id": 7,
                "montant": 75000,
                "methode": "wave",
                "statut": "effectué",
                "date_paiement": "2024-06-01"
            }
        }"#;
        let response: CreatePaymentResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.payment.id, 31);
        assert_eq!(response.payment.amount, Money::from_minor(75_000));
    }
}
