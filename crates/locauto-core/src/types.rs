//! # Domain Types
//!
//! Core domain types used throughout LocAuto.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Vehicle      │   │   Reservation   │   │    Payment      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  id             │   │  id             │       │
//! │  │  daily_rate     │   │  start/end date │   │  reservation_id │       │
//! │  │  status         │   │  status         │   │  method         │       │
//! │  │  reservations   │   │  total_price    │   │  amount         │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  Agency, Category    reference data for selection lists and filters    │
//! │  ClientProfile       1:1 with User; gates the reservation wizard       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Status Enums and Legacy Spellings
//! The rental API historically emitted reservation statuses in several
//! spellings (`"en attente"`, `"en_attente"`, `"confirmée"`, ...). Each
//! status here is a single closed enum that serializes only the canonical
//! underscored form and deserializes every known legacy spelling via serde
//! aliases. The dual-representation bug class is gone by construction.
//!
//! ## Wire Schema
//! The canonical payload schema uses the API's French key names
//! (`voiture_id`, `date_depart`, `prix_total`, ...). Rust field names stay
//! English; `#[serde(rename)]` carries the mapping.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Wire Helpers
// =============================================================================

/// Serde helpers for tolerant wire decoding.
pub mod wire {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer};

    /// Deserializes an optional day-granular date, treating malformed input
    /// as absent instead of failing the whole payload.
    ///
    /// The API is not consistent about date formatting: some records carry
    /// `"2024-07-10"`, others a full timestamp `"2024-07-10T00:00:00Z"`,
    /// and a few legacy rows hold garbage. The availability resolver skips
    /// reservations without a usable return date, so decoding maps all of
    /// those cases to `None`.
    pub fn lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        Ok(raw.as_deref().and_then(parse_day))
    }

    /// Parses the day portion of a date string, ignoring any time-of-day
    /// component. Day granularity sidesteps DST off-by-one day counts.
    pub fn parse_day(s: &str) -> Option<NaiveDate> {
        let day = s.get(..10).unwrap_or(s);
        NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
    }
}

// =============================================================================
// Vehicle Status
// =============================================================================

/// The status of a vehicle, as set by the server.
///
/// This field is authoritative: the client-side availability projection
/// (see [`crate::availability`]) never overrides it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum VehicleStatus {
    /// Vehicle can be reserved.
    #[serde(rename = "disponible", alias = "available")]
    Available,
    /// Vehicle is out with a client.
    #[serde(rename = "louee", alias = "louée", alias = "loue", alias = "loué", alias = "rented")]
    Rented,
    /// Vehicle is in the workshop.
    #[serde(rename = "maintenance", alias = "en_maintenance", alias = "en maintenance")]
    Maintenance,
}

impl VehicleStatus {
    /// French display label for the UI.
    pub fn label_fr(&self) -> &'static str {
        match self {
            VehicleStatus::Available => "Disponible",
            VehicleStatus::Rented => "Louée",
            VehicleStatus::Maintenance => "En maintenance",
        }
    }
}

// =============================================================================
// Reservation Status
// =============================================================================

/// The status of a reservation.
///
/// ## Lifecycle
/// ```text
/// Pending ──► Confirmed ──► InProgress ──► Completed
///    │            │
///    └────────────┴──► Cancelled
/// ```
///
/// The authoritative state machine lives server-side; the client only
/// reads these values and derives display projections from them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum ReservationStatus {
    #[serde(rename = "en_attente", alias = "en attente", alias = "pending")]
    Pending,
    #[serde(
        rename = "confirmee",
        alias = "confirmée",
        alias = "confirmé",
        alias = "confirme",
        alias = "confirmed"
    )]
    Confirmed,
    #[serde(rename = "en_cours", alias = "en cours", alias = "in_progress")]
    InProgress,
    #[serde(
        rename = "terminee",
        alias = "terminée",
        alias = "terminé",
        alias = "termine",
        alias = "completed"
    )]
    Completed,
    #[serde(
        rename = "annulee",
        alias = "annulée",
        alias = "annulé",
        alias = "annule",
        alias = "cancelled"
    )]
    Cancelled,
}

impl ReservationStatus {
    /// A reservation occupies the vehicle while confirmed or in progress.
    ///
    /// Pending reservations do not count: the original flow creates a
    /// reservation before payment, and an unpaid `Pending` row must not
    /// make the vehicle look rented.
    #[inline]
    pub fn is_active(&self) -> bool {
        matches!(self, ReservationStatus::Confirmed | ReservationStatus::InProgress)
    }

    /// French display label for the UI.
    pub fn label_fr(&self) -> &'static str {
        match self {
            ReservationStatus::Pending => "En attente",
            ReservationStatus::Confirmed => "Confirmée",
            ReservationStatus::InProgress => "En cours",
            ReservationStatus::Completed => "Terminée",
            ReservationStatus::Cancelled => "Annulée",
        }
    }
}

impl Default for ReservationStatus {
    fn default() -> Self {
        ReservationStatus::Pending
    }
}

// =============================================================================
// Payment Method & Status
// =============================================================================

/// How a payment was made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum PaymentMethod {
    /// Orange Money mobile wallet.
    #[serde(rename = "orange_money", alias = "orange money", alias = "om")]
    OrangeMoney,
    /// Wave mobile wallet.
    #[serde(rename = "wave")]
    Wave,
    /// Physical cash at the agency.
    #[serde(rename = "especes", alias = "espèces", alias = "cash")]
    Cash,
    /// Card payment.
    #[serde(rename = "carte", alias = "carte_bancaire", alias = "card")]
    Card,
    /// Bank transfer.
    #[serde(rename = "virement", alias = "transfer")]
    Transfer,
    /// Cheque.
    #[serde(rename = "cheque", alias = "chèque", alias = "check")]
    Check,
}

impl PaymentMethod {
    /// French display label for the UI.
    pub fn label_fr(&self) -> &'static str {
        match self {
            PaymentMethod::OrangeMoney => "Orange Money",
            PaymentMethod::Wave => "Wave",
            PaymentMethod::Cash => "Espèces",
            PaymentMethod::Card => "Carte bancaire",
            PaymentMethod::Transfer => "Virement",
            PaymentMethod::Check => "Chèque",
        }
    }
}

/// The status of a payment record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum PaymentStatus {
    #[serde(rename = "en_attente", alias = "en attente", alias = "pending")]
    Pending,
    #[serde(
        rename = "effectue",
        alias = "effectué",
        alias = "effectuee",
        alias = "effectuée",
        alias = "completed"
    )]
    Completed,
    #[serde(rename = "echoue", alias = "échoué", alias = "failed")]
    Failed,
}

// =============================================================================
// Vehicle
// =============================================================================

/// A rental vehicle.
///
/// The embedded reservation list is possibly partial (the API only embeds
/// it on detail reads). It feeds the display-only availability projection;
/// the `status` field remains the authoritative server value.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Vehicle {
    pub id: i64,

    /// Brand, e.g. "Toyota".
    #[serde(rename = "marque")]
    pub brand: String,

    /// Model, e.g. "Corolla".
    #[serde(rename = "modele")]
    pub model: String,

    /// Registration plate.
    #[serde(rename = "immatriculation")]
    pub registration: String,

    /// Daily rate in minor currency units (whole FCFA).
    #[serde(rename = "prix_journalier")]
    pub daily_rate: Money,

    /// Authoritative status set by the back-office.
    #[serde(rename = "statut")]
    pub status: VehicleStatus,

    #[serde(rename = "categorie_id")]
    pub category_id: i64,

    #[serde(rename = "agence_id")]
    pub agency_id: i64,

    /// URL of the vehicle photo, when one was uploaded.
    #[serde(rename = "image", default)]
    pub image_url: Option<String>,

    /// Embedded reservations (detail reads only; may be partial).
    #[serde(default)]
    pub reservations: Vec<Reservation>,

    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Reservation
// =============================================================================

/// A rental reservation.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Reservation {
    pub id: i64,

    #[serde(rename = "voiture_id")]
    pub vehicle_id: i64,

    #[serde(rename = "client_id")]
    pub client_id: i64,

    #[serde(rename = "agence_depart_id")]
    pub pickup_agency_id: i64,

    #[serde(rename = "agence_retour_id")]
    pub return_agency_id: i64,

    /// Rental start, day granularity. Lenient: garbage decodes to `None`.
    #[serde(rename = "date_depart", default, deserialize_with = "wire::lenient_date")]
    #[ts(as = "Option<String>")]
    pub start_date: Option<NaiveDate>,

    /// Rental end (return date), day granularity. Lenient as above.
    #[serde(rename = "date_retour", default, deserialize_with = "wire::lenient_date")]
    #[ts(as = "Option<String>")]
    pub end_date: Option<NaiveDate>,

    #[serde(rename = "statut", default)]
    pub status: ReservationStatus,

    /// Total price in minor currency units.
    #[serde(rename = "prix_total")]
    pub total_price: Money,
}

impl Reservation {
    /// Recomputes the outstanding balance from the reservation total and
    /// its completed payments.
    ///
    /// Always derived, never cached: after a new payment is recorded the
    /// caller re-fetches the payment list and calls this again.
    ///
    /// ## Example
    /// ```text
    /// prix_total: 75 000
    /// payments:   50 000 (effectue) + 10 000 (en_attente)
    ///      │
    ///      ▼
    /// outstanding = 75 000 − 50 000 = 25 000  (pending payments excluded)
    /// ```
    pub fn outstanding_balance(&self, payments: &[Payment]) -> Money {
        let paid: Money = payments
            .iter()
            .filter(|p| p.reservation_id == self.id && p.status == PaymentStatus::Completed)
            .map(|p| p.amount)
            .sum();
        self.total_price - paid
    }
}

// =============================================================================
// Payment
// =============================================================================

/// A payment recorded against a reservation.
/// The wizard always pays the full total; the back-office can record
/// partial payments against the running balance.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Payment {
    pub id: i64,

    #[serde(rename = "reservation_id")]
    pub reservation_id: i64,

    /// Amount in minor currency units.
    #[serde(rename = "montant")]
    pub amount: Money,

    #[serde(rename = "methode")]
    pub method: PaymentMethod,

    #[serde(rename = "statut")]
    pub status: PaymentStatus,

    /// Day the payment was made.
    #[serde(rename = "date_paiement", default, deserialize_with = "wire::lenient_date")]
    #[ts(as = "Option<String>")]
    pub payment_date: Option<NaiveDate>,
}

// =============================================================================
// Client Profile
// =============================================================================

/// Rental-specific profile data, linked 1:1 to a user account.
///
/// A reservation requires a complete profile; the wizard refuses to open
/// otherwise and the frontend redirects to profile completion.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ClientProfile {
    pub id: i64,

    #[serde(rename = "user_id")]
    pub user_id: i64,

    #[serde(rename = "numero_permis", default)]
    pub license_number: Option<String>,

    #[serde(rename = "adresse", default)]
    pub address: Option<String>,

    #[serde(rename = "telephone", default)]
    pub phone: Option<String>,

    #[serde(rename = "date_naissance", default, deserialize_with = "wire::lenient_date")]
    #[ts(as = "Option<String>")]
    pub birth_date: Option<NaiveDate>,
}

impl ClientProfile {
    /// Whether the profile carries everything a reservation needs.
    pub fn is_complete(&self) -> bool {
        let filled = |f: &Option<String>| f.as_deref().map_or(false, |s| !s.trim().is_empty());
        filled(&self.license_number)
            && filled(&self.address)
            && filled(&self.phone)
            && self.birth_date.is_some()
    }
}

// =============================================================================
// Reference Data
// =============================================================================

/// A rental agency (pickup/return location).
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Agency {
    pub id: i64,

    #[serde(rename = "nom")]
    pub name: String,

    #[serde(rename = "adresse", default)]
    pub address: Option<String>,

    #[serde(rename = "ville")]
    pub city: String,

    #[serde(rename = "telephone", default)]
    pub phone: Option<String>,
}

/// A vehicle category, used to filter listings.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Category {
    pub id: i64,

    #[serde(rename = "nom")]
    pub name: String,

    #[serde(rename = "description", default)]
    pub description: Option<String>,

    /// Indicative daily rate for the category.
    #[serde(rename = "prix_journalier", default)]
    pub daily_rate: Option<Money>,
}

// =============================================================================
// User
// =============================================================================

/// An authenticated user account, as returned by `GET /me`.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct User {
    pub id: i64,

    #[serde(rename = "nom")]
    pub name: String,

    pub email: String,

    /// "client" or "admin".
    #[serde(default)]
    pub role: Option<String>,

    /// Client profile, when one has been created for this user.
    #[serde(default)]
    pub client: Option<ClientProfile>,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reservation_status_canonical_serialization() {
        let json = serde_json::to_string(&ReservationStatus::Pending).unwrap();
        assert_eq!(json, "\"en_attente\"");
        let json = serde_json::to_string(&ReservationStatus::Confirmed).unwrap();
        assert_eq!(json, "\"confirmee\"");
    }

    #[test]
    fn test_reservation_status_accepts_legacy_spellings() {
        // Space-separated and accented variants both decode to the same
        // variant; only the canonical form is ever re-emitted.
        for legacy in ["\"en attente\"", "\"en_attente\"", "\"pending\""] {
            let status: ReservationStatus = serde_json::from_str(legacy).unwrap();
            assert_eq!(status, ReservationStatus::Pending);
        }
        for legacy in ["\"confirmée\"", "\"confirmee\"", "\"confirmed\""] {
            let status: ReservationStatus = serde_json::from_str(legacy).unwrap();
            assert_eq!(status, ReservationStatus::Confirmed);
        }
        let status: ReservationStatus = serde_json::from_str("\"annulée\"").unwrap();
        assert_eq!(status, ReservationStatus::Cancelled);
    }

    #[test]
    fn test_reservation_status_rejects_unknown() {
        assert!(serde_json::from_str::<ReservationStatus>("\"garbage\"").is_err());
    }

    #[test]
    fn test_active_statuses() {
        assert!(ReservationStatus::Confirmed.is_active());
        assert!(ReservationStatus::InProgress.is_active());
        assert!(!ReservationStatus::Pending.is_active());
        assert!(!ReservationStatus::Completed.is_active());
        assert!(!ReservationStatus::Cancelled.is_active());
    }

    #[test]
    fn test_lenient_date_decoding() {
        #[derive(Deserialize)]
        struct Probe {
            #[serde(default, deserialize_with = "wire::lenient_date")]
            date: Option<NaiveDate>,
        }

        let ok: Probe = serde_json::from_str(r#"{"date":"2024-07-10"}"#).unwrap();
        assert_eq!(ok.date, NaiveDate::from_ymd_opt(2024, 7, 10));

        // Full timestamp: the day portion wins, time-of-day is ignored.
        let ts: Probe = serde_json::from_str(r#"{"date":"2024-07-10T15:30:00Z"}"#).unwrap();
        assert_eq!(ts.date, NaiveDate::from_ymd_opt(2024, 7, 10));

        // Garbage and null decode to None instead of failing the payload.
        let bad: Probe = serde_json::from_str(r#"{"date":"not-a-date"}"#).unwrap();
        assert_eq!(bad.date, None);
        let null: Probe = serde_json::from_str(r#"{"date":null}"#).unwrap();
        assert_eq!(null.date, None);
        let missing: Probe = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(missing.date, None);
    }

    #[test]
    fn test_reservation_wire_keys_are_french() {
        let reservation = Reservation {
            id: 7,
            vehicle_id: 3,
            client_id: 11,
            pickup_agency_id: 1,
            return_agency_id: 2,
            start_date: NaiveDate::from_ymd_opt(2024, 6, 1),
            end_date: NaiveDate::from_ymd_opt(2024, 6, 4),
            status: ReservationStatus::Pending,
            total_price: Money::from_minor(75_000),
        };

        let value = serde_json::to_value(&reservation).unwrap();
        assert_eq!(value["voiture_id"], 3);
        assert_eq!(value["agence_depart_id"], 1);
        assert_eq!(value["date_depart"], "2024-06-01");
        assert_eq!(value["prix_total"], 75_000);
        assert_eq!(value["statut"], "en_attente");
    }

    #[test]
    fn test_outstanding_balance_excludes_pending_and_foreign_payments() {
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

        let pay = |id, reservation_id, amount, status| Payment {
            id,
            reservation_id,
            amount: Money::from_minor(amount),
            method: PaymentMethod::Wave,
            status,
            payment_date: NaiveDate::from_ymd_opt(2024, 6, 1),
        };

        let payments = vec![
            pay(1, 7, 50_000, PaymentStatus::Completed),
            pay(2, 7, 10_000, PaymentStatus::Pending),
            pay(3, 99, 25_000, PaymentStatus::Completed), // other reservation
        ];

        assert_eq!(
            reservation.outstanding_balance(&payments),
            Money::from_minor(25_000)
        );
    }

    #[test]
    fn test_client_profile_completeness() {
        let mut profile = ClientProfile {
            id: 1,
            user_id: 1,
            license_number: Some("SN-2021-443210".to_string()),
            address: Some("Sacré-Cœur 3, Dakar".to_string()),
            phone: Some("+221770000000".to_string()),
            birth_date: NaiveDate::from_ymd_opt(1990, 4, 12),
        };
        assert!(profile.is_complete());

        profile.phone = Some("   ".to_string());
        assert!(!profile.is_complete());

        profile.phone = Some("+221770000000".to_string());
        profile.birth_date = None;
        assert!(!profile.is_complete());
    }

    #[test]
    fn test_vehicle_status_legacy_spellings() {
        let status: VehicleStatus = serde_json::from_str("\"louée\"").unwrap();
        assert_eq!(status, VehicleStatus::Rented);
        let status: VehicleStatus = serde_json::from_str("\"disponible\"").unwrap();
        assert_eq!(status, VehicleStatus::Available);
    }
}
