//! # locauto-api: Remote Data Access for LocAuto
//!
//! This crate owns all communication with the rental REST API. The remote
//! server is the single source of truth: no entity is cached or persisted
//! locally, and every mutation goes straight to the wire.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       LocAuto Data Flow                                 │
//! │                                                                         │
//! │  Tauri Command (list_vehicles)                                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   locauto-api (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   RentalApi   │    │   Endpoints   │    │   Session    │  │   │
//! │  │   │  (client.rs)  │    │ (vehicles.rs) │    │ (session.rs) │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ HttpClient    │    │ VehicleEndp.  │    │ token + user │  │   │
//! │  │   │ retry/backoff │◄───│ ReservationE. │    │ per-request  │  │   │
//! │  │   │ error mapping │    │ PaymentEndp.  │    │ bearer arg   │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Rental REST API (remote)                        │   │
//! │  │   /voitures /agences /reservations /paiements /login /me       │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`client`] - Generic HTTP client with retry and error mapping
//! - [`error`] - Remote error taxonomy
//! - [`session`] - Authenticated session (token + user)
//! - [`pagination`] - Page envelope for paginated lists
//! - [`endpoints`] - Typed wrappers per remote resource
//!
//! ## Usage
//!
//! ```rust,ignore
//! use locauto_api::{ApiConfig, RentalApi};
//!
//! let api = RentalApi::new(ApiConfig::from_env())?;
//!
//! // Public browsing, no token
//! let page = api.vehicles().list(&filters, None).await?;
//!
//! // Authenticated calls pass the session token explicitly
//! let session = api.auth().login(&credentials).await?;
//! let mine = api.reservations().mine(1, &session.token).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod client;
pub mod endpoints;
pub mod error;
pub mod pagination;
pub mod session;

// =============================================================================
// Re-exports
// =============================================================================

pub use client::{ApiConfig, HttpClient};
pub use error::{RemoteError, RemoteResult, GENERIC_ERROR_MESSAGE};
pub use pagination::Page;
pub use session::Session;

// Endpoint re-exports for convenience
pub use endpoints::agencies::AgencyEndpoint;
pub use endpoints::auth::{AuthEndpoint, LoginRequest};
pub use endpoints::categories::CategoryEndpoint;
pub use endpoints::clients::{ClientEndpoint, UpdateProfileRequest};
pub use endpoints::payments::{CreatePaymentRequest, PaymentEndpoint};
pub use endpoints::reservations::{CreateReservationRequest, ReservationEndpoint};
pub use endpoints::stats::{DashboardStats, StatsEndpoint};
pub use endpoints::vehicles::{VehicleEndpoint, VehicleFilters};

// =============================================================================
// RentalApi
// =============================================================================

/// Main API handle providing endpoint access.
///
/// ## Design: Multiple State Types
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Tauri State Management                                                 │
/// │                                                                         │
/// │  Instead of one big AppState, separate state types:                     │
/// │                                                                         │
/// │  State<'_, ApiState>      ← RentalApi + current Session                │
/// │  State<'_, WizardState>   ← Reservation wizard                         │
/// │  State<'_, ConfigState>   ← App configuration                          │
/// │                                                                         │
/// │  Commands only get what they need, and the wizard lock is never held   │
/// │  across a network call.                                                 │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone)]
pub struct RentalApi {
    client: HttpClient,
}

impl RentalApi {
    /// Creates an API handle from the given configuration.
    pub fn new(config: ApiConfig) -> RemoteResult<Self> {
        let client = HttpClient::new(config)?;
        Ok(RentalApi { client })
    }

    /// Returns the underlying HTTP client, for calls not covered by an
    /// endpoint wrapper. Prefer endpoint methods when available.
    pub fn client(&self) -> &HttpClient {
        &self.client
    }

    /// Returns the auth endpoint.
    ///
    /// ## Example
    /// ```rust,ignore
    /// let session = api.auth().login(&credentials).await?;
    /// ```
    pub fn auth(&self) -> AuthEndpoint {
        AuthEndpoint::new(self.client.clone())
    }

    /// Returns the vehicle endpoint.
    pub fn vehicles(&self) -> VehicleEndpoint {
        VehicleEndpoint::new(self.client.clone())
    }

    /// Returns the agency endpoint.
    pub fn agencies(&self) -> AgencyEndpoint {
        AgencyEndpoint::new(self.client.clone())
    }

    /// Returns the category endpoint.
    pub fn categories(&self) -> CategoryEndpoint {
        CategoryEndpoint::new(self.client.clone())
    }

    /// Returns the reservation endpoint.
    pub fn reservations(&self) -> ReservationEndpoint {
        ReservationEndpoint::new(self.client.clone())
    }

    /// Returns the payment endpoint.
    pub fn payments(&self) -> PaymentEndpoint {
        PaymentEndpoint::new(self.client.clone())
    }

    /// Returns the client profile endpoint.
    pub fn clients(&self) -> ClientEndpoint {
        ClientEndpoint::new(self.client.clone())
    }

    /// Returns the dashboard statistics endpoint.
    pub fn stats(&self) -> StatsEndpoint {
        StatsEndpoint::new(self.client.clone())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_handle_construction() {
        let api = RentalApi::new(ApiConfig::default()).unwrap();
        assert_eq!(api.client().base_url(), "http://localhost:8000/api");
    }
}
