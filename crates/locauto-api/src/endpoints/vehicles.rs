//! # Vehicle Endpoint
//!
//! Vehicle listing with filters and vehicle detail reads.
//!
//! ## Listing Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Catalog view                                                           │
//! │       │                                                                 │
//! │       │  VehicleFilters { status: Some(Available), page: 1, ... }       │
//! │       ▼                                                                 │
//! │  GET /voitures?statut=disponible&page=1                                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Page<Vehicle> ← pagination envelope, embedded reservations optional    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Detail reads (`GET /voitures/{id}`) embed the vehicle's reservation
//! list, which feeds the client-side availability projection.

use locauto_core::types::{Vehicle, VehicleStatus};
use serde::Serialize;

use crate::client::HttpClient;
use crate::error::RemoteResult;
use crate::pagination::Page;

// =============================================================================
// Filters
// =============================================================================

/// Query filters for the vehicle listing.
///
/// `None` fields are omitted from the query string entirely, so the server
/// applies no filter for them.
#[derive(Debug, Clone, Default, Serialize)]
pub struct VehicleFilters {
    #[serde(rename = "agence_id", skip_serializing_if = "Option::is_none")]
    pub agency_id: Option<i64>,

    #[serde(rename = "categorie_id", skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,

    #[serde(rename = "statut", skip_serializing_if = "Option::is_none")]
    pub status: Option<VehicleStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
}

// =============================================================================
// Endpoint
// =============================================================================

/// Vehicle read operations.
#[derive(Debug, Clone)]
pub struct VehicleEndpoint {
    client: HttpClient,
}

impl VehicleEndpoint {
    pub fn new(client: HttpClient) -> Self {
        VehicleEndpoint { client }
    }

    /// Lists vehicles matching the given filters, one page at a time.
    ///
    /// Public endpoint: works without a token so the catalog is browsable
    /// before login.
    pub async fn list(
        &self,
        filters: &VehicleFilters,
        token: Option<&str>,
    ) -> RemoteResult<Page<Vehicle>> {
        self.client.get_with_query("/voitures", filters, token).await
    }

    /// Fetches a single vehicle with its embedded reservations.
    pub async fn get(&self, id: i64, token: Option<&str>) -> RemoteResult<Vehicle> {
        self.client.get(&format!("/voitures/{id}"), token).await
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filters_omit_unset_fields() {
        let filters = VehicleFilters {
            status: Some(VehicleStatus::Available),
            page: Some(2),
            ..VehicleFilters::default()
        };
        let value = serde_json::to_value(&filters).unwrap();
        assert_eq!(value["statut"], "disponible");
        assert_eq!(value["page"], 2);
        assert!(value.get("agence_id").is_none());
        assert!(value.get("categorie_id").is_none());
    }

    #[test]
    fn test_default_filters_are_empty() {
        let value = serde_json::to_value(&VehicleFilters::default()).unwrap();
        assert_eq!(value, serde_json::json!({}));
    }
}
