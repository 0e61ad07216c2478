//! # Stats Endpoint
//!
//! Back-office dashboard counters. Admin-only server-side.

use locauto_core::Money;
use serde::{Deserialize, Serialize};

use crate::client::HttpClient;
use crate::error::RemoteResult;

/// Dashboard counters as returned by `GET /admin/stats`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardStats {
    #[serde(rename = "total_voitures")]
    pub total_vehicles: u64,

    #[serde(rename = "voitures_disponibles")]
    pub available_vehicles: u64,

    #[serde(rename = "total_reservations")]
    pub total_reservations: u64,

    #[serde(rename = "reservations_en_attente")]
    pub pending_reservations: u64,

    #[serde(rename = "total_clients")]
    pub total_clients: u64,

    /// Sum of completed payments, minor units.
    #[serde(rename = "revenu_total")]
    pub total_revenue: Money,
}

/// Dashboard statistics operations.
#[derive(Debug, Clone)]
pub struct StatsEndpoint {
    client: HttpClient,
}

impl StatsEndpoint {
    pub fn new(client: HttpClient) -> Self {
        StatsEndpoint { client }
    }

    /// Fetches the back-office dashboard counters.
    pub async fn dashboard(&self, token: &str) -> RemoteResult<DashboardStats> {
        self.client.get("/admin/stats", Some(token)).await
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
