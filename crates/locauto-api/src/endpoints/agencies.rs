//! # Agency Endpoint
//!
//! Agency reference data for pickup/return selection lists.

use locauto_core::types::Agency;

use crate::client::HttpClient;
use crate::error::RemoteResult;

/// Agency read operations.
#[derive(Debug, Clone)]
pub struct AgencyEndpoint {
    client: HttpClient,
}

impl AgencyEndpoint {
    pub fn new(client: HttpClient) -> Self {
        AgencyEndpoint { client }
    }

    /// Lists all agencies. Small reference set, never paginated.
    pub async fn list(&self, token: Option<&str>) -> RemoteResult<Vec<Agency>> {
        self.client.get("/agences", token).await
    }

    /// Fetches a single agency.
    pub async fn get(&self, id: i64, token: Option<&str>) -> RemoteResult<Agency> {
        self.client.get(&format!("/agences/{id}"), token).await
    }
}
