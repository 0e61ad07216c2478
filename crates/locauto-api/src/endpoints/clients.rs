//! # Client Endpoint
//!
//! Client profile read/update. A complete profile (licence number,
//! address, phone, birth date) gates the reservation wizard.

use locauto_core::types::ClientProfile;
use serde::Serialize;
use tracing::info;

use crate::client::HttpClient;
use crate::error::RemoteResult;

// =============================================================================
// Payloads
// =============================================================================

/// Payload for `PUT /client/profil`. All fields optional: only the
/// provided ones change.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateProfileRequest {
    #[serde(rename = "numero_permis", skip_serializing_if = "Option::is_none")]
    pub license_number: Option<String>,

    #[serde(rename = "adresse", skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    #[serde(rename = "telephone", skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// "YYYY-MM-DD".
    #[serde(rename = "date_naissance", skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
}

// =============================================================================
// Endpoint
// =============================================================================

/// Client profile operations.
#[derive(Debug, Clone)]
pub struct ClientEndpoint {
    client: HttpClient,
}

impl ClientEndpoint {
    pub fn new(client: HttpClient) -> Self {
        ClientEndpoint { client }
    }

    /// Fetches the authenticated user's client profile.
    pub async fn profile(&self, token: &str) -> RemoteResult<ClientProfile> {
        self.client.get("/client/profil", Some(token)).await
    }

    /// Updates the client profile, creating it on first write.
    pub async fn update_profile(
        &self,
        request: &UpdateProfileRequest,
        token: &str,
    ) -> RemoteResult<ClientProfile> {
        let profile: ClientProfile = self
            .client
            .put("/client/profil", request, Some(token))
            .await?;
        info!(client_id = profile.id, "client profile updated");
        Ok(profile)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
