//! # Auth Endpoint
//!
//! Login, logout and current-user lookup.
//!
//! ## Token Lifecycle
//! ```text
//! POST /login {email, password}
//!      │
//!      ▼
//! {token, user} ──► Session held by the app
//!      │
//!      │  every request: Authorization: Bearer <token>
//!      ▼
//! POST /logout ──► token revoked server-side, session cleared locally
//! ```
//!
//! A 401/403 on any endpoint means the token is no longer valid; the app
//! clears its session and the frontend redirects to the login view.

use locauto_core::types::User;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::client::HttpClient;
use crate::error::RemoteResult;
use crate::session::Session;

// =============================================================================
// Payloads
// =============================================================================

/// Credentials for `POST /login`.
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful login response.
#[derive(Debug, Deserialize)]
struct LoginResponse {
    token: String,
    user: User,
}

// =============================================================================
// Endpoint
// =============================================================================

/// Authentication operations.
#[derive(Debug, Clone)]
pub struct AuthEndpoint {
    client: HttpClient,
}

impl AuthEndpoint {
    pub fn new(client: HttpClient) -> Self {
        AuthEndpoint { client }
    }

    /// Authenticates with email and password.
    ///
    /// Returns a fresh [`Session`]; the caller stores it and passes its
    /// token to every subsequent request.
    pub async fn login(&self, credentials: &LoginRequest) -> RemoteResult<Session> {
        let response: LoginResponse = self.client.post("/login", credentials, None).await?;
        info!(user_id = response.user.id, "login succeeded");
        Ok(Session::new(response.token, response.user))
    }

    /// Revokes the token server-side.
    ///
    /// The caller clears its local session regardless of the outcome: a
    /// failed logout call must never leave the user stuck signed in.
    pub async fn logout(&self, token: &str) -> RemoteResult<()> {
        let _: serde_json::Value = self.client.post("/logout", &(), Some(token)).await?;
        info!("logout succeeded");
        Ok(())
    }

    /// Fetches the authenticated user, including the embedded client
    /// profile when one exists. Used to refresh profile completeness
    /// before opening the reservation wizard.
    pub async fn me(&self, token: &str) -> RemoteResult<User> {
        self.client.get("/me", Some(token)).await
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_request_wire_shape() {
        let request = LoginRequest {
            email: "awa@example.test".to_string(),
            password: "secret".to_string(),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["email"], "awa@example.test");
        assert_eq!(value["password"], "secret");
    }

    #[test]
    fn test_login_response_decoding() {
        let json = r#"{
            "token": "1|abcdef",
            "user": {"id": 4, "nom": "Awa Diop", "email": "awa@example.test", "role": "client"}
        }"#;
        let response: LoginResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.token, "1|abcdef");
        assert_eq!(response.user.id, 4);
    }
}
