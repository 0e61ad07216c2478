//! # API State
//!
//! Holds the shared [`RentalApi`] handle and the current session.
//!
//! ## Session Swap Semantics
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  login  ──► set_session(Session)   ← one write, token + user together  │
//! │  logout ──► clear_session()        ← one write, both gone together     │
//! │                                                                         │
//! │  Requests read the token through token(); there is no global default   │
//! │  header, so an in-flight request keeps the token it started with and   │
//! │  a concurrent login/logout cannot produce a half-updated session.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A 401/403 from any endpoint clears the session (see
//! [`ApiState::handle_remote`]), which the frontend observes as an
//! `UNAUTHORIZED` error code and turns into a login redirect.

use std::sync::RwLock;

use tracing::{info, warn};

use crate::error::ApiError;
use locauto_api::{RemoteError, RentalApi, Session};
use locauto_core::types::User;

/// Tauri-managed API state.
pub struct ApiState {
    api: RentalApi,
    session: RwLock<Option<Session>>,
}

impl ApiState {
    /// Creates a new API state with no active session.
    pub fn new(api: RentalApi) -> Self {
        ApiState {
            api,
            session: RwLock::new(None),
        }
    }

    /// The shared API handle.
    pub fn api(&self) -> &RentalApi {
        &self.api
    }

    /// Installs a session atomically (login).
    pub fn set_session(&self, session: Session) {
        let mut guard = self.session.write().expect("session lock poisoned");
        info!(user_id = session.user.id, "session installed");
        *guard = Some(session);
    }

    /// Clears the session atomically (logout or 401).
    pub fn clear_session(&self) {
        let mut guard = self.session.write().expect("session lock poisoned");
        if guard.take().is_some() {
            info!("session cleared");
        }
    }

    /// Refreshes the user attached to the current session (after a `/me`
    /// read or a profile update). No-op when signed out.
    pub fn update_user(&self, user: User) {
        let mut guard = self.session.write().expect("session lock poisoned");
        if let Some(session) = guard.as_mut() {
            session.user = user;
        }
    }

    /// The current bearer token, if signed in.
    pub fn token(&self) -> Option<String> {
        let guard = self.session.read().expect("session lock poisoned");
        guard.as_ref().map(|s| s.token.clone())
    }

    /// The current bearer token, or an `UNAUTHORIZED` error.
    pub fn require_token(&self) -> Result<String, ApiError> {
        self.token().ok_or_else(ApiError::unauthorized)
    }

    /// A clone of the current session, if signed in.
    pub fn session(&self) -> Option<Session> {
        let guard = self.session.read().expect("session lock poisoned");
        guard.clone()
    }

    /// Maps a remote error to an API error, clearing the session first
    /// when the server rejected the token.
    pub fn handle_remote(&self, err: RemoteError) -> ApiError {
        if err.is_unauthorized() {
            warn!("token rejected by the API, clearing session");
            self.clear_session();
        }
        ApiError::from(err)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use locauto_api::ApiConfig;

    fn state() -> ApiState {
        ApiState::new(RentalApi::new(ApiConfig::default()).unwrap())
    }

    fn session() -> Session {
        Session::new(
            "1|token".to_string(),
            User {
                id: 4,
                name: "Awa Diop".to_string(),
                email: "awa@example.test".to_string(),
                role: Some("client".to_string()),
                client: None,
            },
        )
    }

    #[test]
    fn test_session_lifecycle() {
        let state = state();
        assert!(state.token().is_none());
        assert!(state.require_token().is_err());

        state.set_session(session());
        assert_eq!(state.token().as_deref(), Some("1|token"));

        state.clear_session();
        assert!(state.token().is_none());
    }

    #[test]
    fn test_unauthorized_remote_error_clears_session() {
        let state = state();
        state.set_session(session());

        let err = state.handle_remote(RemoteError::Unauthorized);
        assert!(state.token().is_none());
        assert!(matches!(err.code, crate::error::ErrorCode::Unauthorized));
    }

    #[test]
    fn test_other_remote_errors_keep_session() {
        let state = state();
        state.set_session(session());

        let _ = state.handle_remote(RemoteError::Business("Voiture non disponible".into()));
        assert!(state.token().is_some());
    }
}
