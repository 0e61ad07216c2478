//! # Session
//!
//! Authenticated session state: the bearer token plus the user it belongs
//! to. The desktop app holds at most one of these behind a lock and swaps
//! it atomically on login/logout, so no request ever sees a token without
//! its user or vice versa.

use locauto_core::types::{ClientProfile, User};
use serde::{Deserialize, Serialize};

/// An authenticated session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Bearer token for the Authorization header.
    pub token: String,

    /// The authenticated user, as returned at login (refreshed via `/me`).
    pub user: User,
}

impl Session {
    pub fn new(token: String, user: User) -> Self {
        Session { token, user }
    }

    /// The client profile attached to the session's user, if any.
    pub fn client_profile(&self) -> Option<&ClientProfile> {
        self.user.client.as_ref()
    }

    /// Whether this session belongs to a back-office administrator.
    pub fn is_admin(&self) -> bool {
        self.user.role.as_deref() == Some("admin")
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: Option<&str>) -> User {
        User {
            id: 1,
            name: "Awa Diop".to_string(),
            email: "awa@example.test".to_string(),
            role: role.map(String::from),
            client: None,
        }
    }

    #[test]
    fn test_admin_detection() {
        assert!(Session::new("t".to_string(), user(Some("admin"))).is_admin());
        assert!(!Session::new("t".to_string(), user(Some("client"))).is_admin());
        assert!(!Session::new("t".to_string(), user(None)).is_admin());
    }
}
