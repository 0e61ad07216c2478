//! # Remote Error Types
//!
//! Error taxonomy for REST API calls.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  HTTP response / reqwest::Error                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  RemoteError (this module) ← Categorized by what the UI must do        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError (in Tauri app) ← Serialized for frontend                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Inline alert banner (validation/business) or login redirect (auth)    │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Taxonomy
//! - `Validation`: HTTP 422 with field-keyed messages; the UI flashes the
//!   first field's first message
//! - `Unauthorized`: 401/403; the caller clears the session and redirects
//! - `Business`: the API's `message` field verbatim ("vehicle not
//!   available", ...), generic fallback when absent
//! - `Network`: transport failure, surfaced as the generic fallback,
//!   no automatic retry beyond the client's bounded transport retries

use std::collections::BTreeMap;

use thiserror::Error;

/// Fallback message when the API gives us nothing usable.
pub const GENERIC_ERROR_MESSAGE: &str = "Une erreur est survenue. Veuillez réessayer.";

/// Remote API call errors.
#[derive(Debug, Error)]
pub enum RemoteError {
    /// HTTP 422: field-keyed validation messages from the API.
    #[error("validation failed: {}", first_validation_message(.errors))]
    Validation {
        /// field name → messages, in stable field order.
        errors: BTreeMap<String, Vec<String>>,
    },

    /// HTTP 401/403: session is no longer valid.
    #[error("authentication required")]
    Unauthorized,

    /// Business rule rejected by the API ("vehicle not available", ...).
    #[error("{0}")]
    Business(String),

    /// Resource does not exist (HTTP 404).
    #[error("{resource} not found")]
    NotFound { resource: String },

    /// Any other non-success HTTP status.
    #[error("API error (HTTP {status}): {message}")]
    Http { status: u16, message: String },

    /// Transport failure (DNS, refused connection, timeout).
    #[error("network error: {0}")]
    Network(String),

    /// Response body did not match the expected shape.
    #[error("response decoding failed: {0}")]
    Decode(String),
}

impl RemoteError {
    /// The message to surface to the user.
    ///
    /// Validation errors yield the first field's first message (flash
    /// notification convention); network/decode failures yield the
    /// generic fallback rather than leaking transport details.
    pub fn user_message(&self) -> String {
        match self {
            RemoteError::Validation { errors } => first_validation_message(errors),
            RemoteError::Business(message) => message.clone(),
            RemoteError::NotFound { resource } => format!("{resource} introuvable"),
            RemoteError::Unauthorized => "Session expirée. Veuillez vous reconnecter.".to_string(),
            RemoteError::Http { message, .. } if !message.is_empty() => message.clone(),
            _ => GENERIC_ERROR_MESSAGE.to_string(),
        }
    }

    /// Whether the caller should clear the session and redirect to login.
    #[inline]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, RemoteError::Unauthorized)
    }
}

/// First field's first message, or the generic fallback for an empty map.
fn first_validation_message(errors: &BTreeMap<String, Vec<String>>) -> String {
    errors
        .values()
        .flat_map(|messages| messages.first())
        .next()
        .cloned()
        .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string())
}

impl From<reqwest::Error> for RemoteError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            RemoteError::Decode(err.to_string())
        } else {
            RemoteError::Network(err.to_string())
        }
    }
}

/// Convenience type alias for Results with RemoteError.
pub type RemoteResult<T> = Result<T, RemoteError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_validation_message() {
        let mut errors = BTreeMap::new();
        errors.insert(
            "date_depart".to_string(),
            vec![
                "La date de départ est obligatoire".to_string(),
                "La date de départ doit être future".to_string(),
            ],
        );
        errors.insert(
            "montant".to_string(),
            vec!["Le montant doit être positif".to_string()],
        );

        let err = RemoteError::Validation { errors };
        // BTreeMap iterates in key order: "date_depart" comes first.
        assert_eq!(err.user_message(), "La date de départ est obligatoire");
    }

    #[test]
    fn test_empty_validation_falls_back_to_generic() {
        let err = RemoteError::Validation {
            errors: BTreeMap::new(),
        };
        assert_eq!(err.user_message(), GENERIC_ERROR_MESSAGE);
    }

    #[test]
    fn test_business_message_is_verbatim() {
        let err = RemoteError::Business("Voiture non disponible".to_string());
        assert_eq!(err.user_message(), "Voiture non disponible");
    }

    #[test]
    fn test_network_error_is_generic_for_users() {
        let err = RemoteError::Network("dns error".to_string());
        assert_eq!(err.user_message(), GENERIC_ERROR_MESSAGE);
    }

    #[test]
    fn test_unauthorized_detection() {
        assert!(RemoteError::Unauthorized.is_unauthorized());
        assert!(!RemoteError::Business("x".to_string()).is_unauthorized());
    }
}
