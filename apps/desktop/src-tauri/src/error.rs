//! # API Error Type
//!
//! Unified error type for Tauri commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in LocAuto                                │
//! │                                                                         │
//! │  Frontend                    Rust Backend                               │
//! │  ────────                    ────────────                               │
//! │                                                                         │
//! │  invoke('submit_reservation')                                           │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Remote error? ─── RemoteError::Validation {...} ──┐            │  │
//! │  │         │                                          │            │  │
//! │  │         ▼                                          ▼            │  │
//! │  │  Core error? ────── CoreError::IncompleteProfile ── ApiError ──►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  ◄────────────────────────────────────────────────────────────────────  │
//! │                                                                         │
//! │  try {                                                                  │
//! │    await invoke('submit_reservation')                                   │
//! │  } catch (e) {                                                          │
//! │    // e.message = "La date de départ est obligatoire"                   │
//! │    // e.code = "VALIDATION_ERROR"                                       │
//! │  }                                                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Tauri Error Serialization
//! Tauri requires errors to be serializable. We implement `Serialize`
//! and include both a machine-readable `code` and human-readable `message`.

use serde::Serialize;

use locauto_api::RemoteError;
use locauto_core::CoreError;

/// API error returned from Tauri commands.
///
/// ## Serialization
/// This is what the frontend receives when a command fails:
/// ```json
/// {
///   "code": "UNAUTHORIZED",
///   "message": "Session expirée. Veuillez vous reconnecter."
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
///
/// ## Usage in Frontend
/// ```typescript
/// try {
///   await invoke('submit_reservation');
/// } catch (e) {
///   switch (e.code) {
///     case 'UNAUTHORIZED':
///       redirectToLogin();
///       break;
///     case 'VALIDATION_ERROR':
///       showAlert(e.message);
///       break;
///     default:
///       showError('Une erreur est survenue');
///   }
/// }
/// ```
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Resource not found (404)
    NotFound,

    /// Input validation failed, local or remote 422
    ValidationError,

    /// Session missing or rejected (401/403)
    Unauthorized,

    /// Business rule rejected by the API (vehicle not available, ...)
    BusinessLogic,

    /// Transport or decoding failure
    NetworkError,

    /// Wizard is missing, in the wrong stage, or already submitting
    WizardError,

    /// Payment capture failed
    PaymentError,

    /// Client profile incomplete, reservation gated
    IncompleteProfile,

    /// Internal error
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates a wizard error.
    pub fn wizard(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::WizardError, message)
    }

    /// Creates an unauthorized error.
    pub fn unauthorized() -> Self {
        ApiError::new(
            ErrorCode::Unauthorized,
            "Session expirée. Veuillez vous reconnecter.",
        )
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts remote API errors to API errors.
///
/// The user-facing message comes from `RemoteError::user_message`, which
/// already applies the first-field-first-message convention for 422s and
/// the generic French fallback for transport failures.
impl From<RemoteError> for ApiError {
    fn from(err: RemoteError) -> Self {
        let message = err.user_message();
        let code = match &err {
            RemoteError::Validation { .. } => ErrorCode::ValidationError,
            RemoteError::Unauthorized => ErrorCode::Unauthorized,
            RemoteError::Business(_) => ErrorCode::BusinessLogic,
            RemoteError::NotFound { .. } => ErrorCode::NotFound,
            RemoteError::Http { status, .. } => {
                tracing::error!(status, "remote call failed");
                ErrorCode::NetworkError
            }
            RemoteError::Network(detail) => {
                tracing::error!(%detail, "transport failure");
                ErrorCode::NetworkError
            }
            RemoteError::Decode(detail) => {
                tracing::error!(%detail, "response decoding failed");
                ErrorCode::NetworkError
            }
        };
        ApiError::new(code, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::IncompleteProfile => ApiError::new(
                ErrorCode::IncompleteProfile,
                "Veuillez compléter votre profil avant de réserver.",
            ),
            CoreError::InvalidRentalPeriod { reason } => ApiError::validation(reason),
            CoreError::InvalidWizardStage { current } => {
                ApiError::wizard(format!("Opération impossible à l'étape {current}"))
            }
            CoreError::InvalidPaymentAmount { reason } => {
                ApiError::new(ErrorCode::PaymentError, reason)
            }
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_validation_error_mapping() {
        let mut errors = BTreeMap::new();
        errors.insert(
            "date_depart".to_string(),
            vec!["La date de départ est obligatoire".to_string()],
        );
        let err = ApiError::from(RemoteError::Validation { errors });
        assert!(matches!(err.code, ErrorCode::ValidationError));
        assert_eq!(err.message, "La date de départ est obligatoire");
    }

    #[test]
    fn test_error_code_wire_format() {
        let err = ApiError::unauthorized();
        let value = serde_json::to_value(&err).unwrap();
        assert_eq!(value["code"], "UNAUTHORIZED");
    }

    #[test]
    fn test_incomplete_profile_mapping() {
        let err = ApiError::from(CoreError::IncompleteProfile);
        assert!(matches!(err.code, ErrorCode::IncompleteProfile));
    }
}
