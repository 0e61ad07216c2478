//! # Error Types
//!
//! Domain-specific error types for locauto-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  locauto-core errors (this file)                                       │
//! │  ├── CoreError        - Business rule violations                       │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  locauto-api errors (separate crate)                                   │
//! │  └── RemoteError      - REST API / transport failures                  │
//! │                                                                         │
//! │  Tauri API errors (in app)                                             │
//! │  └── ApiError         - What frontend sees (serialized)                │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → RemoteError → ApiError → Frontend │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (ids, field names)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These represent client-side rule violations; server-side failures arrive
/// through `locauto_api::RemoteError` instead.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The user has no client profile, or an incomplete one.
    ///
    /// ## When This Occurs
    /// Opening the reservation wizard without licence number, address,
    /// phone and birth date on file. The frontend redirects to profile
    /// completion instead of opening the wizard at the Details step.
    #[error("client profile is incomplete")]
    IncompleteProfile,

    /// The selected rental period cannot be priced.
    #[error("invalid rental period: {reason}")]
    InvalidRentalPeriod { reason: String },

    /// The wizard is not in the stage the operation requires.
    ///
    /// ## When This Occurs
    /// - Submitting payment while still at the Details stage
    /// - Submitting reservation details twice
    /// - Any command arriving after the wizard was closed
    #[error("wizard is {current}, cannot perform operation")]
    InvalidWizardStage { current: &'static str },

    /// Payment amount is invalid.
    #[error("invalid payment amount: {reason}")]
    InvalidPaymentAmount { reason: String },

    /// Validation error (wraps ValidationError).
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when user input doesn't meet requirements.
/// Used for early validation before anything is sent to the API.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., invalid date, invalid identifier).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Dates are in the wrong order.
    #[error("return date must not be before departure date")]
    DatesOutOfOrder,
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::InvalidWizardStage { current: "details" };
        assert_eq!(err.to_string(), "wizard is details, cannot perform operation");

        let err = CoreError::IncompleteProfile;
        assert_eq!(err.to_string(), "client profile is incomplete");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "date_depart".to_string(),
        };
        assert_eq!(err.to_string(), "date_depart is required");

        let err = ValidationError::DatesOutOfOrder;
        assert_eq!(
            err.to_string(),
            "return date must not be before departure date"
        );
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "date_retour".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
