//! # Validation Module
//!
//! Input validation utilities for LocAuto.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Frontend (TypeScript)                                        │
//! │  ├── Basic format checks (empty, date pickers)                         │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Tauri Command (Rust)                                         │
//! │  ├── Type validation (deserialization)                                 │
//! │  └── THIS MODULE: business rule validation                             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Remote API (authoritative)                                   │
//! │  ├── 422 field-keyed validation errors                                 │
//! │  └── Business rules (availability, ownership)                          │
//! │                                                                         │
//! │  Defense in depth: the server always has the last word                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::NaiveDate;

use crate::error::ValidationError;
use crate::types::ClientProfile;
use crate::MAX_RENTAL_DAYS;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Rental Period
// =============================================================================

/// Validates a rental period before reservation creation.
///
/// ## Rules
/// - Both dates must be present
/// - Return date must not be before departure date (same day is fine,
///   it bills the 1-day minimum)
/// - Period must not exceed `MAX_RENTAL_DAYS`
///
/// Note this is stricter than the pricing calculator, which silently
/// returns a zero quote; by the time we submit we want a real error.
pub fn validate_rental_period(
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> ValidationResult<()> {
    let start = start.ok_or_else(|| ValidationError::Required {
        field: "date_depart".to_string(),
    })?;
    let end = end.ok_or_else(|| ValidationError::Required {
        field: "date_retour".to_string(),
    })?;

    if end < start {
        return Err(ValidationError::DatesOutOfOrder);
    }

    let days = (end - start).num_days().max(1);
    if days > MAX_RENTAL_DAYS {
        return Err(ValidationError::OutOfRange {
            field: "rental days".to_string(),
            min: 1,
            max: MAX_RENTAL_DAYS,
        });
    }

    Ok(())
}

// =============================================================================
// Payment
// =============================================================================

/// Validates a payment amount in minor units.
///
/// ## Rules
/// - Must be positive (> 0); zero or negative payments are never sent
pub fn validate_payment_amount(minor: i64) -> ValidationResult<()> {
    if minor <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "montant".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Identifiers
// =============================================================================

/// Validates a server-assigned entity id.
///
/// The API hands out positive integer ids; anything else is a decoding
/// or programming error caught before it reaches the wire.
pub fn validate_entity_id(id: i64, field: &str) -> ValidationResult<()> {
    if id <= 0 {
        return Err(ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: "must be a positive id".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Client Profile
// =============================================================================

/// Validates that a client profile is complete enough to reserve.
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  User clicks "Réserver" on a vehicle                                    │
/// │       │                                                                 │
/// │       ▼                                                                 │
/// │  validate_client_profile(profile) ← THIS FUNCTION                       │
/// │       │                                                                 │
/// │       ├── None / incomplete → redirect to profile completion            │
/// │       │                                                                 │
/// │       └── OK → wizard opens at the Details step                         │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn validate_client_profile(profile: Option<&ClientProfile>) -> ValidationResult<()> {
    match profile {
        Some(p) if p.is_complete() => Ok(()),
        _ => Err(ValidationError::Required {
            field: "client profile".to_string(),
        }),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, day)
    }

    #[test]
    fn test_validate_rental_period() {
        assert!(validate_rental_period(d(2024, 6, 1), d(2024, 6, 4)).is_ok());
        assert!(validate_rental_period(d(2024, 6, 1), d(2024, 6, 1)).is_ok());

        assert!(matches!(
            validate_rental_period(d(2024, 6, 4), d(2024, 6, 1)),
            Err(ValidationError::DatesOutOfOrder)
        ));
        assert!(matches!(
            validate_rental_period(None, d(2024, 6, 4)),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            validate_rental_period(d(2024, 6, 1), None),
            Err(ValidationError::Required { .. })
        ));
    }

    #[test]
    fn test_validate_rental_period_too_long() {
        assert!(matches!(
            validate_rental_period(d(2024, 1, 1), d(2024, 12, 31)),
            Err(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_validate_payment_amount() {
        assert!(validate_payment_amount(75_000).is_ok());
        assert!(validate_payment_amount(0).is_err());
        assert!(validate_payment_amount(-100).is_err());
    }

    #[test]
    fn test_validate_entity_id() {
        assert!(validate_entity_id(42, "voiture_id").is_ok());
        assert!(validate_entity_id(0, "voiture_id").is_err());
        assert!(validate_entity_id(-1, "voiture_id").is_err());
    }

    #[test]
    fn test_validate_client_profile() {
        assert!(validate_client_profile(None).is_err());

        let profile = ClientProfile {
            id: 1,
            user_id: 1,
            license_number: Some("SN-2021-443210".to_string()),
            address: Some("Sacré-Cœur 3, Dakar".to_string()),
            phone: Some("+221770000000".to_string()),
            birth_date: NaiveDate::from_ymd_opt(1990, 4, 12),
        };
        assert!(validate_client_profile(Some(&profile)).is_ok());

        let incomplete = ClientProfile {
            license_number: None,
            ..profile
        };
        assert!(validate_client_profile(Some(&incomplete)).is_err());
    }
}
