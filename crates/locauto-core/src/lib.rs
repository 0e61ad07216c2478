//! # locauto-core: Pure Business Logic for LocAuto
//!
//! This crate is the **heart** of the LocAuto rental client. It contains
//! all client-side business logic as pure functions with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        LocAuto Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                       Frontend (WebView)                        │   │
//! │  │   Catalog UI ──► Vehicle Detail ──► Reservation Wizard          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ Tauri IPC                              │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                       Tauri Commands                            │   │
//! │  │   list_vehicles, open_reservation_wizard, submit_payment, ...   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ locauto-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │  ┌──────────┐ ┌──────────┐ ┌──────────────┐ ┌──────────────┐   │   │
//! │  │  │  types   │ │  money   │ │   pricing    │ │ availability │   │   │
//! │  │  │ Vehicle  │ │  Money   │ │ RentalQuote  │ │ Availability │   │   │
//! │  │  │ Reserv.  │ │  (i64)   │ │ quote_rental │ │ resolver     │   │   │
//! │  │  └──────────┘ └──────────┘ └──────────────┘ └──────────────┘   │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 locauto-api (Remote Data Access)                │   │
//! │  │          reqwest client, session, entity endpoints              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Vehicle, Reservation, Payment, etc.)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`pricing`] - Rental pricing calculator
//! - [`availability`] - Display-only availability projection
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Network, file system and clock access is FORBIDDEN here
//!    (even "today" is a parameter, never `Utc::now()` inside the logic)
//! 3. **Integer Money**: All monetary values are minor units (i64), no floats
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use locauto_core::money::Money;
//! use locauto_core::pricing::quote_rental;
//!
//! let start = NaiveDate::from_ymd_opt(2024, 6, 1);
//! let end = NaiveDate::from_ymd_opt(2024, 6, 4);
//!
//! let quote = quote_rental(start, end, Money::from_minor(25_000));
//! assert_eq!(quote.days, 3);
//! assert_eq!(quote.total.minor(), 75_000);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod availability;
pub mod error;
pub mod money;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use locauto_core::Money` instead of
// `use locauto_core::money::Money`

pub use availability::{resolve_availability, Availability};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use pricing::{quote_rental, RentalQuote};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum rental length accepted by the wizard, in days.
///
/// ## Business Reason
/// Prevents accidental year-long reservations from date-picker slips.
/// Longer rentals go through the back-office, not the public wizard.
pub const MAX_RENTAL_DAYS: i64 = 90;

/// Minimum billed rental length, in days (24-hour minimum rental).
pub const MIN_RENTAL_DAYS: i64 = 1;
