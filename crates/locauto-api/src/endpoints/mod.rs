//! # Endpoint Module
//!
//! Typed wrappers over the rental REST API endpoints.
//!
//! ## Endpoint Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                   Endpoint Wrapper Pattern                              │
//! │                                                                         │
//! │  Each remote resource gets one thin wrapper over the shared            │
//! │  HttpClient, keeping paths and payload shapes in a single place.       │
//! │                                                                         │
//! │  Tauri Command                                                          │
//! │       │                                                                 │
//! │       │  api.vehicles().list(&filters, token)                          │
//! │       │  ↓                                                              │
//! │       ▼                                                                 │
//! │  VehicleEndpoint                                                       │
//! │  ├── list(&self, filters, token)                                       │
//! │  └── get(&self, id, token)                                             │
//! │       │                                                                 │
//! │       │  GET /voitures?statut=disponible&page=1                        │
//! │       ▼                                                                 │
//! │  Remote REST API                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Endpoints
//!
//! - [`auth::AuthEndpoint`] - login, logout, current user
//! - [`vehicles::VehicleEndpoint`] - vehicle listing and detail
//! - [`agencies::AgencyEndpoint`] - agency reference data
//! - [`categories::CategoryEndpoint`] - category reference data
//! - [`reservations::ReservationEndpoint`] - reservation creation and history
//! - [`payments::PaymentEndpoint`] - payment capture and listing
//! - [`clients::ClientEndpoint`] - client profile read/update
//! - [`stats::StatsEndpoint`] - back-office dashboard counters

pub mod agencies;
pub mod auth;
pub mod categories;
pub mod clients;
pub mod payments;
pub mod reservations;
pub mod stats;
pub mod vehicles;
