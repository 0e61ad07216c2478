//! # Tauri Commands Module
//!
//! All commands exposed to the frontend.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs          ◄─── You are here (exports)
//! ├── auth.rs         ◄─── Login, logout, current user
//! ├── catalog.rs      ◄─── Agencies, categories, dashboard stats
//! ├── vehicle.rs      ◄─── Vehicle listing/detail with availability
//! ├── reservation.rs  ◄─── Wizard flow, reservation history, balances
//! └── config.rs       ◄─── Configuration retrieval
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Tauri Command Flow                                   │
//! │                                                                         │
//! │  Frontend                                                               │
//! │  ─────────                                                              │
//! │  import { invoke } from '@tauri-apps/api/core';                         │
//! │                                                                         │
//! │  const page = await invoke('list_vehicles', {                           │
//! │    status: 'disponible',                                                │
//! │    page: 1                                                              │
//! │  });                                                                    │
//! │         │                                                               │
//! │         │ (IPC via WebView)                                             │
//! │         ▼                                                               │
//! │  Rust Backend                                                           │
//! │  ────────────                                                           │
//! │  #[tauri::command]                                                      │
//! │  async fn list_vehicles(                                                │
//! │      api: State<'_, ApiState>,   ◄── Injected by Tauri                 │
//! │      status: Option<String>,     ◄── From invoke params                │
//! │      page: Option<u32>,          ◄── Optional param                    │
//! │  ) -> Result<VehicleListResponse, ApiError>                             │
//! │         │                                                               │
//! │         │ (JSON serialization)                                          │
//! │         ▼                                                               │
//! │  Frontend receives: VehicleListResponse                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## State Injection
//! Each command declares only the state it needs:
//! ```rust,ignore
//! // Only needs the API
//! async fn list_agencies(api: State<'_, ApiState>)
//!
//! // Only needs the wizard
//! fn set_wizard_dates(wizard: State<'_, WizardState>, ...)
//!
//! // Needs both
//! async fn submit_reservation(api: State<'_, ApiState>, wizard: State<'_, WizardState>)
//! ```

pub mod auth;
pub mod catalog;
pub mod config;
pub mod reservation;
pub mod vehicle;
