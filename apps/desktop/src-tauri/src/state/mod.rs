//! # State Module
//!
//! Manages application state for the Tauri desktop app.
//!
//! ## Why Multiple State Types?
//! Instead of a single `AppState` struct containing everything,
//! we use separate state types. This approach:
//!
//! 1. **Better Separation of Concerns**: Each state type has a single responsibility
//! 2. **Easier Testing**: Can mock/inject individual states
//! 3. **Clearer Command Signatures**: Commands declare exactly what state they need
//! 4. **Reduced Contention**: Independent states don't block each other
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      Tauri Runtime                              │   │
//! │  │  app.manage(api_state);                                         │   │
//! │  │  app.manage(wizard_state);                                      │   │
//! │  │  app.manage(config_state);                                      │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                              │                                          │
//! │          ┌──────────────────┼──────────────────┐                       │
//! │          ▼                  ▼                  ▼                        │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────────┐              │
//! │  │   ApiState   │  │ WizardState  │  │   ConfigState    │              │
//! │  │              │  │              │  │                  │              │
//! │  │  RentalApi + │  │  Mutex<      │  │  api_base_url    │              │
//! │  │  RwLock<     │  │   Option<    │  │  currency        │              │
//! │  │   Session>   │  │    Wizard>>  │  │                  │              │
//! │  └──────────────┘  └──────────────┘  └──────────────────┘              │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • ApiState: HttpClient is internally Arc'd; session behind RwLock     │
//! │  • WizardState: Mutex, never held across a network call               │
//! │  • ConfigState: Read-only after initialization                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod api;
mod config;
mod wizard;

pub use api::ApiState;
pub use config::ConfigState;
pub use wizard::{
    ReservationWizard, SubmissionDetails, VehicleSnapshot, WizardSnapshot, WizardStage,
    WizardState,
};
