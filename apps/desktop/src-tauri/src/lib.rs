//! # LocAuto Desktop Library
//!
//! Core library for the LocAuto rental desktop application.
//! This is the main entry point that configures and runs the Tauri app.
//!
//! ## Module Organization
//! ```text
//! locauto_desktop_lib/
//! ├── lib.rs              ◄─── You are here (Tauri setup & run)
//! ├── state/
//! │   ├── mod.rs          ◄─── State type exports
//! │   ├── api.rs          ◄─── RentalApi + session state
//! │   ├── wizard.rs       ◄─── Reservation wizard state machine
//! │   └── config.rs       ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs          ◄─── Command exports
//! │   ├── auth.rs         ◄─── Login/logout/profile commands
//! │   ├── catalog.rs      ◄─── Agency/category/stats commands
//! │   ├── vehicle.rs      ◄─── Vehicle listing/detail commands
//! │   └── reservation.rs  ◄─── Wizard and history commands
//! └── error.rs            ◄─── API error type for commands
//! ```
//!
//! ## State Management (Multiple State Types)
//! Instead of a single `AppState` struct, we use multiple focused state types:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Tauri State Management                               │
//! │                                                                         │
//! │  ┌──────────────────┐ ┌──────────────────┐ ┌──────────────────────┐   │
//! │  │    ApiState      │ │   WizardState    │ │    ConfigState       │   │
//! │  │                  │ │                  │ │                      │   │
//! │  │  • RentalApi     │ │  • Current       │ │  • API base URL      │   │
//! │  │  • Session       │ │    wizard        │ │  • Currency          │   │
//! │  │    (token+user)  │ │  • Epoch counter │ │  • Company name      │   │
//! │  └──────────────────┘ └──────────────────┘ └──────────────────────┘   │
//! │                                                                         │
//! │  WHY: Each command only requests the state it needs.                   │
//! │       Better separation of concerns and testability.                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod error;
pub mod state;

use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

use locauto_api::{ApiConfig, RentalApi};
use state::{ApiState, ConfigState, WizardState};

/// Runs the Tauri application.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter                                │
/// │     • Default: INFO, can be overridden with RUST_LOG                    │
/// │                                                                         │
/// │  2. Read Configuration ───────────────────────────────────────────────► │
/// │     • LOCAUTO_API_URL, LOCAUTO_API_TIMEOUT, LOCAUTO_COMPANY_NAME        │
/// │     • Defaults target a local development API                           │
/// │                                                                         │
/// │  3. Build the HTTP Client ────────────────────────────────────────────► │
/// │     • reqwest with timeout and bounded transport retries                │
/// │     • No session yet: the catalog is browsable signed out               │
/// │                                                                         │
/// │  4. Initialize State Objects ─────────────────────────────────────────► │
/// │     • ApiState: RentalApi + empty session slot                          │
/// │     • WizardState: no wizard, epoch 0                                   │
/// │     • ConfigState: from environment                                     │
/// │                                                                         │
/// │  5. Build & Run Tauri App ────────────────────────────────────────────► │
/// │     • Register all commands                                             │
/// │     • Manage state                                                      │
/// │     • Launch window                                                     │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() {
    // Initialize tracing (logging)
    init_tracing();

    info!("Starting LocAuto Desktop Application");

    // Build and run the Tauri app
    tauri::Builder::default()
        // Setup hook runs before the app starts
        .setup(|app| {
            use tauri::Manager;

            let config_state = ConfigState::from_env();
            info!(api = %config_state.api_base_url, "Configuration loaded");

            let api = RentalApi::new(ApiConfig::from_env())?;
            info!("HTTP client ready");

            // Initialize state objects
            let api_state = ApiState::new(api);
            let wizard_state = WizardState::new();

            // Register state with Tauri
            app.manage(api_state);
            app.manage(wizard_state);
            app.manage(config_state);

            info!("State initialized");
            Ok(())
        })
        // Register all commands
        .invoke_handler(tauri::generate_handler![
            // Auth commands
            commands::auth::login,
            commands::auth::logout,
            commands::auth::current_user,
            commands::auth::update_profile,
            // Catalog commands
            commands::catalog::list_agencies,
            commands::catalog::list_categories,
            commands::catalog::load_catalog_filters,
            commands::catalog::dashboard_stats,
            // Vehicle commands
            commands::vehicle::list_vehicles,
            commands::vehicle::get_vehicle,
            // Reservation wizard commands
            commands::reservation::open_reservation_wizard,
            commands::reservation::set_wizard_dates,
            commands::reservation::set_wizard_agencies,
            commands::reservation::get_wizard,
            commands::reservation::submit_reservation,
            commands::reservation::submit_payment,
            commands::reservation::close_reservation_wizard,
            // Reservation history commands
            commands::reservation::my_reservations,
            commands::reservation::reservation_balance,
            commands::reservation::cancel_reservation,
            // Config commands
            commands::config::get_config,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=locauto=trace` - Show trace for locauto crates only
/// - Default: INFO level
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,locauto=debug,reqwest=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_max_level(Level::TRACE)
        .init();
}
