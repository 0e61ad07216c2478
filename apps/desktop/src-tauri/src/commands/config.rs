//! # Config Commands

use tauri::State;
use tracing::debug;

use crate::error::ApiError;
use crate::state::ConfigState;

#[tauri::command]
pub fn get_config(config: State<'_, ConfigState>) -> Result<ConfigState, ApiError> {
    debug!("get_config command");
    Ok(config.inner().clone())
}
