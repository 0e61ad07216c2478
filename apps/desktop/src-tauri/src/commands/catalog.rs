//! # Catalog Commands
//!
//! Reference data (agencies, categories) and back-office dashboard
//! counters.

use serde::{Deserialize, Serialize};
use tauri::State;
use tracing::debug;

use crate::error::ApiError;
use crate::state::ApiState;
use locauto_api::DashboardStats;
use locauto_core::types::{Agency, Category};

/// Agencies and categories together, for screens that need both
/// (catalog filters, wizard agency pickers).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogFilters {
    pub agencies: Vec<Agency>,
    pub categories: Vec<Category>,
}

#[tauri::command]
pub async fn list_agencies(api: State<'_, ApiState>) -> Result<Vec<Agency>, ApiError> {
    debug!("list_agencies command");

    let token = api.token();
    api.api()
        .agencies()
        .list(token.as_deref())
        .await
        .map_err(|e| api.handle_remote(e))
}

#[tauri::command]
pub async fn list_categories(api: State<'_, ApiState>) -> Result<Vec<Category>, ApiError> {
    debug!("list_categories command");

    let token = api.token();
    api.api()
        .categories()
        .list(token.as_deref())
        .await
        .map_err(|e| api.handle_remote(e))
}

#[tauri::command]
pub async fn load_catalog_filters(api: State<'_, ApiState>) -> Result<CatalogFilters, ApiError> {
    debug!("load_catalog_filters command");

    let token = api.token();
    // Independent reference reads, fetched concurrently.
    let (agencies, categories) = tokio::try_join!(
        api.api().agencies().list(token.as_deref()),
        api.api().categories().list(token.as_deref()),
    )
    .map_err(|e| api.handle_remote(e))?;

    Ok(CatalogFilters {
        agencies,
        categories,
    })
}

#[tauri::command]
pub async fn dashboard_stats(api: State<'_, ApiState>) -> Result<DashboardStats, ApiError> {
    debug!("dashboard_stats command");

    let token = api.require_token()?;
    api.api()
        .stats()
        .dashboard(&token)
        .await
        .map_err(|e| api.handle_remote(e))
}
