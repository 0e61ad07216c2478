//! # Auth Commands

use serde::{Deserialize, Serialize};
use tauri::State;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::ApiState;
use locauto_api::{LoginRequest, UpdateProfileRequest};
use locauto_core::types::User;

/// User data returned to the frontend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: Option<String>,
    /// Whether the client profile carries everything a reservation needs.
    pub profile_complete: bool,
    pub is_admin: bool,
}

impl From<&User> for UserDto {
    fn from(user: &User) -> Self {
        UserDto {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role.clone(),
            profile_complete: user.client.as_ref().map_or(false, |c| c.is_complete()),
            is_admin: user.role.as_deref() == Some("admin"),
        }
    }
}

#[tauri::command]
pub async fn login(
    api: State<'_, ApiState>,
    email: String,
    password: String,
) -> Result<UserDto, ApiError> {
    debug!(%email, "login command");

    let credentials = LoginRequest { email, password };
    let session = api
        .api()
        .auth()
        .login(&credentials)
        .await
        .map_err(|e| api.handle_remote(e))?;

    let dto = UserDto::from(&session.user);
    api.set_session(session);
    Ok(dto)
}

#[tauri::command]
pub async fn logout(api: State<'_, ApiState>) -> Result<(), ApiError> {
    debug!("logout command");

    // Best-effort server-side revocation; the local session is cleared no
    // matter what so the user is never stuck signed in.
    if let Some(token) = api.token() {
        if let Err(e) = api.api().auth().logout(&token).await {
            info!(error = %e, "server-side logout failed, clearing session anyway");
        }
    }
    api.clear_session();
    Ok(())
}

#[tauri::command]
pub async fn current_user(api: State<'_, ApiState>) -> Result<Option<UserDto>, ApiError> {
    debug!("current_user command");

    let Some(token) = api.token() else {
        return Ok(None);
    };

    // Refresh from /me so profile completeness reflects any edits made
    // since login.
    let user = api
        .api()
        .auth()
        .me(&token)
        .await
        .map_err(|e| api.handle_remote(e))?;

    let dto = UserDto::from(&user);
    api.update_user(user);
    Ok(Some(dto))
}

#[tauri::command]
pub async fn update_profile(
    api: State<'_, ApiState>,
    license_number: Option<String>,
    address: Option<String>,
    phone: Option<String>,
    birth_date: Option<String>,
) -> Result<UserDto, ApiError> {
    debug!("update_profile command");

    let token = api.require_token()?;
    let request = UpdateProfileRequest {
        license_number,
        address,
        phone,
        birth_date,
    };

    api.api()
        .clients()
        .update_profile(&request, &token)
        .await
        .map_err(|e| api.handle_remote(e))?;

    // Re-read /me so the session user (and its completeness flag) stays
    // in sync with what the server now holds.
    let user = api
        .api()
        .auth()
        .me(&token)
        .await
        .map_err(|e| api.handle_remote(e))?;

    let dto = UserDto::from(&user);
    api.update_user(user);
    Ok(dto)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use locauto_core::types::ClientProfile;

    #[test]
    fn test_user_dto_profile_flags() {
        let mut user = User {
            id: 4,
            name: "Awa Diop".to_string(),
            email: "awa@example.test".to_string(),
            role: Some("client".to_string()),
            client: None,
        };
        assert!(!UserDto::from(&user).profile_complete);

        user.client = Some(ClientProfile {
            id: 1,
            user_id: 4,
            license_number: Some("SN-2021-443210".to_string()),
            address: Some("Sacré-Cœur 3, Dakar".to_string()),
            phone: Some("+221770000000".to_string()),
            birth_date: NaiveDate::from_ymd_opt(1990, 4, 12),
        });
        let dto = UserDto::from(&user);
        assert!(dto.profile_complete);
        assert!(!dto.is_admin);
    }
}
