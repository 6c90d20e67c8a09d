//! Session commands
//! 会话相关命令

use tauri::State;
use tracing::{info_span, Instrument};

use super::dto::AuthDetailsDto;
use super::map_err;
use crate::bootstrap::AppRuntime;

/// Store the session after login and start polling.
#[tauri::command]
pub async fn set_auth_details(
    runtime: State<'_, AppRuntime>,
    device_id: String,
    access_token: String,
    refresh_token: String,
) -> Result<(), String> {
    let span = info_span!("command.set_auth_details");
    runtime
        .usecases()
        .set_auth_details()
        .execute(device_id, access_token, refresh_token)
        .instrument(span)
        .await
        .map_err(map_err)
}

#[tauri::command]
pub async fn get_auth_details(runtime: State<'_, AppRuntime>) -> Result<AuthDetailsDto, String> {
    let credentials = runtime
        .usecases()
        .get_auth_details()
        .execute()
        .await
        .map_err(map_err)?;
    Ok(credentials.into())
}

/// Log out. Also stops background polling.
#[tauri::command]
pub async fn clear_auth_details(runtime: State<'_, AppRuntime>) -> Result<(), String> {
    let span = info_span!("command.clear_auth_details");
    runtime
        .usecases()
        .clear_auth_details()
        .execute()
        .instrument(span)
        .await
        .map_err(map_err)
}

/// Force a token refresh, sharing any exchange already in flight.
#[tauri::command]
pub async fn refresh_token(runtime: State<'_, AppRuntime>) -> Result<(), String> {
    let span = info_span!("command.refresh_token");
    runtime
        .app()
        .session()
        .refresh()
        .instrument(span)
        .await
        .map(|_| ())
        .map_err(map_err)
}
