use tauri::State;

use super::dto::PermissionStatusDto;
use crate::bootstrap::AppRuntime;

#[tauri::command]
pub async fn check_permissions(
    runtime: State<'_, AppRuntime>,
) -> Result<PermissionStatusDto, String> {
    Ok(PermissionStatusDto {
        permission_state: runtime.permission().state().await,
    })
}

#[tauri::command]
pub async fn request_permissions(
    runtime: State<'_, AppRuntime>,
) -> Result<PermissionStatusDto, String> {
    Ok(PermissionStatusDto {
        permission_state: runtime.permission().request().await,
    })
}

#[tauri::command]
pub async fn permission_state(
    runtime: State<'_, AppRuntime>,
) -> Result<PermissionStatusDto, String> {
    Ok(PermissionStatusDto {
        permission_state: runtime.permission().state().await,
    })
}
