use tauri::State;

use sr_core::session::Region;

use super::map_err;
use crate::bootstrap::AppRuntime;

#[tauri::command]
pub async fn set_region(runtime: State<'_, AppRuntime>, region: String) -> Result<(), String> {
    runtime
        .usecases()
        .set_region()
        .execute(Region::new(region))
        .await
        .map_err(map_err)
}

#[tauri::command]
pub async fn get_region(runtime: State<'_, AppRuntime>) -> Result<String, String> {
    let region = runtime
        .usecases()
        .get_region()
        .execute()
        .await
        .map_err(map_err)?;
    Ok(region.to_string())
}
