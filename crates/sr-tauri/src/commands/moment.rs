use tauri::State;
use tracing::{info_span, Instrument};

use super::dto::MomentDto;
use super::map_err;
use crate::bootstrap::AppRuntime;

/// Current moment for the stored region. Marks it seen, never notifies.
#[tauri::command]
pub async fn fetch_last_moment(runtime: State<'_, AppRuntime>) -> Result<MomentDto, String> {
    let span = info_span!("command.fetch_last_moment");
    let moment = runtime
        .usecases()
        .fetch_last_moment()
        .execute()
        .instrument(span)
        .await
        .map_err(map_err)?;
    Ok(moment.into())
}
