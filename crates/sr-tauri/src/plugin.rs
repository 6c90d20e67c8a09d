//! The `stayreal-api` plugin.

use std::sync::Arc;

use tauri::plugin::{Builder, TauriPlugin};
use tauri::{Manager, RunEvent, Runtime};
use tracing::{error, info};

use sr_core::ports::AppDirsPort;
use sr_platform::DirsAppDirsAdapter;

use crate::adapters::TauriNotifier;
use crate::bootstrap::{self, AppRuntime};
use crate::commands;

pub const PLUGIN_NAME: &str = "stayreal-api";

/// Build the plugin.
///
/// Setup resolves directories and configuration, installs tracing, wires
/// the runtime into Tauri state and resumes polling for a stored session.
pub fn init<R: Runtime>() -> TauriPlugin<R> {
    Builder::new(PLUGIN_NAME)
        .invoke_handler(tauri::generate_handler![
            commands::auth::set_auth_details,
            commands::auth::get_auth_details,
            commands::auth::clear_auth_details,
            commands::auth::refresh_token,
            commands::region::set_region,
            commands::region::get_region,
            commands::moment::fetch_last_moment,
            commands::permissions::check_permissions,
            commands::permissions::request_permissions,
            commands::permissions::permission_state,
        ])
        .setup(|app, _api| {
            let platform_dirs = DirsAppDirsAdapter::from_env().get_app_dirs()?;
            let config = bootstrap::resolve_config(&platform_dirs)?;
            let dirs = bootstrap::wiring::effective_dirs(&config, platform_dirs);

            if let Err(err) = bootstrap::tracing::init_tracing_subscriber(&dirs.app_log_root) {
                eprintln!("Failed to initialize tracing: {err}");
            }

            let notifier = Arc::new(TauriNotifier::new(app.clone()));
            let runtime = bootstrap::wire_runtime(config, &dirs, notifier)?;
            app.manage(runtime.clone());

            tauri::async_runtime::spawn(async move {
                runtime.resume_polling().await;
            });

            info!(plugin = PLUGIN_NAME, "plugin initialized");
            Ok(())
        })
        .on_event(|app, event| {
            if let RunEvent::Exit = event {
                if let Some(runtime) = app.try_state::<AppRuntime>() {
                    let runtime = runtime.inner().clone();
                    tauri::async_runtime::block_on(async move { runtime.shutdown().await });
                } else {
                    error!("runtime missing from state at exit");
                }
            }
        })
        .build()
}
