use std::sync::Arc;

use tracing::{info, warn};

use sr_app::{App, UseCases};
use sr_core::ports::NotificationPermissionPort;
use sr_platform::TokioJobScheduler;

/// Everything the plugin keeps in Tauri state.
///
/// Commands reach use cases through [`AppRuntime::usecases`]; the scheduler
/// is kept separately so shutdown can stop its loops.
#[derive(Clone)]
pub struct AppRuntime {
    app: Arc<App>,
    scheduler: Arc<TokioJobScheduler>,
}

impl AppRuntime {
    pub fn new(app: Arc<App>, scheduler: Arc<TokioJobScheduler>) -> Self {
        Self { app, scheduler }
    }

    /// Get use cases accessor.
    /// 获取用例访问器。
    pub fn usecases(&self) -> UseCases<'_> {
        self.app.usecases()
    }

    pub fn app(&self) -> &Arc<App> {
        &self.app
    }

    pub fn permission(&self) -> &Arc<dyn NotificationPermissionPort> {
        self.app.permission()
    }

    /// Re-register the poll job when a session survived the last run.
    ///
    /// Returns whether polling is active afterwards.
    pub async fn resume_polling(&self) -> bool {
        match self.app.session().get_credentials().await {
            Ok(_) => match self.app.poll().register_default().await {
                Ok(()) => {
                    info!("resumed moment polling for stored session");
                    true
                }
                Err(err) => {
                    warn!(error = %err, "failed to resume moment polling");
                    false
                }
            },
            Err(err) => {
                info!(reason = %err, "no usable session, polling stays off");
                false
            }
        }
    }

    pub async fn shutdown(&self) {
        self.scheduler.cancel_all().await;
    }
}
