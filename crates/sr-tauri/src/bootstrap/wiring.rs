//! # Dependency Wiring / 依赖注入
//!
//! The one place where concrete adapters are chosen for each port.

use std::sync::Arc;

use anyhow::Context;
use tracing::info;

use sr_app::{App, AppDeps};
use sr_core::app_dirs::AppDirs;
use sr_core::config::AppConfig;
use sr_core::ports::NotifierPort;
use sr_infra::{FileCredentialStore, FileEventCache, HttpRemoteApi, SystemClock};
use sr_platform::{StaticNotificationPermission, TcpConnectivityProbe, TokioJobScheduler};

use super::runtime::AppRuntime;

/// Apply `storage.data_dir` on top of the platform directories.
pub fn effective_dirs(config: &AppConfig, platform: AppDirs) -> AppDirs {
    match &config.storage.data_dir {
        Some(data_dir) => AppDirs {
            app_data_root: data_dir.clone(),
            app_log_root: data_dir.join("logs"),
        },
        None => platform,
    }
}

/// Build the runtime from configuration, directories and a notifier.
///
/// The notifier is injected because the real one needs an `AppHandle`,
/// which only exists inside plugin setup.
pub fn wire_runtime(
    config: AppConfig,
    dirs: &AppDirs,
    notifier: Arc<dyn NotifierPort>,
) -> anyhow::Result<AppRuntime> {
    std::fs::create_dir_all(&dirs.app_data_root).with_context(|| {
        format!(
            "Failed to create data directory: {}",
            dirs.app_data_root.display()
        )
    })?;

    let remote_api = HttpRemoteApi::new(&config.api).context("Failed to build remote API client")?;
    let connectivity = Arc::new(TcpConnectivityProbe::new(
        config.poll.probe_addr.clone(),
        config.poll.probe_timeout(),
    ));
    let scheduler = Arc::new(TokioJobScheduler::new(connectivity));

    let deps = AppDeps {
        credential_store: Arc::new(FileCredentialStore::new(dirs.session_file())),
        remote_api: Arc::new(remote_api),
        event_cache: Arc::new(FileEventCache::new(dirs.moment_cache_file())),
        notifier,
        permission: Arc::new(StaticNotificationPermission::new(
            config.notifications.enabled,
        )),
        job_scheduler: scheduler.clone(),
        clock: Arc::new(SystemClock),
        config,
    };

    info!(data_root = %dirs.app_data_root.display(), "runtime wired");
    Ok(AppRuntime::new(Arc::new(App::new(deps)), scheduler))
}
