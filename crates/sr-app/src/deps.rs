//! # Application Dependencies / 应用依赖
//!
//! Plain parameter grouping for [`App`](crate::App) construction.
//! No build steps, no defaults, no hidden logic.

use std::sync::Arc;

use sr_core::config::AppConfig;
use sr_core::ports::*;

/// Every port the subsystem needs, wired by the host.
/// 宿主负责注入的全部端口。
pub struct AppDeps {
    // Session / 会话
    pub credential_store: Arc<dyn CredentialStorePort>,
    pub remote_api: Arc<dyn RemoteApiPort>,

    // Notification / 通知
    pub event_cache: Arc<dyn EventCachePort>,
    pub notifier: Arc<dyn NotifierPort>,
    pub permission: Arc<dyn NotificationPermissionPort>,

    // Scheduling / 调度
    pub job_scheduler: Arc<dyn JobSchedulerPort>,

    // System / 系统
    pub clock: Arc<dyn ClockPort>,
    pub config: AppConfig,
}
