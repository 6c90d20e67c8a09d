use anyhow::Result;
use async_trait::async_trait;

use crate::notification::{NotificationRequest, PermissionState};

/// Delivers a user-visible notification.
#[async_trait]
pub trait NotifierPort: Send + Sync {
    async fn notify(&self, request: &NotificationRequest) -> Result<()>;
}

/// Platform notification permission.
#[async_trait]
pub trait NotificationPermissionPort: Send + Sync {
    async fn state(&self) -> PermissionState;
    async fn request(&self) -> PermissionState;
}
