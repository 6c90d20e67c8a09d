use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;

use sr_core::notification::PermissionState;
use sr_core::ports::NotificationPermissionPort;

/// Permission for hosts without a runtime prompt.
///
/// Desktop notifications need no grant, so the state comes from the
/// `notifications.enabled` setting and `request` simply reports it.
pub struct StaticNotificationPermission {
    granted: AtomicBool,
}

impl StaticNotificationPermission {
    pub fn new(granted: bool) -> Self {
        Self {
            granted: AtomicBool::new(granted),
        }
    }

    pub fn set(&self, state: PermissionState) {
        self.granted.store(state.is_granted(), Ordering::SeqCst);
    }
}

#[async_trait]
impl NotificationPermissionPort for StaticNotificationPermission {
    async fn state(&self) -> PermissionState {
        if self.granted.load(Ordering::SeqCst) {
            PermissionState::Granted
        } else {
            PermissionState::Denied
        }
    }

    async fn request(&self) -> PermissionState {
        self.state().await
    }
}
