use anyhow::Result;
use tauri::{AppHandle, Runtime};

use sr_core::notification::NotificationRequest;
use sr_core::ports::NotifierPort;

use crate::events::forward_moment_notification;

/// Delivers moment notifications as frontend events.
///
/// The webview owns the actual OS notification; this adapter only has to
/// get the request across the IPC boundary.
pub struct TauriNotifier<R: Runtime> {
    app: AppHandle<R>,
}

impl<R: Runtime> TauriNotifier<R> {
    pub fn new(app: AppHandle<R>) -> Self {
        Self { app }
    }
}

#[async_trait::async_trait]
impl<R: Runtime> NotifierPort for TauriNotifier<R> {
    async fn notify(&self, request: &NotificationRequest) -> Result<()> {
        forward_moment_notification(&self.app, request)?;
        Ok(())
    }
}
