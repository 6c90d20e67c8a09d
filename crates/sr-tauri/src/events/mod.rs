//! Event Forwarding - Forward backend events to frontend
//! 事件转发 - 将后端事件转发到前端

use serde::{Deserialize, Serialize};
use tauri::{AppHandle, Emitter};

use sr_core::notification::NotificationRequest;

pub const MOMENT_EVENT: &str = "stayreal://moment";

/// Payload of [`MOMENT_EVENT`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MomentNotificationEvent {
    pub id: String,
    pub region: String,
    pub title: String,
    pub body: String,
}

impl From<&NotificationRequest> for MomentNotificationEvent {
    fn from(request: &NotificationRequest) -> Self {
        Self {
            id: request.moment_id.clone(),
            region: request.region.clone(),
            title: request.title.clone(),
            body: request.body.clone(),
        }
    }
}

/// Forward a dispatched moment notification to the frontend
/// 将时刻通知转发到前端
pub fn forward_moment_notification<R: tauri::Runtime>(
    app: &AppHandle<R>,
    request: &NotificationRequest,
) -> tauri::Result<()> {
    app.emit(MOMENT_EVENT, MomentNotificationEvent::from(request))
}
