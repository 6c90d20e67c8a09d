use serde::{Deserialize, Serialize};

use crate::moment::Moment;

/// Platform notification permission, as reported to the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionState {
    Granted,
    Denied,
}

impl PermissionState {
    pub fn is_granted(&self) -> bool {
        matches!(self, PermissionState::Granted)
    }
}

/// One user-visible notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationRequest {
    pub moment_id: String,
    pub region: String,
    pub title: String,
    pub body: String,
}

impl NotificationRequest {
    pub fn for_moment(moment: &Moment, title: &str, body: &str) -> Self {
        Self {
            moment_id: moment.id.clone(),
            region: moment.region.to_string(),
            title: title.to_string(),
            body: body.to_string(),
        }
    }
}
