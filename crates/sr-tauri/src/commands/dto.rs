//! Data shapes crossing the IPC boundary (camelCase on the wire).

use serde::{Deserialize, Serialize};

use sr_core::moment::Moment;
use sr_core::notification::PermissionState;
use sr_core::session::Credentials;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthDetailsDto {
    pub device_id: String,
    pub access_token: String,
    pub refresh_token: String,
}

impl From<Credentials> for AuthDetailsDto {
    fn from(credentials: Credentials) -> Self {
        Self {
            device_id: credentials.device_id,
            access_token: credentials.access_token,
            refresh_token: credentials.refresh_token,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MomentDto {
    pub id: String,
    pub region: String,
    /// RFC 3339
    pub start_date: String,
    pub end_date: String,
}

impl From<Moment> for MomentDto {
    fn from(moment: Moment) -> Self {
        Self {
            id: moment.id,
            region: moment.region.to_string(),
            start_date: moment.start_date.to_rfc3339(),
            end_date: moment.end_date.to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionStatusDto {
    pub permission_state: PermissionState,
}

#[cfg(test)]
mod tests {
    use super::*;
    use sr_core::session::Region;

    #[test]
    fn auth_details_use_camel_case_keys() {
        let dto = AuthDetailsDto::from(Credentials::new("d1", "a1", "r1").unwrap());
        assert_eq!(
            serde_json::to_value(dto).unwrap(),
            serde_json::json!({ "deviceId": "d1", "accessToken": "a1", "refreshToken": "r1" })
        );
    }

    #[test]
    fn moment_dates_are_rfc3339() {
        let start: chrono::DateTime<chrono::Utc> = "2026-10-18T12:00:00Z".parse().unwrap();
        let dto = MomentDto::from(Moment {
            id: "evt-1".into(),
            region: Region::new("us-central"),
            start_date: start,
            end_date: start + chrono::Duration::minutes(2),
        });

        assert_eq!(dto.start_date, "2026-10-18T12:00:00+00:00");
        assert_eq!(dto.end_date, "2026-10-18T12:02:00+00:00");
    }

    #[test]
    fn permission_status_shape() {
        let dto = PermissionStatusDto {
            permission_state: PermissionState::Denied,
        };
        assert_eq!(
            serde_json::to_value(dto).unwrap(),
            serde_json::json!({ "permissionState": "denied" })
        );
    }
}
