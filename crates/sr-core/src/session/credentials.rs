use serde::{Deserialize, Serialize};

use super::SessionError;

/// The current session triple.
///
/// All three values are opaque to the client. The only structural rule is
/// that none of them may be empty.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    pub device_id: String,
    pub access_token: String,
    pub refresh_token: String,
}

impl Credentials {
    /// Build a credential triple, rejecting empty fields.
    pub fn new(
        device_id: impl Into<String>,
        access_token: impl Into<String>,
        refresh_token: impl Into<String>,
    ) -> Result<Self, SessionError> {
        let credentials = Self {
            device_id: device_id.into(),
            access_token: access_token.into(),
            refresh_token: refresh_token.into(),
        };
        credentials.validate()?;
        Ok(credentials)
    }

    pub fn validate(&self) -> Result<(), SessionError> {
        let missing = [
            ("deviceId", &self.device_id),
            ("accessToken", &self.access_token),
            ("refreshToken", &self.refresh_token),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty());

        match missing {
            Some((field, _)) => Err(SessionError::InvalidCredentials(format!(
                "{field} must not be empty"
            ))),
            None => Ok(()),
        }
    }

    /// Same device, rotated token pair.
    pub fn rotated(&self, access_token: String, refresh_token: String) -> Self {
        Self {
            device_id: self.device_id.clone(),
            access_token,
            refresh_token,
        }
    }
}

// Tokens never end up in logs.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("device_id", &self.device_id)
            .field("access_token", &"<redacted>")
            .field("refresh_token", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_empty_fields() {
        let err = Credentials::new("d1", "", "r1").unwrap_err();
        assert!(matches!(err, SessionError::InvalidCredentials(msg) if msg.contains("accessToken")));

        assert!(Credentials::new("  ", "a1", "r1").is_err());
        assert!(Credentials::new("d1", "a1", "r1").is_ok());
    }

    #[test]
    fn rotated_keeps_device_id() {
        let creds = Credentials::new("d1", "a1", "r1").unwrap();
        let next = creds.rotated("a2".into(), "r2".into());

        assert_eq!(next.device_id, "d1");
        assert_eq!(next.access_token, "a2");
        assert_eq!(next.refresh_token, "r2");
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let creds = Credentials::new("d1", "a1", "r1").unwrap();
        let value = serde_json::to_value(&creds).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "deviceId": "d1", "accessToken": "a1", "refreshToken": "r1" })
        );
    }

    #[test]
    fn debug_output_redacts_tokens() {
        let creds = Credentials::new("d1", "secret-access", "secret-refresh").unwrap();
        let debug = format!("{creds:?}");
        assert!(debug.contains("d1"));
        assert!(!debug.contains("secret"));
    }
}
