//! Application configuration domain model

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Application configuration
///
/// Every section is optional in the file; missing keys take the defaults
/// below.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub poll: PollConfig,
    pub notifications: NotificationConfig,
    pub storage: StorageConfig,
}

/// Remote API endpoints and client identity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub auth_base_url: String,
    pub api_base_url: String,
    pub client_id: String,
    pub client_secret: String,
    /// Upper bound for any single HTTP call.
    pub timeout_secs: u64,
}

/// Background poll settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PollConfig {
    pub interval_minutes: u64,
    /// Address dialed to decide whether the network is reachable.
    pub probe_addr: String,
    pub probe_timeout_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    /// Desktop hosts have no permission prompt; this flag stands in for it.
    pub enabled: bool,
    pub title: String,
    pub body: String,
    /// How long after a moment's window ends it is still announced.
    pub late_grace_minutes: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Overrides the platform data directory when set.
    pub data_dir: Option<PathBuf>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            auth_base_url: "https://auth.bereal.team".to_string(),
            api_base_url: "https://mobile.bereal.com/api".to_string(),
            client_id: "ios".to_string(),
            client_secret: String::new(),
            timeout_secs: 30,
        }
    }
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval_minutes: 15,
            probe_addr: "1.1.1.1:443".to_string(),
            probe_timeout_secs: 5,
        }
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            title: "⚠️ Time to BeReal. ⚠️".to_string(),
            body: "2 minutes left to capture a BeReal and see what your friends are up to!"
                .to_string(),
            late_grace_minutes: 60,
        }
    }
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl PollConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_minutes * 60)
    }

    pub fn probe_timeout(&self) -> Duration {
        Duration::from_secs(self.probe_timeout_secs)
    }
}

impl NotificationConfig {
    pub fn late_grace(&self) -> chrono::Duration {
        i64::try_from(self.late_grace_minutes)
            .ok()
            .and_then(chrono::Duration::try_minutes)
            .unwrap_or(chrono::Duration::MAX)
    }
}

impl AppConfig {
    /// Map a parsed TOML document onto the config, filling gaps with defaults.
    pub fn from_toml(value: &toml::Value) -> anyhow::Result<Self> {
        value
            .clone()
            .try_into()
            .context("Failed to map TOML onto AppConfig")
    }
}
