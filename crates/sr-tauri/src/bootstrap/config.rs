//! # Configuration Loader / 配置加载器
//!
//! Reads `config.toml` into [`AppConfig`]. Missing keys fall back to the
//! serde defaults on the DTO; nothing here validates values.

use std::path::{Path, PathBuf};

use anyhow::Context;
use sr_core::app_dirs::AppDirs;
use sr_core::config::AppConfig;

/// Environment variable pointing at an explicit config file.
pub const CONFIG_ENV: &str = "SR_CONFIG";
const CONFIG_FILE: &str = "config.toml";

/// Load configuration from a TOML file
/// 从 TOML 文件加载配置
pub fn load_config(config_path: PathBuf) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
}

/// Find and load the active configuration.
///
/// `SR_CONFIG` wins when set and must point at a readable file. Otherwise
/// `config.toml` in the data root is used if present, and defaults if not.
pub fn resolve_config(dirs: &AppDirs) -> anyhow::Result<AppConfig> {
    if let Ok(path) = std::env::var(CONFIG_ENV) {
        if !path.is_empty() {
            return load_config(PathBuf::from(path));
        }
    }
    load_optional(&dirs.app_data_root.join(CONFIG_FILE))
}

fn load_optional(path: &Path) -> anyhow::Result<AppConfig> {
    if path.exists() {
        load_config(path.to_path_buf())
    } else {
        Ok(AppConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_load_config_reads_valid_toml() {
        let toml_content = r#"
            [api]
            api_base_url = "http://localhost:9000/api"
            timeout_secs = 10

            [poll]
            interval_minutes = 30

            [notifications]
            enabled = false
        "#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = load_config(temp_file.path().to_path_buf()).unwrap();

        assert_eq!(config.api.api_base_url, "http://localhost:9000/api");
        assert_eq!(config.api.timeout_secs, 10);
        assert_eq!(config.poll.interval_minutes, 30);
        assert!(!config.notifications.enabled);
        // untouched sections keep their defaults
        assert_eq!(config.api.client_id, "ios");
    }

    #[test]
    fn test_load_config_rejects_invalid_toml() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"[api\nbroken").unwrap();

        assert!(load_config(temp_file.path().to_path_buf()).is_err());
    }

    #[test]
    fn test_load_config_reports_missing_file() {
        let err = load_config(PathBuf::from("/nonexistent/stayreal/config.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn missing_data_root_config_means_defaults() {
        let dir = TempDir::new().unwrap();
        let config = load_optional(&dir.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(config, AppConfig::default());
    }
}
