use std::path::PathBuf;

use sr_core::{
    app_dirs::AppDirs,
    ports::{AppDirsError, AppDirsPort},
};

const APP_DIR_NAME: &str = "stayreal";
const PROFILE_ENV: &str = "SR_PROFILE";

/// Resolves the session/cache root under the platform data-local directory.
///
/// A profile gives each build its own root, so a dev build never reads or
/// overwrites the session of an installed one.
#[derive(Debug, Clone, Default)]
pub struct DirsAppDirsAdapter {
    base_override: Option<PathBuf>,
    profile: Option<String>,
}

impl DirsAppDirsAdapter {
    /// System data-local directory, profile taken from `SR_PROFILE`.
    pub fn from_env() -> Self {
        Self::default().with_profile(std::env::var(PROFILE_ENV).ok())
    }

    /// Resolve under `base` instead of the system data-local directory.
    pub fn with_base_data_local_dir(base: PathBuf) -> Self {
        Self {
            base_override: Some(base),
            profile: None,
        }
    }

    /// Empty profiles count as no profile.
    pub fn with_profile(mut self, profile: Option<String>) -> Self {
        self.profile = profile.filter(|p| !p.is_empty());
        self
    }

    fn app_dir_name(&self) -> String {
        match &self.profile {
            Some(profile) => format!("{APP_DIR_NAME}-{profile}"),
            None => APP_DIR_NAME.to_string(),
        }
    }
}

impl AppDirsPort for DirsAppDirsAdapter {
    fn get_app_dirs(&self) -> Result<AppDirs, AppDirsError> {
        let base = match &self.base_override {
            Some(base) => base.clone(),
            None => dirs::data_local_dir().ok_or(AppDirsError::DataLocalDirUnavailable)?,
        };
        let app_data_root = base.join(self.app_dir_name());

        Ok(AppDirs {
            app_log_root: app_data_root.join("logs"),
            app_data_root,
        })
    }
}
