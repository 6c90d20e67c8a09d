use std::path::PathBuf;

pub const SESSION_FILE: &str = "session.json";
pub const MOMENT_CACHE_FILE: &str = "moment_cache.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppDirs {
    pub app_data_root: PathBuf,
    pub app_log_root: PathBuf,
}

impl AppDirs {
    pub fn session_file(&self) -> PathBuf {
        self.app_data_root.join(SESSION_FILE)
    }

    pub fn moment_cache_file(&self) -> PathBuf {
        self.app_data_root.join(MOMENT_CACHE_FILE)
    }
}
