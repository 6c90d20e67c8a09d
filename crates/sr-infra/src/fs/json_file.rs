use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::fs;

/// A single JSON document on disk.
///
/// Writes go to a sibling `.json.tmp` file that is then renamed over the
/// target, so a reader sees either the previous document or the new one.
pub struct JsonFile {
    path: PathBuf,
}

impl JsonFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the document, `Ok(None)` when the file does not exist yet.
    ///
    /// Decode failures are returned as errors; callers decide whether a
    /// corrupt document is fatal.
    pub async fn load<T: DeserializeOwned>(&self) -> Result<Option<T>, JsonFileError> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(JsonFileError::Io(
                    anyhow::Error::new(err)
                        .context(format!("read {} failed", self.path.display())),
                ))
            }
        };

        serde_json::from_str(&content)
            .map(Some)
            .map_err(|err| {
                JsonFileError::Corrupt(
                    anyhow::Error::new(err)
                        .context(format!("parse {} failed", self.path.display())),
                )
            })
    }

    pub async fn save<T: Serialize>(&self, value: &T) -> Result<()> {
        let content = serde_json::to_string_pretty(value)
            .with_context(|| format!("serialize {} failed", self.path.display()))?;
        self.atomic_write(&content).await
    }

    async fn atomic_write(&self, content: &str) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .await
                .with_context(|| format!("create store dir failed: {}", dir.display()))?;
        }

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, content)
            .await
            .with_context(|| format!("write temp file failed: {}", tmp_path.display()))?;

        // TODO: rename over an existing file is not atomic on every Windows filesystem.
        fs::rename(&tmp_path, &self.path).await.with_context(|| {
            format!(
                "rename temp file to target failed: {} -> {}",
                tmp_path.display(),
                self.path.display()
            )
        })?;
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum JsonFileError {
    #[error("{0:#}")]
    Io(anyhow::Error),
    #[error("{0:#}")]
    Corrupt(anyhow::Error),
}

impl From<JsonFileError> for sr_core::ports::StorageError {
    fn from(err: JsonFileError) -> Self {
        match err {
            JsonFileError::Io(err) => Self::Io(format!("{err:#}")),
            JsonFileError::Corrupt(err) => Self::Corrupt(format!("{err:#}")),
        }
    }
}
