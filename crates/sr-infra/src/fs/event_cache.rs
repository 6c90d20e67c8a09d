use std::path::PathBuf;

use async_trait::async_trait;
use tracing::{debug, warn};

use sr_core::moment::EventRecord;
use sr_core::ports::{EventCachePort, StorageError};

use super::json_file::{JsonFile, JsonFileError};

/// `moment_cache.json`: the last observed moment.
pub struct FileEventCache {
    file: JsonFile,
}

impl FileEventCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            file: JsonFile::new(path),
        }
    }
}

#[async_trait]
impl EventCachePort for FileEventCache {
    async fn get_record(&self) -> Result<EventRecord, StorageError> {
        match self.file.load::<EventRecord>().await {
            Ok(record) => Ok(record.unwrap_or_default()),
            // An unreadable cache costs at most one repeated notification.
            Err(JsonFileError::Corrupt(err)) => {
                warn!(error = %format!("{err:#}"), "moment cache corrupt, starting empty");
                Ok(EventRecord::default())
            }
            Err(err) => Err(err.into()),
        }
    }

    async fn set_record(&self, record: &EventRecord) -> Result<(), StorageError> {
        self.file
            .save(record)
            .await
            .map_err(|err| StorageError::Io(format!("{err:#}")))?;
        debug!(last_seen_id = ?record.last_seen_id, "moment cache updated");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn last_seen_id_helpers_keep_window() {
        let dir = TempDir::new().unwrap();
        let cache = FileEventCache::new(dir.path().join("moment_cache.json"));

        assert_eq!(cache.get_last_seen_id().await.unwrap(), None);

        cache.set_last_seen_id("evt-1").await.unwrap();
        assert_eq!(cache.get_last_seen_id().await.unwrap().as_deref(), Some("evt-1"));
        assert_eq!(cache.get_record().await.unwrap().window_start, None);
    }

    #[tokio::test]
    async fn corrupt_cache_reads_as_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("moment_cache.json");
        std::fs::write(&path, "not json").unwrap();

        let cache = FileEventCache::new(&path);
        assert_eq!(cache.get_record().await.unwrap(), EventRecord::default());
    }
}
