use std::path::PathBuf;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::debug;

use sr_core::ports::{CredentialStorePort, StorageError};
use sr_core::session::{Credentials, Region};

use super::json_file::JsonFile;

/// On-disk shape of `session.json`.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SessionDocument {
    #[serde(default)]
    credentials: Option<Credentials>,
    #[serde(default)]
    region: Option<Region>,
}

/// Credential store persisted as one JSON document.
///
/// Credentials and region share the file, so every mutation is a locked
/// read-modify-write.
pub struct FileCredentialStore {
    file: JsonFile,
    lock: Mutex<()>,
}

impl FileCredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            file: JsonFile::new(path),
            lock: Mutex::new(()),
        }
    }

    async fn read(&self) -> Result<SessionDocument, StorageError> {
        Ok(self.file.load().await?.unwrap_or_default())
    }

    async fn write(&self, document: &SessionDocument) -> Result<(), StorageError> {
        self.file
            .save(document)
            .await
            .map_err(|err| StorageError::Io(format!("{err:#}")))
    }

    async fn update(
        &self,
        apply: impl FnOnce(&mut SessionDocument),
    ) -> Result<(), StorageError> {
        let _guard = self.lock.lock().await;
        let mut document = self.read().await?;
        apply(&mut document);
        self.write(&document).await
    }
}

#[async_trait]
impl CredentialStorePort for FileCredentialStore {
    async fn get(&self) -> Result<Option<Credentials>, StorageError> {
        let _guard = self.lock.lock().await;
        Ok(self.read().await?.credentials)
    }

    async fn set(&self, credentials: &Credentials) -> Result<(), StorageError> {
        self.update(|document| document.credentials = Some(credentials.clone()))
            .await?;
        debug!(path = %self.file.path().display(), "credentials stored");
        Ok(())
    }

    async fn clear(&self) -> Result<(), StorageError> {
        self.update(|document| document.credentials = None).await?;
        debug!(path = %self.file.path().display(), "credentials cleared");
        Ok(())
    }

    async fn set_region(&self, region: &Region) -> Result<(), StorageError> {
        self.update(|document| document.region = Some(region.clone()))
            .await
    }

    async fn get_region(&self) -> Result<Region, StorageError> {
        let _guard = self.lock.lock().await;
        Ok(self.read().await?.region.unwrap_or_default())
    }
}
