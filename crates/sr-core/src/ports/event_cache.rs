use async_trait::async_trait;

use crate::moment::EventRecord;
use crate::ports::errors::StorageError;

/// Durable record of the last observed moment. Holds no ordering logic.
#[async_trait]
pub trait EventCachePort: Send + Sync {
    async fn get_record(&self) -> Result<EventRecord, StorageError>;
    async fn set_record(&self, record: &EventRecord) -> Result<(), StorageError>;

    async fn get_last_seen_id(&self) -> Result<Option<String>, StorageError> {
        Ok(self.get_record().await?.last_seen_id)
    }

    /// Overwrite only the id, keeping whatever window was recorded.
    async fn set_last_seen_id(&self, id: &str) -> Result<(), StorageError> {
        let mut record = self.get_record().await?;
        record.last_seen_id = Some(id.to_string());
        self.set_record(&record).await
    }
}
