use async_trait::async_trait;

use crate::ports::errors::StorageError;
use crate::session::{Credentials, Region};

/// Durable holder of the session triple and the region preference.
///
/// Every call is atomic with respect to every other call: readers never
/// observe a partially written document.
#[async_trait]
pub trait CredentialStorePort: Send + Sync {
    async fn get(&self) -> Result<Option<Credentials>, StorageError>;
    async fn set(&self, credentials: &Credentials) -> Result<(), StorageError>;
    async fn clear(&self) -> Result<(), StorageError>;
    async fn set_region(&self, region: &Region) -> Result<(), StorageError>;
    /// Returns `Region::default()` when nothing was stored.
    async fn get_region(&self) -> Result<Region, StorageError>;
}
