//! Region preference used to scope moment queries.

use std::sync::Arc;

use tracing::info;

use sr_core::ports::CredentialStorePort;
use sr_core::session::{Region, SessionError};

pub struct SetRegion {
    store: Arc<dyn CredentialStorePort>,
}

impl SetRegion {
    pub fn new(store: Arc<dyn CredentialStorePort>) -> Self {
        Self { store }
    }

    pub async fn execute(&self, region: Region) -> Result<(), SessionError> {
        if region.as_str().trim().is_empty() {
            return Err(SessionError::InvalidCredentials("region".into()));
        }
        self.store.set_region(&region).await?;
        info!(%region, "moment region updated");
        Ok(())
    }
}

pub struct GetRegion {
    store: Arc<dyn CredentialStorePort>,
}

impl GetRegion {
    pub fn new(store: Arc<dyn CredentialStorePort>) -> Self {
        Self { store }
    }

    /// Falls back to [`Region::DEFAULT`] when nothing was stored.
    pub async fn execute(&self) -> Result<Region, SessionError> {
        Ok(self.store.get_region().await?)
    }
}
