use std::sync::Arc;

use tracing::{debug, info_span, warn, Instrument};

use sr_core::moment::{EventRecord, Moment};
use sr_core::ports::{CredentialStorePort, EventCachePort, RemoteApiPort};
use sr_core::session::SessionError;

use super::policy::{classify, Observation};
use crate::usecases::session::SessionManager;

/// Foreground query for the current moment of the stored region.
///
/// Shares the session and the dedup cache with the background tick but
/// never notifies. A moment the user has looked at here still counts as
/// seen, so the background tick will not announce it afterwards.
pub struct FetchLastMoment {
    session: Arc<SessionManager>,
    credential_store: Arc<dyn CredentialStorePort>,
    remote: Arc<dyn RemoteApiPort>,
    event_cache: Arc<dyn EventCachePort>,
}

impl FetchLastMoment {
    pub fn new(
        session: Arc<SessionManager>,
        credential_store: Arc<dyn CredentialStorePort>,
        remote: Arc<dyn RemoteApiPort>,
        event_cache: Arc<dyn EventCachePort>,
    ) -> Self {
        Self {
            session,
            credential_store,
            remote,
            event_cache,
        }
    }

    pub async fn execute(&self) -> Result<Moment, SessionError> {
        let span = info_span!("usecase.fetch_last_moment.execute");

        async {
            let region = self.credential_store.get_region().await?;
            let moment = self
                .session
                .authorized(|credentials| {
                    let remote = Arc::clone(&self.remote);
                    let region = region.clone();
                    async move { remote.fetch_last_moment(&credentials, &region).await }
                })
                .await?;

            self.record_if_new(&moment).await;
            Ok(moment)
        }
        .instrument(span)
        .await
    }

    // Cache trouble must not hide a moment the caller already has in hand.
    async fn record_if_new(&self, moment: &Moment) {
        let record = match self.event_cache.get_record().await {
            Ok(record) => record,
            Err(err) => {
                warn!(error = %err, "failed to read moment cache");
                return;
            }
        };

        if classify(&record, moment) != Observation::New {
            return;
        }
        match self.event_cache.set_record(&EventRecord::observed(moment)).await {
            Ok(()) => debug!(moment_id = %moment.id, "recorded moment from foreground fetch"),
            Err(err) => warn!(error = %err, moment_id = %moment.id, "failed to record moment"),
        }
    }
}
