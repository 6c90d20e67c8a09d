//! Background moment notification tick.
//!
//! Idle → FetchingToken → Querying → Comparing → (Notifying | Skipping) → Idle
//!
//! A tick has no caller to report to, so every failure is logged and folded
//! into a [`TickOutcome`]. An aborted tick leaves no trace besides the log:
//! the next scheduled fire simply tries again.
//!
//! Ticks never overlap: the read-compare-write against the cache runs under
//! one lock per dispatcher.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{debug, info, info_span, warn, Instrument};

use sr_core::config::NotificationConfig;
use sr_core::moment::{EventRecord, Moment};
use sr_core::notification::NotificationRequest;
use sr_core::ports::{
    ClockPort, CredentialStorePort, EventCachePort, NotificationPermissionPort, NotifierPort,
    PeriodicJob, RemoteApiPort,
};
use sr_core::session::SessionError;

use super::policy::{classify, Observation};
use crate::usecases::session::SessionManager;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    /// A notification was delivered and the cache advanced.
    Notified { moment_id: String },
    /// Permission denied: nothing shown, cache advanced anyway.
    Suppressed { moment_id: String },
    Skipped(SkipReason),
    Aborted(AbortReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    AlreadySeen,
    Older,
    /// Ended longer ago than the configured late grace.
    Stale,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbortReason {
    NotAuthenticated,
    SessionRejected,
    SessionChanged,
    RemoteUnavailable,
    Storage,
    DeliveryFailed,
}

impl From<&SessionError> for AbortReason {
    fn from(err: &SessionError) -> Self {
        match err {
            SessionError::Unauthenticated | SessionError::InvalidCredentials(_) => {
                AbortReason::NotAuthenticated
            }
            SessionError::RefreshDenied(_) => AbortReason::SessionRejected,
            SessionError::Superseded => AbortReason::SessionChanged,
            SessionError::RemoteUnavailable(_) => AbortReason::RemoteUnavailable,
            SessionError::Storage(_) => AbortReason::Storage,
        }
    }
}

/// Ports the dispatcher reads from and writes to.
pub struct NotificationDispatcherDeps {
    pub session: Arc<SessionManager>,
    pub credential_store: Arc<dyn CredentialStorePort>,
    pub remote: Arc<dyn RemoteApiPort>,
    pub event_cache: Arc<dyn EventCachePort>,
    pub notifier: Arc<dyn NotifierPort>,
    pub permission: Arc<dyn NotificationPermissionPort>,
    pub clock: Arc<dyn ClockPort>,
    pub notifications: NotificationConfig,
}

pub struct NotificationDispatcher {
    session: Arc<SessionManager>,
    credential_store: Arc<dyn CredentialStorePort>,
    remote: Arc<dyn RemoteApiPort>,
    event_cache: Arc<dyn EventCachePort>,
    notifier: Arc<dyn NotifierPort>,
    permission: Arc<dyn NotificationPermissionPort>,
    clock: Arc<dyn ClockPort>,
    notifications: NotificationConfig,
    tick_lock: Mutex<()>,
}

impl NotificationDispatcher {
    pub fn from_deps(deps: NotificationDispatcherDeps) -> Self {
        let NotificationDispatcherDeps {
            session,
            credential_store,
            remote,
            event_cache,
            notifier,
            permission,
            clock,
            notifications,
        } = deps;

        Self {
            session,
            credential_store,
            remote,
            event_cache,
            notifier,
            permission,
            clock,
            notifications,
            tick_lock: Mutex::new(()),
        }
    }

    /// Run one poll tick.
    pub async fn tick(&self) -> TickOutcome {
        let span = info_span!("usecase.dispatch_moment_notification.tick");

        async {
            let _running = self.tick_lock.lock().await;
            let outcome = self.run_tick().await;
            match &outcome {
                TickOutcome::Notified { moment_id } => {
                    info!(%moment_id, "moment notification dispatched")
                }
                TickOutcome::Suppressed { moment_id } => {
                    info!(%moment_id, "notification permission denied, recorded moment silently")
                }
                TickOutcome::Skipped(reason) => debug!(?reason, "tick skipped"),
                TickOutcome::Aborted(reason) => info!(?reason, "tick aborted"),
            }
            outcome
        }
        .instrument(span)
        .await
    }

    async fn run_tick(&self) -> TickOutcome {
        let moment = match self.query_moment().await {
            Ok(moment) => moment,
            Err(err) => {
                debug!(error = %err, "moment query failed");
                return TickOutcome::Aborted(AbortReason::from(&err));
            }
        };

        let record = match self.event_cache.get_record().await {
            Ok(record) => record,
            Err(err) => {
                warn!(error = %err, "failed to read moment cache");
                return TickOutcome::Aborted(AbortReason::Storage);
            }
        };

        match classify(&record, &moment) {
            Observation::AlreadySeen => return TickOutcome::Skipped(SkipReason::AlreadySeen),
            Observation::Older => return TickOutcome::Skipped(SkipReason::Older),
            Observation::New => {}
        }
        if !moment.is_recent_at(self.clock.now(), self.notifications.late_grace()) {
            return TickOutcome::Skipped(SkipReason::Stale);
        }

        let outcome = if self.permission.state().await.is_granted() {
            let request = NotificationRequest::for_moment(
                &moment,
                &self.notifications.title,
                &self.notifications.body,
            );
            if let Err(err) = self.notifier.notify(&request).await {
                warn!(error = %err, moment_id = %moment.id, "failed to deliver notification");
                return TickOutcome::Aborted(AbortReason::DeliveryFailed);
            }
            TickOutcome::Notified {
                moment_id: moment.id.clone(),
            }
        } else {
            TickOutcome::Suppressed {
                moment_id: moment.id.clone(),
            }
        };

        // The notification is already out; a failed write only risks a repeat.
        if let Err(err) = self.event_cache.set_record(&EventRecord::observed(&moment)).await {
            warn!(error = %err, moment_id = %moment.id, "failed to record notified moment");
        }

        outcome
    }

    async fn query_moment(&self) -> Result<Moment, SessionError> {
        let region = self.credential_store.get_region().await?;

        self.session
            .authorized(|credentials| {
                let remote = Arc::clone(&self.remote);
                let region = region.clone();
                async move { remote.fetch_last_moment(&credentials, &region).await }
            })
            .await
    }
}

#[async_trait]
impl PeriodicJob for NotificationDispatcher {
    async fn run(&self) {
        self.tick().await;
    }
}
