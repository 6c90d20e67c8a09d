//! Auth-detail use cases backing the UI's login/logout commands.

use std::sync::Arc;

use tracing::{info_span, warn, Instrument};

use sr_core::session::{Credentials, SessionError};

use super::SessionManager;
use crate::usecases::poll::PollScheduler;

/// Store credentials after a login and make sure polling runs.
pub struct SetAuthDetails {
    session: Arc<SessionManager>,
    poll: Arc<PollScheduler>,
}

impl SetAuthDetails {
    pub fn new(session: Arc<SessionManager>, poll: Arc<PollScheduler>) -> Self {
        Self { session, poll }
    }

    pub async fn execute(
        &self,
        device_id: String,
        access_token: String,
        refresh_token: String,
    ) -> Result<(), SessionError> {
        let span = info_span!("usecase.set_auth_details.execute");

        async {
            let credentials = Credentials::new(device_id, access_token, refresh_token)?;
            self.session.set_credentials(credentials).await?;

            // Login succeeded either way; a missing poll only costs notifications.
            if let Err(err) = self.poll.register_default().await {
                warn!(error = %err, "failed to register moment poll after login");
            }
            Ok(())
        }
        .instrument(span)
        .await
    }
}

pub struct GetAuthDetails {
    session: Arc<SessionManager>,
}

impl GetAuthDetails {
    pub fn new(session: Arc<SessionManager>) -> Self {
        Self { session }
    }

    pub async fn execute(&self) -> Result<Credentials, SessionError> {
        self.session.get_credentials().await
    }
}

/// Log out: clear the session and stop background polling.
pub struct ClearAuthDetails {
    session: Arc<SessionManager>,
    poll: Arc<PollScheduler>,
}

impl ClearAuthDetails {
    pub fn new(session: Arc<SessionManager>, poll: Arc<PollScheduler>) -> Self {
        Self { session, poll }
    }

    pub async fn execute(&self) -> Result<(), SessionError> {
        let span = info_span!("usecase.clear_auth_details.execute");

        async {
            self.session.clear_credentials().await?;

            if let Err(err) = self.poll.unregister().await {
                warn!(error = %err, "failed to unregister moment poll after logout");
            }
            Ok(())
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::test_support::{
        credentials, InMemoryCredentialStore, NoopJob, RecordingScheduler, ScriptedRemote,
    };
    use std::time::Duration;

    struct Fixture {
        store: Arc<InMemoryCredentialStore>,
        scheduler: Arc<RecordingScheduler>,
        poll: Arc<PollScheduler>,
        session: Arc<SessionManager>,
    }

    fn fixture(store: InMemoryCredentialStore) -> Fixture {
        let store = Arc::new(store);
        let scheduler = Arc::new(RecordingScheduler::default());
        let session = Arc::new(SessionManager::new(
            store.clone(),
            Arc::new(ScriptedRemote::default()),
        ));
        let poll = Arc::new(PollScheduler::new(
            scheduler.clone(),
            Arc::new(NoopJob),
            Duration::from_secs(900),
        ));

        Fixture {
            store,
            scheduler,
            poll,
            session,
        }
    }

    #[tokio::test]
    async fn set_then_get_round_trips_and_registers_poll() {
        let f = fixture(InMemoryCredentialStore::default());

        SetAuthDetails::new(f.session.clone(), f.poll.clone())
            .execute("d1".into(), "a1".into(), "r1".into())
            .await
            .unwrap();

        let stored = GetAuthDetails::new(f.session.clone()).execute().await.unwrap();
        assert_eq!(stored, credentials("d1", "a1", "r1"));
        assert!(f.poll.is_registered().await);
    }

    #[tokio::test]
    async fn set_rejects_empty_values_without_registering() {
        let f = fixture(InMemoryCredentialStore::default());

        let result = SetAuthDetails::new(f.session.clone(), f.poll.clone())
            .execute("d1".into(), "a1".into(), String::new())
            .await;

        assert!(matches!(result, Err(SessionError::InvalidCredentials(_))));
        assert_eq!(f.scheduler.enqueue_calls(), 0);
    }

    #[tokio::test]
    async fn clear_empties_store_and_unregisters_poll() {
        let f = fixture(InMemoryCredentialStore::with(credentials("d1", "a1", "r1")));
        f.poll.register_default().await.unwrap();

        ClearAuthDetails::new(f.session.clone(), f.poll.clone())
            .execute()
            .await
            .unwrap();

        assert_eq!(f.store.snapshot(), None);
        assert!(!f.poll.is_registered().await);
        assert_eq!(
            GetAuthDetails::new(f.session.clone()).execute().await,
            Err(SessionError::Unauthenticated)
        );
    }

    #[tokio::test]
    async fn clear_twice_is_harmless() {
        let f = fixture(InMemoryCredentialStore::default());
        let clear = ClearAuthDetails::new(f.session.clone(), f.poll.clone());

        clear.execute().await.unwrap();
        clear.execute().await.unwrap();

        assert_eq!(f.scheduler.cancel_calls(), 2);
    }
}
