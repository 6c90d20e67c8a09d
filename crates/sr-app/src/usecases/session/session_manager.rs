//! Session manager: credential access plus the single-flight token refresh.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use futures::future::{BoxFuture, FutureExt, Shared};
use tokio::sync::Mutex;
use tracing::{debug, info, info_span, warn, Instrument};

use sr_core::ports::{CredentialStorePort, RemoteApiPort, RemoteError};
use sr_core::session::{Credentials, SessionError};

type RefreshFuture = Shared<BoxFuture<'static, Result<Credentials, SessionError>>>;

struct InFlightRefresh {
    id: u64,
    future: RefreshFuture,
}

/// Owns every mutation of the stored credentials.
///
/// ## Behavior
///
/// - `refresh()` is single-flight: callers arriving while an exchange is
///   pending await that exchange and receive its outcome.
/// - Every `set_credentials` / `clear_credentials` bumps a generation
///   counter. A refresh captures the generation when it starts and only
///   writes its result back if the counter is unchanged, so a clear (or a
///   fresh login) issued mid-refresh always wins.
pub struct SessionManager {
    store: Arc<dyn CredentialStorePort>,
    remote: Arc<dyn RemoteApiPort>,
    generation: Arc<AtomicU64>,
    /// Serializes store writes against the generation check.
    write_lock: Arc<Mutex<()>>,
    in_flight: Mutex<Option<InFlightRefresh>>,
    next_flight_id: AtomicU64,
}

impl SessionManager {
    pub fn new(store: Arc<dyn CredentialStorePort>, remote: Arc<dyn RemoteApiPort>) -> Self {
        Self {
            store,
            remote,
            generation: Arc::new(AtomicU64::new(0)),
            write_lock: Arc::new(Mutex::new(())),
            in_flight: Mutex::new(None),
            next_flight_id: AtomicU64::new(0),
        }
    }

    /// Current credentials, or `Unauthenticated` when none are stored.
    pub async fn get_credentials(&self) -> Result<Credentials, SessionError> {
        self.store.get().await?.ok_or(SessionError::Unauthenticated)
    }

    pub async fn set_credentials(&self, credentials: Credentials) -> Result<(), SessionError> {
        credentials.validate()?;

        let _guard = self.write_lock.lock().await;
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.store.set(&credentials).await?;

        info!(device_id = %credentials.device_id, "credentials stored");
        Ok(())
    }

    pub async fn clear_credentials(&self) -> Result<(), SessionError> {
        let _guard = self.write_lock.lock().await;
        // Bump first: even a failed clear invalidates a pending refresh.
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.store.clear().await?;

        info!("credentials cleared");
        Ok(())
    }

    /// Exchange the stored refresh token for a new pair.
    ///
    /// # Errors
    ///
    /// - `Unauthenticated` when nothing is stored
    /// - `RefreshDenied` when the refresh token was rejected (store unchanged)
    /// - `RemoteUnavailable` on transient failure (store unchanged)
    /// - `Superseded` when the credentials were cleared or replaced meanwhile
    pub async fn refresh(&self) -> Result<Credentials, SessionError> {
        let span = info_span!("usecase.session.refresh");

        async {
            let (flight_id, future) = self.join_or_start_refresh().await;
            let result = future.await;
            self.settle_refresh(flight_id).await;

            match &result {
                Ok(_) => info!(flight_id, "token refresh completed"),
                Err(err) => warn!(flight_id, error = %err, "token refresh failed"),
            }
            result
        }
        .instrument(span)
        .await
    }

    /// Returns credentials whose access token is believed valid.
    ///
    /// Token expiry is never computed locally. When a caller saw
    /// `rejected_access_token` fail an authenticated call and it is still
    /// the stored token, one refresh is performed first. If the stored token
    /// already differs, someone else refreshed and it is returned as is.
    pub async fn ensure_valid_access_token(
        &self,
        rejected_access_token: Option<&str>,
    ) -> Result<Credentials, SessionError> {
        let current = self.get_credentials().await?;

        match rejected_access_token {
            Some(rejected) if rejected == current.access_token => self.refresh().await,
            _ => Ok(current),
        }
    }

    /// Run an authenticated remote call, refreshing and retrying once when
    /// the access token is rejected.
    pub async fn authorized<T, F, Fut>(&self, call: F) -> Result<T, SessionError>
    where
        F: Fn(Credentials) -> Fut,
        Fut: Future<Output = Result<T, RemoteError>>,
    {
        let credentials = self.ensure_valid_access_token(None).await?;
        let used_token = credentials.access_token.clone();

        match call(credentials).await {
            Err(RemoteError::Unauthorized) => {
                debug!("access token rejected, refreshing before retry");
                let credentials = self.ensure_valid_access_token(Some(&used_token)).await?;
                call(credentials).await.map_err(SessionError::from)
            }
            other => other.map_err(SessionError::from),
        }
    }

    async fn join_or_start_refresh(&self) -> (u64, RefreshFuture) {
        let mut slot = self.in_flight.lock().await;

        if let Some(flight) = slot.as_ref() {
            debug!(flight_id = flight.id, "joining in-flight token refresh");
            return (flight.id, flight.future.clone());
        }

        let id = self.next_flight_id.fetch_add(1, Ordering::SeqCst);
        let future = exchange_refresh_token(
            self.store.clone(),
            self.remote.clone(),
            self.generation.clone(),
            self.write_lock.clone(),
        )
        .boxed()
        .shared();

        *slot = Some(InFlightRefresh {
            id,
            future: future.clone(),
        });
        debug!(flight_id = id, "started token refresh");
        (id, future)
    }

    async fn settle_refresh(&self, flight_id: u64) {
        let mut slot = self.in_flight.lock().await;
        if slot.as_ref().is_some_and(|flight| flight.id == flight_id) {
            *slot = None;
        }
    }
}

async fn exchange_refresh_token(
    store: Arc<dyn CredentialStorePort>,
    remote: Arc<dyn RemoteApiPort>,
    generation: Arc<AtomicU64>,
    write_lock: Arc<Mutex<()>>,
) -> Result<Credentials, SessionError> {
    let (started_at, stored) = {
        let _guard = write_lock.lock().await;
        (generation.load(Ordering::SeqCst), store.get().await?)
    };
    let current = stored.ok_or(SessionError::Unauthenticated)?;

    debug!(device_id = %current.device_id, "exchanging refresh token");
    let tokens = remote.refresh_tokens(&current).await?;
    let refreshed = current.rotated(tokens.access_token, tokens.refresh_token);

    let _guard = write_lock.lock().await;
    if generation.load(Ordering::SeqCst) != started_at {
        warn!("credentials changed during refresh, discarding refreshed tokens");
        return Err(SessionError::Superseded);
    }
    store.set(&refreshed).await?;

    Ok(refreshed)
}
