//! In-memory port doubles shared by the use case unit tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Duration as ChronoDuration, TimeZone, Utc};
use tokio::sync::Semaphore;

use sr_core::moment::{EventRecord, Moment};
use sr_core::notification::{NotificationRequest, PermissionState};
use sr_core::ports::{
    ClockPort, CredentialStorePort, EventCachePort, JobSchedulerPort, NotificationPermissionPort,
    NotifierPort, PeriodicJob, RemoteApiPort, RemoteError, SchedulerError, StorageError,
    TokenPair,
};
use sr_core::scheduling::PollRegistration;
use sr_core::session::{Credentials, Region};

pub fn credentials(device: &str, access: &str, refresh: &str) -> Credentials {
    Credentials {
        device_id: device.to_string(),
        access_token: access.to_string(),
        refresh_token: refresh.to_string(),
    }
}

pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 18, 12, 0, 0).unwrap()
}

/// A moment opening `offset_minutes` after `base_time()`, open for two minutes.
pub fn moment_at(id: &str, offset_minutes: i64) -> Moment {
    let start = base_time() + ChronoDuration::minutes(offset_minutes);
    Moment {
        id: id.to_string(),
        region: Region::new("europe-west"),
        start_date: start,
        end_date: start + ChronoDuration::minutes(2),
    }
}

pub async fn wait_until(mut condition: impl FnMut() -> bool) {
    for _ in 0..1000 {
        if condition() {
            return;
        }
        tokio::task::yield_now().await;
        tokio::time::sleep(std::time::Duration::from_millis(1)).await;
    }
    panic!("condition not reached");
}

#[derive(Default)]
pub struct InMemoryCredentialStore {
    credentials: Mutex<Option<Credentials>>,
    region: Mutex<Option<Region>>,
}

impl InMemoryCredentialStore {
    pub fn with(credentials: Credentials) -> Self {
        Self {
            credentials: Mutex::new(Some(credentials)),
            region: Mutex::new(None),
        }
    }

    pub fn snapshot(&self) -> Option<Credentials> {
        self.credentials.lock().unwrap().clone()
    }
}

#[async_trait]
impl CredentialStorePort for InMemoryCredentialStore {
    async fn get(&self) -> Result<Option<Credentials>, StorageError> {
        Ok(self.credentials.lock().unwrap().clone())
    }

    async fn set(&self, credentials: &Credentials) -> Result<(), StorageError> {
        *self.credentials.lock().unwrap() = Some(credentials.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<(), StorageError> {
        *self.credentials.lock().unwrap() = None;
        Ok(())
    }

    async fn set_region(&self, region: &Region) -> Result<(), StorageError> {
        *self.region.lock().unwrap() = Some(region.clone());
        Ok(())
    }

    async fn get_region(&self) -> Result<Region, StorageError> {
        Ok(self.region.lock().unwrap().clone().unwrap_or_default())
    }
}

#[derive(Default)]
pub struct InMemoryEventCache {
    record: Mutex<EventRecord>,
    writes: AtomicUsize,
}

impl InMemoryEventCache {
    pub fn with(record: EventRecord) -> Self {
        Self {
            record: Mutex::new(record),
            writes: AtomicUsize::new(0),
        }
    }

    pub fn snapshot(&self) -> EventRecord {
        self.record.lock().unwrap().clone()
    }

    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EventCachePort for InMemoryEventCache {
    async fn get_record(&self) -> Result<EventRecord, StorageError> {
        Ok(self.record.lock().unwrap().clone())
    }

    async fn set_record(&self, record: &EventRecord) -> Result<(), StorageError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        *self.record.lock().unwrap() = record.clone();
        Ok(())
    }
}

/// Remote double with scripted answers.
///
/// A gated remote parks every refresh exchange until `release` hands out
/// permits, which lets tests pile up concurrent callers.
pub struct ScriptedRemote {
    refresh_result: Mutex<Result<TokenPair, RemoteError>>,
    moment_result: Mutex<Result<Moment, RemoteError>>,
    /// Access tokens the moment endpoint rejects with `Unauthorized`.
    rejected_tokens: Mutex<Vec<String>>,
    refresh_calls: AtomicUsize,
    moment_calls: AtomicUsize,
    last_refresh_token: Mutex<Option<String>>,
    last_region: Mutex<Option<Region>>,
    gate: Option<Semaphore>,
}

impl Default for ScriptedRemote {
    fn default() -> Self {
        Self {
            refresh_result: Mutex::new(Err(RemoteError::Unavailable("unscripted".into()))),
            moment_result: Mutex::new(Err(RemoteError::Unavailable("unscripted".into()))),
            rejected_tokens: Mutex::new(Vec::new()),
            refresh_calls: AtomicUsize::new(0),
            moment_calls: AtomicUsize::new(0),
            last_refresh_token: Mutex::new(None),
            last_region: Mutex::new(None),
            gate: None,
        }
    }
}

impl ScriptedRemote {
    pub fn gated() -> Self {
        Self {
            gate: Some(Semaphore::new(0)),
            ..Self::default()
        }
    }

    pub fn set_refresh_result(&self, result: Result<(&str, &str), RemoteError>) {
        *self.refresh_result.lock().unwrap() = result.map(|(access, refresh)| TokenPair {
            access_token: access.to_string(),
            refresh_token: refresh.to_string(),
        });
    }

    pub fn set_moment_result(&self, result: Result<Moment, RemoteError>) {
        *self.moment_result.lock().unwrap() = result;
    }

    pub fn reject_access_token(&self, token: &str) {
        self.rejected_tokens.lock().unwrap().push(token.to_string());
    }

    pub fn release(&self, permits: usize) {
        if let Some(gate) = &self.gate {
            gate.add_permits(permits);
        }
    }

    pub fn refresh_calls(&self) -> usize {
        self.refresh_calls.load(Ordering::SeqCst)
    }

    pub fn moment_calls(&self) -> usize {
        self.moment_calls.load(Ordering::SeqCst)
    }

    pub fn last_refresh_token(&self) -> Option<String> {
        self.last_refresh_token.lock().unwrap().clone()
    }

    pub fn last_region(&self) -> Option<Region> {
        self.last_region.lock().unwrap().clone()
    }
}

#[async_trait]
impl RemoteApiPort for ScriptedRemote {
    async fn refresh_tokens(&self, credentials: &Credentials) -> Result<TokenPair, RemoteError> {
        self.refresh_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_refresh_token.lock().unwrap() = Some(credentials.refresh_token.clone());

        if let Some(gate) = &self.gate {
            gate.acquire()
                .await
                .map_err(|_| RemoteError::Unavailable("gate closed".into()))?
                .forget();
        }

        self.refresh_result.lock().unwrap().clone()
    }

    async fn fetch_last_moment(
        &self,
        credentials: &Credentials,
        region: &Region,
    ) -> Result<Moment, RemoteError> {
        self.moment_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_region.lock().unwrap() = Some(region.clone());

        if self
            .rejected_tokens
            .lock()
            .unwrap()
            .contains(&credentials.access_token)
        {
            return Err(RemoteError::Unauthorized);
        }
        self.moment_result.lock().unwrap().clone()
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    sent: Mutex<Vec<NotificationRequest>>,
    fail: std::sync::atomic::AtomicBool,
}

impl RecordingNotifier {
    pub fn failing() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail: std::sync::atomic::AtomicBool::new(true),
        }
    }

    pub fn sent(&self) -> Vec<NotificationRequest> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl NotifierPort for RecordingNotifier {
    async fn notify(&self, request: &NotificationRequest) -> anyhow::Result<()> {
        // Suspend once, like a real delivery channel, so concurrent ticks interleave.
        tokio::task::yield_now().await;
        if self.fail.load(Ordering::SeqCst) {
            anyhow::bail!("notification channel closed");
        }
        self.sent.lock().unwrap().push(request.clone());
        Ok(())
    }
}

pub struct FixedPermission(pub PermissionState);

#[async_trait]
impl NotificationPermissionPort for FixedPermission {
    async fn state(&self) -> PermissionState {
        self.0
    }

    async fn request(&self) -> PermissionState {
        self.0
    }
}

pub struct FixedClock(pub DateTime<Utc>);

impl ClockPort for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Scheduler double that only tracks which names are enqueued.
#[derive(Default)]
pub struct RecordingScheduler {
    enqueued: Mutex<Vec<PollRegistration>>,
    enqueue_calls: AtomicUsize,
    cancel_calls: AtomicUsize,
}

impl RecordingScheduler {
    pub fn enqueue_calls(&self) -> usize {
        self.enqueue_calls.load(Ordering::SeqCst)
    }

    pub fn cancel_calls(&self) -> usize {
        self.cancel_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl JobSchedulerPort for RecordingScheduler {
    async fn enqueue_unique_periodic(
        &self,
        registration: PollRegistration,
        _job: Arc<dyn PeriodicJob>,
    ) -> Result<(), SchedulerError> {
        self.enqueue_calls.fetch_add(1, Ordering::SeqCst);
        let mut enqueued = self.enqueued.lock().unwrap();
        enqueued.retain(|existing| existing.name != registration.name);
        enqueued.push(registration);
        Ok(())
    }

    async fn cancel_unique(&self, name: &str) -> Result<(), SchedulerError> {
        self.cancel_calls.fetch_add(1, Ordering::SeqCst);
        self.enqueued.lock().unwrap().retain(|existing| existing.name != name);
        Ok(())
    }

    async fn is_enqueued(&self, name: &str) -> bool {
        self.enqueued
            .lock()
            .unwrap()
            .iter()
            .any(|existing| existing.name == name)
    }
}

pub struct NoopJob;

#[async_trait]
impl PeriodicJob for NoopJob {
    async fn run(&self) {}
}
