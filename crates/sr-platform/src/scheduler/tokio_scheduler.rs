use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tokio::task::AbortHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, info_span, Instrument};

use sr_core::ports::{ConnectivityPort, JobSchedulerPort, PeriodicJob, SchedulerError};
use sr_core::scheduling::{ExistingJobPolicy, JobConstraints, PollRegistration};

/// In-process stand-in for a host job scheduler.
///
/// Each named job is one timer loop on the tokio runtime. Fires spawn the job
/// into its own task, so aborting the loop never cuts a running tick short.
///
/// The "tick running" guard is owned per job name, not per loop: a loop that
/// replaces another one still skips fires while the old loop's tick runs.
pub struct TokioJobScheduler {
    jobs: Arc<Mutex<Jobs>>,
    connectivity: Arc<dyn ConnectivityPort>,
}

#[derive(Default)]
struct Jobs {
    loops: HashMap<String, AbortHandle>,
    /// Kept after cancel so a later enqueue still sees a running tick.
    running: HashMap<String, Arc<Mutex<()>>>,
}

impl Jobs {
    fn running_guard(&mut self, name: &str) -> Arc<Mutex<()>> {
        self.running
            .entry(name.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }
}

impl TokioJobScheduler {
    pub fn new(connectivity: Arc<dyn ConnectivityPort>) -> Self {
        Self {
            jobs: Arc::new(Mutex::new(Jobs::default())),
            connectivity,
        }
    }

    /// Stop every loop, used when the host shuts down.
    pub async fn cancel_all(&self) {
        let mut jobs = self.jobs.lock().await;
        for (name, handle) in jobs.loops.drain() {
            handle.abort();
            debug!(job = %name, "job loop stopped");
        }
    }
}

#[async_trait]
impl JobSchedulerPort for TokioJobScheduler {
    async fn enqueue_unique_periodic(
        &self,
        registration: PollRegistration,
        job: Arc<dyn PeriodicJob>,
    ) -> Result<(), SchedulerError> {
        if registration.interval.is_zero() {
            return Err(SchedulerError::Schedule {
                name: registration.name,
                reason: "interval must be positive".to_string(),
            });
        }
        let runtime = tokio::runtime::Handle::try_current().map_err(|err| {
            SchedulerError::Schedule {
                name: registration.name.clone(),
                reason: err.to_string(),
            }
        })?;

        let mut jobs = self.jobs.lock().await;
        if let Some(existing) = jobs.loops.remove(&registration.name) {
            match registration.policy {
                ExistingJobPolicy::Keep => {
                    debug!(job = %registration.name, "job already enqueued, keeping it");
                    jobs.loops.insert(registration.name, existing);
                    return Ok(());
                }
                ExistingJobPolicy::CancelAndReenqueue => existing.abort(),
            }
        }
        let running = jobs.running_guard(&registration.name);

        let span = info_span!("scheduler.job_loop", job = %registration.name);
        let handle = runtime.spawn(
            run_loop(
                registration.interval,
                registration.constraints,
                job,
                self.connectivity.clone(),
                running,
            )
            .instrument(span),
        );

        info!(
            job = %registration.name,
            interval_secs = registration.interval.as_secs(),
            "job enqueued"
        );
        jobs.loops.insert(registration.name, handle.abort_handle());
        Ok(())
    }

    async fn cancel_unique(&self, name: &str) -> Result<(), SchedulerError> {
        let mut jobs = self.jobs.lock().await;
        if let Some(handle) = jobs.loops.remove(name) {
            handle.abort();
            info!(job = %name, "job cancelled");
        }
        Ok(())
    }

    async fn is_enqueued(&self, name: &str) -> bool {
        self.jobs.lock().await.loops.contains_key(name)
    }
}

async fn run_loop(
    interval: Duration,
    constraints: JobConstraints,
    job: Arc<dyn PeriodicJob>,
    connectivity: Arc<dyn ConnectivityPort>,
    running: Arc<Mutex<()>>,
) {
    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;

        if constraints.requires_network() && !connectivity.is_connected().await {
            debug!("network unavailable, skipping fire");
            continue;
        }
        let Ok(guard) = running.clone().try_lock_owned() else {
            debug!("previous tick still running, skipping fire");
            continue;
        };

        let job = job.clone();
        tokio::spawn(
            async move {
                job.run().await;
                drop(guard);
            }
            .in_current_span(),
        );
    }
}
