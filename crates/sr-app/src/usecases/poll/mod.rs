//! Registration of the standing moment poll job.

use std::sync::Arc;
use std::time::Duration;

use tracing::{info, info_span, Instrument};

use sr_core::ports::{JobSchedulerPort, PeriodicJob, SchedulerError};
use sr_core::scheduling::{JobConstraints, PollRegistration, MOMENT_POLL_JOB};

/// Keeps exactly one moment poll job registered with the host scheduler.
///
/// Registration always uses cancel-and-reenqueue, so registering twice
/// leaves one job behind. Unregistering only stops future fires; a tick
/// that is already running finishes on its own.
pub struct PollScheduler {
    scheduler: Arc<dyn JobSchedulerPort>,
    job: Arc<dyn PeriodicJob>,
    default_interval: Duration,
}

impl PollScheduler {
    pub fn new(
        scheduler: Arc<dyn JobSchedulerPort>,
        job: Arc<dyn PeriodicJob>,
        default_interval: Duration,
    ) -> Self {
        Self {
            scheduler,
            job,
            default_interval,
        }
    }

    pub async fn register(
        &self,
        interval: Duration,
        constraints: JobConstraints,
    ) -> Result<(), SchedulerError> {
        let span = info_span!("usecase.poll_scheduler.register");

        async {
            let registration = PollRegistration::moment_poll(interval, constraints);
            self.scheduler
                .enqueue_unique_periodic(registration, self.job.clone())
                .await?;

            info!(
                job = MOMENT_POLL_JOB,
                interval_secs = interval.as_secs(),
                requires_network = constraints.requires_network(),
                "moment poll registered"
            );
            Ok(())
        }
        .instrument(span)
        .await
    }

    /// Register with the configured interval and a network constraint.
    pub async fn register_default(&self) -> Result<(), SchedulerError> {
        self.register(self.default_interval, JobConstraints::network_connected())
            .await
    }

    pub async fn unregister(&self) -> Result<(), SchedulerError> {
        self.scheduler.cancel_unique(MOMENT_POLL_JOB).await?;
        info!(job = MOMENT_POLL_JOB, "moment poll unregistered");
        Ok(())
    }

    pub async fn is_registered(&self) -> bool {
        self.scheduler.is_enqueued(MOMENT_POLL_JOB).await
    }
}
