use std::sync::Arc;

use async_trait::async_trait;

use crate::ports::errors::SchedulerError;
use crate::scheduling::PollRegistration;

/// Work the host scheduler runs on every fire.
#[async_trait]
pub trait PeriodicJob: Send + Sync {
    async fn run(&self);
}

/// Host job scheduler holding unique, named periodic jobs.
#[async_trait]
pub trait JobSchedulerPort: Send + Sync {
    /// Enqueue `job` under `registration.name`, applying `registration.policy`
    /// when a job with that name already exists.
    async fn enqueue_unique_periodic(
        &self,
        registration: PollRegistration,
        job: Arc<dyn PeriodicJob>,
    ) -> Result<(), SchedulerError>;

    /// Stop future fires of `name`. No-op when absent.
    async fn cancel_unique(&self, name: &str) -> Result<(), SchedulerError>;

    async fn is_enqueued(&self, name: &str) -> bool;
}
