//! Background job descriptors.
//!
//! The host scheduler gives no timing guarantee: a registration only
//! promises that the job fires eventually, roughly every `interval`, when
//! its constraints hold.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Logical name of the one standing poll job.
pub const MOMENT_POLL_JOB: &str = "moment-notification-poll";

/// Default poll interval (the shortest period mobile hosts accept).
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(15 * 60);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NetworkRequirement {
    #[default]
    Connected,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct JobConstraints {
    pub network: NetworkRequirement,
}

impl JobConstraints {
    pub fn network_connected() -> Self {
        Self {
            network: NetworkRequirement::Connected,
        }
    }

    pub fn requires_network(&self) -> bool {
        self.network == NetworkRequirement::Connected
    }
}

/// What to do when a job with the same name is already enqueued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExistingJobPolicy {
    #[default]
    CancelAndReenqueue,
    Keep,
}

/// Descriptor of a unique periodic job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollRegistration {
    pub name: String,
    pub interval: Duration,
    pub constraints: JobConstraints,
    pub policy: ExistingJobPolicy,
}

impl PollRegistration {
    pub fn moment_poll(interval: Duration, constraints: JobConstraints) -> Self {
        Self {
            name: MOMENT_POLL_JOB.to_string(),
            interval,
            constraints,
            policy: ExistingJobPolicy::CancelAndReenqueue,
        }
    }
}

impl Default for PollRegistration {
    fn default() -> Self {
        Self::moment_poll(DEFAULT_POLL_INTERVAL, JobConstraints::network_connected())
    }
}
