use thiserror::Error;

/// Durable store failures.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage io failed: {0}")]
    Io(String),

    /// The stored document could not be decoded.
    #[error("storage data corrupt: {0}")]
    Corrupt(String),
}

/// Remote API failures, classified so callers can tell transient from terminal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RemoteError {
    /// An authenticated call was rejected; the access token is stale.
    #[error("request unauthorized")]
    Unauthorized,

    /// The refresh token was rejected by the token endpoint.
    #[error("invalid grant: {0}")]
    InvalidGrant(String),

    /// Network, timeout or server-side failure.
    #[error("remote unavailable: {0}")]
    Unavailable(String),

    #[error("unexpected response: {0}")]
    Decode(String),
}

#[derive(Debug, Error)]
pub enum SchedulerError {
    #[error("failed to schedule job {name}: {reason}")]
    Schedule { name: String, reason: String },
}

#[derive(Debug, Error)]
pub enum AppDirsError {
    #[error("system data-local directory is unavailable")]
    DataLocalDirUnavailable,
}
