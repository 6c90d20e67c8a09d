use thiserror::Error;

use crate::ports::errors::{RemoteError, StorageError};

/// Errors surfaced by session operations.
///
/// `Clone` because a single refresh outcome is handed to every caller that
/// joined the same in-flight exchange.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// No credentials are stored. Recoverable through the login flow.
    #[error("not authenticated")]
    Unauthenticated,

    #[error("invalid credentials: {0}")]
    InvalidCredentials(String),

    /// The refresh token was rejected. Terminal for the session.
    #[error("refresh denied: {0}")]
    RefreshDenied(String),

    /// Transient network or server failure; stored credentials are untouched.
    #[error("remote unavailable: {0}")]
    RemoteUnavailable(String),

    /// Credentials were cleared or replaced while a refresh was in flight.
    #[error("session changed while refreshing")]
    Superseded,

    #[error("session storage failed: {0}")]
    Storage(String),
}

impl SessionError {
    /// Whether the caller has to send the user back to login.
    pub fn requires_login(&self) -> bool {
        matches!(
            self,
            SessionError::Unauthenticated | SessionError::RefreshDenied(_)
        )
    }
}

impl From<StorageError> for SessionError {
    fn from(err: StorageError) -> Self {
        SessionError::Storage(err.to_string())
    }
}

impl From<RemoteError> for SessionError {
    /// Map a failed remote exchange onto the session taxonomy.
    ///
    /// `Unauthorized` only reaches here once a retry with fresh tokens has
    /// already been rejected, so it is treated as a denied session.
    fn from(err: RemoteError) -> Self {
        match err {
            RemoteError::InvalidGrant(msg) => SessionError::RefreshDenied(msg),
            RemoteError::Unauthorized => {
                SessionError::RefreshDenied("access token rejected".to_string())
            }
            RemoteError::Unavailable(msg) | RemoteError::Decode(msg) => {
                SessionError::RemoteUnavailable(msg)
            }
        }
    }
}
