use async_trait::async_trait;

use crate::moment::Moment;
use crate::ports::errors::RemoteError;
use crate::session::{Credentials, Region};

/// Fresh token pair returned by a refresh exchange.
#[derive(Clone, PartialEq, Eq)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

impl std::fmt::Debug for TokenPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("TokenPair { .. }")
    }
}

/// The authenticated remote API.
///
/// Implementations bound every call with their own timeout.
#[async_trait]
pub trait RemoteApiPort: Send + Sync {
    /// Exchange `credentials.refresh_token` for a new pair.
    async fn refresh_tokens(&self, credentials: &Credentials) -> Result<TokenPair, RemoteError>;

    /// Fetch the most recent moment for `region`.
    async fn fetch_last_moment(
        &self,
        credentials: &Credentials,
        region: &Region,
    ) -> Result<Moment, RemoteError>;
}
