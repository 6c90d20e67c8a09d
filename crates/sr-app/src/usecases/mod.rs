//! Use cases of the session/notification subsystem.
//!
//! [PollScheduler] ── fires ──> NotificationDispatcher::tick
//!                                 │
//!                                 ├─ SessionManager::authorized (refresh on 401)
//!                                 ├─ RemoteApiPort::fetch_last_moment
//!                                 └─ EventCachePort (dedup) → NotifierPort
//!
//! The UI reaches the same SessionManager through the auth-detail use cases.

pub mod notification;
pub mod poll;
pub mod preferences;
pub mod session;

#[cfg(test)]
pub(crate) mod test_support;

pub use notification::{
    AbortReason, FetchLastMoment, NotificationDispatcher, NotificationDispatcherDeps, SkipReason,
    TickOutcome,
};
pub use poll::PollScheduler;
pub use preferences::{GetRegion, SetRegion};
pub use session::{ClearAuthDetails, GetAuthDetails, SessionManager, SetAuthDetails};
