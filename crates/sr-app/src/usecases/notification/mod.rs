mod dispatcher;
mod fetch_last_moment;
pub mod policy;

pub use dispatcher::{
    AbortReason, NotificationDispatcher, NotificationDispatcherDeps, SkipReason, TickOutcome,
};
pub use fetch_last_moment::FetchLastMoment;
