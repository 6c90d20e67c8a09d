//! Port interfaces for the application layer
//!
//! Ports define the contract between the use cases in `sr-app` and the
//! infrastructure/platform adapters that implement them. Use cases only
//! ever see these traits.

pub mod app_dirs;
mod clock;
pub mod connectivity;
pub mod credential_store;
pub mod errors;
pub mod event_cache;
pub mod job_scheduler;
pub mod notifier;
pub mod remote_api;

pub use app_dirs::AppDirsPort;
pub use clock::*;
pub use connectivity::ConnectivityPort;
pub use credential_store::CredentialStorePort;
pub use errors::{AppDirsError, RemoteError, SchedulerError, StorageError};
pub use event_cache::EventCachePort;
pub use job_scheduler::{JobSchedulerPort, PeriodicJob};
pub use notifier::{NotificationPermissionPort, NotifierPort};
pub use remote_api::{RemoteApiPort, TokenPair};
