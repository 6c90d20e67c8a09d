//! # sr-core
//!
//! Core domain models and ports for the StayReal session/notification
//! subsystem.
//!
//! This crate contains pure domain logic without any infrastructure
//! dependencies.

pub mod app_dirs;
pub mod config;
pub mod moment;
pub mod notification;
pub mod ports;
pub mod scheduling;
pub mod session;

// Re-export commonly used types at the crate root
pub use config::AppConfig;
pub use moment::{EventRecord, Moment};
pub use notification::{NotificationRequest, PermissionState};
pub use scheduling::{JobConstraints, PollRegistration, MOMENT_POLL_JOB};
pub use session::{Credentials, Region, SessionError};
