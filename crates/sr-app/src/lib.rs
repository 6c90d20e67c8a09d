//! StayReal Application Orchestration Layer
//!
//! Session lifecycle, background moment polling and notification dispatch,
//! written against the ports in `sr-core`.

pub mod app;
pub mod deps;
pub mod usecases;

pub use app::{App, UseCases};
pub use deps::AppDeps;
