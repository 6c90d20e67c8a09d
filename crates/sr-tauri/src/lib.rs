//! # sr-tauri
//!
//! Tauri integration layer for StayReal.
//!
//! ## Modules
//!
//! - **commands**: IPC command handlers exposed by the `stayreal-api` plugin
//! - **events**: events forwarded to the frontend
//! - **adapters**: ports implemented on top of an `AppHandle`
//! - **bootstrap**: config loading, tracing setup and dependency wiring
//! - **plugin**: the plugin builder tying it all together

pub mod adapters;
pub mod bootstrap;
pub mod commands;
pub mod events;
pub mod plugin;

pub use bootstrap::AppRuntime;
pub use plugin::{init, PLUGIN_NAME};
