//! StayReal background session and moment-notification subsystem.
//!
//! Hosts register the plugin returned by [`init`]:
//!
//! ```ignore
//! tauri::Builder::default()
//!     .plugin(stayreal_lib::init())
//!     .run(tauri::generate_context!())
//!     .expect("error while running tauri application");
//! ```

pub use sr_app as app;
pub use sr_core as core;
pub use sr_infra as infra;
pub use sr_platform as platform;
pub use sr_tauri as tauri_plugin;

/// The `stayreal-api` Tauri plugin.
pub fn init<R: tauri::Runtime>() -> tauri::plugin::TauriPlugin<R> {
    sr_tauri::init()
}
