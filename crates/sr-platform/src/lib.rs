//! Platform adapters: everything that talks to the host rather than to a
//! file or the remote API.

pub mod app_dirs;
pub mod connectivity;
pub mod notification;
pub mod scheduler;

pub use app_dirs::DirsAppDirsAdapter;
pub use connectivity::TcpConnectivityProbe;
pub use notification::StaticNotificationPermission;
pub use scheduler::TokioJobScheduler;
