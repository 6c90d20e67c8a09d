pub mod fs;
pub mod remote;
pub mod time;

pub use fs::{FileCredentialStore, FileEventCache};
pub use remote::HttpRemoteApi;
pub use time::SystemClock;
