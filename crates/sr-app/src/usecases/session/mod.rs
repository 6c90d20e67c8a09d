mod auth_details;
mod session_manager;

pub use auth_details::{ClearAuthDetails, GetAuthDetails, SetAuthDetails};
pub use session_manager::SessionManager;
