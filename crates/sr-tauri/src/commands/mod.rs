//! IPC commands of the `stayreal-api` plugin.

pub mod auth;
pub mod dto;
pub mod error;
pub mod moment;
pub mod permissions;
pub mod region;

pub use auth::{clear_auth_details, get_auth_details, refresh_token, set_auth_details};
pub use error::map_err;
pub use moment::fetch_last_moment;
pub use permissions::{check_permissions, permission_state, request_permissions};
pub use region::{get_region, set_region};
