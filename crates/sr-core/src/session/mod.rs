//! Session domain: the credential triple, the user's region preference
//! and the error taxonomy shared by every session operation.

mod credentials;
mod error;
mod region;

pub use credentials::Credentials;
pub use error::SessionError;
pub use region::Region;
