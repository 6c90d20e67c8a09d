mod credential_store;
mod event_cache;
mod json_file;

pub use credential_store::FileCredentialStore;
pub use event_cache::FileEventCache;
pub use json_file::JsonFile;
