pub mod config;
pub mod logging;

pub mod storage_uri;
pub mod uri_builder;

pub use storage_uri::{InvalidUriError, StorageUri};
pub use uri_builder::StorageUriBuilder;
