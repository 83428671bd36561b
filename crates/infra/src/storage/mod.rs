//! Client-persisted state

pub mod token_store;

pub use token_store::{default_storage_path, FileTokenStore};
