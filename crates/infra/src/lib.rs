//! # tasktime Infrastructure
//!
//! Infrastructure implementations of core ports.
//!
//! This crate contains:
//! - HTTP transport and the typed API client (reqwest)
//! - The `TaskTimeApi` adapter for the remote service
//! - File-backed token persistence
//! - Configuration loading (files + environment)
//!
//! ## Architecture
//! - Implements traits defined in `tasktime-core`
//! - Contains all "impure" code (network, filesystem, environment)

pub mod api;
pub mod config;
pub mod errors;
pub mod http;
pub mod storage;

// Re-export commonly used items
pub use api::{ApiClient, ApiClientConfig, ApiError, HttpTaskTimeApi};
pub use errors::InfraError;
pub use http::HttpClient;
pub use storage::FileTokenStore;
