//! Remote API client for the task tracking service
//!
//! # Architecture
//!
//! - Transport goes through [`crate::http::HttpClient`] (no direct reqwest)
//! - Bearer token read from the token store on every request
//! - Single attempt per call; failures keep the server's `detail`
//! - [`HttpTaskTimeApi`] adapts the client to the core port

pub mod auth;
pub mod client;
pub mod errors;
pub mod service;

pub use auth::{AccessTokenProvider, StoredTokenProvider};
pub use client::{ApiClient, ApiClientBuilder, ApiClientConfig};
pub use errors::{extract_detail, ApiError, ApiErrorCategory};
pub use service::HttpTaskTimeApi;
