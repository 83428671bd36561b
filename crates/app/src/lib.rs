//! # tasktime App
//!
//! Terminal front end for the task tracking service.
//!
//! This crate contains:
//! - The clap command tree
//! - Application context (dependency injection)
//! - Text rendering of the core views
//! - Logging setup
//!
//! ## Architecture
//! - Depends on `common`, `domain`, `core`, and `infra`
//! - Wires the HTTP adapter and token store into the core session and
//!   dashboard

pub mod cli;
pub mod commands;
pub mod context;
pub mod render;
pub mod utils;

// Re-export for convenience
pub use cli::{Cli, Command};
pub use commands::{run, CommandError};
pub use context::AppContext;
