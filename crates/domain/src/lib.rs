//! # tasktime Domain
//!
//! Data types exchanged with the task tracking API.
//!
//! This crate contains:
//! - Wire types (User, Task, TimeEntry, PeriodSummary) and request bodies
//! - Domain error type and Result definition
//! - Client configuration structures
//! - Domain constants (field limits, storage keys)
//!
//! ## Architecture
//! - No dependencies on other tasktime crates
//! - Only external dependencies allowed
//! - Pure data structures, no I/O

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
