//! Modular common utilities shared across tasktime crates.
//!
//! # Feature Tiers
//!
//! Enable cargo features to opt into the tiers you need:
//! - `foundation`: field validation, duration formatting
//! - `runtime`: wall clocks and cancellable recurring timers (tokio)

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::complexity, clippy::suspicious)]

// Foundation tier
// -----------------------------------------------------------------
#[cfg(feature = "foundation")]
pub mod time;
#[cfg(feature = "foundation")]
pub mod validation;

// Re-export commonly used types and traits for convenience
// ------------------------
#[cfg(feature = "runtime")]
pub use time::clock::{Clock, MockClock, SystemClock};
#[cfg(feature = "foundation")]
pub use time::format::{format_duration, format_optional_duration};
#[cfg(feature = "runtime")]
pub use time::timer::{TimerGuard, TimerHandle};
#[cfg(feature = "foundation")]
pub use validation::{
    DateValidator, EmailValidator, FieldError, FieldValidator, StringValidator, ValidationError,
    ValidationResult, Validator,
};
