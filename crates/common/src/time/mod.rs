//! Time utilities and abstractions
//!
//! - **[`format`]**: human-readable duration formatting
//! - **[`clock`]**: wall clock abstraction with a controllable mock (runtime)
//! - **[`timer`]**: cancellable recurring timers (runtime)
//!
//! ## Usage
//!
//! ```rust
//! use tasktime_common::time::format_duration;
//!
//! assert_eq!(format_duration(303), "5m 03s");
//! assert_eq!(format_duration(7209), "2h 00m 09s");
//! ```

pub mod format;

#[cfg(feature = "runtime")]
pub mod clock;
#[cfg(feature = "runtime")]
pub mod timer;

// Re-export commonly used items
#[cfg(feature = "runtime")]
pub use clock::{Clock, MockClock, SystemClock};
pub use format::{format_duration, format_optional_duration};
#[cfg(feature = "runtime")]
pub use timer::{recurring, recurring_now, TimerGuard, TimerHandle};
