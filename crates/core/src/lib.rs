//! # tasktime Core
//!
//! Client logic of the task tracker - no infrastructure dependencies.
//!
//! This crate contains:
//! - Port interfaces for the remote API and token persistence
//! - The authentication session
//! - The task cache and the per-task timer state machine
//! - Form, filter and summary state behind each view
//!
//! ## Architecture Principles
//! - Only depends on `tasktime-common` and `tasktime-domain`
//! - No HTTP, filesystem or terminal code
//! - Time is read through `Clock` so timer displays are testable

pub mod board;
pub mod dashboard;
pub mod ports;
pub mod session;
pub mod timer;
pub mod views;

pub use board::{TaskBoard, TaskStats};
pub use dashboard::Dashboard;
pub use ports::{TaskTimeApi, TokenStore};
pub use session::{Session, SessionState};
pub use timer::{active_entry, live_seconds, recover_origin, TimerDisplay, TimerError};
pub use views::{
    LoginForm, RegisterForm, SubmitError, SummaryPanel, SummaryView, TaskCard, TaskFilter,
    TaskForm, TimeFilter,
};
