//! Binary-side helpers

pub mod logging;
pub mod prompt;
