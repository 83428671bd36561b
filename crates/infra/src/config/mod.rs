//! Client configuration
//!
//! A config file (TOML or JSON) is layered under `TASKTIME_*` environment
//! overrides, then the result is validated.

pub mod loader;

pub use loader::{apply_env_overrides, load, load_from_file, search_config_paths, validate};
