//! Application constants
//!
//! Centralized location for domain-level constants used throughout the
//! client.

// Form limits
pub const MAX_TITLE_LENGTH: usize = 255;
pub const MAX_DESCRIPTION_LENGTH: usize = 1000;
pub const MIN_USERNAME_LENGTH: usize = 3;
pub const MIN_PASSWORD_LENGTH: usize = 6;

// Rendering
pub const MISSING_DURATION_PLACEHOLDER: &str = "-";
pub const RUNNING_ENTRY_LABEL: &str = "Running...";
pub const NO_SUMMARY_ENTRIES: &str = "No time entries in this period";
pub const GENERIC_REQUEST_FAILURE: &str = "Request failed";

// Live timer refresh cadence
pub const TIMER_TICK_MS: u64 = 1000;

// Client-persisted state
pub const TOKEN_STORAGE_KEY: &str = "token";
pub const STORAGE_FILE_NAME: &str = "storage.json";

// Configuration defaults
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_LOG_LEVEL: &str = "warn";
