//! Configuration loader
//!
//! ## Loading Strategy
//! 1. Start from the first config file found, or defaults when none exists
//! 2. Apply environment variable overrides
//! 3. Validate the API base URL
//!
//! JSON and TOML are both accepted; the format follows the file extension.
//!
//! ## Environment Variables
//! - `TASKTIME_API_URL`: API base URL
//! - `TASKTIME_TIMEOUT_SECS`: Request timeout in seconds
//! - `TASKTIME_TOKEN_PATH`: Token storage document path
//! - `TASKTIME_LOG_LEVEL`: Default log filter
//!
//! ## File Locations
//! The loader searches the following paths (in order):
//! 1. `./tasktime.toml`, `./tasktime.json`
//! 2. `./config.toml`, `./config.json`
//! 3. `$XDG_CONFIG_HOME/tasktime/config.{toml,json}` (or `~/.config/...`)

use std::path::{Path, PathBuf};

use tasktime_domain::{Config, Result, TaskTimeError};

pub const ENV_API_URL: &str = "TASKTIME_API_URL";
pub const ENV_TIMEOUT_SECS: &str = "TASKTIME_TIMEOUT_SECS";
pub const ENV_TOKEN_PATH: &str = "TASKTIME_TOKEN_PATH";
pub const ENV_LOG_LEVEL: &str = "TASKTIME_LOG_LEVEL";

/// Load configuration with automatic fallback strategy
///
/// # Errors
/// Returns `TaskTimeError::Config` if a found file is invalid, an override
/// cannot be parsed or the resulting base URL is not a valid http(s) URL.
pub fn load() -> Result<Config> {
    let config = match search_config_paths() {
        Some(path) => load_from_file(&path)?,
        None => {
            tracing::debug!("No config file found, using defaults");
            Config::default()
        }
    };

    let config = apply_env_overrides(config)?;
    validate(&config)?;
    Ok(config)
}

/// Load configuration from an explicit file
///
/// Missing keys fall back to their defaults.
///
/// # Errors
/// Returns `TaskTimeError::Config` if the file is missing, unreadable or
/// malformed.
pub fn load_from_file(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Err(TaskTimeError::Config(format!("Config file not found: {}", path.display())));
    }

    tracing::info!(path = %path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(path)
        .map_err(|e| TaskTimeError::Config(format!("Failed to read config file: {}", e)))?;

    parse_config(&contents, path)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| TaskTimeError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| TaskTimeError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(TaskTimeError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Probe the standard locations for a configuration file
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn search_config_paths() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        candidates.extend([
            cwd.join("tasktime.toml"),
            cwd.join("tasktime.json"),
            cwd.join("config.toml"),
            cwd.join("config.json"),
        ]);
    }

    if let Some(config_dir) = user_config_dir() {
        let dir = config_dir.join("tasktime");
        candidates.extend([dir.join("config.toml"), dir.join("config.json")]);
    }

    candidates.into_iter().find(|path| path.is_file())
}

fn user_config_dir() -> Option<PathBuf> {
    std::env::var_os("XDG_CONFIG_HOME")
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("HOME").map(|home| Path::new(&home).join(".config")))
}

/// Apply `TASKTIME_*` environment overrides on top of `config`
///
/// Unset or empty variables leave the field untouched.
///
/// # Errors
/// Returns `TaskTimeError::Config` if the timeout is not a positive integer.
pub fn apply_env_overrides(mut config: Config) -> Result<Config> {
    if let Some(url) = env_var(ENV_API_URL) {
        config.api.base_url = url;
    }

    if let Some(raw) = env_var(ENV_TIMEOUT_SECS) {
        let seconds = raw
            .parse::<u64>()
            .ok()
            .filter(|seconds| *seconds > 0)
            .ok_or_else(|| TaskTimeError::Config(format!("Invalid request timeout: {}", raw)))?;
        config.api.timeout_seconds = seconds;
    }

    if let Some(path) = env_var(ENV_TOKEN_PATH) {
        config.storage.token_path = Some(PathBuf::from(path));
    }

    if let Some(level) = env_var(ENV_LOG_LEVEL) {
        config.log_level = level;
    }

    Ok(config)
}

/// Check the fields the client cannot run without
///
/// # Errors
/// Returns `TaskTimeError::Config` for an unusable base URL or a zero
/// timeout.
pub fn validate(config: &Config) -> Result<()> {
    let url = url::Url::parse(&config.api.base_url).map_err(|e| {
        TaskTimeError::Config(format!("Invalid API base URL '{}': {}", config.api.base_url, e))
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(TaskTimeError::Config(format!(
            "API base URL must use http or https: {}",
            config.api.base_url
        )));
    }

    if config.api.timeout_seconds == 0 {
        return Err(TaskTimeError::Config("Request timeout must be at least 1 second".into()));
    }

    Ok(())
}

fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok().map(|value| value.trim().to_string()).filter(|value| !value.is_empty())
}
