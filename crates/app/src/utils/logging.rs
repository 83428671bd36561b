//! Tracing subscriber setup
//!
//! Logs go to stderr so command output on stdout stays clean. The filter is
//! taken from `TASKTIME_LOG`, then `RUST_LOG`, then the configured level;
//! each `-v` raises the floor one step. `TASKTIME_LOG_FORMAT=json` switches
//! to one JSON object per line.

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "TASKTIME_LOG";
pub const LOG_FORMAT_ENV: &str = "TASKTIME_LOG_FORMAT";

fn wants_json() -> bool {
    std::env::var(LOG_FORMAT_ENV).is_ok_and(|value| value.eq_ignore_ascii_case("json"))
}

/// Filter directive for the given configured level and `-v` count.
pub fn filter_directive(configured: &str, verbose: u8) -> String {
    match verbose {
        0 => std::env::var(LOG_ENV)
            .or_else(|_| std::env::var(EnvFilter::DEFAULT_ENV))
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| configured.to_string()),
        1 => "tasktime=debug,warn".to_string(),
        _ => "tasktime=trace,debug".to_string(),
    }
}

/// Install the global subscriber. Later calls are ignored.
pub fn init(configured: &str, verbose: u8) {
    let directive = filter_directive(configured, verbose);
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("warn"));

    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr);
    let _ = if wants_json() {
        builder.json().with_current_span(true).try_init()
    } else {
        builder.with_target(false).try_init()
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_overrides_configured_level() {
        assert_eq!(filter_directive("warn", 1), "tasktime=debug,warn");
        assert_eq!(filter_directive("warn", 3), "tasktime=trace,debug");
    }
}
