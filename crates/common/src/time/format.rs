//! Human-readable duration formatting
//!
//! Durations are whole seconds rendered as `Ns`, `Mm SSs` or `Hh MMm SSs`.
//! Minutes and seconds are zero-padded once a larger unit is present.

/// Format whole seconds into a human-readable string
///
/// # Examples
///
/// ```
/// use tasktime_common::time::format::format_duration;
///
/// assert_eq!(format_duration(0), "0s");
/// assert_eq!(format_duration(45), "45s");
/// assert_eq!(format_duration(303), "5m 03s");
/// assert_eq!(format_duration(7209), "2h 00m 09s");
/// ```
pub fn format_duration(total_secs: u64) -> String {
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;

    if hours > 0 {
        format!("{hours}h {minutes:02}m {seconds:02}s")
    } else if minutes > 0 {
        format!("{minutes}m {seconds:02}s")
    } else {
        format!("{seconds}s")
    }
}

/// Format a possibly-missing duration in whole seconds
///
/// A missing duration renders as `placeholder`, while an explicit zero still
/// renders as `0s`.
///
/// # Examples
///
/// ```
/// use tasktime_common::time::format::format_optional_duration;
///
/// assert_eq!(format_optional_duration(None, "-"), "-");
/// assert_eq!(format_optional_duration(Some(0), "-"), "0s");
/// assert_eq!(format_optional_duration(Some(61), "-"), "1m 01s");
/// ```
pub fn format_optional_duration(seconds: Option<u64>, placeholder: &str) -> String {
    seconds.map_or_else(|| placeholder.to_string(), format_duration)
}
