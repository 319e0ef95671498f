//! Clock and indicator formatting for the session view.
//!
//! Countdowns are shown as `MM:SS`. Minutes are zero-padded to two digits
//! but are not wrapped into hours, so a three-hour focus block reads
//! `180:00` rather than `03:00:00`.
//!
//! ## Examples
//!
//! ```rust
//! use pomo::libs::formatter::{format_clock, format_cycle_dots};
//!
//! assert_eq!(format_clock(1500), "25:00");
//! assert_eq!(format_clock(59), "00:59");
//! assert_eq!(format_cycle_dots(1, 4), "●○○○");
//! ```

use chrono::Duration;

pub const FILLED_DOT: char = '●';
pub const EMPTY_DOT: char = '○';

/// Formats a number of seconds as `MM:SS`.
pub fn format_clock(total_seconds: u32) -> String {
    format_clock_duration(&Duration::seconds(i64::from(total_seconds)))
}

/// Formats a `chrono::Duration` as `MM:SS`.
///
/// Negative durations are shown as `00:00`.
pub fn format_clock_duration(duration: &Duration) -> String {
    let minutes = duration.num_minutes();
    let seconds = duration.num_seconds() % 60;
    format!("{:02}:{:02}", minutes.max(0), seconds.max(0))
}

/// Renders `cycles` dots with the first `filled` drawn solid.
pub fn format_cycle_dots(filled: u32, cycles: u32) -> String {
    (0..cycles).map(|i| if i < filled { FILLED_DOT } else { EMPTY_DOT }).collect()
}

/// Formats a minute count for tables and prompts, e.g. `25 min`.
pub fn format_minutes(minutes: u32) -> String {
    format!("{} min", minutes)
}
