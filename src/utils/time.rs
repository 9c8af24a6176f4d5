//! Playback clock utilities for pulpit
//!
//! This module provides functions for formatting and parsing the clock
//! strings shown next to the playback controls.

/// Formats a position in seconds as a playback clock
///
/// The format is `minutes:seconds` with seconds zero-padded to two digits.
/// Fractional seconds are floor-truncated, never rounded.
///
/// # Arguments
/// * `seconds` - Position in seconds
///
/// # Returns
/// Returns the formatted clock string
pub fn format_playback_clock(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    };
    let minutes = total / 60;
    let secs = total % 60;
    format!("{minutes}:{secs:02}")
}

/// Parses a clock string to seconds
///
/// Supports `MM:SS`, `HH:MM:SS`, and a bare seconds value, the formats
/// that appear in seeded item durations.
///
/// # Arguments
/// * `clock` - Clock string to parse
///
/// # Returns
/// Returns the position in seconds, or 0 if parsing fails
pub fn parse_clock_string(clock: &str) -> f64 {
    let parts: Vec<&str> = clock.split(':').collect();
    match parts.len() {
        3 => {
            let hours: f64 = parts[0].parse().unwrap_or(0.0);
            let minutes: f64 = parts[1].parse().unwrap_or(0.0);
            let seconds: f64 = parts[2].parse().unwrap_or(0.0);
            hours * 3600.0 + minutes * 60.0 + seconds
        }
        2 => {
            let minutes: f64 = parts[0].parse().unwrap_or(0.0);
            let seconds: f64 = parts[1].parse().unwrap_or(0.0);
            minutes * 60.0 + seconds
        }
        1 => parts[0].parse().unwrap_or(0.0),
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_playback_clock() {
        assert_eq!(format_playback_clock(0.0), "0:00");
        assert_eq!(format_playback_clock(59.0), "0:59");
        assert_eq!(format_playback_clock(60.0), "1:00");
        assert_eq!(format_playback_clock(125.0), "2:05");
        assert_eq!(format_playback_clock(2730.0), "45:30");
    }

    #[test]
    fn test_format_playback_clock_truncates() {
        // Floor truncation, never rounding up
        assert_eq!(format_playback_clock(59.9), "0:59");
        assert_eq!(format_playback_clock(125.999), "2:05");
    }

    #[test]
    fn test_format_playback_clock_degenerate() {
        assert_eq!(format_playback_clock(-3.0), "0:00");
        assert_eq!(format_playback_clock(f64::NAN), "0:00");
    }

    #[test]
    fn test_parse_clock_string() {
        assert_eq!(parse_clock_string("45:30"), 2730.0);
        assert_eq!(parse_clock_string("1:02:03"), 3723.0);
        assert_eq!(parse_clock_string("90"), 90.0);
        assert_eq!(parse_clock_string("Unknown"), 0.0);
    }

    #[test]
    fn test_clock_round_trip() {
        assert_eq!(format_playback_clock(parse_clock_string("38:15")), "38:15");
    }
}
