//! core/time.rs
//! Millisecond -> "MM:SS" label formatting.

/// `65_000` -> `"01:05"`. Minutes are not wrapped into hours, so an
/// hour-long position renders as `"60:00"`.
pub fn format_time(millis: u64) -> String {
    let total_seconds = millis / 1000;
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{minutes:02}:{seconds:02}")
}

#[cfg(test)]
mod tests {
    use super::format_time;

    #[test]
    fn test_format_time_known_values() {
        assert_eq!(format_time(0), "00:00");
        assert_eq!(format_time(65_000), "01:05");
        assert_eq!(format_time(3_599_000), "59:59");
    }

    #[test]
    fn test_format_time_truncates_partial_seconds() {
        assert_eq!(format_time(999), "00:00");
        assert_eq!(format_time(59_999), "00:59");
        assert_eq!(format_time(60_000), "01:00");
    }

    #[test]
    fn test_format_time_minutes_are_unbounded() {
        assert_eq!(format_time(3_600_000), "60:00");
        assert_eq!(format_time(6_000_000), "100:00");
    }
}
