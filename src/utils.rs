/// Format a playback position as `M:SS`, or `H:MM:SS` for long media.
/// Non-finite inputs render as zero.
pub fn format_timecode(seconds: f64) -> String {
    let total = if seconds.is_finite() {
        seconds.max(0.0).floor() as u64
    } else {
        0
    };
    let secs = total % 60;
    let minutes = (total / 60) % 60;
    let hours = total / 3600;
    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, secs)
    } else {
        format!("{}:{:02}", minutes, secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_timecode() {
        assert_eq!(format_timecode(0.0), "0:00");
        assert_eq!(format_timecode(31.0), "0:31");
        assert_eq!(format_timecode(62.0), "1:02");
    }

    #[test]
    fn test_long_timecode() {
        assert_eq!(format_timecode(3600.0), "1:00:00");
        assert_eq!(format_timecode(3725.4), "1:02:05");
    }

    #[test]
    fn test_negative_clamps_to_zero() {
        assert_eq!(format_timecode(-5.0), "0:00");
    }
}
