//! Time formatting helpers for the session view.

/// Format a second count as `MM:SS`.
#[must_use]
pub fn format_mmss(total_seconds: u32) -> String {
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{minutes:02}:{seconds:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_mmss() {
        assert_eq!(format_mmss(0), "00:00");
        assert_eq!(format_mmss(65), "01:05");
        assert_eq!(format_mmss(3599), "59:59");
    }

    #[test]
    fn test_format_mmss_whole_minutes() {
        assert_eq!(format_mmss(25 * 60), "25:00");
        assert_eq!(format_mmss(60), "01:00");
    }
}
