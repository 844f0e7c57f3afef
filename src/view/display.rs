//! Time text and colour for the main display.
//!
//! Rendering is a pure function of `current_ms`: the same value always
//! yields the same text and colour.

use eframe::egui::Color32;

// ============================================================================
// Constants
// ============================================================================

/// Sign shown for any negative remaining time.
const NEGATIVE_SIGN: &str = "-";

/// Overtime colour.
pub const NEGATIVE_COLOR: Color32 = Color32::RED;

// ============================================================================
// DisplayColor
// ============================================================================

/// Colour role of the time label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayColor {
    /// The platform's default foreground
    Default,
    /// Red, for overtime
    Negative,
}

impl DisplayColor {
    /// Returns the colour role for `current_ms`.
    pub fn for_ms(current_ms: i64) -> Self {
        if current_ms < 0 {
            Self::Negative
        } else {
            Self::Default
        }
    }

    /// Returns the explicit colour, or `None` for the default foreground.
    pub fn color32(&self) -> Option<Color32> {
        match self {
            Self::Default => None,
            Self::Negative => Some(NEGATIVE_COLOR),
        }
    }
}

// ============================================================================
// DisplayState
// ============================================================================

/// Text and colour to show for one value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayState {
    /// Formatted time, e.g. `-01:05`
    pub text: String,
    /// Colour role
    pub color: DisplayColor,
}

impl DisplayState {
    /// Renders `current_ms`.
    pub fn from_ms(current_ms: i64) -> Self {
        Self {
            text: format_time(current_ms),
            color: DisplayColor::for_ms(current_ms),
        }
    }
}

/// Formats milliseconds as `{sign}{mm}:{ss}`.
///
/// Seconds are truncated toward zero, so `-999` renders as `-00:00`.
/// Minutes are not capped at 59.
pub fn format_time(current_ms: i64) -> String {
    let total_seconds = current_ms.unsigned_abs() / 1000;
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    let sign = if current_ms < 0 { NEGATIVE_SIGN } else { "" };
    format!("{}{:02}:{:02}", sign, minutes, seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_positive() {
        assert_eq!(format_time(10_000), "00:10");
        assert_eq!(format_time(6_000), "00:06");
        assert_eq!(format_time(90_500), "01:30");
    }

    #[test]
    fn test_format_zero() {
        assert_eq!(format_time(0), "00:00");
    }

    #[test]
    fn test_format_truncates_toward_zero() {
        assert_eq!(format_time(999), "00:00");
        assert_eq!(format_time(9_999), "00:09");
        assert_eq!(format_time(-1_999), "-00:01");
    }

    #[test]
    fn test_format_small_negative_keeps_sign() {
        assert_eq!(format_time(-1), "-00:00");
        assert_eq!(format_time(-999), "-00:00");
    }

    #[test]
    fn test_format_negative() {
        assert_eq!(format_time(-2_000), "-00:02");
        assert_eq!(format_time(-65_000), "-01:05");
    }

    #[test]
    fn test_format_minutes_above_59() {
        assert_eq!(format_time(100 * 60 * 1000), "100:00");
    }

    #[test]
    fn test_format_extremes_do_not_panic() {
        assert!(format_time(i64::MIN).starts_with('-'));
        assert!(!format_time(i64::MAX).starts_with('-'));
    }

    #[test]
    fn test_color() {
        assert_eq!(DisplayColor::for_ms(1), DisplayColor::Default);
        assert_eq!(DisplayColor::for_ms(0), DisplayColor::Default);
        assert_eq!(DisplayColor::for_ms(-1), DisplayColor::Negative);
        assert_eq!(DisplayColor::Negative.color32(), Some(Color32::RED));
        assert_eq!(DisplayColor::Default.color32(), None);
    }

    #[test]
    fn test_rendering_is_idempotent() {
        for ms in [-61_001, -1, 0, 1, 59_999] {
            assert_eq!(DisplayState::from_ms(ms), DisplayState::from_ms(ms));
        }
    }
}
