//! Dynamic font sizing for the time display.

/// Smallest point size the display ever uses.
pub const MIN_FONT_POINTS: u32 = 20;

/// Share of the window height the digits may take.
const HEIGHT_FACTOR: f32 = 0.50;

/// Width divisor; roughly the character count of `-00:00` at this font.
const WIDTH_DIVISOR: f32 = 4.5;

/// Computes the display font size for a window of `width` × `height`.
///
/// `min(⌊0.5·height⌋, ⌊width / 4.5⌋)`, never below [`MIN_FONT_POINTS`].
pub fn font_point_size(width: f32, height: f32) -> u32 {
    let by_height = (height * HEIGHT_FACTOR).floor();
    let by_width = (width / WIDTH_DIVISOR).floor();
    let size = by_height.min(by_width);

    if size.is_nan() || size < MIN_FONT_POINTS as f32 {
        MIN_FONT_POINTS
    } else {
        size as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_window() {
        assert_eq!(font_point_size(600.0, 400.0), 133);
    }

    #[test]
    fn test_width_bound() {
        assert_eq!(font_point_size(1200.0, 800.0), 266);
    }

    #[test]
    fn test_height_bound() {
        assert_eq!(font_point_size(1920.0, 300.0), 150);
    }

    #[test]
    fn test_small_window() {
        assert_eq!(font_point_size(100.0, 100.0), 22);
    }

    #[test]
    fn test_clamped_at_minimum() {
        assert_eq!(font_point_size(50.0, 20.0), MIN_FONT_POINTS);
        assert_eq!(font_point_size(0.0, 0.0), MIN_FONT_POINTS);
        assert_eq!(font_point_size(-10.0, 500.0), MIN_FONT_POINTS);
        assert_eq!(font_point_size(f32::NAN, f32::NAN), MIN_FONT_POINTS);
    }

    #[test]
    fn test_monotonic_in_width_and_height() {
        let sizes = [0.0_f32, 37.0, 90.0, 100.0, 250.0, 400.0, 799.5, 1200.0, 3840.0];
        for &h in &sizes {
            let mut prev = 0;
            for &w in &sizes {
                let size = font_point_size(w, h);
                assert!(size >= prev, "not monotonic in width at {}x{}", w, h);
                prev = size;
            }
        }
        for &w in &sizes {
            let mut prev = 0;
            for &h in &sizes {
                let size = font_point_size(w, h);
                assert!(size >= prev, "not monotonic in height at {}x{}", w, h);
                prev = size;
            }
        }
    }
}
