//! Sticker color classification from mean HSV.
//!
//! Rules are evaluated top to bottom and the first match wins. Hue is on the
//! 0-180 scale, saturation and value on 0-255.

use super::hsv::Hsv;
use crate::cube::Color;

/// Saturation above which a patch counts as chromatic.
const MIN_CHROMA_SATURATION: f32 = 100.0;

/// A single threshold rule.
struct ColorRule {
    color: Color,
    matches: fn(&Hsv) -> bool,
}

const RULES: [ColorRule; 6] = [
    // Low saturation with high brightness
    ColorRule {
        color: Color::White,
        matches: |p| p.s < 50.0 && p.v > 150.0,
    },
    ColorRule {
        color: Color::Yellow,
        matches: |p| (20.0..=35.0).contains(&p.h) && p.s > MIN_CHROMA_SATURATION,
    },
    ColorRule {
        color: Color::Orange,
        matches: |p| (10.0..20.0).contains(&p.h) && p.s > MIN_CHROMA_SATURATION,
    },
    // Red wraps around both ends of the hue circle
    ColorRule {
        color: Color::Red,
        matches: |p| (p.h < 10.0 || p.h > 170.0) && p.s > MIN_CHROMA_SATURATION,
    },
    ColorRule {
        color: Color::Green,
        matches: |p| (35.0..85.0).contains(&p.h) && p.s > MIN_CHROMA_SATURATION,
    },
    ColorRule {
        color: Color::Blue,
        matches: |p| (85.0..130.0).contains(&p.h) && p.s > MIN_CHROMA_SATURATION,
    },
];

/// Classifies a mean HSV value. Always returns a label; `Unknown` when no
/// rule matches.
pub fn classify(hsv: &Hsv) -> Color {
    RULES
        .iter()
        .find(|rule| (rule.matches)(hsv))
        .map(|rule| rule.color)
        .unwrap_or(Color::Unknown)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label(h: f32, s: f32, v: f32) -> Color {
        classify(&Hsv::new(h, s, v))
    }

    #[test]
    fn test_typical_sticker_colors() {
        assert_eq!(label(0.0, 10.0, 240.0), Color::White);
        assert_eq!(label(28.0, 200.0, 200.0), Color::Yellow);
        assert_eq!(label(14.0, 220.0, 230.0), Color::Orange);
        assert_eq!(label(3.0, 220.0, 180.0), Color::Red);
        assert_eq!(label(175.0, 220.0, 180.0), Color::Red);
        assert_eq!(label(60.0, 220.0, 150.0), Color::Green);
        assert_eq!(label(110.0, 220.0, 150.0), Color::Blue);
    }

    #[test]
    fn test_unmatched_values_are_unknown() {
        // Dark and unsaturated
        assert_eq!(label(0.0, 10.0, 40.0), Color::Unknown);
        // Purple hue
        assert_eq!(label(150.0, 200.0, 200.0), Color::Unknown);
        // Mid saturation falls between white and chromatic rules
        assert_eq!(label(110.0, 75.0, 200.0), Color::Unknown);
    }

    #[test]
    fn test_range_boundaries() {
        assert_eq!(label(20.0, 150.0, 200.0), Color::Yellow);
        assert_eq!(label(35.0, 150.0, 200.0), Color::Yellow);
        assert_eq!(label(19.9, 150.0, 200.0), Color::Orange);
        assert_eq!(label(10.0, 150.0, 200.0), Color::Orange);
        assert_eq!(label(9.9, 150.0, 200.0), Color::Red);
        assert_eq!(label(170.0, 150.0, 200.0), Color::Unknown);
        assert_eq!(label(84.9, 150.0, 200.0), Color::Green);
        assert_eq!(label(85.0, 150.0, 200.0), Color::Blue);
        assert_eq!(label(130.0, 150.0, 200.0), Color::Unknown);
        assert_eq!(label(110.0, 100.0, 200.0), Color::Unknown);
    }

    #[test]
    fn test_white_takes_priority() {
        // Low saturation wins regardless of hue
        assert_eq!(label(28.0, 49.0, 151.0), Color::White);
        assert_eq!(label(28.0, 49.0, 150.0), Color::Unknown);
    }

    #[test]
    fn test_classification_is_total_and_pure() {
        for h in (0..=180).step_by(5) {
            for s in (0..=255).step_by(15) {
                for v in (0..=255).step_by(15) {
                    let hsv = Hsv::new(h as f32, s as f32, v as f32);
                    assert_eq!(classify(&hsv), classify(&hsv));
                }
            }
        }
    }
}
