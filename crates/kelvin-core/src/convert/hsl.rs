//! RGB to HSL.

use crate::Rgb;
use crate::convert::{Dominant, normalize, percent};

/// Convert to `[hue°, saturation%, lightness%]`, each rounded to an integer.
///
/// ```text
/// L = (max + min) / 2
/// S = Δ / (2 − max − min)   if L > 0.5
///     Δ / (max + min)       otherwise
/// ```
///
/// Hue sector offsets are red `+6` (only when g < b), green `+2` and blue
/// `+4`, applied to the channel difference over Δ, then scaled by 60.
/// Achromatic input has hue and saturation 0.
pub fn rgb_to_hsl(rgb: Rgb) -> [u16; 3] {
    let [r, g, b] = normalize(rgb);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let lightness = (max + min) / 2.0;

    let mut hue = 0.0;
    let mut saturation = 0.0;

    if max != min {
        let delta = max - min;
        saturation = if lightness > 0.5 {
            delta / (2.0 - max - min)
        } else {
            delta / (max + min)
        };

        hue = match Dominant::of(rgb) {
            Dominant::Red => (g - b) / delta + if g < b { 6.0 } else { 0.0 },
            Dominant::Green => (b - r) / delta + 2.0,
            Dominant::Blue => (r - g) / delta + 4.0,
        };
        hue *= 60.0;
    }

    [hue.round() as u16, percent(saturation), percent(lightness)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hsl_achromatic() {
        assert_eq!(rgb_to_hsl([255, 255, 255]), [0, 0, 100]);
        assert_eq!(rgb_to_hsl([128, 128, 128]), [0, 0, 50]);
        assert_eq!(rgb_to_hsl([0, 0, 0]), [0, 0, 0]);
    }

    #[test]
    fn test_hsl_primaries() {
        assert_eq!(rgb_to_hsl([255, 0, 0]), [0, 100, 50]);
        assert_eq!(rgb_to_hsl([0, 255, 0]), [120, 100, 50]);
        assert_eq!(rgb_to_hsl([0, 0, 255]), [240, 100, 50]);
    }

    #[test]
    fn test_hsl_red_branch_offset_only_when_green_below_blue() {
        // g < b: offset applies and keeps the hue positive.
        assert_eq!(rgb_to_hsl([255, 0, 128]), [330, 100, 50]);
        // g >= b: no offset.
        assert_eq!(rgb_to_hsl([255, 147, 41]), [30, 100, 58]);
    }

    #[test]
    fn test_hsl_dark_and_light_saturation_branches() {
        assert_eq!(rgb_to_hsl([10, 20, 30]), [210, 50, 8]);
        assert_eq!(rgb_to_hsl([64, 156, 255]), [211, 100, 63]);
        assert_eq!(rgb_to_hsl([200, 50, 100]), [340, 60, 49]);
    }
}
