//! RGB to HSV.

use crate::Rgb;
use crate::convert::{Dominant, normalize, percent};

/// Convert to `[hue°, saturation%, value%]`, each rounded to an integer.
///
/// Hue uses the six-sector formula keyed on the dominant channel:
///
/// ```text
/// red   → 60 × (((g − b) / Δ) mod 6)
/// green → 60 × (((b − r) / Δ) + 2)
/// blue  → 60 × (((r − g) / Δ) + 4)
/// ```
///
/// Negative hues are wrapped by adding 360. Achromatic input (Δ = 0) has
/// hue 0; black has saturation 0. Rounding happens last, so a hue just
/// under 360 reads as 360.
pub fn rgb_to_hsv(rgb: Rgb) -> [u16; 3] {
    let [r, g, b] = normalize(rgb);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let mut hue = if delta == 0.0 {
        0.0
    } else {
        match Dominant::of(rgb) {
            Dominant::Red => 60.0 * (((g - b) / delta) % 6.0),
            Dominant::Green => 60.0 * (((b - r) / delta) + 2.0),
            Dominant::Blue => 60.0 * (((r - g) / delta) + 4.0),
        }
    };
    if hue < 0.0 {
        hue += 360.0;
    }

    let saturation = if max == 0.0 { 0.0 } else { delta / max };

    [hue.round() as u16, percent(saturation), percent(max)]
}
