//! Linear blending between two RGB anchors.

use crate::Rgb;

/// Blend from `a` toward `b` by `factor`.
///
/// ```text
/// out[i] = round(a[i] + f × (b[i] − a[i]))    with f = clamp(factor, 0, 1)
/// ```
///
/// A factor outside `[0, 1]` saturates at the nearer anchor. The result
/// always lies between `a` and `b` per channel, so it never leaves `0..=255`.
pub fn interpolate_rgb(a: Rgb, b: Rgb, factor: f64) -> Rgb {
    // NaN saturates at `a`.
    let factor = if factor.is_nan() {
        0.0
    } else {
        factor.clamp(0.0, 1.0)
    };

    let mut out = [0_u8; 3];
    for c in 0..3 {
        let from = f64::from(a[c]);
        let to = f64::from(b[c]);
        out[c] = (from + factor * (to - from)).round() as u8;
    }
    out
}
