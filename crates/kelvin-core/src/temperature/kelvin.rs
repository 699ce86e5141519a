//! Kelvin to RGB mapping.
//!
//! The visible domain is split into three contiguous segments, each a linear
//! blend between two anchor colors. Neighbouring segments share their
//! boundary anchor, so the mapping is continuous at 3500K and 5500K.
//!
//! This is a hand-tuned approximation for display purposes, not a
//! black-body (Planckian) model.

use crate::Rgb;
use crate::temperature::interpolate::interpolate_rgb;

/// Lowest supported color temperature. Smaller inputs are clamped.
pub const MIN_KELVIN: u32 = 2000;
/// Highest supported color temperature. Larger inputs are clamped.
pub const MAX_KELVIN: u32 = 10000;
/// Granularity of the temperature slider.
pub const KELVIN_STEP: u32 = 100;

/// Deep orange at 2000K.
pub const ANCHOR_WARM: Rgb = [255, 140, 0];
/// Amber at the warm/mid boundary (3500K).
pub const ANCHOR_AMBER: Rgb = [255, 183, 76];
/// Pale yellow-white at the mid/cool boundary (5500K).
pub const ANCHOR_NEUTRAL: Rgb = [255, 255, 224];
/// Sky blue at 10000K.
pub const ANCHOR_COOL: Rgb = [200, 220, 255];

/// One interpolation segment `(start, end]` of the Kelvin domain.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Segment {
    start: f64,
    end: f64,
    from: Rgb,
    to: Rgb,
}

impl Segment {
    fn factor(&self, kelvin: f64) -> f64 {
        (kelvin - self.start) / (self.end - self.start)
    }
}

/// Segments ordered by upper bound. The first segment also owns its
/// lower bound (2000K).
const SEGMENTS: [Segment; 3] = [
    Segment {
        start: 2000.0,
        end: 3500.0,
        from: ANCHOR_WARM,
        to: ANCHOR_AMBER,
    },
    Segment {
        start: 3500.0,
        end: 5500.0,
        from: ANCHOR_AMBER,
        to: ANCHOR_NEUTRAL,
    },
    Segment {
        start: 5500.0,
        end: 10000.0,
        from: ANCHOR_NEUTRAL,
        to: ANCHOR_COOL,
    },
];

/// Clamp a Kelvin value into `[MIN_KELVIN, MAX_KELVIN]`.
///
/// NaN is treated as the low end of the domain.
pub fn clamp_kelvin(kelvin: f64) -> f64 {
    if kelvin.is_nan() {
        return f64::from(MIN_KELVIN);
    }
    kelvin.clamp(f64::from(MIN_KELVIN), f64::from(MAX_KELVIN))
}

/// Map a color temperature to an RGB triple.
///
/// Total over all inputs: out-of-range values are clamped rather than
/// rejected.
///
/// | Kelvin            | from              | to                |
/// |-------------------|-------------------|-------------------|
/// | 2000 ..= 3500     | `[255, 140, 0]`   | `[255, 183, 76]`  |
/// | 3500 <.. 5500     | `[255, 183, 76]`  | `[255, 255, 224]` |
/// | 5500 <.. 10000    | `[255, 255, 224]` | `[200, 220, 255]` |
pub fn kelvin_to_rgb(kelvin: f64) -> Rgb {
    let kelvin = clamp_kelvin(kelvin);
    let segment = SEGMENTS
        .iter()
        .find(|s| kelvin <= s.end)
        .unwrap_or(&SEGMENTS[SEGMENTS.len() - 1]);
    interpolate_rgb(segment.from, segment.to, segment.factor(kelvin))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_endpoints() {
        assert_eq!(kelvin_to_rgb(2000.0), ANCHOR_WARM);
        assert_eq!(kelvin_to_rgb(10000.0), ANCHOR_COOL);
    }

    #[test]
    fn test_segment_boundaries_hit_shared_anchors() {
        assert_eq!(kelvin_to_rgb(3500.0), ANCHOR_AMBER);
        assert_eq!(kelvin_to_rgb(5500.0), ANCHOR_NEUTRAL);
    }

    #[test]
    fn test_segments_are_contiguous() {
        for pair in SEGMENTS.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
            assert_eq!(pair[0].to, pair[1].from);
        }
        assert_eq!(SEGMENTS[0].start, f64::from(MIN_KELVIN));
        assert_eq!(SEGMENTS[2].end, f64::from(MAX_KELVIN));
    }

    #[test]
    fn test_interior_values() {
        assert_eq!(kelvin_to_rgb(2750.0), [255, 162, 38]);
        assert_eq!(kelvin_to_rgb(3000.0), [255, 169, 51]);
        assert_eq!(kelvin_to_rgb(4000.0), [255, 201, 113]);
        assert_eq!(kelvin_to_rgb(5000.0), [255, 237, 187]);
        assert_eq!(kelvin_to_rgb(6500.0), [243, 247, 231]);
        assert_eq!(kelvin_to_rgb(7500.0), [231, 239, 238]);
    }

    #[test]
    fn test_out_of_range_is_clamped() {
        assert_eq!(kelvin_to_rgb(0.0), kelvin_to_rgb(2000.0));
        assert_eq!(kelvin_to_rgb(-500.0), kelvin_to_rgb(2000.0));
        assert_eq!(kelvin_to_rgb(40000.0), kelvin_to_rgb(10000.0));
        assert_eq!(kelvin_to_rgb(f64::INFINITY), ANCHOR_COOL);
        assert_eq!(kelvin_to_rgb(f64::NEG_INFINITY), ANCHOR_WARM);
    }

    #[test]
    fn test_nan_maps_to_warm_end() {
        assert_eq!(clamp_kelvin(f64::NAN), 2000.0);
        assert_eq!(kelvin_to_rgb(f64::NAN), ANCHOR_WARM);
    }

    #[test]
    fn test_fractional_kelvin() {
        // Just past the boundary still rounds onto the shared anchor.
        assert_eq!(kelvin_to_rgb(3500.5), ANCHOR_AMBER);
    }
}
