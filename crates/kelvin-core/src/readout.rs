//! Export bundle of every representation of one light color.

use serde::{Deserialize, Serialize};

use crate::Rgb;
use crate::convert::{rgb_to_hex, rgb_to_hsl, rgb_to_hsv, rgb_to_linear};
use crate::temperature::kelvin::kelvin_to_rgb;

/// A color and all of its derived representations.
///
/// Field order is the export order. Every field other than `kelvin` and
/// `rgb` is computed from `rgb`, so a readout is always self-consistent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorReadout {
    /// Temperature the color was selected at.
    pub kelvin: u32,
    /// Source color.
    pub rgb: Rgb,
    /// `#rrggbb`.
    pub hex: String,
    /// `[hue°, saturation%, value%]`.
    pub hsv: [u16; 3],
    /// `[hue°, saturation%, lightness%]`.
    pub hsl: [u16; 3],
    /// Channels over 255 with three decimals.
    pub linear: [String; 3],
}

impl ColorReadout {
    /// Derive every representation of `rgb`.
    pub fn new(kelvin: u32, rgb: Rgb) -> Self {
        Self {
            kelvin,
            rgb,
            hex: rgb_to_hex(rgb),
            hsv: rgb_to_hsv(rgb),
            hsl: rgb_to_hsl(rgb),
            linear: rgb_to_linear(rgb),
        }
    }

    /// Readout for the interpolated color at `kelvin`.
    pub fn from_kelvin(kelvin: u32) -> Self {
        Self::new(kelvin, kelvin_to_rgb(f64::from(kelvin)))
    }

    /// Pretty-printed JSON with two-space indentation.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
