//! Named reference lighting conditions.
//!
//! Preset colors are reference measurements for each light source. They are
//! not produced by [`kelvin_to_rgb`](crate::kelvin_to_rgb) and generally
//! differ from the interpolated color at the same temperature.

use serde::Serialize;

use crate::Rgb;
use crate::convert::join_channels;

/// A named light source with its temperature and reference color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Preset {
    /// Display name, unique within [`PRESETS`].
    pub name: &'static str,
    /// Nominal color temperature.
    pub kelvin: u32,
    /// Reference color.
    pub rgb: Rgb,
}

impl Preset {
    const fn new(name: &'static str, kelvin: u32, rgb: Rgb) -> Self {
        Self { name, kelvin, rgb }
    }

    /// Channels as `"r, g, b"`.
    pub fn rgb_string(&self) -> String {
        join_channels(&self.rgb)
    }
}

/// Built-in presets in table order.
pub const PRESETS: &[Preset] = &[
    Preset::new("Candle", 2000, [255, 147, 41]),
    Preset::new("40W Tungsten", 2500, [255, 197, 143]),
    Preset::new("100W Tungsten", 2800, [255, 214, 170]),
    Preset::new("Halogen", 3200, [255, 241, 224]),
    Preset::new("Carbon Arc", 3500, [255, 250, 244]),
    Preset::new("High Noon Sun", 5500, [255, 255, 251]),
    Preset::new("Direct Sunlight", 6000, [255, 255, 255]),
    Preset::new("Overcast Sky", 6500, [201, 226, 255]),
    Preset::new("Clear Blue Sky", 7500, [64, 156, 255]),
    Preset::new("Warm Fluorescent", 3000, [255, 244, 229]),
    Preset::new("Standard Fluorescent", 4000, [244, 255, 250]),
    Preset::new("Cool White Fluorescent", 5000, [212, 235, 255]),
    Preset::new("Full Spectrum Fluorescent", 4200, [255, 244, 242]),
    Preset::new("Grow Light Fluorescent", 3500, [255, 239, 247]),
    Preset::new("Black Light Fluorescent", 3700, [167, 0, 255]),
    Preset::new("Mercury Vapor", 6000, [216, 247, 255]),
    Preset::new("Sodium Vapor", 2200, [255, 209, 178]),
    Preset::new("Metal Halide", 4200, [242, 252, 255]),
    Preset::new("High Pressure Sodium", 2100, [255, 183, 76]),
];

/// Look up a preset by name, ignoring ASCII case and surrounding whitespace.
pub fn find_preset(name: &str) -> Option<&'static Preset> {
    let name = name.trim();
    PRESETS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}
