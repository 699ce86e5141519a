//! Kelvin Core: domain layer for the color temperature visualizer.
//!
//! Maps a Kelvin value onto an RGB triple by piecewise-linear interpolation
//! between fixed anchor colors, and derives the display representations
//! (hex, HSV, HSL, normalized linear) from that triple. Everything here is
//! pure; no I/O and no framework dependencies.

pub mod convert;
pub mod presets;
pub mod readout;
pub mod state;
pub mod temperature;

// Re-exports for convenience.
pub use convert::{join_channels, rgb_to_hex, rgb_to_hsl, rgb_to_hsv, rgb_to_linear};
pub use presets::{PRESETS, Preset, find_preset};
pub use readout::ColorReadout;
pub use state::LightState;
pub use temperature::category::TemperatureCategory;
pub use temperature::interpolate::interpolate_rgb;
pub use temperature::kelvin::{KELVIN_STEP, MAX_KELVIN, MIN_KELVIN, kelvin_to_rgb};

/// An 8-bit RGB triple in `[red, green, blue]` order.
pub type Rgb = [u8; 3];
