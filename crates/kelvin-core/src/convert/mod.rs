//! Display representations derived from an RGB triple.
//!
//! Every converter is a pure function of its input; nothing is cached.

pub mod hex;
pub mod hsl;
pub mod hsv;
pub mod linear;

use std::fmt::Display;

pub use hex::rgb_to_hex;
pub use hsl::rgb_to_hsl;
pub use hsv::rgb_to_hsv;
pub use linear::rgb_to_linear;

use crate::Rgb;

/// Channel holding the largest value. Ties resolve red, then green, then blue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Dominant {
    Red,
    Green,
    Blue,
}

impl Dominant {
    pub(crate) fn of(rgb: Rgb) -> Self {
        let [r, g, b] = rgb;
        if r >= g && r >= b {
            Self::Red
        } else if g >= b {
            Self::Green
        } else {
            Self::Blue
        }
    }
}

/// Scale 8-bit channels into `[0, 1]`.
pub(crate) fn normalize(rgb: Rgb) -> [f64; 3] {
    rgb.map(|c| f64::from(c) / 255.0)
}

/// Round a unit fraction to a whole percentage.
pub(crate) fn percent(value: f64) -> u16 {
    (value * 100.0).round() as u16
}

/// Join channel values as `"a, b, c"` for display and copying.
pub fn join_channels<T: Display>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
