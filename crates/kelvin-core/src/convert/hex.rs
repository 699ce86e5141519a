//! `#rrggbb` formatting.

use crate::Rgb;

/// Format as a lowercase, zero-padded `#rrggbb` string.
pub fn rgb_to_hex(rgb: Rgb) -> String {
    let [r, g, b] = rgb;
    format!("#{r:02x}{g:02x}{b:02x}")
}
