//! Normalized channel readout.

use crate::Rgb;
use crate::convert::normalize;

/// Each channel over 255, formatted with exactly three decimals.
///
/// Strings rather than floats: the fixed width is part of the readout.
pub fn rgb_to_linear(rgb: Rgb) -> [String; 3] {
    normalize(rgb).map(|c| format!("{c:.3}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_fixed_precision() {
        assert_eq!(rgb_to_linear([255, 0, 128]), ["1.000", "0.000", "0.502"]);
        assert_eq!(rgb_to_linear([64, 156, 255]), ["0.251", "0.612", "1.000"]);
    }
}
