//! Coarse naming of a temperature for display.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::temperature::kelvin::clamp_kelvin;

/// Broad lighting category of a color temperature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TemperatureCategory {
    /// 2000K through 3500K.
    WarmWhite,
    /// Above 3500K through 5500K.
    Daylight,
    /// Above 5500K.
    CoolWhite,
}

impl TemperatureCategory {
    /// Categorize a Kelvin value. The input is clamped to the supported
    /// domain first, so anything below 2000K counts as warm.
    pub fn from_kelvin(kelvin: f64) -> Self {
        let kelvin = clamp_kelvin(kelvin);
        if kelvin <= 3500.0 {
            Self::WarmWhite
        } else if kelvin <= 5500.0 {
            Self::Daylight
        } else {
            Self::CoolWhite
        }
    }

    /// Human-readable label for status text.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::WarmWhite => "Warm White",
            Self::Daylight => "Daylight",
            Self::CoolWhite => "Cool White",
        }
    }

    /// Typical temperature range shown alongside the label.
    pub const fn reference_range(&self) -> &'static str {
        match self {
            Self::WarmWhite => "2000K - 3500K",
            Self::Daylight => "4000K - 5500K",
            Self::CoolWhite => "6000K - 10000K",
        }
    }

    /// All categories, warmest first.
    pub fn all() -> &'static [Self] {
        const ALL: [TemperatureCategory; 3] = [
            TemperatureCategory::WarmWhite,
            TemperatureCategory::Daylight,
            TemperatureCategory::CoolWhite,
        ];
        &ALL
    }
}

impl fmt::Display for TemperatureCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
