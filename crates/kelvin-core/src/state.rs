//! Current light selection: a temperature slider plus optional preset.

use serde::Serialize;

use crate::Rgb;
use crate::presets::Preset;
use crate::readout::ColorReadout;
use crate::temperature::category::TemperatureCategory;
use crate::temperature::kelvin::{KELVIN_STEP, MAX_KELVIN, MIN_KELVIN, kelvin_to_rgb};

/// Temperature selected when nothing else has been chosen.
pub const DEFAULT_KELVIN: u32 = 4000;

/// The single source of truth for what light is currently shown.
///
/// Moving the slider recomputes the color from the temperature. Selecting a
/// preset adopts both its temperature and its reference color, so `rgb` is
/// not always `kelvin_to_rgb(kelvin)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LightState {
    kelvin: u32,
    rgb: Rgb,
    preset: Option<&'static str>,
}

impl LightState {
    /// State at `kelvin`, clamped to the supported domain.
    pub fn new(kelvin: u32) -> Self {
        let kelvin = kelvin.clamp(MIN_KELVIN, MAX_KELVIN);
        Self {
            kelvin,
            rgb: kelvin_to_rgb(f64::from(kelvin)),
            preset: None,
        }
    }

    /// Selected temperature.
    pub fn kelvin(&self) -> u32 {
        self.kelvin
    }

    /// Displayed color.
    pub fn rgb(&self) -> Rgb {
        self.rgb
    }

    /// Name of the preset the color came from, if any.
    pub fn preset(&self) -> Option<&'static str> {
        self.preset
    }

    /// Category of the selected temperature.
    pub fn category(&self) -> TemperatureCategory {
        TemperatureCategory::from_kelvin(f64::from(self.kelvin))
    }

    /// Move the slider to `kelvin`. Clears any preset selection.
    pub fn set_kelvin(&mut self, kelvin: u32) {
        let clamped = kelvin.clamp(MIN_KELVIN, MAX_KELVIN);
        if clamped != kelvin {
            tracing::debug!("kelvin {kelvin} clamped to {clamped}");
        }
        self.kelvin = clamped;
        self.rgb = kelvin_to_rgb(f64::from(clamped));
        self.preset = None;
        tracing::debug!("kelvin set to {}K, rgb={:?}", self.kelvin, self.rgb);
    }

    /// Move the slider by `steps` increments of [`KELVIN_STEP`].
    /// Negative steps warm the light, positive steps cool it.
    pub fn nudge(&mut self, steps: i32) {
        let delta = i64::from(steps) * i64::from(KELVIN_STEP);
        let target = (i64::from(self.kelvin) + delta)
            .clamp(i64::from(MIN_KELVIN), i64::from(MAX_KELVIN));
        // Clamped into the u32 domain above.
        self.set_kelvin(target as u32);
    }

    /// Show a preset: its temperature and its reference color.
    pub fn select_preset(&mut self, preset: &'static Preset) {
        self.kelvin = preset.kelvin;
        self.rgb = preset.rgb;
        self.preset = Some(preset.name);
        tracing::debug!("preset {:?} selected ({}K)", preset.name, preset.kelvin);
    }

    /// Every representation of the current color.
    pub fn readout(&self) -> ColorReadout {
        ColorReadout::new(self.kelvin, self.rgb)
    }
}

impl Default for LightState {
    fn default() -> Self {
        Self::new(DEFAULT_KELVIN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presets::find_preset;

    #[test]
    fn test_default_state() {
        let state = LightState::default();
        assert_eq!(state.kelvin(), 4000);
        assert_eq!(state.rgb(), [255, 201, 113]);
        assert_eq!(state.preset(), None);
        assert_eq!(state.category(), TemperatureCategory::Daylight);
    }

    #[test]
    fn test_set_kelvin_clamps() {
        let mut state = LightState::default();
        state.set_kelvin(500);
        assert_eq!(state.kelvin(), MIN_KELVIN);
        assert_eq!(state.rgb(), [255, 140, 0]);
        state.set_kelvin(50_000);
        assert_eq!(state.kelvin(), MAX_KELVIN);
        assert_eq!(state.rgb(), [200, 220, 255]);
    }

    #[test]
    fn test_nudge_moves_by_steps_and_saturates() {
        let mut state = LightState::new(5000);
        state.nudge(5);
        assert_eq!(state.kelvin(), 5500);
        assert_eq!(state.rgb(), [255, 255, 224]);
        state.nudge(-2);
        assert_eq!(state.kelvin(), 5300);
        state.nudge(i32::MIN);
        assert_eq!(state.kelvin(), MIN_KELVIN);
        state.nudge(i32::MAX);
        assert_eq!(state.kelvin(), MAX_KELVIN);
    }

    #[test]
    fn test_select_preset_uses_reference_color() {
        let candle = find_preset("Candle").expect("preset exists");
        let mut state = LightState::default();
        state.select_preset(candle);
        assert_eq!(state.kelvin(), 2000);
        assert_eq!(state.rgb(), [255, 147, 41]);
        assert_ne!(state.rgb(), kelvin_to_rgb(2000.0));
        assert_eq!(state.preset(), Some("Candle"));
    }

    #[test]
    fn test_slider_clears_preset() {
        let mut state = LightState::default();
        state.select_preset(&crate::PRESETS[7]);
        state.nudge(1);
        assert_eq!(state.preset(), None);
        assert_eq!(state.rgb(), kelvin_to_rgb(6600.0));
    }

    #[test]
    fn test_readout_tracks_state() {
        let mut state = LightState::default();
        state.set_kelvin(2000);
        let readout = state.readout();
        assert_eq!(readout.kelvin, 2000);
        assert_eq!(readout.hex, "#ff8c00");
    }
}
