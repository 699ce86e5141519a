//! Plain-text rendering of readouts and tables.

use std::fmt::Write;

use kelvin_core::{ColorReadout, LightState, Preset, TemperatureCategory, join_channels};

/// Shown under the preset table.
const PRESET_NOTE: &str = "Note: recommended settings for 3D rendering software are \
Intensity 1.0 and Falloff 2.0 (quadratic). Adjust radius as needed.";

/// Labelled readout of the current light, followed by the category ranges.
pub fn render_state(state: &LightState) -> String {
    let readout = state.readout();
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{:<12}{}K ({})",
        "Temperature",
        readout.kelvin,
        state.category()
    );
    if let Some(name) = state.preset() {
        let _ = writeln!(out, "{:<12}{name}", "Preset");
    }
    let rows = [
        ("RGB", join_channels(&readout.rgb)),
        ("HEX", readout.hex.clone()),
        ("HSV", join_channels(&readout.hsv)),
        ("HSL", join_channels(&readout.hsl)),
        ("Linear", join_channels(&readout.linear)),
    ];
    for (label, value) in rows {
        let _ = writeln!(out, "{label:<12}{value}");
    }

    out.push('\n');
    let ranges: Vec<String> = TemperatureCategory::all()
        .iter()
        .map(|c| format!("{}: {}", c.label(), c.reference_range()))
        .collect();
    out.push_str(&ranges.join("\n"));
    out
}

/// The preset table with its footnote.
pub fn render_presets(presets: &[Preset]) -> String {
    let name_width = presets
        .iter()
        .map(|p| p.name.len())
        .max()
        .unwrap_or(0)
        .max("Name".len());

    let mut out = String::new();
    let _ = writeln!(out, "{:<name_width$}  {:>11}  RGB", "Name", "Temperature");
    for preset in presets {
        let _ = writeln!(
            out,
            "{:<name_width$}  {:>11}  {}",
            preset.name,
            format!("{}K", preset.kelvin),
            preset.rgb_string()
        );
    }
    out.push('\n');
    out.push_str(PRESET_NOTE);
    out
}

/// One row per readout.
pub fn render_sweep(readouts: &[ColorReadout]) -> String {
    let mut out = String::new();
    let _ = write!(
        out,
        "{:>6}  {:<7}  {:<13}  {:<13}  {:<13}  Linear",
        "Kelvin", "HEX", "RGB", "HSV", "HSL"
    );
    for r in readouts {
        let _ = write!(
            out,
            "\n{:>6}  {:<7}  {:<13}  {:<13}  {:<13}  {}",
            format!("{}K", r.kelvin),
            r.hex,
            join_channels(&r.rgb),
            join_channels(&r.hsv),
            join_channels(&r.hsl),
            join_channels(&r.linear)
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use kelvin_core::{PRESETS, find_preset};

    #[test]
    fn test_render_state_lists_every_representation() {
        let text = render_state(&LightState::new(4000));
        let expected = "\
Temperature 4000K (Daylight)
RGB         255, 201, 113
HEX         #ffc971
HSV         37, 56, 100
HSL         37, 100, 72
Linear      1.000, 0.788, 0.443

Warm White: 2000K - 3500K
Daylight: 4000K - 5500K
Cool White: 6000K - 10000K";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_render_state_names_preset() {
        let mut state = LightState::default();
        state.select_preset(find_preset("candle").expect("preset exists"));
        let text = render_state(&state);
        assert!(text.contains("Preset      Candle\n"), "{text}");
        assert!(text.contains("HEX         #ff9329\n"), "{text}");
        assert!(text.starts_with("Temperature 2000K (Warm White)\n"), "{text}");
    }

    #[test]
    fn test_render_presets_has_row_per_preset() {
        let text = render_presets(PRESETS);
        let lines: Vec<&str> = text.lines().collect();
        // Header, rows, blank line, note.
        assert_eq!(lines.len(), PRESETS.len() + 3);
        assert!(lines[0].starts_with("Name "));
        assert!(lines[1].starts_with("Candle "));
        assert!(lines[1].ends_with("2000K  255, 147, 41"), "{}", lines[1]);
        assert!(lines[lines.len() - 1].starts_with("Note:"));
    }

    #[test]
    fn test_render_sweep_rows() {
        let readouts = [ColorReadout::from_kelvin(2000), ColorReadout::from_kelvin(10000)];
        let text = render_sweep(&readouts);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].contains("#ff8c00"));
        assert!(lines[2].starts_with("10000K  #c8dcff"), "{}", lines[2]);
    }
}
