//! `kelvin`, the terminal front end for the Kelvin light visualizer.
//!
//! Parses a subcommand, drives a [`LightState`], and prints either a text
//! readout or the JSON export bundle.

mod args;
mod config;
mod error;
mod render;

use std::process::ExitCode;

use kelvin_core::{ColorReadout, LightState, MAX_KELVIN, MIN_KELVIN, PRESETS, find_preset};
use tracing_subscriber::EnvFilter;

use crate::args::{Command, USAGE, parse_args};
use crate::config::CliConfig;
use crate::error::CliError;

fn main() -> ExitCode {
    let config = CliConfig::default();
    init_tracing(&config);

    let output = parse_args(std::env::args().skip(1), &config).and_then(run);
    match output {
        Ok(text) => {
            println!("{text}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::debug!("command failed: {e:?}");
            eprintln!("error: {e}\n\n{USAGE}");
            ExitCode::from(2)
        }
    }
}

fn init_tracing(config: &CliConfig) {
    let filter = EnvFilter::try_new(&config.log_filter).unwrap_or_else(|e| {
        eprintln!("ignoring invalid KELVIN_LOG {:?}: {e}", config.log_filter);
        EnvFilter::new("warn")
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Execute a parsed command and return what should be printed.
fn run(command: Command) -> Result<String, CliError> {
    match command {
        Command::Show {
            kelvin,
            nudge,
            json,
        } => {
            let mut state = LightState::default();
            state.set_kelvin(kelvin);
            if state.kelvin() != kelvin {
                tracing::info!(
                    "{kelvin}K is outside {MIN_KELVIN}K..{MAX_KELVIN}K, showing {}K",
                    state.kelvin()
                );
            }
            if nudge != 0 {
                state.nudge(nudge);
            }
            emit(&state, json)
        }
        Command::Preset { name, json } => {
            let preset = find_preset(&name).ok_or(CliError::UnknownPreset(name))?;
            let mut state = LightState::default();
            state.select_preset(preset);
            emit(&state, json)
        }
        Command::Presets { json } => {
            if json {
                Ok(serde_json::to_string_pretty(PRESETS)?)
            } else {
                Ok(render::render_presets(PRESETS))
            }
        }
        Command::Sweep { step, json } => {
            let readouts: Vec<ColorReadout> = (MIN_KELVIN..=MAX_KELVIN)
                .step_by(step as usize)
                .map(ColorReadout::from_kelvin)
                .collect();
            tracing::info!("sweep produced {} readouts", readouts.len());
            if json {
                Ok(serde_json::to_string_pretty(&readouts)?)
            } else {
                Ok(render::render_sweep(&readouts))
            }
        }
        Command::Help => Ok(USAGE.to_string()),
    }
}

fn emit(state: &LightState, json: bool) -> Result<String, CliError> {
    if json {
        Ok(state.readout().to_json()?)
    } else {
        Ok(render::render_state(state))
    }
}
