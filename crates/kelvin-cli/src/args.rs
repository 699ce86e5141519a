//! Command-line parsing.
//!
//! Hand-rolled: a subcommand, at most one positional argument, and a few
//! flags that may appear anywhere after the subcommand.

use kelvin_core::KELVIN_STEP;

use crate::config::CliConfig;
use crate::error::CliError;

pub const USAGE: &str = "\
Usage:
  kelvin show [KELVIN] [--nudge STEPS] [--json]
  kelvin preset NAME [--json]
  kelvin presets [--json]
  kelvin sweep [--step KELVIN] [--json]
  kelvin help

KELVIN is an integer, optionally suffixed with K (e.g. 6500K). Values
outside 2000K..10000K are clamped. --nudge moves the slider by STEPS
increments of 100K (negative is warmer).

Environment:
  KELVIN_DEFAULT  temperature used by `show` without an argument (4000)
  KELVIN_LOG      log filter directive (warn)";

/// A fully parsed invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Readout for one temperature.
    Show {
        kelvin: u32,
        nudge: i32,
        json: bool,
    },
    /// Readout for a named preset.
    Preset { name: String, json: bool },
    /// The preset table.
    Presets { json: bool },
    /// Readouts across the whole domain.
    Sweep { step: u32, json: bool },
    /// Print usage.
    Help,
}

/// Flags and positionals collected after the subcommand.
#[derive(Debug, Default)]
struct Rest {
    positional: Vec<String>,
    json: bool,
    step: Option<String>,
    nudge: Option<String>,
}

fn collect_rest(mut args: impl Iterator<Item = String>) -> Result<Rest, CliError> {
    let mut rest = Rest::default();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--json" => rest.json = true,
            "--step" => {
                rest.step = Some(args.next().ok_or(CliError::MissingArgument("--step"))?);
            }
            "--nudge" => {
                rest.nudge = Some(args.next().ok_or(CliError::MissingArgument("--nudge"))?);
            }
            _ if is_option(&arg) => return Err(CliError::UnknownOption(arg)),
            _ => rest.positional.push(arg),
        }
    }
    Ok(rest)
}

/// `-5000` is a (negative) value, `-x` is an option.
fn is_option(arg: &str) -> bool {
    arg.starts_with('-') && !arg[1..].starts_with(|c: char| c.is_ascii_digit())
}

impl Rest {
    /// At most one positional argument.
    fn single_positional(&mut self) -> Result<Option<String>, CliError> {
        if self.positional.len() > 1 {
            return Err(CliError::UnexpectedArgument(self.positional.remove(1)));
        }
        Ok(self.positional.pop())
    }

    fn no_positional(&mut self) -> Result<(), CliError> {
        match self.single_positional()? {
            Some(extra) => Err(CliError::UnexpectedArgument(extra)),
            None => Ok(()),
        }
    }

    fn reject_step(&self) -> Result<(), CliError> {
        match &self.step {
            Some(_) => Err(CliError::UnknownOption("--step".to_string())),
            None => Ok(()),
        }
    }

    fn reject_nudge(&self) -> Result<(), CliError> {
        match &self.nudge {
            Some(_) => Err(CliError::UnknownOption("--nudge".to_string())),
            None => Ok(()),
        }
    }
}

/// Parse a temperature such as `6500`, `6500K` or `-200`.
///
/// Range is not checked here; negative and oversized values saturate so
/// the light state can clamp them.
pub fn parse_kelvin(text: &str) -> Result<u32, CliError> {
    let digits = text.trim().trim_end_matches(['K', 'k']);
    let value: i64 = digits
        .parse()
        .map_err(|_| CliError::InvalidKelvin(text.to_string()))?;
    Ok(u32::try_from(value.max(0)).unwrap_or(u32::MAX))
}

fn parse_step(text: &str) -> Result<u32, CliError> {
    match parse_kelvin(text) {
        Ok(step) if step > 0 => Ok(step),
        _ => Err(CliError::InvalidStep(text.to_string())),
    }
}

fn parse_nudge(text: &str) -> Result<i32, CliError> {
    text.trim()
        .parse()
        .map_err(|_| CliError::InvalidKelvin(text.to_string()))
}

/// Parse the arguments that follow the program name.
pub fn parse_args<I>(args: I, config: &CliConfig) -> Result<Command, CliError>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let Some(command) = args.next() else {
        return Ok(Command::Help);
    };

    let mut rest = collect_rest(args)?;
    match command.as_str() {
        "show" => {
            rest.reject_step()?;
            let kelvin = match rest.single_positional()? {
                Some(text) => parse_kelvin(&text)?,
                None => config.default_kelvin,
            };
            let nudge = rest.nudge.as_deref().map(parse_nudge).transpose()?;
            Ok(Command::Show {
                kelvin,
                nudge: nudge.unwrap_or(0),
                json: rest.json,
            })
        }
        "preset" => {
            rest.reject_step()?;
            rest.reject_nudge()?;
            // Preset names contain spaces; accept them unquoted.
            if rest.positional.is_empty() {
                return Err(CliError::MissingArgument("preset name"));
            }
            Ok(Command::Preset {
                name: rest.positional.join(" "),
                json: rest.json,
            })
        }
        "presets" => {
            rest.reject_step()?;
            rest.reject_nudge()?;
            rest.no_positional()?;
            Ok(Command::Presets { json: rest.json })
        }
        "sweep" => {
            rest.reject_nudge()?;
            rest.no_positional()?;
            let step = match rest.step.as_deref() {
                Some(text) => parse_step(text)?,
                None => KELVIN_STEP,
            };
            Ok(Command::Sweep {
                step,
                json: rest.json,
            })
        }
        "help" | "--help" | "-h" => Ok(Command::Help),
        _ => Err(CliError::UnknownCommand(command)),
    }
}
