/// Errors from parsing the command line or producing output.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("invalid kelvin value: {0:?}")]
    InvalidKelvin(String),
    #[error("invalid sweep step: {0:?} (expected a positive integer)")]
    InvalidStep(String),
    #[error("unknown command: {0}")]
    UnknownCommand(String),
    #[error("unknown option: {0}")]
    UnknownOption(String),
    #[error("missing argument: {0}")]
    MissingArgument(&'static str),
    #[error("unexpected argument: {0}")]
    UnexpectedArgument(String),
    #[error("no preset named {0:?}")]
    UnknownPreset(String),
    #[error("failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),
}
