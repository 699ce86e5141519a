//! Runtime configuration for the command-line front end.

use kelvin_core::state::DEFAULT_KELVIN;

/// Log filter used when `KELVIN_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "warn";

/// Settings read from the environment at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Temperature shown by `show` when no value is given.
    pub default_kelvin: u32,
    /// `tracing-subscriber` filter directive, e.g. `kelvin_core=debug`.
    pub log_filter: String,
}

impl CliConfig {
    /// Build from an environment lookup. Unset or unparseable values fall
    /// back to the built-in defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            default_kelvin: lookup("KELVIN_DEFAULT")
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(DEFAULT_KELVIN),
            log_filter: lookup("KELVIN_LOG")
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        }
    }
}

impl Default for CliConfig {
    fn default() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }
}
