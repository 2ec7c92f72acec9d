//! Session configuration loaded from TOML.

use crate::games::monty_hall::RevealPolicy;
use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Configuration for a game session.
///
/// ```toml
/// seed = 42
/// reveal_policy = "lowest_door"
/// simulation_rounds = 20000
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
#[serde(deny_unknown_fields)]
pub struct GameConfig {
    /// RNG seed; entropy when absent.
    #[serde(default)]
    seed: Option<u64>,

    /// Host tie-break when the first pick hides the prize.
    #[serde(default)]
    reveal_policy: RevealPolicy,

    /// Rounds played by the `simulate` command.
    #[serde(default = "default_simulation_rounds")]
    simulation_rounds: u64,
}

fn default_simulation_rounds() -> u64 {
    10_000
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            reveal_policy: RevealPolicy::default(),
            simulation_rounds: default_simulation_rounds(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(seed = ?config.seed, policy = %config.reveal_policy, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_from_empty_file() {
        let config = GameConfig::from_toml("").expect("parse");
        assert_eq!(config, GameConfig::default());
        assert_eq!(*config.simulation_rounds(), 10_000);
        assert_eq!(*config.reveal_policy(), RevealPolicy::Uniform);
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "seed = 42\nreveal_policy = \"lowest_door\"\nsimulation_rounds = 500").expect("write");

        let config = GameConfig::from_file(file.path()).expect("load");
        assert_eq!(*config.seed(), Some(42));
        assert_eq!(*config.reveal_policy(), RevealPolicy::LowestDoor);
        assert_eq!(*config.simulation_rounds(), 500);
    }

    #[test]
    fn test_unknown_keys_rejected() {
        let err = GameConfig::from_toml("doors = 4").unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
    }

    #[test]
    fn test_missing_file_reports_location() {
        let err = GameConfig::from_file("/nonexistent/strictly_monty.toml").unwrap_err();
        assert!(err.message.starts_with("Failed to read config file"));
        assert!(err.file.ends_with("config.rs"));
    }

    #[test]
    fn test_setters_override() {
        let config = GameConfig::default()
            .with_seed(Some(7))
            .with_reveal_policy(RevealPolicy::LowestDoor);
        assert_eq!(*config.seed(), Some(7));
        assert_eq!(*config.reveal_policy(), RevealPolicy::LowestDoor);
    }
}
