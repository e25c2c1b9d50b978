//! Driver configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use strictly_tictactoe::Mode;
use tracing::{debug, info, instrument};

/// Configuration for a terminal game session.
///
/// ```toml
/// mode = "human_vs_computer"
/// computer_delay_ms = 500
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Opponent selection at startup.
    #[serde(default)]
    mode: Mode,

    /// Pause before the computer answers, in milliseconds.
    #[serde(default = "default_computer_delay_ms")]
    computer_delay_ms: u64,
}

fn default_computer_delay_ms() -> u64 {
    500
}

impl GameConfig {
    /// Creates a configuration.
    pub fn new(mode: Mode, computer_delay_ms: u64) -> Self {
        Self {
            mode,
            computer_delay_ms,
        }
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(mode = %config.mode, delay_ms = config.computer_delay_ms, "Config loaded successfully");
        Ok(config)
    }

    /// Applies command-line overrides on top of this configuration.
    pub fn with_overrides(mut self, mode: Option<Mode>, computer_delay_ms: Option<u64>) -> Self {
        if let Some(mode) = mode {
            self.mode = mode;
        }
        if let Some(delay) = computer_delay_ms {
            self.computer_delay_ms = delay;
        }
        self
    }

    /// The computer's delay as a [`Duration`].
    pub fn computer_delay(&self) -> Duration {
        Duration::from_millis(self.computer_delay_ms)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(Mode::default(), default_computer_delay_ms())
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
    /// Creates a new configuration error with caller location tracking.
    #[track_caller]
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

    #[test]
    fn test_defaults_fill_missing_fields() {
        let config: GameConfig = toml::from_str("").expect("empty config parses");
        assert_eq!(config, GameConfig::default());
        assert_eq!(*config.mode(), Mode::HumanVsComputer);
        assert_eq!(config.computer_delay(), Duration::from_millis(500));
    }

    #[test]
    fn test_overrides_win() {
        let config = GameConfig::default().with_overrides(Some(Mode::HumanVsHuman), Some(0));
        assert_eq!(*config.mode(), Mode::HumanVsHuman);
        assert_eq!(*config.computer_delay_ms(), 0);

        let unchanged = GameConfig::default().with_overrides(None, None);
        assert_eq!(unchanged, GameConfig::default());
    }
}
