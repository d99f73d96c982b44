//! Settings file for the terminal front end.

use crate::cli::Cli;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use strictly_grid::Controller;
use tracing::{debug, info, instrument};

/// Default move log path.
pub const DEFAULT_LOG_FILE: &str = "game_log.text";

/// Game settings loaded from TOML and overridden by CLI flags.
///
/// ```toml
/// board_size = 4
/// mode = 3
/// players = ["human", "computer", "computer"]
/// log_file = "game_log.text"
/// seed = 7
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Settings {
    /// Board edge length; prompted for when absent.
    board_size: Option<usize>,

    /// Menu mode (1-3); prompted for when absent.
    mode: Option<u8>,

    /// Per-player controllers for mode 3; prompted for when absent.
    players: Option<Vec<Controller>>,

    /// Move log path.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Seed for computer players.
    seed: Option<u64>,
}

#[instrument]
fn default_log_file() -> PathBuf {
    PathBuf::from(DEFAULT_LOG_FILE)
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            board_size: None,
            mode: None,
            players: None,
            log_file: default_log_file(),
            seed: None,
        }
    }
}

impl Settings {
    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| SettingsError::new(format!("Failed to read settings file: {}", e)))?;

        let settings: Self = toml::from_str(&content)
            .map_err(|e| SettingsError::new(format!("Failed to parse settings: {}", e)))?;

        info!(?settings, "Settings loaded successfully");
        Ok(settings)
    }

    /// Loads settings from `path`, falling back to defaults if the file
    /// does not exist.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Settings file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line flags on top of these settings.
    #[instrument(skip(self, cli))]
    pub fn with_overrides(mut self, cli: &Cli) -> Self {
        if let Some(size) = cli.size {
            self.board_size = Some(size);
        }
        if let Some(mode) = cli.mode {
            self.mode = Some(mode);
        }
        if let Some(players) = &cli.players {
            self.players = Some(players.clone());
        }
        if let Some(log_file) = &cli.log_file {
            self.log_file = log_file.clone();
        }
        if let Some(seed) = cli.seed {
            self.seed = Some(seed);
        }
        debug!(settings = ?self, "Applied command-line overrides");
        self
    }
}

/// Settings error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Settings error: {} at {}:{}", message, file, line)]
pub struct SettingsError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl SettingsError {
    /// Creates a new settings error.
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

    #[test]
    fn test_cli_overrides_file_values() {
        let settings: Settings = toml::from_str("board_size = 4\nmode = 1\nseed = 3\n").unwrap();
        let cli = Cli {
            mode: Some(2),
            log_file: Some(PathBuf::from("other.log")),
            ..Cli::default()
        };

        let merged = settings.with_overrides(&cli);
        assert_eq!(*merged.board_size(), Some(4));
        assert_eq!(*merged.mode(), Some(2));
        assert_eq!(*merged.seed(), Some(3));
        assert_eq!(merged.log_file(), &PathBuf::from("other.log"));
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let settings: Settings = toml::from_str("").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.log_file(), &PathBuf::from(DEFAULT_LOG_FILE));
    }
}
