//! Application configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Shortcut keys for the table actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct KeyBindings {
    /// Clears the board, keeping scores.
    #[serde(default = "default_new_game_key")]
    new_game: char,

    /// Zeroes the scoreboard and clears the board.
    #[serde(default = "default_reset_scores_key")]
    reset_scores: char,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            new_game: default_new_game_key(),
            reset_scores: default_reset_scores_key(),
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the score record.
    #[serde(default = "default_data_dir")]
    data_dir: PathBuf,

    /// Log destination while the terminal UI is running.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Ring the terminal bell on round end and reset.
    #[serde(default = "default_bell")]
    bell: bool,

    /// Shortcut keys.
    #[serde(default)]
    keys: KeyBindings,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from(".cross_zero")
}

fn default_log_file() -> PathBuf {
    PathBuf::from("cross_zero.log")
}

fn default_bell() -> bool {
    true
}

fn default_new_game_key() -> char {
    'r'
}

fn default_reset_scores_key() -> char {
    'c'
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_file: default_log_file(),
            bell: default_bell(),
            keys: KeyBindings::default(),
        }
    }
}

impl Config {
    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the text is not valid configuration, if
    /// the two shortcut keys collide, or if either shortcut is a key the
    /// board already uses (digits 1-9, space, `q`).
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml(&content)?;
        info!(data_dir = %config.data_dir.display(), "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file exists but cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Replaces the data directory.
    pub fn with_data_dir(mut self, data_dir: PathBuf) -> Self {
        self.data_dir = data_dir;
        self
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let keys = &self.keys;
        for (action, key) in [("new game", keys.new_game), ("reset scores", keys.reset_scores)] {
            if is_reserved_key(key) {
                return Err(ConfigError::new(format!(
                    "Shortcut '{}' for {} is reserved for placing marks or quitting",
                    key, action
                )));
            }
        }
        if keys.new_game.eq_ignore_ascii_case(&keys.reset_scores) {
            return Err(ConfigError::new(format!(
                "Shortcut '{}' is bound to both new game and reset scores",
                keys.new_game
            )));
        }
        Ok(())
    }
}

/// Keys the board handles before any configured shortcut: digits 1-9 place
/// a mark, space places at the cursor, and `q` quits.
fn is_reserved_key(key: char) -> bool {
    matches!(key, '1'..='9' | ' ') || key.eq_ignore_ascii_case(&'q')
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
