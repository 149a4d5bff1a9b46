use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// User configuration, read from `config.json`.
///
/// Every field has a default, so an empty object is a valid file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Content JSON to load instead of the built-in content
    #[serde(default)]
    pub content_path: Option<PathBuf>,

    /// Remember the active theme between runs
    #[serde(default = "default_true")]
    pub persist_theme: bool,

    /// Launch the desktop handler for links. When false, links are only logged.
    #[serde(default = "default_true")]
    pub open_links: bool,

    /// Show the terminal immediately instead of the landing view
    #[serde(default = "default_false")]
    pub start_open: bool,

    /// Key that opens and closes the terminal while the input box is empty
    #[serde(default = "default_toggle_key")]
    pub toggle_key: char,
}

fn default_true() -> bool {
    true
}

fn default_false() -> bool {
    false
}

fn default_toggle_key() -> char {
    '`'
}

impl Default for Config {
    fn default() -> Self {
        Self {
            content_path: None,
            persist_theme: true,
            open_links: true,
            start_open: false,
            toggle_key: default_toggle_key(),
        }
    }
}

impl Config {
    /// The config filename used throughout the application
    pub const FILENAME: &'static str = "config.json";

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.toggle_key.is_whitespace() || self.toggle_key.is_control() {
            return Err(ConfigError::ValidationError(format!(
                "toggle_key must be a printable character, got {:?}",
                self.toggle_key
            )));
        }
        if self.toggle_key.is_alphanumeric() {
            return Err(ConfigError::ValidationError(format!(
                "toggle_key {:?} would clash with command text",
                self.toggle_key
            )));
        }
        Ok(())
    }
}

#[derive(Debug)]
pub enum ConfigError {
    IoError(String),
    ParseError(String),
    ValidationError(String),
    ContentError(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(msg) => write!(f, "IO error: {msg}"),
            ConfigError::ParseError(msg) => write!(f, "Parse error: {msg}"),
            ConfigError::ValidationError(msg) => write!(f, "Validation error: {msg}"),
            ConfigError::ContentError(msg) => write!(f, "Invalid content: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}
