//! Harness configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// How the harness prints the final state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// JSON snapshot of the engine state.
    Json,
}

/// Where `Copy` presses go.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ClipboardMode {
    /// The desktop clipboard; falls back to memory when unavailable.
    System,
    /// An in-process clipboard that is discarded on exit.
    #[default]
    Memory,
}

/// Configuration for a harness run.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct ToyboxConfig {
    /// Tracing filter used when `RUST_LOG` is unset.
    log_filter: String,

    /// Output format.
    output: OutputFormat,

    /// Clipboard used by the calculator's `Copy` key.
    clipboard: ClipboardMode,
}

#[instrument]
fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for ToyboxConfig {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
            output: OutputFormat::default(),
            clipboard: ClipboardMode::default(),
        }
    }
}

impl ToyboxConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(output = ?config.output, clipboard = ?config.clipboard, "Config loaded");
        Ok(config)
    }

    /// Loads `path` if given, defaults otherwise.
    ///
    /// A path that was asked for but cannot be read is an error.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Applies command-line overrides.
    pub fn with_overrides(
        mut self,
        output: Option<OutputFormat>,
        clipboard: Option<ClipboardMode>,
    ) -> Self {
        if let Some(output) = output {
            self.output = output;
        }
        if let Some(clipboard) = clipboard {
            self.clipboard = clipboard;
        }
        self
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
