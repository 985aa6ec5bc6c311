//! Removal settings: defaults, optional TOML file, CLI overrides.
//!
//! # Example
//!
//! ```toml
//! [removal]
//! threshold = 50   # distance below which pixels become fully transparent
//! fade = 30        # width of the soft edge band above the threshold
//! ```
//!
//! Values resolve as defaults → `--config` file → positional CLI arguments.

mod error;

pub use error::ConfigError;

use crate::{cli::Cli, log};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

/// Default color distance below which a pixel is background.
pub const DEFAULT_THRESHOLD: i32 = 50;
/// Default width of the fade band.
pub const DEFAULT_FADE: i32 = 30;

// ============================================================================
// root configuration
// ============================================================================

/// Root of the config file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
struct ConfigFile {
    removal: RemovalConfig,
}

/// Thresholds driving per-pixel classification.
///
/// Neither value is checked for sign: a negative `threshold` leaves no pixel
/// fully transparent, and a `fade` of zero or less disables the fade band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemovalConfig {
    /// Distance below which a pixel becomes (0, 0, 0, 0).
    pub threshold: i32,
    /// Width of the band `[threshold, threshold + fade)` where alpha ramps up.
    pub fade: i32,
}

impl Default for RemovalConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            fade: DEFAULT_FADE,
        }
    }
}

impl RemovalConfig {
    /// Resolve the effective settings for this invocation.
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let config = match &cli.config {
            Some(path) => Self::from_path(path)?,
            None => Self::default(),
        };
        Ok(config.apply_cli(cli))
    }

    /// Read and parse a config file, warning about unknown fields.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            log!("warning"; "{}", unknown_fields_message(path, &ignored));
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let file: ConfigFile =
            serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
                ignored.push(path.to_string());
            })?;
        Ok((file.removal, ignored))
    }

    /// Positional arguments win over file values.
    fn apply_cli(mut self, cli: &Cli) -> Self {
        if let Some(threshold) = cli.threshold {
            self.threshold = threshold;
        }
        if let Some(fade) = cli.fade {
            self.fade = fade;
        }
        self
    }
}

/// Header plus one `- field` line per ignored path, printed as one block.
fn unknown_fields_message(path: &Path, fields: &[String]) -> String {
    let mut message = format!("unknown fields in {}, ignoring:", path.display());
    for field in fields {
        message.push_str("\n- ");
        message.push_str(field);
    }
    message
}

// ============================================================================
// tests
// ============================================================================
