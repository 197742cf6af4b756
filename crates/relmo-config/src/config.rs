//! Configuration types and loading.
//!
//! The main entry point is [`RelmoConfig`], the contents of
//! `.relmo/config.yaml`. It is loaded with [`load_config`], which layers
//! defaults, the YAML file and `RELMO_*` environment variables, and saved
//! with [`save_config`].

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use relmo_core::ParseMode;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::config_dir::{CONFIG_FILE_NAME, ensure_config_dir};

/// Largest accepted number of decimal places.
pub const MAX_PRECISION: usize = 12;

/// Prefix for environment overrides, e.g. `RELMO_RESULT_PRECISION=4`.
pub const ENV_PREFIX: &str = "RELMO_";

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can occur during configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The layered configuration could not be extracted.
    #[error("failed to load configuration: {0}")]
    Load(#[from] Box<figment::Error>),

    /// Reading or writing the configuration directory failed.
    #[error("configuration I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration could not be serialized as YAML.
    #[error("failed to serialize configuration: {0}")]
    Serialize(#[from] serde_yaml::Error),

    /// `config init` found an existing file.
    #[error("{} already exists (use --force to overwrite)", .0.display())]
    AlreadyExists(PathBuf),

    /// A configuration value was invalid.
    #[error("invalid configuration value for key '{key}': {reason}")]
    InvalidValue {
        /// The configuration key that had an invalid value.
        key: String,
        /// A description of why the value is invalid.
        reason: String,
    },
}

/// A specialized `Result` type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

// ---------------------------------------------------------------------------
// Enumerated settings
// ---------------------------------------------------------------------------

/// When to emit ANSI colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Follow `NO_COLOR`/`CLICOLOR` conventions and TTY detection.
    #[default]
    Auto,
    Always,
    Never,
}

/// Treatment of `NaN`/`inf` literals typed into a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NonFinite {
    /// Accept them as ordinary floats.
    #[default]
    Accept,
    /// Reject them as invalid numbers.
    Reject,
}

impl NonFinite {
    pub fn parse_mode(self) -> ParseMode {
        match self {
            NonFinite::Accept => ParseMode::Lenient,
            NonFinite::Reject => ParseMode::Strict,
        }
    }
}

// ---------------------------------------------------------------------------
// Main config struct
// ---------------------------------------------------------------------------

/// The full relmo configuration, corresponding to `.relmo/config.yaml`.
///
/// All fields use `serde` defaults so that a partially-specified YAML file
/// deserializes with sensible values for the rest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelmoConfig {
    /// Decimal places for echoed inputs.
    #[serde(default = "default_input_precision", rename = "input-precision")]
    pub input_precision: usize,

    /// Decimal places for the elapsed time converted to hours.
    #[serde(default = "default_hours_precision", rename = "hours-precision")]
    pub hours_precision: usize,

    /// Decimal places for the meeting time.
    #[serde(default = "default_result_precision", rename = "result-precision")]
    pub result_precision: usize,

    /// Colour output mode.
    #[serde(default)]
    pub color: ColorMode,

    /// Whether `NaN`/`inf` inputs are accepted.
    #[serde(default, rename = "non-finite")]
    pub non_finite: NonFinite,
}

impl Default for RelmoConfig {
    fn default() -> Self {
        Self {
            input_precision: default_input_precision(),
            hours_precision: default_hours_precision(),
            result_precision: default_result_precision(),
            color: ColorMode::default(),
            non_finite: NonFinite::default(),
        }
    }
}

fn default_input_precision() -> usize {
    2
}

fn default_hours_precision() -> usize {
    3
}

fn default_result_precision() -> usize {
    3
}

impl RelmoConfig {
    /// Checks value ranges that serde cannot express.
    pub fn validate(&self) -> Result<()> {
        for (key, value) in [
            ("input-precision", self.input_precision),
            ("hours-precision", self.hours_precision),
            ("result-precision", self.result_precision),
        ] {
            if value > MAX_PRECISION {
                return Err(ConfigError::InvalidValue {
                    key: key.to_string(),
                    reason: format!("must be at most {MAX_PRECISION} (got {value})"),
                });
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Builds the layered figment: defaults, `config.yaml` inside `config_dir`
/// (if any), then environment variables.
///
/// Environment keys are lowercased and `_` becomes `-`, so
/// `RELMO_NON_FINITE=reject` sets `non-finite`.
pub fn layered(config_dir: Option<&Path>) -> Figment {
    let mut figment = Figment::new().merge(Serialized::defaults(RelmoConfig::default()));
    if let Some(dir) = config_dir {
        figment = figment.merge(Yaml::file(dir.join(CONFIG_FILE_NAME)));
    }
    figment.merge(
        Env::prefixed(ENV_PREFIX).map(|key| key.as_str().to_lowercase().replace('_', "-").into()),
    )
}

/// Loads and validates the configuration.
///
/// A missing `config.yaml` is not an error; defaults apply.
///
/// # Errors
///
/// Returns [`ConfigError::Load`] if a layer holds malformed data and
/// [`ConfigError::InvalidValue`] if a value is out of range.
pub fn load_config(config_dir: Option<&Path>) -> Result<RelmoConfig> {
    let config: RelmoConfig = layered(config_dir).extract().map_err(Box::new)?;
    config.validate()?;
    debug!(?config_dir, ?config, "loaded configuration");
    Ok(config)
}

/// Save configuration to `config.yaml` inside the given `.relmo/` directory.
///
/// The directory is created if it does not exist.
pub fn save_config(config_dir: &Path, config: &RelmoConfig) -> Result<PathBuf> {
    std::fs::create_dir_all(config_dir)?;

    let config_path = config_dir.join(CONFIG_FILE_NAME);
    let yaml = serde_yaml::to_string(config)?;
    std::fs::write(&config_path, yaml)?;
    Ok(config_path)
}

/// Writes a default configuration under `base/.relmo/`.
///
/// # Errors
///
/// Returns [`ConfigError::AlreadyExists`] if the file exists and `force`
/// is not set.
pub fn init_config(base: &Path, force: bool) -> Result<PathBuf> {
    let config_dir = ensure_config_dir(base)?;
    let config_path = config_dir.join(CONFIG_FILE_NAME);
    if config_path.exists() && !force {
        return Err(ConfigError::AlreadyExists(config_path));
    }
    save_config(&config_dir, &RelmoConfig::default())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
