//! Runtime context for command execution.
//!
//! The [`RuntimeContext`] holds everything a command handler needs: the
//! effective configuration (file + env + flags) and the resolved output
//! settings derived from it.

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use relmo_config::config::{ColorMode, NonFinite, RelmoConfig, load_config};
use relmo_config::config_dir::find_config_dir;
use relmo_core::ParseMode;
use relmo_ui::terminal::supports_color;
use relmo_ui::transcript::Precision;

use crate::cli::GlobalArgs;

/// Runtime context passed to every command handler.
///
/// Constructed once in `main` after CLI parsing, before command dispatch.
#[derive(Debug)]
pub struct RuntimeContext {
    /// The discovered `.relmo/` directory, if any.
    pub config_dir: Option<PathBuf>,

    /// Effective configuration with command-line overrides applied.
    pub config: RelmoConfig,

    /// Whether to produce JSON output.
    pub json: bool,

    /// Whether ANSI colours are emitted.
    pub color: bool,
}

impl RuntimeContext {
    /// Build a `RuntimeContext` from parsed global arguments.
    ///
    /// Flags take precedence over `RELMO_*` variables, which take precedence
    /// over `.relmo/config.yaml`.
    pub fn from_global_args(global: &GlobalArgs) -> Result<Self> {
        let cwd = env::current_dir().context("cannot determine the current directory")?;
        let config_dir = find_config_dir(&cwd);
        let mut config = load_config(config_dir.as_deref())?;

        if let Some(color) = global.color {
            config.color = color.into();
        }
        if global.strict {
            config.non_finite = NonFinite::Reject;
        }

        Ok(Self::with_config(config_dir, config, global.json))
    }

    /// Build a context from an already-resolved configuration.
    pub fn with_config(config_dir: Option<PathBuf>, config: RelmoConfig, json: bool) -> Self {
        let color = match config.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => supports_color(),
        };

        Self {
            config_dir,
            config,
            json,
            color,
        }
    }

    /// Decimal places used by the transcript renderer.
    pub fn precision(&self) -> Precision {
        Precision {
            input: self.config.input_precision,
            hours: self.config.hours_precision,
            result: self.config.result_precision,
        }
    }

    /// How the engine treats non-finite literals.
    pub fn parse_mode(&self) -> ParseMode {
        self.config.non_finite.parse_mode()
    }
}
