//! Clap CLI definitions for the `relmo` command.

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use relmo_config::config::ColorMode;

/// relmo -- relative-motion meeting-time calculator.
///
/// Enter a distance, an elapsed time and two velocities; relmo computes when
/// the two moving objects meet.
#[derive(Parser, Debug)]
#[command(
    name = "relmo",
    about = "Relative-motion meeting-time calculator",
    long_about = "Enter a distance (Km), an elapsed time (min) and two velocities (Km/h); relmo computes the meeting time in hours.",
    version,
    long_version = crate::commands::version::long_version(),
    propagate_version = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Global flags available to all subcommands.
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Output in JSON format.
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose/debug output.
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// When to use colours (overrides the `color` config key).
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorArg>,

    /// Reject NaN and infinity literals as invalid numbers.
    #[arg(long, global = true)]
    pub strict: bool,
}

/// Colour choice on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorArg {
    Auto,
    Always,
    Never,
}

impl From<ColorArg> for ColorMode {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => ColorMode::Auto,
            ColorArg::Always => ColorMode::Always,
            ColorArg::Never => ColorMode::Never,
        }
    }
}

/// All available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute the meeting time once from four values.
    #[command(alias = "c")]
    Calc(CalcArgs),

    /// Interactive form: enter the fields, calculate, clear, repeat.
    Form,

    /// Show or create the configuration.
    Config(ConfigArgs),

    /// Print version information.
    Version,

    /// Generate shell completion scripts.
    Completion(CompletionArgs),
}

/// Arguments for `relmo calc`.
///
/// Values may start with a hyphen (`-.5`, `-inf`); known flags such as
/// `--json` or `-v` are still recognised anywhere on the line.
#[derive(Args, Debug)]
pub struct CalcArgs {
    /// Distance between the objects (Km).
    #[arg(allow_hyphen_values = true)]
    pub distance: String,

    /// Elapsed time (min).
    #[arg(allow_hyphen_values = true)]
    pub time: String,

    /// Velocity of the first object (Km/h).
    #[arg(allow_hyphen_values = true)]
    pub v1: String,

    /// Velocity of the second object (Km/h).
    #[arg(allow_hyphen_values = true)]
    pub v2: String,
}

/// Arguments for `relmo config`.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the effective configuration.
    Show,
    /// Write a default `.relmo/config.yaml` in the current directory.
    Init(ConfigInitArgs),
}

/// Arguments for `relmo config init`.
#[derive(Args, Debug)]
pub struct ConfigInitArgs {
    /// Overwrite an existing configuration file.
    #[arg(long)]
    pub force: bool,
}

/// Arguments for `relmo completion`.
#[derive(Args, Debug)]
pub struct CompletionArgs {
    /// Target shell.
    #[arg(value_enum)]
    pub shell: Shell,
}
