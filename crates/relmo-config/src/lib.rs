//! Configuration management for the relmo calculator.
//!
//! Settings are layered with figment: built-in defaults, then
//! `.relmo/config.yaml` (found by walking up from the working directory),
//! then `RELMO_*` environment variables. Command-line flags are applied on
//! top by the binary.

pub mod config;
pub mod config_dir;
