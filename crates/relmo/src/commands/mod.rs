//! Command handlers, one module per subcommand.

pub mod calc;
pub mod completion;
pub mod config_cmd;
pub mod form;
pub mod version;
