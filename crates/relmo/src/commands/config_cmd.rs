//! `relmo config` -- show or create the configuration.

use anyhow::{Context, Result};
use relmo_config::config::init_config;
use relmo_config::config_dir::CONFIG_FILE_NAME;

use crate::cli::{ConfigArgs, ConfigCommands};
use crate::context::RuntimeContext;
use crate::output::output_json;

/// Execute the `relmo config` command.
pub fn run(ctx: &RuntimeContext, args: &ConfigArgs) -> Result<()> {
    match &args.command {
        ConfigCommands::Show => {
            if ctx.json {
                output_json(&ctx.config);
                return Ok(());
            }

            match &ctx.config_dir {
                Some(dir) => println!("# source: {}", dir.join(CONFIG_FILE_NAME).display()),
                None => println!("# source: defaults"),
            }
            let yaml =
                serde_yaml::to_string(&ctx.config).context("failed to serialize configuration")?;
            print!("{}", yaml);
        }

        ConfigCommands::Init(init_args) => {
            let cwd = std::env::current_dir().context("cannot determine the current directory")?;
            let path = init_config(&cwd, init_args.force)?;

            if ctx.json {
                output_json(&serde_json::json!({
                    "path": path.display().to_string(),
                }));
            } else {
                println!("Created {}", path.display());
            }
        }
    }

    Ok(())
}
