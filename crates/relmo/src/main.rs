//! `relmo` -- relative-motion meeting-time calculator.
//!
//! Parses CLI arguments with clap, resolves the runtime context (config file,
//! environment, flags) and dispatches to command handlers.

mod cli;
mod commands;
mod context;
mod output;

use std::sync::atomic::{AtomicBool, Ordering};

use clap::Parser;

use cli::{Cli, Commands};
use context::RuntimeContext;
use output::Reported;

/// Tracks whether a Ctrl+C has already been received.
static CTRLC_RECEIVED: AtomicBool = AtomicBool::new(false);

fn main() {
    // First Ctrl+C: exit cleanly. Second: force exit.
    let _ = ctrlc::set_handler(|| {
        if CTRLC_RECEIVED.swap(true, Ordering::SeqCst) {
            std::process::exit(1);
        }
        std::process::exit(0);
    });

    let cli = Cli::parse();

    if cli.global.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("relmo=debug,relmo_core=debug,relmo_config=debug")
            .with_writer(std::io::stderr)
            .init();
    }

    let result = RuntimeContext::from_global_args(&cli.global).and_then(|ctx| match cli.command {
        Some(Commands::Calc(args)) => commands::calc::run(&ctx, &args),
        Some(Commands::Form) => commands::form::run(&ctx),
        Some(Commands::Config(args)) => commands::config_cmd::run(&ctx, &args),
        Some(Commands::Version) => commands::version::run(&ctx),
        Some(Commands::Completion(args)) => commands::completion::run(&args),
        None => {
            use clap::CommandFactory;
            Cli::command().print_help().ok();
            println!();
            Ok(())
        }
    });

    if let Err(e) = result {
        // Calculation failures are already part of the printed output.
        if e.downcast_ref::<Reported>().is_none() {
            if cli.global.json {
                let err_json = serde_json::json!({
                    "error": format!("{:#}", e),
                });
                if let Ok(s) = serde_json::to_string_pretty(&err_json) {
                    eprintln!("{}", s);
                }
            } else {
                eprintln!("Error: {:#}", e);
            }
        }
        std::process::exit(1);
    }
}
