//! `relmo completion <shell>`.

use std::io::{self, Write};

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::{Shell, generate};

use crate::cli::{Cli, CompletionArgs};

pub fn run(args: &CompletionArgs) -> Result<()> {
    write_completions(args.shell, &mut io::stdout().lock());
    Ok(())
}

fn write_completions<W: Write>(shell: Shell, out: &mut W) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, out);
}
