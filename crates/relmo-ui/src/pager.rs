//! Scrollable display of a long transcript.
//!
//! Text taller than the terminal goes through an external pager; everything
//! else, and any pager that cannot be started, lands in the caller's writer.

use std::env;
use std::io::{self, ErrorKind, Write};
use std::process::{Command, Stdio};

use crate::terminal::terminal_height;

/// Set to any value to always write directly.
pub const NO_PAGER_VAR: &str = "RELMO_NO_PAGER";

/// Pager lookup order; the first non-empty value wins, then `less`.
const PAGER_VARS: [&str; 2] = ["RELMO_PAGER", "PAGER"];

/// Whether `content` is taller than a terminal of `rows` rows.
///
/// One row stays free for the prompt. An unknown size (`0`) never pages.
pub fn exceeds_screen(content: &str, rows: usize) -> bool {
    rows > 0 && content.lines().count() >= rows
}

/// Shows `content`, through the pager when it overflows the terminal.
pub fn page<W: Write>(content: &str, out: &mut W) -> io::Result<()> {
    if env::var_os(NO_PAGER_VAR).is_some() || !exceeds_screen(content, terminal_height()) {
        return out.write_all(content.as_bytes());
    }
    out.flush()?;
    page_with(content, &pager_command(), out)
}

/// Runs `command` with `content` on its stdin.
///
/// An empty or unstartable command writes `content` to `out` instead.
pub fn page_with<W: Write>(content: &str, command: &str, out: &mut W) -> io::Result<()> {
    let mut words = command.split_whitespace();
    let Some(program) = words.next() else {
        return out.write_all(content.as_bytes());
    };

    let mut cmd = Command::new(program);
    cmd.args(words).stdin(Stdio::piped());
    if program == "less" && env::var_os("LESS").is_none() {
        cmd.env("LESS", "-RFX");
    }

    let mut child = match cmd.spawn() {
        Ok(child) => child,
        Err(e) => {
            tracing::debug!(program, error = %e, "pager unavailable");
            return out.write_all(content.as_bytes());
        }
    };

    if let Some(mut stdin) = child.stdin.take() {
        match stdin.write_all(content.as_bytes()) {
            // The user quit the pager before reading everything.
            Err(e) if e.kind() == ErrorKind::BrokenPipe => {}
            other => other?,
        }
    }
    child.wait()?;
    Ok(())
}

fn pager_command() -> String {
    PAGER_VARS
        .iter()
        .filter_map(|var| env::var(var).ok())
        .find(|value| !value.trim().is_empty())
        .unwrap_or_else(|| "less".to_string())
}
