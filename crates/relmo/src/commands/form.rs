//! `relmo form` -- interactive calculation form.
//!
//! Prompts for the four fields in order, calculates after the last one and
//! appends the result to a transcript. At any prompt `:clear` empties the
//! transcript, `:show` displays all of it and `:quit` (or EOF) ends the
//! session.

use std::io::{self, BufRead, ErrorKind, Write};

use anyhow::{Result, bail};
use relmo_core::{Field, ParseMode, RawInput, compute_with};
use relmo_ui::pager;
use relmo_ui::styles::{render_info_icon, render_muted, render_separator};
use relmo_ui::terminal::{clear_screen, is_tty};
use relmo_ui::transcript::{Precision, Transcript, render_outcome, render_segments, render_unexpected};
use tracing::debug;

use crate::context::RuntimeContext;

/// What the user typed at a field prompt.
#[derive(Debug, PartialEq, Eq)]
enum Entry {
    Value(String),
    Clear,
    Show,
    Quit,
}

impl Entry {
    fn from_line(line: &str) -> Self {
        match line.trim() {
            ":clear" | ":c" => Entry::Clear,
            ":show" | ":s" => Entry::Show,
            ":quit" | ":q" => Entry::Quit,
            _ => Entry::Value(line.to_string()),
        }
    }
}

/// An interactive form session over arbitrary input and output streams.
pub struct FormSession<R, W> {
    input: R,
    out: W,
    transcript: Transcript,
    precision: Precision,
    parse_mode: ParseMode,
    color: bool,
    /// Output is a real terminal: clear the screen and page long output.
    interactive: bool,
}

impl<R: BufRead, W: Write> FormSession<R, W> {
    pub fn new(input: R, out: W, precision: Precision, parse_mode: ParseMode, color: bool) -> Self {
        Self {
            input,
            out,
            transcript: Transcript::new(),
            precision,
            parse_mode,
            color,
            interactive: false,
        }
    }

    pub fn interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Runs until `:quit` or end of input.
    pub fn run(&mut self) -> Result<()> {
        self.banner()?;

        loop {
            let mut raw = RawInput::default();
            for field in Field::ALL {
                match self.read_field(field)? {
                    Some(text) => *raw.get_mut(field) = text,
                    None => return Ok(()),
                }
            }
            self.calculate(&raw)?;
        }
    }

    fn banner(&mut self) -> io::Result<()> {
        writeln!(
            self.out,
            "{} Relative motion calculator. Commands: :clear, :show, :quit",
            render_info_icon(self.color)
        )?;
        writeln!(self.out, "{}", render_separator(self.color))
    }

    /// Prompts until a value is entered for `field`; `None` ends the session.
    fn read_field(&mut self, field: Field) -> Result<Option<String>> {
        loop {
            write!(self.out, "{}: ", field.prompt())?;
            self.out.flush()?;

            let mut line = String::new();
            match self.input.read_line(&mut line) {
                Ok(0) => {
                    writeln!(self.out)?;
                    return Ok(None);
                }
                Ok(_) => {}
                Err(e) if e.kind() == ErrorKind::InvalidData => {
                    self.report_unexpected(&e)?;
                    continue;
                }
                Err(e) => return Err(e.into()),
            }

            let line = line.trim_end_matches(['\n', '\r']);
            match Entry::from_line(line) {
                Entry::Value(text) => return Ok(Some(text)),
                Entry::Clear => self.clear()?,
                Entry::Show => self.show()?,
                Entry::Quit => return Ok(None),
            }
        }
    }

    fn calculate(&mut self, raw: &RawInput) -> io::Result<()> {
        let outcome = compute_with(raw, self.parse_mode);
        debug!(ok = outcome.is_ok(), "form calculation");

        let segments = render_outcome(&outcome, &self.precision);
        let text = render_segments(self.transcript.append(segments), self.color);
        write!(self.out, "{}", text)
    }

    fn clear(&mut self) -> io::Result<()> {
        self.transcript.clear();
        if self.interactive {
            clear_screen(&mut self.out)?;
        }
        writeln!(self.out, "{}", render_muted("Transcript cleared.", self.color))
    }

    fn show(&mut self) -> io::Result<()> {
        if self.transcript.is_empty() {
            return writeln!(self.out, "{}", render_muted("Transcript is empty.", self.color));
        }

        let text = self.transcript.render(self.color);
        if self.interactive {
            pager::page(&text, &mut self.out)
        } else {
            write!(self.out, "{}", text)
        }
    }

    fn report_unexpected(&mut self, err: &dyn std::fmt::Display) -> io::Result<()> {
        let text = render_segments(self.transcript.append(render_unexpected(err)), self.color);
        write!(self.out, "{}", text)
    }
}

/// Execute the `relmo form` command on stdin/stdout.
pub fn run(ctx: &RuntimeContext) -> Result<()> {
    if ctx.json {
        bail!("--json is not supported by the interactive form; use 'relmo calc --json'");
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = FormSession::new(
        stdin.lock(),
        stdout.lock(),
        ctx.precision(),
        ctx.parse_mode(),
        ctx.color,
    )
    .interactive(is_tty());
    session.run()?;
    debug!(entries = session.transcript().len(), "form session ended");
    Ok(())
}
