//! `relmo calc` -- compute the meeting time once.

use anyhow::Result;
use relmo_core::{RawInput, compute_with};
use relmo_ui::transcript::{render_outcome, render_segments};
use tracing::debug;

use crate::cli::CalcArgs;
use crate::context::RuntimeContext;
use crate::output::{Reported, outcome_json, output_json};

/// Execute the `relmo calc` command.
///
/// The transcript (or JSON) is printed for failures too; the returned
/// [`Reported`] error only sets the exit status.
pub fn run(ctx: &RuntimeContext, args: &CalcArgs) -> Result<()> {
    let raw = RawInput::new(
        args.distance.as_str(),
        args.time.as_str(),
        args.v1.as_str(),
        args.v2.as_str(),
    );
    debug!(?raw, mode = ?ctx.parse_mode(), "calc");

    let outcome = compute_with(&raw, ctx.parse_mode());

    if ctx.json {
        output_json(&outcome_json(&outcome));
    } else {
        let segments = render_outcome(&outcome, &ctx.precision());
        print!("{}", render_segments(&segments, ctx.color));
    }

    outcome.map(|_| ()).map_err(|err| Reported(err).into())
}
