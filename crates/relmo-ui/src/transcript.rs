//! Styled transcript of calculations.
//!
//! [`render_outcome`] maps a calculation result to [`Segment`]s without
//! touching any terminal state; [`render_segments`] turns segments into
//! printable text. [`Transcript`] is the append-only log kept by the form.

use std::fmt::Display;

use relmo_core::{CalculationError, CalculationOutcome, Field};

use crate::styles::{render_error, render_heading, render_result};

pub const INPUT_HEADING: &str = "--- Input Data ---";
pub const RESULT_HEADING: &str = "--- Result ---";
pub const INVALID_NUMBER_MESSAGE: &str = "Error: Please enter only numbers in every field.";
pub const EQUAL_VELOCITIES_MESSAGE: &str =
    "Error: The velocities cannot be equal (division by zero).";

/// How a segment is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Plain,
    Heading,
    Error,
    Result,
}

/// One transcript line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub style: Style,
}

impl Segment {
    pub fn new(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, Style::Plain)
    }

    /// Renders this segment as one line (without the trailing newline).
    pub fn render(&self, color: bool) -> String {
        match self.style {
            Style::Plain => self.text.clone(),
            Style::Heading => render_heading(&self.text, color),
            Style::Error => render_error(&self.text, color),
            Style::Result => render_result(&self.text, color),
        }
    }
}

/// Decimal places used when echoing values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Precision {
    /// Echoed inputs.
    pub input: usize,
    /// Converted elapsed time in hours.
    pub hours: usize,
    /// Meeting time.
    pub result: usize,
}

impl Default for Precision {
    fn default() -> Self {
        Self {
            input: 2,
            hours: 3,
            result: 3,
        }
    }
}

/// Pushes a styled line; every styled line is followed by a blank one.
fn push(segments: &mut Vec<Segment>, text: impl Into<String>, style: Style) {
    segments.push(Segment::new(text, style));
    if style != Style::Plain {
        segments.push(Segment::plain(""));
    }
}

/// Renders a successful calculation.
pub fn render_success(outcome: &CalculationOutcome, precision: &Precision) -> Vec<Segment> {
    let input = &outcome.input;
    let p = precision.input;
    let mut segments = Vec::with_capacity(10);

    push(&mut segments, INPUT_HEADING, Style::Heading);
    push(
        &mut segments,
        format!(
            "{} (s): {:.*} {}",
            Field::Distance,
            p,
            input.distance_km,
            Field::Distance.unit()
        ),
        Style::Plain,
    );
    push(
        &mut segments,
        format!(
            "{} (t): {:.*} {} ({:.*} hours)",
            Field::Time,
            p,
            input.time_min,
            Field::Time.unit(),
            precision.hours,
            outcome.time_hours
        ),
        Style::Plain,
    );
    for (field, tag, value) in [
        (Field::Velocity1, "v1", input.velocity1_kmh),
        (Field::Velocity2, "v2", input.velocity2_kmh),
    ] {
        push(
            &mut segments,
            format!("{} ({}): {:.*} {}", field, tag, p, value, field.unit()),
            Style::Plain,
        );
    }

    push(&mut segments, RESULT_HEADING, Style::Heading);
    push(
        &mut segments,
        format!(
            "Meeting Time (r): {:.*} hours",
            precision.result, outcome.meeting_time_hours
        ),
        Style::Result,
    );
    segments
}

/// Renders a classified calculation failure.
pub fn render_calculation_error(err: &CalculationError) -> Vec<Segment> {
    let message = match err {
        CalculationError::InvalidNumber { .. } => INVALID_NUMBER_MESSAGE,
        CalculationError::DivisionByZero => EQUAL_VELOCITIES_MESSAGE,
    };
    let mut segments = Vec::with_capacity(2);
    push(&mut segments, message, Style::Error);
    segments
}

/// Renders any failure outside the formula engine.
pub fn render_unexpected(err: &dyn Display) -> Vec<Segment> {
    let mut segments = Vec::with_capacity(2);
    push(&mut segments, format!("Unexpected error: {err}"), Style::Error);
    segments
}

/// Renders the outcome of one calculation.
pub fn render_outcome(
    outcome: &Result<CalculationOutcome, CalculationError>,
    precision: &Precision,
) -> Vec<Segment> {
    match outcome {
        Ok(outcome) => render_success(outcome, precision),
        Err(err) => render_calculation_error(err),
    }
}

/// Joins segments into newline-terminated text.
pub fn render_segments(segments: &[Segment], color: bool) -> String {
    let mut out = String::new();
    for segment in segments {
        out.push_str(&segment.render(color));
        out.push('\n');
    }
    out
}

/// Accumulated log of rendered calculations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    segments: Vec<Segment>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends segments and returns the newly added slice.
    pub fn append(&mut self, segments: Vec<Segment>) -> &[Segment] {
        let start = self.segments.len();
        self.segments.extend(segments);
        &self.segments[start..]
    }

    /// Empties the transcript.
    pub fn clear(&mut self) {
        self.segments.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn render(&self, color: bool) -> String {
        render_segments(&self.segments, color)
    }
}
