//! Output helpers for the `relmo` CLI.
//!
//! Provides JSON output of calculation results and the marker error used
//! when a failure has already been shown to the user.

use std::fmt;
use std::io::{self, Write};

use relmo_core::{CalculationError, CalculationOutcome};
use serde::Serialize;

/// JSON view of a failed calculation.
#[derive(Serialize)]
pub struct ErrorView {
    pub error: ErrorBody,
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub kind: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<&'static str>,
}

impl ErrorView {
    pub fn from_error(err: &CalculationError) -> Self {
        let field = match err {
            CalculationError::InvalidNumber { field, .. } => Some(field.as_str()),
            CalculationError::DivisionByZero => None,
        };
        Self {
            error: ErrorBody {
                kind: err.kind(),
                message: err.to_string(),
                field,
            },
        }
    }
}

/// Serializes a calculation result as a JSON value.
///
/// Non-finite floats become `null`.
pub fn outcome_json(outcome: &Result<CalculationOutcome, CalculationError>) -> serde_json::Value {
    let value = match outcome {
        Ok(outcome) => serde_json::to_value(outcome),
        Err(err) => serde_json::to_value(ErrorView::from_error(err)),
    };
    value.unwrap_or(serde_json::Value::Null)
}

/// Print a value as pretty-printed JSON to stdout.
///
/// Terminates the process with exit code 1 if serialization fails.
pub fn output_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            // Ignore broken pipe errors (e.g., piped to `head`)
            let _ = writeln!(handle, "{}", json);
        }
        Err(e) => {
            eprintln!("Error: failed to serialize JSON: {}", e);
            std::process::exit(1);
        }
    }
}

/// A failure that has already been printed; `main` only sets the exit code.
#[derive(Debug)]
pub struct Reported(pub CalculationError);

impl fmt::Display for Reported {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for Reported {}
