//! Formula engine for the relmo calculator.
//!
//! Turns four raw text fields (distance, elapsed time and two velocities)
//! into the meeting time of two moving objects, or a classified error.
//! Everything here is pure: no I/O and no state survives a call.

pub mod engine;
pub mod parser;
pub mod types;
pub mod units;

pub use engine::{compute, compute_with, evaluate};
pub use parser::{ParseMode, RawInput};
pub use types::{CalculationError, CalculationInput, CalculationOutcome, Field};
