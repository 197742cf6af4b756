//! Meeting-time computation.
//!
//! The formula is
//!
//! ```text
//! t_h = t_min / 60
//! p   = v2 * (-t_h)
//! r   = (s + p) / (v1 - v2)
//! ```
//!
//! The operand order of `p` is kept literally; results must match that exact
//! sequence of floating-point operations.

use tracing::debug;

use crate::parser::{ParseMode, RawInput};
use crate::types::{CalculationError, CalculationInput, CalculationOutcome};
use crate::units::minutes_to_hours;

/// Parses the four raw fields and computes the meeting time.
///
/// Non-finite literals are accepted (see [`ParseMode::Lenient`]).
///
/// # Examples
///
/// ```
/// let outcome = relmo_core::compute("100", "30", "80", "20").unwrap();
/// assert_eq!(outcome.time_hours, 0.5);
/// assert_eq!(outcome.meeting_time_hours, 1.5);
/// ```
pub fn compute(
    raw_distance: &str,
    raw_time: &str,
    raw_v1: &str,
    raw_v2: &str,
) -> Result<CalculationOutcome, CalculationError> {
    let raw = RawInput::new(raw_distance, raw_time, raw_v1, raw_v2);
    compute_with(&raw, ParseMode::Lenient)
}

/// Parses `raw` under `mode` and computes the meeting time.
pub fn compute_with(raw: &RawInput, mode: ParseMode) -> Result<CalculationOutcome, CalculationError> {
    let input = raw.parse(mode).inspect_err(|e| {
        debug!(kind = e.kind(), error = %e, "rejected calculation input");
    })?;
    evaluate(input)
}

/// Applies the formula to already-parsed input.
///
/// Fails with [`CalculationError::DivisionByZero`] when `v1 - v2` is exactly
/// zero; any other value, including infinities and NaN, is divided as is.
pub fn evaluate(input: CalculationInput) -> Result<CalculationOutcome, CalculationError> {
    let time_hours = minutes_to_hours(input.time_min);
    let displacement_term = input.velocity2_kmh * -time_hours;
    let relative_velocity = input.velocity1_kmh - input.velocity2_kmh;

    if relative_velocity == 0.0 {
        debug!(
            v1 = input.velocity1_kmh,
            v2 = input.velocity2_kmh,
            "equal velocities, meeting time undefined"
        );
        return Err(CalculationError::DivisionByZero);
    }

    let meeting_time_hours = (input.distance_km + displacement_term) / relative_velocity;
    debug!(
        distance_km = input.distance_km,
        time_hours,
        displacement_term,
        relative_velocity,
        meeting_time_hours,
        "computed meeting time"
    );

    Ok(CalculationOutcome {
        input,
        time_hours,
        displacement_term,
        relative_velocity,
        meeting_time_hours,
    })
}
