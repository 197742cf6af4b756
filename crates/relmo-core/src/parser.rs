//! Parsing of raw form text into numeric inputs.

use crate::types::{CalculationError, CalculationInput, Field};

/// How non-finite literals (`NaN`, `inf`, `infinity`) are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// Accept them; they flow through the arithmetic like any other float.
    #[default]
    Lenient,
    /// Reject them as [`CalculationError::InvalidNumber`].
    Strict,
}

/// The four raw text fields exactly as the user typed them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawInput {
    pub distance: String,
    pub time: String,
    pub velocity1: String,
    pub velocity2: String,
}

impl RawInput {
    pub fn new(
        distance: impl Into<String>,
        time: impl Into<String>,
        velocity1: impl Into<String>,
        velocity2: impl Into<String>,
    ) -> Self {
        Self {
            distance: distance.into(),
            time: time.into(),
            velocity1: velocity1.into(),
            velocity2: velocity2.into(),
        }
    }

    /// Returns the raw text held for `field`.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Distance => &self.distance,
            Field::Time => &self.time,
            Field::Velocity1 => &self.velocity1,
            Field::Velocity2 => &self.velocity2,
        }
    }

    /// Mutable access to the text held for `field`.
    pub fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Distance => &mut self.distance,
            Field::Time => &mut self.time,
            Field::Velocity1 => &mut self.velocity1,
            Field::Velocity2 => &mut self.velocity2,
        }
    }

    /// Parses all four fields in form order, stopping at the first failure.
    pub fn parse(&self, mode: ParseMode) -> Result<CalculationInput, CalculationError> {
        Ok(CalculationInput {
            distance_km: parse_field(Field::Distance, &self.distance, mode)?,
            time_min: parse_field(Field::Time, &self.time, mode)?,
            velocity1_kmh: parse_field(Field::Velocity1, &self.velocity1, mode)?,
            velocity2_kmh: parse_field(Field::Velocity2, &self.velocity2, mode)?,
        })
    }
}

/// Parses one field.
///
/// Surrounding whitespace is ignored. Signs, an optional decimal point and
/// exponent notation are accepted (`-3`, `.5`, `1e3`).
pub fn parse_field(field: Field, raw: &str, mode: ParseMode) -> Result<f64, CalculationError> {
    let invalid = || CalculationError::InvalidNumber {
        field,
        raw: raw.to_string(),
    };

    let value: f64 = raw.trim().parse().map_err(|_| invalid())?;
    if mode == ParseMode::Strict && !value.is_finite() {
        return Err(invalid());
    }
    Ok(value)
}
