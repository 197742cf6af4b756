//! Data model for a single meeting-time calculation.
//!
//! Every value here is transient: it is built by one call to
//! [`crate::engine::compute`] and dropped once the caller has rendered it.

use std::fmt;

use serde::Serialize;

/// One of the four form fields feeding the formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Distance,
    Time,
    Velocity1,
    Velocity2,
}

impl Field {
    /// All fields in form order.
    pub const ALL: [Field; 4] = [
        Field::Distance,
        Field::Time,
        Field::Velocity1,
        Field::Velocity2,
    ];

    /// Stable machine-readable name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Distance => "distance",
            Field::Time => "time",
            Field::Velocity1 => "v1",
            Field::Velocity2 => "v2",
        }
    }

    /// Human-readable label without the unit.
    pub fn label(&self) -> &'static str {
        match self {
            Field::Distance => "Distance",
            Field::Time => "Time",
            Field::Velocity1 => "Velocity 1",
            Field::Velocity2 => "Velocity 2",
        }
    }

    /// Unit the field is expressed in.
    pub fn unit(&self) -> &'static str {
        match self {
            Field::Distance => "Km",
            Field::Time => "min",
            Field::Velocity1 | Field::Velocity2 => "Km/h",
        }
    }

    /// Prompt text, e.g. `Velocity 1 (Km/h)`.
    pub fn prompt(&self) -> String {
        format!("{} ({})", self.label(), self.unit())
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Parsed numeric inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CalculationInput {
    /// Separation between the two objects, in kilometres.
    pub distance_km: f64,
    /// Elapsed time, in minutes.
    pub time_min: f64,
    /// Velocity of the first object, in Km/h.
    pub velocity1_kmh: f64,
    /// Velocity of the second object, in Km/h.
    pub velocity2_kmh: f64,
}

impl CalculationInput {
    pub fn new(distance_km: f64, time_min: f64, velocity1_kmh: f64, velocity2_kmh: f64) -> Self {
        Self {
            distance_km,
            time_min,
            velocity1_kmh,
            velocity2_kmh,
        }
    }

    /// Returns the value held for `field`.
    pub fn get(&self, field: Field) -> f64 {
        match field {
            Field::Distance => self.distance_km,
            Field::Time => self.time_min,
            Field::Velocity1 => self.velocity1_kmh,
            Field::Velocity2 => self.velocity2_kmh,
        }
    }
}

/// Successful result: the echoed inputs plus every derived value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CalculationOutcome {
    #[serde(flatten)]
    pub input: CalculationInput,

    /// `time_min / 60`.
    pub time_hours: f64,

    /// `velocity2_kmh * (-time_hours)`.
    pub displacement_term: f64,

    /// `velocity1_kmh - velocity2_kmh`, never zero.
    pub relative_velocity: f64,

    /// `(distance_km + displacement_term) / relative_velocity`.
    pub meeting_time_hours: f64,
}

/// Classified calculation failure.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalculationError {
    #[error("{field} is not a valid number: {raw:?}")]
    InvalidNumber { field: Field, raw: String },

    #[error("velocity 1 and velocity 2 are equal (division by zero)")]
    DivisionByZero,
}

impl CalculationError {
    /// Stable machine-readable kind.
    pub fn kind(&self) -> &'static str {
        match self {
            CalculationError::InvalidNumber { .. } => "invalid_number",
            CalculationError::DivisionByZero => "division_by_zero",
        }
    }
}
