//! Fixed unit conversions used by the formula.

/// Minutes per hour.
pub const MINUTES_PER_HOUR: f64 = 60.0;

/// Converts elapsed minutes to hours.
pub fn minutes_to_hours(minutes: f64) -> f64 {
    minutes / MINUTES_PER_HOUR
}
