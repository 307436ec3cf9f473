//! Temperature rounding helpers
//!
//! All rounding is half-up (towards positive infinity on ties), so
//! `2.5` becomes `3` and `-2.5` becomes `-2`.

/// Keep a reading only if it is a finite number
#[must_use]
pub fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

/// Round half-up to the given number of decimal places
#[must_use]
pub fn round_half_up(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor + 0.5).floor() / factor
}

/// Round a reading to whole degrees
///
/// Non-finite or out-of-range readings become unknown.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn whole_degrees(value: Option<f64>) -> Option<i32> {
    let rounded = round_half_up(finite(value)?, 0);
    (f64::from(i32::MIN)..=f64::from(i32::MAX))
        .contains(&rounded)
        .then_some(rounded as i32)
}

/// Mean of a day's low and high, rounded to one decimal place
///
/// Unknown if either bound is unknown.
#[must_use]
pub fn daily_average(min: Option<f64>, max: Option<f64>) -> Option<f64> {
    let (min, max) = (finite(min)?, finite(max)?);
    Some(round_half_up((min + max) / 2.0, 1))
}
