use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul};

pub const SECONDS_PER_HOUR: f64 = 3_600.0;
pub const SECONDS_PER_DAY: f64 = 86_400.0;
pub const DAYS_PER_YEAR: f64 = 365.25;
pub const SECONDS_PER_YEAR: f64 = DAYS_PER_YEAR * SECONDS_PER_DAY;

/// A physical time quantity using f64 precision.
///
/// Seconds are the base unit because orbital periods come straight out of
/// Kepler's third law in SI. Julian years (365.25 days) are used for the
/// year conversion.
///
/// # Examples
///
/// ```rust
/// use units::Time;
///
/// let period = Time::from_days(365.25);
/// assert!((period.to_years() - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Time(f64); // Base unit: Seconds

impl Time {
    /// Creates a new `Time` from a value in seconds.
    pub fn from_seconds(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Time` from a value in hours.
    pub fn from_hours(value: f64) -> Self {
        Self(value * SECONDS_PER_HOUR)
    }

    /// Creates a new `Time` from a value in days.
    pub fn from_days(value: f64) -> Self {
        Self(value * SECONDS_PER_DAY)
    }

    /// Creates a new `Time` from a value in Julian years.
    pub fn from_years(value: f64) -> Self {
        Self(value * SECONDS_PER_YEAR)
    }

    /// Returns the time in seconds.
    pub fn to_seconds(&self) -> f64 {
        self.0
    }

    /// Converts the time to hours.
    pub fn to_hours(&self) -> f64 {
        self.0 / SECONDS_PER_HOUR
    }

    /// Converts the time to days.
    pub fn to_days(&self) -> f64 {
        self.0 / SECONDS_PER_DAY
    }

    /// Converts the time to Julian years.
    pub fn to_years(&self) -> f64 {
        self.0 / SECONDS_PER_YEAR
    }
}

impl Add for Time {
    type Output = Time;

    fn add(self, rhs: Time) -> Time {
        Time(self.0 + rhs.0)
    }
}

impl Mul<f64> for Time {
    type Output = Time;

    fn mul(self, rhs: f64) -> Time {
        Time(self.0 * rhs)
    }
}
