use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

const CELSIUS_OFFSET: f64 = 273.15;

/// A physical temperature quantity using f64 precision.
///
/// Kelvin is the base unit. Effective stellar temperatures are always quoted
/// in Kelvin, and the absolute scale keeps T⁴ terms well defined.
///
/// # Examples
///
/// ```rust
/// use units::Temperature;
///
/// let sun = Temperature::from_kelvin(5778.0);
/// let room = Temperature::from_celsius(20.0);
///
/// assert!((room.to_kelvin() - 293.15).abs() < 1e-9);
/// assert!(sun > room);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Temperature(f64); // Base unit: Kelvin

impl Temperature {
    /// Creates a new `Temperature` from a value in Kelvin.
    pub fn from_kelvin(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Temperature` from a value in Celsius.
    ///
    /// Converts Celsius to Kelvin: K = °C + 273.15
    pub fn from_celsius(value: f64) -> Self {
        Self(value + CELSIUS_OFFSET)
    }

    /// Returns the temperature value in Kelvin.
    pub fn to_kelvin(&self) -> f64 {
        self.0
    }

    /// Converts the temperature to Celsius.
    pub fn to_celsius(&self) -> f64 {
        self.0 - CELSIUS_OFFSET
    }

    /// Raise to integer power
    pub fn powi(&self, n: i32) -> f64 {
        self.0.powi(n)
    }
}

impl Add for Temperature {
    type Output = Temperature;

    fn add(self, rhs: Temperature) -> Temperature {
        Temperature(self.0 + rhs.0)
    }
}

impl Sub for Temperature {
    type Output = Temperature;

    fn sub(self, rhs: Temperature) -> Temperature {
        Temperature(self.0 - rhs.0)
    }
}

impl Mul<f64> for Temperature {
    type Output = Temperature;

    fn mul(self, rhs: f64) -> Temperature {
        Temperature(self.0 * rhs)
    }
}

impl Div<f64> for Temperature {
    type Output = Temperature;

    fn div(self, rhs: f64) -> Temperature {
        Temperature(self.0 / rhs)
    }
}

/// Ratio of two temperatures, e.g. T/T☉
impl Div<Temperature> for Temperature {
    type Output = f64;

    fn div(self, rhs: Temperature) -> f64 {
        self.0 / rhs.0
    }
}
