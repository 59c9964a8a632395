use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// Mass of the Sun in kilograms (1.989 × 10³⁰ kg)
pub const SOLAR_MASS_KG: f64 = 1.989e30;

/// A physical mass quantity using f64 precision.
///
/// Solar masses are the base unit, which keeps stellar inputs readable and
/// lets the mass–luminosity relations work directly on the stored value.
///
/// # Examples
///
/// ```rust
/// use units::Mass;
///
/// let sun = Mass::from_solar_masses(1.0);
/// let kg = sun.to_kg();
/// assert!((Mass::from_kg(kg).to_solar_masses() - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Mass(f64); // Base unit: Solar Masses

impl Mass {
    /// Creates a new `Mass` from a value in solar masses.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use units::Mass;
    ///
    /// let red_dwarf = Mass::from_solar_masses(0.2);
    /// let blue_giant = Mass::from_solar_masses(25.0);
    /// ```
    pub fn from_solar_masses(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Mass` from a value in kilograms.
    pub fn from_kg(value: f64) -> Self {
        Self(value / SOLAR_MASS_KG)
    }

    /// Returns the mass in solar masses (M☉).
    pub fn to_solar_masses(&self) -> f64 {
        self.0
    }

    /// Returns the mass in kilograms.
    pub fn to_kg(&self) -> f64 {
        self.0 * SOLAR_MASS_KG
    }

    /// Power function on the solar-mass value
    pub fn powf(&self, n: f64) -> f64 {
        self.0.powf(n)
    }
}

impl Add for Mass {
    type Output = Mass;

    fn add(self, rhs: Mass) -> Mass {
        Mass(self.0 + rhs.0)
    }
}

impl Sub for Mass {
    type Output = Mass;

    fn sub(self, rhs: Mass) -> Mass {
        Mass(self.0 - rhs.0)
    }
}

impl Mul<f64> for Mass {
    type Output = Mass;

    fn mul(self, rhs: f64) -> Mass {
        Mass(self.0 * rhs)
    }
}

impl Div<f64> for Mass {
    type Output = Mass;

    fn div(self, rhs: f64) -> Mass {
        Mass(self.0 / rhs)
    }
}
