use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// Astronomical Unit in meters (IAU 2012 definition)
pub const AU_M: f64 = 1.495978707e11;

/// Nominal solar radius in meters
pub const SOLAR_RADIUS_M: f64 = 6.957e8;

const AU_TO_KM: f64 = AU_M / 1000.0;

/// A physical length quantity using f64 precision.
///
/// The base unit is the astronomical unit. Stellar radii are usually given in
/// solar radii and orbital distances in AU, so both convert with a single
/// multiplication; meters are available for the SI physics formulas.
///
/// # Examples
///
/// ```rust
/// use units::Length;
///
/// let sun_radius = Length::from_solar_radii(1.0);
/// let earth_orbit = Length::from_au(1.0);
///
/// assert!(earth_orbit.to_solar_radii() > 215.0);
/// assert!((sun_radius.to_meters() - 6.957e8).abs() < 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Length(f64); // Base unit: AU

impl Length {
    /// Creates a new `Length` from a value in astronomical units.
    pub fn from_au(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Length` from a value in solar radii (R☉).
    pub fn from_solar_radii(value: f64) -> Self {
        Self(value * SOLAR_RADIUS_M / AU_M)
    }

    /// Creates a new `Length` from a value in meters.
    pub fn from_meters(value: f64) -> Self {
        Self(value / AU_M)
    }

    /// Creates a new `Length` from a value in kilometers.
    pub fn from_km(value: f64) -> Self {
        Self(value / AU_TO_KM)
    }

    /// Returns the length in astronomical units.
    pub fn to_au(&self) -> f64 {
        self.0
    }

    /// Returns the length in solar radii.
    pub fn to_solar_radii(&self) -> f64 {
        self.0 * AU_M / SOLAR_RADIUS_M
    }

    /// Returns the length in meters.
    pub fn to_meters(&self) -> f64 {
        self.0 * AU_M
    }

    /// Returns the length in kilometers.
    pub fn to_km(&self) -> f64 {
        self.0 * AU_TO_KM
    }

    /// Raise the AU value to an integer power
    pub fn powi(&self, n: i32) -> f64 {
        self.0.powi(n)
    }
}

impl Add for Length {
    type Output = Length;

    fn add(self, rhs: Length) -> Length {
        Length(self.0 + rhs.0)
    }
}

impl Sub for Length {
    type Output = Length;

    fn sub(self, rhs: Length) -> Length {
        Length(self.0 - rhs.0)
    }
}

impl Mul<f64> for Length {
    type Output = Length;

    fn mul(self, rhs: f64) -> Length {
        Length(self.0 * rhs)
    }
}

impl Div<f64> for Length {
    type Output = Length;

    fn div(self, rhs: f64) -> Length {
        Length(self.0 / rhs)
    }
}

/// Ratio of two lengths
impl Div<Length> for Length {
    type Output = f64;

    fn div(self, rhs: Length) -> f64 {
        self.0 / rhs.0
    }
}
