//! Plausibility limits for user-supplied star parameters.
//!
//! [`Star::new`](crate::Star::new) only insists on positive, finite values.
//! These limits sit in front of it at the input boundary and reject values
//! beyond anything physically observed.

use serde::{Deserialize, Serialize};

use crate::error::{Result, StellarError, require_positive};
use crate::star::Star;

/// Upper bounds for star parameters, loadable from configuration.
///
/// Missing fields fall back to the defaults:
///
/// ```toml
/// maxMassSolar = 150.0
/// maxRadiusSolar = 2000.0
/// maxTemperatureK = 200000.0
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ValidationLimits {
    pub max_mass_solar: f64,
    pub max_radius_solar: f64,
    pub max_temperature_k: f64,
}

impl Default for ValidationLimits {
    fn default() -> Self {
        Self {
            max_mass_solar: 150.0,
            max_radius_solar: 2000.0,
            max_temperature_k: 200_000.0,
        }
    }
}

impl ValidationLimits {
    pub fn validate_mass(&self, mass_solar: f64) -> Result<f64> {
        let mass = require_positive("mass", mass_solar)?;
        check_limit(
            "mass",
            mass,
            self.max_mass_solar,
            "theoretical stellar limit in solar masses",
        )
    }

    pub fn validate_radius(&self, radius_solar: f64) -> Result<f64> {
        let radius = require_positive("radius", radius_solar)?;
        check_limit(
            "radius",
            radius,
            self.max_radius_solar,
            "largest known star (~1700 solar radii)",
        )
    }

    pub fn validate_temperature(&self, temperature_k: f64) -> Result<f64> {
        let temperature = require_positive("temperature", temperature_k)?;
        check_limit(
            "temperature",
            temperature,
            self.max_temperature_k,
            "hottest known stars (~150000 K)",
        )
    }

    /// Orbital distances (AU) only need to be positive.
    pub fn validate_distance(&self, distance_au: f64) -> Result<f64> {
        require_positive("distance", distance_au)
    }

    /// Checks all parameters of an already constructed star.
    pub fn validate_star(&self, star: &Star) -> Result<()> {
        self.validate_mass(star.mass.to_solar_masses())?;
        self.validate_radius(star.radius.to_solar_radii())?;
        self.validate_temperature(star.temperature.to_kelvin())?;
        Ok(())
    }
}

fn check_limit(quantity: &'static str, value: f64, limit: f64, reason: &'static str) -> Result<f64> {
    if value > limit {
        return Err(StellarError::ExceedsLimit {
            quantity,
            value,
            limit,
            reason,
        });
    }
    Ok(value)
}
