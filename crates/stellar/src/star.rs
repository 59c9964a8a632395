//! The star model and the per-star calculators.

use serde::{Deserialize, Serialize};
use units::{Length, Mass, Temperature, Time};

use crate::classification::{self, LuminosityClassification, SpectralClassification};
use crate::error::{Result, StellarError, require_positive};
use crate::luminosity_class::ClassificationInput;
use crate::physics;

/// A star described by its mass, radius and effective temperature.
///
/// All three are guaranteed positive and finite; the only constructors are
/// [`Star::new`] and [`StarBuilder::build`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "StarParameters", into = "StarParameters")]
pub struct Star {
    pub mass: Mass,
    pub radius: Length,
    pub temperature: Temperature,
}

/// Wire form of [`Star`] in solar units and Kelvin, validated on the way in.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StarParameters {
    mass_solar: f64,
    radius_solar: f64,
    temperature_k: f64,
}

impl From<Star> for StarParameters {
    fn from(star: Star) -> Self {
        Self {
            mass_solar: star.mass.to_solar_masses(),
            radius_solar: star.radius.to_solar_radii(),
            temperature_k: star.temperature.to_kelvin(),
        }
    }
}

impl TryFrom<StarParameters> for Star {
    type Error = StellarError;

    fn try_from(params: StarParameters) -> Result<Self> {
        Star::new(params.mass_solar, params.radius_solar, params.temperature_k)
    }
}

impl Star {
    /// Creates a star from mass (M☉), radius (R☉) and temperature (K).
    ///
    /// # Errors
    ///
    /// Returns an error if any value is zero, negative, NaN or infinite.
    ///
    /// # Example
    /// ```
    /// use stellar::Star;
    ///
    /// let sun = Star::new(1.0, 1.0, 5778.0).unwrap();
    /// assert_eq!(sun.spectral_class().mk_label(), "G2");
    /// ```
    pub fn new(mass_solar: f64, radius_solar: f64, temperature_k: f64) -> Result<Self> {
        Ok(Self {
            mass: Mass::from_solar_masses(require_positive("mass", mass_solar)?),
            radius: Length::from_solar_radii(require_positive("radius", radius_solar)?),
            temperature: Temperature::from_kelvin(require_positive(
                "temperature",
                temperature_k,
            )?),
        })
    }

    /// The Sun: 1 M☉, 1 R☉, 5778 K.
    pub fn sun() -> Self {
        Self {
            mass: Mass::from_solar_masses(1.0),
            radius: Length::from_solar_radii(1.0),
            temperature: Temperature::from_kelvin(physics::SOLAR_TEMPERATURE_K),
        }
    }

    pub fn builder() -> StarBuilder {
        StarBuilder::default()
    }

    /// Bolometric luminosity in L☉ from the Stefan–Boltzmann law.
    pub fn luminosity(&self) -> f64 {
        physics::luminosity_solar(self.radius, self.temperature)
    }

    /// Conservative habitable zone derived from luminosity.
    pub fn habitable_zone(&self) -> HabitableZone {
        let (inner, outer) = physics::habitable_zone(self.luminosity());
        HabitableZone { inner, outer }
    }

    /// Orbital distance receiving Earth's irradiance.
    pub fn earth_equivalent_distance(&self) -> Length {
        physics::earth_equivalent_distance(self.radius, self.temperature)
    }

    /// Orbital period of a planet at the Earth-equivalent distance.
    pub fn orbital_period(&self) -> Time {
        physics::orbital_period(self.mass, self.earth_equivalent_distance())
    }

    /// Apparent magnitude seen from the Earth-equivalent distance.
    pub fn apparent_magnitude(&self) -> f64 {
        physics::apparent_magnitude(self.radius, self.temperature)
    }

    /// Angular diameter in degrees seen from the Earth-equivalent distance.
    pub fn angular_size(&self) -> f64 {
        physics::angular_size_degrees(self.radius, self.earth_equivalent_distance())
    }

    /// Irradiance in W/m² at a fixed distance of 1 AU.
    pub fn irradiance_at_1au(&self) -> f64 {
        physics::irradiance_at(self.radius, self.temperature, Length::from_au(1.0))
    }

    pub fn spectral_class(&self) -> SpectralClassification {
        classification::spectral_classification(self.temperature.to_kelvin())
    }

    /// Luminosity class using the Stefan–Boltzmann luminosity of this star.
    pub fn luminosity_class(&self) -> LuminosityClassification {
        let input = ClassificationInput::new(
            self.mass.to_solar_masses(),
            self.radius.to_solar_radii(),
            self.temperature.to_kelvin(),
            self.luminosity(),
        );
        classification::luminosity_classification(&input)
    }
}

/// Inner and outer edge of the habitable zone.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitableZone {
    pub inner: Length,
    pub outer: Length,
}

/// Fluent builder for [`Star`].
///
/// ```
/// use stellar::Star;
///
/// let star = Star::builder()
///     .mass(2.1)
///     .radius(1.7)
///     .temperature(9940.0)
///     .build()
///     .unwrap();
/// assert_eq!(star.spectral_class().mk_label(), "A0");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct StarBuilder {
    mass_solar: Option<f64>,
    radius_solar: Option<f64>,
    temperature_k: Option<f64>,
}

impl StarBuilder {
    pub fn mass(mut self, mass_solar: f64) -> Self {
        self.mass_solar = Some(mass_solar);
        self
    }

    pub fn radius(mut self, radius_solar: f64) -> Self {
        self.radius_solar = Some(radius_solar);
        self
    }

    pub fn temperature(mut self, temperature_k: f64) -> Self {
        self.temperature_k = Some(temperature_k);
        self
    }

    /// # Errors
    ///
    /// [`StellarError::MissingParameter`] for the first unset field, then any
    /// error from [`Star::new`].
    pub fn build(self) -> Result<Star> {
        let mass = self.mass_solar.ok_or(StellarError::MissingParameter("mass"))?;
        let radius = self
            .radius_solar
            .ok_or(StellarError::MissingParameter("radius"))?;
        let temperature = self
            .temperature_k
            .ok_or(StellarError::MissingParameter("temperature"))?;
        Star::new(mass, radius, temperature)
    }
}
