//! Full analysis of a single star, renderable as text or JSON.

use std::fmt;

use serde::Serialize;
use units::time::{SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_YEAR};
use units::{Length, Time};

use crate::classification::{LuminosityClassification, SpectralClassification};
use crate::physics::{SOLAR_APPARENT_MAGNITUDE, SOLAR_CONSTANT};
use crate::star::{HabitableZone, Star};

/// Angular diameter of the Sun seen from Earth (degrees)
const SOLAR_ANGULAR_SIZE_DEG: f64 = 0.53;

/// Brightness ratio per magnitude step (100^(1/5))
const POGSON_RATIO: f64 = 2.512;

const SEPARATOR_WIDTH: usize = 50;

/// Every calculator evaluated once for one star.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StellarReport {
    pub star: Star,
    /// Bolometric luminosity (L☉)
    pub luminosity: f64,
    pub habitable_zone: HabitableZone,
    pub earth_equivalent_distance: Length,
    pub orbital_period: Time,
    pub apparent_magnitude: f64,
    /// Angular diameter in degrees at the Earth-equivalent distance
    pub angular_size: f64,
    /// W/m² at 1 AU
    pub irradiance_at_1au: f64,
    pub spectral_class: SpectralClassification,
    pub luminosity_class: LuminosityClassification,
}

impl StellarReport {
    pub fn for_star(star: &Star) -> Self {
        Self {
            star: *star,
            luminosity: star.luminosity(),
            habitable_zone: star.habitable_zone(),
            earth_equivalent_distance: star.earth_equivalent_distance(),
            orbital_period: star.orbital_period(),
            apparent_magnitude: star.apparent_magnitude(),
            angular_size: star.angular_size(),
            irradiance_at_1au: star.irradiance_at_1au(),
            spectral_class: star.spectral_class(),
            luminosity_class: star.luminosity_class(),
        }
    }

    /// Human-readable result sections, in display order.
    pub fn sections(&self) -> Vec<String> {
        vec![
            self.luminosity_section(),
            self.habitable_zone_section(),
            self.earth_equivalent_section(),
            self.orbital_period_section(),
            self.magnitude_section(),
            self.angular_size_section(),
            self.irradiance_section(),
            self.spectral_class.to_string(),
            self.luminosity_class.to_string(),
        ]
    }

    fn luminosity_section(&self) -> String {
        format!(
            "Total Stellar Luminosity\nOutput: {:.3} L☉\n(Total energy output compared to our Sun)",
            self.luminosity
        )
    }

    fn habitable_zone_section(&self) -> String {
        format!(
            "Habitable Zone Boundaries\n\
             Inner boundary: {:.2} AU (too hot beyond this point)\n\
             Outer boundary: {:.2} AU (too cold beyond this point)\n\
             For reference: Earth orbits at 1.0 AU",
            self.habitable_zone.inner.to_au(),
            self.habitable_zone.outer.to_au()
        )
    }

    fn earth_equivalent_section(&self) -> String {
        format!(
            "Earth-equivalent Distance\nDistance: {:.2} AU\n(Where a planet would receive the same radiation as Earth)",
            self.earth_equivalent_distance.to_au()
        )
    }

    fn orbital_period_section(&self) -> String {
        format!(
            "Orbital Period at Earth-equivalent Distance\nPeriod: {}\n(Time for one complete orbit at a distance receiving Earth-like radiation)",
            format_period(self.orbital_period)
        )
    }

    fn magnitude_section(&self) -> String {
        let factor = POGSON_RATIO.powf(SOLAR_APPARENT_MAGNITUDE - self.apparent_magnitude);
        let comparison = if factor > 1.0 {
            format!("{:.1} times brighter than the Sun", factor)
        } else {
            format!("{:.1} times dimmer than the Sun", 1.0 / factor)
        };
        format!(
            "Apparent Magnitude at Earth-equivalent Distance\nMagnitude: {:.2}\n{}\n(As it would appear in Earth's sky)",
            self.apparent_magnitude, comparison
        )
    }

    fn angular_size_section(&self) -> String {
        format!(
            "Angular Size at Earth-equivalent Distance\nSize: {:.2} degrees\nApparent size relative to our Sun: {:.1}%\n(This is how large the star would appear in the sky)",
            self.angular_size,
            self.angular_size / SOLAR_ANGULAR_SIZE_DEG * 100.0
        )
    }

    fn irradiance_section(&self) -> String {
        format!(
            "Radiation at 1 AU\n{}\nComparison: {:.1}% of Earth's solar radiation\n(How irradiated a planet would be at 1 AU from this star relative to Earth)",
            format_irradiance(self.irradiance_at_1au),
            self.irradiance_at_1au / SOLAR_CONSTANT * 100.0
        )
    }
}

impl fmt::Display for StellarReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Stellar Analysis Complete")?;
        writeln!(f, "=========================")?;
        writeln!(f, "Input Parameters:")?;
        writeln!(f, "Mass: {:.2} solar masses", self.star.mass.to_solar_masses())?;
        writeln!(f, "Radius: {:.2} solar radii", self.star.radius.to_solar_radii())?;
        writeln!(f, "Temperature: {:.0}K", self.star.temperature.to_kelvin())?;
        writeln!(f)?;
        writeln!(f, "Analysis Results")?;
        writeln!(f, "================")?;

        for section in self.sections() {
            writeln!(f)?;
            writeln!(f, "{}", section)?;
            writeln!(f, "{}", "-".repeat(SEPARATOR_WIDTH))?;
        }
        Ok(())
    }
}

/// Formats an orbital period with the most readable unit.
pub fn format_period(period: Time) -> String {
    let seconds = period.to_seconds();
    if seconds >= SECONDS_PER_YEAR {
        format!("{:.2} years", period.to_years())
    } else if seconds >= SECONDS_PER_DAY {
        format!("{:.1} days", period.to_days())
    } else if seconds >= SECONDS_PER_HOUR {
        format!("{:.1} hours", period.to_hours())
    } else {
        format!("{:.1} seconds", seconds)
    }
}

/// Irradiance line scaled to W, kW, MW or GW per m².
pub fn format_irradiance(irradiance: f64) -> String {
    if irradiance >= 1e9 {
        format!("Level: {:.2} GW/m²", irradiance / 1e9)
    } else if irradiance >= 1e6 {
        format!("Level: {:.2} MW/m²", irradiance / 1e6)
    } else if irradiance >= 1e3 {
        format!("Level: {:.2} kW/m²", irradiance / 1e3)
    } else {
        format!("Level: {:.2} W/m²", irradiance)
    }
}
