//! Stellar physics relations in SI and solar units.

use std::f64::consts::PI;

use units::{Length, Mass, Temperature, Time};

/// Gravitational constant (m³ kg⁻¹ s⁻²)
pub const G: f64 = 6.674e-11;

/// Stefan–Boltzmann constant (W m⁻² K⁻⁴)
pub const STEFAN_BOLTZMANN: f64 = 5.670374419e-8;

/// Nominal solar luminosity (W)
pub const SOLAR_LUMINOSITY_W: f64 = 3.828e26;

/// Solar effective temperature (K)
pub const SOLAR_TEMPERATURE_K: f64 = 5778.0;

/// Irradiance at 1 AU from the Sun (W/m²)
pub const SOLAR_CONSTANT: f64 = 1361.0;

/// Apparent magnitude of the Sun seen from Earth
pub const SOLAR_APPARENT_MAGNITUDE: f64 = -26.74;

/// Conservative habitable zone edges in units of √L (AU)
const HABITABLE_INNER_FACTOR: f64 = 0.95;
const HABITABLE_OUTER_FACTOR: f64 = 1.37;

/// Total radiant flux in watts, L = 4πR²σT⁴.
pub fn radiant_flux(radius: Length, temperature: Temperature) -> f64 {
    let surface_area = 4.0 * PI * radius.to_meters().powi(2);
    STEFAN_BOLTZMANN * surface_area * temperature.powi(4)
}

/// Bolometric luminosity in solar luminosities (L☉).
pub fn luminosity_solar(radius: Length, temperature: Temperature) -> f64 {
    radiant_flux(radius, temperature) / SOLAR_LUMINOSITY_W
}

/// Irradiance (W/m²) received at `distance` from the star.
pub fn irradiance_at(radius: Length, temperature: Temperature, distance: Length) -> f64 {
    let sphere = 4.0 * PI * distance.to_meters().powi(2);
    radiant_flux(radius, temperature) / sphere
}

/// Distance at which a planet receives the same irradiance as Earth.
///
/// d = √(R² (T/T☉)⁴) with R in solar radii and d in AU.
pub fn earth_equivalent_distance(radius: Length, temperature: Temperature) -> Length {
    let r = radius.to_solar_radii();
    let t = temperature / Temperature::from_kelvin(SOLAR_TEMPERATURE_K);
    Length::from_au((r * r * t.powi(4)).sqrt())
}

/// Orbital period from Kepler's third law, T = 2π √(r³ / GM).
pub fn orbital_period(stellar_mass: Mass, orbit_radius: Length) -> Time {
    let r = orbit_radius.to_meters();
    Time::from_seconds(2.0 * PI * (r.powi(3) / (G * stellar_mass.to_kg())).sqrt())
}

/// Apparent magnitude at the Earth-equivalent distance.
///
/// m = −2.5 log₁₀(L/L☉) + m☉ with L/L☉ = R² (T/T☉)⁴.
pub fn apparent_magnitude(radius: Length, temperature: Temperature) -> f64 {
    let t = temperature / Temperature::from_kelvin(SOLAR_TEMPERATURE_K);
    let relative_luminosity = radius.to_solar_radii().powi(2) * t.powi(4);
    -2.5 * relative_luminosity.log10() + SOLAR_APPARENT_MAGNITUDE
}

/// Full angular diameter in degrees of a sphere of `radius` seen from `distance`.
pub fn angular_size_degrees(radius: Length, distance: Length) -> f64 {
    2.0 * (radius / distance).atan().to_degrees()
}

/// Inner and outer habitable zone edges for a star of `luminosity_solar`.
pub fn habitable_zone(luminosity_solar: f64) -> (Length, Length) {
    let base = luminosity_solar.sqrt();
    (
        Length::from_au(base * HABITABLE_INNER_FACTOR),
        Length::from_au(base * HABITABLE_OUTER_FACTOR),
    )
}
