use approx::assert_relative_eq;
use units::{Length, Mass, Temperature};

use crate::physics::{
    SOLAR_APPARENT_MAGNITUDE, SOLAR_CONSTANT, SOLAR_LUMINOSITY_W, angular_size_degrees,
    apparent_magnitude, earth_equivalent_distance, habitable_zone, irradiance_at,
    luminosity_solar, orbital_period, radiant_flux,
};

fn solar_radius() -> Length {
    Length::from_solar_radii(1.0)
}

fn solar_temperature() -> Temperature {
    Temperature::from_kelvin(5778.0)
}

#[test]
fn sun_radiant_flux_matches_nominal_luminosity() {
    let flux = radiant_flux(solar_radius(), solar_temperature());
    assert_relative_eq!(flux, SOLAR_LUMINOSITY_W, max_relative = 0.01);
    assert_relative_eq!(
        luminosity_solar(solar_radius(), solar_temperature()),
        1.0,
        epsilon = 0.01
    );
}

#[test]
fn luminosity_scales_with_r_squared_t_fourth() {
    let base = luminosity_solar(solar_radius(), solar_temperature());
    let big = luminosity_solar(Length::from_solar_radii(3.0), solar_temperature());
    let hot = luminosity_solar(solar_radius(), Temperature::from_kelvin(5778.0 * 2.0));

    assert_relative_eq!(big / base, 9.0, max_relative = 1e-12);
    assert_relative_eq!(hot / base, 16.0, max_relative = 1e-12);
}

#[test]
fn sun_irradiance_at_one_au_is_solar_constant() {
    let irradiance = irradiance_at(solar_radius(), solar_temperature(), Length::from_au(1.0));
    assert_relative_eq!(irradiance, SOLAR_CONSTANT, max_relative = 0.01);
}

#[test]
fn earth_equivalent_distance_scaling() {
    assert_relative_eq!(
        earth_equivalent_distance(solar_radius(), solar_temperature()).to_au(),
        1.0,
        max_relative = 1e-9
    );
    assert_relative_eq!(
        earth_equivalent_distance(Length::from_solar_radii(2.0), solar_temperature()).to_au(),
        2.0,
        max_relative = 1e-9
    );
    assert_relative_eq!(
        earth_equivalent_distance(solar_radius(), Temperature::from_kelvin(11_556.0)).to_au(),
        4.0,
        max_relative = 1e-9
    );
}

#[test]
fn earth_orbit_takes_a_year() {
    let period = orbital_period(Mass::from_solar_masses(1.0), Length::from_au(1.0));
    assert_relative_eq!(period.to_days(), 365.25, epsilon = 0.5);
}

#[test]
fn heavier_star_shortens_period() {
    let sun = orbital_period(Mass::from_solar_masses(1.0), Length::from_au(1.0));
    let heavy = orbital_period(Mass::from_solar_masses(4.0), Length::from_au(1.0));
    assert_relative_eq!(sun.to_seconds() / heavy.to_seconds(), 2.0, max_relative = 1e-12);
}

#[test]
fn apparent_magnitude_of_sun() {
    assert_relative_eq!(
        apparent_magnitude(solar_radius(), solar_temperature()),
        SOLAR_APPARENT_MAGNITUDE,
        epsilon = 1e-9
    );
}

#[test]
fn apparent_magnitude_drops_five_per_hundredfold_luminosity() {
    let magnitude = apparent_magnitude(Length::from_solar_radii(10.0), solar_temperature());
    assert_relative_eq!(magnitude, SOLAR_APPARENT_MAGNITUDE - 5.0, epsilon = 1e-9);
}

#[test]
fn sun_angular_size_from_earth() {
    let size = angular_size_degrees(solar_radius(), Length::from_au(1.0));
    assert_relative_eq!(size, 0.533, epsilon = 0.001);
}

#[test]
fn habitable_zone_scales_with_sqrt_luminosity() {
    let (inner, outer) = habitable_zone(4.0);
    assert_relative_eq!(inner.to_au(), 1.9);
    assert_relative_eq!(outer.to_au(), 2.74);
}
