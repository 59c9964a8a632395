use crate::spectral::SpectralType;
use crate::spectral_band::{TEMPERATURE_BANDS, TemperatureBand, band_for, subtype_for};

fn label(temperature_k: f64) -> String {
    let band = band_for(temperature_k);
    format!("{}{}", band.spectral_type, subtype_for(temperature_k, band))
}

// ============================================================================
// Band table
// ============================================================================

#[test]
fn bands_partition_positive_temperatures() {
    assert_eq!(TEMPERATURE_BANDS.len(), 10);
    assert_eq!(TEMPERATURE_BANDS[0].max_kelvin, None);
    assert_eq!(TEMPERATURE_BANDS[9].min_kelvin, 0.0);

    // Each band's lower edge is the next hotter band's upper edge
    for pair in TEMPERATURE_BANDS.windows(2) {
        assert_eq!(Some(pair[0].min_kelvin), pair[1].max_kelvin);
    }
}

#[test]
fn bands_are_ordered_hot_to_cool() {
    let order: Vec<SpectralType> = TEMPERATURE_BANDS.iter().map(|b| b.spectral_type).collect();
    assert_eq!(
        order,
        vec![
            SpectralType::O,
            SpectralType::B,
            SpectralType::A,
            SpectralType::F,
            SpectralType::G,
            SpectralType::K,
            SpectralType::M,
            SpectralType::L,
            SpectralType::T,
            SpectralType::Y,
        ]
    );
}

// ============================================================================
// band_for
// ============================================================================

#[test]
fn band_lower_bounds_are_inclusive() {
    assert_eq!(band_for(30_000.0).spectral_type, SpectralType::O);
    assert_eq!(band_for(10_000.0).spectral_type, SpectralType::B);
    assert_eq!(band_for(7_500.0).spectral_type, SpectralType::A);
    assert_eq!(band_for(6_000.0).spectral_type, SpectralType::F);
    assert_eq!(band_for(5_200.0).spectral_type, SpectralType::G);
    assert_eq!(band_for(550.0).spectral_type, SpectralType::T);
}

#[test]
fn band_upper_bounds_are_exclusive() {
    assert_eq!(band_for(29_999.99).spectral_type, SpectralType::B);
    assert_eq!(band_for(5_999.99).spectral_type, SpectralType::G);
    assert_eq!(band_for(549.99).spectral_type, SpectralType::Y);
}

#[test]
fn hottest_band_is_unbounded() {
    assert_eq!(band_for(1.0e6).spectral_type, SpectralType::O);
}

#[test]
fn out_of_domain_temperatures_fall_back_to_coolest_band() {
    assert_eq!(band_for(-10.0).spectral_type, SpectralType::Y);
    assert_eq!(band_for(f64::NAN).spectral_type, SpectralType::Y);
}

// ============================================================================
// subtype_for
// ============================================================================

#[test]
fn sun_is_g2() {
    // floor(10 * (6000 - 5778) / 800) = floor(2.775)
    assert_eq!(label(5778.0), "G2");
}

#[test]
fn well_known_stars() {
    assert_eq!(label(9940.0), "A0"); // Sirius
    assert_eq!(label(9602.0), "A1"); // Vega
    assert_eq!(label(12_100.0), "B8"); // Rigel
    assert_eq!(label(3500.0), "M1"); // Betelgeuse
}

#[test]
fn hot_edge_is_subtype_zero() {
    assert_eq!(label(29_999.99), "B0");
    assert_eq!(label(7_499.99), "F0");
}

#[test]
fn cool_edge_is_subtype_nine() {
    // Lower bound sits exactly 10 sub-bands from the top, clamped to 9
    assert_eq!(label(30_000.0), "O9");
    assert_eq!(label(550.0), "T9");
    assert_eq!(label(1.0), "Y9");
}

#[test]
fn o_band_uses_finite_ceiling() {
    // (50000 - 40000) / 20000 = 0.5
    assert_eq!(label(40_000.0), "O5");
    // Hotter than the ceiling clamps to O0
    assert_eq!(label(80_000.0), "O0");
}

#[test]
fn degenerate_band_returns_subtype_zero() {
    let band = TemperatureBand {
        spectral_type: SpectralType::Y,
        min_kelvin: 100.0,
        max_kelvin: Some(100.0),
    };
    assert_eq!(subtype_for(100.0, &band), 0);
}

#[test]
fn nan_subtype_is_zero() {
    assert_eq!(subtype_for(f64::NAN, &TEMPERATURE_BANDS[4]), 0);
}
