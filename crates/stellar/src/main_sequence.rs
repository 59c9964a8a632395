//! Main-sequence mass–luminosity baseline.

/// Expected main-sequence luminosity (L☉) for a star of `mass_solar` (M☉).
///
/// Piecewise power-law approximation of the mass–luminosity relation:
///
/// * M < 0.43 M☉: L = 0.23 M²·³
/// * 0.43–2 M☉: L = M⁴
/// * 2–20 M☉: L = 1.5 M³·⁵
/// * M ≥ 20 M☉: L = 3200 M (radiation pressure flattens the relation)
pub fn expected_luminosity(mass_solar: f64) -> f64 {
    match mass_solar {
        m if m < 0.43 => 0.23 * m.powf(2.3),
        m if m < 2.0 => m.powf(4.0),
        m if m < 20.0 => 1.5 * m.powf(3.5),
        m => 3200.0 * m,
    }
}

/// ΔlogL_MS: how far `luminosity_solar` sits above (positive) or below
/// (negative) the main-sequence baseline for `mass_solar`, in dex.
pub fn luminosity_delta(mass_solar: f64, luminosity_solar: f64) -> f64 {
    (luminosity_solar / expected_luminosity(mass_solar)).log10()
}
