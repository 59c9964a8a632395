//! Temperature bands for MK spectral type and subtype estimation.
//!
//! The ten bands partition (0 K, ∞) with no gaps or overlaps. Subtypes run
//! from 0 at the hot edge of a band to 9 at its cool edge.

use serde::Serialize;
use tracing::{trace, warn};

use crate::spectral::SpectralType;

/// Finite ceiling used in place of the O band's unbounded upper edge.
pub const HOT_BAND_CEILING_K: f64 = 50_000.0;

/// Spans narrower than this are treated as degenerate (subtype 0).
const SPAN_EPSILON_K: f64 = 1e-9;

/// A contiguous effective-temperature range mapped to one spectral type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemperatureBand {
    pub spectral_type: SpectralType,
    /// Inclusive lower bound in Kelvin
    pub min_kelvin: f64,
    /// Exclusive upper bound in Kelvin, `None` for the unbounded hottest band
    pub max_kelvin: Option<f64>,
}

impl TemperatureBand {
    const fn bounded(spectral_type: SpectralType, min_kelvin: f64, max_kelvin: f64) -> Self {
        Self {
            spectral_type,
            min_kelvin,
            max_kelvin: Some(max_kelvin),
        }
    }

    /// Whether `temperature_k` falls in `[min, max)`, or `[min, ∞)` when unbounded.
    pub fn contains(&self, temperature_k: f64) -> bool {
        match self.max_kelvin {
            None => temperature_k >= self.min_kelvin,
            Some(max) => temperature_k >= self.min_kelvin && temperature_k < max,
        }
    }

    /// Upper edge used for interpolation, never infinite.
    fn interpolation_ceiling(&self) -> f64 {
        self.max_kelvin.unwrap_or(HOT_BAND_CEILING_K)
    }
}

/// Band table, hottest first. Order is significant for [`band_for`].
pub const TEMPERATURE_BANDS: [TemperatureBand; 10] = [
    TemperatureBand {
        spectral_type: SpectralType::O,
        min_kelvin: 30_000.0,
        max_kelvin: None,
    },
    TemperatureBand::bounded(SpectralType::B, 10_000.0, 30_000.0),
    TemperatureBand::bounded(SpectralType::A, 7_500.0, 10_000.0),
    TemperatureBand::bounded(SpectralType::F, 6_000.0, 7_500.0),
    TemperatureBand::bounded(SpectralType::G, 5_200.0, 6_000.0),
    TemperatureBand::bounded(SpectralType::K, 3_700.0, 5_200.0),
    TemperatureBand::bounded(SpectralType::M, 2_400.0, 3_700.0),
    TemperatureBand::bounded(SpectralType::L, 1_300.0, 2_400.0),
    TemperatureBand::bounded(SpectralType::T, 550.0, 1_300.0),
    TemperatureBand::bounded(SpectralType::Y, 0.0, 550.0),
];

/// Finds the band containing `temperature_k`.
///
/// Falls back to the coolest band if nothing matches, which only happens for
/// inputs outside the validated domain (e.g. NaN or negative temperatures).
pub fn band_for(temperature_k: f64) -> &'static TemperatureBand {
    let coolest = &TEMPERATURE_BANDS[TEMPERATURE_BANDS.len() - 1];

    match TEMPERATURE_BANDS
        .iter()
        .find(|band| band.contains(temperature_k))
    {
        Some(band) => {
            trace!(temperature_k, spectral_type = %band.spectral_type, "matched temperature band");
            band
        }
        None => {
            warn!(temperature_k, "no temperature band matched, using coolest band");
            coolest
        }
    }
}

/// Interpolates the 0–9 subtype of `temperature_k` within `band`.
///
/// The band is split into ten equal slices: 0 at the hot edge, 9 at the cool
/// edge. Temperatures above [`HOT_BAND_CEILING_K`] in the O band clamp to 0.
pub fn subtype_for(temperature_k: f64, band: &TemperatureBand) -> u8 {
    let hi = band.interpolation_ceiling();
    let lo = band.min_kelvin;
    let span = hi - lo;

    if span < SPAN_EPSILON_K {
        return 0;
    }

    let x = (hi - temperature_k) / span;
    // NaN saturates to 0 in the cast
    (x * 10.0).floor().clamp(0.0, 9.0) as u8
}
