//! Validating entry points for spectral and luminosity classification.

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::error::{Result, require_positive};
use crate::luminosity_class::{self, ClassificationInput};
use crate::spectral::{LuminosityClass, SpectralType};
use crate::spectral_band;

/// Estimated MK spectral type and subtype, e.g. G2.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpectralClassification {
    pub spectral_type: SpectralType,
    /// Spectral subtype (0-9)
    pub subtype: u8,
    pub temperature_k: f64,
}

impl SpectralClassification {
    /// Full MK label, e.g. "G2".
    pub fn mk_label(&self) -> String {
        format!("{}{}", self.spectral_type, self.subtype)
    }
}

impl fmt::Display for SpectralClassification {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Spectral Class (Estimated)")?;
        writeln!(f, "Output: {}", self.mk_label())?;
        write!(
            f,
            "(Based on effective temperature: {:.0} K)",
            self.temperature_k
        )
    }
}

/// Estimated MK luminosity class with the signals that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LuminosityClassification {
    pub luminosity_class: LuminosityClass,
    /// Confidence in `[0, 1]`
    pub confidence: f64,
    pub rationale: &'static str,
    pub mass_solar: f64,
    pub radius_solar: f64,
    pub temperature_k: f64,
    pub luminosity_solar: f64,
    /// ΔlogL_MS in dex
    pub delta_log_main_sequence: f64,
}

impl fmt::Display for LuminosityClassification {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Luminosity Class (Estimated)")?;
        writeln!(f, "Output: {}", self.luminosity_class)?;
        writeln!(f, "Confidence: {:.0}%", self.confidence * 100.0)?;
        writeln!(
            f,
            "Inputs: M={:.2} M☉, R={:.2} R☉, T={:.0}K",
            self.mass_solar, self.radius_solar, self.temperature_k
        )?;
        writeln!(
            f,
            "Derived: L={:.3} L☉ (ΔlogL_MS={:.2})",
            self.luminosity_solar, self.delta_log_main_sequence
        )?;
        write!(f, "Rationale: {}", self.rationale)
    }
}

/// Estimates the MK spectral type and subtype from effective temperature.
///
/// # Errors
///
/// Returns an error if `temperature_k` is not positive and finite.
///
/// # Example
/// ```
/// let sun = stellar::classify_spectrum(5778.0).unwrap();
/// assert_eq!(sun.mk_label(), "G2");
/// ```
pub fn classify_spectrum(temperature_k: f64) -> Result<SpectralClassification> {
    let temperature_k = require_positive("temperature", temperature_k)?;
    Ok(spectral_classification(temperature_k))
}

/// Estimates the MK luminosity class from mass, radius, temperature and
/// luminosity (solar units and Kelvin).
///
/// # Errors
///
/// Returns an error if any parameter is not positive and finite.
///
/// # Example
/// ```
/// use stellar::LuminosityClass;
///
/// let sun = stellar::classify_luminosity(1.0, 1.0, 5778.0, 1.0).unwrap();
/// assert_eq!(sun.luminosity_class, LuminosityClass::V);
/// ```
pub fn classify_luminosity(
    mass_solar: f64,
    radius_solar: f64,
    temperature_k: f64,
    luminosity_solar: f64,
) -> Result<LuminosityClassification> {
    let input = ClassificationInput::new(
        require_positive("mass", mass_solar)?,
        require_positive("radius", radius_solar)?,
        require_positive("temperature", temperature_k)?,
        require_positive("luminosity", luminosity_solar)?,
    );
    Ok(luminosity_classification(&input))
}

/// Spectral classification for a temperature already known to be valid.
pub(crate) fn spectral_classification(temperature_k: f64) -> SpectralClassification {
    let band = spectral_band::band_for(temperature_k);
    let subtype = spectral_band::subtype_for(temperature_k, band);

    debug!(
        temperature_k,
        spectral_type = %band.spectral_type,
        subtype,
        "classified spectrum"
    );

    SpectralClassification {
        spectral_type: band.spectral_type,
        subtype,
        temperature_k,
    }
}

/// Luminosity classification for inputs already known to be valid.
pub(crate) fn luminosity_classification(input: &ClassificationInput) -> LuminosityClassification {
    let detection = luminosity_class::detect(input);

    debug!(
        class = %detection.luminosity_class,
        confidence = detection.confidence,
        delta_log_main_sequence = input.delta_log_main_sequence,
        "classified luminosity"
    );

    LuminosityClassification {
        luminosity_class: detection.luminosity_class,
        confidence: detection.confidence,
        rationale: detection.rationale,
        mass_solar: input.mass_solar,
        radius_solar: input.radius_solar,
        temperature_k: input.temperature_k,
        luminosity_solar: input.luminosity_solar,
        delta_log_main_sequence: input.delta_log_main_sequence,
    }
}
