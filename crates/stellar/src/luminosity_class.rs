//! Heuristic MK luminosity class detection.
//!
//! True luminosity class is a spectroscopic surface-gravity indicator. Here it
//! is estimated from radius, luminosity and consistency with the main-sequence
//! mass–luminosity baseline, using fixed soft thresholds.
//!
//! Detection runs an ordered list of independent detectors and the first one
//! that fires wins:
//!
//! 1. compact object (white dwarf, VII)
//! 2. main sequence (V)
//! 3. subdwarf (VI)
//! 4. evolved-star rule table (I → IV)
//!
//! If none fire, the star defaults to class V with low confidence.

use serde::Serialize;
use tracing::trace;

use crate::main_sequence;
use crate::numeric::{clamp01, strength};
use crate::spectral::LuminosityClass;

const COMPACT_RADIUS_MAX: f64 = 0.05;
const COMPACT_LOG_L_MAX: f64 = -1.0;

const MAIN_SEQUENCE_RADIUS_MIN: f64 = 0.10;
const MAIN_SEQUENCE_RADIUS_MAX: f64 = 15.0;
const MAIN_SEQUENCE_DELTA_MAX: f64 = 0.60;

const SUBDWARF_DELTA_MAX: f64 = -0.60;
const SUBDWARF_RADIUS_MAX: f64 = 1.5;
const SUBDWARF_DELTA_SCALE: f64 = 1.5;

const FALLBACK_CONFIDENCE: f64 = 0.55;

/// Derived physical signals consumed by the detectors.
///
/// Built once per classification; detectors only read it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationInput {
    pub mass_solar: f64,
    pub radius_solar: f64,
    pub temperature_k: f64,
    pub luminosity_solar: f64,
    /// log₁₀(L/L☉)
    pub log_luminosity: f64,
    /// ΔlogL_MS, see [`main_sequence::luminosity_delta`]
    pub delta_log_main_sequence: f64,
}

impl ClassificationInput {
    /// Derives log luminosity and the main-sequence delta from raw parameters.
    ///
    /// Inputs are expected to be positive and finite; see
    /// [`crate::classify_luminosity`] for the validating entry point.
    pub fn new(
        mass_solar: f64,
        radius_solar: f64,
        temperature_k: f64,
        luminosity_solar: f64,
    ) -> Self {
        Self {
            mass_solar,
            radius_solar,
            temperature_k,
            luminosity_solar,
            log_luminosity: luminosity_solar.log10(),
            delta_log_main_sequence: main_sequence::luminosity_delta(
                mass_solar,
                luminosity_solar,
            ),
        }
    }
}

/// Outcome of a single detector or of the whole pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Detection {
    pub luminosity_class: LuminosityClass,
    /// Always within `[0, 1]`
    pub confidence: f64,
    pub rationale: &'static str,
}

impl Detection {
    pub fn new(luminosity_class: LuminosityClass, confidence: f64, rationale: &'static str) -> Self {
        Self {
            luminosity_class,
            confidence: clamp01(confidence),
            rationale,
        }
    }
}

/// One row of the evolved-star table.
///
/// A rule matches on radius OR log luminosity; either signal alone is enough.
/// Confidence only looks at radius and is a coarse two-level value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvolvedRule {
    pub luminosity_class: LuminosityClass,
    pub radius_min: f64,
    pub log_luminosity_min: f64,
    pub radius_high_confidence: f64,
    pub confidence_low: f64,
    pub confidence_high: f64,
    pub rationale: &'static str,
}

impl EvolvedRule {
    pub fn matches(&self, radius_solar: f64, log_luminosity: f64) -> bool {
        radius_solar >= self.radius_min || log_luminosity >= self.log_luminosity_min
    }

    pub fn confidence(&self, radius_solar: f64) -> f64 {
        if radius_solar >= self.radius_high_confidence {
            self.confidence_high
        } else {
            self.confidence_low
        }
    }
}

/// Evolved-star rules from most to least extreme. Do not reorder: a
/// supergiant also satisfies every rule below it.
pub const EVOLVED_RULES: [EvolvedRule; 4] = [
    EvolvedRule {
        luminosity_class: LuminosityClass::I,
        radius_min: 100.0,
        log_luminosity_min: 5.0,
        radius_high_confidence: 100.0,
        confidence_low: 0.90,
        confidence_high: 0.90,
        rationale: "Extremely large radius and/or very high luminosity indicate a supergiant.",
    },
    EvolvedRule {
        luminosity_class: LuminosityClass::II,
        radius_min: 30.0,
        log_luminosity_min: 4.0,
        radius_high_confidence: 50.0,
        confidence_low: 0.75,
        confidence_high: 0.85,
        rationale: "Large radius and/or high luminosity consistent with a bright giant.",
    },
    EvolvedRule {
        luminosity_class: LuminosityClass::III,
        radius_min: 10.0,
        log_luminosity_min: 2.5,
        radius_high_confidence: 15.0,
        confidence_low: 0.70,
        confidence_high: 0.80,
        rationale: "Expanded radius and elevated luminosity consistent with a giant.",
    },
    EvolvedRule {
        luminosity_class: LuminosityClass::IV,
        radius_min: 3.0,
        log_luminosity_min: 1.2,
        radius_high_confidence: 4.0,
        confidence_low: 0.60,
        confidence_high: 0.70,
        rationale: "Moderately expanded radius suggests subgiant evolution.",
    },
];

/// Returns the first rule in `rules` that matches, preserving table order.
pub fn first_matching_rule(
    rules: &[EvolvedRule],
    radius_solar: f64,
    log_luminosity: f64,
) -> Option<&EvolvedRule> {
    rules
        .iter()
        .find(|rule| rule.matches(radius_solar, log_luminosity))
}

/// A single pipeline stage: fires with a detection or passes.
pub type Detector = fn(&ClassificationInput) -> Option<Detection>;

/// Detector precedence, first match wins.
pub const DETECTORS: [Detector; 4] = [compact_object, main_sequence, subdwarf, evolved];

/// Runs the standard detector sequence over `input`.
pub fn detect(input: &ClassificationInput) -> Detection {
    detect_with(&DETECTORS, input)
}

/// Runs `detectors` in order and returns the first detection, or [`fallback`].
pub fn detect_with(detectors: &[Detector], input: &ClassificationInput) -> Detection {
    detectors
        .iter()
        .enumerate()
        .find_map(|(stage, detector)| {
            detector(input).inspect(|detection| {
                trace!(
                    stage,
                    class = %detection.luminosity_class,
                    confidence = detection.confidence,
                    "luminosity detector matched"
                );
            })
        })
        .unwrap_or_else(fallback)
}

/// Detection used when no regime matched.
pub fn fallback() -> Detection {
    Detection::new(
        LuminosityClass::V,
        FALLBACK_CONFIDENCE,
        "No strong giant or compact regime matched; defaulting to a dwarf (main-sequence) classification.",
    )
}

/// Tiny radius and low luminosity: a degenerate remnant.
pub fn compact_object(input: &ClassificationInput) -> Option<Detection> {
    if !(input.radius_solar < COMPACT_RADIUS_MAX && input.log_luminosity < COMPACT_LOG_L_MAX) {
        return None;
    }

    let boost = strength(input.radius_solar, COMPACT_RADIUS_MAX)
        * strength(-input.log_luminosity, -COMPACT_LOG_L_MAX);

    Some(Detection::new(
        LuminosityClass::VII,
        0.75 + 0.25 * boost,
        "Very small radius and low luminosity suggest a compact object (white dwarf regime).",
    ))
}

/// Radius in the dwarf window and luminosity within 0.6 dex of the
/// mass–luminosity baseline.
pub fn main_sequence(input: &ClassificationInput) -> Option<Detection> {
    let radius = input.radius_solar;
    let delta = input.delta_log_main_sequence.abs();

    if !(MAIN_SEQUENCE_RADIUS_MIN..=MAIN_SEQUENCE_RADIUS_MAX).contains(&radius)
        || delta > MAIN_SEQUENCE_DELTA_MAX
    {
        return None;
    }

    let closeness = 1.0 - (delta / MAIN_SEQUENCE_DELTA_MAX).min(1.0);
    Some(Detection::new(
        LuminosityClass::V,
        0.70 + 0.30 * closeness,
        "Consistent with the main-sequence mass–luminosity baseline (|ΔlogL_MS| ≤ 0.6).",
    ))
}

/// Under-luminous for its mass with a small radius.
pub fn subdwarf(input: &ClassificationInput) -> Option<Detection> {
    let delta = input.delta_log_main_sequence;

    if !(delta <= SUBDWARF_DELTA_MAX && input.radius_solar < SUBDWARF_RADIUS_MAX) {
        return None;
    }

    let closeness = 1.0 - (delta.abs() / SUBDWARF_DELTA_SCALE).min(1.0);
    Some(Detection::new(
        LuminosityClass::VI,
        0.65 + 0.25 * closeness,
        "Under-luminous for its mass with a compact radius suggests a subdwarf (metal-poor, high-gravity) regime.",
    ))
}

/// Giants and supergiants via [`EVOLVED_RULES`].
pub fn evolved(input: &ClassificationInput) -> Option<Detection> {
    first_matching_rule(&EVOLVED_RULES, input.radius_solar, input.log_luminosity).map(|rule| {
        Detection::new(
            rule.luminosity_class,
            rule.confidence(input.radius_solar),
            rule.rationale,
        )
    })
}
