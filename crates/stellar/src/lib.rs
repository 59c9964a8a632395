//! Heuristic MK classification of stars.
//!
//! Estimates a spectral type and subtype from effective temperature and a
//! luminosity class from radius, luminosity and mass, alongside the basic
//! derived quantities (luminosity, habitable zone, orbital period) of a star.

pub mod classification;
pub mod error;
pub mod luminosity_class;
pub mod main_sequence;
mod numeric;
pub mod physics;
pub mod report;
pub mod spectral;
pub mod spectral_band;
pub mod star;
pub mod validation;

#[cfg(test)]
mod main_sequence_test;
#[cfg(test)]
mod physics_test;
#[cfg(test)]
mod spectral_band_test;
#[cfg(test)]
mod spectral_test;

// Re-export classification entry points
pub use classification::{
    LuminosityClassification, SpectralClassification, classify_luminosity, classify_spectrum,
};

pub use error::{Result, StellarError};
pub use report::StellarReport;
pub use spectral::{LuminosityClass, SpectralType};
pub use star::{HabitableZone, Star, StarBuilder};
pub use validation::ValidationLimits;
