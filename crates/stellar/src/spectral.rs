use std::fmt;

use serde::{Deserialize, Serialize};

/// MK spectral types, ordered from hottest to coolest.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpectralType {
    O,
    B,
    A,
    F,
    G,
    K,
    M,
    L,
    T,
    Y, // Coolest brown dwarfs
}

impl fmt::Display for SpectralType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let str = match self {
            SpectralType::O => "O",
            SpectralType::B => "B",
            SpectralType::A => "A",
            SpectralType::F => "F",
            SpectralType::G => "G",
            SpectralType::K => "K",
            SpectralType::M => "M",
            SpectralType::L => "L",
            SpectralType::T => "T",
            SpectralType::Y => "Y",
        };
        write!(f, "{}", str)
    }
}

/// Morgan–Keenan luminosity classes.
///
/// VII is used for white dwarfs; the MK scheme proper stops at VI but the
/// extension keeps compact objects on the same axis.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LuminosityClass {
    I,   // Supergiants
    II,  // Bright giants
    III, // Giants
    IV,  // Subgiants
    V,   // Main sequence (dwarfs)
    VI,  // Subdwarfs
    VII, // White dwarfs
}

impl LuminosityClass {
    /// Human-readable name of the class, e.g. "bright giant".
    pub fn description(&self) -> &'static str {
        match self {
            LuminosityClass::I => "supergiant",
            LuminosityClass::II => "bright giant",
            LuminosityClass::III => "giant",
            LuminosityClass::IV => "subgiant",
            LuminosityClass::V => "main sequence (dwarf)",
            LuminosityClass::VI => "subdwarf",
            LuminosityClass::VII => "white dwarf",
        }
    }
}

impl fmt::Display for LuminosityClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let str = match self {
            LuminosityClass::I => "I",
            LuminosityClass::II => "II",
            LuminosityClass::III => "III",
            LuminosityClass::IV => "IV",
            LuminosityClass::V => "V",
            LuminosityClass::VI => "VI",
            LuminosityClass::VII => "VII",
        };
        write!(f, "{}", str)
    }
}
