use crate::spectral::{LuminosityClass, SpectralType};

// ============================================================================
// SpectralType Display tests
// ============================================================================

#[test]
fn spectral_type_display_stars() {
    assert_eq!(format!("{}", SpectralType::O), "O");
    assert_eq!(format!("{}", SpectralType::B), "B");
    assert_eq!(format!("{}", SpectralType::A), "A");
    assert_eq!(format!("{}", SpectralType::F), "F");
    assert_eq!(format!("{}", SpectralType::G), "G");
    assert_eq!(format!("{}", SpectralType::K), "K");
    assert_eq!(format!("{}", SpectralType::M), "M");
}

#[test]
fn spectral_type_display_brown_dwarfs() {
    assert_eq!(format!("{}", SpectralType::L), "L");
    assert_eq!(format!("{}", SpectralType::T), "T");
    assert_eq!(format!("{}", SpectralType::Y), "Y");
}

// ============================================================================
// LuminosityClass tests
// ============================================================================

#[test]
fn luminosity_class_display_mk_labels() {
    assert_eq!(format!("{}", LuminosityClass::I), "I");
    assert_eq!(format!("{}", LuminosityClass::II), "II");
    assert_eq!(format!("{}", LuminosityClass::III), "III");
    assert_eq!(format!("{}", LuminosityClass::IV), "IV");
    assert_eq!(format!("{}", LuminosityClass::V), "V");
    assert_eq!(format!("{}", LuminosityClass::VI), "VI");
    assert_eq!(format!("{}", LuminosityClass::VII), "VII");
}

#[test]
fn luminosity_class_descriptions() {
    assert_eq!(LuminosityClass::I.description(), "supergiant");
    assert_eq!(LuminosityClass::II.description(), "bright giant");
    assert_eq!(LuminosityClass::III.description(), "giant");
    assert_eq!(LuminosityClass::IV.description(), "subgiant");
    assert_eq!(LuminosityClass::V.description(), "main sequence (dwarf)");
    assert_eq!(LuminosityClass::VI.description(), "subdwarf");
    assert_eq!(LuminosityClass::VII.description(), "white dwarf");
}

#[test]
fn spectral_enums_serialize_as_variant_names() {
    assert_eq!(serde_json::to_string(&SpectralType::G).unwrap(), "\"G\"");
    assert_eq!(serde_json::to_string(&LuminosityClass::VII).unwrap(), "\"VII\"");
}
