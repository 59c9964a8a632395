use approx::assert_relative_eq;

use crate::main_sequence::{expected_luminosity, luminosity_delta};

#[test]
fn low_mass_branch() {
    assert_relative_eq!(expected_luminosity(0.2), 0.23 * 0.2f64.powf(2.3));
}

#[test]
fn solar_branch_starts_at_043() {
    assert_relative_eq!(expected_luminosity(0.43), 0.43f64.powi(4), max_relative = 1e-12);
    assert_relative_eq!(expected_luminosity(1.0), 1.0);
}

#[test]
fn intermediate_branch_starts_at_two() {
    assert_relative_eq!(expected_luminosity(2.0), 16.970562748477143, max_relative = 1e-12);
    assert_relative_eq!(expected_luminosity(10.0), 4743.416490252569, max_relative = 1e-12);
}

#[test]
fn massive_branch_is_linear() {
    assert_relative_eq!(expected_luminosity(20.0), 64_000.0);
    assert_relative_eq!(expected_luminosity(40.0), 128_000.0);
}

#[test]
fn baseline_increases_with_mass() {
    let masses: Vec<f64> = (1..=1500).map(|i| i as f64 * 0.1).collect();
    for pair in masses.windows(2) {
        assert!(
            expected_luminosity(pair[1]) > expected_luminosity(pair[0]),
            "not increasing between {} and {}",
            pair[0],
            pair[1]
        );
    }
}

#[test]
fn delta_is_log_offset_from_baseline() {
    assert_relative_eq!(luminosity_delta(1.0, 1.0), 0.0);
    assert_relative_eq!(luminosity_delta(1.0, 10.0), 1.0);
    assert_relative_eq!(luminosity_delta(1.0, 0.1), -1.0);
    assert_relative_eq!(luminosity_delta(20.0, 640_000.0), 1.0, max_relative = 1e-12);
}
