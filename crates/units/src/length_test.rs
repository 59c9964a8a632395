mod tests {
    use approx::assert_relative_eq;

    use crate::length::{AU_M, Length, SOLAR_RADIUS_M};

    #[test]
    fn test_solar_radius_conversions() {
        let radius = Length::from_solar_radii(1.0);
        assert_relative_eq!(radius.to_meters(), SOLAR_RADIUS_M, max_relative = 1e-12);
        assert_relative_eq!(radius.to_au(), SOLAR_RADIUS_M / AU_M);
        assert_relative_eq!(radius.to_solar_radii(), 1.0, max_relative = 1e-12);
    }

    #[test]
    fn test_au_conversions() {
        let orbit = Length::from_au(1.0);
        assert_relative_eq!(orbit.to_meters(), AU_M);
        assert_relative_eq!(orbit.to_km(), AU_M / 1000.0);

        // Roughly 215 solar radii to an AU
        assert_relative_eq!(orbit.to_solar_radii(), 215.03, epsilon = 0.01);
    }

    #[test]
    fn test_meter_and_km_round_trips() {
        let from_m = Length::from_meters(AU_M * 2.0);
        assert_relative_eq!(from_m.to_au(), 2.0);

        let from_km = Length::from_km(12_000.0);
        assert_relative_eq!(from_km.to_km(), 12_000.0, max_relative = 1e-12);
    }

    #[test]
    fn test_length_arithmetic() {
        let a = Length::from_au(3.0);
        let b = Length::from_au(1.0);

        assert_relative_eq!((a + b).to_au(), 4.0);
        assert_relative_eq!((a - b).to_au(), 2.0);
        assert_relative_eq!((a * 2.0).to_au(), 6.0);
        assert_relative_eq!((a / 3.0).to_au(), 1.0);
        assert_relative_eq!(a / b, 3.0);
        assert_relative_eq!(a.powi(3), 27.0);
    }
}
