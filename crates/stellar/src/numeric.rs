/// Clamps `value` into `[0, 1]`. NaN maps to 0.
pub(crate) fn clamp01(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 1.0)
}

/// Linear ramp over `[threshold, 2 * threshold]`: 0 at or below the
/// threshold, 1 at twice the threshold and beyond.
pub(crate) fn strength(value: f64, threshold: f64) -> f64 {
    clamp01((value - threshold) / threshold)
}
