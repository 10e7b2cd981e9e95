/// Checks that two scalars are equal within an absolute tolerance.
/// Panics with the values and the difference on mismatch.
pub fn check_scalar_near(actual: f64, expected: f64, tolerance: f64) {
    let diff = (actual - expected).abs();
    if diff > tolerance {
        panic!(
            "Scalar mismatch: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
            actual, expected, diff, tolerance
        );
    }
}
