//! Shared test utilities for fast-sar tests.

/// Standard epsilon for high-precision comparisons.
#[allow(dead_code)]
pub const EPSILON: f64 = 1e-10;

/// Approximate equality check; two NaN values compare equal.
#[allow(dead_code)]
pub fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
    if a.is_nan() && b.is_nan() {
        return true;
    }
    if a.is_nan() || b.is_nan() {
        return false;
    }
    (a - b).abs() < eps
}

/// Asserts two series match element-wise within `eps`.
#[allow(dead_code)]
pub fn assert_series_eq(actual: &[f64], expected: &[f64], eps: f64, context: &str) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "{context}: length {} != expected {}",
        actual.len(),
        expected.len()
    );
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert!(
            approx_eq(*a, *e, eps),
            "{context}: index {i}: got {a}, expected {e}"
        );
    }
}

/// Straight uptrend with unit bar range.
#[allow(dead_code)]
pub fn uptrend_bars(n: usize) -> (Vec<f64>, Vec<f64>) {
    let high = (0..n).map(|i| 11.0 + i as f64).collect();
    let low = (0..n).map(|i| 10.0 + i as f64).collect();
    (high, low)
}
