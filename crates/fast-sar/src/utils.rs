//! Utility functions for fast-sar.
//!
//! Tolerance-based comparison for checking results, and helpers for laying a
//! range result back onto its input series.
//!
//! # Example
//!
//! ```
//! use fast_sar::utils::{approx_eq, EPSILON};
//!
//! let a = 0.1 + 0.2;
//! assert!(approx_eq(a, 0.3, EPSILON));
//! ```

use crate::indicators::range::RangeOutput;

/// Standard epsilon for comparisons against reference values.
pub const EPSILON: f64 = 1e-10;

/// Approximate equality check for floating-point values.
///
/// Returns `true` if `a` and `b` are within `tolerance` of each other,
/// or if both are NaN.
///
/// # Example
///
/// ```
/// use fast_sar::utils::{approx_eq, EPSILON};
///
/// assert!(approx_eq(1.0, 1.0 + 1e-11, EPSILON));
/// assert!(!approx_eq(1.0, 2.0, EPSILON));
///
/// // Both NaN compare equal
/// assert!(approx_eq(f64::NAN, f64::NAN, EPSILON));
/// assert!(!approx_eq(f64::NAN, 1.0, EPSILON));
/// ```
#[inline]
#[must_use]
pub fn approx_eq(a: f64, b: f64, tolerance: f64) -> bool {
    if a.is_nan() && b.is_nan() {
        return true;
    }
    if a.is_nan() || b.is_nan() {
        return false;
    }
    (a - b).abs() < tolerance
}

/// Returns true if both slices hold the same bit patterns.
///
/// Stricter than `==`: NaN matches NaN, and `0.0` does not match `-0.0`.
#[must_use]
pub fn bits_eq(a: &[f64], b: &[f64]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.to_bits() == y.to_bits())
}

/// Spreads a dense range result over a series of `len` bars.
///
/// Bars outside [`RangeOutput::input_indices`] are NaN.
///
/// # Example
///
/// ```
/// use fast_sar::indicators::RangeOutput;
/// use fast_sar::utils::align_to_input;
///
/// let placed = RangeOutput { beg_idx: 1, nb_element: 2 };
/// let aligned = align_to_input(placed, &[8.0, 12.0], 4);
/// assert!(aligned[0].is_nan());
/// assert_eq!(&aligned[1..3], &[8.0, 12.0]);
/// assert!(aligned[3].is_nan());
/// ```
#[must_use]
pub fn align_to_input(placed: RangeOutput, values: &[f64], len: usize) -> Vec<f64> {
    let mut aligned = vec![f64::NAN; len];
    for (slot, &value) in aligned
        .iter_mut()
        .skip(placed.beg_idx)
        .zip(values.iter().take(placed.nb_element))
    {
        *slot = value;
    }
    aligned
}
