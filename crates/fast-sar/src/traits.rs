//! Core traits for fast-sar numeric input.
//!
//! # Overview
//!
//! The primary trait is [`SeriesElement`], which abstracts over `f32` and `f64`
//! price storage. Every computation in this crate runs in `f64`: input values
//! are widened once at the boundary with [`SeriesElement::widen`], so a
//! single-precision series does not compound rounding error through the
//! recurrence.
//!
//! The module also provides [`ValidatedInput`] and the standalone validation
//! functions used by every entry point before any state is built.
//!
//! # Example
//!
//! ```
//! use fast_sar::traits::{validate_price_pair, SeriesElement};
//!
//! fn mean_range<T: SeriesElement>(high: &[T], low: &[T]) -> fast_sar::Result<f64> {
//!     validate_price_pair(high, low)?;
//!     let total: f64 = high
//!         .iter()
//!         .zip(low)
//!         .map(|(&h, &l)| h.widen() - l.widen())
//!         .sum();
//!     Ok(total / high.len() as f64)
//! }
//!
//! let high = vec![10.0_f32, 12.0, 11.0];
//! let low = vec![8.0_f32, 9.0, 8.0];
//! assert!((mean_range(&high, &low).unwrap() - 8.0 / 3.0).abs() < 1e-10);
//! ```

use num_traits::{Float, NumCast, ToPrimitive};

use crate::error::{Error, Result};

/// A trait for types that can be stored in a price series.
///
/// Implemented for `f32` and `f64` through a blanket implementation.
pub trait SeriesElement: Float + NumCast + Copy + Default + Send + Sync + 'static {
    /// Widens the value to `f64`.
    ///
    /// Lossless for `f32` and `f64`. A value that cannot be represented
    /// becomes NaN rather than panicking.
    #[inline]
    #[must_use]
    fn widen(self) -> f64 {
        ToPrimitive::to_f64(&self).unwrap_or(f64::NAN)
    }
}

// Blanket implementation for all types that satisfy the bounds
impl<T: Float + NumCast + Copy + Default + Send + Sync + 'static> SeriesElement for T {}

/// Trait for validating input data before indicator computation.
pub trait ValidatedInput {
    /// The element type of the series.
    type Element: SeriesElement;

    /// Returns the length of the series.
    fn len(&self) -> usize;

    /// Returns true if the series is empty.
    #[inline]
    #[must_use]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Validates that the series has at least `min_length` elements.
    ///
    /// # Errors
    ///
    /// Returns `Error::InsufficientData` if the series is shorter than `min_length`.
    #[inline]
    fn validate_min_length(&self, min_length: usize, indicator: &'static str) -> Result<()> {
        if self.len() < min_length {
            Err(Error::InsufficientData {
                indicator,
                required: min_length,
                actual: self.len(),
            })
        } else {
            Ok(())
        }
    }

    /// Validates that the series is not empty.
    ///
    /// # Errors
    ///
    /// Returns `Error::EmptyInput` if the series is empty.
    #[inline]
    fn validate_not_empty(&self) -> Result<()> {
        if self.is_empty() {
            Err(Error::EmptyInput)
        } else {
            Ok(())
        }
    }
}

impl<T: SeriesElement> ValidatedInput for [T] {
    type Element = T;

    #[inline]
    fn len(&self) -> usize {
        self.len()
    }
}

impl<T: SeriesElement> ValidatedInput for Vec<T> {
    type Element = T;

    #[inline]
    fn len(&self) -> usize {
        self.len()
    }
}

/// Validates that a high/low pair is non-empty and of equal length.
///
/// # Errors
///
/// - `Error::EmptyInput` if either series is empty
/// - `Error::LengthMismatch` if the lengths differ
#[inline]
pub fn validate_price_pair<T: SeriesElement>(high: &[T], low: &[T]) -> Result<()> {
    high.validate_not_empty()?;
    low.validate_not_empty()?;
    if high.len() != low.len() {
        return Err(Error::LengthMismatch {
            description: format!("high has {} elements, low has {}", high.len(), low.len()),
        });
    }
    Ok(())
}

/// Validates an inclusive index range against a series of `len` bars.
///
/// # Errors
///
/// Returns `Error::OutOfRangeIndex` if `end_idx < start_idx` or
/// `end_idx >= len`.
#[inline]
pub const fn validate_range(start_idx: usize, end_idx: usize, len: usize) -> Result<()> {
    if end_idx < start_idx || end_idx >= len {
        Err(Error::OutOfRangeIndex {
            start_idx,
            end_idx,
            len,
        })
    } else {
        Ok(())
    }
}

/// Validates that a period is valid for indicator computation.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if the period is zero.
#[inline]
pub const fn validate_period(period: usize) -> Result<()> {
    if period == 0 {
        Err(Error::InvalidPeriod {
            period,
            reason: "period must be at least 1",
        })
    } else {
        Ok(())
    }
}

/// Validates that `output` can hold `required` values.
///
/// # Errors
///
/// Returns `Error::BufferTooSmall` if the buffer is shorter than `required`.
#[inline]
pub const fn validate_output_len(
    output_len: usize,
    required: usize,
    indicator: &'static str,
) -> Result<()> {
    if output_len < required {
        Err(Error::BufferTooSmall {
            indicator,
            required,
            actual: output_len,
        })
    } else {
        Ok(())
    }
}
