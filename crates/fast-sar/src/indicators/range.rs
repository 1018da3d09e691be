//! Index-range bookkeeping shared by the range-based indicators.
//!
//! A range call reads bars `start_idx..=end_idx` and writes a dense prefix of
//! the caller's output buffer. [`RangeOutput`] reports which input bar the
//! first written value belongs to and how many values were written.

use std::ops::Range;

use crate::error::Result;
use crate::traits::{validate_output_len, validate_price_pair, validate_range, SeriesElement};

/// Placement of a range call's output relative to the input series.
///
/// `output[k]` corresponds to input bar `beg_idx + k` for
/// `k < nb_element`. An empty result always reports `beg_idx == 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RangeOutput {
    /// Input index of the first produced value.
    pub beg_idx: usize,
    /// Number of values written to the output buffer.
    pub nb_element: usize,
}

impl RangeOutput {
    /// The result of a range that is too short to produce anything.
    pub const EMPTY: Self = Self {
        beg_idx: 0,
        nb_element: 0,
    };

    /// Returns true if nothing was produced.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.nb_element == 0
    }

    /// Input bar indices covered by the produced values.
    #[inline]
    #[must_use]
    pub const fn input_indices(&self) -> Range<usize> {
        self.beg_idx..self.beg_idx + self.nb_element
    }
}

/// Raises `start_idx` past the warm-up bars.
///
/// Returns `None` when nothing is left to evaluate.
#[inline]
pub(crate) fn effective_start(start_idx: usize, end_idx: usize, lookback: usize) -> Option<usize> {
    let start = start_idx.max(lookback);
    (start <= end_idx).then_some(start)
}

/// Structural checks every range entry point runs before touching the data.
pub(crate) fn check_range_call<T: SeriesElement>(
    start_idx: usize,
    end_idx: usize,
    high: &[T],
    low: &[T],
    output_len: usize,
    indicator: &'static str,
) -> Result<()> {
    validate_price_pair(high, low)?;
    validate_range(start_idx, end_idx, high.len())?;
    validate_output_len(output_len, end_idx - start_idx + 1, indicator)
}
