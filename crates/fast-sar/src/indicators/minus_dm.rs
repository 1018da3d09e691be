//! `MINUS_DM` (Minus Directional Movement).
//!
//! Minus directional movement measures how far today's low extends below
//! yesterday's low, counted only when that downward extension dominates the
//! upward extension of the high:
//!
//! ```text
//! up   = high[t] - high[t-1]
//! down = low[t-1] - low[t]
//! -DM1 = down   if down > 0 and up < down
//!        0      otherwise
//! ```
//!
//! With `period == 1` the raw one-bar value is produced. With a longer period
//! the values are Wilder-smoothed: the first output is the sum of the first
//! `period - 1` one-bar values, and every later output is
//! `prev - prev / period + -DM1`.
//!
//! Parabolic SAR uses the one-bar value to pick its initial direction.

use tracing::trace;

use crate::error::Result;
use crate::indicators::range::{check_range_call, effective_start, RangeOutput};
use crate::traits::{
    validate_output_len, validate_period, validate_price_pair, SeriesElement, ValidatedInput,
};

/// Computes the lookback period for `MINUS_DM`.
///
/// A one-bar window still needs the previous bar, so the lookback never
/// drops below 1.
#[inline]
#[must_use]
pub const fn minus_dm_lookback(period: usize) -> usize {
    if period > 1 {
        period - 1
    } else {
        1
    }
}

/// Returns the minimum input length required for `MINUS_DM` calculation.
#[inline]
#[must_use]
pub const fn minus_dm_min_len(period: usize) -> usize {
    minus_dm_lookback(period) + 1
}

/// One-bar minus directional movement at `today` (requires `today >= 1`).
#[inline]
fn bar_minus_dm<T: SeriesElement>(high: &[T], low: &[T], today: usize) -> f64 {
    let up = high[today].widen() - high[today - 1].widen();
    let down = low[today - 1].widen() - low[today].widen();
    if down > 0.0 && up < down {
        down
    } else {
        0.0
    }
}

/// Computes `MINUS_DM` over bars `start_idx..=end_idx`.
///
/// `start_idx` is raised to [`minus_dm_lookback`] when needed. If that leaves
/// nothing to evaluate the call succeeds with [`RangeOutput::EMPTY`].
///
/// # Errors
///
/// - `Error::InvalidPeriod` if `period` is 0
/// - `Error::EmptyInput` / `Error::LengthMismatch` for unusable price series
/// - `Error::OutOfRangeIndex` if the range is inverted or past the data
/// - `Error::BufferTooSmall` if `output` is shorter than `end_idx - start_idx + 1`
pub fn minus_dm_range_into<T: SeriesElement>(
    start_idx: usize,
    end_idx: usize,
    high: &[T],
    low: &[T],
    period: usize,
    output: &mut [f64],
) -> Result<RangeOutput> {
    validate_period(period)?;
    check_range_call(start_idx, end_idx, high, low, output.len(), "minus_dm")?;

    let lookback = minus_dm_lookback(period);
    let Some(start_idx) = effective_start(start_idx, end_idx, lookback) else {
        trace!(end_idx, lookback, "minus_dm range too short after warm-up");
        return Ok(RangeOutput::EMPTY);
    };

    if period == 1 {
        for (slot, today) in output.iter_mut().zip(start_idx..=end_idx) {
            *slot = bar_minus_dm(high, low, today);
        }
        return Ok(RangeOutput {
            beg_idx: start_idx,
            nb_element: end_idx - start_idx + 1,
        });
    }

    #[allow(clippy::cast_precision_loss)]
    let period_f = period as f64;

    // Seed with the plain sum of the bars leading up to the first output.
    let mut today = start_idx - lookback;
    let mut smoothed = 0.0;
    for _ in 0..lookback {
        today += 1;
        smoothed += bar_minus_dm(high, low, today);
    }

    output[0] = smoothed;
    let mut out_idx = 1;
    while today < end_idx {
        today += 1;
        smoothed = smoothed - smoothed / period_f + bar_minus_dm(high, low, today);
        output[out_idx] = smoothed;
        out_idx += 1;
    }

    Ok(RangeOutput {
        beg_idx: start_idx,
        nb_element: out_idx,
    })
}

/// Computes `MINUS_DM` over the whole series and stores results in `output`.
///
/// `output[i]` is aligned with input bar `i`; the first
/// [`minus_dm_lookback`] slots are NaN.
///
/// # Errors
///
/// Returns an error if:
/// - The input arrays are empty (`Error::EmptyInput`)
/// - The input arrays have different lengths (`Error::LengthMismatch`)
/// - The period is invalid (`Error::InvalidPeriod`)
/// - There is insufficient data for the lookback (`Error::InsufficientData`)
/// - The output buffer is too small (`Error::BufferTooSmall`)
pub fn minus_dm_into<T: SeriesElement>(
    high: &[T],
    low: &[T],
    period: usize,
    output: &mut [f64],
) -> Result<()> {
    validate_period(period)?;
    validate_price_pair(high, low)?;
    high.validate_min_length(minus_dm_min_len(period), "minus_dm")?;

    let n = high.len();
    let lookback = minus_dm_lookback(period);
    validate_output_len(output.len(), n, "minus_dm")?;

    for slot in &mut output[..lookback] {
        *slot = f64::NAN;
    }
    minus_dm_range_into(lookback, n - 1, high, low, period, &mut output[lookback..n])?;
    Ok(())
}

/// Computes `MINUS_DM` over the whole series.
///
/// # Example
///
/// ```
/// use fast_sar::indicators::minus_dm;
///
/// let high = vec![10.0_f64, 10.5, 10.0];
/// let low = vec![9.0_f64, 9.5, 8.0];
/// let dm = minus_dm(&high, &low, 1).unwrap();
/// assert!(dm[0].is_nan());
/// assert_eq!(dm[1], 0.0); // low rose
/// assert_eq!(dm[2], 1.5); // low fell 1.5 while high fell
/// ```
///
/// # Errors
///
/// Same conditions as [`minus_dm_into`].
pub fn minus_dm<T: SeriesElement>(high: &[T], low: &[T], period: usize) -> Result<Vec<f64>> {
    let mut output = vec![f64::NAN; high.len()];
    minus_dm_into(high, low, period, &mut output)?;
    Ok(output)
}
