//! SAR (Parabolic Stop and Reverse) indicator.
//!
//! The Parabolic SAR is a trend-following trailing stop. It sits below price
//! in an uptrend and above price in a downtrend, and reverses when price
//! touches it.
//!
//! # Formula
//!
//! SAR(t+1) = SAR(t) + AF × (EP - SAR(t))
//!
//! Where:
//! - AF = Acceleration Factor, starts at `acceleration` and grows by
//!   `acceleration` each time a new extreme point is made, up to `maximum`
//! - EP = Extreme Point, the highest high of an uptrend or lowest low of a
//!   downtrend
//!
//! The advanced stop may never sit inside the last two bars: in an uptrend it
//! is capped at the lower of the two lows, in a downtrend floored at the
//! higher of the two highs.
//!
//! # Bootstrapping
//!
//! The first bar of the range is sacrificed to establish the initial extreme
//! point, so the lookback is always 1. The initial direction comes from the
//! minus directional movement between that bar and the next (see
//! [`DirectionOracle`]): a positive value starts short, anything else starts
//! long. The initial stop is the previous bar's low (long) or high (short).
//!
//! # Emission
//!
//! The value reported for a bar is the stop that was already in force when
//! that bar opened, i.e. the one computed while processing the previous bar.
//! On a reversal the reported value is the previous extreme point, pushed
//! outside the last two bars.
//!
//! # Default Parameters
//!
//! - `acceleration` = 0.02
//! - `maximum` = 0.20
//!
//! # Precision
//!
//! Inputs may be `f32` or `f64`. The recurrence and the output are always
//! `f64`.

use tracing::{debug, trace, warn};

use crate::error::Result;
use crate::indicators::minus_dm::minus_dm_range_into;
use crate::indicators::range::{check_range_call, effective_start, RangeOutput};
use crate::params::SarParams;
use crate::traits::{
    validate_output_len, validate_price_pair, validate_range, SeriesElement, ValidatedInput,
};

/// Computes the lookback period for SAR.
///
/// SAR always sacrifices one bar to establish the initial extreme point,
/// whatever the parameters.
#[inline]
#[must_use]
pub const fn sar_lookback() -> usize {
    1
}

/// Returns the minimum input length required for SAR calculation.
#[inline]
#[must_use]
pub const fn sar_min_len() -> usize {
    sar_lookback() + 1
}

// =============================================================================
// Initial direction
// =============================================================================

/// Supplies the signal that picks the initial trend direction.
///
/// The engine calls [`initial_signal`](Self::initial_signal) exactly once per
/// run, for the first bar of the (warm-up adjusted) range. A positive signal
/// starts the run short; zero, negative or NaN start it long. Any error is
/// returned to the caller unchanged and nothing is written.
pub trait DirectionOracle {
    /// Returns the directional signal at bar `idx` (always `>= 1`).
    ///
    /// # Errors
    ///
    /// Implementations report their own failures; the engine aborts on any
    /// error.
    fn initial_signal<T: SeriesElement>(&self, idx: usize, high: &[T], low: &[T]) -> Result<f64>;
}

/// The standard oracle: one-bar `MINUS_DM` at the first bar of the range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MinusDmOracle;

impl DirectionOracle for MinusDmOracle {
    fn initial_signal<T: SeriesElement>(&self, idx: usize, high: &[T], low: &[T]) -> Result<f64> {
        let mut signal = [0.0_f64];
        minus_dm_range_into(idx, idx, high, low, 1, &mut signal)?;
        Ok(signal[0])
    }
}

impl<O: DirectionOracle> DirectionOracle for &O {
    fn initial_signal<T: SeriesElement>(&self, idx: usize, high: &[T], low: &[T]) -> Result<f64> {
        (**self).initial_signal(idx, high, low)
    }
}

// =============================================================================
// Recurrence
// =============================================================================

#[inline]
fn raise(value: f64, floor: f64) -> f64 {
    if value < floor {
        floor
    } else {
        value
    }
}

#[inline]
fn lower(value: f64, ceiling: f64) -> f64 {
    if value > ceiling {
        ceiling
    } else {
        value
    }
}

/// Per-run state of the SAR state machine.
///
/// Lives for exactly one call; `last_high`/`last_low` hold the bar processed
/// by the previous step so each step can clamp against the last two bars.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct SarRecurrence {
    acceleration: f64,
    maximum: f64,
    pub(crate) is_long: bool,
    pub(crate) af: f64,
    pub(crate) ep: f64,
    pub(crate) sar: f64,
    last_high: f64,
    last_low: f64,
}

impl SarRecurrence {
    /// Seeds the state from the bar before the range (`prev_*`) and the first
    /// bar of the range (`high`/`low`).
    ///
    /// The first bar becomes `last_*`, so the first [`step`](Self::step),
    /// which processes that same bar again, sees it as both previous and
    /// current bar.
    pub(crate) const fn seed(
        is_long: bool,
        prev_high: f64,
        prev_low: f64,
        high: f64,
        low: f64,
        acceleration: f64,
        maximum: f64,
    ) -> Self {
        let (ep, sar) = if is_long {
            (high, prev_low)
        } else {
            (low, prev_high)
        };
        Self {
            acceleration,
            maximum,
            is_long,
            af: acceleration,
            ep,
            sar,
            last_high: high,
            last_low: low,
        }
    }

    /// Processes one bar and returns the stop reported for it.
    pub(crate) fn step(&mut self, new_high: f64, new_low: f64) -> f64 {
        let prev_high = self.last_high;
        let prev_low = self.last_low;
        self.last_high = new_high;
        self.last_low = new_low;

        if self.is_long {
            if new_low <= self.sar {
                self.is_long = false;
                let reported = raise(raise(self.ep, prev_high), new_high);

                self.af = self.acceleration;
                self.ep = new_low;
                let next = reported + self.af * (self.ep - reported);
                self.sar = raise(raise(next, prev_high), new_high);
                return reported;
            }

            let reported = self.sar;
            if new_high > self.ep {
                self.ep = new_high;
                self.af = lower(self.af + self.acceleration, self.maximum);
            }
            let next = self.sar + self.af * (self.ep - self.sar);
            self.sar = lower(lower(next, prev_low), new_low);
            reported
        } else {
            if new_high >= self.sar {
                self.is_long = true;
                let reported = lower(lower(self.ep, prev_low), new_low);

                self.af = self.acceleration;
                self.ep = new_high;
                let next = reported + self.af * (self.ep - reported);
                self.sar = lower(lower(next, prev_low), new_low);
                return reported;
            }

            let reported = self.sar;
            if new_low < self.ep {
                self.ep = new_low;
                self.af = lower(self.af + self.acceleration, self.maximum);
            }
            let next = self.sar + self.af * (self.ep - self.sar);
            self.sar = raise(raise(next, prev_high), new_high);
            reported
        }
    }
}

// =============================================================================
// Range API
// =============================================================================

/// Metadata of a SAR range run.
///
/// `output[k]` holds the stop for input bar `beg_idx + k`, `k < nb_element`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SarRun {
    /// Input index of the first produced value (0 when nothing was produced).
    pub beg_idx: usize,
    /// Number of values written.
    pub nb_element: usize,
    /// Acceleration step actually used, after clamping to the maximum.
    pub acceleration: f64,
}

impl SarRun {
    /// Index placement of the output, without the parameter.
    #[inline]
    #[must_use]
    pub const fn range(&self) -> RangeOutput {
        RangeOutput {
            beg_idx: self.beg_idx,
            nb_element: self.nb_element,
        }
    }
}

/// Computes Parabolic SAR over bars `start_idx..=end_idx` with a caller
/// supplied direction oracle.
///
/// `start_idx` is raised to 1 if needed. If that leaves nothing to evaluate
/// the call succeeds with `beg_idx == 0` and `nb_element == 0`. Otherwise
/// `nb_element == end_idx - beg_idx + 1` values are written to the front of
/// `output`; the rest of the buffer is left untouched.
///
/// # Errors
///
/// Returns an error if:
/// - The input arrays are empty (`Error::EmptyInput`)
/// - The input arrays have different lengths (`Error::LengthMismatch`)
/// - The range is inverted or reaches past the data (`Error::OutOfRangeIndex`)
/// - `output` is shorter than `end_idx - start_idx + 1` (`Error::BufferTooSmall`)
/// - A parameter is out of bounds (`Error::BadParam`)
/// - The oracle fails (its error is returned as is)
pub fn sar_range_into_with<T, O>(
    start_idx: usize,
    end_idx: usize,
    high: &[T],
    low: &[T],
    params: SarParams,
    oracle: O,
    output: &mut [f64],
) -> Result<SarRun>
where
    T: SeriesElement,
    O: DirectionOracle,
{
    check_range_call(start_idx, end_idx, high, low, output.len(), "sar")?;
    let params = params.resolve()?;

    let acceleration = params.effective_acceleration();
    if acceleration < params.acceleration {
        debug!(
            requested = params.acceleration,
            maximum = params.maximum,
            "sar acceleration clamped to maximum"
        );
    }

    let Some(start_idx) = effective_start(start_idx, end_idx, sar_lookback()) else {
        trace!(end_idx, "sar range too short after warm-up");
        return Ok(SarRun {
            beg_idx: 0,
            nb_element: 0,
            acceleration,
        });
    };

    let signal = oracle.initial_signal(start_idx, high, low).map_err(|err| {
        warn!(start_idx, %err, "sar initial direction unavailable");
        err
    })?;
    let starts_short = signal > 0.0;
    trace!(start_idx, signal, long = !starts_short, "sar initial direction");

    let mut state = SarRecurrence::seed(
        !starts_short,
        high[start_idx - 1].widen(),
        low[start_idx - 1].widen(),
        high[start_idx].widen(),
        low[start_idx].widen(),
        acceleration,
        params.maximum,
    );

    for (slot, today) in output.iter_mut().zip(start_idx..=end_idx) {
        *slot = state.step(high[today].widen(), low[today].widen());
    }

    Ok(SarRun {
        beg_idx: start_idx,
        nb_element: end_idx - start_idx + 1,
        acceleration,
    })
}

/// Computes Parabolic SAR over bars `start_idx..=end_idx` using the
/// standard [`MinusDmOracle`].
///
/// # Errors
///
/// Same conditions as [`sar_range_into_with`].
pub fn sar_range_into<T: SeriesElement>(
    start_idx: usize,
    end_idx: usize,
    high: &[T],
    low: &[T],
    params: SarParams,
    output: &mut [f64],
) -> Result<SarRun> {
    sar_range_into_with(start_idx, end_idx, high, low, params, MinusDmOracle, output)
}

/// Computes Parabolic SAR over bars `start_idx..=end_idx` into a new vector.
///
/// The returned vector holds exactly `nb_element` values.
///
/// # Example
///
/// ```
/// use fast_sar::indicators::sar::sar_range;
/// use fast_sar::params::SarParams;
///
/// let high = vec![10.0_f64, 12.0, 11.0, 9.0];
/// let low = vec![8.0_f64, 9.0, 8.0, 7.0];
///
/// let (run, values) = sar_range(0, 3, &high, &low, SarParams::default()).unwrap();
/// assert_eq!(run.beg_idx, 1);
/// assert_eq!(run.nb_element, 3);
/// assert_eq!(values, vec![8.0, 12.0, 12.0]);
/// ```
///
/// # Errors
///
/// Same conditions as [`sar_range_into_with`].
pub fn sar_range<T: SeriesElement>(
    start_idx: usize,
    end_idx: usize,
    high: &[T],
    low: &[T],
    params: SarParams,
) -> Result<(SarRun, Vec<f64>)> {
    validate_price_pair(high, low)?;
    validate_range(start_idx, end_idx, high.len())?;

    let mut output = vec![f64::NAN; end_idx - start_idx + 1];
    let run = sar_range_into(start_idx, end_idx, high, low, params, &mut output)?;
    output.truncate(run.nb_element);
    Ok((run, output))
}

// =============================================================================
// Whole-series API
// =============================================================================

/// Computes Parabolic SAR with default parameters and stores results in output.
///
/// Uses default parameters: `acceleration=0.02`, `maximum=0.20`
///
/// # Errors
///
/// Returns an error if:
/// - The input arrays are empty (`Error::EmptyInput`)
/// - The input arrays have different lengths (`Error::LengthMismatch`)
/// - There is insufficient data for the lookback (`Error::InsufficientData`)
/// - The output buffer is too small (`Error::BufferTooSmall`)
pub fn sar_into<T: SeriesElement>(high: &[T], low: &[T], output: &mut [f64]) -> Result<()> {
    let params = SarParams::default();
    sar_full_into(high, low, params.acceleration, params.maximum, output)
}

/// Computes Parabolic SAR with custom parameters and stores results in output.
///
/// `output[i]` is aligned with input bar `i`; `output[0]` is NaN.
///
/// # Arguments
///
/// * `high` - High price data
/// * `low` - Low price data
/// * `acceleration` - Acceleration factor step (typically 0.02)
/// * `maximum` - Acceleration factor cap (typically 0.20)
/// * `output` - Pre-allocated output slice
///
/// # Errors
///
/// Returns an error if:
/// - The input arrays are empty (`Error::EmptyInput`)
/// - The input arrays have different lengths (`Error::LengthMismatch`)
/// - There is insufficient data for the lookback (`Error::InsufficientData`)
/// - The output buffer is too small (`Error::BufferTooSmall`)
/// - A parameter is out of bounds (`Error::BadParam`)
pub fn sar_full_into<T: SeriesElement>(
    high: &[T],
    low: &[T],
    acceleration: f64,
    maximum: f64,
    output: &mut [f64],
) -> Result<()> {
    validate_price_pair(high, low)?;
    high.validate_min_length(sar_min_len(), "sar")?;

    let n = high.len();
    validate_output_len(output.len(), n, "sar")?;

    let lookback = sar_lookback();
    for slot in &mut output[..lookback] {
        *slot = f64::NAN;
    }
    sar_range_into(
        lookback,
        n - 1,
        high,
        low,
        SarParams::new(acceleration, maximum),
        &mut output[lookback..n],
    )?;
    Ok(())
}

/// Computes Parabolic SAR with default parameters.
///
/// # Example
///
/// ```
/// use fast_sar::indicators::sar;
///
/// let high: Vec<f64> = vec![10.0, 11.0, 12.0, 11.5, 11.0, 10.5, 10.0, 9.5];
/// let low: Vec<f64> = vec![9.0, 10.0, 11.0, 10.5, 10.0, 9.5, 9.0, 8.5];
/// let result = sar(&high, &low).unwrap();
/// assert!(result[0].is_nan()); // First value is NaN
/// assert_eq!(result[1], 9.0); // Seeded from the first bar's low
/// ```
///
/// # Errors
///
/// Same conditions as [`sar_into`].
pub fn sar<T: SeriesElement>(high: &[T], low: &[T]) -> Result<Vec<f64>> {
    let mut output = vec![f64::NAN; high.len()];
    sar_into(high, low, &mut output)?;
    Ok(output)
}

/// Computes Parabolic SAR with custom parameters.
///
/// # Errors
///
/// Same conditions as [`sar_full_into`].
pub fn sar_full<T: SeriesElement>(
    high: &[T],
    low: &[T],
    acceleration: f64,
    maximum: f64,
) -> Result<Vec<f64>> {
    let mut output = vec![f64::NAN; high.len()];
    sar_full_into(high, low, acceleration, maximum, &mut output)?;
    Ok(output)
}

// =============================================================================
// Configuration Type
// =============================================================================

/// Parabolic SAR configuration with fluent builder API.
///
/// # Example
///
/// ```
/// use fast_sar::indicators::sar::Sar;
///
/// let high = vec![10.0_f64, 11.0, 12.0, 13.0, 14.0];
/// let low = vec![9.0_f64, 10.0, 11.0, 12.0, 13.0];
///
/// let result = Sar::default().compute(&high, &low).unwrap();
/// assert!(result[0].is_nan());
///
/// let (run, values) = Sar::new()
///     .acceleration(0.01)
///     .maximum(0.1)
///     .compute_range(2, 4, &high, &low)
///     .unwrap();
/// assert_eq!(run.beg_idx, 2);
/// assert_eq!(values.len(), 3);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Sar {
    params: SarParams,
}

impl Sar {
    /// Creates a new configuration with standard parameters (0.02, 0.20).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the acceleration step.
    ///
    /// Default: 0.02
    #[must_use]
    pub const fn acceleration(mut self, acceleration: f64) -> Self {
        self.params = self.params.acceleration(acceleration);
        self
    }

    /// Sets the acceleration cap.
    ///
    /// Default: 0.20
    #[must_use]
    pub const fn maximum(mut self, maximum: f64) -> Self {
        self.params = self.params.maximum(maximum);
        self
    }

    /// Returns the configured parameters.
    #[must_use]
    pub const fn params(&self) -> SarParams {
        self.params
    }

    /// Computes SAR over the whole series.
    ///
    /// # Errors
    ///
    /// Same conditions as [`sar_full_into`].
    pub fn compute<T: SeriesElement>(&self, high: &[T], low: &[T]) -> Result<Vec<f64>> {
        sar_full(high, low, self.params.acceleration, self.params.maximum)
    }

    /// Computes SAR over the whole series into a pre-allocated buffer.
    ///
    /// # Errors
    ///
    /// Same conditions as [`sar_full_into`].
    pub fn compute_into<T: SeriesElement>(
        &self,
        high: &[T],
        low: &[T],
        output: &mut [f64],
    ) -> Result<()> {
        sar_full_into(
            high,
            low,
            self.params.acceleration,
            self.params.maximum,
            output,
        )
    }

    /// Computes SAR over bars `start_idx..=end_idx`.
    ///
    /// # Errors
    ///
    /// Same conditions as [`sar_range_into_with`].
    pub fn compute_range<T: SeriesElement>(
        &self,
        start_idx: usize,
        end_idx: usize,
        high: &[T],
        low: &[T],
    ) -> Result<(SarRun, Vec<f64>)> {
        sar_range(start_idx, end_idx, high, low, self.params)
    }
}
