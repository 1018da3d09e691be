//! Parabolic SAR and its directional-movement dependency.
//!
//! # Overview
//!
//! Every indicator here comes in two shapes:
//!
//! - **Range API** (`*_range_into`, `*_range`): evaluates bars
//!   `start_idx..=end_idx`, writes a dense prefix of the output buffer and
//!   reports where it starts through [`RangeOutput`] / [`SarRun`].
//! - **Series API** (`sar`, `sar_into`, `minus_dm`, ...): output aligned with
//!   the input, NaN for the lookback bars.
//!
//! Inputs may be `f32` or `f64` via the
//! [`SeriesElement`](crate::traits::SeriesElement) trait; outputs are `f64`.
//!
//! # Example
//!
//! ```
//! use fast_sar::indicators::{minus_dm, sar};
//!
//! let high = vec![10.0_f64, 12.0, 11.0, 9.0];
//! let low = vec![8.0_f64, 9.0, 8.0, 7.0];
//!
//! let stops = sar(&high, &low).unwrap();
//! assert_eq!(&stops[1..], &[8.0, 12.0, 12.0]);
//!
//! let dm = minus_dm(&high, &low, 1).unwrap();
//! assert_eq!(&dm[1..], &[0.0, 1.0, 1.0]);
//! ```
//!
//! # Error Handling
//!
//! Entry points return [`Result<T, Error>`](crate::error::Error) for:
//!
//! - Empty input data ([`EmptyInput`](crate::error::Error::EmptyInput))
//! - Mismatched high/low lengths
//!   ([`LengthMismatch`](crate::error::Error::LengthMismatch))
//! - Bad index ranges ([`OutOfRangeIndex`](crate::error::Error::OutOfRangeIndex))
//! - Out-of-bounds parameters ([`BadParam`](crate::error::Error::BadParam))

pub mod minus_dm;
pub mod range;
pub mod sar;

pub use minus_dm::{minus_dm, minus_dm_into, minus_dm_lookback, minus_dm_min_len, minus_dm_range_into};
pub use range::RangeOutput;
pub use sar::{
    sar, sar_full, sar_full_into, sar_into, sar_lookback, sar_min_len, sar_range, sar_range_into,
    sar_range_into_with, DirectionOracle, MinusDmOracle, Sar, SarRun,
};
