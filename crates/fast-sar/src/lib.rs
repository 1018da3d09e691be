//! fast-sar: Parabolic SAR (Stop and Reverse) engine
//!
//! This crate computes Wilder's Parabolic SAR over high/low price series with
//! the same numbers as the TA-Lib `SAR` function, including its bootstrapping
//! and reversal rules.
//!
//! # Features
//!
//! - **Range API**: evaluate any inclusive bar range and get the placement of
//!   the output back
//! - **Series API**: output aligned with the input, NaN for the warm-up bar
//! - **Generics**: `f32` or `f64` input, `f64` output
//! - **Pluggable start**: the initial trend direction comes from a
//!   [`DirectionOracle`](indicators::DirectionOracle), by default one-bar
//!   `MINUS_DM`
//!
//! # Quick Start
//!
//! ```
//! use fast_sar::prelude::*;
//!
//! let high = vec![10.0_f64, 12.0, 11.0, 9.0];
//! let low = vec![8.0_f64, 9.0, 8.0, 7.0];
//!
//! let (run, stops) = sar_range(0, 3, &high, &low, SarParams::default()).unwrap();
//! assert_eq!(run.beg_idx, 1);
//! assert_eq!(stops, vec![8.0, 12.0, 12.0]);
//! ```
//!
//! # Error Handling
//!
//! All entry points return [`Result<T, Error>`]:
//!
//! ```
//! use fast_sar::prelude::*;
//!
//! // Not enough bars for the warm-up
//! let result = sar(&[10.0_f64], &[9.0]);
//! assert!(result.is_err());
//!
//! // Parameters out of bounds
//! let result = sar_full(&[10.0_f64, 11.0], &[9.0, 10.0], -0.02, 0.2);
//! assert!(matches!(result, Err(Error::BadParam { .. })));
//! ```

#![deny(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::perf)]
#![warn(clippy::nursery)]
#![warn(clippy::needless_collect)]
#![warn(clippy::or_fun_call)]
#![warn(clippy::inefficient_to_string)]
#![warn(clippy::useless_conversion)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod indicators;
pub mod params;
pub mod prelude;
pub mod traits;
pub mod utils;

// Re-export commonly used types at crate root
pub use error::{Error, Result};
pub use indicators::sar;
pub use params::SarParams;
pub use traits::{SeriesElement, ValidatedInput};
pub use utils::{approx_eq, EPSILON};
