//! Commonly used types and traits for convenient importing.
//!
//! # Usage
//!
//! ```
//! use fast_sar::prelude::*;
//!
//! let high = vec![10.0_f64, 11.0, 12.0, 11.5, 11.0];
//! let low = vec![9.0_f64, 10.0, 11.0, 10.5, 10.0];
//!
//! let stops = sar(&high, &low).unwrap();
//! let slow = Sar::new().acceleration(0.01).maximum(0.1).compute(&high, &low).unwrap();
//! assert_eq!(stops.len(), slow.len());
//! ```

// Error types
pub use crate::error::{Error, Result};

// Traits
pub use crate::traits::{SeriesElement, ValidatedInput};

// Parameters
pub use crate::params::{SarParams, DEFAULT_ACCELERATION, DEFAULT_MAXIMUM, REAL_DEFAULT};

// Indicator functions
pub use crate::indicators::{
    minus_dm, minus_dm_into, minus_dm_range_into, sar, sar_full, sar_full_into, sar_into,
    sar_range, sar_range_into, sar_range_into_with,
};

// Run metadata, configuration and the direction seam
pub use crate::indicators::{DirectionOracle, MinusDmOracle, RangeOutput, Sar, SarRun};

// Lookback functions
pub use crate::indicators::{minus_dm_lookback, minus_dm_min_len, sar_lookback, sar_min_len};
