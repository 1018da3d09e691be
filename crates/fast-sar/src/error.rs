//! Error types for fast-sar.
//!
//! This module defines the error types returned by the SAR engine, the
//! minus directional movement helper and the parameter validation layer.

use thiserror::Error;

/// The main error type for fast-sar operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The input price series is empty.
    #[error("empty input: no data provided")]
    EmptyInput,

    /// The high and low series do not have the same length.
    #[error("length mismatch: {description}")]
    LengthMismatch {
        /// Description of the mismatch.
        description: String,
    },

    /// The caller-supplied output buffer cannot hold every produced value.
    #[error("output buffer too small for {indicator}: required {required} elements, got {actual}")]
    BufferTooSmall {
        /// Name of the indicator that rejected the buffer.
        indicator: &'static str,
        /// The number of slots required.
        required: usize,
        /// The number of slots provided.
        actual: usize,
    },

    /// The input series is too short for the whole-series API.
    ///
    /// The range API never returns this; a range that is too short after the
    /// warm-up adjustment succeeds with zero output instead.
    #[error("insufficient data for {indicator}: required {required} elements, got {actual}")]
    InsufficientData {
        /// Name of the indicator that needed more data.
        indicator: &'static str,
        /// The number of data points required.
        required: usize,
        /// The number of data points provided.
        actual: usize,
    },

    /// The period parameter is invalid.
    #[error("invalid period {period}: {reason}")]
    InvalidPeriod {
        /// The invalid period value that was provided.
        period: usize,
        /// Description of why the period is invalid.
        reason: &'static str,
    },

    /// The requested index range is inverted or reaches past the data.
    #[error("index range {start_idx}..={end_idx} out of range for {len} bars")]
    OutOfRangeIndex {
        /// Requested first bar.
        start_idx: usize,
        /// Requested last bar.
        end_idx: usize,
        /// Number of bars available.
        len: usize,
    },

    /// A real-valued parameter is outside its accepted bound.
    #[error("bad parameter {name}: {reason}")]
    BadParam {
        /// Parameter name.
        name: &'static str,
        /// Description of why the value was rejected.
        reason: &'static str,
    },

    /// An initial-direction oracle could not produce a signal.
    ///
    /// Custom [`DirectionOracle`](crate::indicators::sar::DirectionOracle)
    /// implementations report their own failures with this variant; the
    /// engine passes any oracle error through unchanged.
    #[error("initial direction oracle failed: {reason}")]
    Oracle {
        /// Description of the failure.
        reason: String,
    },
}

/// Convenience type alias for Results using the fast-sar Error type.
pub type Result<T> = std::result::Result<T, Error>;
