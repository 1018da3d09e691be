//! CLI argument parsing module.
//!
//! The CLI follows the pattern: `fast-sar <command> <input.csv> [options] [-o output.csv]`
//!
//! # Examples
//!
//! ```bash
//! # Parabolic SAR with default parameters (0.02, 0.20)
//! fast-sar sar bars.csv
//!
//! # Slower acceleration, written to a file
//! fast-sar sar bars.csv --acceleration 0.01 --maximum 0.1 -o sar.csv
//!
//! # Only bars 50..=99, from single-precision prices
//! fast-sar sar bars.csv --start 50 --end 99 --single-precision
//!
//! # Minus directional movement, 14-bar Wilder smoothing
//! fast-sar minus-dm bars.csv 14
//!
//! # Warm-up bar counts
//! fast-sar lookback
//! ```

use clap::{Parser, Subcommand};
use fast_sar::params::{SarParams, REAL_DEFAULT};

/// fast-sar: Parabolic SAR over CSV price data
#[derive(Parser, Debug)]
#[command(name = "fast-sar")]
#[command(author, version, about = "Parabolic SAR (Stop and Reverse) over CSV price data")]
#[command(long_about = "fast-sar computes Wilder's Parabolic SAR from the high and low \
    columns of a CSV file, matching TA-Lib's SAR values. Output is one row per input bar, \
    written to a file or stdout.")]
pub struct Args {
    /// The command to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Parabolic SAR
    #[command(about = "Parabolic SAR (Stop and Reverse)")]
    Sar {
        /// Input CSV file with high and low columns
        input: String,

        /// Acceleration factor step
        #[arg(short, long, allow_negative_numbers = true)]
        acceleration: Option<f64>,

        /// Acceleration factor cap
        #[arg(short, long, allow_negative_numbers = true)]
        maximum: Option<f64>,

        /// First bar to evaluate (0-based, defaults to the first bar)
        #[arg(long)]
        start: Option<usize>,

        /// Last bar to evaluate (0-based, inclusive, defaults to the last bar)
        #[arg(long)]
        end: Option<usize>,

        /// Read prices as single precision before computing
        #[arg(long)]
        single_precision: bool,

        /// Output CSV file (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Minus Directional Movement
    #[command(about = "Minus Directional Movement (-DM)")]
    MinusDm {
        /// Input CSV file with high and low columns
        input: String,

        /// Smoothing period (1 = raw one-bar value)
        #[arg(default_value = "1")]
        period: usize,

        /// Output CSV file (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Warm-up bar counts
    #[command(about = "Print the number of warm-up bars each indicator needs")]
    Lookback {
        /// Period used for the minus-dm row
        #[arg(long, default_value = "1")]
        period: usize,
    },
}

impl Args {
    /// Parse command-line arguments.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the input file path from the command, if it takes one.
    #[must_use]
    pub fn input_path(&self) -> Option<&str> {
        match &self.command {
            Command::Sar { input, .. } | Command::MinusDm { input, .. } => Some(input),
            Command::Lookback { .. } => None,
        }
    }

    /// Get the output file path from the command, if specified.
    #[must_use]
    pub fn output_path(&self) -> Option<&str> {
        match &self.command {
            Command::Sar { output, .. } | Command::MinusDm { output, .. } => output.as_deref(),
            Command::Lookback { .. } => None,
        }
    }
}

/// Builds SAR parameters from optional command-line values.
///
/// Omitted values become [`REAL_DEFAULT`] so the library substitutes its
/// defaults during validation.
#[must_use]
pub fn sar_params(acceleration: Option<f64>, maximum: Option<f64>) -> SarParams {
    SarParams::new(
        acceleration.unwrap_or(REAL_DEFAULT),
        maximum.unwrap_or(REAL_DEFAULT),
    )
}
