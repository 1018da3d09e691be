//! CSV parsing for high/low bar data.
//!
//! # Column Detection
//!
//! Columns are matched on their header, case-insensitively and ignoring
//! surrounding whitespace:
//! - `high`, `h` → high prices
//! - `low`, `l` → low prices
//! - `date`, `time`, `datetime`, `timestamp`, `dt` → row labels, carried
//!   through to the output unparsed
//!
//! Any other column is ignored, so OHLCV files work as they are. An empty
//! cell in a price column reads as NaN.

use crate::error::{CliError, Result};
use csv::ReaderBuilder;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::debug;

const HIGH_HEADERS: &[&str] = &["high", "h"];
const LOW_HEADERS: &[&str] = &["low", "l"];
const DATE_HEADERS: &[&str] = &["date", "time", "datetime", "timestamp", "dt"];

/// High/low bars read from a CSV file.
#[derive(Debug, Clone, PartialEq)]
pub struct Bars {
    /// Row labels from the date column, if the file has one.
    pub dates: Option<Vec<String>>,
    /// High prices.
    pub high: Vec<f64>,
    /// Low prices.
    pub low: Vec<f64>,
}

impl Bars {
    /// Number of bars.
    #[must_use]
    pub fn len(&self) -> usize {
        self.high.len()
    }

    /// Returns true if the file had no data rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.high.is_empty()
    }

    /// Narrows the prices to single precision.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn to_f32(&self) -> (Vec<f32>, Vec<f32>) {
        (
            self.high.iter().map(|&v| v as f32).collect(),
            self.low.iter().map(|&v| v as f32).collect(),
        )
    }
}

/// Normalize a column header name for matching.
fn normalize_header(header: &str) -> String {
    header.trim().to_lowercase()
}

fn find_column(headers: &[String], aliases: &[&str]) -> Option<usize> {
    headers
        .iter()
        .position(|h| aliases.contains(&normalize_header(h).as_str()))
}

/// Parse a string value to f64, treating empty as NaN.
fn parse_value(value: &str, line: usize) -> Result<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Ok(f64::NAN)
    } else {
        trimmed.parse::<f64>().map_err(|_| CliError::CsvParseError {
            message: format!("cannot parse '{trimmed}' as number"),
            line: Some(line),
        })
    }
}

/// Parse a CSV file of bars.
///
/// # Errors
///
/// Returns `CliError::IoError` if the file cannot be read, or
/// `CliError::CsvParseError` if the CSV is malformed or lacks a high or low
/// column.
pub fn parse_bars<P: AsRef<Path>>(path: P) -> Result<Bars> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| CliError::IoError {
        source: e,
        path: Some(path.display().to_string()),
    })?;
    parse_bars_from_reader(BufReader::new(file))
}

/// Parse bars from a reader.
///
/// # Errors
///
/// Same conditions as [`parse_bars`], minus file access.
pub fn parse_bars_from_reader<R: Read>(reader: R) -> Result<Bars> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = csv_reader
        .headers()
        .map_err(|e| CliError::CsvParseError {
            message: e.to_string(),
            line: Some(1),
        })?
        .iter()
        .map(String::from)
        .collect();

    let missing = |name: &str| CliError::CsvParseError {
        message: format!("no '{name}' column found (headers: {})", headers.join(",")),
        line: Some(1),
    };
    let high_idx = find_column(&headers, HIGH_HEADERS).ok_or_else(|| missing("high"))?;
    let low_idx = find_column(&headers, LOW_HEADERS).ok_or_else(|| missing("low"))?;
    let date_idx = find_column(&headers, DATE_HEADERS);
    debug!(high_idx, low_idx, ?date_idx, "detected csv columns");

    let mut bars = Bars {
        dates: date_idx.map(|_| Vec::new()),
        high: Vec::new(),
        low: Vec::new(),
    };

    for (row_idx, result) in csv_reader.records().enumerate() {
        // +2 for the header row and 1-based lines
        let line = row_idx + 2;
        let record = result.map_err(|e| CliError::CsvParseError {
            message: e.to_string(),
            line: Some(line),
        })?;

        bars.high
            .push(parse_value(record.get(high_idx).unwrap_or(""), line)?);
        bars.low
            .push(parse_value(record.get(low_idx).unwrap_or(""), line)?);
        if let (Some(dates), Some(idx)) = (bars.dates.as_mut(), date_idx) {
            dates.push(record.get(idx).unwrap_or("").to_string());
        }
    }

    if bars.is_empty() {
        return Err(CliError::CsvParseError {
            message: "no data rows".to_string(),
            line: None,
        });
    }

    debug!(rows = bars.len(), "parsed bars");
    Ok(bars)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_high_low_only() {
        let data = "high,low\n10,8\n12,9\n";
        let bars = parse_bars_from_reader(data.as_bytes()).unwrap();
        assert_eq!(bars.high, vec![10.0, 12.0]);
        assert_eq!(bars.low, vec![8.0, 9.0]);
        assert!(bars.dates.is_none());
    }

    #[test]
    fn test_parse_ohlcv_with_date() {
        let data = "Date,Open,High,Low,Close,Volume\n\
                    2024-01-01,9,10,8,9.5,1000\n\
                    2024-01-02,9.5,12,9,11,1200\n";
        let bars = parse_bars_from_reader(data.as_bytes()).unwrap();
        assert_eq!(bars.len(), 2);
        assert_eq!(bars.high, vec![10.0, 12.0]);
        assert_eq!(
            bars.dates,
            Some(vec!["2024-01-01".to_string(), "2024-01-02".to_string()])
        );
    }

    #[test]
    fn test_header_aliases_and_whitespace() {
        let data = " H , L ,symbol\n10,8,ABC\n";
        let bars = parse_bars_from_reader(data.as_bytes()).unwrap();
        assert_eq!(bars.high, vec![10.0]);
        assert_eq!(bars.low, vec![8.0]);
    }

    #[test]
    fn test_empty_cell_is_nan() {
        let data = "high,low\n10,\n";
        let bars = parse_bars_from_reader(data.as_bytes()).unwrap();
        assert!(bars.low[0].is_nan());
    }

    #[test]
    fn test_missing_low_column() {
        let data = "high,close\n10,9\n";
        let err = parse_bars_from_reader(data.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("'low'"));
    }

    #[test]
    fn test_bad_number_reports_line() {
        let data = "high,low\n10,8\nabc,9\n";
        match parse_bars_from_reader(data.as_bytes()) {
            Err(CliError::CsvParseError { line, message }) => {
                assert_eq!(line, Some(3));
                assert!(message.contains("abc"));
            }
            other => panic!("Expected CsvParseError, got {other:?}"),
        }
    }

    #[test]
    fn test_no_rows() {
        let data = "high,low\n";
        assert!(matches!(
            parse_bars_from_reader(data.as_bytes()),
            Err(CliError::CsvParseError { .. })
        ));
    }

    #[test]
    fn test_to_f32() {
        let bars = Bars {
            dates: None,
            high: vec![10.5],
            low: vec![8.25],
        };
        assert_eq!(bars.to_f32(), (vec![10.5_f32], vec![8.25_f32]));
    }
}
