//! CSV output for indicator results.
//!
//! One row is written per input bar so the output lines up with the input
//! file. Bars without a value (warm-up, outside the requested range, or NaN)
//! are written as empty cells.

use crate::error::{CliError, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Output destination: either stdout or a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputDest {
    /// Write to stdout.
    Stdout,
    /// Write to a file at the given path.
    File(PathBuf),
}

impl OutputDest {
    /// Destination for an optional `-o` argument.
    #[must_use]
    pub fn from_arg(path: Option<&str>) -> Self {
        path.map_or(Self::Stdout, |p| Self::File(PathBuf::from(p)))
    }

    /// Create a writer for this output destination.
    ///
    /// # Errors
    ///
    /// Returns `CliError::IoError` if the file cannot be created.
    pub fn writer(&self) -> Result<Box<dyn Write>> {
        match self {
            Self::Stdout => Ok(Box::new(io::stdout().lock())),
            Self::File(path) => {
                let file = File::create(path).map_err(|e| CliError::IoError {
                    source: e,
                    path: Some(path.display().to_string()),
                })?;
                Ok(Box::new(BufWriter::new(file)))
            }
        }
    }
}

/// Write a single value column, prefixed by the date column if present.
///
/// Dates are quoted as needed, so a date read from a quoted input cell is
/// written back as a single cell.
///
/// # Errors
///
/// Returns `CliError::IoError` on write failure.
pub fn write_column<W: Write>(
    writer: &mut W,
    header: &str,
    values: &[f64],
    dates: Option<&[String]>,
) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    if dates.is_some() {
        wtr.write_record(["date", header]).map_err(write_error)?;
    } else {
        wtr.write_record([header]).map_err(write_error)?;
    }

    for (i, value) in values.iter().enumerate() {
        let cell = if value.is_nan() {
            String::new()
        } else {
            value.to_string()
        };
        let written = match dates {
            Some(dates) => {
                let date = dates.get(i).map_or("", String::as_str);
                wtr.write_record([date, cell.as_str()])
            }
            None => wtr.write_record([cell.as_str()]),
        };
        written.map_err(write_error)?;
    }
    wtr.flush()?;
    Ok(())
}

fn write_error(err: csv::Error) -> CliError {
    match err.into_kind() {
        csv::ErrorKind::Io(source) => CliError::IoError { source, path: None },
        kind => CliError::CsvParseError {
            message: format!("{kind:?}"),
            line: None,
        },
    }
}

/// Write a single value column to `dest`.
///
/// # Errors
///
/// Returns `CliError::IoError` if the destination cannot be opened or written.
pub fn write_output(
    dest: &OutputDest,
    header: &str,
    values: &[f64],
    dates: Option<&[String]>,
) -> Result<()> {
    let mut writer = dest.writer()?;
    write_column(&mut writer, header, values, dates)
}
