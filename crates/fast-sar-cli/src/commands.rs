//! Command execution: read bars, compute, write the result column.

use std::io::Write;

use fast_sar::indicators::{minus_dm, minus_dm_lookback, sar_lookback, sar_range, SarRun};
use fast_sar::utils::align_to_input;
use fast_sar::SarParams;
use tracing::info;

use crate::args::{sar_params, Args, Command};
use crate::csv_parser::{parse_bars, Bars};
use crate::csv_writer::{write_output, OutputDest};
use crate::error::{CliError, Result};

/// Runs the parsed command.
///
/// # Errors
///
/// Returns the first I/O, CSV or computation error encountered.
pub fn run(args: &Args) -> Result<()> {
    let dest = OutputDest::from_arg(args.output_path());
    match &args.command {
        Command::Sar {
            input,
            acceleration,
            maximum,
            start,
            end,
            single_precision,
            ..
        } => {
            let bars = parse_bars(input)?;
            let params = sar_params(*acceleration, *maximum);
            let values = compute_sar(&bars, params, *start, *end, *single_precision)?;
            write_output(&dest, "sar", &values, bars.dates.as_deref())
        }
        Command::MinusDm { input, period, .. } => {
            check_period(*period)?;
            let bars = parse_bars(input)?;
            let values = minus_dm(&bars.high, &bars.low, *period)?;
            write_output(
                &dest,
                &format!("minus_dm_{period}"),
                &values,
                bars.dates.as_deref(),
            )
        }
        Command::Lookback { period } => {
            check_period(*period)?;
            let mut writer = OutputDest::Stdout.writer()?;
            writeln!(writer, "indicator,lookback")?;
            writeln!(writer, "sar,{}", sar_lookback())?;
            writeln!(writer, "minus_dm_{period},{}", minus_dm_lookback(*period))?;
            writer.flush()?;
            Ok(())
        }
    }
}

fn check_period(period: usize) -> Result<()> {
    if period == 0 {
        return Err(CliError::InvalidArgument {
            argument: "period".to_string(),
            reason: "must be at least 1".to_string(),
            suggestion: Some("Use 1 for the raw value or 14 for Wilder smoothing".to_string()),
        });
    }
    Ok(())
}

/// Computes SAR over the requested bar range and aligns it to the input.
///
/// # Errors
///
/// Returns `CliError::IndicatorError` if the engine rejects the range or
/// parameters.
pub fn compute_sar(
    bars: &Bars,
    params: SarParams,
    start: Option<usize>,
    end: Option<usize>,
    single_precision: bool,
) -> Result<Vec<f64>> {
    let start = start.unwrap_or(0);
    let end = end.unwrap_or_else(|| bars.len().saturating_sub(1));

    let (run, values): (SarRun, Vec<f64>) = if single_precision {
        let (high, low) = bars.to_f32();
        sar_range(start, end, &high, &low, params)?
    } else {
        sar_range(start, end, &bars.high, &bars.low, params)?
    };
    info!(
        beg_idx = run.beg_idx,
        nb_element = run.nb_element,
        acceleration = run.acceleration,
        "sar computed"
    );

    Ok(align_to_input(run.range(), &values, bars.len()))
}
