//! fast-sar command-line interface
//!
//! Computes Parabolic SAR over the high/low columns of a CSV file.

use std::process::ExitCode;

use fast_sar_cli::args::Args;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    // Logs go to stderr so CSV on stdout stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse_args();

    match fast_sar_cli::run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(2)
        }
    }
}
