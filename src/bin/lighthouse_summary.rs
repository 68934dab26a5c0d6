//! Print category scores and failed audits from a Lighthouse HTML report.
//!
//! Exit status: 0 on success, 1 when the report JSON is not found in the
//! file, 2 on any other failure.

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use lighthouse_summary::{summarize_file, Error, Options, DEFAULT_MARKER};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "lighthouse-summary", version)]
#[command(about = "Summarize scores and failed audits from a Lighthouse HTML report", long_about = None)]
struct Cli {
    /// Lighthouse HTML report to read.
    #[arg(value_name = "REPORT", env = "LIGHTHOUSE_REPORT")]
    report: PathBuf,

    /// Global variable the report JSON is assigned to.
    #[arg(long, default_value = DEFAULT_MARKER)]
    marker: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let options = Options {
        marker: cli.marker,
        ..Options::default()
    };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let result = summarize_file(&cli.report, &options, &mut out)
        .and_then(|()| out.flush().map_err(Error::from));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match &err {
                Error::MarkerNotFound => eprintln!("{err}"),
                _ => eprintln!("Error parsing report: {err}"),
            }
            ExitCode::from(err.exit_code())
        }
    }
}
