//! Command-line interface wiring for the `pm42-labels` binary.

use std::path::PathBuf;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{Parser, ValueHint};
use pm42_labels::{Options, convert_file};

pub mod common;
pub mod utils;

use common::MarkerStyleArg;

/// Parsed CLI entrypoint.
#[derive(Parser, Debug)]
#[command(
    name = "pm42-labels",
    version,
    about = "Convert a tab-separated item export into a label printer command file"
)]
pub struct Cli {
    /// Tab-separated input with a header row.
    #[arg(value_hint = ValueHint::FilePath)]
    pub input: PathBuf,

    /// Command file to write.
    #[arg(value_hint = ValueHint::FilePath)]
    pub output: PathBuf,

    /// How control markers are written.
    #[arg(long, value_enum, default_value_t = MarkerStyleArg::Placeholder)]
    pub markers: MarkerStyleArg,

    /// JSON file overriding the expected column headers.
    #[arg(long, value_name = "FILE")]
    pub columns: Option<PathBuf>,

    /// Log skipped rows and a run summary to stderr.
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

impl Cli {
    /// Parse process arguments. Usage errors exit with status 1.
    pub fn parse_or_exit() -> Self {
        match Self::try_parse() {
            Ok(cli) => cli,
            Err(err) => match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
                _ => {
                    let _ = err.print();
                    std::process::exit(1);
                }
            },
        }
    }
}

/// Execute the conversion.
pub fn run(cli: Cli) -> Result<()> {
    let options = Options {
        markers: cli.markers.into(),
        columns: utils::load_columns(cli.columns.as_deref())?,
    };
    let summary = convert_file(&cli.input, &cli.output, &options)?;
    println!(
        "Generated {} ({} blocks)",
        cli.output.display(),
        summary.blocks
    );
    Ok(())
}
