//!
//! The benchmark analyzer arguments.
//!

use std::path::PathBuf;

use clap::Parser;

///
/// The benchmark analyzer arguments.
///
#[derive(Debug, Parser)]
#[command(about, long_about = None)]
pub struct Arguments {
    /// The reference run summary.
    #[arg(long, default_value = "reference.json")]
    pub reference: PathBuf,

    /// The candidate run summary.
    #[arg(long, default_value = "candidate.json")]
    pub candidate: PathBuf,

    /// The output file. If unset, the result is printed to `stdout`.
    #[arg(short, long)]
    pub output_file: Option<PathBuf>,

    /// Exits with a failure if any implementation lost passing test cases.
    #[arg(long)]
    pub fail_on_regression: bool,
}
