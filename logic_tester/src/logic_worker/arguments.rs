//!
//! The logic worker arguments.
//!

use std::path::PathBuf;

use clap::Parser;

///
/// The logic worker arguments.
///
#[derive(Debug, Parser)]
#[command(about = "Measures one rule evaluator implementation in isolation", long_about = None)]
pub struct Arguments {
    /// The logging level.
    #[arg(short, long)]
    pub verbose: bool,

    /// The payload file written by the harness.
    #[arg(long)]
    pub config: PathBuf,
}
