//!
//! The logic tester arguments.
//!

use std::path::PathBuf;

use clap::Parser;

///
/// The logic tester arguments.
///
#[derive(Debug, Parser)]
#[command(about, long_about = None)]
pub struct Arguments {
    /// The logging level.
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppresses the output completely.
    #[arg(short, long)]
    pub quiet: bool,

    /// The directory searched recursively for `*.json` fixture files.
    #[arg(long, default_value = logic_tester::DEFAULT_FIXTURES_DIRECTORY)]
    pub fixtures: PathBuf,

    /// The adapters configuration file.
    #[arg(long, default_value = logic_tester::DEFAULT_ADAPTERS_CONFIG)]
    pub adapters_config: PathBuf,

    /// Measures only the specified adapters, in the specified order.
    #[arg(short, long)]
    pub adapter: Vec<String>,

    /// The number of untimed passes over the fixtures.
    #[arg(long, default_value_t = logic_tester::BenchmarkConfig::DEFAULT_WARMUP_ITERATIONS)]
    pub warmup_iterations: usize,

    /// The number of measured passes over the fixtures.
    #[arg(long, default_value_t = logic_tester::BenchmarkConfig::DEFAULT_BENCHMARK_ITERATIONS)]
    pub benchmark_iterations: usize,

    /// Reports the indices of the passing fixtures.
    #[arg(long)]
    pub report_passed_indices: bool,

    /// The host runtime version, overriding the detection.
    #[arg(long)]
    pub runtime_version: Option<String>,

    /// The time in seconds an implementation is allowed to run.
    #[arg(long, default_value_t = logic_tester::Harness::DEFAULT_TIMEOUT.as_secs())]
    pub timeout: u64,

    /// The worker executable, by default the one next to this executable.
    #[arg(long)]
    pub worker: Option<PathBuf>,

    /// The summary output path, if requested.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// The summary output format: `json`, `csv`, or `markdown`.
    #[arg(long, default_value_t = benchmark_analyzer::OutputFormat::Json)]
    pub output_format: benchmark_analyzer::OutputFormat,
}

impl Arguments {
    ///
    /// Validates the arguments.
    ///
    pub fn validate(arguments: Self) -> anyhow::Result<Self> {
        if arguments.verbose && arguments.quiet {
            anyhow::bail!("The `verbose` and `quiet` flags cannot be used together");
        }
        if arguments.benchmark_iterations == 0 {
            anyhow::bail!("The number of benchmark iterations must be positive");
        }
        if arguments.timeout == 0 {
            anyhow::bail!("The timeout must be positive");
        }
        if let Some(version) = arguments.runtime_version.as_deref() {
            if logic_tester::adapters::runtime::parse_version(version).is_none() {
                anyhow::bail!("Invalid runtime version `{version}`");
            }
        }

        Ok(arguments)
    }
}
