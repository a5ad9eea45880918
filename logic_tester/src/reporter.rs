//!
//! The benchmark progress reporter.
//!

use std::io::Write;

use colored::Colorize;

use benchmark_analyzer::BenchmarkResult;
use benchmark_analyzer::Status;
use benchmark_analyzer::Summary;

///
/// The console progress reporter.
///
#[derive(Debug, Clone, Copy)]
pub struct Reporter {
    /// The output verbosity.
    verbosity: bool,
    /// Whether the output is suppressed.
    quiet: bool,
}

impl Reporter {
    /// The maximal length of an error in a progress line.
    const ERROR_LENGTH: usize = 50;

    ///
    /// A shortcut constructor.
    ///
    pub fn new(verbosity: bool, quiet: bool) -> Self {
        Self { verbosity, quiet }
    }

    ///
    /// Prints the run parameters.
    ///
    pub fn start(&self, language: &str, version: Option<&str>, tests: usize, adapters: usize) {
        if self.quiet {
            return;
        }
        println!(
            "    {} {} v{}",
            "Starting".bright_green().bold(),
            env!("CARGO_PKG_DESCRIPTION"),
            env!("CARGO_PKG_VERSION"),
        );
        println!(
            "     {} {tests} tests against {adapters} implementations on {language} {}",
            "Running".bright_green().bold(),
            version.unwrap_or(benchmark_analyzer::UNKNOWN_VERSION),
        );
    }

    ///
    /// Prints a fixture file which could not be loaded.
    ///
    pub fn rejected(&self, error: &crate::fixtures::error::Error) {
        if self.quiet {
            return;
        }
        println!("{} {error}", "PARSE ERROR".bright_red());
    }

    ///
    /// Prints the implementation about to be measured.
    ///
    pub fn started(&self, name: &str) {
        if self.quiet {
            return;
        }
        print!("  Benchmarking {name}... ");
        let _ = std::io::stdout().flush();
    }

    ///
    /// Completes the progress line of the measured implementation.
    ///
    pub fn finished(&self, result: &BenchmarkResult) {
        if self.quiet {
            return;
        }
        println!("{}", Self::outcome(result));
        if self.verbosity && result.is_success() {
            println!(
                "    {} passed, {} failed, avg {} us, memory delta {} MB, {} B/op",
                result.passed,
                result.failed,
                result.avg_time_us,
                result.memory_delta_mb,
                result.memory_per_op_bytes,
            );
        }
    }

    ///
    /// Prints the ranked results table.
    ///
    pub fn table(&self, summary: &Summary) {
        if self.quiet {
            return;
        }
        println!();
        print!("{}", benchmark_analyzer::output::markdown::Markdown::from(summary).content);
    }

    ///
    /// The colored one-line outcome.
    ///
    pub fn outcome(result: &BenchmarkResult) -> String {
        let error = benchmark_analyzer::util::truncate(
            result.error.as_deref().unwrap_or_default(),
            Self::ERROR_LENGTH,
        );
        match result.status {
            Status::Incompatible => format!("{} ({error})", "SKIP".bright_black()),
            Status::Error => format!("{} ({error})", "ERROR".bright_red()),
            Status::Success => format!(
                "{}% pass, {} ops/sec, {} MB peak",
                result.pass_rate.to_string().green(),
                benchmark_analyzer::util::format_thousands(result.ops_per_second as u64)
                    .bright_white(),
                result.peak_memory_mb,
            ),
        }
    }
}
