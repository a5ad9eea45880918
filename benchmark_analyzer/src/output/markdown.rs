//!
//! Rendering the benchmark summary as a Markdown table.
//!

use std::fmt::Write;

use crate::model::status::Status;
use crate::model::summary::Summary;

///
/// The ranked results table with a legend.
///
#[derive(Debug, Default)]
pub struct Markdown {
    /// The Markdown string.
    pub content: String,
}

impl Markdown {
    /// The maximal length of an error description in a table row.
    const ERROR_COLUMN_LENGTH: usize = 50;

    /// The maximal length of a version in a table row.
    const VERSION_COLUMN_LENGTH: usize = 7;
}

impl From<&Summary> for Markdown {
    fn from(summary: &Summary) -> Self {
        let mut content = String::with_capacity(1024);
        content.push_str(
            "| Implementation       | Version | Pass Rate | Passed | Failed | Ops/sec     | Peak Mem  |\n",
        );
        content.push_str(
            "|----------------------|---------|-----------|--------|--------|-------------|-----------|\n",
        );

        for (name, result) in summary.ranked() {
            let error = crate::util::truncate(
                result.error.as_deref().unwrap_or_default(),
                Self::ERROR_COLUMN_LENGTH,
            );
            let row = match result.status {
                Status::Incompatible => {
                    writeln!(content, "| {name:<20} | -       | INCOMPATIBLE - {error:<45} |")
                }
                Status::Error => writeln!(content, "| {name:<20} | -       | ERROR - {error:<50} |"),
                Status::Success => writeln!(
                    content,
                    "| {name:<20} | {:<7} | {:>9} | {:>6} | {:>6} | {:>11} | {:>9} |",
                    crate::util::truncate(result.version.as_str(), Self::VERSION_COLUMN_LENGTH),
                    format!("{}%", result.pass_rate),
                    result.passed,
                    result.failed,
                    crate::util::format_thousands(result.ops_per_second as u64),
                    format!("{} MB", result.peak_memory_mb),
                ),
            };
            row.expect("Always valid");
        }

        content.push('\n');
        content.push_str("Legend:\n");
        content.push_str("  Pass Rate = percentage of tests passed\n");
        content.push_str("  Ops/sec   = operations per second (passed tests only)\n");
        content.push_str("  Peak Mem  = peak memory usage during benchmark\n");

        Self { content }
    }
}
