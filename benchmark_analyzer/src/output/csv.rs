//!
//! Serializing the benchmark summary to CSV.
//!

use std::fmt::Write;

use crate::model::summary::Summary;

///
/// Serialize the summary to CSV in the following format, one line per implementation in ranking order:
/// "name", "status", "version", "total", "passed", "failed", "pass_rate", "avg_time_us", "ops_per_second",
/// "peak_memory_mb", "memory_delta_mb", "memory_per_op_bytes", "error"
///
#[derive(Debug, Default)]
pub struct Csv {
    /// The CSV string.
    pub content: String,
}

impl Csv {
    /// The CSV header.
    const HEADER: &'static str = r#""name", "status", "version", "total", "passed", "failed", "pass_rate", "avg_time_us", "ops_per_second", "peak_memory_mb", "memory_delta_mb", "memory_per_op_bytes", "error""#;

    /// The expected maximum length of a line.
    const LINE_LENGTH_ESTIMATE: usize = 256;
}

impl From<&Summary> for Csv {
    fn from(summary: &Summary) -> Self {
        let mut content =
            String::with_capacity((summary.results.len() + 1) * Self::LINE_LENGTH_ESTIMATE);
        content.push_str(Self::HEADER);
        content.push('\n');

        for (name, result) in summary.ranked() {
            let error = result
                .error
                .as_deref()
                .unwrap_or_default()
                .replace('"', "\"\"")
                .replace('\n', " ");
            writeln!(
                &mut content,
                r#""{name}", "{}", "{}", {}, {}, {}, {}, {}, {}, {}, {}, {}, "{error}""#,
                result.status,
                result.version,
                result.total_tests,
                result.passed,
                result.failed,
                result.pass_rate,
                result.avg_time_us,
                result.ops_per_second,
                result.peak_memory_mb,
                result.memory_delta_mb,
                result.memory_per_op_bytes,
            )
            .expect("Always valid");
        }

        Self { content }
    }
}
