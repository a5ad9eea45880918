//!
//! The worker result protocol.
//!
//! The worker prints exactly one line `BENCHMARK_RESULT:<json>` to its standard output.
//! Everything else it prints is noise.
//!

use benchmark_analyzer::BenchmarkResult;
use benchmark_analyzer::RESULT_SENTINEL;

use crate::harness::process::ProcessOutput;

/// The number of leading characters of a malformed result kept in the error.
pub const MALFORMED_PREFIX_LENGTH: usize = 100;

///
/// Encodes the worker result line.
///
pub fn encode(result: &BenchmarkResult) -> anyhow::Result<String> {
    Ok(format!("{RESULT_SENTINEL}{}", serde_json::to_string(result)?))
}

///
/// Converts the worker output into its benchmark result.
///
/// The last sentinel line wins regardless of the exit status.
///
pub fn interpret(output: &ProcessOutput) -> BenchmarkResult {
    if let Some(json) = output
        .stdout
        .lines()
        .rev()
        .find_map(|line| line.strip_prefix(RESULT_SENTINEL))
    {
        let json = json.trim();
        return match serde_json::from_str::<BenchmarkResult>(json) {
            Ok(result) => result.truncate_error(),
            Err(_) => BenchmarkResult::error(format!(
                "Invalid JSON: {}",
                benchmark_analyzer::util::truncate(json, MALFORMED_PREFIX_LENGTH)
            )),
        };
    }

    if !output.success() {
        let stderr = strip_diagnostics(output.stderr.as_str());
        return BenchmarkResult::error(if stderr.is_empty() {
            "Unknown error".to_owned()
        } else {
            stderr
        });
    }

    BenchmarkResult::error("No benchmark result found")
}

///
/// Drops warnings and non-error log lines from the standard error.
///
pub fn strip_diagnostics(stderr: &str) -> String {
    let log_line = regex::Regex::new(r"^\S+\s+(TRACE|DEBUG|INFO|WARN)\s").expect("Always valid");
    stderr
        .lines()
        .filter(|line| !line.to_lowercase().contains("warning:"))
        .filter(|line| !log_line.is_match(line))
        .collect::<Vec<&str>>()
        .join("\n")
        .trim()
        .to_owned()
}

#[cfg(all(test, unix))]
mod tests {
    use std::os::unix::process::ExitStatusExt;
    use std::process::ExitStatus;

    use benchmark_analyzer::BenchmarkResult;
    use benchmark_analyzer::Status;

    use crate::harness::process::ProcessOutput;

    fn output(code: Option<i32>, stdout: &str, stderr: &str) -> ProcessOutput {
        ProcessOutput {
            status: code.map(|code| ExitStatus::from_raw(code << 8)),
            stdout: stdout.to_owned(),
            stderr: stderr.to_owned(),
        }
    }

    #[test]
    fn sentinel_among_noise() {
        let result = BenchmarkResult {
            passed: 3,
            ..BenchmarkResult::success("1.2.3".to_owned())
        };
        let line = super::encode(&result).expect("Always valid");
        let stdout = format!("loading gems...\n{line}\nbye\n");

        assert_eq!(super::interpret(&output(Some(0), stdout.as_str(), "")), result);
        assert_eq!(super::interpret(&output(Some(1), stdout.as_str(), "boom")), result);
    }

    #[test]
    fn malformed_sentinel() {
        let stdout = format!("BENCHMARK_RESULT:{{{}", "x".repeat(300));
        let result = super::interpret(&output(Some(0), stdout.as_str(), ""));
        assert_eq!(result.status, Status::Error);
        let error = result.error.expect("Always exists");
        assert!(error.starts_with("Invalid JSON: {xxx"));
        assert_eq!(error.chars().count(), "Invalid JSON: ".len() + 100);
    }

    #[test]
    fn failed_worker() {
        let stderr = "/usr/lib/ruby/warning: constant ::Fixnum is deprecated\n\
                      2026-01-01T00:00:00.000000Z  WARN memory sampling failed\n\
                      LoadError: cannot load such file -- json_logic\n";
        let result = super::interpret(&output(Some(1), "", stderr));
        assert_eq!(
            result.error.as_deref(),
            Some("LoadError: cannot load such file -- json_logic")
        );

        let result = super::interpret(&output(Some(1), "", "warning: only noise\n"));
        assert_eq!(result.error.as_deref(), Some("Unknown error"));

        let long = "e".repeat(500);
        let result = super::interpret(&output(Some(2), "", long.as_str()));
        assert_eq!(
            result.error.map(|error| error.len()),
            Some(BenchmarkResult::ERROR_MAX_LENGTH)
        );
    }

    #[test]
    fn silent_worker() {
        let result = super::interpret(&output(Some(0), "hello\n", ""));
        assert_eq!(result.error.as_deref(), Some("No benchmark result found"));
    }
}
