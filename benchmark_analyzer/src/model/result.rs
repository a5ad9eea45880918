//!
//! The benchmark result of a single implementation.
//!

use serde::Deserialize;
use serde::Serialize;

use crate::model::status::Status;

///
/// The benchmark result of a single implementation.
///
/// The counters are normalized to a single pass over the fixture set.
///
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkResult {
    /// The implementation version.
    #[serde(default = "BenchmarkResult::default_version")]
    pub version: String,
    /// The result status.
    pub status: Status,
    /// The number of executed test cases.
    #[serde(default)]
    pub total_tests: usize,
    /// The number of passed test cases.
    #[serde(default)]
    pub passed: usize,
    /// The number of failed test cases.
    #[serde(default)]
    pub failed: usize,
    /// The percentage of passed test cases.
    #[serde(default)]
    pub pass_rate: f64,
    /// The average time of a passed call, in microseconds.
    #[serde(default)]
    pub avg_time_us: f64,
    /// The number of passed calls per second.
    #[serde(default)]
    pub ops_per_second: f64,
    /// The peak resident memory, in megabytes.
    #[serde(default)]
    pub peak_memory_mb: f64,
    /// The resident memory growth across the measured run, in megabytes.
    #[serde(default)]
    pub memory_delta_mb: f64,
    /// The resident memory growth per passed call, in bytes.
    #[serde(default)]
    pub memory_per_op_bytes: f64,
    /// The indices of the fixtures that passed, if requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passed_indices: Option<Vec<usize>>,
    /// The error description for non-successful results.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// The minimal runtime version required by an incompatible implementation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_runtime_version: Option<String>,
}

impl BenchmarkResult {
    /// The maximal length of an error description surfaced in a result.
    pub const ERROR_MAX_LENGTH: usize = 200;

    ///
    /// A shortcut constructor for a successful measurement with zeroed metrics.
    ///
    pub fn success(version: String) -> Self {
        Self {
            version,
            status: Status::Success,
            total_tests: 0,
            passed: 0,
            failed: 0,
            pass_rate: 0.0,
            avg_time_us: 0.0,
            ops_per_second: 0.0,
            peak_memory_mb: 0.0,
            memory_delta_mb: 0.0,
            memory_per_op_bytes: 0.0,
            passed_indices: None,
            error: None,
            min_runtime_version: None,
        }
    }

    ///
    /// A shortcut constructor.
    ///
    pub fn error<S>(error: S) -> Self
    where
        S: ToString,
    {
        Self {
            status: Status::Error,
            error: Some(crate::util::truncate(
                error.to_string().as_str(),
                Self::ERROR_MAX_LENGTH,
            )),
            ..Self::success(Self::default_version())
        }
    }

    ///
    /// A shortcut constructor.
    ///
    pub fn incompatible(runtime: &str, min_runtime_version: &str) -> Self {
        Self {
            status: Status::Incompatible,
            error: Some(format!("Requires {runtime} >= {min_runtime_version}")),
            min_runtime_version: Some(min_runtime_version.to_owned()),
            ..Self::success(Self::default_version())
        }
    }

    ///
    /// Whether the result carries measurements.
    ///
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    ///
    /// Cuts the error description down to the surfaced length.
    ///
    pub fn truncate_error(mut self) -> Self {
        if let Some(error) = self.error.as_mut() {
            *error = crate::util::truncate(error.as_str(), Self::ERROR_MAX_LENGTH);
        }
        self
    }

    ///
    /// The version placeholder.
    ///
    fn default_version() -> String {
        crate::UNKNOWN_VERSION.to_owned()
    }
}
