//!
//! The benchmark configuration.
//!

use serde::Deserialize;
use serde::Serialize;

///
/// The iteration settings shared by every implementation in a run.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkConfig {
    /// The number of untimed passes over the fixture set.
    pub warmup_iterations: usize,
    /// The number of measured passes over the fixture set.
    pub benchmark_iterations: usize,
    /// Whether to report the indices of the passing fixtures.
    #[serde(default)]
    pub report_passed_indices: bool,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            warmup_iterations: Self::DEFAULT_WARMUP_ITERATIONS,
            benchmark_iterations: Self::DEFAULT_BENCHMARK_ITERATIONS,
            report_passed_indices: false,
        }
    }
}

impl BenchmarkConfig {
    /// The default number of warmup passes.
    pub const DEFAULT_WARMUP_ITERATIONS: usize = 2;

    /// The default number of measured passes.
    pub const DEFAULT_BENCHMARK_ITERATIONS: usize = 5;

    ///
    /// A shortcut constructor.
    ///
    pub fn new(
        warmup_iterations: usize,
        benchmark_iterations: usize,
        report_passed_indices: bool,
    ) -> anyhow::Result<Self> {
        let config = Self {
            warmup_iterations,
            benchmark_iterations,
            report_passed_indices,
        };
        config.validate()?;
        Ok(config)
    }

    ///
    /// Checks that there is at least one measured pass.
    ///
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.benchmark_iterations == 0 {
            anyhow::bail!("The number of benchmark iterations must be positive");
        }
        Ok(())
    }
}
