//!
//! The raw benchmark counters.
//!

use std::time::Duration;

use benchmark_analyzer::util::round;
use benchmark_analyzer::BenchmarkResult;

///
/// The resident memory observed across the measured passes, in kilobytes.
///
/// Missing samples are skipped, so the baseline is the first available sample and the final
/// value is the last available one.
///
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MemoryTrack {
    /// The first available sample.
    pub before_kb: Option<u64>,
    /// The largest sample.
    pub peak_kb: u64,
    /// The last available sample.
    pub after_kb: Option<u64>,
}

impl MemoryTrack {
    ///
    /// Accounts a sample, or nothing if the sample is missing.
    ///
    pub fn observe(&mut self, sample_kb: Option<u64>) {
        let Some(sample_kb) = sample_kb else {
            return;
        };
        self.before_kb.get_or_insert(sample_kb);
        self.peak_kb = self.peak_kb.max(sample_kb);
        self.after_kb = Some(sample_kb);
    }

    ///
    /// The growth between the first and the last available sample, which may be negative.
    ///
    pub fn delta_kb(&self) -> i64 {
        match (self.before_kb, self.after_kb) {
            (Some(before_kb), Some(after_kb)) => after_kb as i64 - before_kb as i64,
            _ => 0,
        }
    }
}

///
/// The counters accumulated over all measured passes.
///
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Tally {
    /// The number of passed calls.
    pub passed: usize,
    /// The number of failed calls.
    pub failed: usize,
    /// The total time spent in passed calls.
    pub passed_time: Duration,
}

impl Tally {
    ///
    /// Accounts a passed call.
    ///
    pub fn pass(&mut self, elapsed: Duration) {
        self.passed += 1;
        self.passed_time += elapsed;
    }

    ///
    /// Accounts a failed call.
    ///
    pub fn fail(&mut self) {
        self.failed += 1;
    }

    ///
    /// Converts the counters into the per-pass benchmark result.
    ///
    /// Counts are divided by `iterations` with truncation, rates use the raw totals.
    ///
    pub fn into_result(
        self,
        version: String,
        iterations: usize,
        memory: MemoryTrack,
        passed_indices: Option<Vec<usize>>,
    ) -> BenchmarkResult {
        let iterations = iterations.max(1);
        let total = self.passed + self.failed;
        let time_us = self.passed_time.as_nanos() as f64 / 1_000.0;

        let pass_rate = if total > 0 {
            round(self.passed as f64 / total as f64 * 100.0, 2)
        } else {
            0.0
        };
        let avg_time_us = if self.passed > 0 {
            round(time_us / self.passed as f64, 3)
        } else {
            0.0
        };
        let ops_per_second = if self.passed > 0 && time_us > 0.0 {
            round(self.passed as f64 / (time_us / 1_000_000.0), 2)
        } else {
            0.0
        };
        let passed_per_iteration = self.passed / iterations;
        let memory_per_op_bytes = if passed_per_iteration > 0 {
            round(
                memory.delta_kb() as f64 * 1024.0 / passed_per_iteration as f64,
                2,
            )
        } else {
            0.0
        };

        BenchmarkResult {
            total_tests: total / iterations,
            passed: passed_per_iteration,
            failed: self.failed / iterations,
            pass_rate,
            avg_time_us,
            ops_per_second,
            peak_memory_mb: round(memory.peak_kb as f64 / 1024.0, 2),
            memory_delta_mb: round(memory.delta_kb() as f64 / 1024.0, 2),
            memory_per_op_bytes,
            passed_indices,
            ..BenchmarkResult::success(version)
        }
    }
}
