//!
//! The comparison of one implementation across two runs.
//!

use colored::Colorize;

use crate::model::result::BenchmarkResult;

///
/// The comparison of one implementation across two runs.
///
#[derive(Debug, Clone, PartialEq)]
pub struct Element<'a> {
    /// The implementation name.
    pub name: &'a str,
    /// The reference run result.
    pub reference: &'a BenchmarkResult,
    /// The candidate run result.
    pub candidate: &'a BenchmarkResult,
}

impl<'a> Element<'a> {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(
        name: &'a str,
        reference: &'a BenchmarkResult,
        candidate: &'a BenchmarkResult,
    ) -> Self {
        Self {
            name,
            reference,
            candidate,
        }
    }

    ///
    /// The pass rate difference, in percentage points.
    ///
    pub fn pass_rate_delta(&self) -> f64 {
        crate::util::round(self.candidate.pass_rate - self.reference.pass_rate, 2)
    }

    ///
    /// The candidate-to-reference throughput ratio.
    ///
    pub fn throughput_factor(&self) -> Option<f64> {
        Self::factor(self.candidate.ops_per_second, self.reference.ops_per_second)
    }

    ///
    /// The candidate-to-reference peak memory ratio.
    ///
    pub fn peak_memory_factor(&self) -> Option<f64> {
        Self::factor(self.candidate.peak_memory_mb, self.reference.peak_memory_mb)
    }

    ///
    /// Prints the element.
    ///
    pub fn print(&self) -> String {
        let delta = self.pass_rate_delta();
        let delta = match delta.total_cmp(&0.0) {
            std::cmp::Ordering::Greater => format!("{delta:+}").green(),
            std::cmp::Ordering::Less => format!("{delta:+}").bright_red(),
            std::cmp::Ordering::Equal => format!("{delta:+}").bright_white(),
        };
        let throughput = match self.throughput_factor() {
            Some(factor) if factor > 1.0 => format!("x{factor:.3}").green(),
            Some(factor) if factor < 1.0 => format!("x{factor:.3}").bright_red(),
            Some(factor) => format!("x{factor:.3}").bright_white(),
            None => "n/a".bright_black(),
        };
        let memory = match self.peak_memory_factor() {
            Some(factor) if factor < 1.0 => format!("x{factor:.3}").green(),
            Some(factor) if factor > 1.0 => format!("x{factor:.3}").bright_red(),
            Some(factor) => format!("x{factor:.3}").bright_white(),
            None => "n/a".bright_black(),
        };

        format!(
            "{:24} pass rate {:>7}% -> {:>7}% ({delta}), ops/sec {throughput}, peak memory {memory}",
            self.name, self.reference.pass_rate, self.candidate.pass_rate,
        )
    }

    ///
    /// The ratio of two positive measurements.
    ///
    fn factor(candidate: f64, reference: f64) -> Option<f64> {
        if reference > 0.0 {
            Some(candidate / reference)
        } else {
            None
        }
    }
}
