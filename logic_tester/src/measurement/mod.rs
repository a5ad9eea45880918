//!
//! The measurement loop run inside the isolated worker.
//!

pub mod memory;
pub mod tally;

use std::time::Instant;

use benchmark_analyzer::BenchmarkResult;

use crate::adapters::invoker::Invoker;
use crate::adapters::Evaluate;
use crate::config::BenchmarkConfig;
use crate::fixtures::test_case::TestCase;
use crate::payload::Payload;

use self::memory::MemoryCollector;
use self::tally::MemoryTrack;
use self::tally::Tally;

///
/// The measurement phase.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Making the implementation available.
    Loading,
    /// The untimed passes.
    Warming,
    /// The untimed pass collecting the passing fixture indices.
    IndexProbing,
    /// The timed passes.
    Benchmarking,
    /// Converting the counters into the result.
    Reporting,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Loading => write!(f, "loading"),
            Self::Warming => write!(f, "warming"),
            Self::IndexProbing => write!(f, "index probing"),
            Self::Benchmarking => write!(f, "benchmarking"),
            Self::Reporting => write!(f, "reporting"),
        }
    }
}

///
/// Loads the implementation described by the payload and measures it.
///
/// Never fails: a load failure becomes an error result.
///
pub fn run(payload: &Payload, collector: &dyn MemoryCollector) -> BenchmarkResult {
    if let Err(error) = payload.config.validate() {
        return BenchmarkResult::error(error);
    }

    tracing::debug!(
        implementation = payload.implementation_id.as_str(),
        phase = %Phase::Loading,
        "Entering"
    );
    let invoker = match Invoker::load(&payload.load_target) {
        Ok(invoker) => invoker,
        Err(error) => return BenchmarkResult::error(error),
    };
    Measurement::new(invoker, collector, payload.tests.as_slice(), payload.config).run()
}

///
/// The measurement of one loaded implementation.
///
pub struct Measurement<'a, E>
where
    E: Evaluate,
{
    /// The loaded implementation.
    evaluator: E,
    /// The resident memory sampler.
    collector: &'a dyn MemoryCollector,
    /// The fixture set.
    tests: &'a [TestCase],
    /// The iteration settings.
    config: BenchmarkConfig,
}

impl<'a, E> Measurement<'a, E>
where
    E: Evaluate,
{
    ///
    /// A shortcut constructor.
    ///
    pub fn new(
        evaluator: E,
        collector: &'a dyn MemoryCollector,
        tests: &'a [TestCase],
        config: BenchmarkConfig,
    ) -> Self {
        Self {
            evaluator,
            collector,
            tests,
            config,
        }
    }

    ///
    /// Runs the phases following a successful load.
    ///
    pub fn run(mut self) -> BenchmarkResult {
        if let Err(error) = self.config.validate() {
            return BenchmarkResult::error(error);
        }
        let version = self.evaluator.version();

        Self::enter(Phase::Warming);
        self.warm_up();

        let passed_indices = if self.config.report_passed_indices {
            Self::enter(Phase::IndexProbing);
            Some(self.probe())
        } else {
            None
        };

        Self::enter(Phase::Benchmarking);
        let (tally, memory) = self.benchmark();

        Self::enter(Phase::Reporting);
        tally.into_result(
            version,
            self.config.benchmark_iterations,
            memory,
            passed_indices,
        )
    }

    ///
    /// Evaluates every case the configured number of times, ignoring the outcomes.
    ///
    fn warm_up(&mut self) {
        for _ in 0..self.config.warmup_iterations {
            for case in self.tests.iter() {
                let _ = self.evaluator.evaluate(&case.rule, &case.data);
            }
        }
    }

    ///
    /// Evaluates every case once and returns the indices of the passing ones.
    ///
    fn probe(&mut self) -> Vec<usize> {
        let mut indices = Vec::with_capacity(self.tests.len());
        for (index, case) in self.tests.iter().enumerate() {
            let outcome = self.evaluator.evaluate(&case.rule, &case.data);
            if crate::oracle::passes_probe(case, &outcome) {
                indices.push(index);
            }
        }
        indices
    }

    ///
    /// Runs the timed passes.
    ///
    fn benchmark(&mut self) -> (Tally, MemoryTrack) {
        let mut tally = Tally::default();
        let mut memory = MemoryTrack::default();
        memory.observe(self.sample());

        for _ in 0..self.config.benchmark_iterations {
            for case in self.tests.iter() {
                let start = Instant::now();
                let outcome = self.evaluator.evaluate(&case.rule, &case.data);
                let elapsed = start.elapsed();

                if crate::oracle::passes(case, &outcome) {
                    tally.pass(elapsed);
                } else {
                    tally.fail();
                }
                memory.observe(self.sample());
            }
        }

        memory.observe(self.sample());
        (tally, memory)
    }

    ///
    /// Samples the resident memory of the implementation.
    ///
    /// Returns `None` while the implementation process is not running or the sample fails.
    ///
    fn sample(&self) -> Option<u64> {
        let pid = self.evaluator.memory_pid()?;
        match self.collector.resident_kb(pid) {
            Ok(resident_kb) => Some(resident_kb),
            Err(error) => {
                tracing::trace!(pid, %error, "Memory sampling failed");
                None
            }
        }
    }

    ///
    /// Logs the phase transition.
    ///
    fn enter(phase: Phase) {
        tracing::debug!(%phase, "Entering");
    }
}
