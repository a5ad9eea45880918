//!
//! The isolation harness.
//!
//! Every implementation is measured by a fresh worker process in its own temporary
//! directory, so that a crash, global state or a stuck evaluator cannot affect the others.
//!

pub mod process;
pub mod protocol;

use std::path::PathBuf;
use std::process::Command;
use std::time::Duration;

use benchmark_analyzer::BenchmarkResult;

use crate::adapters::descriptor::Descriptor;
use crate::config::BenchmarkConfig;
use crate::fixtures::FixtureSet;
use crate::payload::Payload;

///
/// The isolation harness.
///
#[derive(Debug, Clone)]
pub struct Harness {
    /// The worker executable.
    pub worker: PathBuf,
    /// The host runtime name.
    pub runtime_name: String,
    /// The host runtime version, if known.
    pub runtime_version: Option<semver::Version>,
    /// The time a worker is allowed to run.
    pub timeout: Duration,
    /// The directory relative evaluator paths are resolved against.
    pub working_directory: PathBuf,
}

impl Harness {
    /// The default worker timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(600);

    ///
    /// A shortcut constructor.
    ///
    pub fn new(
        worker: PathBuf,
        runtime_name: String,
        runtime_version: Option<semver::Version>,
        timeout: Duration,
    ) -> anyhow::Result<Self> {
        let working_directory = std::env::current_dir()
            .map_err(|error| anyhow::anyhow!("Current directory getting: {error}"))?;
        Ok(Self {
            worker,
            runtime_name,
            runtime_version,
            timeout,
            working_directory,
        })
    }

    ///
    /// Measures the implementation in an isolated worker.
    ///
    /// Never fails: every problem becomes an incompatible or error result.
    ///
    pub fn benchmark(
        &self,
        descriptor: &Descriptor,
        fixtures: &FixtureSet,
        config: &BenchmarkConfig,
    ) -> BenchmarkResult {
        if let Some(result) = self.check_compatibility(descriptor) {
            return result;
        }

        match self.run_isolated(descriptor, fixtures, config) {
            Ok(result) => result,
            Err(error) => BenchmarkResult::error(error),
        }
    }

    ///
    /// Returns the incompatible result if the host runtime is too old for the implementation.
    ///
    pub fn check_compatibility(&self, descriptor: &Descriptor) -> Option<BenchmarkResult> {
        let minimum = descriptor.minimum_runtime_version()?;
        let host = match self.runtime_version.as_ref() {
            Some(host) => host,
            None => {
                tracing::warn!(
                    adapter = descriptor.name.as_str(),
                    %minimum,
                    "The runtime version is unknown, skipping the compatibility check"
                );
                return None;
            }
        };
        if host >= &minimum {
            return None;
        }

        let minimum = descriptor
            .minimum_runtime_version
            .as_deref()
            .unwrap_or_default();
        Some(BenchmarkResult::incompatible(
            self.runtime_name.as_str(),
            minimum,
        ))
    }

    ///
    /// Runs the worker in a temporary directory and interprets its output.
    ///
    fn run_isolated(
        &self,
        descriptor: &Descriptor,
        fixtures: &FixtureSet,
        config: &BenchmarkConfig,
    ) -> anyhow::Result<BenchmarkResult> {
        let directory = tempfile::Builder::new()
            .prefix("logic-worker-")
            .tempdir()
            .map_err(|error| anyhow::anyhow!("Worker directory creating: {error}"))?;

        let payload = Payload::new(
            descriptor.name.clone(),
            descriptor
                .load_target
                .anchored(self.working_directory.as_path()),
            fixtures.tests().to_vec(),
            *config,
        );
        let payload_path = directory.path().join(Payload::FILE_NAME);
        payload.write(payload_path.as_path())?;

        let mut command = Command::new(self.worker.as_path());
        command
            .arg("--config")
            .arg(payload_path.as_path())
            .current_dir(directory.path());
        tracing::debug!(
            adapter = descriptor.name.as_str(),
            directory = ?directory.path(),
            "Starting the worker"
        );

        let output = self::process::run(command, self.timeout)?;
        if output.timed_out() {
            return Ok(BenchmarkResult::error(format!(
                "Timed out after {:?}",
                self.timeout
            )));
        }
        Ok(self::protocol::interpret(&output))
    }
}

///
/// The worker executable next to the current one, or the one found in `PATH`.
///
pub fn default_worker_path() -> anyhow::Result<PathBuf> {
    let name = format!(
        "{}{}",
        crate::WORKER_EXECUTABLE_NAME,
        std::env::consts::EXE_SUFFIX
    );
    if let Some(sibling) = std::env::current_exe()
        .ok()
        .and_then(|path| path.parent().map(|directory| directory.join(name.as_str())))
        .filter(|path| path.is_file())
    {
        return Ok(sibling);
    }
    which::which(crate::WORKER_EXECUTABLE_NAME).map_err(|error| {
        anyhow::anyhow!(
            "The `{}` executable not found: {error}",
            crate::WORKER_EXECUTABLE_NAME
        )
    })
}
