//!
//! The adapter invoker.
//!

use std::path::Path;
use std::process::Command;
use std::process::Stdio;

use crate::adapters::error::LoadError;
use crate::adapters::failure::Failure;
use crate::adapters::load_target::LoadTarget;
use crate::adapters::per_call::PerCall;
use crate::adapters::persistent::Persistent;
use crate::adapters::strategy::Strategy;
use crate::adapters::Evaluate;

///
/// The uniform entry point to a loaded implementation.
///
#[derive(Debug)]
pub enum Invoker {
    /// The long-lived evaluator.
    Persistent(Persistent),
    /// The evaluator spawned per call.
    PerCall(PerCall),
}

impl Invoker {
    ///
    /// Makes the implementation available for evaluation.
    ///
    pub fn load(target: &LoadTarget) -> Result<Self, LoadError> {
        let executable = target.resolve_executable()?;
        tracing::debug!(?executable, strategy = %target.strategy, "Loading the evaluator");
        match target.strategy {
            Strategy::Persistent => Persistent::spawn(target.to_owned(), executable).map(Self::Persistent),
            Strategy::PerCall => PerCall::load(target.to_owned(), executable).map(Self::PerCall),
        }
    }

    ///
    /// The load target.
    ///
    pub fn target(&self) -> &LoadTarget {
        match self {
            Self::Persistent(inner) => &inner.target,
            Self::PerCall(inner) => &inner.target,
        }
    }

    ///
    /// The resolved executable.
    ///
    pub fn executable(&self) -> &Path {
        match self {
            Self::Persistent(inner) => inner.executable.as_path(),
            Self::PerCall(inner) => inner.executable.as_path(),
        }
    }
}

impl Evaluate for Invoker {
    fn evaluate(
        &mut self,
        rule: &serde_json::Value,
        data: &serde_json::Value,
    ) -> Result<serde_json::Value, Failure> {
        match self {
            Self::Persistent(inner) => inner.evaluate(rule, data),
            Self::PerCall(inner) => inner.evaluate(rule, data),
        }
    }

    fn version(&self) -> String {
        let target = self.target();
        let arguments = match target.version_arguments.as_ref() {
            Some(arguments) => arguments,
            None => return benchmark_analyzer::UNKNOWN_VERSION.to_owned(),
        };

        let mut command = Command::new(self.executable());
        command.args(arguments.iter()).stdin(Stdio::null());
        if let Some(directory) = target.working_directory.as_ref() {
            command.current_dir(directory);
        }
        let output = match command.output() {
            Ok(output) if output.status.success() => output,
            Ok(output) => {
                tracing::debug!(status = %output.status, "Version query failed");
                return benchmark_analyzer::UNKNOWN_VERSION.to_owned();
            }
            Err(error) => {
                tracing::debug!(%error, "Version query failed");
                return benchmark_analyzer::UNKNOWN_VERSION.to_owned();
            }
        };

        String::from_utf8_lossy(output.stdout.as_slice())
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .map(str::to_owned)
            .unwrap_or_else(|| benchmark_analyzer::UNKNOWN_VERSION.to_owned())
    }

    fn memory_pid(&self) -> Option<u32> {
        match self {
            Self::Persistent(inner) => inner.pid(),
            Self::PerCall(_) => Some(std::process::id()),
        }
    }
}
