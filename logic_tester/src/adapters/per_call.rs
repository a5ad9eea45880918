//!
//! The evaluator process spawned per call.
//!

use std::io::Write;
use std::path::PathBuf;
use std::process::Stdio;

use crate::adapters::error::LoadError;
use crate::adapters::failure::Failure;
use crate::adapters::load_target::LoadTarget;
use crate::adapters::protocol::Request;

///
/// The evaluator started afresh for every request.
///
#[derive(Debug, Clone)]
pub struct PerCall {
    /// The load target.
    pub target: LoadTarget,
    /// The resolved executable.
    pub executable: PathBuf,
}

impl PerCall {
    ///
    /// Starts the evaluator once without a request to check it announces readiness.
    ///
    pub fn load(target: LoadTarget, executable: PathBuf) -> Result<Self, LoadError> {
        let output = target
            .command(executable.as_path())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|error| LoadError::Spawning {
                executable: executable.clone(),
                error,
            })?;

        let stdout = String::from_utf8_lossy(output.stdout.as_slice());
        match stdout.lines().find(|line| !line.trim().is_empty()) {
            Some(line) if crate::adapters::protocol::is_ready(line) => {
                Ok(Self { target, executable })
            }
            Some(line) => Err(LoadError::Handshake {
                executable,
                line: benchmark_analyzer::util::truncate(line.trim(), 100),
            }),
            None => {
                let stderr = String::from_utf8_lossy(output.stderr.as_slice());
                let mut description = format!("evaluator exited with {}", output.status);
                if let Some(line) = stderr.lines().rev().find(|line| !line.trim().is_empty()) {
                    description.push_str(": ");
                    description.push_str(line.trim());
                }
                Err(LoadError::Exited {
                    executable,
                    description,
                })
            }
        }
    }

    ///
    /// Runs the evaluator with the single request and reads the response line following
    /// its readiness announcement.
    ///
    pub fn evaluate(
        &self,
        rule: &serde_json::Value,
        data: &serde_json::Value,
    ) -> Result<serde_json::Value, Failure> {
        let mut child = self
            .target
            .command(self.executable.as_path())
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|error| {
                Failure::new(
                    Failure::PROCESS_FAILURE,
                    format!("{:?} subprocess spawning error: {error}", self.executable),
                )
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            let request = Request::new(rule, data).encode();
            if let Err(error) = stdin.write_all(request.as_bytes()) {
                tracing::debug!(?error, "The evaluator did not read the request");
            }
        }
        let output = child.wait_with_output().map_err(|error| {
            Failure::new(
                Failure::PROCESS_FAILURE,
                format!("{:?} subprocess output reading error: {error}", self.executable),
            )
        })?;

        let stdout = String::from_utf8_lossy(output.stdout.as_slice());
        let response = stdout
            .lines()
            .filter(|line| !line.trim().is_empty())
            .find(|line| !crate::adapters::protocol::is_ready(line));
        match response {
            Some(line) => crate::adapters::protocol::decode(line),
            None if !output.status.success() => Err(Failure::new(
                Failure::PROCESS_FAILURE,
                format!(
                    "evaluator exited with {}: {}",
                    output.status,
                    String::from_utf8_lossy(output.stderr.as_slice()).trim()
                ),
            )),
            None => Err(Failure::new(
                Failure::PROTOCOL_ERROR,
                "evaluator produced no response",
            )),
        }
    }
}
