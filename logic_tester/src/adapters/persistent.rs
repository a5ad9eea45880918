//!
//! The long-lived evaluator process.
//!

use std::io::BufRead;
use std::io::BufReader;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::process::Child;
use std::process::ChildStdin;
use std::process::ChildStdout;
use std::process::Stdio;
use std::sync::Arc;
use std::sync::Mutex;
use std::thread::JoinHandle;
use std::time::Duration;

use crate::adapters::error::LoadError;
use crate::adapters::failure::Failure;
use crate::adapters::load_target::LoadTarget;
use crate::adapters::protocol::Request;

///
/// The long-lived evaluator answering one request line per call.
///
/// An evaluator which exits is restarted on the next call.
///
#[derive(Debug)]
pub struct Persistent {
    /// The load target.
    pub target: LoadTarget,
    /// The resolved executable.
    pub executable: PathBuf,
    /// The running evaluator process.
    process: Option<Process>,
    /// The number of exits observed since the last answered request.
    consecutive_exits: usize,
}

impl Persistent {
    /// The number of consecutive exits after which the evaluator is not restarted anymore.
    pub const RESTART_LIMIT: usize = 3;

    ///
    /// Starts the evaluator process and waits for its readiness announcement.
    ///
    pub fn spawn(target: LoadTarget, executable: PathBuf) -> Result<Self, LoadError> {
        let process = Process::spawn(&target, &executable)?;
        Ok(Self {
            target,
            executable,
            process: Some(process),
            consecutive_exits: 0,
        })
    }

    ///
    /// Sends the request and reads the response line.
    ///
    pub fn evaluate(
        &mut self,
        rule: &serde_json::Value,
        data: &serde_json::Value,
    ) -> Result<serde_json::Value, Failure> {
        let mut process = match self.process.take() {
            Some(process) => process,
            None if self.consecutive_exits >= Self::RESTART_LIMIT => {
                return Err(Failure::new(
                    Failure::EVALUATOR_EXITED,
                    format!(
                        "evaluator exited {} times in a row and is not restarted",
                        self.consecutive_exits
                    ),
                ))
            }
            None => {
                tracing::debug!(executable = ?self.executable, "Restarting the evaluator");
                match Process::spawn(&self.target, &self.executable) {
                    Ok(process) => process,
                    Err(error) => {
                        self.consecutive_exits += 1;
                        return Err(Failure::new(Failure::EVALUATOR_EXITED, error));
                    }
                }
            }
        };

        let request = Request::new(rule, data).encode();
        match process.exchange(request.as_str()) {
            Ok(Some(line)) => {
                self.consecutive_exits = 0;
                self.process = Some(process);
                crate::adapters::protocol::decode(line.as_str())
            }
            Ok(None) | Err(_) => {
                self.consecutive_exits += 1;
                Err(Failure::new(
                    Failure::EVALUATOR_EXITED,
                    process.exit_description(),
                ))
            }
        }
    }

    ///
    /// The evaluator process identifier, or `None` while the evaluator is not running.
    ///
    pub fn pid(&self) -> Option<u32> {
        self.process.as_ref().map(|process| process.child.id())
    }
}

///
/// The running evaluator process.
///
#[derive(Debug)]
struct Process {
    /// The child process.
    child: Child,
    /// The request stream.
    stdin: ChildStdin,
    /// The response stream.
    stdout: BufReader<ChildStdout>,
    /// The last non-empty line the evaluator wrote to its standard error.
    stderr_tail: Arc<Mutex<Option<String>>>,
    /// The standard error reading thread.
    stderr_reader: JoinHandle<()>,
}

impl Process {
    /// The time an evaluator which closed its output is given to exit.
    const EXIT_GRACE_PERIOD: Duration = Duration::from_millis(500);

    /// The exit polling interval.
    const EXIT_POLL_INTERVAL: Duration = Duration::from_millis(10);

    ///
    /// Starts the evaluator with piped standard streams and reads its readiness announcement.
    ///
    fn spawn(target: &LoadTarget, executable: &Path) -> Result<Self, LoadError> {
        let mut child = target
            .command(executable)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|error| LoadError::Spawning {
                executable: executable.to_owned(),
                error,
            })?;
        let stream = |stream: &'static str| LoadError::Stream {
            executable: executable.to_owned(),
            stream,
        };
        let stdin = child.stdin.take().ok_or_else(|| stream("stdin"))?;
        let stdout = child.stdout.take().ok_or_else(|| stream("stdout"))?;
        let stderr = child.stderr.take().ok_or_else(|| stream("stderr"))?;

        let stderr_tail = Arc::new(Mutex::new(None));
        let tail = stderr_tail.clone();
        let stderr_reader = std::thread::spawn(move || {
            for line in BufReader::new(stderr).lines().map_while(Result::ok) {
                tracing::debug!(target: "evaluator", "{line}");
                if !line.trim().is_empty() {
                    *tail.lock().expect("Sync") = Some(line);
                }
            }
        });

        tracing::debug!(pid = child.id(), ?executable, "Evaluator started");
        let mut process = Self {
            child,
            stdin,
            stdout: BufReader::new(stdout),
            stderr_tail,
            stderr_reader,
        };

        let mut line = String::new();
        match process.stdout.read_line(&mut line) {
            Ok(0) | Err(_) => Err(LoadError::Exited {
                executable: executable.to_owned(),
                description: process.exit_description(),
            }),
            Ok(_) if crate::adapters::protocol::is_ready(line.as_str()) => {
                tracing::debug!(pid = process.child.id(), "Evaluator ready");
                Ok(process)
            }
            Ok(_) => Err(LoadError::Handshake {
                executable: executable.to_owned(),
                line: benchmark_analyzer::util::truncate(line.trim(), 100),
            }),
        }
    }

    ///
    /// Writes the request line and reads one response line, or `None` at the end of output.
    ///
    fn exchange(&mut self, request: &str) -> std::io::Result<Option<String>> {
        self.stdin.write_all(request.as_bytes())?;
        self.stdin.flush()?;

        let mut line = String::new();
        if self.stdout.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    ///
    /// Describes why the evaluator stopped answering.
    ///
    fn exit_description(&mut self) -> String {
        let mut waited = Duration::ZERO;
        let status = loop {
            match self.child.try_wait() {
                Ok(Some(status)) => break Some(status),
                Ok(None) if waited < Self::EXIT_GRACE_PERIOD => {
                    std::thread::sleep(Self::EXIT_POLL_INTERVAL);
                    waited += Self::EXIT_POLL_INTERVAL;
                }
                Ok(None) | Err(_) => break None,
            }
        };

        if status.is_some() {
            while !self.stderr_reader.is_finished() && waited < Self::EXIT_GRACE_PERIOD {
                std::thread::sleep(Self::EXIT_POLL_INTERVAL);
                waited += Self::EXIT_POLL_INTERVAL;
            }
        }

        let mut description = match status {
            Some(status) => format!("evaluator exited with {status}"),
            None => "evaluator closed its output".to_owned(),
        };
        if let Some(line) = self.stderr_tail.lock().expect("Sync").as_deref() {
            description.push_str(": ");
            description.push_str(line);
        }
        description
    }
}

impl Drop for Process {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}
