//!
//! The isolated child process.
//!

use std::io::Read;
use std::process::Child;
use std::process::Command;
use std::process::ExitStatus;
use std::process::Stdio;
use std::time::Duration;
use std::time::Instant;

///
/// The captured output of a finished or killed child process.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOutput {
    /// The exit status, or `None` if the process was killed on timeout.
    pub status: Option<ExitStatus>,
    /// The standard output.
    pub stdout: String,
    /// The standard error.
    pub stderr: String,
}

impl ProcessOutput {
    ///
    /// Whether the process exited successfully.
    ///
    pub fn success(&self) -> bool {
        self.status
            .map(|status| status.success())
            .unwrap_or_default()
    }

    ///
    /// Whether the process was killed on timeout.
    ///
    pub fn timed_out(&self) -> bool {
        self.status.is_none()
    }
}

/// The exit polling interval.
const POLL_INTERVAL: Duration = Duration::from_millis(20);

///
/// Runs the command to completion, killing it once the timeout elapses.
///
/// Both output streams are drained concurrently so that a chatty child cannot block.
/// On Unix the child leads a new process group, and the timeout kills the whole group
/// with the processes the child has started.
///
pub fn run(mut command: Command, timeout: Duration) -> anyhow::Result<ProcessOutput> {
    let program = command.get_program().to_owned();
    #[cfg(unix)]
    {
        use std::os::unix::process::CommandExt;
        command.process_group(0);
    }
    let mut child = command
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|error| anyhow::anyhow!("{program:?} subprocess spawning error: {error}"))?;

    let stdout = child
        .stdout
        .take()
        .ok_or_else(|| anyhow::anyhow!("{program:?} stdout is not available"))?;
    let stderr = child
        .stderr
        .take()
        .ok_or_else(|| anyhow::anyhow!("{program:?} stderr is not available"))?;
    let stdout = std::thread::spawn(move || drain(stdout));
    let stderr = std::thread::spawn(move || drain(stderr));

    let started = Instant::now();
    let status = loop {
        if let Some(status) = child.try_wait()? {
            break Some(status);
        }
        if started.elapsed() >= timeout {
            tracing::warn!(?program, ?timeout, "Killing the timed out subprocess");
            kill_group(&mut child);
            child.wait()?;
            break None;
        }
        std::thread::sleep(POLL_INTERVAL);
    };

    let stdout = stdout
        .join()
        .map_err(|_| anyhow::anyhow!("{program:?} stdout reader panicked"))??;
    let stderr = stderr
        .join()
        .map_err(|_| anyhow::anyhow!("{program:?} stderr reader panicked"))??;
    Ok(ProcessOutput {
        status,
        stdout,
        stderr,
    })
}

///
/// Kills the child and its process group.
///
#[cfg(unix)]
fn kill_group(child: &mut Child) {
    let group = child.id() as libc::pid_t;
    // SAFETY: `killpg` only sends a signal, the group identifier is the child's own pid.
    if unsafe { libc::killpg(group, libc::SIGKILL) } != 0 {
        tracing::debug!(error = %std::io::Error::last_os_error(), "Killing the process group failed");
        let _ = child.kill();
    }
}

///
/// Kills the child.
///
#[cfg(not(unix))]
fn kill_group(child: &mut Child) {
    let _ = child.kill();
}

///
/// Reads the stream to the end, replacing invalid UTF-8.
///
fn drain<R>(mut stream: R) -> std::io::Result<String>
where
    R: Read,
{
    let mut buffer = Vec::new();
    stream.read_to_end(&mut buffer)?;
    Ok(String::from_utf8_lossy(buffer.as_slice()).into_owned())
}
