//!
//! The resident memory collectors.
//!

use std::process::Command;

///
/// The resident set size sampler.
///
pub trait MemoryCollector {
    ///
    /// The resident set size of the process, in kilobytes.
    ///
    fn resident_kb(&self, pid: u32) -> anyhow::Result<u64>;
}

///
/// The Linux collector reading `/proc/<pid>/status`.
///
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcStatus;

impl ProcStatus {
    ///
    /// Extracts the `VmRSS` value from the status text.
    ///
    pub fn parse(status: &str) -> Option<u64> {
        status
            .lines()
            .find_map(|line| line.strip_prefix("VmRSS:"))
            .and_then(|value| value.split_whitespace().next())
            .and_then(|value| value.parse().ok())
    }
}

impl MemoryCollector for ProcStatus {
    fn resident_kb(&self, pid: u32) -> anyhow::Result<u64> {
        let path = format!("/proc/{pid}/status");
        let status = std::fs::read_to_string(path.as_str())
            .map_err(|error| anyhow::anyhow!("{path} reading: {error}"))?;
        Self::parse(status.as_str()).ok_or_else(|| anyhow::anyhow!("{path} has no VmRSS entry"))
    }
}

///
/// The portable collector running `ps`.
///
#[derive(Debug, Default, Clone, Copy)]
pub struct Ps;

impl MemoryCollector for Ps {
    fn resident_kb(&self, pid: u32) -> anyhow::Result<u64> {
        let output = Command::new("ps")
            .args(["-o", "rss=", "-p"])
            .arg(pid.to_string())
            .output()
            .map_err(|error| anyhow::anyhow!("ps subprocess error: {error}"))?;
        if !output.status.success() {
            anyhow::bail!("ps exited with {}", output.status);
        }
        let stdout = String::from_utf8_lossy(output.stdout.as_slice());
        stdout
            .trim()
            .parse()
            .map_err(|error| anyhow::anyhow!("ps output `{}` parsing: {error}", stdout.trim()))
    }
}

///
/// The collector suitable for the host platform.
///
pub fn host() -> &'static dyn MemoryCollector {
    if cfg!(target_os = "linux") {
        &ProcStatus
    } else {
        &Ps
    }
}

#[cfg(test)]
mod tests {
    use super::MemoryCollector;
    use super::ProcStatus;

    #[test]
    fn status_parsing() {
        let status = "Name:\tlogic-worker\nVmPeak:\t  20000 kB\nVmRSS:\t    5120 kB\nThreads:\t1\n";
        assert_eq!(ProcStatus::parse(status), Some(5120));
        assert_eq!(ProcStatus::parse("Name:\tkernel\n"), None);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn current_process() {
        let resident = ProcStatus
            .resident_kb(std::process::id())
            .expect("Always readable");
        assert!(resident > 0);
    }
}
