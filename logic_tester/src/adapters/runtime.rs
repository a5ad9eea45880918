//!
//! The host runtime the implementations are hosted by.
//!

use std::process::Command;

use serde::Deserialize;
use serde::Serialize;

///
/// The host runtime description.
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Runtime {
    /// The runtime name reported in the summary, such as `ruby`.
    pub name: String,
    /// The runtime executable.
    pub executable: String,
    /// The arguments making the executable print its version.
    #[serde(default = "Runtime::default_version_arguments")]
    pub version_arguments: Vec<String>,
}

impl Runtime {
    ///
    /// Detects the runtime version by running its executable.
    ///
    pub fn detect_version(&self) -> anyhow::Result<semver::Version> {
        let executable = which::which(self.executable.as_str()).map_err(|error| {
            anyhow::anyhow!("Runtime executable `{}` not found: {error}", self.executable)
        })?;
        let output = Command::new(executable.as_path())
            .args(self.version_arguments.iter())
            .output()
            .map_err(|error| anyhow::anyhow!("{executable:?} subprocess error: {error}"))?;
        if !output.status.success() {
            anyhow::bail!(
                "{executable:?} version query failed: {}",
                String::from_utf8_lossy(output.stderr.as_slice()).trim()
            );
        }

        let stdout = String::from_utf8_lossy(output.stdout.as_slice());
        let stderr = String::from_utf8_lossy(output.stderr.as_slice());
        parse_version(stdout.as_ref())
            .or_else(|| parse_version(stderr.as_ref()))
            .ok_or_else(|| anyhow::anyhow!("{executable:?} version output has no version"))
    }

    ///
    /// The conventional version flag.
    ///
    fn default_version_arguments() -> Vec<String> {
        vec!["--version".to_owned()]
    }
}

///
/// Extracts the first version number from free-form text.
///
/// Missing minor and patch components are zero, so `2.7` is `2.7.0`.
///
pub fn parse_version(text: &str) -> Option<semver::Version> {
    let regex = regex::Regex::new(r"(\d+)(?:\.(\d+))?(?:\.(\d+))?").expect("Always valid");
    let captures = regex.captures(text)?;
    let component = |index: usize| -> Option<u64> {
        match captures.get(index) {
            Some(component) => component.as_str().parse().ok(),
            None => Some(0),
        }
    };
    Some(semver::Version::new(component(1)?, component(2)?, component(3)?))
}

#[cfg(test)]
mod tests {
    #[test]
    fn lenient_versions() {
        assert_eq!(
            super::parse_version("2.7"),
            Some(semver::Version::new(2, 7, 0))
        );
        assert_eq!(
            super::parse_version("ruby 3.3.0p0 (2023-12-25 revision 5124f9ac75) [x86_64-linux]"),
            Some(semver::Version::new(3, 3, 0))
        );
        assert_eq!(
            super::parse_version("v18.17.1"),
            Some(semver::Version::new(18, 17, 1))
        );
        assert_eq!(super::parse_version("3"), Some(semver::Version::new(3, 0, 0)));
        assert_eq!(super::parse_version("unknown"), None);
    }

    #[test]
    fn ordering() {
        let host = super::parse_version("3.1.4").expect("Always valid");
        assert!(host < super::parse_version("3.2").expect("Always valid"));
        assert!(host >= super::parse_version("2.7").expect("Always valid"));
        assert!(host >= super::parse_version("3.1.4").expect("Always valid"));
    }
}
