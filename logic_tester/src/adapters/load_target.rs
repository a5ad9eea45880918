//!
//! The evaluator load target.
//!

use std::path::Path;
use std::path::PathBuf;
use std::process::Command;

use serde::Deserialize;
use serde::Serialize;

use crate::adapters::error::LoadError;
use crate::adapters::strategy::Strategy;

///
/// Everything needed to start an implementation's evaluator.
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadTarget {
    /// The evaluator executable name or path.
    pub executable: String,
    /// The evaluator arguments.
    #[serde(default)]
    pub arguments: Vec<String>,
    /// The call strategy.
    #[serde(default)]
    pub strategy: Strategy,
    /// The arguments making the executable print the implementation version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version_arguments: Option<Vec<String>>,
    /// The evaluator working directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub working_directory: Option<PathBuf>,
}

impl LoadTarget {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(executable: String, arguments: Vec<String>, strategy: Strategy) -> Self {
        Self {
            executable,
            arguments,
            strategy,
            version_arguments: None,
            working_directory: None,
        }
    }

    ///
    /// Returns a copy with the working directory made absolute against `base`.
    ///
    pub fn anchored(&self, base: &Path) -> Self {
        let working_directory = match self.working_directory.as_ref() {
            Some(directory) => base.join(directory),
            None => base.to_path_buf(),
        };
        Self {
            working_directory: Some(working_directory),
            ..self.clone()
        }
    }

    ///
    /// Resolves the executable against `PATH` and the working directory.
    ///
    pub fn resolve_executable(&self) -> Result<PathBuf, LoadError> {
        let working_directory = match self.working_directory.as_ref() {
            Some(directory) => directory.to_owned(),
            None => std::env::current_dir().unwrap_or_default(),
        };
        which::which_in(
            self.executable.as_str(),
            std::env::var_os("PATH"),
            working_directory,
        )
        .map_err(|error| LoadError::ExecutableNotFound {
            executable: self.executable.clone(),
            error,
        })
    }

    ///
    /// The evaluator command with its arguments and working directory.
    ///
    pub fn command(&self, executable: &Path) -> Command {
        let mut command = Command::new(executable);
        command.args(self.arguments.iter());
        if let Some(directory) = self.working_directory.as_ref() {
            command.current_dir(directory);
        }
        command
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;
    use std::path::PathBuf;

    use super::LoadTarget;
    use crate::adapters::error::LoadError;
    use crate::adapters::strategy::Strategy;

    #[test]
    fn camel_case_fields() {
        let target: LoadTarget = serde_json::from_str(
            r#"{"executable":"node","arguments":["driver.js"],"strategy":"per-call","versionArguments":["driver.js","--version"]}"#,
        )
        .expect("Always valid");
        assert_eq!(target.strategy, Strategy::PerCall);
        assert_eq!(
            target.version_arguments,
            Some(vec!["driver.js".to_owned(), "--version".to_owned()])
        );
        assert!(target.working_directory.is_none());
    }

    #[test]
    fn anchoring() {
        let mut target = LoadTarget::new("node".to_owned(), vec![], Strategy::Persistent);
        assert_eq!(
            target.anchored(Path::new("/work")).working_directory,
            Some(PathBuf::from("/work"))
        );
        target.working_directory = Some(PathBuf::from("drivers"));
        assert_eq!(
            target.anchored(Path::new("/work")).working_directory,
            Some(PathBuf::from("/work/drivers"))
        );
        target.working_directory = Some(PathBuf::from("/opt/drivers"));
        assert_eq!(
            target.anchored(Path::new("/work")).working_directory,
            Some(PathBuf::from("/opt/drivers"))
        );
    }

    #[test]
    fn missing_executable() {
        let target = LoadTarget::new(
            "definitely-not-an-evaluator-executable".to_owned(),
            vec![],
            Strategy::Persistent,
        );
        assert!(matches!(
            target.resolve_executable(),
            Err(LoadError::ExecutableNotFound { .. })
        ));
    }
}
