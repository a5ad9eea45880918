//!
//! The adapter errors.
//!

use std::path::PathBuf;

///
/// The failure to make an implementation available.
///
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The evaluator executable cannot be found.
    #[error("Evaluator executable `{executable}` not found: {error}")]
    ExecutableNotFound {
        /// The configured executable.
        executable: String,
        /// The lookup error.
        error: which::Error,
    },
    /// The evaluator process cannot be started.
    #[error("Evaluator `{executable:?}` spawning: {error}")]
    Spawning {
        /// The resolved executable.
        executable: PathBuf,
        /// The I/O error.
        error: std::io::Error,
    },
    /// The evaluator process standard streams are unavailable.
    #[error("Evaluator `{executable:?}` {stream} is not available")]
    Stream {
        /// The resolved executable.
        executable: PathBuf,
        /// The stream name.
        stream: &'static str,
    },
    /// The evaluator stopped before announcing it is ready.
    #[error("Evaluator failed to load: {description}")]
    Exited {
        /// The resolved executable.
        executable: PathBuf,
        /// The exit status and the last diagnostic line.
        description: String,
    },
    /// The evaluator answered with something other than the readiness announcement.
    #[error("Evaluator `{executable:?}` did not announce readiness, got `{line}`")]
    Handshake {
        /// The resolved executable.
        executable: PathBuf,
        /// The unexpected first line.
        line: String,
    },
}

///
/// The adapter registry error.
///
/// Every variant halts the whole run.
///
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// The configuration file cannot be read.
    #[error("Reading adapters configuration `{path:?}`: {error}")]
    Reading {
        /// The I/O error.
        error: std::io::Error,
        /// The file path.
        path: PathBuf,
    },
    /// The configuration file is malformed.
    #[error("Parsing adapters configuration `{path:?}`: {error}")]
    Parsing {
        /// The parsing error.
        error: serde_json::Error,
        /// The file path.
        path: PathBuf,
    },
    /// Two adapters share a name.
    #[error("Adapter `{0}` is declared more than once")]
    Duplicate(String),
    /// The minimal runtime version cannot be parsed.
    #[error("Adapter `{name}` has an invalid minimal runtime version `{version}`")]
    InvalidVersion {
        /// The adapter name.
        name: String,
        /// The declared version.
        version: String,
    },
    /// The requested adapter is not declared.
    #[error("Unknown adapter `{name}`. Available adapters: {available}")]
    UnknownAdapter {
        /// The requested name.
        name: String,
        /// The declared names.
        available: String,
    },
}
