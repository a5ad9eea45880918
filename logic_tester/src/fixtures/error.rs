//!
//! The fixture loading error.
//!

use std::path::PathBuf;

///
/// The fixture loading error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The fixtures directory does not exist.
    #[error("Fixtures directory `{path}` not found")]
    DirectoryNotFound {
        /// The directory path.
        path: PathBuf,
    },
    /// The search pattern is invalid.
    #[error("Invalid fixtures pattern: {0}")]
    Pattern(#[from] glob::PatternError),
    /// A fixture file cannot be read.
    #[error("Reading `{path:?}`: {error}")]
    Reading {
        /// The I/O error.
        error: std::io::Error,
        /// The file path.
        path: PathBuf,
    },
    /// A fixture file is not a JSON array.
    #[error("Parsing `{path:?}`: {error}")]
    Parsing {
        /// The parsing error.
        error: serde_json::Error,
        /// The file path.
        path: PathBuf,
    },
}
