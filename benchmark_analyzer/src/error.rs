//!
//! The benchmark analyzer errors.
//!

use std::path::PathBuf;

///
/// Summary document reading and writing error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Error reading the summary file.
    #[error("Reading summary file {path:?}: {error}")]
    Reading {
        /// The underlying IO error.
        error: std::io::Error,
        /// The path to the summary file.
        path: PathBuf,
    },
    /// Error parsing the summary file.
    #[error("Parsing summary file {path:?}: {error}")]
    Parsing {
        /// The underlying JSON parsing error.
        error: serde_json::Error,
        /// The path to the summary file.
        path: PathBuf,
    },
    /// Error writing an output file.
    #[error("Writing output file {path:?}: {error}")]
    Writing {
        /// The underlying IO error.
        error: std::io::Error,
        /// The path to the output file.
        path: PathBuf,
    },
}
