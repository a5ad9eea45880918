//!
//! The environment the benchmark was run in.
//!

use serde::Deserialize;
use serde::Serialize;

///
/// The environment the benchmark was run in.
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Environment {
    /// The runtime the implementations are hosted by.
    pub language: String,
    /// The runtime version, if it was detected.
    pub language_version: Option<String>,
    /// The host platform.
    pub platform: String,
}

impl Environment {
    ///
    /// Describes the current host.
    ///
    pub fn host(language: String, language_version: Option<String>) -> Self {
        Self {
            language,
            language_version,
            platform: format!("{}-{}", std::env::consts::ARCH, std::env::consts::OS),
        }
    }
}
