//!
//! The adapter descriptor.
//!

use serde::Deserialize;
use serde::Serialize;

use crate::adapters::load_target::LoadTarget;

///
/// One candidate implementation.
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Descriptor {
    /// The unique implementation name.
    pub name: String,
    /// The evaluator load target.
    #[serde(flatten)]
    pub load_target: LoadTarget,
    /// The minimal host runtime version the implementation supports.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum_runtime_version: Option<String>,
}

impl Descriptor {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(name: String, load_target: LoadTarget) -> Self {
        Self {
            name,
            load_target,
            minimum_runtime_version: None,
        }
    }

    ///
    /// The parsed minimal runtime version.
    ///
    pub fn minimum_runtime_version(&self) -> Option<semver::Version> {
        self.minimum_runtime_version
            .as_deref()
            .and_then(crate::adapters::runtime::parse_version)
    }
}
