//!
//! Serializing the benchmark summary to JSON.
//!

use crate::model::summary::Summary;

///
/// The pretty-printed summary document.
///
#[derive(Debug, Default)]
pub struct Json {
    /// The JSON string.
    pub content: String,
}

impl From<&Summary> for Json {
    fn from(summary: &Summary) -> Self {
        Self {
            content: serde_json::to_string_pretty(summary).expect("Always valid"),
        }
    }
}
