//!
//! The isolated worker payload.
//!

use std::path::Path;

use serde::Deserialize;
use serde::Serialize;

use crate::adapters::load_target::LoadTarget;
use crate::config::BenchmarkConfig;
use crate::fixtures::test_case::TestCase;

///
/// Everything an isolated worker needs to measure one implementation.
///
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payload {
    /// The implementation name.
    pub implementation_id: String,
    /// The evaluator load target.
    pub load_target: LoadTarget,
    /// The fixture set.
    pub tests: Vec<TestCase>,
    /// The iteration settings.
    #[serde(flatten)]
    pub config: BenchmarkConfig,
}

impl Payload {
    /// The payload file name in the worker directory.
    pub const FILE_NAME: &'static str = "payload.json";

    ///
    /// A shortcut constructor.
    ///
    pub fn new(
        implementation_id: String,
        load_target: LoadTarget,
        tests: Vec<TestCase>,
        config: BenchmarkConfig,
    ) -> Self {
        Self {
            implementation_id,
            load_target,
            tests,
            config,
        }
    }

    ///
    /// Writes the payload to the file.
    ///
    pub fn write(&self, path: &Path) -> anyhow::Result<()> {
        let content = serde_json::to_vec(self)?;
        std::fs::write(path, content)
            .map_err(|error| anyhow::anyhow!("Payload file {path:?} writing: {error}"))
    }
}

impl TryFrom<&Path> for Payload {
    type Error = anyhow::Error;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let text = std::fs::read_to_string(path)
            .map_err(|error| anyhow::anyhow!("Payload file {path:?} reading: {error}"))?;
        let payload: Self = serde_json::from_str(text.as_str())
            .map_err(|error| anyhow::anyhow!("Payload file {path:?} parsing: {error}"))?;
        Ok(payload)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::Payload;
    use crate::adapters::load_target::LoadTarget;
    use crate::adapters::strategy::Strategy;
    use crate::config::BenchmarkConfig;
    use crate::fixtures::test_case::TestCase;

    #[test]
    fn wire_format() {
        let payload = Payload::new(
            "reference".to_owned(),
            LoadTarget::new("node".to_owned(), vec!["driver.js".to_owned()], Strategy::Persistent),
            vec![TestCase::new(json!("X"), json!({}), json!(42))],
            BenchmarkConfig::default(),
        );
        let value = serde_json::to_value(&payload).expect("Always valid");
        assert_eq!(
            value,
            json!({
                "implementationId": "reference",
                "loadTarget": {"executable": "node", "arguments": ["driver.js"], "strategy": "persistent"},
                "tests": [{"rule": "X", "data": {}, "result": 42}],
                "warmupIterations": 2,
                "benchmarkIterations": 5,
                "reportPassedIndices": false
            })
        );

        let directory = tempfile::tempdir().expect("Always valid");
        let path = directory.path().join(Payload::FILE_NAME);
        payload.write(path.as_path()).expect("Always valid");
        assert_eq!(Payload::try_from(path.as_path()).expect("Always valid"), payload);
    }
}
