//!
//! The fixture suite.
//!

use std::path::Path;

use crate::fixtures::error::Error;
use crate::fixtures::test_case::TestCase;

///
/// The test cases of one fixture file.
///
#[derive(Debug, Clone, PartialEq)]
pub struct Suite {
    /// The suite name derived from the file path.
    pub name: String,
    /// The test cases in file order.
    pub tests: Vec<TestCase>,
}

impl Suite {
    ///
    /// Reads a fixture file located under `root`.
    ///
    /// Entries which are not objects, such as comment strings, are skipped.
    ///
    pub fn read(root: &Path, path: &Path) -> Result<Self, Error> {
        let text = std::fs::read_to_string(path).map_err(|error| Error::Reading {
            error,
            path: path.to_path_buf(),
        })?;
        let entries: Vec<serde_json::Value> =
            serde_json::from_str(text.as_str()).map_err(|error| Error::Parsing {
                error,
                path: path.to_path_buf(),
            })?;

        let mut tests = Vec::with_capacity(entries.len());
        for entry in entries.into_iter().filter(serde_json::Value::is_object) {
            let test: TestCase = serde_json::from_value(entry).map_err(|error| Error::Parsing {
                error,
                path: path.to_path_buf(),
            })?;
            tests.push(test);
        }

        Ok(Self {
            name: Self::name(root, path),
            tests,
        })
    }

    ///
    /// The relative path with separators replaced by underscores and no extension.
    ///
    fn name(root: &Path, path: &Path) -> String {
        let relative = path.strip_prefix(root).unwrap_or(path);
        let name = relative
            .components()
            .map(|component| component.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("_");
        name.strip_suffix(".json")
            .map(str::to_owned)
            .unwrap_or(name)
    }
}
