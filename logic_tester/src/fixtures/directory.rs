//!
//! The fixtures directory.
//!

use std::path::Path;
use std::path::PathBuf;

use crate::fixtures::error::Error;
use crate::fixtures::suite::Suite;
use crate::fixtures::FixtureSet;

///
/// The fixture suites found in a directory tree.
///
#[derive(Debug, Default)]
pub struct Directory {
    /// The loaded suites in path order.
    pub suites: Vec<Suite>,
    /// The files which could not be loaded.
    pub rejected: Vec<Error>,
}

impl Directory {
    /// The fixture file pattern relative to the directory.
    pub const PATTERN: &'static str = "**/*.json";

    ///
    /// Loads every fixture file in the directory tree.
    ///
    /// Unreadable or malformed files are collected in `rejected` and do not fail the load.
    ///
    pub fn load(path: &Path) -> Result<Self, Error> {
        if !path.is_dir() {
            return Err(Error::DirectoryNotFound {
                path: path.to_path_buf(),
            });
        }

        let pattern = path.join(Self::PATTERN);
        let mut paths: Vec<PathBuf> = glob::glob(pattern.to_string_lossy().as_ref())?
            .filter_map(Result::ok)
            .filter(|path| path.is_file())
            .collect();
        paths.sort();

        let mut directory = Self::default();
        for file in paths.iter() {
            match Suite::read(path, file.as_path()) {
                Ok(suite) => {
                    tracing::debug!(suite = suite.name.as_str(), tests = suite.tests.len(), "Loaded");
                    directory.suites.push(suite);
                }
                Err(error) => directory.rejected.push(error),
            }
        }
        Ok(directory)
    }

    ///
    /// The number of loaded test cases.
    ///
    pub fn test_count(&self) -> usize {
        self.suites.iter().map(|suite| suite.tests.len()).sum()
    }

    ///
    /// Concatenates the suites in path order.
    ///
    pub fn into_fixture_set(self) -> FixtureSet {
        FixtureSet::new(
            self.suites
                .into_iter()
                .flat_map(|suite| suite.tests.into_iter())
                .collect(),
        )
    }
}
