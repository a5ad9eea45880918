//!
//! The summary document of a whole benchmark run.
//!

use std::collections::BTreeMap;
use std::path::PathBuf;

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use crate::error::Error;
use crate::model::environment::Environment;
use crate::model::result::BenchmarkResult;

///
/// The summary document of a whole benchmark run.
///
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Summary {
    /// The environment description.
    #[serde(flatten)]
    pub environment: Environment,
    /// The time the run finished at.
    pub timestamp: DateTime<Utc>,
    /// The number of test cases in the fixture set.
    pub total_tests: usize,
    /// The results by implementation name.
    pub results: BTreeMap<String, BenchmarkResult>,
}

impl Summary {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(environment: Environment, total_tests: usize) -> Self {
        Self {
            environment,
            timestamp: Utc::now(),
            total_tests,
            results: BTreeMap::new(),
        }
    }

    ///
    /// Records the result of an implementation.
    ///
    pub fn insert(&mut self, name: String, result: BenchmarkResult) {
        self.results.insert(name, result);
    }

    ///
    /// Returns the results in ranking order.
    ///
    pub fn ranked(&self) -> Vec<(&str, &BenchmarkResult)> {
        crate::ranking::rank(self.results.iter())
    }
}

impl TryFrom<PathBuf> for Summary {
    type Error = Error;

    fn try_from(path: PathBuf) -> Result<Self, Self::Error> {
        let text = std::fs::read_to_string(path.as_path()).map_err(|error| Error::Reading {
            error,
            path: path.clone(),
        })?;
        serde_json::from_str(text.as_str()).map_err(|error| Error::Parsing { error, path })
    }
}
