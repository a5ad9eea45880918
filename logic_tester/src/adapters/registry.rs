//!
//! The adapter registry.
//!

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use crate::adapters::descriptor::Descriptor;
use crate::adapters::error::RegistryError;
use crate::adapters::runtime::Runtime;

///
/// The closed, ordered set of candidate implementations.
///
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registry {
    /// The host runtime description.
    #[serde(default)]
    pub runtime: Option<Runtime>,
    /// The candidate implementations in run order.
    pub adapters: Vec<Descriptor>,
}

impl Registry {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(runtime: Option<Runtime>, adapters: Vec<Descriptor>) -> Result<Self, RegistryError> {
        let registry = Self { runtime, adapters };
        registry.validate()?;
        Ok(registry)
    }

    ///
    /// Returns the adapter with the specified name.
    ///
    pub fn get(&self, name: &str) -> Result<&Descriptor, RegistryError> {
        self.adapters
            .iter()
            .find(|descriptor| descriptor.name == name)
            .ok_or_else(|| RegistryError::UnknownAdapter {
                name: name.to_owned(),
                available: self
                    .adapters
                    .iter()
                    .map(|descriptor| descriptor.name.as_str())
                    .collect::<Vec<&str>>()
                    .join(", "),
            })
    }

    ///
    /// Returns the requested adapters in request order, or all of them if none are requested.
    ///
    pub fn select<S>(&self, names: &[S]) -> Result<Vec<&Descriptor>, RegistryError>
    where
        S: AsRef<str>,
    {
        if names.is_empty() {
            return Ok(self.adapters.iter().collect());
        }
        names.iter().map(|name| self.get(name.as_ref())).collect()
    }

    ///
    /// The adapter names in run order.
    ///
    pub fn names(&self) -> Vec<&str> {
        self.adapters
            .iter()
            .map(|descriptor| descriptor.name.as_str())
            .collect()
    }

    ///
    /// Checks name uniqueness and the declared runtime versions.
    ///
    fn validate(&self) -> Result<(), RegistryError> {
        let mut names = HashSet::with_capacity(self.adapters.len());
        for descriptor in self.adapters.iter() {
            if !names.insert(descriptor.name.as_str()) {
                return Err(RegistryError::Duplicate(descriptor.name.clone()));
            }
            if let Some(version) = descriptor.minimum_runtime_version.as_ref() {
                if descriptor.minimum_runtime_version().is_none() {
                    return Err(RegistryError::InvalidVersion {
                        name: descriptor.name.clone(),
                        version: version.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}

impl TryFrom<&Path> for Registry {
    type Error = RegistryError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let text = std::fs::read_to_string(path).map_err(|error| RegistryError::Reading {
            error,
            path: path.to_path_buf(),
        })?;
        let registry: Self =
            serde_json::from_str(text.as_str()).map_err(|error| RegistryError::Parsing {
                error,
                path: path.to_path_buf(),
            })?;
        registry.validate()?;
        Ok(registry)
    }
}
