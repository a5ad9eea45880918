//!
//! The evaluator call strategy.
//!

use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

///
/// The way rule evaluations reach an implementation.
///
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// A long-lived evaluator process answering one request line per call.
    #[default]
    Persistent,
    /// A fresh evaluator process per call.
    PerCall,
}

impl FromStr for Strategy {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string {
            "persistent" => Ok(Self::Persistent),
            "per-call" => Ok(Self::PerCall),
            string => anyhow::bail!(
                "Unknown call strategy `{string}`. Supported strategies: {}",
                vec![Self::Persistent, Self::PerCall]
                    .into_iter()
                    .map(|element| element.to_string())
                    .collect::<Vec<String>>()
                    .join(", ")
            ),
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Persistent => write!(f, "persistent"),
            Self::PerCall => write!(f, "per-call"),
        }
    }
}
