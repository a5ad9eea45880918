//!
//! The benchmark result status.
//!

///
/// The benchmark result status.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// The implementation was measured.
    Success,
    /// The host runtime is older than the implementation requires.
    Incompatible,
    /// The implementation could not be loaded or the worker failed.
    Error,
}

impl Status {
    ///
    /// Whether the result carries measurements.
    ///
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}

impl std::str::FromStr for Status {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string {
            "success" => Ok(Self::Success),
            "incompatible" => Ok(Self::Incompatible),
            "error" => Ok(Self::Error),
            string => anyhow::bail!(
                "Unknown status `{}`. Supported statuses: {}",
                string,
                vec![Self::Success, Self::Incompatible, Self::Error]
                    .into_iter()
                    .map(|element| element.to_string())
                    .collect::<Vec<String>>()
                    .join(", ")
            ),
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::Incompatible => write!(f, "incompatible"),
            Self::Error => write!(f, "error"),
        }
    }
}
