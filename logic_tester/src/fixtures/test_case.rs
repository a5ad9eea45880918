//!
//! The rule evaluation test case.
//!

use serde::Deserialize;
use serde::Serialize;

///
/// The rule evaluation test case.
///
/// Fixture entries may carry extra keys such as descriptions, which are ignored.
///
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestCase {
    /// The rule expression.
    pub rule: serde_json::Value,
    /// The data the rule is evaluated against.
    #[serde(default)]
    pub data: serde_json::Value,
    /// The expected result, where absent means `null`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<serde_json::Value>,
    /// The expected error descriptor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<serde_json::Value>,
}

impl TestCase {
    ///
    /// A shortcut constructor for a case expecting a result.
    ///
    pub fn new(rule: serde_json::Value, data: serde_json::Value, result: serde_json::Value) -> Self {
        Self {
            rule,
            data,
            result: Some(result),
            error: None,
        }
    }

    ///
    /// A shortcut constructor for a case expecting an error.
    ///
    pub fn new_failing(
        rule: serde_json::Value,
        data: serde_json::Value,
        error: serde_json::Value,
    ) -> Self {
        Self {
            rule,
            data,
            result: None,
            error: Some(error),
        }
    }

    ///
    /// The expected result.
    ///
    pub fn expected_result(&self) -> &serde_json::Value {
        self.result.as_ref().unwrap_or(&serde_json::Value::Null)
    }

    ///
    /// The expected error, if the case expects the evaluation to fail.
    ///
    pub fn expected_error(&self) -> Option<ExpectedError> {
        match self.error.as_ref() {
            None | Some(serde_json::Value::Null) => None,
            Some(descriptor) => Some(ExpectedError::from(descriptor)),
        }
    }
}

///
/// The expected error descriptor.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpectedError {
    /// The free-form error classification.
    pub kind: Option<String>,
}

impl From<&serde_json::Value> for ExpectedError {
    fn from(descriptor: &serde_json::Value) -> Self {
        let kind = match descriptor.get("type") {
            None | Some(serde_json::Value::Null) => None,
            Some(serde_json::Value::String(kind)) => Some(kind.to_owned()),
            Some(kind) => Some(kind.to_string()),
        };
        Self { kind }
    }
}
