//!
//! The evaluator line protocol.
//!
//! An evaluator announces it has loaded its implementation with the `{"ready": true}` line
//! before reading any request. Every request is a single JSON line `{"rule": ..., "data": ...}`,
//! answered by a single JSON line `{"result": ...}` or `{"error": {"type": ..., "message": ...}}`.
//!

use serde::Serialize;

use crate::adapters::failure::Failure;

///
/// The evaluation request.
///
#[derive(Debug, Serialize)]
pub struct Request<'a> {
    /// The rule expression.
    pub rule: &'a serde_json::Value,
    /// The evaluation data.
    pub data: &'a serde_json::Value,
}

impl<'a> Request<'a> {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(rule: &'a serde_json::Value, data: &'a serde_json::Value) -> Self {
        Self { rule, data }
    }

    ///
    /// Encodes the request as a newline-terminated line.
    ///
    pub fn encode(&self) -> String {
        let mut line = serde_json::to_string(self).expect("Always valid");
        line.push('\n');
        line
    }
}

///
/// Whether the line is the readiness announcement.
///
pub fn is_ready(line: &str) -> bool {
    match serde_json::from_str::<serde_json::Value>(line.trim()) {
        Ok(serde_json::Value::Object(announcement)) => {
            announcement.get("ready") == Some(&serde_json::Value::Bool(true))
        }
        _ => false,
    }
}

///
/// Decodes a response line into the evaluation outcome.
///
pub fn decode(line: &str) -> Result<serde_json::Value, Failure> {
    let line = line.trim();
    let response: serde_json::Value = serde_json::from_str(line).map_err(|error| {
        Failure::new(
            Failure::PROTOCOL_ERROR,
            format!(
                "malformed response `{}`: {error}",
                benchmark_analyzer::util::truncate(line, 100)
            ),
        )
    })?;
    let mut response = match response {
        serde_json::Value::Object(response) => response,
        _ => {
            return Err(Failure::new(
                Failure::PROTOCOL_ERROR,
                format!("response is not an object: {line}"),
            ))
        }
    };

    match response.remove("error") {
        None | Some(serde_json::Value::Null) => {}
        Some(error) => return Err(failure(error)),
    }
    response.remove("result").ok_or_else(|| {
        Failure::new(
            Failure::PROTOCOL_ERROR,
            format!("response has neither a result nor an error: {line}"),
        )
    })
}

///
/// Converts a reported error into a failure.
///
fn failure(error: serde_json::Value) -> Failure {
    match error {
        serde_json::Value::String(message) => Failure::new(Failure::GENERIC, message),
        serde_json::Value::Object(mut error) => {
            let category = ["type", "name"]
                .into_iter()
                .find_map(|key| match error.remove(key) {
                    Some(serde_json::Value::String(category)) => Some(category),
                    _ => None,
                })
                .unwrap_or_else(|| Failure::GENERIC.to_owned());
            let message = match error.remove("message") {
                Some(serde_json::Value::String(message)) => message,
                Some(message) => message.to_string(),
                None => String::new(),
            };
            Failure::new(category, message)
        }
        error => Failure::new(Failure::GENERIC, error.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::Request;
    use crate::adapters::failure::Failure;

    #[test]
    fn request_is_one_line() {
        let rule = json!({"cat": ["a\nb"]});
        let data = json!({});
        assert_eq!(
            Request::new(&rule, &data).encode(),
            "{\"rule\":{\"cat\":[\"a\\nb\"]},\"data\":{}}\n"
        );
    }

    #[test]
    fn readiness() {
        assert!(super::is_ready("{\"ready\": true}\n"));
        assert!(super::is_ready(r#"{"ready":true,"version":"2.7.0"}"#));
        assert!(!super::is_ready(r#"{"ready": false}"#));
        assert!(!super::is_ready(r#"{"result": 42}"#));
        assert!(!super::is_ready("LoadError: cannot load such file -- json_logic"));
        assert!(!super::is_ready(""));
    }

    #[test]
    fn results() {
        assert_eq!(super::decode(r#"{"result": 42}"#), Ok(json!(42)));
        assert_eq!(super::decode("{\"result\": null}\n"), Ok(json!(null)));
        assert_eq!(
            super::decode(r#"{"result": [1, 2], "error": null}"#),
            Ok(json!([1, 2]))
        );
    }

    #[test]
    fn errors() {
        assert_eq!(
            super::decode(r#"{"error": {"type": "TypeError", "message": "bad operand"}}"#),
            Err(Failure::new("TypeError", "bad operand"))
        );
        assert_eq!(
            super::decode(r#"{"error": {"name": "RangeError", "message": "too deep"}}"#),
            Err(Failure::new("RangeError", "too deep"))
        );
        assert_eq!(
            super::decode(r#"{"error": "NaN"}"#),
            Err(Failure::new(Failure::GENERIC, "NaN"))
        );
    }

    #[test]
    fn protocol_violations() {
        for line in ["", "42", "{\"value\": 1}", "not json"] {
            let failure = super::decode(line).expect_err("Always invalid");
            assert_eq!(failure.category, Failure::PROTOCOL_ERROR, "{line}");
        }
    }
}
