//!
//! The correctness oracle.
//!

use crate::adapters::failure::Failure;
use crate::fixtures::test_case::ExpectedError;
use crate::fixtures::test_case::TestCase;

/// The absolute tolerance of floating-point comparisons.
pub const FLOAT_TOLERANCE: f64 = 1e-4;

///
/// Structural equality of an evaluation result and the expected value.
///
/// Floats match within [`FLOAT_TOLERANCE`], arrays are compared positionally and
/// objects by key set regardless of key order.
///
pub fn equal(actual: &serde_json::Value, expected: &serde_json::Value) -> bool {
    use serde_json::Value;

    match (actual, expected) {
        (Value::Number(actual), Value::Number(expected)) if actual.is_f64() && expected.is_f64() => {
            match (actual.as_f64(), expected.as_f64()) {
                (Some(actual), Some(expected)) => (actual - expected).abs() < FLOAT_TOLERANCE,
                _ => false,
            }
        }
        (Value::Number(actual), Value::Number(expected)) => {
            if actual.is_f64() || expected.is_f64() {
                actual.as_f64() == expected.as_f64()
            } else {
                actual == expected
            }
        }
        (Value::Array(actual), Value::Array(expected)) => {
            actual.len() == expected.len()
                && actual
                    .iter()
                    .zip(expected.iter())
                    .all(|(actual, expected)| equal(actual, expected))
        }
        (Value::Object(actual), Value::Object(expected)) => {
            actual.len() == expected.len()
                && expected.iter().all(|(key, expected)| {
                    actual
                        .get(key)
                        .map(|actual| equal(actual, expected))
                        .unwrap_or_default()
                })
        }
        (actual, expected) => actual == expected,
    }
}

///
/// Whether the failure matches the expected error classification.
///
pub fn classify(expected: &ExpectedError, failure: &Failure) -> bool {
    match expected.kind.as_deref() {
        None => true,
        Some(kind) => failure.message.contains(kind) || failure.category.contains(kind),
    }
}

///
/// The benchmark pass criterion.
///
pub fn passes(case: &TestCase, outcome: &Result<serde_json::Value, Failure>) -> bool {
    match (case.expected_error(), outcome) {
        (Some(_), Ok(_)) => false,
        (None, Ok(actual)) => equal(actual, case.expected_result()),
        (Some(expected), Err(failure)) => classify(&expected, failure),
        (None, Err(_)) => false,
    }
}

///
/// The index probing pass criterion.
///
/// Unlike [`passes`], a successful call on a case expecting an error passes if the
/// error is untyped or the returned value is `null`.
///
pub fn passes_probe(case: &TestCase, outcome: &Result<serde_json::Value, Failure>) -> bool {
    match (case.expected_error(), outcome) {
        (Some(expected), Ok(actual)) => expected.kind.is_none() || actual.is_null(),
        _ => passes(case, outcome),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::adapters::failure::Failure;
    use crate::fixtures::test_case::ExpectedError;
    use crate::fixtures::test_case::TestCase;

    #[test]
    fn floats_within_tolerance() {
        assert!(super::equal(&json!(0.30000000000000004), &json!(0.3)));
        assert!(super::equal(&json!(1.00001), &json!(1.0)));
        assert!(!super::equal(&json!(1.001), &json!(1.0)));
        assert!(super::equal(&json!(1.00005), &json!(1.0001)));
        assert!(!super::equal(&json!(1.0), &json!(1.001)));
    }

    #[test]
    fn equality_is_symmetric() {
        let pairs = [
            (json!(1.00005), json!(1.0001)),
            (json!(1.0), json!(1.001)),
            (json!(1), json!(1.0)),
            (json!(1), json!(1.00001)),
            (json!([0.1, {"a": 0.30000000000000004}]), json!([0.1, {"a": 0.3}])),
            (json!({"a": 1, "b": [2]}), json!({"b": [2], "a": 1})),
            (json!("1"), json!(1)),
            (json!(null), json!(false)),
        ];
        for (left, right) in pairs.iter() {
            assert_eq!(
                super::equal(left, right),
                super::equal(right, left),
                "{left} {right}"
            );
        }
    }

    #[test]
    fn integers_and_floats_compare_exactly() {
        assert!(super::equal(&json!(1), &json!(1.0)));
        assert!(super::equal(&json!(1.0), &json!(1)));
        assert!(!super::equal(&json!(1), &json!(1.00001)));
        assert!(!super::equal(&json!(1), &json!(2)));
    }

    #[test]
    fn arrays_are_ordered() {
        assert!(super::equal(&json!([1, 2.00001, "a"]), &json!([1, 2.0, "a"])));
        assert!(!super::equal(&json!([1, 2]), &json!([2, 1])));
        assert!(!super::equal(&json!([1, 2]), &json!([1, 2, 3])));
    }

    #[test]
    fn objects_ignore_key_order() {
        assert!(super::equal(&json!({"a": 1, "b": 2}), &json!({"b": 2, "a": 1})));
        assert!(super::equal(
            &json!({"a": {"x": [0.1]}}),
            &json!({"a": {"x": [0.10000001]}})
        ));
        assert!(!super::equal(&json!({"a": 1}), &json!({"a": 1, "b": null})));
        assert!(!super::equal(&json!({"a": 1, "c": 2}), &json!({"a": 1, "b": 2})));
    }

    #[test]
    fn scalars_are_exact() {
        assert!(super::equal(&json!(null), &json!(null)));
        assert!(!super::equal(&json!("1"), &json!(1)));
        assert!(!super::equal(&json!(false), &json!(null)));
    }

    #[test]
    fn classification() {
        let kind = ExpectedError {
            kind: Some("TypeError".to_owned()),
        };
        assert!(super::classify(
            &kind,
            &Failure::new("TypeError", "invalid operand")
        ));
        assert!(super::classify(
            &kind,
            &Failure::new("Error", "raised TypeError: invalid operand")
        ));
        assert!(!super::classify(
            &kind,
            &Failure::new("ArgumentError", "bad value")
        ));
        assert!(super::classify(
            &ExpectedError { kind: None },
            &Failure::new("Anything", "at all")
        ));
    }

    #[test]
    fn benchmark_and_probe_criteria() {
        let failing = TestCase::new_failing(json!({"+": ["a"]}), json!({}), json!({"type": "NaN"}));
        let untyped = TestCase::new_failing(json!({"+": ["a"]}), json!({}), json!({}));
        let computing = TestCase::new(json!({"+": [1, 2]}), json!({}), json!(3));

        let null = Ok(json!(null));
        let value = Ok(json!(3));
        let nan = Err(Failure::new("NaN", "not a number"));

        assert!(!super::passes(&failing, &null));
        assert!(super::passes_probe(&failing, &null));
        assert!(!super::passes_probe(&failing, &value));
        assert!(super::passes_probe(&untyped, &value));
        assert!(super::passes(&failing, &nan));
        assert!(super::passes_probe(&failing, &nan));

        assert!(super::passes(&computing, &value));
        assert!(!super::passes(&computing, &nan));
        assert!(!super::passes(&computing, &null));
        assert!(super::passes_probe(&computing, &value));
    }
}
