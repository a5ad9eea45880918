//!
//! The isolated worker end-to-end tests.
//!

#![cfg(unix)]

use std::os::unix::fs::PermissionsExt;
use std::path::Path;
use std::path::PathBuf;
use std::time::Duration;

use benchmark_analyzer::BenchmarkResult;
use benchmark_analyzer::Status;
use serde_json::json;

use logic_tester::AdapterDescriptor;
use logic_tester::BenchmarkConfig;
use logic_tester::CallStrategy;
use logic_tester::FixtureSet;
use logic_tester::Harness;
use logic_tester::LoadTarget;
use logic_tester::TestCase;

///
/// Writes an executable shell script.
///
fn script(directory: &Path, name: &str, body: &str) -> PathBuf {
    let path = directory.join(name);
    std::fs::write(path.as_path(), format!("#!/bin/sh\n{body}\n")).expect("Always valid");
    std::fs::set_permissions(path.as_path(), std::fs::Permissions::from_mode(0o755))
        .expect("Always valid");
    path
}

fn worker() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_logic-worker"))
}

fn harness(worker: PathBuf) -> Harness {
    Harness::new(
        worker,
        "sh".to_owned(),
        None,
        Duration::from_secs(60),
    )
    .expect("Always valid")
}

fn descriptor(executable: &Path, strategy: CallStrategy) -> AdapterDescriptor {
    let mut load_target = LoadTarget::new(
        executable.to_string_lossy().into_owned(),
        vec![],
        strategy,
    );
    load_target.version_arguments = Some(vec!["--version".to_owned()]);
    AdapterDescriptor::new("candidate".to_owned(), load_target)
}

fn measure(
    executable: &Path,
    strategy: CallStrategy,
    tests: Vec<TestCase>,
    config: BenchmarkConfig,
) -> BenchmarkResult {
    harness(worker()).benchmark(
        &descriptor(executable, strategy),
        &FixtureSet::new(tests),
        &config,
    )
}

const ANSWERING_42: &str = r#"if [ "$1" = "--version" ]; then echo "7.1.0"; exit 0; fi
echo '{"ready":true}'
while IFS= read -r line; do
  echo '{"result":42}'
done"#;

#[test]
fn persistent_evaluator() {
    let directory = tempfile::tempdir().expect("Always valid");
    let evaluator = script(directory.path(), "evaluator.sh", ANSWERING_42);

    let result = measure(
        evaluator.as_path(),
        CallStrategy::Persistent,
        vec![TestCase::new(json!("X"), json!({}), json!(42))],
        BenchmarkConfig::default(),
    );
    assert_eq!(result.status, Status::Success, "{:?}", result.error);
    assert_eq!(result.version, "7.1.0");
    assert_eq!(result.total_tests, 1);
    assert_eq!(result.passed, 1);
    assert_eq!(result.failed, 0);
    assert_eq!(result.pass_rate, 100.0);
    assert!(result.ops_per_second > 0.0);
    assert!(result.passed_indices.is_none());
}

#[test]
fn per_call_evaluator() {
    let directory = tempfile::tempdir().expect("Always valid");
    let evaluator = script(
        directory.path(),
        "evaluator.sh",
        r#"if [ "$1" = "--version" ]; then echo "2.0.0"; exit 0; fi
echo '{"ready":true}'
IFS= read -r line
case "$line" in
  *'"double"'*) echo '{"result":[1.00001,{"b":2,"a":1}]}' ;;
  *) echo '{"result":null}' ;;
esac"#,
    );

    let result = measure(
        evaluator.as_path(),
        CallStrategy::PerCall,
        vec![
            TestCase::new(json!("double"), json!({}), json!([1.0, {"a": 1, "b": 2}])),
            TestCase::new(json!("other"), json!({}), json!(0)),
        ],
        BenchmarkConfig::new(1, 2, true).expect("Always valid"),
    );
    assert_eq!(result.status, Status::Success, "{:?}", result.error);
    assert_eq!(result.version, "2.0.0");
    assert_eq!(result.total_tests, 2);
    assert_eq!(result.passed, 1);
    assert_eq!(result.failed, 1);
    assert_eq!(result.pass_rate, 50.0);
    assert_eq!(result.passed_indices, Some(vec![0]));
}

#[test]
fn expected_error_types() {
    let directory = tempfile::tempdir().expect("Always valid");
    let evaluator = script(
        directory.path(),
        "evaluator.sh",
        r#"echo '{"ready":true}'
while IFS= read -r line; do
  echo '{"error":{"type":"TypeError","message":"invalid operand"}}'
done"#,
    );

    let result = measure(
        evaluator.as_path(),
        CallStrategy::Persistent,
        vec![
            TestCase::new_failing(json!("a"), json!({}), json!({"type": "TypeError"})),
            TestCase::new_failing(json!("b"), json!({}), json!({"type": "NaN"})),
            TestCase::new(json!("c"), json!({}), json!(1)),
        ],
        BenchmarkConfig::default(),
    );
    assert_eq!(result.passed, 1);
    assert_eq!(result.failed, 2);
    assert_eq!(result.pass_rate, 33.33);
}

#[test]
fn exiting_evaluator_is_restarted() {
    let directory = tempfile::tempdir().expect("Always valid");
    let evaluator = script(
        directory.path(),
        "evaluator.sh",
        r#"echo '{"ready":true}'
IFS= read -r line
echo '{"result":42}'"#,
    );

    let tests = (0..4)
        .map(|index| TestCase::new(json!(index), json!({}), json!(42)))
        .collect();
    let result = measure(
        evaluator.as_path(),
        CallStrategy::Persistent,
        tests,
        BenchmarkConfig::new(0, 1, false).expect("Always valid"),
    );
    assert_eq!(result.status, Status::Success, "{:?}", result.error);
    assert_eq!(result.passed, 2);
    assert_eq!(result.failed, 2);
}

const FAILING_TO_LOAD: &str = r#"if [ "$1" = "--version" ]; then echo "1.0.0"; exit 0; fi
echo 'LoadError: cannot load such file -- json_logic' >&2
exit 1"#;

#[test]
fn persistent_evaluator_failing_to_load() {
    let directory = tempfile::tempdir().expect("Always valid");
    let evaluator = script(directory.path(), "evaluator.sh", FAILING_TO_LOAD);

    let result = measure(
        evaluator.as_path(),
        CallStrategy::Persistent,
        vec![TestCase::new(json!("X"), json!({}), json!(42))],
        BenchmarkConfig::default(),
    );
    assert_eq!(result.status, Status::Error);
    let error = result.error.as_deref().unwrap_or_default();
    assert!(error.contains("failed to load"), "{error}");
    assert!(
        error.contains("LoadError: cannot load such file -- json_logic"),
        "{error}"
    );
    assert_eq!(result.passed, 0);
    assert_eq!(result.failed, 0);
}

#[test]
fn per_call_evaluator_failing_to_load() {
    let directory = tempfile::tempdir().expect("Always valid");
    let evaluator = script(directory.path(), "evaluator.sh", FAILING_TO_LOAD);

    let result = measure(
        evaluator.as_path(),
        CallStrategy::PerCall,
        vec![TestCase::new(json!("X"), json!({}), json!(42))],
        BenchmarkConfig::default(),
    );
    assert_eq!(result.status, Status::Error);
    assert!(result
        .error
        .as_deref()
        .unwrap_or_default()
        .contains("LoadError: cannot load such file -- json_logic"));
}

#[test]
fn evaluator_without_readiness_announcement() {
    let directory = tempfile::tempdir().expect("Always valid");
    let evaluator = script(
        directory.path(),
        "evaluator.sh",
        r#"echo 'starting up'
while IFS= read -r line; do
  echo '{"result":42}'
done"#,
    );

    let result = measure(
        evaluator.as_path(),
        CallStrategy::Persistent,
        vec![TestCase::new(json!("X"), json!({}), json!(42))],
        BenchmarkConfig::default(),
    );
    assert_eq!(result.status, Status::Error);
    assert!(result
        .error
        .as_deref()
        .unwrap_or_default()
        .contains("did not announce readiness"));
}

///
/// Whether the process is alive and not yet a zombie.
///
#[cfg(target_os = "linux")]
fn is_running(pid: &str) -> bool {
    match std::fs::read_to_string(format!("/proc/{pid}/stat")) {
        Ok(stat) => !stat
            .rsplit_once(") ")
            .map(|(_, fields)| fields.starts_with('Z'))
            .unwrap_or_default(),
        Err(_) => false,
    }
}

#[cfg(target_os = "linux")]
#[test]
fn timeout_kills_the_evaluator() {
    let directory = tempfile::tempdir().expect("Always valid");
    let pid_file = directory.path().join("evaluator.pid");
    let evaluator = script(
        directory.path(),
        "evaluator.sh",
        format!(
            r#"if [ "$1" = "--version" ]; then echo "1.0.0"; exit 0; fi
echo $$ > '{}'
echo '{{"ready":true}}'
while :; do :; done"#,
            pid_file.display()
        )
        .as_str(),
    );

    let harness = Harness::new(worker(), "sh".to_owned(), None, Duration::from_secs(2))
        .expect("Always valid");
    let result = harness.benchmark(
        &descriptor(evaluator.as_path(), CallStrategy::Persistent),
        &FixtureSet::new(vec![TestCase::new(json!("X"), json!({}), json!(42))]),
        &BenchmarkConfig::default(),
    );
    assert_eq!(result.status, Status::Error);
    assert!(result
        .error
        .as_deref()
        .unwrap_or_default()
        .starts_with("Timed out"));

    let pid = std::fs::read_to_string(pid_file.as_path()).expect("Always exists");
    let pid = pid.trim();
    let deadline = std::time::Instant::now() + Duration::from_secs(5);
    while is_running(pid) && std::time::Instant::now() < deadline {
        std::thread::sleep(Duration::from_millis(50));
    }
    assert!(!is_running(pid), "evaluator {pid} survived the timeout");
}

#[test]
fn missing_evaluator() {
    let directory = tempfile::tempdir().expect("Always valid");

    let result = measure(
        directory.path().join("absent.sh").as_path(),
        CallStrategy::Persistent,
        vec![TestCase::new(json!("X"), json!({}), json!(42))],
        BenchmarkConfig::default(),
    );
    assert_eq!(result.status, Status::Error);
    assert!(result
        .error
        .as_deref()
        .unwrap_or_default()
        .contains("not found"));
}

#[test]
fn failing_worker() {
    let directory = tempfile::tempdir().expect("Always valid");
    let evaluator = script(directory.path(), "evaluator.sh", ANSWERING_42);

    let result = harness(which::which("false").expect("Always exists")).benchmark(
        &descriptor(evaluator.as_path(), CallStrategy::Persistent),
        &FixtureSet::default(),
        &BenchmarkConfig::default(),
    );
    assert_eq!(result.status, Status::Error);
    assert_eq!(result.error.as_deref(), Some("Unknown error"));
}

#[test]
fn silent_worker() {
    let directory = tempfile::tempdir().expect("Always valid");
    let evaluator = script(directory.path(), "evaluator.sh", ANSWERING_42);

    let result = harness(which::which("true").expect("Always exists")).benchmark(
        &descriptor(evaluator.as_path(), CallStrategy::Persistent),
        &FixtureSet::default(),
        &BenchmarkConfig::default(),
    );
    assert_eq!(result.status, Status::Error);
    assert_eq!(result.error.as_deref(), Some("No benchmark result found"));
}

#[test]
fn malformed_payload() {
    let directory = tempfile::tempdir().expect("Always valid");
    let payload = directory.path().join("payload.json");
    std::fs::write(payload.as_path(), "{}").expect("Always valid");

    let output = std::process::Command::new(worker())
        .arg("--config")
        .arg(payload.as_path())
        .output()
        .expect("Always valid");
    assert!(!output.status.success());
    assert!(!String::from_utf8_lossy(output.stdout.as_slice())
        .contains(benchmark_analyzer::RESULT_SENTINEL));
}
