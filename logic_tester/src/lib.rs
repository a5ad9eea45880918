//!
//! The rule evaluator benchmark library.
//!

pub mod adapters;
pub mod config;
pub mod fixtures;
pub mod harness;
pub mod logging;
pub mod measurement;
pub mod oracle;
pub mod payload;
pub mod reporter;

pub use self::adapters::descriptor::Descriptor as AdapterDescriptor;
pub use self::adapters::failure::Failure;
pub use self::adapters::invoker::Invoker;
pub use self::adapters::load_target::LoadTarget;
pub use self::adapters::registry::Registry;
pub use self::adapters::runtime::Runtime;
pub use self::adapters::strategy::Strategy as CallStrategy;
pub use self::adapters::Evaluate;
pub use self::config::BenchmarkConfig;
pub use self::fixtures::directory::Directory as FixtureDirectory;
pub use self::fixtures::test_case::ExpectedError;
pub use self::fixtures::test_case::TestCase;
pub use self::fixtures::FixtureSet;
pub use self::harness::Harness;
pub use self::measurement::memory::MemoryCollector;
pub use self::payload::Payload;
pub use self::reporter::Reporter;

/// The default adapters configuration path.
pub const DEFAULT_ADAPTERS_CONFIG: &str = "./configs/adapters.json";

/// The default fixtures directory.
pub const DEFAULT_FIXTURES_DIRECTORY: &str = "tests";

/// The worker executable name.
pub const WORKER_EXECUTABLE_NAME: &str = "logic-worker";

/// The process exit code on success.
pub const EXIT_CODE_SUCCESS: i32 = 0;

/// The process exit code on failure.
pub const EXIT_CODE_FAILURE: i32 = 1;
