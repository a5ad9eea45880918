//!
//! The benchmark analyzer library.
//!

pub mod comparison;
pub mod error;
pub mod model;
pub mod output;
pub mod output_format;
pub mod ranking;
pub mod util;

pub use crate::comparison::element::Element as ComparisonElement;
pub use crate::comparison::Comparison;
pub use crate::error::Error;
pub use crate::model::environment::Environment;
pub use crate::model::result::BenchmarkResult;
pub use crate::model::status::Status;
pub use crate::model::summary::Summary;
pub use crate::output::Output;
pub use crate::output_format::OutputFormat;
pub use crate::ranking::rank;

/// The marker prefixing the single result line printed by an isolated worker.
pub const RESULT_SENTINEL: &str = "BENCHMARK_RESULT:";

/// The version reported when an implementation does not expose one.
pub const UNKNOWN_VERSION: &str = "unknown";
