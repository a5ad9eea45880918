//!
//! The implementation adapters.
//!

pub mod descriptor;
pub mod error;
pub mod failure;
pub mod invoker;
pub mod load_target;
pub mod per_call;
pub mod persistent;
pub mod protocol;
pub mod registry;
pub mod runtime;
pub mod strategy;

use self::failure::Failure;

///
/// The uniform rule evaluation interface of a loaded implementation.
///
pub trait Evaluate {
    ///
    /// Evaluates the rule against the data.
    ///
    fn evaluate(
        &mut self,
        rule: &serde_json::Value,
        data: &serde_json::Value,
    ) -> Result<serde_json::Value, Failure>;

    ///
    /// The implementation version, or `unknown`.
    ///
    fn version(&self) -> String;

    ///
    /// The process whose resident memory reflects the implementation, or `None` while there is
    /// no such process to sample.
    ///
    fn memory_pid(&self) -> Option<u32>;
}
