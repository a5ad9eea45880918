//!
//! The evaluation failure.
//!

///
/// The failure raised by an implementation while evaluating a rule.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    /// The failure category, such as an exception type name.
    pub category: String,
    /// The failure message.
    pub message: String,
}

impl Failure {
    /// The category of failures reported without a type.
    pub const GENERIC: &'static str = "Error";

    /// The category of responses violating the line protocol.
    pub const PROTOCOL_ERROR: &'static str = "ProtocolError";

    /// The category of calls observing a persistent evaluator exit.
    pub const EVALUATOR_EXITED: &'static str = "EvaluatorExited";

    /// The category of per-call evaluator processes which cannot be run.
    pub const PROCESS_FAILURE: &'static str = "ProcessFailure";

    ///
    /// A shortcut constructor.
    ///
    pub fn new<C, M>(category: C, message: M) -> Self
    where
        C: ToString,
        M: ToString,
    {
        Self {
            category: category.to_string(),
            message: message.to_string(),
        }
    }
}

impl std::fmt::Display for Failure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.category, self.message)
    }
}

impl std::error::Error for Failure {}
