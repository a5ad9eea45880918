//!
//! The test fixtures.
//!

pub mod directory;
pub mod error;
pub mod suite;
pub mod test_case;

use self::test_case::TestCase;

///
/// The ordered fixture set every implementation is measured against.
///
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FixtureSet {
    /// The test cases.
    tests: Vec<TestCase>,
}

impl FixtureSet {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(tests: Vec<TestCase>) -> Self {
        Self { tests }
    }

    ///
    /// The test cases in order.
    ///
    pub fn tests(&self) -> &[TestCase] {
        self.tests.as_slice()
    }

    ///
    /// The number of test cases.
    ///
    pub fn len(&self) -> usize {
        self.tests.len()
    }

    ///
    /// Whether there are no test cases.
    ///
    pub fn is_empty(&self) -> bool {
        self.tests.is_empty()
    }
}
