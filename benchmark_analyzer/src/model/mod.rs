//!
//! The benchmark data model.
//!

pub mod environment;
pub mod result;
pub mod status;
pub mod summary;
