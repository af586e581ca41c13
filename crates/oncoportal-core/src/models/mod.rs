//! Domain models for the cancer detection portal.

mod patient;
mod report;
mod stats;

pub use patient::*;
pub use report::*;
pub use stats::*;
