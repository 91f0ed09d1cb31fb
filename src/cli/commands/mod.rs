//! Command implementations

mod report;

pub use report::{ReportOptions, report};
