//! Console output formatting.

mod console;

pub use console::{ConsoleFormatter, GroupSummary, RunSummary, SubmissionSummary};
