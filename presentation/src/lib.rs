//! Presentation layer for trellis
//!
//! This crate contains CLI definitions, the markup writer, output
//! formatters, and console implementations of the application's ports.

pub mod cli;
pub mod observer;
pub mod output;
pub mod render;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat};
pub use observer::ConsoleObserver;
pub use output::{ConsoleFormatter, GroupSummary, RunSummary, SubmissionSummary};
pub use render::{MarkupWriter, RenderError, RenderOptions};
