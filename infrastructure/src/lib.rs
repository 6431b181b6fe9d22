//! Infrastructure layer for trellis
//!
//! This crate contains adapters around the application layer: loading
//! configuration files and decoding form submissions from the wire.

pub mod config;
pub mod request;

// Re-export commonly used types
pub use config::{
    ConfigIssue, ConfigIssueCode, ConfigLoader, FileConfig, FileOutputConfig,
    FileProcessingConfig, FileRenderConfig, Severity,
};
pub use request::parse_query;
