//! Application-level configuration.
//!
//! This module provides configuration types that control how use cases
//! behave, such as optional processing diagnostics.

/// Submit-pipeline behavior configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcessingOptions {
    /// Scan a group's checks for duplicated wire tokens before
    /// resolving and log a warning per duplicate. Resolution behavior
    /// is unchanged (first match in document order still wins).
    pub detect_duplicate_tokens: bool,
}

impl ProcessingOptions {
    /// Options with the duplicate-token diagnostic enabled.
    pub fn with_duplicate_detection() -> Self {
        Self {
            detect_duplicate_tokens: true,
        }
    }
}
