//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

use serde::{Deserialize, Serialize};
use trellis_domain::OutputFormat;

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: the configuration works but may not behave as expected.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// `render.listener_url` is empty, leaving change-notification
    /// triggers with nothing to point at.
    EmptyListenerUrl,
    /// `render.indent` is so large the markup becomes mostly
    /// whitespace. A warning above 16 spaces per level, fatal above 64.
    ExcessiveIndent,
}

/// A detected issue in the loaded configuration.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

/// Raw rendering configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRenderConfig {
    /// Spaces per nesting level in emitted markup
    pub indent: usize,
    /// Base URL for selection-change triggers; the group's input name is
    /// appended percent-encoded
    pub listener_url: String,
}

impl Default for FileRenderConfig {
    fn default() -> Self {
        Self {
            indent: 2,
            listener_url: "./listener?group=".to_string(),
        }
    }
}

/// Raw submit-processing configuration from TOML
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProcessingConfig {
    /// Warn about wire tokens that appear on more than one check
    pub detect_duplicate_tokens: bool,
}

/// Raw output configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Output format (uses domain type)
    pub format: Option<OutputFormat>,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
        }
    }
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Markup rendering settings
    pub render: FileRenderConfig,
    /// Submit-processing settings
    pub processing: FileProcessingConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Catches values that deserialize fine but misbehave at runtime.
    /// An empty list means the config is clean.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.render.listener_url.is_empty() {
            issues.push(ConfigIssue {
                severity: Severity::Warning,
                code: ConfigIssueCode::EmptyListenerUrl,
                message: "render.listener_url is empty; selection-change triggers will point at a bare group name"
                    .to_string(),
            });
        }

        if self.render.indent > 64 {
            issues.push(ConfigIssue {
                severity: Severity::Error,
                code: ConfigIssueCode::ExcessiveIndent,
                message: format!(
                    "render.indent: {} spaces per level buries the markup in whitespace; use 64 or less",
                    self.render.indent
                ),
            });
        } else if self.render.indent > 16 {
            issues.push(ConfigIssue {
                severity: Severity::Warning,
                code: ConfigIssueCode::ExcessiveIndent,
                message: format!(
                    "render.indent: {} spaces per level is unusually deep",
                    self.render.indent
                ),
            });
        }

        issues
    }

    /// True if any issue in the slice is fatal.
    pub fn has_errors(issues: &[ConfigIssue]) -> bool {
        issues.iter().any(|i| i.severity == Severity::Error)
    }
}
