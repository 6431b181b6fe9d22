//! Configuration file loading for trellis
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./trellis.toml` or `./.trellis.toml`
//! 3. XDG config: `$XDG_CONFIG_HOME/trellis/config.toml`
//! 4. Fallback: `~/.config/trellis/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigIssue, ConfigIssueCode, FileConfig, FileOutputConfig, FileProcessingConfig,
    FileRenderConfig, Severity,
};
pub use loader::ConfigLoader;
