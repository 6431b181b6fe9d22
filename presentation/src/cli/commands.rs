//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for demo runs
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Full formatted output with markup, group state and submission
    Full,
    /// Rendered markup only
    Markup,
    /// JSON output
    Json,
}

impl From<OutputFormat> for trellis_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Full => trellis_domain::OutputFormat::Full,
            OutputFormat::Markup => trellis_domain::OutputFormat::Markup,
            OutputFormat::Json => trellis_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for trellis
#[derive(Parser, Debug)]
#[command(name = "trellis")]
#[command(version, about = "Check groups - server-side selection state for form trees")]
#[command(long_about = r#"
Trellis renders a demo component tree containing check groups, projects
their selection state into markup, and resolves submissions back into
the model.

The demo page contains two groups:
  page:order:toppings   inside the "order" form; round-trips selection changes
  page:favorites        free-standing, outside any form

A submission can arrive as a full query string (positional argument) or
as bare tokens for the toppings group (--submit). By default it runs
through the form's submit phase; --listener delivers it through the
named group's selection-change listener instead. A --listener with no
query and no tokens delivers an empty submission, which unchecks the
whole group.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./trellis.toml      Project-level config
3. ~/.config/trellis/config.toml   Global config

Example:
  trellis
  trellis "order:toppings=check0&order:toppings=check2"
  trellis --submit check0 --submit check2
  trellis --listener page:order:toppings "order:toppings=check1"
  trellis --listener page:order:toppings
  trellis --listener page:favorites "favorites=check3" --output json
"#)]
pub struct Cli {
    /// URL-encoded form submission to process (omit to render the initial state)
    pub query: Option<String>,

    /// Wire token to submit for the toppings group (can be specified multiple times)
    #[arg(short, long, value_name = "TOKEN")]
    pub submit: Vec<String>,

    /// Deliver the submission through this group's selection-change listener (component path)
    #[arg(short, long, value_name = "GROUP_PATH")]
    pub listener: Option<String>,

    /// Output format (defaults to the configured format, then "full")
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Warn about wire tokens claimed by more than one check
    #[arg(long)]
    pub detect_duplicates: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
