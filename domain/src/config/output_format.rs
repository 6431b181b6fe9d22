//! Output format value object

use serde::{Deserialize, Serialize};

/// Output format for demo and report output
///
/// This is a domain concept representing how results should be
/// formatted across layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Markup, wire value, and committed selection (default)
    Full,
    /// Only the rendered markup
    Markup,
    /// JSON report
    Json,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Full
    }
}

impl OutputFormat {
    /// Returns the canonical string representation.
    pub fn as_str(&self) -> &str {
        match self {
            OutputFormat::Full => "full",
            OutputFormat::Markup => "markup",
            OutputFormat::Json => "json",
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "full" => Ok(OutputFormat::Full),
            "markup" | "html" => Ok(OutputFormat::Markup),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Invalid OutputFormat: {}", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_full() {
        assert_eq!(OutputFormat::default(), OutputFormat::Full);
    }

    #[test]
    fn test_serialize_lowercase() {
        let json = serde_json::to_string(&OutputFormat::Markup).unwrap();
        assert_eq!(json, "\"markup\"");
    }

    #[test]
    fn test_deserialize_lowercase() {
        let format: OutputFormat = serde_json::from_str("\"json\"").unwrap();
        assert_eq!(format, OutputFormat::Json);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("full".parse::<OutputFormat>().unwrap(), OutputFormat::Full);
        assert_eq!(
            "HTML".parse::<OutputFormat>().unwrap(),
            OutputFormat::Markup
        );
        assert!("yaml".parse::<OutputFormat>().is_err());
    }
}
