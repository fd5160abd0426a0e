use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Presentation of a tool response. Has no effect on filtering or ranking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Deterministic markdown rendering
    #[default]
    Markdown,
    /// Pretty-printed structured data
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Markdown => f.write_str("markdown"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown output format '{0}'. Valid formats: markdown, json")]
pub struct ParseOutputFormatError(pub String);

impl FromStr for OutputFormat {
    type Err = ParseOutputFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "markdown" => Ok(OutputFormat::Markdown),
            "json" => Ok(OutputFormat::Json),
            other => Err(ParseOutputFormatError(other.to_string())),
        }
    }
}

/// Render a value either as pretty JSON or with the given markdown formatter.
pub fn render<T, F>(format: OutputFormat, value: &T, markdown: F) -> Result<String, serde_json::Error>
where
    T: Serialize + ?Sized,
    F: FnOnce(&T) -> String,
{
    match format {
        OutputFormat::Markdown => Ok(markdown(value)),
        OutputFormat::Json => serde_json::to_string_pretty(value),
    }
}
