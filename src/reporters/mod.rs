//! Output reporters for scoring results
//!
//! Supports three output formats:
//! - `console` - Terminal output with ANSI colors
//! - `markdown` - GitHub-flavored Markdown
//! - `html` - Standalone HTML report with score bars

mod console;
mod html;
mod markdown;

use crate::models::ScoringResult;
use anyhow::{anyhow, Result};
use std::str::FromStr;
use std::time::Duration;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Console,
    Markdown,
    Html,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "console" | "text" | "terminal" => Ok(OutputFormat::Console),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "html" => Ok(OutputFormat::Html),
            _ => Err(anyhow!(
                "Unknown format '{}'. Valid formats: console, markdown, html",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Console => write!(f, "console"),
            OutputFormat::Markdown => write!(f, "markdown"),
            OutputFormat::Html => write!(f, "html"),
        }
    }
}

/// Whether this format is written to a file rather than stdout.
pub fn requires_output_path(format: OutputFormat) -> bool {
    !matches!(format, OutputFormat::Console)
}

/// Render a scoring result in the specified format.
pub fn render(result: &ScoringResult, elapsed: Duration, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Console => console::render(result, elapsed),
        OutputFormat::Markdown => markdown::render(result, elapsed),
        OutputFormat::Html => html::render(result, elapsed),
    }
}

/// Get the recommended file extension for a format
pub fn file_extension(format: OutputFormat) -> &'static str {
    match format {
        OutputFormat::Console => "txt",
        OutputFormat::Markdown => "md",
        OutputFormat::Html => "html",
    }
}
