//! CLI command definitions and handlers

mod report;
mod validate;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// apigrade - API description quality grading
#[derive(Parser, Debug)]
#[command(name = "apigrade")]
#[command(
    version,
    about = "Grade the quality of an OpenAPI description against a seven-criteria rubric",
    long_about = "apigrade scores an API description document (JSON or YAML, local file or URL) \
against a fixed rubric: schemas & types, descriptions, path design, response codes, \
examples, security, and best practices.\n\n\
The result is a deterministic 0-100 score, a letter grade, and per-criterion \
findings with actionable suggestions.",
    after_help = "\
Examples:
  apigrade validate openapi.yaml             Check structure and references
  apigrade report openapi.yaml               Print a console report
  apigrade report https://example.com/api.json --format html -o report.html
  apigrade report openapi.yaml -f markdown -o report.md

Documentation: https://github.com/apigrade/apigrade"
)]
pub struct Cli {
    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate a document's structure and references
    #[command(after_help = "\
Examples:
  apigrade validate openapi.yaml             Validate a local file
  apigrade validate https://example.com/openapi.json   Validate a remote document")]
    Validate {
        /// Path or http(s) URL of the document
        source: String,
    },

    /// Score a document and render a quality report
    #[command(after_help = "\
Examples:
  apigrade report openapi.yaml                         Console report
  apigrade report openapi.yaml -f markdown -o api.md   Markdown report
  apigrade report openapi.yaml -f html -o api.html     Standalone HTML report")]
    Report {
        /// Path or http(s) URL of the document
        source: String,

        /// Output format: console, markdown (or md), html
        #[arg(long, short = 'f', default_value = "console", value_parser = ["console", "markdown", "md", "html"])]
        format: String,

        /// Output file path (required for markdown/html)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },
}

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Validate { source } => validate::run(&source),
        Commands::Report {
            source,
            format,
            output,
        } => report::run(&source, &format, output.as_deref()),
    }
}
