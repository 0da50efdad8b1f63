//! apigrade - API description quality grading CLI
//!
//! A fast, local-first grader that scores OpenAPI documents against a
//! seven-criteria rubric and renders console, Markdown, or HTML reports.

use anyhow::Result;
use apigrade::cli;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<()> {
    // Parse CLI args first so --log-level can seed the filter.
    let cli = cli::Cli::parse();

    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(cli.log_level.clone())),
        )
        .init();

    cli::run(cli)
}
