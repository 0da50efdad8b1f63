//! Report command - score a document and render the result

use crate::errors::GradeError;
use crate::evaluators::ScoringEngine;
use crate::loader;
use crate::reporters::{self, OutputFormat};
use crate::scoring;
use anyhow::{Context, Result};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::Instant;
use tracing::info;

/// Run the report command.
pub fn run(source: &str, format: &str, output: Option<&Path>) -> Result<()> {
    let format: OutputFormat = format.parse()?;

    // File-based formats need somewhere to land before we do any work.
    if reporters::requires_output_path(format) && output.is_none() {
        return Err(GradeError::Configuration(format!(
            "--format {} requires --output <path>",
            format
        ))
        .into());
    }

    if format == OutputFormat::Console {
        println!(
            "\nScoring {}",
            style(source).cyan()
        );
    }

    let document = loader::load_document(source)?;

    // Progress display is cosmetic: the engine computes the same scores
    // with or without it.
    let bar = ProgressBar::new(7);
    bar.set_style(create_bar_style());
    let progress = bar.clone();
    let engine = ScoringEngine::new().with_progress_callback(Box::new(move |name, _, _| {
        progress.set_message(name.to_string());
        progress.inc(1);
    }));

    let start = Instant::now();
    let result = scoring::score_with_engine(&engine, document);
    let elapsed = start.elapsed();
    bar.finish_and_clear();

    let rendered = reporters::render(&result, elapsed, format)?;
    match output {
        Some(path) => {
            std::fs::write(path, &rendered)
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            info!("Report written to {}", path.display());
            println!(
                "  {} {} report written to {}",
                style("[OK]").green(),
                format,
                style(path.display()).cyan()
            );
        }
        None => println!("{}", rendered),
    }

    Ok(())
}

/// Create bar progress style
fn create_bar_style() -> ProgressStyle {
    ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap()
        .progress_chars("█▓▒░  ")
}
