//! Validate command - structural validation with numbered error output

use crate::validator;
use anyhow::Result;
use console::style;

/// Run the validate command. Exits non-zero when the document is invalid.
pub fn run(source: &str) -> Result<()> {
    println!("\nValidating {}\n", style(source).cyan());

    let report = validator::validate_source(source);

    if report.is_valid {
        println!("  {} Document is valid", style("[OK]").green());
    } else {
        println!(
            "  {} Validation failed with {} error(s):",
            style("[!!]").red(),
            report.errors.len()
        );
        for (i, error) in report.errors.iter().enumerate() {
            println!("    {}. {}", i + 1, error);
        }
    }

    if !report.warnings.is_empty() {
        println!("\n  Warnings:");
        for warning in &report.warnings {
            println!("    {} {}", style("[--]").yellow(), warning);
        }
    }
    println!();

    if !report.is_valid {
        std::process::exit(1);
    }
    Ok(())
}
