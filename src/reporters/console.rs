//! Console reporter with ANSI colors and formatting

use crate::models::{Grade, ScoringResult};
use anyhow::Result;
use std::time::Duration;

/// Grade colors (ANSI escape codes)
fn grade_color(grade: Grade) -> &'static str {
    match grade {
        Grade::A => "\x1b[32m", // Green
        Grade::B => "\x1b[92m", // Light green
        Grade::C => "\x1b[33m", // Yellow
        Grade::D => "\x1b[91m", // Light red
        Grade::F => "\x1b[31m", // Red
    }
}

/// Reset ANSI color
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

/// Render a scoring result as formatted terminal output
pub fn render(result: &ScoringResult, elapsed: Duration) -> Result<String> {
    let mut out = String::new();

    // Header
    let grade_c = grade_color(result.grade);
    let title = result.document.info.title.as_deref().unwrap_or("API");
    let version = result.document.info.version.as_deref().unwrap_or("-");
    out.push_str(&format!("\n{BOLD}apigrade Report{RESET}\n"));
    out.push_str(&format!(
        "{DIM}──────────────────────────────────────{RESET}\n"
    ));
    out.push_str(&format!("{BOLD}{}{RESET} {DIM}v{}{RESET}\n", title, version));
    out.push_str(&format!(
        "Score: {BOLD}{}/100{RESET}  Grade: {grade_c}{BOLD}{}{RESET}  {DIM}({:.1?}){RESET}\n\n",
        result.total_score, result.grade, elapsed
    ));

    // Criteria table
    out.push_str(&format!("{BOLD}CRITERIA{RESET}\n"));
    for criterion in &result.criteria {
        out.push_str(&format!(
            "  {:<30} {:>3}/{:<3} {} {}\n",
            criterion.name,
            criterion.score,
            criterion.max_score,
            score_bar(criterion.percentage),
            format_percentage(criterion.percentage),
        ));
    }
    out.push('\n');

    // Findings and suggestions per criterion
    for criterion in &result.criteria {
        if criterion.findings.is_empty() && criterion.suggestions.is_empty() {
            continue;
        }
        out.push_str(&format!("{BOLD}{}{RESET}\n", criterion.name.to_uppercase()));
        for finding in &criterion.findings {
            out.push_str(&format!("  {DIM}•{RESET} {}\n", finding));
        }
        for suggestion in &criterion.suggestions {
            out.push_str(&format!("  \x1b[36m→{RESET} {}\n", suggestion));
        }
        out.push('\n');
    }

    // Overall feedback
    for line in &result.feedback {
        out.push_str(&format!("{BOLD}{}{RESET}\n", line));
    }

    // Tip based on grade
    match result.grade {
        Grade::A => out.push_str(&format!("{DIM}Excellent! Keep the description current.{RESET}\n")),
        Grade::B => out.push_str(&format!(
            "{DIM}Good shape. Address the suggestions above for an A.{RESET}\n"
        )),
        Grade::C | Grade::D | Grade::F => {
            out.push_str(&format!(
                "{DIM}Export the full report with `apigrade report --format markdown -o report.md`.{RESET}\n"
            ));
        }
    }

    Ok(out)
}

/// Ten-cell bar for a 0-100 percentage
fn score_bar(percentage: u32) -> String {
    let filled = (percentage as usize / 10).min(10);
    let color = if percentage >= 80 {
        "\x1b[32m"
    } else if percentage >= 60 {
        "\x1b[33m"
    } else {
        "\x1b[31m"
    };
    format!(
        "{color}{}{DIM}{}{RESET}",
        "█".repeat(filled),
        "░".repeat(10 - filled)
    )
}

fn format_percentage(percentage: u32) -> String {
    let color = if percentage >= 80 {
        "\x1b[32m"
    } else if percentage >= 60 {
        "\x1b[33m"
    } else {
        "\x1b[31m"
    };
    format!("{color}{:>3}%{RESET}", percentage)
}
