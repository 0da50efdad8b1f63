//! Markdown reporter for GitHub-flavored Markdown output
//!
//! Generates reports suitable for:
//! - README files
//! - Pull request comments
//! - Documentation sites

use crate::models::{CriterionResult, Grade, ScoringResult};
use anyhow::Result;
use chrono::Local;
use std::time::Duration;

/// Render a scoring result as GitHub-flavored Markdown
pub fn render(result: &ScoringResult, elapsed: Duration) -> Result<String> {
    let mut md = String::new();

    md.push_str(&render_header(result));
    md.push('\n');

    md.push_str(&render_summary(result, elapsed));
    md.push('\n');

    md.push_str(&render_criteria_table(result));
    md.push('\n');

    md.push_str(&render_criteria_details(result));

    md.push_str(&render_footer());

    Ok(md)
}

fn render_header(result: &ScoringResult) -> String {
    let grade_emoji = match result.grade {
        Grade::A => "🏆",
        Grade::B => "⭐",
        Grade::C => "⚠️",
        Grade::D => "❌",
        Grade::F => "💀",
    };

    let title = result.document.info.title.as_deref().unwrap_or("API");
    let version = result.document.info.version.as_deref().unwrap_or("unversioned");
    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");

    format!(
        r#"# {} API Quality Report: {}

**Grade: {}** | **Score: {}/100** | Version: `{}`

Generated: {}
"#,
        grade_emoji, title, result.grade, result.total_score, version, timestamp
    )
}

fn render_summary(result: &ScoringResult, elapsed: Duration) -> String {
    let mut md = String::from("## Summary\n\n");
    for line in &result.feedback {
        md.push_str(&format!("> {}\n", line));
    }
    md.push_str(&format!("\n*Scored in {:.1?}.*\n", elapsed));
    md
}

fn render_criteria_table(result: &ScoringResult) -> String {
    let mut md = String::from(
        "## Criteria\n\n| Criterion | Score | Max | % | Status |\n|-----------|-------|-----|---|--------|\n",
    );
    for criterion in &result.criteria {
        md.push_str(&format!(
            "| {} | {} | {} | {}% | {} |\n",
            criterion.name,
            criterion.score,
            criterion.max_score,
            criterion.percentage,
            score_indicator(criterion.percentage)
        ));
    }
    md
}

fn render_criteria_details(result: &ScoringResult) -> String {
    let mut md = String::from("## Details\n\n");
    for criterion in &result.criteria {
        md.push_str(&render_criterion(criterion));
    }
    md
}

fn render_criterion(criterion: &CriterionResult) -> String {
    let mut md = format!(
        "### {} ({}/{})\n\n",
        criterion.name, criterion.score, criterion.max_score
    );

    for finding in &criterion.findings {
        md.push_str(&format!("- {}\n", finding));
    }
    if !criterion.findings.is_empty() {
        md.push('\n');
    }

    if !criterion.suggestions.is_empty() {
        for suggestion in &criterion.suggestions {
            md.push_str(&format!("> **💡 Suggestion:** {}\n", suggestion));
        }
        md.push('\n');
    }

    md
}

fn render_footer() -> String {
    r#"---

*Generated by [apigrade](https://github.com/apigrade/apigrade) - API Description Quality Grader*
"#
    .to_string()
}

fn score_indicator(percentage: u32) -> &'static str {
    if percentage >= 80 {
        "✅ Good"
    } else if percentage >= 60 {
        "⚠️ Fair"
    } else {
        "❌ Poor"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporters::tests::test_result;

    #[test]
    fn test_markdown_render_has_header() {
        let result = test_result();
        let md = render(&result, Duration::from_millis(7)).unwrap();
        assert!(md.contains("# "));
        assert!(md.contains("Petstore"));
        assert!(md.contains(&format!("Score: {}/100", result.total_score)));
    }

    #[test]
    fn test_markdown_render_has_criteria_table() {
        let result = test_result();
        let md = render(&result, Duration::from_millis(7)).unwrap();
        assert!(md.contains("| Criterion |"));
        for criterion in &result.criteria {
            assert!(md.contains(&criterion.name));
        }
    }

    #[test]
    fn test_markdown_render_includes_suggestions() {
        let result = test_result();
        let md = render(&result, Duration::from_millis(7)).unwrap();
        // The fixture document has no security at all, so at least the
        // security criterion must surface a suggestion.
        assert!(md.contains("💡 Suggestion:"));
    }
}
