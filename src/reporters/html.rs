//! HTML reporter with embedded styles
//!
//! Generates a standalone HTML report that can be viewed in any browser.
//! Includes:
//! - Overall grade badge and score
//! - Per-criterion score bars with findings and suggestions
//! - Responsive design for mobile and desktop

use crate::models::{CriterionResult, Grade, ScoringResult};
use anyhow::Result;
use chrono::Local;
use std::time::Duration;

/// Render a scoring result as standalone HTML
pub fn render(result: &ScoringResult, elapsed: Duration) -> Result<String> {
    let mut html = String::new();

    html.push_str(&render_head(result));

    html.push_str("<body>\n<div class=\"container\">\n");
    html.push_str(&render_header(result));

    html.push_str("<div class=\"content\">\n");
    html.push_str(&render_grade_section(result, elapsed));
    html.push_str(&render_criteria(result));
    html.push_str("</div>\n"); // content

    html.push_str(&render_footer());
    html.push_str("</div>\n</body>\n</html>");

    Ok(html)
}

fn render_head(result: &ScoringResult) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>apigrade Report - Grade {}</title>
    <style>
{CSS}
    </style>
</head>
"#,
        result.grade
    )
}

fn render_header(result: &ScoringResult) -> String {
    let title = result.document.info.title.as_deref().unwrap_or("API");
    let version = result.document.info.version.as_deref().unwrap_or("unversioned");
    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
    format!(
        r#"<div class="header">
    <h1>📋 API Quality Report</h1>
    <p class="subtitle">{} <span class="version">v{}</span></p>
    <p class="timestamp">Generated {}</p>
</div>
"#,
        html_escape(title),
        html_escape(version),
        timestamp
    )
}

fn render_grade_section(result: &ScoringResult, elapsed: Duration) -> String {
    let mut feedback_html = String::new();
    for line in &result.feedback {
        feedback_html.push_str(&format!(
            "    <p class=\"grade-description\">{}</p>\n",
            html_escape(line)
        ));
    }

    format!(
        r#"<div class="grade-section">
    <div class="grade-badge grade-{}">{}</div>
    <div class="score">Overall Score: {}/100</div>
{}    <p class="elapsed">Scored in {:.1?}</p>
</div>
"#,
        result.grade, result.grade, result.total_score, feedback_html, elapsed
    )
}

fn render_criteria(result: &ScoringResult) -> String {
    let mut html = String::from(
        r#"<div class="section">
    <h2 class="section-title">📊 Criteria</h2>
    <div class="criteria-list">
"#,
    );

    for criterion in &result.criteria {
        html.push_str(&render_criterion(criterion));
    }

    html.push_str("    </div>\n</div>\n");
    html
}

fn render_criterion(criterion: &CriterionResult) -> String {
    let findings_html = if criterion.findings.is_empty() {
        String::new()
    } else {
        let items: Vec<String> = criterion
            .findings
            .iter()
            .map(|f| format!("<li>{}</li>", html_escape(f)))
            .collect();
        format!(
            r#"<ul class="findings">{}</ul>"#,
            items.join("\n")
        )
    };

    let suggestions_html = if criterion.suggestions.is_empty() {
        String::new()
    } else {
        let items: Vec<String> = criterion
            .suggestions
            .iter()
            .map(|s| {
                format!(
                    "<div class=\"suggestion\">💡 {}</div>",
                    html_escape(s)
                )
            })
            .collect();
        items.join("\n")
    };

    format!(
        r#"<div class="criterion-card">
        <div class="criterion-header">
            <span class="criterion-name">{}</span>
            <span class="criterion-score">{}/{}</span>
        </div>
        <div class="metric-bar">
            <div class="metric-bar-fill {}" style="width: {}%"></div>
        </div>
        {}
        {}
    </div>
"#,
        html_escape(&criterion.name),
        criterion.score,
        criterion.max_score,
        bar_class(criterion.percentage),
        criterion.percentage,
        findings_html,
        suggestions_html
    )
}

fn render_footer() -> String {
    r#"<div class="footer">
    <p>Generated by <a href="https://github.com/apigrade/apigrade">apigrade</a> - API Description Quality Grader</p>
</div>
"#
    .to_string()
}

fn bar_class(percentage: u32) -> &'static str {
    if percentage >= 80 {
        "bar-good"
    } else if percentage >= 60 {
        "bar-moderate"
    } else {
        "bar-poor"
    }
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

// Embedded CSS
const CSS: &str = r#"
:root {
    --primary-color: #6366f1;
    --background-color: #f8fafc;
    --text-color: #1e293b;
    --card-background: white;
    --border-color: #e2e8f0;
}

* {
    margin: 0;
    padding: 0;
    box-sizing: border-box;
}

body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    line-height: 1.6;
    color: var(--text-color);
    background: var(--background-color);
    padding: 2rem;
}

.container {
    max-width: 960px;
    margin: 0 auto;
    background: var(--card-background);
    border-radius: 12px;
    box-shadow: 0 4px 6px -1px rgba(0,0,0,0.1);
    overflow: hidden;
}

.header {
    background: linear-gradient(135deg, #6366f1 0%, #8b5cf6 100%);
    color: white;
    padding: 3rem 2rem;
    text-align: center;
}

.header h1 { font-size: 2.2rem; margin-bottom: 0.5rem; }
.header .subtitle { font-size: 1.2rem; }
.header .version { opacity: 0.8; font-size: 0.9rem; }
.header .timestamp { opacity: 0.9; font-size: 0.9rem; }

.content { padding: 2rem; }

.grade-section {
    text-align: center;
    padding: 2rem;
    background: #f1f5f9;
    border-radius: 8px;
    margin-bottom: 2rem;
}

.grade-badge {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    width: 90px;
    height: 90px;
    border-radius: 50%;
    font-size: 3rem;
    font-weight: 700;
    color: white;
    margin-bottom: 1rem;
}

.grade-A { background: #22c55e; }
.grade-B { background: #84cc16; }
.grade-C { background: #eab308; }
.grade-D { background: #f97316; }
.grade-F { background: #ef4444; }

.score { font-size: 1.4rem; font-weight: 600; margin-bottom: 0.5rem; }
.grade-description { color: #475569; }
.elapsed { color: #94a3b8; font-size: 0.85rem; margin-top: 0.5rem; }

.section { margin-bottom: 2rem; }
.section-title {
    font-size: 1.3rem;
    margin-bottom: 1rem;
    padding-bottom: 0.5rem;
    border-bottom: 2px solid var(--border-color);
}

.criterion-card {
    border: 1px solid var(--border-color);
    border-radius: 8px;
    padding: 1.25rem;
    margin-bottom: 1rem;
}

.criterion-header {
    display: flex;
    justify-content: space-between;
    align-items: center;
    margin-bottom: 0.5rem;
}

.criterion-name { font-weight: 600; }
.criterion-score { font-variant-numeric: tabular-nums; color: #475569; }

.metric-bar {
    height: 8px;
    background: #e2e8f0;
    border-radius: 4px;
    overflow: hidden;
    margin-bottom: 0.75rem;
}

.metric-bar-fill { height: 100%; border-radius: 4px; }
.bar-good { background: #22c55e; }
.bar-moderate { background: #eab308; }
.bar-poor { background: #ef4444; }

.findings {
    list-style: disc inside;
    color: #475569;
    font-size: 0.95rem;
    margin-bottom: 0.5rem;
}

.suggestion {
    background: #fef9c3;
    border-left: 3px solid #eab308;
    padding: 0.5rem 0.75rem;
    border-radius: 0 4px 4px 0;
    font-size: 0.95rem;
    margin-top: 0.5rem;
}

.footer {
    text-align: center;
    padding: 1.5rem;
    background: #f1f5f9;
    color: #64748b;
    font-size: 0.9rem;
}

.footer a { color: var(--primary-color); text-decoration: none; }

@media (max-width: 640px) {
    body { padding: 0.5rem; }
    .content { padding: 1rem; }
}
"#;
