//! Paths & Operations criterion (15 points)
//!
//! Scores URL design: lowercase kebab-case segments, CRUD-style paths
//! exposing both collection reads and writes, and the absence of
//! structurally redundant templates that differ only by parameter name.

use crate::evaluators::access::{plural, ratio};
use crate::evaluators::base::Criterion;
use crate::models::{CriterionResult, Document};
use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

const POINTS_WELL_NAMED: f64 = 7.0;
const POINTS_CRUD: f64 = 5.0;
const POINTS_NO_REDUNDANCY: f64 = 3.0;

/// Lowercase alphanumerics and dashes; no underscores, no uppercase.
fn segment_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[a-z0-9-]+$").expect("static pattern"))
}

fn is_parameter_segment(segment: &str) -> bool {
    segment.starts_with('{') && segment.ends_with('}')
}

/// True when every non-parameter segment is kebab-case.
fn is_well_named(path: &str) -> bool {
    path.split('/')
        .filter(|s| !s.is_empty())
        .filter(|s| !is_parameter_segment(s))
        .all(|s| segment_pattern().is_match(s))
}

/// Collapse every parameter segment to a single placeholder so that
/// `/users/{id}` and `/users/{userId}` normalize identically.
fn normalize_pattern(path: &str) -> String {
    path.split('/')
        .filter(|s| !s.is_empty())
        .map(|s| if is_parameter_segment(s) { "{}" } else { s })
        .collect::<Vec<_>>()
        .join("/")
}

pub struct PathsOperations;

impl Criterion for PathsOperations {
    fn name(&self) -> &'static str {
        "Paths & Operations"
    }

    fn max_score(&self) -> u32 {
        15
    }

    fn evaluate(&self, doc: &Document) -> CriterionResult {
        if doc.paths.is_empty() {
            return CriterionResult::new(
                self.name(),
                0.0,
                self.max_score(),
                vec!["No paths defined".to_string()],
                vec!["Define paths and operations so the API surface can be scored".to_string()],
            );
        }

        let mut findings = Vec::new();
        let mut suggestions = Vec::new();
        let mut score = 0.0;

        let path_count = doc.paths.len();
        let well_named = doc.paths.keys().filter(|p| is_well_named(p)).count();
        score += ratio(well_named, path_count) * POINTS_WELL_NAMED;
        findings.push(format!(
            "{} of {} use lowercase kebab-case segments",
            well_named,
            plural(path_count, "path")
        ));
        if well_named < path_count {
            suggestions.push(
                "Rename path segments to lowercase kebab-case (no underscores or uppercase)"
                    .to_string(),
            );
        }

        let crud_paths = doc
            .paths
            .values()
            .filter(|item| item.get.is_some() && item.post.is_some())
            .count();
        score += ((crud_paths * 2) as f64).min(POINTS_CRUD);
        if crud_paths > 0 {
            findings.push(format!(
                "{} expose both get and post",
                plural(crud_paths, "CRUD-style path")
            ));
        }

        let distinct_patterns: HashSet<String> =
            doc.paths.keys().map(|p| normalize_pattern(p)).collect();
        let overlapping = path_count - distinct_patterns.len();
        if overlapping == 0 {
            score += POINTS_NO_REDUNDANCY;
        } else {
            findings.push(format!(
                "{} shadow another path's parameter pattern",
                plural(overlapping, "path")
            ));
            suggestions.push(
                "Merge paths that differ only by parameter name into one template".to_string(),
            );
        }

        CriterionResult::new(self.name(), score, self.max_score(), findings, suggestions)
    }
}
