//! Best Practices criterion (10 points)
//!
//! Catch-all for hygiene: servers declared, deliberate versioning,
//! tagged operations, reuse of component categories, and external docs.

use crate::evaluators::access::{operations, ratio};
use crate::evaluators::base::Criterion;
use crate::models::{CriterionResult, Document, Method};

const POINTS_SERVERS: f64 = 2.0;
const POINTS_VERSIONED: f64 = 2.0;
const POINTS_TAGS: f64 = 3.0;
const POINTS_COMPONENT_REUSE: f64 = 2.0;
const POINTS_EXTERNAL_DOCS: f64 = 1.0;

/// The scaffold default nobody changed.
const DEFAULT_VERSION: &str = "1.0.0";

pub struct BestPractices;

impl Criterion for BestPractices {
    fn name(&self) -> &'static str {
        "Best Practices"
    }

    fn max_score(&self) -> u32 {
        10
    }

    fn evaluate(&self, doc: &Document) -> CriterionResult {
        let mut findings = Vec::new();
        let mut suggestions = Vec::new();
        let mut score = 0.0;

        if doc.servers.as_ref().is_some_and(|s| !s.is_empty()) {
            score += POINTS_SERVERS;
            findings.push("Servers list declared".to_string());
        } else {
            findings.push("No servers declared".to_string());
            suggestions.push("List the environments the API is served from".to_string());
        }

        let deliberately_versioned = doc
            .info
            .version
            .as_deref()
            .is_some_and(|v| v != DEFAULT_VERSION);
        if deliberately_versioned {
            score += POINTS_VERSIONED;
            findings.push("API carries a deliberate version".to_string());
        } else {
            findings.push("API version is missing or still the scaffold default".to_string());
            suggestions.push("Set info.version to the actual release version".to_string());
        }

        let mut total_operations = 0usize;
        let mut with_tags = 0usize;
        for opref in operations(doc, &Method::PRIMARY) {
            total_operations += 1;
            if !opref.operation.tags.is_empty() {
                with_tags += 1;
            }
        }
        score += ratio(with_tags, total_operations) * POINTS_TAGS;
        if total_operations > 0 {
            findings.push(format!(
                "{} of {} operations are tagged",
                with_tags, total_operations
            ));
            if with_tags < total_operations {
                suggestions
                    .push("Tag operations so generated docs group them sensibly".to_string());
            }
        }

        let components = &doc.components;
        let populated_categories = [
            !components.schemas.is_empty(),
            !components.responses.is_empty(),
            !components.parameters.is_empty(),
            !components.examples.is_empty(),
            !components.request_bodies.is_empty(),
            !components.headers.is_empty(),
        ]
        .iter()
        .filter(|&&populated| populated)
        .count();
        if populated_categories > 1 {
            score += POINTS_COMPONENT_REUSE;
            findings.push(format!(
                "{} reusable component categories in use",
                populated_categories
            ));
        } else {
            suggestions.push(
                "Move repeated responses, parameters, and examples into components".to_string(),
            );
        }

        if doc.external_docs.is_some() {
            score += POINTS_EXTERNAL_DOCS;
            findings.push("External documentation linked".to_string());
        }

        CriterionResult::new(self.name(), score, self.max_score(), findings, suggestions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluators::base::fixtures::doc;
    use serde_json::json;

    #[test]
    fn scaffold_document_scores_zero() {
        let result = BestPractices.evaluate(&doc(json!({
            "info": {"title": "Minimal API", "version": "1.0.0"},
            "paths": {"/test": {"get": {"responses": {"200": {"description": "ok"}}}}}
        })));
        assert_eq!(result.score, 0);
    }

    #[test]
    fn deliberate_version_differs_from_scaffold_default() {
        let versioned = BestPractices.evaluate(&doc(json!({
            "info": {"version": "2.3.1"}
        })));
        assert_eq!(versioned.score, 2);

        let unversioned = BestPractices.evaluate(&doc(json!({"info": {}})));
        assert_eq!(unversioned.score, 0);
    }

    #[test]
    fn component_reuse_needs_more_than_one_category() {
        let one = BestPractices.evaluate(&doc(json!({
            "components": {"schemas": {"A": {"type": "object"}}}
        })));
        assert_eq!(one.score, 0);

        let two = BestPractices.evaluate(&doc(json!({
            "components": {
                "schemas": {"A": {"type": "object"}},
                "parameters": {"page": {"name": "page", "in": "query"}}
            }
        })));
        assert_eq!(two.score, 2);
    }

    #[test]
    fn well_kept_document_maxes_out() {
        let result = BestPractices.evaluate(&doc(json!({
            "info": {"version": "3.1.4"},
            "servers": [{"url": "https://api.example.com"}],
            "externalDocs": {"url": "https://docs.example.com"},
            "components": {
                "schemas": {"A": {"type": "object"}},
                "responses": {"NotFound": {}}
            },
            "paths": {"/a": {"get": {
                "tags": ["things"],
                "responses": {"200": {"description": "ok"}}
            }}}
        })));
        // 2 + 2 + 3 + 2 + 1
        assert_eq!(result.score, 10);
    }
}
