//! Examples & Samples criterion (10 points)
//!
//! Payloads with examples are payloads clients can copy. Request bodies
//! and response content entries are scored separately.

use crate::evaluators::access::{operations, ratio, request_media_types, response_contents};
use crate::evaluators::base::Criterion;
use crate::models::{CriterionResult, Document, Method};

const POINTS_REQUEST_EXAMPLES: f64 = 5.0;
const POINTS_RESPONSE_EXAMPLES: f64 = 5.0;

pub struct Examples;

impl Criterion for Examples {
    fn name(&self) -> &'static str {
        "Examples & Samples"
    }

    fn max_score(&self) -> u32 {
        10
    }

    fn evaluate(&self, doc: &Document) -> CriterionResult {
        if doc.paths.is_empty() {
            return CriterionResult::new(
                self.name(),
                0.0,
                self.max_score(),
                vec!["No paths defined".to_string()],
                vec!["Define operations with example payloads".to_string()],
            );
        }

        let mut findings = Vec::new();
        let mut suggestions = Vec::new();

        let mut with_body = 0usize;
        let mut with_request_example = 0usize;
        let mut responses_with_content = 0usize;
        let mut with_response_example = 0usize;

        for opref in operations(doc, &Method::PRIMARY) {
            let op = opref.operation;
            if op.request_body.is_some() {
                with_body += 1;
                if request_media_types(op).any(|mt| mt.has_example()) {
                    with_request_example += 1;
                }
            }
            for content in response_contents(op) {
                responses_with_content += 1;
                if content.values().any(|mt| mt.has_example()) {
                    with_response_example += 1;
                }
            }
        }

        let score = ratio(with_request_example, with_body) * POINTS_REQUEST_EXAMPLES
            + ratio(with_response_example, responses_with_content) * POINTS_RESPONSE_EXAMPLES;

        if with_body > 0 {
            findings.push(format!(
                "{} of {} request bodies include an example",
                with_request_example, with_body
            ));
            if with_request_example < with_body {
                suggestions.push(
                    "Add an example (or named examples) to each request body media type"
                        .to_string(),
                );
            }
        } else {
            findings.push("No operations declare a request body".to_string());
        }

        if responses_with_content > 0 {
            findings.push(format!(
                "{} of {} response content entries include an example",
                with_response_example, responses_with_content
            ));
            if with_response_example < responses_with_content {
                suggestions.push(
                    "Add response examples so clients can see real payloads".to_string(),
                );
            }
        } else {
            findings.push("No responses declare content".to_string());
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
    fn no_paths_short_circuits_to_zero() {
        let result = Examples.evaluate(&doc(json!({})));
        assert_eq!(result.score, 0);
        assert_eq!(result.findings, vec!["No paths defined".to_string()]);
    }

    #[test]
    fn schemaless_response_without_content_scores_zero() {
        let result = Examples.evaluate(&doc(json!({
            "paths": {"/test": {"get": {"responses": {"200": {"description": "ok"}}}}}
        })));
        assert_eq!(result.score, 0);
    }

    #[test]
    fn inline_and_named_examples_both_count() {
        let result = Examples.evaluate(&doc(json!({
            "paths": {"/pets": {
                "post": {
                    "requestBody": {"content": {"application/json": {
                        "examples": {"cat": {"value": {"name": "Whiskers"}}}
                    }}},
                    "responses": {"201": {"description": "created", "content": {
                        "application/json": {"example": {"id": 1}}
                    }}}
                }
            }}
        })));
        assert_eq!(result.score, 10);
    }

    #[test]
    fn partial_coverage_scores_proportionally() {
        let result = Examples.evaluate(&doc(json!({
            "paths": {"/pets": {
                "get": {"responses": {
                    "200": {"description": "ok", "content": {
                        "application/json": {"example": [{"id": 1}]}
                    }},
                    "404": {"description": "missing", "content": {
                        "application/json": {"schema": {"type": "object"}}
                    }}
                }}
            }}
        })));
        // No request bodies; 1 of 2 response content entries → 2.5 → 3.
        assert_eq!(result.score, 3);
    }
}
