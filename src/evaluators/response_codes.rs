//! Response Codes criterion (15 points)
//!
//! Every operation should say what success looks like, what failure
//! looks like, and distinguish more than one outcome. Canonical
//! status-code coverage is reported but never scored.

use crate::evaluators::access::{operations, ratio};
use crate::evaluators::base::Criterion;
use crate::models::{CriterionResult, Document, Method};
use std::collections::BTreeSet;

const POINTS_SUCCESS: f64 = 6.0;
const POINTS_ERROR: f64 = 6.0;
const POINTS_MULTIPLE: f64 = 3.0;

const CANONICAL_SUCCESS: [&str; 4] = ["200", "201", "202", "204"];
const CANONICAL_ERRORS: [&str; 7] = ["400", "401", "403", "404", "409", "422", "500"];

pub struct ResponseCodes;

impl Criterion for ResponseCodes {
    fn name(&self) -> &'static str {
        "Response Codes"
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
                vec!["Define operations with documented response codes".to_string()],
            );
        }

        let mut findings = Vec::new();
        let mut suggestions = Vec::new();

        let mut total = 0usize;
        let mut has_success = 0usize;
        let mut has_error = 0usize;
        let mut has_multiple = 0usize;
        let mut codes_used: BTreeSet<String> = BTreeSet::new();

        for opref in operations(doc, &Method::PRIMARY) {
            total += 1;
            let codes: Vec<&str> = opref
                .operation
                .responses
                .keys()
                .map(String::as_str)
                .collect();
            if codes.iter().any(|c| c.starts_with('2')) {
                has_success += 1;
            }
            if codes
                .iter()
                .any(|c| c.starts_with('4') || c.starts_with('5'))
            {
                has_error += 1;
            }
            if codes.len() > 1 {
                has_multiple += 1;
            }
            codes_used.extend(codes.iter().map(|c| c.to_string()));
        }

        let score = ratio(has_success, total) * POINTS_SUCCESS
            + ratio(has_error, total) * POINTS_ERROR
            + ratio(has_multiple, total) * POINTS_MULTIPLE;

        findings.push(format!(
            "{} of {} operations document a success response",
            has_success, total
        ));
        findings.push(format!(
            "{} of {} operations document an error response",
            has_error, total
        ));
        if has_error < total {
            suggestions.push(
                "Document error responses (4xx/5xx) so clients can handle failures".to_string(),
            );
        }
        if has_multiple < total {
            suggestions.push(
                "Document more than one outcome per operation where behavior differs".to_string(),
            );
        }

        // Canonical coverage is advisory only.
        let uses_canonical_success = CANONICAL_SUCCESS
            .iter()
            .any(|c| codes_used.contains(*c));
        let uses_canonical_error = CANONICAL_ERRORS.iter().any(|c| codes_used.contains(*c));
        if !uses_canonical_success {
            findings.push("No canonical success codes (200/201/202/204) in use".to_string());
        }
        if !uses_canonical_error {
            findings.push(
                "No canonical error codes (400/401/403/404/409/422/500) in use".to_string(),
            );
            suggestions
                .push("Prefer standard error codes over custom or uncommon ones".to_string());
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
        let result = ResponseCodes.evaluate(&doc(json!({})));
        assert_eq!(result.score, 0);
        assert_eq!(result.findings, vec!["No paths defined".to_string()]);
    }

    #[test]
    fn success_only_operation_earns_the_success_term() {
        let result = ResponseCodes.evaluate(&doc(json!({
            "paths": {"/test": {"get": {"responses": {"200": {"description": "ok"}}}}}
        })));
        // 6 for success, nothing for errors or multiple outcomes.
        assert_eq!(result.score, 6);
    }

    #[test]
    fn full_coverage_maxes_the_criterion() {
        let result = ResponseCodes.evaluate(&doc(json!({
            "paths": {"/items": {
                "get": {"responses": {
                    "200": {"description": "ok"},
                    "404": {"description": "missing"}
                }},
                "post": {"responses": {
                    "201": {"description": "created"},
                    "400": {"description": "bad"}
                }}
            }}
        })));
        assert_eq!(result.score, 15);
        assert_eq!(result.percentage, 100);
    }

    #[test]
    fn uncommon_codes_are_flagged_but_still_scored() {
        let result = ResponseCodes.evaluate(&doc(json!({
            "paths": {"/x": {"get": {"responses": {
                "299": {"description": "weird success"},
                "499": {"description": "weird error"}
            }}}}
        })));
        // starts-with classification still awards 6 + 6 + 3.
        assert_eq!(result.score, 15);
        assert!(result
            .findings
            .iter()
            .any(|f| f.contains("canonical success")));
        assert!(result.findings.iter().any(|f| f.contains("canonical error")));
    }
}
