//! Descriptions & Documentation criterion (20 points)
//!
//! Checks prose coverage at every level of the tree: the document
//! itself, each operation, each parameter, each response entry, and
//! each path item. Trivially short descriptions do not count at the
//! document and operation level.

use crate::evaluators::access::{operations, ratio};
use crate::evaluators::base::Criterion;
use crate::models::{CriterionResult, Document, Method};

const POINTS_API_DESCRIPTION: f64 = 3.0;
const POINTS_OPERATIONS: f64 = 8.0;
const POINTS_PARAMETERS: f64 = 4.0;
const POINTS_RESPONSES: f64 = 3.0;
const POINTS_PATH_ITEMS: f64 = 2.0;

/// Minimum length for a document description to count as substantive.
const MIN_API_DESCRIPTION_LEN: usize = 10;
/// Minimum length for an operation description to count.
const MIN_OPERATION_DESCRIPTION_LEN: usize = 5;

pub struct Descriptions;

impl Criterion for Descriptions {
    fn name(&self) -> &'static str {
        "Descriptions & Documentation"
    }

    fn max_score(&self) -> u32 {
        20
    }

    fn evaluate(&self, doc: &Document) -> CriterionResult {
        let mut findings = Vec::new();
        let mut suggestions = Vec::new();
        let mut score = 0.0;

        let has_api_description = doc
            .info
            .description
            .as_deref()
            .is_some_and(|d| d.len() > MIN_API_DESCRIPTION_LEN);
        if has_api_description {
            score += POINTS_API_DESCRIPTION;
            findings.push("API has a top-level description".to_string());
        } else {
            findings.push("API is missing a substantive top-level description".to_string());
            suggestions.push(
                "Add an info.description explaining what the API does and who it is for"
                    .to_string(),
            );
        }

        let mut total_ops = 0usize;
        let mut ops_described = 0usize;
        let mut total_params = 0usize;
        let mut params_described = 0usize;
        let mut total_responses = 0usize;
        let mut responses_described = 0usize;

        for opref in operations(doc, &Method::ALL) {
            let op = opref.operation;
            total_ops += 1;
            if op
                .description
                .as_deref()
                .is_some_and(|d| d.len() > MIN_OPERATION_DESCRIPTION_LEN)
            {
                ops_described += 1;
            }
            for param in &op.parameters {
                total_params += 1;
                if param.description.as_deref().is_some_and(|d| !d.is_empty()) {
                    params_described += 1;
                }
            }
            for response in op.responses.values() {
                total_responses += 1;
                if response
                    .description
                    .as_deref()
                    .is_some_and(|d| !d.is_empty())
                {
                    responses_described += 1;
                }
            }
        }

        score += ratio(ops_described, total_ops) * POINTS_OPERATIONS;
        score += ratio(params_described, total_params) * POINTS_PARAMETERS;
        score += ratio(responses_described, total_responses) * POINTS_RESPONSES;

        if total_ops > 0 {
            findings.push(format!(
                "{} of {} operations have descriptions",
                ops_described, total_ops
            ));
            if ops_described < total_ops {
                suggestions.push("Describe every operation, not just its summary".to_string());
            }
        }
        if total_params > 0 {
            findings.push(format!(
                "{} of {} parameters have descriptions",
                params_described, total_params
            ));
            if params_described < total_params {
                suggestions
                    .push("Document each parameter's meaning, format, and constraints".to_string());
            }
        }
        if total_responses > 0 {
            findings.push(format!(
                "{} of {} responses have descriptions",
                responses_described, total_responses
            ));
        }

        let total_path_items = doc.paths.len();
        let path_items_described = doc
            .paths
            .values()
            .filter(|item| item.description.as_deref().is_some_and(|d| !d.is_empty()))
            .count();
        score += ratio(path_items_described, total_path_items) * POINTS_PATH_ITEMS;
        if total_path_items > 0 && path_items_described < total_path_items {
            findings.push(format!(
                "{} of {} path items have path-level descriptions",
                path_items_described, total_path_items
            ));
        }

        CriterionResult::new(self.name(), score, self.max_score(), findings, suggestions)
    }
}
