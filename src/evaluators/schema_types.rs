//! Schema & Types criterion (20 points)
//!
//! Rewards documents that define named schemas, give their object
//! schemas real property declarations, and attach schemas to the
//! request and response payloads that operations actually carry.

use crate::evaluators::access::{
    operations, plural, ratio, request_media_types, response_media_types,
};
use crate::evaluators::base::Criterion;
use crate::models::{CriterionResult, Document, Method};

const POINTS_ANY_SCHEMAS: f64 = 5.0;
const POINTS_PROPERLY_TYPED: f64 = 10.0;
const POINTS_SCHEMA_USAGE: f64 = 5.0;

pub struct SchemaTypes;

impl Criterion for SchemaTypes {
    fn name(&self) -> &'static str {
        "Schema & Types"
    }

    fn max_score(&self) -> u32 {
        20
    }

    fn evaluate(&self, doc: &Document) -> CriterionResult {
        let mut findings = Vec::new();
        let mut suggestions = Vec::new();
        let mut score = 0.0;

        let schemas = &doc.components.schemas;
        let count = schemas.len();

        if count > 0 {
            score += POINTS_ANY_SCHEMAS;
            findings.push(format!(
                "{} defined in components",
                plural(count, "named schema")
            ));
        } else {
            findings.push("No named schemas defined in components".to_string());
            suggestions.push(
                "Define reusable schemas under components.schemas and reference them from request and response bodies".to_string(),
            );
        }

        let properly_typed = schemas.values().filter(|s| s.is_properly_typed()).count();
        let free_form = schemas.values().filter(|s| s.is_free_form()).count();
        score += (ratio(properly_typed, count) * POINTS_PROPERLY_TYPED).min(POINTS_PROPERLY_TYPED);

        if count > 0 {
            findings.push(format!(
                "{} of {} object schemas declare their properties",
                properly_typed, count
            ));
        }
        // Free-form objects never change the score, only the feedback.
        if free_form > 0 {
            findings.push(format!(
                "{} free-form (type: object with no properties and no additionalProperties)",
                plural(free_form, "schema")
            ));
            suggestions.push(
                "Declare properties (or an explicit additionalProperties constraint) for free-form object schemas".to_string(),
            );
        }

        let mut usages = 0usize;
        let mut total_operations = 0usize;
        for opref in operations(doc, &Method::PRIMARY) {
            total_operations += 1;
            usages += request_media_types(opref.operation)
                .filter(|mt| mt.schema.is_some())
                .count();
            usages += response_media_types(opref.operation)
                .filter(|mt| mt.schema.is_some())
                .count();
        }
        // Up to two schema-bearing slots per operation: request + response.
        score += (ratio(usages, total_operations * 2) * POINTS_SCHEMA_USAGE)
            .min(POINTS_SCHEMA_USAGE);

        if total_operations > 0 {
            findings.push(format!(
                "{} across {}",
                plural(usages, "schema usage"),
                plural(total_operations, "operation")
            ));
            if usages == 0 {
                suggestions.push(
                    "Attach schemas to request and response content so payloads are machine-verifiable".to_string(),
                );
            }
        }

        CriterionResult::new(self.name(), score, self.max_score(), findings, suggestions)
    }
}
