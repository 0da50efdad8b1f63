//! Security criterion (10 points)
//!
//! Looks for declared security schemes, a global security requirement,
//! and per-operation overrides. Scheme internals are not inspected.

use crate::evaluators::access::{operations, plural, ratio};
use crate::evaluators::base::Criterion;
use crate::models::{CriterionResult, Document, Method};

const POINTS_PER_SCHEME: f64 = 2.0;
const POINTS_SCHEMES_CAP: f64 = 5.0;
const POINTS_GLOBAL: f64 = 3.0;
const POINTS_OVERRIDES: f64 = 2.0;

pub struct Security;

impl Criterion for Security {
    fn name(&self) -> &'static str {
        "Security"
    }

    fn max_score(&self) -> u32 {
        10
    }

    fn evaluate(&self, doc: &Document) -> CriterionResult {
        let mut findings = Vec::new();
        let mut suggestions = Vec::new();
        let mut score = 0.0;

        let scheme_count = doc.components.security_schemes.len();
        score += (scheme_count as f64 * POINTS_PER_SCHEME).min(POINTS_SCHEMES_CAP);
        if scheme_count > 0 {
            findings.push(format!(
                "{} defined",
                plural(scheme_count, "security scheme")
            ));
        } else {
            findings.push("No security schemes defined".to_string());
            suggestions.push(
                "Define at least one security scheme under components.securitySchemes"
                    .to_string(),
            );
        }

        let has_global = doc.security.as_ref().is_some_and(|s| !s.is_empty());
        if has_global {
            score += POINTS_GLOBAL;
            findings.push("Global security requirements declared".to_string());
        } else {
            findings.push("No global security requirements".to_string());
            suggestions.push(
                "Declare a top-level security requirement so auth applies by default"
                    .to_string(),
            );
        }

        let mut total_operations = 0usize;
        let mut with_override = 0usize;
        for opref in operations(doc, &Method::PRIMARY) {
            total_operations += 1;
            // Presence is what matters: an explicit empty list is still
            // an override of the global requirements.
            if opref.operation.security.is_some() {
                with_override += 1;
            }
        }
        score += ratio(with_override, total_operations) * POINTS_OVERRIDES;
        if with_override > 0 {
            findings.push(format!(
                "{} of {} operations override security explicitly",
                with_override, total_operations
            ));
        }

        CriterionResult::new(self.name(), score, self.max_score(), findings, suggestions)
    }
}
