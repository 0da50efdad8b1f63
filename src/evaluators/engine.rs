//! Criterion execution engine
//!
//! Fans the seven rubric criteria out in parallel and collects their
//! results in rubric order. The criteria are pure and share no state,
//! so parallel and sequential execution are interchangeable; the only
//! requirement is that the aggregator sees all seven results.

use crate::evaluators::base::{Criterion, ProgressCallback};
use crate::evaluators::{
    BestPractices, Descriptions, Examples, PathsOperations, ResponseCodes, SchemaTypes, Security,
};
use crate::models::{CriterionResult, Document};
use rayon::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;
use tracing::{debug, info};

/// The full rubric in aggregation order. Maximums sum to 100.
pub fn all_criteria() -> Vec<Box<dyn Criterion>> {
    vec![
        Box::new(SchemaTypes),
        Box::new(Descriptions),
        Box::new(PathsOperations),
        Box::new(ResponseCodes),
        Box::new(Examples),
        Box::new(Security),
        Box::new(BestPractices),
    ]
}

/// Runs the rubric over one document.
pub struct ScoringEngine {
    criteria: Vec<Box<dyn Criterion>>,
    progress_callback: Option<ProgressCallback>,
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoringEngine {
    pub fn new() -> Self {
        Self {
            criteria: all_criteria(),
            progress_callback: None,
        }
    }

    /// Report each criterion's completion. Presentation only: pacing and
    /// callbacks never change computed scores.
    pub fn with_progress_callback(mut self, callback: ProgressCallback) -> Self {
        self.progress_callback = Some(callback);
        self
    }

    /// Evaluate every criterion and return results in rubric order.
    pub fn evaluate(&self, doc: &Document) -> Vec<CriterionResult> {
        let start = Instant::now();
        let total = self.criteria.len();
        let completed = AtomicUsize::new(0);

        // Order-preserving parallel map; results land in rubric order
        // no matter which criterion finishes first.
        let results: Vec<CriterionResult> = self
            .criteria
            .par_iter()
            .map(|criterion| {
                let result = criterion.evaluate(doc);
                let done = completed.fetch_add(1, Ordering::SeqCst) + 1;
                debug!(
                    "{}: {}/{} ({}%)",
                    criterion.name(),
                    result.score,
                    result.max_score,
                    result.percentage
                );
                if let Some(callback) = &self.progress_callback {
                    callback(criterion.name(), done, total);
                }
                result
            })
            .collect();

        info!(
            "Evaluated {} criteria in {:?}",
            results.len(),
            start.elapsed()
        );
        results
    }
}
