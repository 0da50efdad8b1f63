//! Base criterion trait and shared types
//!
//! Every rubric category implements [`Criterion`]. Evaluators are pure:
//! the same document always produces the same result, and none of them
//! reads the clock, randomness, or anything outside the document.

use crate::models::{CriterionResult, Document};

/// One independently-scored rubric category.
///
/// Implementations are stateless unit structs; they hold no identity or
/// lifecycle beyond a single scoring call.
pub trait Criterion: Send + Sync {
    /// Display name used in results and reports.
    fn name(&self) -> &'static str;

    /// Fixed maximum contribution to the 100-point total.
    fn max_score(&self) -> u32;

    /// Walk the document and produce this criterion's result.
    ///
    /// Must not depend on any other criterion's output. The returned
    /// score is already rounded and clamped to `[0, max_score]`.
    fn evaluate(&self, doc: &Document) -> CriterionResult;
}

/// Progress callback: (criterion name, completed, total).
pub type ProgressCallback = Box<dyn Fn(&str, usize, usize) + Send + Sync>;
