//! Document scoring
//!
//! The orchestrator fans the seven criteria out over the document and
//! hands the collected results to the aggregator:
//!
//! ```text
//! Document → [criterion₁ … criterion₇] → aggregate → ScoringResult
//! ```
//!
//! Scoring is a single deterministic, synchronous computation over an
//! immutable document: no I/O, no clock, no randomness. The total is
//! the sum of the seven rounded criterion scores against maximums
//! 20+20+15+15+10+10+10 = 100, and the grade follows the fixed
//! 80/70/60/50 bands.

mod aggregator;

pub use aggregator::{aggregate, WEAK_AREA_THRESHOLD};

use crate::evaluators::ScoringEngine;
use crate::models::{Document, ScoringResult};

/// Score a document with a default engine.
pub fn score_document(document: Document) -> ScoringResult {
    score_with_engine(&ScoringEngine::new(), document)
}

/// Score a document with a caller-configured engine (progress
/// callbacks, etc.). The engine borrows the document during the
/// fan-out; ownership moves into the result afterwards.
pub fn score_with_engine(engine: &ScoringEngine, document: Document) -> ScoringResult {
    let criteria = engine.evaluate(&document);
    aggregate(criteria, document)
}
