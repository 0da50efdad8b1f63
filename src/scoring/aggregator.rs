//! Fan-in of the seven criterion results into a final grade.

use crate::models::{CriterionResult, Document, Grade, ScoringResult};

/// Criteria under this percentage are called out as weak areas.
pub const WEAK_AREA_THRESHOLD: u32 = 60;

/// At most this many weak areas are named, lowest first.
const MAX_WEAK_AREAS: usize = 3;

/// Combine the criterion results into the final scoring result.
///
/// The total is the sum of the already-rounded per-criterion scores;
/// nothing is re-rounded here.
pub fn aggregate(criteria: Vec<CriterionResult>, document: Document) -> ScoringResult {
    let total_score: u32 = criteria.iter().map(|c| c.score).sum();
    let grade = Grade::from_score(total_score);
    let feedback = build_feedback(total_score, &criteria);
    ScoringResult {
        criteria,
        total_score,
        grade,
        feedback,
        document,
    }
}

/// Narrative line for the total, using the same bands as the grade.
fn narrative(total_score: u32) -> &'static str {
    match total_score {
        t if t >= 80 => "Excellent. This API description is thorough and ready to share.",
        t if t >= 70 => "Good. A few gaps keep this from being an exemplary description.",
        t if t >= 60 => "Fair. The basics are in place but consumers will hit unknowns.",
        t if t >= 50 => "Poor. Significant parts of the API are undocumented.",
        _ => "Failing. The description needs substantial work before it is useful.",
    }
}

fn build_feedback(total_score: u32, criteria: &[CriterionResult]) -> Vec<String> {
    let mut feedback = vec![narrative(total_score).to_string()];

    let mut weak: Vec<&CriterionResult> = criteria
        .iter()
        .filter(|c| c.percentage < WEAK_AREA_THRESHOLD)
        .collect();
    // Stable sort: ties keep rubric order.
    weak.sort_by_key(|c| c.percentage);

    if !weak.is_empty() {
        let names: Vec<&str> = weak
            .iter()
            .take(MAX_WEAK_AREAS)
            .map(|c| c.name.as_str())
            .collect();
        feedback.push(format!("Weakest areas: {}", names.join(", ")));
    }
    feedback
}
