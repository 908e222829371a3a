//! Match score: the percentage of the job's required skills that a candidate
//! covers. The denominator is always the required set.

use std::collections::BTreeSet;

/// Percentage of `required_skills` present in `candidate_skills`, in
/// [0, 100], rounded to 2 decimals (half away from zero, which for these
/// non-negative values is round-half-up).
///
/// An empty required set scores 0 rather than dividing by zero, so a job
/// description with no recognizable skills ranks every candidate at 0.
pub fn calculate_score(
    candidate_skills: &BTreeSet<String>,
    required_skills: &BTreeSet<String>,
) -> f64 {
    if required_skills.is_empty() {
        return 0.0;
    }
    let matching = candidate_skills.intersection(required_skills).count();
    let score = (matching as f64 / required_skills.len() as f64) * 100.0;
    (score * 100.0).round() / 100.0
}
