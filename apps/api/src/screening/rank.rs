//! Ranking driver: runs extraction, matching, and scoring over an uploaded
//! batch and produces the ranked candidate table.

use serde::Serialize;
use tracing::warn;

use crate::screening::extract::{extract_text, DocumentFormat};
use crate::screening::score::calculate_score;
use crate::screening::skills::SkillVocabulary;

/// One uploaded resume, fully buffered.
#[derive(Debug, Clone)]
pub struct UploadedDocument {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Ranked result for one successfully processed resume.
#[derive(Debug, Clone, Serialize)]
pub struct CandidateResult {
    pub name: String,
    /// Match score in [0, 100], 2 decimals.
    pub score: f64,
    /// Sorted intersection of candidate skills and required skills.
    pub matching_skills: Vec<String>,
    pub file_name: String,
}

/// A document excluded from ranking, with the reason surfaced to the caller.
#[derive(Debug, Clone, Serialize)]
pub struct SkippedDocument {
    pub file_name: String,
    pub reason: String,
}

/// Output of one screening run.
#[derive(Debug, Clone, Serialize)]
pub struct ScreeningReport {
    /// Skills detected in the job description, sorted.
    pub required_skills: Vec<String>,
    /// Candidates sorted by score descending; ties keep upload order.
    pub candidates: Vec<CandidateResult>,
    pub skipped: Vec<SkippedDocument>,
}

/// Screens a batch of resumes against a job description.
///
/// Required skills are computed once from the job description. Each document
/// is processed independently: an unsupported extension or a failed
/// extraction skips that document with a reason and never aborts the batch.
pub fn rank(
    job_description: &str,
    documents: &[UploadedDocument],
    vocabulary: &SkillVocabulary,
) -> ScreeningReport {
    let required_skills = vocabulary.extract_skills(job_description);

    let mut candidates = Vec::new();
    let mut skipped = Vec::new();

    for doc in documents {
        let Some(format) = DocumentFormat::from_file_name(&doc.file_name) else {
            warn!("Skipping {}: unsupported file type", doc.file_name);
            skipped.push(SkippedDocument {
                file_name: doc.file_name.clone(),
                reason: "unsupported file type (expected .pdf or .txt)".to_string(),
            });
            continue;
        };

        let text = match extract_text(&doc.bytes, format) {
            Ok(text) => text,
            Err(e) => {
                warn!("Skipping {}: {e}", doc.file_name);
                skipped.push(SkippedDocument {
                    file_name: doc.file_name.clone(),
                    reason: e.to_string(),
                });
                continue;
            }
        };

        let candidate_skills = vocabulary.extract_skills(&text);
        let score = calculate_score(&candidate_skills, &required_skills);
        let matching_skills: Vec<String> = candidate_skills
            .intersection(&required_skills)
            .cloned()
            .collect();

        candidates.push(CandidateResult {
            name: candidate_name(&text),
            score,
            matching_skills,
            file_name: doc.file_name.clone(),
        });
    }

    // sort_by is stable, so equal scores keep upload order.
    candidates.sort_by(|a, b| b.score.total_cmp(&a.score));

    ScreeningReport {
        required_skills: required_skills.into_iter().collect(),
        candidates,
        skipped,
    }
}

/// First non-empty trimmed line of the resume text, used as the display name.
fn candidate_name(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .find(|l| !l.is_empty())
        .unwrap_or("Unknown Candidate")
        .to_string()
}
