//! Ranker — scores a batch of postings for one student and keeps the top `limit`.

use tracing::debug;

use crate::matching::aggregator::MatchScorer;
use crate::models::{JobPosting, ScoredJobPosting, StudentProfile};

pub const DEFAULT_LIMIT: i64 = 10;

/// Scores every posting, sorts descending by score and truncates to `limit`.
///
/// The sort is stable: postings with equal scores keep their input order.
/// `limit <= 0` yields an empty result; a limit past the end returns everything.
pub fn get_top_matching_jobs(
    scorer: &dyn MatchScorer,
    profile: Option<&StudentProfile>,
    postings: Vec<JobPosting>,
    limit: i64,
) -> Vec<ScoredJobPosting> {
    if limit <= 0 {
        return Vec::new();
    }
    let limit = usize::try_from(limit).unwrap_or(usize::MAX);
    let candidates = postings.len();

    let mut scored: Vec<ScoredJobPosting> = postings
        .into_iter()
        .map(|posting| {
            let matching_score = scorer.calculate_matching_score(profile, Some(&posting));
            ScoredJobPosting::new(posting, matching_score)
        })
        .collect();

    scored.sort_by(|a, b| b.matching_score.cmp(&a.matching_score));
    scored.truncate(limit);

    debug!(
        candidates,
        returned = scored.len(),
        top_score = scored.first().map(|s| s.matching_score),
        "Ranked job postings"
    );

    scored
}
