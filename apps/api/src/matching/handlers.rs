//! Axum route handlers for the Matching API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::matching::aggregator::MatchBreakdown;
use crate::matching::ranker::get_top_matching_jobs;
use crate::models::{JobPosting, ScoredJobPosting, StudentProfile};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRequest {
    #[serde(default)]
    pub student_profile: Option<StudentProfile>,
    #[serde(default)]
    pub job_posting: Option<JobPosting>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResponse {
    pub matching_score: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<MatchBreakdown>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopMatchesRequest {
    #[serde(default)]
    pub student_profile: Option<StudentProfile>,
    #[serde(default)]
    pub job_postings: Vec<JobPosting>,
    pub limit: Option<i64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopMatchesResponse {
    pub matches: Vec<ScoredJobPosting>,
    /// Number of postings that were scored, before truncation.
    pub total: usize,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/matches/score
///
/// Scores one posting for one student. A missing profile or posting scores 0 and
/// carries no breakdown.
pub async fn handle_score(
    State(state): State<AppState>,
    Json(request): Json<ScoreRequest>,
) -> Result<Json<ScoreResponse>, AppError> {
    let response = match (&request.student_profile, &request.job_posting) {
        (Some(profile), Some(posting)) => {
            let breakdown = state.scorer.breakdown(profile, posting);
            ScoreResponse {
                matching_score: breakdown.matching_score,
                breakdown: Some(breakdown),
            }
        }
        _ => ScoreResponse {
            matching_score: 0,
            breakdown: None,
        },
    };

    Ok(Json(response))
}

/// POST /api/v1/matches/top
///
/// Ranks a batch of postings for one student and returns the best `limit` of them.
/// Scoring runs on the blocking pool so large batches do not stall the runtime.
pub async fn handle_top_matches(
    State(state): State<AppState>,
    Json(request): Json<TopMatchesRequest>,
) -> Result<Json<TopMatchesResponse>, AppError> {
    let total = request.job_postings.len();
    if total > state.config.max_postings {
        return Err(AppError::Validation(format!(
            "jobPostings has {total} entries; at most {} are accepted per request",
            state.config.max_postings
        )));
    }

    let limit = request.limit.unwrap_or(state.config.default_limit);
    let scorer = state.scorer.clone();
    let TopMatchesRequest {
        student_profile,
        job_postings,
        ..
    } = request;

    let matches = tokio::task::spawn_blocking(move || {
        get_top_matching_jobs(scorer.as_ref(), student_profile.as_ref(), job_postings, limit)
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("ranking task failed: {e}")))?;

    info!(total, limit, returned = matches.len(), "Top matches computed");

    Ok(Json(TopMatchesResponse { matches, total }))
}
