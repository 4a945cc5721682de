//! Score Aggregator — weighted average of the field matchers over applicable criteria.
//!
//! `AppState` holds an `Arc<dyn MatchScorer>`; `WeightedMatchScorer` is the default and
//! only backend.

use serde::{Deserialize, Serialize};

use crate::matching::config::MatchingConfig;
use crate::matching::matchers::{
    experience_match, gpa_match, job_type_match, location_match, major_match, skill_match,
};
use crate::models::{JobPosting, StudentProfile};

// ────────────────────────────────────────────────────────────────────────────
// Output data models
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Criterion {
    Skills,
    Experience,
    Location,
    JobType,
    Major,
    Gpa,
}

/// One criterion's contribution. `score` is `None` when the criterion did not apply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CriterionScore {
    pub criterion: Criterion,
    pub weight: f64,
    pub score: Option<f64>,
}

/// Per-criterion view of a single score, returned alongside it for transparency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchBreakdown {
    pub criteria: Vec<CriterionScore>,
    pub applicable_weight: f64,
    pub matching_score: u32,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Scores one profile against one posting. Implementations must be pure: the same
/// inputs always give the same score.
pub trait MatchScorer: Send + Sync {
    fn breakdown(&self, profile: &StudentProfile, posting: &JobPosting) -> MatchBreakdown;

    /// Total over its inputs: a missing profile or posting scores 0.
    fn calculate_matching_score(
        &self,
        profile: Option<&StudentProfile>,
        posting: Option<&JobPosting>,
    ) -> u32 {
        match (profile, posting) {
            (Some(profile), Some(posting)) => self.breakdown(profile, posting).matching_score,
            _ => 0,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// WeightedMatchScorer
// ────────────────────────────────────────────────────────────────────────────

/// Algorithm:
/// 1. Run the six field matchers; drop the ones that are inapplicable
/// 2. total_weight = Σ weight over applicable criteria
/// 3. matching_score = round(100 × Σ(score × weight) / total_weight), or 0 if nothing applies
#[derive(Debug, Clone, Default)]
pub struct WeightedMatchScorer {
    config: MatchingConfig,
}

impl WeightedMatchScorer {
    pub fn new(config: MatchingConfig) -> Self {
        Self { config }
    }
}

impl MatchScorer for WeightedMatchScorer {
    fn breakdown(&self, profile: &StudentProfile, posting: &JobPosting) -> MatchBreakdown {
        let weights = &self.config.weights;
        let qualifications = posting.qualifications.as_deref();
        let job_type = posting.job_type.as_deref();

        let criteria = vec![
            CriterionScore {
                criterion: Criterion::Skills,
                weight: weights.skills,
                score: skill_match(&profile.skills, qualifications),
            },
            CriterionScore {
                criterion: Criterion::Experience,
                weight: weights.experience,
                score: experience_match(profile.experience, job_type, &self.config),
            },
            CriterionScore {
                criterion: Criterion::Location,
                weight: weights.location,
                score: location_match(&profile.location_preferences, posting.location.as_deref()),
            },
            CriterionScore {
                criterion: Criterion::JobType,
                weight: weights.job_type,
                score: job_type_match(&profile.job_type_preferences, job_type),
            },
            CriterionScore {
                criterion: Criterion::Major,
                weight: weights.major,
                score: major_match(profile.major.as_deref(), posting.field.as_deref()),
            },
            CriterionScore {
                criterion: Criterion::Gpa,
                weight: weights.gpa,
                score: gpa_match(profile.gpa.as_deref(), qualifications),
            },
        ];

        let (applicable_weight, raw_score) = criteria
            .iter()
            .filter_map(|c| c.score.map(|s| (c.weight, s * c.weight)))
            .fold((0.0_f64, 0.0_f64), |(total, raw), (w, ws)| (total + w, raw + ws));

        let matching_score = if applicable_weight > 0.0 {
            ((raw_score / applicable_weight) * 100.0).round().clamp(0.0, 100.0) as u32
        } else {
            0
        };

        MatchBreakdown {
            criteria,
            applicable_weight,
            matching_score,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
