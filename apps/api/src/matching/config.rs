use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::ExperienceLevel;

/// Relative weight of each criterion. Only criteria that apply to a given
/// profile/posting pair contribute to the denominator, so these need not sum to 100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchWeights {
    pub skills: f64,
    pub experience: f64,
    pub location: f64,
    pub job_type: f64,
    pub major: f64,
    pub gpa: f64,
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self {
            skills: 30.0,
            experience: 20.0,
            location: 15.0,
            job_type: 15.0,
            major: 10.0,
            gpa: 10.0,
        }
    }
}

impl MatchWeights {
    pub fn sum(&self) -> f64 {
        self.skills + self.experience + self.location + self.job_type + self.major + self.gpa
    }
}

/// Tables the aggregator scores against. Built once at startup and owned by the scorer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchingConfig {
    pub weights: MatchWeights,
    /// Ordinal level per education stage, 1 = least advanced.
    pub experience_levels: BTreeMap<ExperienceLevel, u8>,
    /// Required ordinal level per job type. Keys are lowercase.
    pub job_type_levels: BTreeMap<String, u8>,
    /// Required level for job types missing from `job_type_levels`.
    pub default_required_level: u8,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        let experience_levels = ExperienceLevel::ALL
            .iter()
            .zip(1u8..)
            .map(|(level, ordinal)| (*level, ordinal))
            .collect();

        let job_type_levels = [("internship", 1), ("part-time", 2), ("full-time", 3), ("contract", 3)]
            .into_iter()
            .map(|(job_type, level)| (job_type.to_string(), level))
            .collect();

        Self {
            weights: MatchWeights::default(),
            experience_levels,
            job_type_levels,
            default_required_level: 1,
        }
    }
}

impl MatchingConfig {
    pub fn with_weights(weights: MatchWeights) -> Self {
        Self {
            weights,
            ..Self::default()
        }
    }

    pub fn experience_ordinal(&self, level: ExperienceLevel) -> Option<u8> {
        self.experience_levels.get(&level).copied()
    }

    /// Case-insensitive lookup; unknown job types fall back to `default_required_level`.
    pub fn required_level(&self, job_type: &str) -> u8 {
        self.job_type_levels
            .get(&job_type.trim().to_lowercase())
            .copied()
            .unwrap_or(self.default_required_level)
    }
}
