use anyhow::{ensure, Context, Result};

use crate::matching::config::MatchWeights;
use crate::matching::ranker::DEFAULT_LIMIT;

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values abort startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Result size used when a ranking request does not name one.
    pub default_limit: i64,
    /// Upper bound on postings accepted in a single ranking request.
    pub max_postings: usize,
    pub weights: MatchWeights,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = MatchWeights::default();
        let weights = MatchWeights {
            skills: weight_env("MATCH_WEIGHT_SKILLS", defaults.skills)?,
            experience: weight_env("MATCH_WEIGHT_EXPERIENCE", defaults.experience)?,
            location: weight_env("MATCH_WEIGHT_LOCATION", defaults.location)?,
            job_type: weight_env("MATCH_WEIGHT_JOB_TYPE", defaults.job_type)?,
            major: weight_env("MATCH_WEIGHT_MAJOR", defaults.major)?,
            gpa: weight_env("MATCH_WEIGHT_GPA", defaults.gpa)?,
        };
        ensure!(weights.sum() > 0.0, "At least one MATCH_WEIGHT_* must be positive");

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            default_limit: optional_env("MATCH_DEFAULT_LIMIT", DEFAULT_LIMIT)?,
            max_postings: optional_env("MATCH_MAX_POSTINGS", 5000)?,
            weights,
        })
    }
}

fn optional_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value '{raw}'")),
        Err(_) => Ok(default),
    }
}

fn weight_env(key: &str, default: f64) -> Result<f64> {
    let weight = optional_env(key, default)?;
    ensure!(
        weight.is_finite() && weight >= 0.0,
        "Environment variable '{key}' must be a non-negative number, got {weight}"
    );
    Ok(weight)
}
