use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Highest education level a student has reached. Ordered: later variants are more advanced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum ExperienceLevel {
    HighSchool,
    College,
    Bachelor,
    Master,
    Phd,
}

impl ExperienceLevel {
    pub const ALL: [ExperienceLevel; 5] = [
        ExperienceLevel::HighSchool,
        ExperienceLevel::College,
        ExperienceLevel::Bachelor,
        ExperienceLevel::Master,
        ExperienceLevel::Phd,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceLevel::HighSchool => "high_school",
            ExperienceLevel::College => "college",
            ExperienceLevel::Bachelor => "bachelor",
            ExperienceLevel::Master => "master",
            ExperienceLevel::Phd => "phd",
        }
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown experience level '{0}'")]
pub struct UnknownExperienceLevel(pub String);

impl FromStr for ExperienceLevel {
    type Err = UnknownExperienceLevel;

    /// Accepts the canonical snake_case names plus the spellings profile forms tend to
    /// produce ("High School", "Bachelor's", "Ph.D").
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let key: String = raw
            .trim()
            .to_lowercase()
            .chars()
            .filter_map(|c| match c {
                ' ' | '-' | '_' => Some('_'),
                '.' | '\'' => None,
                other => Some(other),
            })
            .collect();

        match key.as_str() {
            "high_school" | "highschool" => Ok(ExperienceLevel::HighSchool),
            "college" => Ok(ExperienceLevel::College),
            "bachelor" | "bachelors" => Ok(ExperienceLevel::Bachelor),
            "master" | "masters" => Ok(ExperienceLevel::Master),
            "phd" | "doctorate" => Ok(ExperienceLevel::Phd),
            _ => Err(UnknownExperienceLevel(raw.to_string())),
        }
    }
}

impl TryFrom<String> for ExperienceLevel {
    type Error = UnknownExperienceLevel;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// A student's job-seeking attributes. Every field is optional; an absent field makes the
/// matching criterion that reads it inapplicable instead of counting as a mismatch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StudentProfile {
    pub skills: BTreeSet<String>,
    pub experience: Option<ExperienceLevel>,
    pub location_preferences: Vec<String>,
    pub job_type_preferences: Vec<String>,
    pub major: Option<String>,
    /// Kept as text: forms submit it as a string and an unparsable value must not reject
    /// the whole profile.
    pub gpa: Option<String>,
}
