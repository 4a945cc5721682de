use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One employer listing as stored by the posting collaborator.
///
/// Only the four text fields below feed the matcher. Anything else the caller sends
/// (salary, deadlines, description...) is carried through `extra` untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPosting {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    /// Free text that may embed a skills list and a GPA requirement phrase.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qualifications: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A posting with its 0–100 compatibility score attached.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredJobPosting {
    #[serde(flatten)]
    pub posting: JobPosting,
    pub matching_score: u32,
}

impl ScoredJobPosting {
    /// Attaches a fresh score. A `matchingScore` left over from an earlier ranking is
    /// dropped from the pass-through members so the output carries exactly one.
    pub fn new(mut posting: JobPosting, matching_score: u32) -> Self {
        posting.extra.remove("matchingScore");
        Self {
            posting,
            matching_score,
        }
    }
}
