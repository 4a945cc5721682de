//! Field matchers — one per profile/posting attribute pair.
//!
//! Every matcher returns `None` when it is inapplicable (either side absent, blank, or
//! unparsable) and `Some(score)` with `score` in `[0, 1]` otherwise. Inapplicable is not
//! the same as zero: the aggregator drops the criterion from the weighted average.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::matching::config::MatchingConfig;
use crate::models::ExperienceLevel;

/// "minimum", "at least" or "require" followed, eventually, by a decimal number.
static GPA_REQUIREMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:minimum|at least|require)\D*?(\d+(?:\.\d+)?)")
        .expect("GPA requirement pattern is valid")
});

/// Returns the text untouched if it carries anything besides whitespace.
fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Fraction of the student's skills found (as lowercase substrings) in the qualifications.
///
/// Substring containment is intentional: "R" matches inside "Robotics". Skills are only
/// lowercased, never trimmed, and every skill counts towards the denominator.
pub fn skill_match(skills: &BTreeSet<String>, qualifications: Option<&str>) -> Option<f64> {
    if skills.is_empty() {
        return None;
    }
    let qualifications = present(qualifications)?.to_lowercase();

    let matched = skills
        .iter()
        .filter(|skill| qualifications.contains(skill.to_lowercase().as_str()))
        .count();

    Some(matched as f64 / skills.len() as f64)
}

/// Full credit when the student's level meets the job type's requirement, linear partial
/// credit below it.
pub fn experience_match(
    experience: Option<ExperienceLevel>,
    job_type: Option<&str>,
    config: &MatchingConfig,
) -> Option<f64> {
    let job_type = present(job_type)?;
    let student_level = config.experience_ordinal(experience?)?;
    let required_level = config.required_level(job_type);

    if student_level >= required_level {
        Some(1.0)
    } else {
        Some(f64::from(student_level) / f64::from(required_level))
    }
}

/// 1 when any preference and the posting location contain one another (case-insensitive).
pub fn location_match(preferences: &[String], location: Option<&str>) -> Option<f64> {
    let location = present(location)?.to_lowercase();
    if preferences.is_empty() {
        return None;
    }

    let hit = lowercased(preferences)
        .iter()
        .any(|p| location.contains(p.as_str()) || p.contains(location.as_str()));

    Some(if hit { 1.0 } else { 0.0 })
}

/// 1 when any preference equals the posting's job type (case-insensitive).
pub fn job_type_match(preferences: &[String], job_type: Option<&str>) -> Option<f64> {
    let job_type = present(job_type)?.to_lowercase();
    if preferences.is_empty() {
        return None;
    }

    let hit = lowercased(preferences).iter().any(|p| *p == job_type);
    Some(if hit { 1.0 } else { 0.0 })
}

/// 1 when the major and the posting field are equal or one contains the other.
pub fn major_match(major: Option<&str>, field: Option<&str>) -> Option<f64> {
    let major = present(major)?.to_lowercase();
    let field = present(field)?.to_lowercase();

    let hit = major == field || major.contains(&field) || field.contains(&major);
    Some(if hit { 1.0 } else { 0.0 })
}

/// Compares the student's GPA against a requirement stated in the qualifications text.
///
/// Inapplicable without qualifications text. Text that states no requirement means no
/// barrier: the criterion applies and scores 1.
pub fn gpa_match(gpa: Option<&str>, qualifications: Option<&str>) -> Option<f64> {
    let student_gpa = parse_gpa(gpa?)?;
    let qualifications = present(qualifications)?;

    let Some(required) = required_gpa(qualifications) else {
        return Some(1.0);
    };

    if student_gpa >= required {
        Some(1.0)
    } else if required > 0.0 {
        Some((student_gpa / required).clamp(0.0, 1.0))
    } else {
        Some(0.0)
    }
}

/// First GPA threshold stated in free text, if any.
pub fn required_gpa(qualifications: &str) -> Option<f64> {
    GPA_REQUIREMENT
        .captures(qualifications)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<f64>().ok())
}

fn parse_gpa(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn lowercased(values: &[String]) -> Vec<String> {
    values
        .iter()
        .map(|v| v.to_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn approx(actual: Option<f64>, expected: f64) {
        let actual = actual.expect("matcher should apply");
        assert!(
            (actual - expected).abs() < 1e-3,
            "expected {expected}, got {actual}"
        );
    }

    // ── skills ──────────────────────────────────────────────────────────────

    #[test]
    fn test_skill_match_counts_case_insensitive_substrings() {
        let score = skill_match(
            &skills(&["Python", "SQL", "Rust", "Go"]),
            Some("Experience with python and sql databases"),
        );
        approx(score, 0.5);
    }

    #[test]
    fn test_skill_match_substring_quirk_is_preserved() {
        approx(skill_match(&skills(&["R"]), Some("Robotics lab assistant")), 1.0);
    }

    #[test]
    fn test_skill_match_inapplicable_without_skills() {
        assert_eq!(skill_match(&skills(&[]), Some("Python")), None);
    }

    #[test]
    fn test_skill_match_does_not_trim_skills() {
        // "c " is not a substring of "c++ developer"; the denominator keeps every skill
        approx(skill_match(&skills(&["C ", "Go"]), Some("C++ developer")), 0.0);
        approx(skill_match(&skills(&["C ", "C++"]), Some("C++ developer")), 0.5);
    }

    #[test]
    fn test_skill_match_inapplicable_without_qualifications() {
        assert_eq!(skill_match(&skills(&["Python"]), None), None);
        assert_eq!(skill_match(&skills(&["Python"]), Some("   ")), None);
    }

    #[test]
    fn test_skill_match_zero_when_nothing_matches() {
        approx(skill_match(&skills(&["Haskell"]), Some("Java developer")), 0.0);
    }

    // ── experience ──────────────────────────────────────────────────────────

    #[test]
    fn test_experience_high_school_for_full_time_is_one_third() {
        let config = MatchingConfig::default();
        let score = experience_match(Some(ExperienceLevel::HighSchool), Some("Full-time"), &config);
        approx(score, 1.0 / 3.0);
    }

    #[test]
    fn test_experience_meeting_requirement_scores_one() {
        let config = MatchingConfig::default();
        approx(
            experience_match(Some(ExperienceLevel::Bachelor), Some("Full-time"), &config),
            1.0,
        );
        approx(
            experience_match(Some(ExperienceLevel::HighSchool), Some("Internship"), &config),
            1.0,
        );
    }

    #[test]
    fn test_experience_part_time_partial_credit() {
        let config = MatchingConfig::default();
        approx(
            experience_match(Some(ExperienceLevel::HighSchool), Some("Part-time"), &config),
            0.5,
        );
    }

    #[test]
    fn test_experience_unknown_job_type_requires_level_one() {
        let config = MatchingConfig::default();
        approx(
            experience_match(Some(ExperienceLevel::HighSchool), Some("Volunteer"), &config),
            1.0,
        );
    }

    #[test]
    fn test_experience_inapplicable_when_either_side_missing() {
        let config = MatchingConfig::default();
        assert_eq!(experience_match(None, Some("Full-time"), &config), None);
        assert_eq!(experience_match(Some(ExperienceLevel::Phd), None, &config), None);
    }

    #[test]
    fn test_experience_inapplicable_when_level_missing_from_table() {
        let mut config = MatchingConfig::default();
        config.experience_levels.remove(&ExperienceLevel::Master);
        assert_eq!(
            experience_match(Some(ExperienceLevel::Master), Some("Full-time"), &config),
            None
        );
    }

    // ── location ────────────────────────────────────────────────────────────

    #[test]
    fn test_location_match_either_direction() {
        approx(
            location_match(&strings(&["Boston"]), Some("Boston, MA")),
            1.0,
        );
        approx(
            location_match(&strings(&["Downtown Boston, MA"]), Some("boston")),
            1.0,
        );
    }

    #[test]
    fn test_location_mismatch_scores_zero() {
        approx(
            location_match(&strings(&["Denver", "Austin"]), Some("Seattle, WA")),
            0.0,
        );
    }

    #[test]
    fn test_location_inapplicable_without_inputs() {
        assert_eq!(location_match(&[], Some("Remote")), None);
        assert_eq!(location_match(&strings(&["Remote"]), None), None);
    }

    // ── job type ────────────────────────────────────────────────────────────

    #[test]
    fn test_job_type_match_is_case_insensitive_equality() {
        approx(
            job_type_match(&strings(&["Internship", "full-time"]), Some("Full-Time")),
            1.0,
        );
    }

    #[test]
    fn test_job_type_requires_equality_not_substring() {
        approx(job_type_match(&strings(&["Full"]), Some("Full-time")), 0.0);
    }

    #[test]
    fn test_job_type_inapplicable_without_inputs() {
        assert_eq!(job_type_match(&[], Some("Full-time")), None);
        assert_eq!(job_type_match(&strings(&["Full-time"]), None), None);
    }

    // ── major ───────────────────────────────────────────────────────────────

    #[test]
    fn test_major_match_equal_or_contained() {
        approx(major_match(Some("Computer Science"), Some("computer science")), 1.0);
        approx(major_match(Some("Computer Science"), Some("Science")), 1.0);
        approx(major_match(Some("Math"), Some("Applied Mathematics")), 1.0);
    }

    #[test]
    fn test_major_mismatch_scores_zero() {
        approx(major_match(Some("Biology"), Some("Finance")), 0.0);
    }

    #[test]
    fn test_major_inapplicable_when_absent() {
        assert_eq!(major_match(None, Some("Finance")), None);
        assert_eq!(major_match(Some("Finance"), Some(" ")), None);
    }

    // ── gpa ─────────────────────────────────────────────────────────────────

    #[test]
    fn test_gpa_meets_minimum() {
        approx(gpa_match(Some("3.8"), Some("minimum GPA of 3.5 required")), 1.0);
    }

    #[test]
    fn test_gpa_below_minimum_gets_partial_credit() {
        approx(
            gpa_match(Some("3.0"), Some("minimum GPA of 3.5 required")),
            3.0 / 3.5,
        );
    }

    #[test]
    fn test_gpa_without_stated_requirement_scores_one() {
        approx(gpa_match(Some("2.1"), Some("Python, teamwork, communication")), 1.0);
    }

    #[test]
    fn test_gpa_inapplicable_without_qualifications() {
        assert_eq!(gpa_match(Some("2.1"), None), None);
        assert_eq!(gpa_match(Some("2.1"), Some("   ")), None);
    }

    #[test]
    fn test_gpa_phrases_are_case_insensitive() {
        assert_eq!(required_gpa("GPA AT LEAST 3.2"), Some(3.2));
        assert_eq!(required_gpa("We Require a 3 GPA"), Some(3.0));
        assert_eq!(required_gpa("Minimum: 2.75 cumulative"), Some(2.75));
    }

    #[test]
    fn test_gpa_takes_first_stated_requirement() {
        assert_eq!(
            required_gpa("at least 3.0 overall and minimum 3.5 in major"),
            Some(3.0)
        );
    }

    #[test]
    fn test_gpa_inapplicable_when_unparsable() {
        assert_eq!(gpa_match(Some("four point oh"), Some("minimum 3.0")), None);
        assert_eq!(gpa_match(Some("NaN"), Some("minimum 3.0")), None);
        assert_eq!(gpa_match(Some("inf"), Some("minimum 3.0")), None);
        assert_eq!(gpa_match(None, Some("minimum 3.0")), None);
    }

    #[test]
    fn test_gpa_negative_clamps_to_zero() {
        approx(gpa_match(Some("-1.0"), Some("minimum 3.0")), 0.0);
    }

    #[test]
    fn test_gpa_zero_requirement_is_always_met() {
        approx(gpa_match(Some("0.0"), Some("minimum GPA 0")), 1.0);
    }
}
