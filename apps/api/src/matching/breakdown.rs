//! Per-category match detail backing the match/no-match badges.

use serde::{Deserialize, Serialize};

pub const QUALIFICATION_NOT_SPECIFIED: &str = "Not specified";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillsBreakdown {
    pub matched: Vec<String>,
    pub unmatched: Vec<String>,
    pub all_job_skills: Vec<String>,
    pub all_user_skills: Vec<String>,
}

/// `matched` is a pass/fail gate, coarser than the fractional experience score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceBreakdown {
    pub required: f64,
    /// Longest tenure, rounded to one decimal place.
    pub user_has: f64,
    pub matched: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationBreakdown {
    pub required: Option<String>,
    pub user_has: Option<String>,
    pub matched: bool,
}

/// Display only. Qualification is never scored and always reports matched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualificationBreakdown {
    pub required: Option<String>,
    pub user_has: String,
    pub matched: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchBreakdown {
    pub skills: SkillsBreakdown,
    pub experience: ExperienceBreakdown,
    pub location: LocationBreakdown,
    pub qualification: QualificationBreakdown,
}

pub(crate) fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
