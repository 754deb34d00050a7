#![allow(dead_code)]

//! Match scoring — weighted comparison of a candidate profile against a job posting.
//!
//! Default: `WeightedMatchScorer` (pure, deterministic, no I/O).
//! `AppState` holds an `Arc<dyn MatchScorer>` so handlers never name the backend.
//!
//! Missing data never fails a call: absent inputs score `0` / no breakdown, and
//! absent fields fall back to zero or half credit per category.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::matching::breakdown::{
    round_to_tenth, ExperienceBreakdown, LocationBreakdown, MatchBreakdown,
    QualificationBreakdown, SkillsBreakdown, QUALIFICATION_NOT_SPECIFIED,
};
use crate::matching::skills::SkillOverlap;
use crate::matching::tenure::longest_tenure_years;
use crate::matching::weights::ScoringWeights;
use crate::models::candidate::Candidate;
use crate::models::job::JobPosting;

/// Credit given when one side of a comparison is unknown.
const PARTIAL_CREDIT: f64 = 0.5;

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Scores one (job, candidate) pair. Implementations must be pure so list
/// endpoints can call them per item without coordination.
pub trait MatchScorer: Send + Sync {
    /// 0–100. Returns `0` when either side is absent.
    fn percentage(&self, job: Option<&JobPosting>, candidate: Option<&Candidate>) -> u32;

    /// `None` when either side is absent.
    fn breakdown(
        &self,
        job: Option<&JobPosting>,
        candidate: Option<&Candidate>,
    ) -> Option<MatchBreakdown>;
}

// ────────────────────────────────────────────────────────────────────────────
// Category scores
// ────────────────────────────────────────────────────────────────────────────

/// Each category score in `[0, 1]` before weighting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryScores {
    pub skills: f64,
    pub experience: f64,
    pub location: f64,
    pub salary: f64,
}

impl CategoryScores {
    pub fn weighted_total(&self, weights: &ScoringWeights) -> f64 {
        self.skills * weights.skills
            + self.experience * weights.experience
            + self.location * weights.location
            + self.salary * weights.salary
    }
}

pub fn experience_score(required_years: f64, candidate_years: f64) -> f64 {
    if required_years <= 0.0 {
        return 1.0;
    }
    (candidate_years / required_years).min(1.0)
}

/// Case-insensitive city comparison; `None` when either side is unknown.
fn same_location(city: Option<&str>, location: Option<&str>) -> Option<bool> {
    match (city, location) {
        (Some(city), Some(location)) => Some(city.to_lowercase() == location.to_lowercase()),
        _ => None,
    }
}

pub fn location_score(job: &JobPosting, candidate: &Candidate) -> f64 {
    match same_location(candidate.city(), job.location()) {
        Some(true) => 1.0,
        Some(false) => 0.0,
        None => PARTIAL_CREDIT,
    }
}

pub fn salary_score(job: &JobPosting, candidate: &Candidate) -> f64 {
    match (candidate.expected_salary(), job.salary_range()) {
        (Some(expected), Some((from, to))) if expected >= from && expected <= to => 1.0,
        (Some(_), Some(_)) => 0.0,
        _ => PARTIAL_CREDIT,
    }
}

pub fn category_scores(job: &JobPosting, candidate: &Candidate, now: DateTime<Utc>) -> CategoryScores {
    let overlap = SkillOverlap::between(&job.skills, &candidate.skills);
    let years = longest_tenure_years(&candidate.experience, now);

    CategoryScores {
        skills: overlap.coverage(),
        experience: experience_score(job.required_years(), years),
        location: location_score(job, candidate),
        salary: salary_score(job, candidate),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// WeightedMatchScorer — default implementation
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default)]
pub struct WeightedMatchScorer {
    weights: ScoringWeights,
}

impl WeightedMatchScorer {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Same as [`MatchScorer::percentage`] with an explicit clock for open-ended tenures.
    pub fn percentage_at(
        &self,
        job: Option<&JobPosting>,
        candidate: Option<&Candidate>,
        now: DateTime<Utc>,
    ) -> u32 {
        let (Some(job), Some(candidate)) = (job, candidate) else {
            return 0;
        };

        let scores = category_scores(job, candidate, now);
        let total = scores.weighted_total(&self.weights);
        debug!(?scores, total, "match scored");

        total.round() as u32
    }

    pub fn breakdown_at(
        &self,
        job: Option<&JobPosting>,
        candidate: Option<&Candidate>,
        now: DateTime<Utc>,
    ) -> Option<MatchBreakdown> {
        let (job, candidate) = (job?, candidate?);

        let overlap = SkillOverlap::between(&job.skills, &candidate.skills);
        let required = job.required_years();
        let years = longest_tenure_years(&candidate.experience, now);

        let city = candidate.city();
        let location = job.location();
        // Two unknown locations compare equal on the badge.
        let location_matched =
            same_location(city, location).unwrap_or(city.is_none() && location.is_none());

        Some(MatchBreakdown {
            skills: SkillsBreakdown {
                matched: overlap.matched,
                unmatched: overlap.unmatched,
                all_job_skills: overlap.job_skills,
                all_user_skills: overlap.user_skills,
            },
            experience: ExperienceBreakdown {
                required,
                user_has: round_to_tenth(years),
                matched: required == 0.0 || years >= required,
            },
            location: LocationBreakdown {
                required: location.map(str::to_string),
                user_has: city.map(str::to_string),
                matched: location_matched,
            },
            qualification: QualificationBreakdown {
                required: job.qualification.clone(),
                user_has: candidate
                    .first_qualification()
                    .unwrap_or(QUALIFICATION_NOT_SPECIFIED)
                    .to_string(),
                matched: true,
            },
        })
    }
}

impl MatchScorer for WeightedMatchScorer {
    fn percentage(&self, job: Option<&JobPosting>, candidate: Option<&Candidate>) -> u32 {
        self.percentage_at(job, candidate, Utc::now())
    }

    fn breakdown(
        &self,
        job: Option<&JobPosting>,
        candidate: Option<&Candidate>,
    ) -> Option<MatchBreakdown> {
        self.breakdown_at(job, candidate, Utc::now())
    }
}

/// Match percentage with the default weights.
pub fn compute_match_percentage(job: Option<&JobPosting>, candidate: Option<&Candidate>) -> u32 {
    WeightedMatchScorer::default().percentage(job, candidate)
}

/// Match breakdown with the default weights.
pub fn compute_match_breakdown(
    job: Option<&JobPosting>,
    candidate: Option<&Candidate>,
) -> Option<MatchBreakdown> {
    WeightedMatchScorer::default().breakdown(job, candidate)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
