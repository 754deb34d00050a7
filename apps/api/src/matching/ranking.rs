//! List-level scoring: ordering a job's applicants and annotating a job feed.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::matching::scoring::MatchScorer;
use crate::models::candidate::Candidate;
use crate::models::job::JobPosting;
use crate::models::lenient;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApplicationStatus {
    #[default]
    Applied,
    #[serde(rename = "Under Review")]
    UnderReview,
    Interview,
    Accepted,
    Rejected,
}

impl ApplicationStatus {
    /// Stage shown on the applicant progress bar. Rejected applicants stay at the first stage.
    pub fn progress(&self) -> u8 {
        match self {
            ApplicationStatus::Applied => 1,
            ApplicationStatus::UnderReview => 2,
            ApplicationStatus::Interview => 3,
            ApplicationStatus::Accepted => 5,
            ApplicationStatus::Rejected => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub enum ApplicantSort {
    #[default]
    #[serde(rename = "matchPercentage")]
    MatchPercentage,
    #[serde(rename = "name")]
    Name,
}

/// A candidate profile together with their application to one job.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Applicant {
    #[serde(flatten)]
    pub candidate: Candidate,
    #[serde(default, deserialize_with = "lenient::default_on_null")]
    pub status: ApplicationStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub applied_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedApplicant {
    #[serde(flatten)]
    pub applicant: Applicant,
    pub match_percentage: u32,
    pub progress: u8,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredJob {
    #[serde(flatten)]
    pub job: JobPosting,
    pub match_percentage: u32,
}

/// Scores every applicant against `job` and orders them.
///
/// `MatchPercentage` sorts best match first; `Name` sorts alphabetically,
/// case-insensitive, unnamed applicants last. Both sorts are stable.
pub fn rank_applicants(
    scorer: &dyn MatchScorer,
    job: &JobPosting,
    applicants: Vec<Applicant>,
    sort: ApplicantSort,
) -> Vec<RankedApplicant> {
    let mut ranked: Vec<RankedApplicant> = applicants
        .into_iter()
        .map(|applicant| RankedApplicant {
            match_percentage: scorer.percentage(Some(job), Some(&applicant.candidate)),
            progress: applicant.status.progress(),
            applicant,
        })
        .collect();

    match sort {
        ApplicantSort::MatchPercentage => {
            ranked.sort_by(|a, b| b.match_percentage.cmp(&a.match_percentage))
        }
        ApplicantSort::Name => ranked.sort_by(|a, b| {
            compare_names(
                a.applicant.candidate.name.as_deref(),
                b.applicant.candidate.name.as_deref(),
            )
        }),
    }

    ranked
}

fn compare_names(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.to_lowercase().cmp(&b.to_lowercase()),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Annotates each job with the candidate's match percentage, keeping feed order.
pub fn score_job_feed(
    scorer: &dyn MatchScorer,
    jobs: Vec<JobPosting>,
    candidate: Option<&Candidate>,
) -> Vec<ScoredJob> {
    jobs.into_iter()
        .map(|job| ScoredJob {
            match_percentage: scorer.percentage(Some(&job), candidate),
            job,
        })
        .collect()
}
