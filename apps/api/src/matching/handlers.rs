//! Axum route handlers for the Match API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::matching::breakdown::MatchBreakdown;
use crate::matching::ranking::{
    rank_applicants, score_job_feed, Applicant, ApplicantSort, RankedApplicant, ScoredJob,
};
use crate::models::candidate::Candidate;
use crate::models::job::JobPosting;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Either side may be omitted; the scorer answers with its sentinel values.
#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    #[serde(default)]
    pub job: Option<JobPosting>,
    #[serde(default)]
    pub candidate: Option<Candidate>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PercentageResponse {
    pub match_percentage: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakdownResponse {
    pub match_percentage: u32,
    pub breakdown: Option<MatchBreakdown>,
}

#[derive(Debug, Deserialize)]
pub struct RankApplicantsRequest {
    pub job: JobPosting,
    #[serde(default)]
    pub applicants: Vec<Applicant>,
    #[serde(default)]
    pub sort: ApplicantSort,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankApplicantsResponse {
    pub job: JobPosting,
    pub total_applicants: usize,
    pub applicants: Vec<RankedApplicant>,
}

#[derive(Debug, Deserialize)]
pub struct JobFeedRequest {
    #[serde(default)]
    pub candidate: Option<Candidate>,
    #[serde(default)]
    pub jobs: Vec<JobPosting>,
}

#[derive(Debug, Serialize)]
pub struct JobFeedResponse {
    pub jobs: Vec<ScoredJob>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/match/percentage
pub async fn handle_percentage(
    State(state): State<AppState>,
    payload: Result<Json<MatchRequest>, JsonRejection>,
) -> Result<Json<PercentageResponse>, AppError> {
    let Json(request) = payload?;

    let match_percentage = state
        .scorer
        .percentage(request.job.as_ref(), request.candidate.as_ref());

    Ok(Json(PercentageResponse { match_percentage }))
}

/// POST /api/v1/match/breakdown
///
/// Percentage plus the per-category detail used for match badges.
pub async fn handle_breakdown(
    State(state): State<AppState>,
    payload: Result<Json<MatchRequest>, JsonRejection>,
) -> Result<Json<BreakdownResponse>, AppError> {
    let Json(request) = payload?;
    let (job, candidate) = (request.job.as_ref(), request.candidate.as_ref());

    Ok(Json(BreakdownResponse {
        match_percentage: state.scorer.percentage(job, candidate),
        breakdown: state.scorer.breakdown(job, candidate),
    }))
}

/// POST /api/v1/match/applicants
///
/// Scores a job's applicants and returns them in the requested order.
pub async fn handle_rank_applicants(
    State(state): State<AppState>,
    payload: Result<Json<RankApplicantsRequest>, JsonRejection>,
) -> Result<Json<RankApplicantsResponse>, AppError> {
    let Json(request) = payload?;

    let applicants = rank_applicants(
        state.scorer.as_ref(),
        &request.job,
        request.applicants,
        request.sort,
    );
    info!(
        job_id = request.job.id.as_deref().unwrap_or("-"),
        count = applicants.len(),
        sort = ?request.sort,
        "ranked applicants"
    );

    Ok(Json(RankApplicantsResponse {
        job: request.job,
        total_applicants: applicants.len(),
        applicants,
    }))
}

/// POST /api/v1/match/jobs
///
/// Annotates a job feed with the candidate's match percentage for each posting.
pub async fn handle_job_feed(
    State(state): State<AppState>,
    payload: Result<Json<JobFeedRequest>, JsonRejection>,
) -> Result<Json<JobFeedResponse>, AppError> {
    let Json(request) = payload?;

    let jobs = score_job_feed(
        state.scorer.as_ref(),
        request.jobs,
        request.candidate.as_ref(),
    );

    Ok(Json(JobFeedResponse { jobs }))
}
