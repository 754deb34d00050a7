pub mod health;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::matching::handlers;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {uri}"))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Match API
        .route("/api/v1/match/percentage", post(handlers::handle_percentage))
        .route("/api/v1/match/breakdown", post(handlers::handle_breakdown))
        .route(
            "/api/v1/match/applicants",
            post(handlers::handle_rank_applicants),
        )
        .route("/api/v1/match/jobs", post(handlers::handle_job_feed))
        .fallback(not_found)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::matching::scoring::WeightedMatchScorer;

    fn app() -> Router {
        let config = Config::from_lookup(|_| None).unwrap();
        let state = AppState {
            scorer: Arc::new(WeightedMatchScorer::new(config.weights)),
            config,
        };
        build_router(state)
    }

    async fn post_json(uri: &str, body: Value) -> (StatusCode, Value) {
        request(
            Request::post(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    async fn request(req: Request<Body>) -> (StatusCode, Value) {
        let response = app().oneshot(req).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn pune_job() -> Value {
        json!({
            "_id": "j1",
            "skills": ["React", "Node"],
            "experience": "3",
            "location": "Pune",
            "salaryRangeFrom": 500000,
            "salaryRangeTo": 800000,
            "qualification": "B.Tech"
        })
    }

    fn strong_candidate() -> Value {
        json!({
            "_id": "u1",
            "name": "Asha",
            "skills": ["react", "node", "sql"],
            "experience": [{ "startDate": "2019-01-01", "endDate": "2023-01-01" }],
            "location": { "city": "pune" },
            "expectedSalary": 700000
        })
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = request(Request::get("/health").body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["weights"]["skills"], 65.0);
    }

    #[tokio::test]
    async fn test_percentage_full_match() {
        let (status, body) = post_json(
            "/api/v1/match/percentage",
            json!({ "job": pune_job(), "candidate": strong_candidate() }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["matchPercentage"], 100);
    }

    #[tokio::test]
    async fn test_percentage_missing_candidate_is_zero() {
        let (status, body) =
            post_json("/api/v1/match/percentage", json!({ "job": pune_job() })).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["matchPercentage"], 0);
    }

    #[tokio::test]
    async fn test_breakdown_payload() {
        let (status, body) = post_json(
            "/api/v1/match/breakdown",
            json!({ "job": pune_job(), "candidate": strong_candidate() }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["breakdown"]["skills"]["matched"], json!(["react", "node"]));
        assert_eq!(body["breakdown"]["skills"]["unmatched"], json!([]));
        assert_eq!(body["breakdown"]["location"]["matched"], true);
        assert_eq!(body["breakdown"]["qualification"]["userHas"], "Not specified");
        assert_eq!(body["breakdown"]["qualification"]["matched"], true);
    }

    #[tokio::test]
    async fn test_breakdown_missing_job_is_null() {
        let (status, body) = post_json(
            "/api/v1/match/breakdown",
            json!({ "candidate": strong_candidate() }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["breakdown"].is_null());
        assert_eq!(body["matchPercentage"], 0);
    }

    #[tokio::test]
    async fn test_rank_applicants() {
        let (status, body) = post_json(
            "/api/v1/match/applicants",
            json!({
                "job": pune_job(),
                "applicants": [
                    { "_id": "u2", "name": "Bo", "status": "Interview" },
                    strong_candidate()
                ]
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["totalApplicants"], 2);
        assert_eq!(body["applicants"][0]["name"], "Asha");
        assert_eq!(body["applicants"][0]["matchPercentage"], 100);
        assert_eq!(body["applicants"][1]["progress"], 3);
    }

    #[tokio::test]
    async fn test_job_feed() {
        let (status, body) = post_json(
            "/api/v1/match/jobs",
            json!({ "candidate": strong_candidate(), "jobs": [pune_job(), {}] }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["jobs"][0]["matchPercentage"], 100);
        assert_eq!(body["jobs"][0]["_id"], Value::Null);
        assert_eq!(body["jobs"][0]["id"], "j1");
    }

    #[tokio::test]
    async fn test_malformed_body_is_validation_error() {
        let (status, body) = request(
            Request::post("/api/v1/match/percentage")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let (status, body) = request(Request::get("/api/v1/nope").body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }
}
