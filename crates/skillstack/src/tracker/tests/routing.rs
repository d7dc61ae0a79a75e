use std::sync::Arc;

use axum::body::Body;
use axum::extract::{Path, Query, State};
use axum::http::{Request, StatusCode};
use axum::response::Response;
use serde_json::Value;
use tower::util::ServiceExt;

use super::common::*;
use crate::tracker::domain::{Platform, ProgressStatus, ResourceKind};
use crate::tracker::router::{
    notes_digest_handler, recommend_by_skill_handler, recommend_resources_handler,
    weekly_report_handler, DigestQuery, RecommendationQuery, ReportQuery,
};
use crate::tracker::service::LearningInsightsService;
use crate::tracker::tracker_router;

async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

fn seeded_service() -> Arc<LearningInsightsService<MemoryRepository>> {
    let repository = MemoryRepository::with_skills(vec![skill(
        1,
        "Rust",
        vec![
            resource(
                1,
                "Rust Course",
                ResourceKind::Course,
                Platform::Udemy,
                Some(ProgressStatus::Completed),
            ),
            resource(2, "Rust Video", ResourceKind::Video, Platform::Youtube, None),
        ],
    )]);
    Arc::new(LearningInsightsService::new(Arc::new(repository)))
}

#[tokio::test]
async fn recommendations_endpoint_returns_scored_resources() {
    let response = recommend_resources_handler(
        State(seeded_service()),
        Query(RecommendationQuery { limit: 5 }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    let items = body.as_array().expect("array payload");
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["resource"]["title"], "Rust Course");
    assert_eq!(items[0]["score"], 13);
}

#[tokio::test]
async fn skill_scoped_recommendations_for_unknown_skill_are_empty() {
    let response = recommend_by_skill_handler(
        State(seeded_service()),
        Path(404),
        Query(RecommendationQuery { limit: 5 }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body.as_array().map(Vec::len), Some(0));
}

#[tokio::test]
async fn notes_digest_endpoint_reports_missing_resources() {
    let response = notes_digest_handler(
        State(seeded_service()),
        Path(404),
        Query(DigestQuery {
            max_sentences: 3,
            max_points: 5,
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = read_json_body(response).await;
    assert_eq!(body["error"], "resource not found");
}

#[tokio::test]
async fn weekly_report_endpoint_pins_the_clock_with_as_of() {
    let repository = MemoryRepository::default();
    let mut recent = entry(ProgressStatus::Completed, 2.0, Some("Rust"), Some("Book A"));
    recent.progress.updated_at = days_ago(1);
    repository.push_entries(vec![recent]);
    let service = Arc::new(LearningInsightsService::new(Arc::new(repository)));

    let response = weekly_report_handler(
        State(service),
        Query(ReportQuery {
            as_of: Some(now().date_naive()),
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["report_period"]["start"], "2025-11-07");
    assert_eq!(body["report_period"]["end"], "2025-11-14");
    let report = body["report"].as_str().expect("report text");
    assert!(report.contains("Report Period: 2025-11-07 to 2025-11-14"));
}

#[tokio::test]
async fn router_serves_weekly_summary_over_http() {
    let router = tracker_router(seeded_service());

    let response = router
        .oneshot(
            Request::builder()
                .uri("/api/v1/progress/weekly-summary?as_of=2025-11-14")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert!(body["summary"].as_str().is_some());
}

#[tokio::test]
async fn router_serves_dashboard_stats() {
    let router = tracker_router(seeded_service());

    let response = router
        .oneshot(
            Request::builder()
                .uri("/api/v1/dashboard/stats")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["total_skills"], 1);
    assert_eq!(body["total_resources"], 2);
    assert_eq!(body["completed_resources"], 1);
}
