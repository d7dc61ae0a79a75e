use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use serde_json::json;

use super::domain::{ResourceId, SkillId};
use super::service::{
    InsightsError, LearningInsightsService, DEFAULT_MAX_POINTS, DEFAULT_MAX_SENTENCES,
    DEFAULT_RECOMMENDATION_LIMIT,
};

/// Router builder exposing the analytics endpoints over the shared service.
pub fn tracker_router<R>(service: Arc<LearningInsightsService<R>>) -> Router
where
    R: super::repository::LearningRepository + 'static,
{
    Router::new()
        .route(
            "/api/v1/resources/recommendations",
            get(recommend_resources_handler::<R>),
        )
        .route(
            "/api/v1/skills/:skill_id/resources/recommendations",
            get(recommend_by_skill_handler::<R>),
        )
        .route(
            "/api/v1/skills/recommendations",
            get(recommend_skills_handler::<R>),
        )
        .route(
            "/api/v1/resources/:resource_id/notes/digest",
            get(notes_digest_handler::<R>),
        )
        .route(
            "/api/v1/progress/weekly-summary",
            get(weekly_summary_handler::<R>),
        )
        .route("/api/v1/reports/weekly", get(weekly_report_handler::<R>))
        .route("/api/v1/dashboard/stats", get(dashboard_stats_handler::<R>))
        .route(
            "/api/v1/dashboard/skills",
            get(skills_breakdown_handler::<R>),
        )
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct RecommendationQuery {
    #[serde(default = "default_limit")]
    pub(crate) limit: usize,
}

fn default_limit() -> usize {
    DEFAULT_RECOMMENDATION_LIMIT
}

#[derive(Debug, Deserialize)]
pub(crate) struct DigestQuery {
    #[serde(default = "default_max_sentences")]
    pub(crate) max_sentences: usize,
    #[serde(default = "default_max_points")]
    pub(crate) max_points: usize,
}

fn default_max_sentences() -> usize {
    DEFAULT_MAX_SENTENCES
}

fn default_max_points() -> usize {
    DEFAULT_MAX_POINTS
}

/// `as_of` pins the report clock to a date, for reproducible output.
#[derive(Debug, Deserialize)]
pub(crate) struct ReportQuery {
    #[serde(default)]
    pub(crate) as_of: Option<NaiveDate>,
}

impl ReportQuery {
    fn resolve_now(&self) -> DateTime<Utc> {
        match self.as_of.and_then(|date| date.and_hms_opt(0, 0, 0)) {
            Some(naive) => DateTime::from_naive_utc_and_offset(naive, Utc),
            None => Utc::now(),
        }
    }
}

pub(crate) async fn recommend_resources_handler<R>(
    State(service): State<Arc<LearningInsightsService<R>>>,
    Query(query): Query<RecommendationQuery>,
) -> Response
where
    R: super::repository::LearningRepository + 'static,
{
    match service.recommend_resources(query.limit) {
        Ok(recommendations) => (StatusCode::OK, axum::Json(recommendations)).into_response(),
        Err(error) => service_error_response(error),
    }
}

pub(crate) async fn recommend_by_skill_handler<R>(
    State(service): State<Arc<LearningInsightsService<R>>>,
    Path(skill_id): Path<u64>,
    Query(query): Query<RecommendationQuery>,
) -> Response
where
    R: super::repository::LearningRepository + 'static,
{
    match service.recommend_resources_by_skill(SkillId(skill_id), query.limit) {
        Ok(recommendations) => (StatusCode::OK, axum::Json(recommendations)).into_response(),
        Err(error) => service_error_response(error),
    }
}

pub(crate) async fn recommend_skills_handler<R>(
    State(service): State<Arc<LearningInsightsService<R>>>,
    Query(query): Query<RecommendationQuery>,
) -> Response
where
    R: super::repository::LearningRepository + 'static,
{
    match service.recommend_skills(query.limit) {
        Ok(recommendations) => (StatusCode::OK, axum::Json(recommendations)).into_response(),
        Err(error) => service_error_response(error),
    }
}

pub(crate) async fn notes_digest_handler<R>(
    State(service): State<Arc<LearningInsightsService<R>>>,
    Path(resource_id): Path<u64>,
    Query(query): Query<DigestQuery>,
) -> Response
where
    R: super::repository::LearningRepository + 'static,
{
    match service.resource_notes_digest(
        ResourceId(resource_id),
        query.max_sentences,
        query.max_points,
    ) {
        Ok(Some(digest)) => (StatusCode::OK, axum::Json(digest)).into_response(),
        Ok(None) => {
            let payload = json!({ "error": "resource not found" });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(error) => service_error_response(error),
    }
}

pub(crate) async fn weekly_summary_handler<R>(
    State(service): State<Arc<LearningInsightsService<R>>>,
    Query(query): Query<ReportQuery>,
) -> Response
where
    R: super::repository::LearningRepository + 'static,
{
    let now = query.resolve_now();
    match service.weekly_summary(now) {
        Ok(summary) => {
            let payload = json!({ "summary": summary });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(error) => service_error_response(error),
    }
}

pub(crate) async fn weekly_report_handler<R>(
    State(service): State<Arc<LearningInsightsService<R>>>,
    Query(query): Query<ReportQuery>,
) -> Response
where
    R: super::repository::LearningRepository + 'static,
{
    let now = query.resolve_now();
    match service.weekly_report(now) {
        Ok(report) => {
            let payload = json!({
                "report_period": {
                    "start": (now - chrono::Duration::days(super::service::ACTIVITY_WINDOW_DAYS))
                        .format("%Y-%m-%d")
                        .to_string(),
                    "end": now.format("%Y-%m-%d").to_string(),
                },
                "report": report,
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(error) => service_error_response(error),
    }
}

pub(crate) async fn dashboard_stats_handler<R>(
    State(service): State<Arc<LearningInsightsService<R>>>,
    Query(query): Query<ReportQuery>,
) -> Response
where
    R: super::repository::LearningRepository + 'static,
{
    let now = query.resolve_now();
    match service.dashboard_stats(now) {
        Ok(stats) => (StatusCode::OK, axum::Json(stats)).into_response(),
        Err(error) => service_error_response(error),
    }
}

pub(crate) async fn skills_breakdown_handler<R>(
    State(service): State<Arc<LearningInsightsService<R>>>,
) -> Response
where
    R: super::repository::LearningRepository + 'static,
{
    match service.skills_breakdown() {
        Ok(breakdown) => (StatusCode::OK, axum::Json(breakdown)).into_response(),
        Err(error) => service_error_response(error),
    }
}

fn service_error_response(error: InsightsError) -> Response {
    let payload = json!({ "error": error.to_string() });
    (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
}
