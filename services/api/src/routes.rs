use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use resume_ranker::screening::{screening_router, ScreeningRepository, ScreeningService};
use resume_ranker::{Candidate, ScoreResult};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use tracing::debug;

/// One-shot ranking request that bypasses the stored candidate pool.
#[derive(Debug, Deserialize)]
pub(crate) struct RankRequest {
    #[serde(default)]
    pub(crate) required_skills: Vec<String>,
    #[serde(default)]
    pub(crate) candidates: Vec<Candidate>,
}

#[derive(Debug, Serialize)]
pub(crate) struct RankResponse {
    pub(crate) results: Vec<ScoreResult>,
}

pub(crate) fn with_service_routes<R>(service: Arc<ScreeningService<R>>) -> axum::Router
where
    R: ScreeningRepository + 'static,
{
    screening_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route("/api/v1/rank", axum::routing::post(rank_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn rank_endpoint(
    Extension(state): Extension<AppState>,
    Json(payload): Json<RankRequest>,
) -> Json<RankResponse> {
    let RankRequest {
        required_skills,
        candidates,
    } = payload;

    debug!(
        candidates = candidates.len(),
        required_skills = required_skills.len(),
        "stateless rank request"
    );
    let results = state.engine.rank(&candidates, &required_skills);
    Json(RankResponse { results })
}
