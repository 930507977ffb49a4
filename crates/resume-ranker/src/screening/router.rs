use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, patch, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::matching::{CandidateId, ScoreResult};

use super::intake::{IntakeError, ResumeUpload};
use super::job::JobUpdate;
use super::repository::{RepositoryError, ScreeningRepository};
use super::service::{CandidatePatch, ScreeningService, ScreeningServiceError};

/// Body for endpoints that add a single skill.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillRequest {
    pub skill: String,
}

/// Ranked output of an analysis run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResponse {
    pub results: Vec<ScoreResult>,
}

/// Router builder exposing HTTP endpoints for job setup, intake and analysis.
pub fn screening_router<R>(service: Arc<ScreeningService<R>>) -> Router
where
    R: ScreeningRepository + 'static,
{
    Router::new()
        .route(
            "/api/v1/job",
            get(job_handler::<R>).put(update_job_handler::<R>),
        )
        .route("/api/v1/job/skills", post(add_job_skill_handler::<R>))
        .route(
            "/api/v1/job/skills/:skill",
            delete(remove_job_skill_handler::<R>),
        )
        .route(
            "/api/v1/candidates",
            get(list_candidates_handler::<R>).post(upload_handler::<R>),
        )
        .route(
            "/api/v1/candidates/:candidate_id",
            patch(update_candidate_handler::<R>).delete(remove_candidate_handler::<R>),
        )
        .route(
            "/api/v1/candidates/:candidate_id/skills",
            post(add_candidate_skill_handler::<R>),
        )
        .route(
            "/api/v1/candidates/:candidate_id/skills/:skill",
            delete(remove_candidate_skill_handler::<R>),
        )
        .route("/api/v1/analyze", post(analyze_handler::<R>))
        .with_state(service)
}

pub(crate) async fn job_handler<R>(State(service): State<Arc<ScreeningService<R>>>) -> Response
where
    R: ScreeningRepository + 'static,
{
    respond(service.job(), StatusCode::OK)
}

pub(crate) async fn update_job_handler<R>(
    State(service): State<Arc<ScreeningService<R>>>,
    Json(update): Json<JobUpdate>,
) -> Response
where
    R: ScreeningRepository + 'static,
{
    respond(service.update_job(update), StatusCode::OK)
}

pub(crate) async fn add_job_skill_handler<R>(
    State(service): State<Arc<ScreeningService<R>>>,
    Json(request): Json<SkillRequest>,
) -> Response
where
    R: ScreeningRepository + 'static,
{
    respond(service.add_required_skill(&request.skill), StatusCode::OK)
}

pub(crate) async fn remove_job_skill_handler<R>(
    State(service): State<Arc<ScreeningService<R>>>,
    Path(skill): Path<String>,
) -> Response
where
    R: ScreeningRepository + 'static,
{
    respond(service.remove_required_skill(&skill), StatusCode::OK)
}

pub(crate) async fn list_candidates_handler<R>(
    State(service): State<Arc<ScreeningService<R>>>,
) -> Response
where
    R: ScreeningRepository + 'static,
{
    respond(service.candidates(), StatusCode::OK)
}

pub(crate) async fn upload_handler<R>(
    State(service): State<Arc<ScreeningService<R>>>,
    Json(upload): Json<ResumeUpload>,
) -> Response
where
    R: ScreeningRepository + 'static,
{
    respond(service.upload(upload), StatusCode::CREATED)
}

pub(crate) async fn update_candidate_handler<R>(
    State(service): State<Arc<ScreeningService<R>>>,
    Path(candidate_id): Path<String>,
    Json(changes): Json<CandidatePatch>,
) -> Response
where
    R: ScreeningRepository + 'static,
{
    let id = CandidateId(candidate_id);
    respond(service.update_candidate(&id, changes), StatusCode::OK)
}

pub(crate) async fn remove_candidate_handler<R>(
    State(service): State<Arc<ScreeningService<R>>>,
    Path(candidate_id): Path<String>,
) -> Response
where
    R: ScreeningRepository + 'static,
{
    let id = CandidateId(candidate_id);
    match service.remove_candidate(&id) {
        Ok(_) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn add_candidate_skill_handler<R>(
    State(service): State<Arc<ScreeningService<R>>>,
    Path(candidate_id): Path<String>,
    Json(request): Json<SkillRequest>,
) -> Response
where
    R: ScreeningRepository + 'static,
{
    let id = CandidateId(candidate_id);
    respond(
        service.add_candidate_skill(&id, &request.skill),
        StatusCode::OK,
    )
}

pub(crate) async fn remove_candidate_skill_handler<R>(
    State(service): State<Arc<ScreeningService<R>>>,
    Path((candidate_id, skill)): Path<(String, String)>,
) -> Response
where
    R: ScreeningRepository + 'static,
{
    let id = CandidateId(candidate_id);
    respond(service.remove_candidate_skill(&id, &skill), StatusCode::OK)
}

pub(crate) async fn analyze_handler<R>(State(service): State<Arc<ScreeningService<R>>>) -> Response
where
    R: ScreeningRepository + 'static,
{
    respond(
        service.analyze().map(|results| AnalysisResponse { results }),
        StatusCode::OK,
    )
}

fn respond<T: Serialize>(result: Result<T, ScreeningServiceError>, status: StatusCode) -> Response {
    match result {
        Ok(body) => (status, Json(body)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) fn error_response(error: ScreeningServiceError) -> Response {
    let status = match &error {
        ScreeningServiceError::Intake(IntakeError::UnsupportedType { .. }) => {
            StatusCode::UNSUPPORTED_MEDIA_TYPE
        }
        ScreeningServiceError::Intake(IntakeError::MissingFileName) => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        ScreeningServiceError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        ScreeningServiceError::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
        ScreeningServiceError::Repository(RepositoryError::Unavailable(_)) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    let payload = json!({
        "error": error.to_string(),
    });
    (status, Json(payload)).into_response()
}
