//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the service
//! layer for business logic.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use super::dto::{
    BestHoursQuery, BestHoursResponse, CandidateListResponse, CrewListResponse, ForecastResponse,
    HealthResponse, NetworkLoadResponse, OptimalScheduleRequest, OptimalScheduleResponse,
    PatchListResponse, PatchScoreQuery, PatchScoreResponse, PlanRequest, SchedulePlan,
    SystemStats, DEFAULT_BEST_HOURS_LIMIT,
};
use super::error::AppError;
use super::state::AppState;
use crate::db::repository::FullRepository;
use crate::db::services as db_services;
use crate::models::{NewPatch, Patch, PatchId};
use crate::routes::optimal_schedule::sample_request as sample_request_body;
use crate::services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let backend = state.repository.backend_name();
    let repo_status = match db_services::health_check(state.repository.as_ref()).await {
        Ok(true) => format!("{}: ok", backend),
        Ok(false) => format!("{}: unavailable", backend),
        Err(e) => format!("{}: error: {}", backend, e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        repository: repo_status,
    }))
}

// =============================================================================
// Window Selection
// =============================================================================

/// POST /v1/optimal-schedule
///
/// Best start hour for the given crew and load series.
pub async fn optimal_schedule(
    payload: Result<Json<OptimalScheduleRequest>, JsonRejection>,
) -> HandlerResult<OptimalScheduleResponse> {
    let Json(request) = payload?;
    let response = services::optimal_schedule(&request)?;
    tracing::info!(
        best_start_hour = response.best_start_hour,
        score = response.score,
        duration = request.patch_duration_hours,
        "optimal window selected"
    );
    Ok(Json(response))
}

/// POST /v1/optimal-schedule/candidates
///
/// Every feasible start hour, best first.
pub async fn rank_candidates(
    payload: Result<Json<OptimalScheduleRequest>, JsonRejection>,
) -> HandlerResult<CandidateListResponse> {
    let Json(request) = payload?;
    let response = services::rank_candidates(&request)?;
    tracing::debug!(total = response.total, "ranked candidate windows");
    Ok(Json(response))
}

/// GET /v1/optimal-schedule/sample
pub async fn sample_request() -> Json<OptimalScheduleRequest> {
    Json(sample_request_body())
}

// =============================================================================
// Patch Catalog
// =============================================================================

/// GET /v1/patches
pub async fn list_patches(State(state): State<AppState>) -> HandlerResult<PatchListResponse> {
    let patches = db_services::list_patches(state.repository.as_ref()).await?;
    let total = patches.len();
    Ok(Json(PatchListResponse { patches, total }))
}

/// POST /v1/patches
pub async fn create_patch(
    State(state): State<AppState>,
    payload: Result<Json<NewPatch>, JsonRejection>,
) -> Result<(StatusCode, Json<Patch>), AppError> {
    let Json(request) = payload?;
    let patch = db_services::create_patch(state.repository.as_ref(), request).await?;
    tracing::info!(patch_id = %patch.id, name = %patch.name, "patch created");
    Ok((StatusCode::CREATED, Json(patch)))
}

/// GET /v1/patches/{id}
pub async fn get_patch(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> HandlerResult<Patch> {
    let Path(id) = id.map_err(|rejection| AppError::invalid_path("id", rejection))?;
    let patch = db_services::get_patch(state.repository.as_ref(), PatchId::new(id)).await?;
    Ok(Json(patch))
}

/// GET /v1/patches/{id}/score?day=&hour=
///
/// Multi-factor priority score of a stored patch at one hour of one day.
pub async fn score_patch(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    query: Result<Query<PatchScoreQuery>, QueryRejection>,
) -> HandlerResult<PatchScoreResponse> {
    let Path(id) = id.map_err(|rejection| AppError::invalid_path("id", rejection))?;
    let Query(query) = query?;
    let response = db_services::score_stored_patch(
        state.repository.as_ref(),
        PatchId::new(id),
        query.day,
        query.hour,
        &state.config.scoring,
    )
    .await?;
    Ok(Json(response))
}

// =============================================================================
// Roster and Load Profile
// =============================================================================

/// GET /v1/crew
pub async fn list_crew(State(state): State<AppState>) -> HandlerResult<CrewListResponse> {
    let crew = db_services::list_crew(state.repository.as_ref()).await?;
    let total = crew.len();
    Ok(Json(CrewListResponse { crew, total }))
}

/// GET /v1/network-load
pub async fn list_network_loads(
    State(state): State<AppState>,
) -> HandlerResult<NetworkLoadResponse> {
    let loads = db_services::fetch_network_loads(state.repository.as_ref()).await?;
    let total = loads.len();
    Ok(Json(NetworkLoadResponse { loads, total }))
}

/// GET /v1/best-hours?limit=
pub async fn best_hours(
    State(state): State<AppState>,
    query: Result<Query<BestHoursQuery>, QueryRejection>,
) -> HandlerResult<BestHoursResponse> {
    let Query(query) = query?;
    let limit = query.limit.unwrap_or(DEFAULT_BEST_HOURS_LIMIT);
    let response = db_services::best_hours(state.repository.as_ref(), limit).await?;
    Ok(Json(response))
}

/// GET /v1/stats
pub async fn get_stats(State(state): State<AppState>) -> HandlerResult<SystemStats> {
    let stats = db_services::system_stats(state.repository.as_ref()).await?;
    Ok(Json(stats))
}

/// GET /v1/forecast/{day}
pub async fn get_forecast(
    State(state): State<AppState>,
    day: Result<Path<usize>, PathRejection>,
) -> HandlerResult<ForecastResponse> {
    let Path(day) = day.map_err(|rejection| AppError::invalid_path("day", rejection))?;
    let forecast = db_services::forecast_day(state.repository.as_ref(), day).await?;
    Ok(Json(forecast))
}

// =============================================================================
// Plans
// =============================================================================

/// POST /v1/plans
///
/// Plan the whole catalog into one day and store the result.
pub async fn create_plan(
    State(state): State<AppState>,
    payload: Result<Json<PlanRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<SchedulePlan>), AppError> {
    let Json(request) = payload?;
    let plan = db_services::generate_plan(
        state.repository.as_ref(),
        request.day_number,
        &state.config.planner_config(),
    )
    .await?;
    tracing::info!(
        plan_id = %plan.plan_id,
        scheduled = plan.scheduled_count,
        unscheduled = plan.unscheduled_count,
        "plan created"
    );
    Ok((StatusCode::CREATED, Json(plan)))
}

/// GET /v1/plans/{plan_id}
pub async fn get_plan(
    State(state): State<AppState>,
    plan_id: Result<Path<Uuid>, PathRejection>,
) -> HandlerResult<SchedulePlan> {
    let Path(plan_id) =
        plan_id.map_err(|rejection| AppError::invalid_path("plan_id", rejection))?;
    let plan = db_services::get_plan(state.repository.as_ref(), plan_id).await?;
    Ok(Json(plan))
}
