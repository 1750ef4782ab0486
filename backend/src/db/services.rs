//! Service layer over the repository.
//!
//! These functions fetch what an operation needs from a [`FullRepository`],
//! hand it to the pure services in [`crate::services`] and, for plans, store
//! the result. HTTP handlers call these rather than the traits directly.

use uuid::Uuid;

use super::repository::{
    CrewRepository, ErrorContext, FullRepository, LoadRepository, PatchRepository, PlanRepository,
    RepositoryError, RepositoryResult,
};
use crate::algorithms::{score_patch, PriorityScoringConfig};
use crate::models::{
    day_name, day_series, CrewMember, HourlySeries, NetworkLoadSample, NewPatch, Patch, PatchId,
    DAYS_PER_WEEK, HOURS_PER_DAY,
};
use crate::routes::patches::PatchScoreResponse;
use crate::routes::plans::SchedulePlan;
use crate::routes::stats::{BestHoursResponse, ForecastResponse, SystemStats};
use crate::services::{self, HistoricalProfileForecaster, LoadForecaster, PlannerConfig};

pub async fn health_check(repo: &dyn FullRepository) -> RepositoryResult<bool> {
    repo.health_check().await
}

pub async fn list_patches(repo: &dyn FullRepository) -> RepositoryResult<Vec<Patch>> {
    repo.list_patches().await
}

pub async fn get_patch(repo: &dyn FullRepository, id: PatchId) -> RepositoryResult<Patch> {
    repo.get_patch(id).await
}

pub async fn create_patch(repo: &dyn FullRepository, patch: NewPatch) -> RepositoryResult<Patch> {
    repo.create_patch(patch).await
}

pub async fn list_crew(repo: &dyn FullRepository) -> RepositoryResult<Vec<CrewMember>> {
    repo.list_crew().await
}

pub async fn fetch_network_loads(
    repo: &dyn FullRepository,
) -> RepositoryResult<Vec<NetworkLoadSample>> {
    repo.fetch_network_loads().await
}

fn check_day(day_number: usize, operation: &str) -> RepositoryResult<()> {
    if day_number >= DAYS_PER_WEEK {
        return Err(RepositoryError::validation_with_context(
            format!("must be between 0 and {} (got {})", DAYS_PER_WEEK - 1, day_number),
            ErrorContext::new(operation).with_field("day_number"),
        ));
    }
    Ok(())
}

fn check_hour(hour: usize, operation: &str) -> RepositoryResult<()> {
    if hour >= HOURS_PER_DAY {
        return Err(RepositoryError::validation_with_context(
            format!("must be between 0 and {} (got {})", HOURS_PER_DAY - 1, hour),
            ErrorContext::new(operation).with_field("hour"),
        ));
    }
    Ok(())
}

/// One day of the stored load profile as a 24-value series.
pub async fn day_load_series(
    repo: &dyn FullRepository,
    day_number: usize,
) -> RepositoryResult<HourlySeries> {
    check_day(day_number, "day_load_series")?;
    let loads = repo.fetch_network_loads().await?;
    day_series(&loads, day_number).map_err(|e| {
        RepositoryError::not_found_with_context(
            format!("No complete load profile for {}", day_name(day_number)),
            ErrorContext::new("day_load_series")
                .with_entity("network_load")
                .with_entity_id(day_number)
                .with_details(e.to_string()),
        )
    })
}

/// Plan the whole patch catalog into `day_number` and store the plan.
pub async fn generate_plan(
    repo: &dyn FullRepository,
    day_number: usize,
    config: &PlannerConfig,
) -> RepositoryResult<SchedulePlan> {
    check_day(day_number, "generate_plan")?;
    let patches = repo.list_patches().await?;
    let roster = repo.list_crew().await?;
    let load = day_load_series(repo, day_number).await?;

    let entries = services::plan_patches(&patches, &roster, &load, day_number, config);
    let plan = SchedulePlan::new(day_number, entries);
    log::info!(
        "generated plan {} for {}: {} scheduled, {} unscheduled",
        plan.plan_id,
        plan.day_of_week,
        plan.scheduled_count,
        plan.unscheduled_count
    );

    repo.store_plan(plan.clone()).await?;
    Ok(plan)
}

pub async fn get_plan(repo: &dyn FullRepository, plan_id: Uuid) -> RepositoryResult<SchedulePlan> {
    repo.get_plan(plan_id).await
}

/// Priority score of a stored patch at (day, hour), using the stored load and
/// roster for that hour.
pub async fn score_stored_patch(
    repo: &dyn FullRepository,
    id: PatchId,
    day_number: usize,
    hour: usize,
    scoring: &PriorityScoringConfig,
) -> RepositoryResult<PatchScoreResponse> {
    check_day(day_number, "score_patch")?;
    check_hour(hour, "score_patch")?;

    let patch = repo.get_patch(id).await?;
    let network_load = repo
        .fetch_network_loads()
        .await?
        .into_iter()
        .find(|s| s.day_number == day_number && s.hour == hour)
        .map(|s| s.load_kilowatts)
        .ok_or_else(|| {
            RepositoryError::not_found_with_context(
                format!("No load sample for {} {}:00", day_name(day_number), hour),
                ErrorContext::new("score_patch").with_entity("network_load"),
            )
        })?;
    let available_crew = repo
        .list_crew()
        .await?
        .iter()
        .filter(|m| m.is_available(hour))
        .count();

    let score = score_patch(&patch, hour, day_number, network_load, available_crew, scoring);
    Ok(PatchScoreResponse {
        patch,
        day_number,
        hour,
        network_load,
        available_crew,
        score,
    })
}

pub async fn best_hours(repo: &dyn FullRepository, limit: usize) -> RepositoryResult<BestHoursResponse> {
    let loads = repo.fetch_network_loads().await?;
    Ok(services::best_hours_response(&loads, limit))
}

pub async fn system_stats(repo: &dyn FullRepository) -> RepositoryResult<SystemStats> {
    let loads = repo.fetch_network_loads().await?;
    let roster = repo.list_crew().await?;
    let patches = repo.list_patches().await?;
    Ok(services::system_stats(&loads, &roster, &patches))
}

/// 24-hour load forecast for `day_number`, fitted on the stored profile.
pub async fn forecast_day(
    repo: &dyn FullRepository,
    day_number: usize,
) -> RepositoryResult<ForecastResponse> {
    check_day(day_number, "forecast_day")?;
    let loads = repo.fetch_network_loads().await?;
    let forecaster = HistoricalProfileForecaster::fit(&loads);
    let series = forecaster.forecast_day(day_number).ok_or_else(|| {
        RepositoryError::not_found_with_context(
            format!("Not enough load history to forecast {}", day_name(day_number)),
            ErrorContext::new("forecast_day")
                .with_entity("network_load")
                .with_entity_id(day_number),
        )
    })?;

    Ok(ForecastResponse {
        day_number,
        day_of_week: day_name(day_number).to_string(),
        predicted_load: series.into(),
    })
}
