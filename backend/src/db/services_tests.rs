use super::repositories::LocalRepository;
use super::repository::RepositoryError;
use super::services::*;
use crate::algorithms::PriorityScoringConfig;
use crate::models::{CrewMember, NetworkLoadSample, NewPatch, PatchId};
use crate::routes::plans::PlanEntry;
use crate::services::PlannerConfig;

#[tokio::test]
async fn test_sample_catalog_ids_start_at_100() {
    let repo = LocalRepository::with_sample_data();
    let ids: Vec<i64> = list_patches(&repo)
        .await
        .unwrap()
        .iter()
        .map(|p| p.id.value())
        .collect();
    assert_eq!(ids, vec![100, 101, 102, 103, 104]);

    let created = create_patch(&repo, NewPatch::default()).await.unwrap();
    assert_eq!(created.id, PatchId::new(105));
    assert_eq!(get_patch(&repo, PatchId::new(105)).await.unwrap(), created);
}

#[tokio::test]
async fn test_create_patch_rejects_bad_priority() {
    let repo = LocalRepository::new();
    let err = create_patch(
        &repo,
        NewPatch {
            priority: 9,
            ..Default::default()
        },
    )
    .await
    .unwrap_err();

    assert!(matches!(err, RepositoryError::ValidationError { .. }));
    assert_eq!(err.context().field.as_deref(), Some("priority"));
    assert_eq!(repo.patch_count(), 0);
}

#[tokio::test]
async fn test_missing_patch_is_not_found() {
    let repo = LocalRepository::new();
    let err = get_patch(&repo, PatchId::new(7)).await.unwrap_err();
    assert!(matches!(err, RepositoryError::NotFound { .. }));
    assert_eq!(err.context().entity_id.as_deref(), Some("7"));
}

#[tokio::test]
async fn test_generate_plan_stores_and_returns_plan() {
    let repo = LocalRepository::with_sample_data();
    let plan = generate_plan(&repo, 2, &PlannerConfig::default()).await.unwrap();

    assert_eq!(plan.day_of_week, "Wednesday");
    assert_eq!(plan.entries.len(), 5);
    assert_eq!(plan.scheduled_count + plan.unscheduled_count, 5);
    // Highest priority first.
    assert_eq!(plan.entries[0].patch().priority, 5);
    assert_eq!(get_plan(&repo, plan.plan_id).await.unwrap(), plan);
    assert_eq!(repo.plan_count(), 1);
}

#[tokio::test]
async fn test_generate_plan_never_double_books() {
    let repo = LocalRepository::with_sample_data();
    for day in 0..7 {
        let plan = generate_plan(&repo, day, &PlannerConfig::default()).await.unwrap();
        let mut seen = std::collections::HashSet::new();
        for entry in &plan.entries {
            if let PlanEntry::Scheduled(s) = entry {
                assert_eq!(s.assigned_crew.len(), s.patch.min_crew as usize);
                let covered = s.patch.duration.ceil() as usize;
                for offset in 0..covered {
                    let hour = (s.start_hour + offset) % 24;
                    for name in &s.assigned_crew {
                        assert!(seen.insert((hour, name.clone())), "{name} double-booked at {hour}");
                    }
                }
            }
        }
    }
}

#[tokio::test]
async fn test_generate_plan_requires_full_day_of_load() {
    let repo = LocalRepository::with_sample_data();
    repo.set_network_loads((0..10).map(|h| NetworkLoadSample::new(0, h, 5.0)).collect());
    let err = generate_plan(&repo, 0, &PlannerConfig::default()).await.unwrap_err();
    assert!(matches!(err, RepositoryError::NotFound { .. }));

    let err = generate_plan(&repo, 7, &PlannerConfig::default()).await.unwrap_err();
    assert_eq!(err.context().field.as_deref(), Some("day_number"));
}

#[tokio::test]
async fn test_score_stored_patch_uses_stored_load_and_roster() {
    let repo = LocalRepository::new();
    let patch = create_patch(
        &repo,
        NewPatch {
            name: "Web Server Patch".into(),
            duration: 1.0,
            priority: 3,
            min_crew: 1,
        },
    )
    .await
    .unwrap();
    repo.set_crew(vec![
        CrewMember::new("a", vec![(0, 6)], 3),
        CrewMember::new("b", vec![(2, 4)], 3),
    ]);
    repo.set_network_loads(vec![NetworkLoadSample::new(6, 3, 12.0)]);

    let response = score_stored_patch(&repo, patch.id, 6, 3, &PriorityScoringConfig::default())
        .await
        .unwrap();
    assert_eq!(response.network_load, 12.0);
    assert_eq!(response.available_crew, 2);
    // 40 load + 20 night + 30 crew + 18 priority + 10 weekend, clamped.
    assert_eq!(response.score.total, 100.0);

    let err = score_stored_patch(&repo, patch.id, 6, 24, &PriorityScoringConfig::default())
        .await
        .unwrap_err();
    assert_eq!(err.context().field.as_deref(), Some("hour"));
}

#[tokio::test]
async fn test_stats_and_best_hours() {
    let repo = LocalRepository::with_sample_data();
    let stats = system_stats(&repo).await.unwrap();
    assert_eq!(stats.total_patches, 5);
    assert_eq!(stats.total_crew_members, 5);
    assert_eq!(stats.total_patch_hours, 9.5);
    assert_eq!(stats.high_priority_patches, 3);
    assert_eq!(stats.total_crew_hours, 12 + 10 + 6 + 8 + 13);
    assert_eq!(stats.low_load_hours.len(), 5);

    let best = best_hours(&repo, 3).await.unwrap();
    assert_eq!(best.best_hours.len(), 3);
    assert!(best.best_hours[0].load_kw <= best.best_hours[2].load_kw);
    assert_eq!(best.optimal_hour.as_ref(), best.best_hours.first());
}

#[tokio::test]
async fn test_forecast_matches_profile_when_history_is_exact() {
    let repo = LocalRepository::with_sample_data();
    let forecast = forecast_day(&repo, 5).await.unwrap();
    let actual = day_load_series(&repo, 5).await.unwrap();
    assert_eq!(forecast.day_of_week, "Saturday");
    assert_eq!(forecast.predicted_load, actual.as_slice().to_vec());

    let empty = LocalRepository::new();
    assert!(matches!(
        forecast_day(&empty, 0).await.unwrap_err(),
        RepositoryError::NotFound { .. }
    ));
}

#[tokio::test]
async fn test_unhealthy_repository_fails_operations() {
    let repo = LocalRepository::with_sample_data();
    repo.set_healthy(false);
    assert!(!health_check(&repo).await.unwrap());
    assert!(list_patches(&repo).await.is_err());
}
