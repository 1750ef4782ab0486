//! Tests for the in-memory repository through its trait interface.

use std::collections::HashSet;
use std::sync::Arc;

use patch_window::db::repositories::LocalRepository;
use patch_window::db::{
    CrewRepository, FullRepository, LoadRepository, PatchRepository, PlanRepository,
    RepositoryError,
};
use patch_window::models::{NewPatch, PatchId};
use patch_window::routes::plans::SchedulePlan;

fn new_patch(name: &str) -> NewPatch {
    NewPatch {
        name: name.to_string(),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_empty_repository_starts_ids_at_100() {
    let repo = LocalRepository::new();
    assert!(repo.list_patches().await.unwrap().is_empty());
    assert!(repo.list_crew().await.unwrap().is_empty());
    assert!(repo.fetch_network_loads().await.unwrap().is_empty());

    let first = repo.create_patch(new_patch("first")).await.unwrap();
    let second = repo.create_patch(new_patch("second")).await.unwrap();
    assert_eq!(first.id, PatchId::new(100));
    assert_eq!(second.id, PatchId::new(101));
}

#[tokio::test]
async fn test_create_patch_trims_name() {
    let repo = LocalRepository::new();
    let patch = repo.create_patch(new_patch("  Kernel  ")).await.unwrap();
    assert_eq!(patch.name, "Kernel");
}

#[tokio::test]
async fn test_create_patch_rejects_each_invalid_field() {
    let repo = LocalRepository::new();
    let cases = [
        (new_patch("   "), "name"),
        (NewPatch { duration: 0.0, ..new_patch("d") }, "duration"),
        (NewPatch { duration: 25.0, ..new_patch("d") }, "duration"),
        (NewPatch { priority: 0, ..new_patch("p") }, "priority"),
        (NewPatch { min_crew: 0, ..new_patch("c") }, "min_crew"),
    ];
    for (patch, field) in cases {
        let err = repo.create_patch(patch).await.unwrap_err();
        assert!(matches!(err, RepositoryError::ValidationError { .. }));
        assert_eq!(err.context().field.as_deref(), Some(field));
        assert_eq!(err.context().operation.as_deref(), Some("create_patch"));
    }
    assert_eq!(repo.patch_count(), 0);
}

#[tokio::test]
async fn test_sample_data_is_complete_week() {
    let repo = LocalRepository::with_sample_data();
    let loads = repo.fetch_network_loads().await.unwrap();
    assert_eq!(loads.len(), 168);
    assert_eq!((loads[0].day_number, loads[0].hour), (0, 0));
    assert_eq!((loads[167].day_number, loads[167].hour), (6, 23));
    assert_eq!(repo.list_crew().await.unwrap().len(), 5);
}

#[tokio::test]
async fn test_plan_round_trip_and_missing_plan() {
    let repo = LocalRepository::new();
    let plan = SchedulePlan::new(3, vec![]);
    let id = repo.store_plan(plan.clone()).await.unwrap();
    assert_eq!(id, plan.plan_id);
    assert_eq!(repo.get_plan(id).await.unwrap(), plan);

    let err = repo.get_plan(uuid::Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(err, RepositoryError::NotFound { .. }));
    assert_eq!(err.context().entity.as_deref(), Some("plan"));
}

#[tokio::test]
async fn test_clear_keeps_id_counter() {
    let repo = LocalRepository::with_sample_data();
    repo.clear();
    assert_eq!(repo.patch_count(), 0);
    let patch = repo.create_patch(new_patch("after clear")).await.unwrap();
    assert_eq!(patch.id, PatchId::new(105));
}

#[tokio::test]
async fn test_unhealthy_repository() {
    let repo = LocalRepository::new();
    repo.set_healthy(false);
    assert!(!repo.health_check().await.unwrap());
    let err = repo.list_crew().await.unwrap_err();
    assert!(matches!(err, RepositoryError::InternalError { .. }));

    repo.set_healthy(true);
    assert!(repo.health_check().await.unwrap());
    assert_eq!(repo.backend_name(), "local");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_creates_get_unique_ids() {
    let repo = Arc::new(LocalRepository::new());
    let mut handles = Vec::new();
    for i in 0..32 {
        let repo = Arc::clone(&repo);
        handles.push(tokio::spawn(async move {
            repo.create_patch(new_patch(&format!("patch-{i}"))).await.unwrap().id
        }));
    }

    let mut ids = HashSet::new();
    for handle in handles {
        assert!(ids.insert(handle.await.unwrap()));
    }
    assert_eq!(ids.len(), 32);
    assert_eq!(ids.iter().map(|id| id.value()).min(), Some(100));
    assert_eq!(ids.iter().map(|id| id.value()).max(), Some(131));
}
