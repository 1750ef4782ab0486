//! In-memory local repository implementation.
//!
//! This module provides a local implementation of all repository traits
//! suitable for unit testing, local development and the demo server. All
//! data lives in memory behind a single `parking_lot::RwLock`.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use uuid::Uuid;

use crate::db::repository::*;
use crate::db::sample;
use crate::models::{CrewMember, NetworkLoadSample, NewPatch, Patch, PatchId};
use crate::routes::plans::SchedulePlan;

/// First id handed out to a created patch.
pub const FIRST_PATCH_ID: i64 = 100;

/// In-memory local repository.
///
/// Cloning shares the underlying storage.
///
/// # Example
/// ```
/// use patch_window::db::repositories::LocalRepository;
/// use patch_window::db::repository::PatchRepository;
///
/// # tokio_test_block_on(async {
/// let repo = LocalRepository::with_sample_data();
/// let patches = repo.list_patches().await.unwrap();
/// assert_eq!(patches.len(), 5);
/// # });
/// # fn tokio_test_block_on<F: std::future::Future>(f: F) -> F::Output {
/// #     tokio::runtime::Runtime::new().unwrap().block_on(f)
/// # }
/// ```
#[derive(Clone)]
pub struct LocalRepository {
    data: Arc<RwLock<LocalData>>,
    next_patch_id: Arc<AtomicI64>,
}

#[derive(Default)]
struct LocalData {
    patches: Vec<Patch>,
    crew: Vec<CrewMember>,
    network_loads: Vec<NetworkLoadSample>,
    plans: HashMap<Uuid, SchedulePlan>,
    is_unhealthy: bool,
}

impl LocalRepository {
    /// Create a new empty local repository.
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(LocalData::default())),
            next_patch_id: Arc::new(AtomicI64::new(FIRST_PATCH_ID)),
        }
    }

    /// Create a repository holding the demo catalog: five patches, five crew
    /// members and a full weekly load profile.
    pub fn with_sample_data() -> Self {
        let repo = Self::new();
        for patch in sample::sample_new_patches() {
            repo.insert_patch(patch);
        }
        repo.set_crew(sample::sample_crew());
        repo.set_network_loads(sample::sample_network_loads());
        repo
    }

    fn allocate_patch_id(&self) -> PatchId {
        PatchId::new(self.next_patch_id.fetch_add(1, Ordering::SeqCst))
    }

    /// Store a patch without validation. Returns the stored patch.
    pub fn insert_patch(&self, patch: NewPatch) -> Patch {
        let patch = patch.into_patch(self.allocate_patch_id());
        self.data.write().patches.push(patch.clone());
        patch
    }

    /// Replace the crew roster.
    pub fn set_crew(&self, crew: Vec<CrewMember>) {
        self.data.write().crew = crew;
    }

    /// Replace the weekly load profile. Samples are kept ordered by day then hour.
    pub fn set_network_loads(&self, mut loads: Vec<NetworkLoadSample>) {
        loads.sort_by_key(|s| (s.day_number, s.hour));
        self.data.write().network_loads = loads;
    }

    /// Set the health status for testing backend failures.
    pub fn set_healthy(&self, healthy: bool) {
        self.data.write().is_unhealthy = !healthy;
    }

    /// Drop all data. The id counter keeps running.
    pub fn clear(&self) {
        let mut data = self.data.write();
        let is_unhealthy = data.is_unhealthy;
        *data = LocalData {
            is_unhealthy,
            ..Default::default()
        };
    }

    pub fn patch_count(&self) -> usize {
        self.data.read().patches.len()
    }

    pub fn plan_count(&self) -> usize {
        self.data.read().plans.len()
    }

    fn check_health(&self, operation: &str) -> RepositoryResult<()> {
        if self.data.read().is_unhealthy {
            return Err(RepositoryError::internal_with_context(
                "Repository is not healthy",
                ErrorContext::new(operation),
            ));
        }
        Ok(())
    }
}

impl Default for LocalRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PatchRepository for LocalRepository {
    async fn list_patches(&self) -> RepositoryResult<Vec<Patch>> {
        self.check_health("list_patches")?;
        Ok(self.data.read().patches.clone())
    }

    async fn get_patch(&self, id: PatchId) -> RepositoryResult<Patch> {
        self.check_health("get_patch")?;
        self.data
            .read()
            .patches
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| {
                RepositoryError::not_found_with_context(
                    format!("Patch {} not found", id),
                    ErrorContext::new("get_patch")
                        .with_entity("patch")
                        .with_entity_id(id),
                )
            })
    }

    async fn create_patch(&self, patch: NewPatch) -> RepositoryResult<Patch> {
        self.check_health("create_patch")?;
        patch
            .validate()
            .map_err(|e| RepositoryError::from(e).with_operation("create_patch"))?;
        let stored = self.insert_patch(patch);
        log::debug!("stored patch {} ({})", stored.id, stored.name);
        Ok(stored)
    }
}

#[async_trait]
impl CrewRepository for LocalRepository {
    async fn list_crew(&self) -> RepositoryResult<Vec<CrewMember>> {
        self.check_health("list_crew")?;
        Ok(self.data.read().crew.clone())
    }
}

#[async_trait]
impl LoadRepository for LocalRepository {
    async fn fetch_network_loads(&self) -> RepositoryResult<Vec<NetworkLoadSample>> {
        self.check_health("fetch_network_loads")?;
        Ok(self.data.read().network_loads.clone())
    }
}

#[async_trait]
impl PlanRepository for LocalRepository {
    async fn store_plan(&self, plan: SchedulePlan) -> RepositoryResult<Uuid> {
        self.check_health("store_plan")?;
        let plan_id = plan.plan_id;
        self.data.write().plans.insert(plan_id, plan);
        Ok(plan_id)
    }

    async fn get_plan(&self, plan_id: Uuid) -> RepositoryResult<SchedulePlan> {
        self.check_health("get_plan")?;
        self.data.read().plans.get(&plan_id).cloned().ok_or_else(|| {
            RepositoryError::not_found_with_context(
                format!("Plan {} not found", plan_id),
                ErrorContext::new("get_plan")
                    .with_entity("plan")
                    .with_entity_id(plan_id),
            )
        })
    }
}

#[async_trait]
impl FullRepository for LocalRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(!self.data.read().is_unhealthy)
    }

    fn backend_name(&self) -> &'static str {
        "local"
    }
}
