//! Repository traits for the patch catalog, crew roster, load profile and
//! generated plans.
//!
//! Each concern gets its own trait so that handlers and tests can depend on
//! the narrowest interface they need. [`FullRepository`] bundles them for
//! application state.
//!
//! # Thread Safety
//! Implementations must be `Send + Sync` to work with async Rust.

use async_trait::async_trait;
use uuid::Uuid;

use crate::models::{CrewMember, NetworkLoadSample, NewPatch, Patch, PatchId};
use crate::routes::plans::SchedulePlan;

pub mod error;

pub use error::{ErrorContext, RepositoryError, RepositoryResult};

/// Patch catalog operations.
#[async_trait]
pub trait PatchRepository: Send + Sync {
    /// All patches in insertion order.
    async fn list_patches(&self) -> RepositoryResult<Vec<Patch>>;

    /// Fetch a single patch.
    ///
    /// # Returns
    /// * `Ok(Patch)` - The stored patch
    /// * `Err(RepositoryError::NotFound)` - If no patch has this id
    async fn get_patch(&self, id: PatchId) -> RepositoryResult<Patch>;

    /// Validate and store a new patch, allocating its id.
    ///
    /// # Returns
    /// * `Ok(Patch)` - The stored patch with its id
    /// * `Err(RepositoryError::ValidationError)` - If a field is out of range
    async fn create_patch(&self, patch: NewPatch) -> RepositoryResult<Patch>;
}

/// Crew roster operations.
#[async_trait]
pub trait CrewRepository: Send + Sync {
    async fn list_crew(&self) -> RepositoryResult<Vec<CrewMember>>;
}

/// Weekly network load profile.
#[async_trait]
pub trait LoadRepository: Send + Sync {
    /// Every stored load sample, ordered by day then hour.
    async fn fetch_network_loads(&self) -> RepositoryResult<Vec<NetworkLoadSample>>;
}

/// Storage for generated schedule plans.
#[async_trait]
pub trait PlanRepository: Send + Sync {
    /// Store a plan and return its id.
    async fn store_plan(&self, plan: SchedulePlan) -> RepositoryResult<Uuid>;

    /// # Returns
    /// * `Ok(SchedulePlan)` - The stored plan
    /// * `Err(RepositoryError::NotFound)` - If no plan has this id
    async fn get_plan(&self, plan_id: Uuid) -> RepositoryResult<SchedulePlan>;
}

/// Every repository concern behind one object.
#[async_trait]
pub trait FullRepository: PatchRepository + CrewRepository + LoadRepository + PlanRepository {
    /// Check whether the backing store is usable.
    async fn health_check(&self) -> RepositoryResult<bool>;

    /// Short backend name for health reports (e.g. `"local"`).
    fn backend_name(&self) -> &'static str;
}
