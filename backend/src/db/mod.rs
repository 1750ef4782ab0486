//! Storage for the patch catalog, crew roster, load profile and plans.
//!
//! This module provides abstractions for storage via the Repository pattern,
//! so that the HTTP layer never depends on a concrete backend.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Application Layer (HTTP handlers, binaries)            │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Service Layer (services.rs) - Orchestration            │
//! │  - Day slicing of the load profile                       │
//! │  - Plan generation and storage                           │
//! │  - Stats, best hours and forecasts                       │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Repository Traits (repository/) - Abstract Interface   │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//!     ┌──────────────────────────────────────────────┐
//!     │             Local Repository                  │
//!     │               (in-memory)                     │
//!     └──────────────────────────────────────────────┘
//! ```
//!
//! # Recommended Usage
//! ```ignore
//! use patch_window::db::{services, RepositoryFactory};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let repo = RepositoryFactory::create_local_with_sample_data();
//!     let patches = services::list_patches(repo.as_ref()).await?;
//!     Ok(())
//! }
//! ```
//!
//! The repository is always injected (see `http::AppState`); there is no
//! process-wide instance.

pub mod factory;
pub mod repo_config;
pub mod repositories;
pub mod repository;
pub mod sample;
pub mod services;

#[cfg(test)]
#[path = "services_tests.rs"]
mod services_tests;

pub use services::{
    best_hours, create_patch, day_load_series, fetch_network_loads, forecast_day, generate_plan,
    get_patch, get_plan, health_check, list_crew, list_patches, score_stored_patch, system_stats,
};

pub use factory::{RepositoryBuilder, RepositoryFactory, RepositoryType};
pub use repo_config::RepositorySettings;
pub use repositories::LocalRepository;
pub use repository::{
    CrewRepository, ErrorContext, FullRepository, LoadRepository, PatchRepository,
    PlanRepository, RepositoryError, RepositoryResult,
};
