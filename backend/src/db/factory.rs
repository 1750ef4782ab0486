//! Repository factory for dependency injection.
//!
//! This module provides utilities for creating and configuring repository instances
//! based on runtime configuration.

use std::str::FromStr;
use std::sync::Arc;

use super::repo_config::RepositorySettings;
use super::repositories::LocalRepository;
use super::repository::{ErrorContext, FullRepository, RepositoryError, RepositoryResult};

/// Repository type configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepositoryType {
    /// In-memory local repository
    Local,
}

impl FromStr for RepositoryType {
    type Err = String;

    /// Parse repository type from string ("local", "memory").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "local" | "memory" | "in-memory" => Ok(Self::Local),
            _ => Err(format!("Unknown repository type: {}", s)),
        }
    }
}

impl RepositoryType {
    /// Get repository type from the `REPOSITORY_TYPE` environment variable.
    ///
    /// Defaults to Local when unset or unrecognized.
    pub fn from_env() -> Self {
        std::env::var("REPOSITORY_TYPE")
            .ok()
            .and_then(|val| val.parse().ok())
            .unwrap_or(Self::Local)
    }
}

/// Repository factory for creating repository instances.
///
/// # Example
/// ```ignore
/// use patch_window::db::{RepositoryFactory, RepositoryType};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let repo = RepositoryFactory::create(RepositoryType::Local, true).await?;
///     assert!(repo.health_check().await?);
///     Ok(())
/// }
/// ```
pub struct RepositoryFactory;

impl RepositoryFactory {
    /// Create a repository instance based on type.
    ///
    /// # Arguments
    /// * `repo_type` - Type of repository to create
    /// * `seed_sample_data` - Load the demo catalog into the new repository
    pub async fn create(
        repo_type: RepositoryType,
        seed_sample_data: bool,
    ) -> RepositoryResult<Arc<dyn FullRepository>> {
        match repo_type {
            RepositoryType::Local if seed_sample_data => Ok(Self::create_local_with_sample_data()),
            RepositoryType::Local => Ok(Self::create_local()),
        }
    }

    /// Create an empty in-memory local repository.
    pub fn create_local() -> Arc<dyn FullRepository> {
        Arc::new(LocalRepository::new())
    }

    /// Create an in-memory local repository seeded with the demo catalog.
    pub fn create_local_with_sample_data() -> Arc<dyn FullRepository> {
        Arc::new(LocalRepository::with_sample_data())
    }

    /// Create a repository from the `[repository]` configuration section.
    pub async fn from_settings(
        settings: &RepositorySettings,
    ) -> RepositoryResult<Arc<dyn FullRepository>> {
        RepositoryBuilder::new().from_settings(settings)?.build().await
    }
}

/// Builder for configuring repository creation.
///
/// # Example
/// ```ignore
/// use patch_window::db::{RepositoryBuilder, RepositoryType};
///
/// let repo = RepositoryBuilder::new()
///     .repository_type(RepositoryType::Local)
///     .seed_sample_data(false)
///     .build()
///     .await?;
/// ```
pub struct RepositoryBuilder {
    repo_type: RepositoryType,
    seed_sample_data: bool,
}

impl RepositoryBuilder {
    /// Create a new repository builder. The type comes from `REPOSITORY_TYPE`
    /// and sample data is seeded unless turned off.
    pub fn new() -> Self {
        Self {
            repo_type: RepositoryType::from_env(),
            seed_sample_data: true,
        }
    }

    pub fn repository_type(mut self, repo_type: RepositoryType) -> Self {
        self.repo_type = repo_type;
        self
    }

    pub fn seed_sample_data(mut self, seed: bool) -> Self {
        self.seed_sample_data = seed;
        self
    }

    /// Take type and seeding from configuration.
    pub fn from_settings(mut self, settings: &RepositorySettings) -> RepositoryResult<Self> {
        self.repo_type = settings.repository_type().map_err(|e| {
            RepositoryError::configuration_with_context(
                format!("Invalid repository type: {}", e),
                ErrorContext::new("create_repository").with_field("repository.type"),
            )
        })?;
        self.seed_sample_data = settings.seed_sample_data;
        Ok(self)
    }

    /// Build the repository instance.
    pub async fn build(self) -> RepositoryResult<Arc<dyn FullRepository>> {
        log::info!(
            "creating {:?} repository (sample data: {})",
            self.repo_type,
            self.seed_sample_data
        );
        RepositoryFactory::create(self.repo_type, self.seed_sample_data).await
    }
}

impl Default for RepositoryBuilder {
    fn default() -> Self {
        Self::new()
    }
}
