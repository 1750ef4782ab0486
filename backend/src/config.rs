//! Application configuration file support.
//!
//! Configuration lives in a single TOML file with three sections:
//!
//! ```toml
//! [repository]
//! type = "local"
//! seed_sample_data = true
//!
//! [window]
//! crew_weight = 1.0
//! load_weight = 1.0
//! normalize = true
//!
//! [scoring]
//! load_floor_points = 0.0
//! crew_shortfall = "zero_band"
//! ```
//!
//! Every key is optional; missing keys take the defaults shown above.

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::algorithms::priority::MAX_LOAD_FLOOR_POINTS;
use crate::algorithms::{PriorityScoringConfig, Weights};
use crate::db::repo_config::RepositorySettings;
use crate::db::repository::{ErrorContext, RepositoryError, RepositoryResult};
use crate::services::PlannerConfig;

/// Environment variable naming an explicit configuration file.
pub const CONFIG_ENV_VAR: &str = "PATCH_WINDOW_CONFIG";

pub const CONFIG_FILE_NAME: &str = "patch-window.toml";

/// Application configuration from file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub repository: RepositorySettings,
    #[serde(default)]
    pub window: WindowSettings,
    #[serde(default)]
    pub scoring: PriorityScoringConfig,
}

/// Defaults for window searches run by the planner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowSettings {
    #[serde(default = "default_weight")]
    pub crew_weight: f64,
    #[serde(default = "default_weight")]
    pub load_weight: f64,
    #[serde(default = "default_normalize")]
    pub normalize: bool,
}

fn default_weight() -> f64 {
    1.0
}

fn default_normalize() -> bool {
    true
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            crew_weight: default_weight(),
            load_weight: default_weight(),
            normalize: default_normalize(),
        }
    }
}

fn config_error(message: String, field: Option<&str>) -> RepositoryError {
    let mut context = ErrorContext::new("load_config");
    if let Some(field) = field {
        context = context.with_field(field);
    }
    RepositoryError::configuration_with_context(message, context)
}

impl AppConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Returns
    /// * `Ok(AppConfig)` if the file was read, parsed and validated
    /// * `Err(RepositoryError)` otherwise
    pub fn from_file<P: AsRef<Path>>(path: P) -> RepositoryResult<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            config_error(
                format!(
                    "Failed to read config file {}: {}",
                    path.as_ref().display(),
                    e
                ),
                None,
            )
        })?;

        let config = Self::from_toml_str(&content)?;
        log::info!("loaded configuration from {}", path.as_ref().display());
        Ok(config)
    }

    /// Parse and validate configuration from TOML text.
    pub fn from_toml_str(content: &str) -> RepositoryResult<Self> {
        let config: AppConfig = toml::from_str(content)
            .map_err(|e| config_error(format!("Failed to parse config file: {}", e), None))?;
        config.validate()?;
        Ok(config)
    }

    /// Standard locations searched for the configuration file, in order.
    pub fn search_paths() -> Vec<PathBuf> {
        vec![
            PathBuf::from(CONFIG_FILE_NAME),
            PathBuf::from("backend").join(CONFIG_FILE_NAME),
            PathBuf::from("..").join(CONFIG_FILE_NAME),
        ]
    }

    /// Load configuration from the first standard location that exists.
    ///
    /// # Returns
    /// * `Ok(AppConfig)` if found and parsed successfully
    /// * `Err(RepositoryError)` if no config file was found or it failed to parse
    pub fn from_default_location() -> RepositoryResult<Self> {
        match Self::search_paths().into_iter().find(|p| p.exists()) {
            Some(path) => Self::from_file(path),
            None => Err(config_error(
                format!("No {} found in standard locations", CONFIG_FILE_NAME),
                None,
            )),
        }
    }

    /// Resolve configuration for the running process.
    ///
    /// An explicit path in `PATCH_WINDOW_CONFIG` must load. Otherwise the
    /// standard locations are searched, and defaults apply when none exists.
    pub fn load() -> RepositoryResult<Self> {
        if let Ok(path) = env::var(CONFIG_ENV_VAR) {
            return Self::from_file(path);
        }

        if Self::search_paths().iter().any(|p| p.exists()) {
            return Self::from_default_location();
        }

        log::info!("no {} found, using default configuration", CONFIG_FILE_NAME);
        Ok(Self::default())
    }

    /// Reject values the algorithms cannot use.
    pub fn validate(&self) -> RepositoryResult<()> {
        for (field, value) in [
            ("window.crew_weight", self.window.crew_weight),
            ("window.load_weight", self.window.load_weight),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(config_error(
                    format!("{} must be a finite, non-negative number (got {})", field, value),
                    Some(field),
                ));
            }
        }

        let floor = self.scoring.load_floor_points;
        if !(0.0..=MAX_LOAD_FLOOR_POINTS).contains(&floor) {
            return Err(config_error(
                format!(
                    "scoring.load_floor_points must be between 0 and {} (got {})",
                    MAX_LOAD_FLOOR_POINTS, floor
                ),
                Some("scoring.load_floor_points"),
            ));
        }

        self.repository.repository_type().map_err(|e| {
            config_error(format!("Invalid repository type: {}", e), Some("repository.type"))
        })?;

        Ok(())
    }

    pub fn weights(&self) -> Weights {
        Weights {
            crew: self.window.crew_weight,
            load: self.window.load_weight,
        }
    }

    /// Planner settings derived from the `[window]` and `[scoring]` sections.
    pub fn planner_config(&self) -> PlannerConfig {
        PlannerConfig {
            weights: self.weights(),
            normalize: self.window.normalize,
            scoring: self.scoring,
        }
    }
}
