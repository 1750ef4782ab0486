//! Patches (maintenance work items) and their validation rules.

use serde::{Deserialize, Serialize};

use super::series::HOURS_PER_DAY;

crate::define_id_type!(i64, PatchId);

/// Lowest accepted patch priority.
pub const MIN_PRIORITY: u8 = 1;

/// Highest accepted patch priority.
pub const MAX_PRIORITY: u8 = 5;

/// Patches at or above this priority count as high priority in statistics.
pub const HIGH_PRIORITY_THRESHOLD: u8 = 4;

/// Longest window a single patch may occupy.
pub const MAX_DURATION_HOURS: f64 = HOURS_PER_DAY as f64;

/// Validation failure for a single input field.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{field}: {message}")]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// A maintenance item waiting to be placed into a window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patch {
    pub id: PatchId,
    pub name: String,
    /// Duration in hours, `0 < duration <= 24`.
    pub duration: f64,
    /// 1 (lowest) to 5 (highest).
    pub priority: u8,
    /// Minimum number of crew members that must be on hand for the whole window.
    pub min_crew: u32,
}

impl Patch {
    pub fn is_high_priority(&self) -> bool {
        self.priority >= HIGH_PRIORITY_THRESHOLD
    }
}

/// Request to add a patch to the catalog. The repository assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewPatch {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_duration")]
    pub duration: f64,
    #[serde(default = "default_priority")]
    pub priority: u8,
    #[serde(default = "default_min_crew")]
    pub min_crew: u32,
}

fn default_name() -> String {
    "Unnamed Patch".to_string()
}

fn default_duration() -> f64 {
    1.0
}

fn default_priority() -> u8 {
    3
}

fn default_min_crew() -> u32 {
    1
}

impl Default for NewPatch {
    fn default() -> Self {
        Self {
            name: default_name(),
            duration: default_duration(),
            priority: default_priority(),
            min_crew: default_min_crew(),
        }
    }
}

impl NewPatch {
    /// Check every field, returning the first violation found.
    pub fn validate(&self) -> Result<(), FieldError> {
        if self.name.trim().is_empty() {
            return Err(FieldError::new("name", "must not be empty"));
        }
        if !self.duration.is_finite() || self.duration <= 0.0 || self.duration > MAX_DURATION_HOURS
        {
            return Err(FieldError::new(
                "duration",
                format!(
                    "must be greater than 0 and at most {} hours (got {})",
                    MAX_DURATION_HOURS, self.duration
                ),
            ));
        }
        if !(MIN_PRIORITY..=MAX_PRIORITY).contains(&self.priority) {
            return Err(FieldError::new(
                "priority",
                format!(
                    "must be between {} and {} (got {})",
                    MIN_PRIORITY, MAX_PRIORITY, self.priority
                ),
            ));
        }
        if self.min_crew == 0 {
            return Err(FieldError::new("min_crew", "must be at least 1"));
        }
        Ok(())
    }

    /// Attach an id. Callers are expected to have run [`NewPatch::validate`].
    pub fn into_patch(self, id: PatchId) -> Patch {
        Patch {
            id,
            name: self.name.trim().to_string(),
            duration: self.duration,
            priority: self.priority,
            min_crew: self.min_crew,
        }
    }
}
