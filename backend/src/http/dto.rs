//! Data Transfer Objects for the HTTP API.
//!
//! Request and response bodies that belong to a single route live in
//! `crate::routes` and are re-exported here; this module adds the envelopes
//! that only the HTTP layer needs.

use serde::{Deserialize, Serialize};

pub use crate::routes::optimal_schedule::{
    CandidateListResponse, OptimalScheduleRequest, OptimalScheduleResponse,
};
pub use crate::routes::patches::{PatchScoreQuery, PatchScoreResponse};
pub use crate::routes::plans::{PlanEntry, PlanRequest, SchedulePlan, ScheduledPatch};
pub use crate::routes::stats::{BestHoursResponse, ForecastResponse, LoadSlot, SystemStats};

use crate::models::{CrewMember, NetworkLoadSample, Patch};

/// Number of slots returned by `/v1/best-hours` when no limit is given.
pub const DEFAULT_BEST_HOURS_LIMIT: usize = 10;

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Repository backend and its status
    pub repository: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatchListResponse {
    pub patches: Vec<Patch>,
    pub total: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrewListResponse {
    pub crew: Vec<CrewMember>,
    pub total: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkLoadResponse {
    pub loads: Vec<NetworkLoadSample>,
    pub total: usize,
}

/// Query parameters for the best-hours endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BestHoursQuery {
    /// Number of slots to return (default: 10)
    #[serde(default)]
    pub limit: Option<usize>,
}
