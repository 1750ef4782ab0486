use serde::{Deserialize, Serialize};

use crate::algorithms::PriorityScore;
use crate::models::Patch;

/// Where to evaluate a patch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PatchScoreQuery {
    #[serde(default)]
    pub day: usize,
    #[serde(default)]
    pub hour: usize,
}

/// Priority score of one patch at one (day, hour).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatchScoreResponse {
    pub patch: Patch,
    pub day_number: usize,
    pub hour: usize,
    pub network_load: f64,
    pub available_crew: usize,
    pub score: PriorityScore,
}

pub const LIST_PATCHES: &str = "list_patches";
pub const CREATE_PATCH: &str = "create_patch";
pub const GET_PATCH: &str = "get_patch";
pub const SCORE_PATCH: &str = "score_patch";
