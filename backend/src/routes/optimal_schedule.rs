use serde::{Deserialize, Serialize};

use crate::algorithms::{HourContribution, ScoredCandidate, Weights};

/// Window-selection request.
///
/// Series are taken as plain vectors so that length and sign problems can be
/// reported against the offending field instead of failing deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimalScheduleRequest {
    /// 24 crew counts or availability scores.
    pub crew_availability: Vec<f64>,
    /// 24 network load values.
    pub network_load: Vec<f64>,
    /// Window length, `0 < d <= 24`.
    pub patch_duration_hours: f64,
    #[serde(default)]
    pub weights: Weights,
    /// Only windows where every covered hour meets this raw crew threshold qualify.
    #[serde(default)]
    pub crew_required: Option<f64>,
    /// Divide each series by its maximum before scoring.
    #[serde(default = "default_true")]
    pub normalize: bool,
}

fn default_true() -> bool {
    true
}

/// Best window for a request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimalScheduleResponse {
    pub best_start_hour: usize,
    pub score: f64,
    pub contributions: Vec<HourContribution>,
}

impl From<ScoredCandidate> for OptimalScheduleResponse {
    fn from(candidate: ScoredCandidate) -> Self {
        Self {
            best_start_hour: candidate.start_hour,
            score: candidate.score,
            contributions: candidate.contributions,
        }
    }
}

/// Every feasible window for a request, best first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateListResponse {
    pub candidates: Vec<ScoredCandidate>,
    pub total: usize,
}

/// Ready-made request body for trying the API by hand.
pub fn sample_request() -> OptimalScheduleRequest {
    OptimalScheduleRequest {
        crew_availability: vec![
            8.0, 8.0, 7.0, 6.0, 6.0, 5.0, 5.0, 6.0, 7.0, 8.0, 10.0, 12.0, 12.0, 12.0, 11.0, 10.0,
            9.0, 9.0, 9.0, 10.0, 10.0, 9.0, 9.0, 8.0,
        ],
        network_load: vec![
            8.0, 7.0, 6.0, 5.0, 5.0, 5.0, 6.0, 7.0, 8.0, 10.0, 12.0, 14.0, 14.0, 13.0, 12.0,
            11.0, 10.0, 9.0, 8.0, 7.0, 6.0, 6.0, 7.0, 8.0,
        ],
        patch_duration_hours: 2.5,
        weights: Weights {
            crew: 1.0,
            load: 1.0,
        },
        crew_required: Some(6.0),
        normalize: true,
    }
}

pub const OPTIMAL_SCHEDULE: &str = "optimal_schedule";
pub const RANK_CANDIDATES: &str = "rank_candidates";
pub const SAMPLE_REQUEST: &str = "sample_request";
