//! Public API surface for the patch window backend.
//!
//! This file consolidates the types that cross the HTTP boundary.
//! All types derive Serialize/Deserialize for JSON serialization.

pub use crate::algorithms::CrewShortfallPolicy;
pub use crate::algorithms::HourContribution;
pub use crate::algorithms::PriorityScore;
pub use crate::algorithms::PriorityScoringConfig;
pub use crate::algorithms::ScoredCandidate;
pub use crate::algorithms::Weights;
pub use crate::models::CrewMember;
pub use crate::models::NetworkLoadSample;
pub use crate::models::NewPatch;
pub use crate::models::Patch;
pub use crate::models::PatchId;
pub use crate::routes::optimal_schedule::CandidateListResponse;
pub use crate::routes::optimal_schedule::OptimalScheduleRequest;
pub use crate::routes::optimal_schedule::OptimalScheduleResponse;
pub use crate::routes::patches::PatchScoreQuery;
pub use crate::routes::patches::PatchScoreResponse;
pub use crate::routes::plans::PlanEntry;
pub use crate::routes::plans::PlanRequest;
pub use crate::routes::plans::ScheduledPatch;
pub use crate::routes::plans::SchedulePlan;
pub use crate::routes::stats::BestHoursResponse;
pub use crate::routes::stats::ForecastResponse;
pub use crate::routes::stats::LoadSlot;
pub use crate::routes::stats::SystemStats;

#[cfg(test)]
#[path = "api_tests.rs"]
mod tests;
