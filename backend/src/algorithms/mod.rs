//! Scoring algorithms.
//!
//! - [`window`]: which start hour to use for one patch.
//! - [`priority`]: how attractive an hour is for a given patch, on a 0–100 scale.

pub mod priority;
pub mod window;

pub use priority::{score_patch, CrewShortfallPolicy, PriorityScore, PriorityScoringConfig};
pub use window::{
    find_optimal_start, normalize_series, rank_start_hours, score_all_start_hours,
    score_start_hour, weighted_hour_segments, HourContribution, ScoredCandidate, Weights,
    WindowError, WindowParams, WindowSegment,
};
