//! Service layer for patch window planning.
//!
//! Services sit between the HTTP handlers and the pure algorithms: they
//! validate requests, compose the window search into multi-patch plans and
//! summarize the load profile. Nothing in here touches the repository; callers
//! fetch data first and pass it in.

pub mod forecast;
pub mod optimizer;
pub mod planner;
pub mod stats;

pub use forecast::{HistoricalProfileForecaster, LoadForecaster};
pub use optimizer::{optimal_schedule, rank_candidates, validate_request, OptimizeError};
pub use planner::{plan_patches, CrewAllocation, PlannerConfig};
pub use stats::{best_hours, best_hours_response, system_stats};
