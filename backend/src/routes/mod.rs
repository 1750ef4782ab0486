pub mod optimal_schedule;
pub mod patches;
pub mod plans;
pub mod stats;
