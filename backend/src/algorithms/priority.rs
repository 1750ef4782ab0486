//! Multi-factor patch priority scoring.
//!
//! Where [`super::window`] ranks *which hour* to use for one patch, this
//! scorer ranks *which patch* to place into an hour. The score is the sum of
//! five point bands, clamped to `[0, 100]`:
//!
//! | band          | points | rule                                                  |
//! |---------------|--------|-------------------------------------------------------|
//! | network load  | 0–40   | `<20 → 40`, `<30 → 30`, `<40 → 20`, `<50 → 10`, floor  |
//! | time of day   | 0–20   | night 20, morning 15, business 5, evening 12, late 18  |
//! | crew surplus  | 0–30   | `≥2× → 30`, `≥+2 → 25`, `≥+1 → 20`, `== → 15`, short 0 |
//! | priority      | 0–30   | `priority / 5 × 30`                                   |
//! | weekend       | 0–10   | Saturday or Sunday                                    |

use serde::{Deserialize, Serialize};

use crate::models::{is_weekend, Patch, MAX_PRIORITY};

/// Upper bound of the load band floor; anything higher would outrank `<50`.
pub const MAX_LOAD_FLOOR_POINTS: f64 = 10.0;

/// What happens to the score when fewer crew are available than the patch needs.
///
/// Either way the candidate is flagged infeasible for placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CrewShortfallPolicy {
    /// Only the crew band drops to zero; the other bands still count.
    #[default]
    ZeroBand,
    /// The whole score is forced to zero.
    ZeroTotal,
}

/// Tunables for [`score_patch`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriorityScoringConfig {
    /// Points awarded when load is 50 kW or more.
    #[serde(default)]
    pub load_floor_points: f64,
    #[serde(default)]
    pub crew_shortfall: CrewShortfallPolicy,
}

impl Default for PriorityScoringConfig {
    fn default() -> Self {
        Self {
            load_floor_points: 0.0,
            crew_shortfall: CrewShortfallPolicy::ZeroBand,
        }
    }
}

/// Band-by-band breakdown of a priority score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriorityScore {
    pub total: f64,
    pub load_points: f64,
    pub time_of_day_points: f64,
    pub crew_points: f64,
    pub priority_points: f64,
    pub weekend_points: f64,
    /// False when available crew is below the patch's `min_crew`.
    pub feasible: bool,
}

pub fn load_band(load_kw: f64, floor_points: f64) -> f64 {
    if load_kw < 20.0 {
        40.0
    } else if load_kw < 30.0 {
        30.0
    } else if load_kw < 40.0 {
        20.0
    } else if load_kw < 50.0 {
        10.0
    } else {
        floor_points.clamp(0.0, MAX_LOAD_FLOOR_POINTS)
    }
}

pub fn time_of_day_band(hour: usize) -> f64 {
    match hour % 24 {
        0..=5 => 20.0,   // night
        6..=8 => 15.0,   // morning
        9..=16 => 5.0,   // business hours
        17..=21 => 12.0, // evening
        _ => 18.0,       // late night
    }
}

/// `None` when the patch is understaffed.
pub fn crew_band(available: usize, min_crew: u32) -> Option<f64> {
    let required = min_crew as usize;
    if available >= required * 2 {
        Some(30.0)
    } else if available >= required + 2 {
        Some(25.0)
    } else if available >= required + 1 {
        Some(20.0)
    } else if available >= required {
        Some(15.0)
    } else {
        None
    }
}

pub fn priority_band(priority: u8) -> f64 {
    f64::from(priority.min(MAX_PRIORITY)) * 30.0 / f64::from(MAX_PRIORITY)
}

pub fn weekend_band(day_number: usize) -> f64 {
    if is_weekend(day_number) {
        10.0
    } else {
        0.0
    }
}

/// Score placing `patch` at `start_hour` on `day_number`.
pub fn score_patch(
    patch: &Patch,
    start_hour: usize,
    day_number: usize,
    load_kw: f64,
    available_crew: usize,
    config: &PriorityScoringConfig,
) -> PriorityScore {
    let load_points = load_band(load_kw, config.load_floor_points);
    let time_of_day_points = time_of_day_band(start_hour);
    let priority_points = priority_band(patch.priority);
    let weekend_points = weekend_band(day_number);
    let crew = crew_band(available_crew, patch.min_crew);
    let feasible = crew.is_some();
    let crew_points = crew.unwrap_or(0.0);

    let raw = load_points + time_of_day_points + crew_points + priority_points + weekend_points;
    let total = if !feasible && config.crew_shortfall == CrewShortfallPolicy::ZeroTotal {
        0.0
    } else {
        round2(raw.clamp(0.0, 100.0))
    };

    PriorityScore {
        total,
        load_points,
        time_of_day_points,
        crew_points,
        priority_points,
        weekend_points,
        feasible,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
#[path = "priority_tests.rs"]
mod priority_tests;
