//! Maintenance window scoring and start-hour selection.
//!
//! Given one day of crew availability and network load, a patch duration and a
//! set of weights, this module finds the start hour whose window maximizes
//!
//! ```text
//! score = Σ segments ( w.crew · crew[h] · weight  −  w.load · load[h] · weight )
//! ```
//!
//! where `h` runs over the hours touched by the window (wrapping past
//! midnight) and `weight` is the fraction of that hour the window occupies.
//!
//! The pipeline is:
//!
//! 1. [`normalize_series`] rescales each series into `[0, 1]` (optional).
//! 2. [`weighted_hour_segments`] decomposes a window into `(hour, weight)` pairs.
//! 3. [`score_start_hour`] scores one candidate start, disqualifying it when a
//!    hard crew threshold is not met on every covered hour.
//! 4. [`find_optimal_start`] / [`rank_start_hours`] evaluate all 24 starts.
//!
//! All functions are pure: no caching, no shared state.

use serde::{Deserialize, Serialize};

use crate::models::{HourlySeries, HOURS_PER_DAY};

/// Remaining durations at or below this are treated as floating-point residue.
pub const SEGMENT_EPSILON: f64 = 1e-9;

/// Relative influence of crew availability and network load.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Weights {
    #[serde(default = "default_weight")]
    pub crew: f64,
    #[serde(default = "default_weight")]
    pub load: f64,
}

fn default_weight() -> f64 {
    1.0
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            crew: 1.0,
            load: 1.0,
        }
    }
}

/// The part of one calendar hour covered by a window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowSegment {
    pub hour: usize,
    /// Fraction of the hour occupied, in `(0, 1]`.
    pub weight: f64,
}

/// Per-hour breakdown of a scored window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourContribution {
    pub hour: usize,
    pub weight: f64,
    pub crew: f64,
    pub load: f64,
    pub crew_norm: f64,
    pub load_norm: f64,
    pub crew_contribution: f64,
    pub load_contribution: f64,
}

/// Result of scoring one start hour.
///
/// Infeasible candidates carry a score of `f64::NEG_INFINITY` and no
/// contributions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredCandidate {
    pub start_hour: usize,
    pub score: f64,
    pub contributions: Vec<HourContribution>,
}

impl ScoredCandidate {
    fn infeasible(start_hour: usize) -> Self {
        Self {
            start_hour,
            score: f64::NEG_INFINITY,
            contributions: Vec::new(),
        }
    }

    pub fn is_feasible(&self) -> bool {
        self.score > f64::NEG_INFINITY
    }

    /// Hours covered by this window, in window order.
    pub fn hours(&self) -> impl Iterator<Item = usize> + '_ {
        self.contributions.iter().map(|c| c.hour)
    }
}

/// Everything about a window search except the two series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowParams {
    /// Window length in hours, `0 < duration_hours <= 24`.
    pub duration_hours: f64,
    pub weights: Weights,
    /// Hard minimum raw crew availability for every covered hour.
    pub crew_required: Option<f64>,
    /// Rescale both series into `[0, 1]` before scoring.
    pub normalize: bool,
}

impl WindowParams {
    pub fn new(duration_hours: f64) -> Self {
        Self {
            duration_hours,
            weights: Weights::default(),
            crew_required: None,
            normalize: true,
        }
    }

    pub fn with_weights(mut self, weights: Weights) -> Self {
        self.weights = weights;
        self
    }

    pub fn with_crew_required(mut self, crew_required: Option<f64>) -> Self {
        self.crew_required = crew_required;
        self
    }

    pub fn with_normalize(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }
}

/// Error returned by the start-hour search.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WindowError {
    /// Every start hour touches at least one hour below the crew threshold.
    #[error("No feasible start hour satisfies the crew requirement ({crew_required}) for the full {duration_hours}h patch window")]
    NoFeasibleWindow {
        crew_required: f64,
        duration_hours: f64,
    },
}

/// Divide every value by the series maximum.
///
/// A series whose maximum is not positive (all zeros, or empty) is returned
/// unchanged so that downstream contributions are simply zero.
pub fn normalize_series(series: &[f64]) -> Vec<f64> {
    let max = series.iter().copied().fold(0.0, f64::max);
    if max <= 0.0 {
        return series.to_vec();
    }
    series.iter().map(|v| v / max).collect()
}

/// Split the window `[start_hour, start_hour + duration_hours)` into hourly
/// segments.
///
/// Every segment but the last has weight 1.0; the last carries the fractional
/// remainder. Hours wrap modulo 24.
pub fn weighted_hour_segments(start_hour: usize, duration_hours: f64) -> Vec<WindowSegment> {
    let mut segments = Vec::with_capacity(duration_hours.max(0.0).ceil() as usize);
    let mut remaining = duration_hours;
    let mut k = 0;

    while remaining > SEGMENT_EPSILON {
        let weight = remaining.min(1.0);
        segments.push(WindowSegment {
            hour: (start_hour + k) % HOURS_PER_DAY,
            weight,
        });
        remaining -= weight;
        k += 1;
    }

    segments
}

/// Score a single start hour.
///
/// The crew threshold is checked against the raw crew series regardless of
/// `params.normalize`, so it is always expressed in real-world units.
pub fn score_start_hour(
    start_hour: usize,
    crew: &HourlySeries,
    load: &HourlySeries,
    params: &WindowParams,
) -> ScoredCandidate {
    let segments = weighted_hour_segments(start_hour, params.duration_hours);
    // A window that covers no hour cannot meet any staffing requirement.
    if segments.is_empty() {
        return ScoredCandidate::infeasible(start_hour);
    }

    if let Some(required) = params.crew_required {
        if segments.iter().any(|s| crew.at(s.hour) < required) {
            return ScoredCandidate::infeasible(start_hour);
        }
    }

    let (crew_scaled, load_scaled) = if params.normalize {
        (normalize_series(crew.as_slice()), normalize_series(load.as_slice()))
    } else {
        (crew.as_slice().to_vec(), load.as_slice().to_vec())
    };

    let mut total = 0.0;
    let contributions = segments
        .iter()
        .map(|segment| {
            let hour = segment.hour;
            let crew_norm = crew_scaled[hour];
            let load_norm = load_scaled[hour];
            let crew_contribution = params.weights.crew * crew_norm * segment.weight;
            let load_contribution = -params.weights.load * load_norm * segment.weight;
            total += crew_contribution + load_contribution;

            HourContribution {
                hour,
                weight: segment.weight,
                crew: crew.at(hour),
                load: load.at(hour),
                crew_norm,
                load_norm,
                crew_contribution,
                load_contribution,
            }
        })
        .collect();

    ScoredCandidate {
        start_hour,
        score: total,
        contributions,
    }
}

/// Score every start hour of the day, in hour order.
pub fn score_all_start_hours(
    crew: &HourlySeries,
    load: &HourlySeries,
    params: &WindowParams,
) -> Vec<ScoredCandidate> {
    (0..HOURS_PER_DAY)
        .map(|start| score_start_hour(start, crew, load, params))
        .collect()
}

/// Find the best start hour.
///
/// Ties go to the earliest hour. Fails with [`WindowError::NoFeasibleWindow`]
/// when the crew threshold disqualifies every start.
pub fn find_optimal_start(
    crew: &HourlySeries,
    load: &HourlySeries,
    params: &WindowParams,
) -> Result<ScoredCandidate, WindowError> {
    let mut best: Option<ScoredCandidate> = None;

    for candidate in score_all_start_hours(crew, load, params) {
        let best_score = best.as_ref().map_or(f64::NEG_INFINITY, |b| b.score);
        if candidate.score > best_score {
            best = Some(candidate);
        }
    }

    match best {
        Some(candidate) => {
            log::debug!(
                "optimal start hour {} (score {:.4}, duration {}h)",
                candidate.start_hour,
                candidate.score,
                params.duration_hours
            );
            Ok(candidate)
        }
        None => {
            log::warn!(
                "no feasible window for {}h patch with crew_required={:?}",
                params.duration_hours,
                params.crew_required
            );
            Err(no_feasible_window(params))
        }
    }
}

/// All feasible start hours, best first.
///
/// Ties keep hour order, so the head of the list is always the
/// [`find_optimal_start`] answer. The list is empty when nothing is feasible.
pub fn rank_start_hours(
    crew: &HourlySeries,
    load: &HourlySeries,
    params: &WindowParams,
) -> Vec<ScoredCandidate> {
    let mut ranked: Vec<ScoredCandidate> = score_all_start_hours(crew, load, params)
        .into_iter()
        .filter(ScoredCandidate::is_feasible)
        .collect();

    // Stable sort: equal scores stay in ascending start-hour order.
    ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
    ranked
}

pub(crate) fn no_feasible_window(params: &WindowParams) -> WindowError {
    WindowError::NoFeasibleWindow {
        crew_required: params.crew_required.unwrap_or(f64::INFINITY),
        duration_hours: params.duration_hours,
    }
}

#[cfg(test)]
#[path = "window_tests.rs"]
mod window_tests;
