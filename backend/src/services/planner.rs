//! Sequential multi-patch planner.
//!
//! Places a whole patch list into one day by running the single-window search
//! once per patch, highest priority first, and removing crew that earlier
//! patches already hold from the availability seen by later ones. This is a
//! greedy composition of the window primitive, not a joint optimizer.

use std::collections::{HashMap, HashSet};

use crate::algorithms::window::SEGMENT_EPSILON;
use crate::algorithms::{
    rank_start_hours, score_patch, PriorityScoringConfig, ScoredCandidate, Weights, WindowParams,
};
use crate::models::{CrewMember, HourlySeries, Patch, HOURS_PER_DAY, MAX_DURATION_HOURS};
use crate::routes::plans::{PlanEntry, ScheduledPatch};

pub const REASON_INSUFFICIENT_CREW: &str = "Insufficient crew availability";
pub const REASON_INVALID_DURATION: &str = "Patch duration must be within (0, 24] hours";

/// Window weights and scoring rules used for every patch in a run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlannerConfig {
    pub weights: Weights,
    pub normalize: bool,
    pub scoring: PriorityScoringConfig,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            weights: Weights::default(),
            normalize: true,
            scoring: PriorityScoringConfig::default(),
        }
    }
}

/// Crew members already committed to a patch, per hour.
///
/// One planner run owns one allocation and is its only writer.
#[derive(Debug, Clone, Default)]
pub struct CrewAllocation {
    busy: HashMap<usize, HashSet<String>>,
}

impl CrewAllocation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_busy(&self, hour: usize, name: &str) -> bool {
        self.busy
            .get(&(hour % HOURS_PER_DAY))
            .is_some_and(|names| names.contains(name))
    }

    pub fn busy_count(&self, hour: usize) -> usize {
        self.busy.get(&(hour % HOURS_PER_DAY)).map_or(0, HashSet::len)
    }

    /// Mark `names` busy for every hour in `hours`.
    pub fn assign<I>(&mut self, hours: I, names: &[String])
    where
        I: IntoIterator<Item = usize>,
    {
        for hour in hours {
            self.busy
                .entry(hour % HOURS_PER_DAY)
                .or_default()
                .extend(names.iter().cloned());
        }
    }
}

/// Roster members available at `hour` and not yet allocated.
pub fn free_crew_at<'a>(
    roster: &'a [CrewMember],
    allocation: &'a CrewAllocation,
    hour: usize,
) -> impl Iterator<Item = &'a CrewMember> + 'a {
    roster
        .iter()
        .filter(move |m| m.is_available(hour) && !allocation.is_busy(hour, &m.name))
}

/// Free crew count per hour, as a crew-availability series.
pub fn free_crew_series(roster: &[CrewMember], allocation: &CrewAllocation) -> HourlySeries {
    let mut counts = [0.0; HOURS_PER_DAY];
    for (hour, slot) in counts.iter_mut().enumerate() {
        *slot = free_crew_at(roster, allocation, hour).count() as f64;
    }
    HourlySeries::new(counts).unwrap_or_default()
}

/// Members free for every hour of `candidate`, in roster order, capped at `needed`.
fn staff_window(
    roster: &[CrewMember],
    allocation: &CrewAllocation,
    candidate: &ScoredCandidate,
    needed: usize,
) -> Vec<String> {
    let hours: Vec<usize> = candidate.hours().collect();
    roster
        .iter()
        .filter(|m| {
            hours
                .iter()
                .all(|&h| m.is_available(h) && !allocation.is_busy(h, &m.name))
        })
        .take(needed)
        .map(|m| m.name.clone())
        .collect()
}

/// Plan `patches` into one day.
///
/// Patches are taken by priority, highest first; equal priorities keep their
/// input order. The returned entries follow that processing order.
pub fn plan_patches(
    patches: &[Patch],
    roster: &[CrewMember],
    load: &HourlySeries,
    day_number: usize,
    config: &PlannerConfig,
) -> Vec<PlanEntry> {
    let mut ordered: Vec<&Patch> = patches.iter().collect();
    ordered.sort_by(|a, b| b.priority.cmp(&a.priority));

    let mut allocation = CrewAllocation::new();
    let mut entries = Vec::with_capacity(ordered.len());

    for patch in ordered {
        let entry = place_patch(patch, roster, load, day_number, config, &mut allocation);
        match &entry {
            PlanEntry::Scheduled(s) => log::debug!(
                "patch {} ({}) placed at {}:00 with crew {:?}",
                patch.id,
                patch.name,
                s.start_hour,
                s.assigned_crew
            ),
            PlanEntry::Unscheduled { reason, .. } => {
                log::warn!("patch {} ({}) left unscheduled: {}", patch.id, patch.name, reason)
            }
        }
        entries.push(entry);
    }

    entries
}

fn place_patch(
    patch: &Patch,
    roster: &[CrewMember],
    load: &HourlySeries,
    day_number: usize,
    config: &PlannerConfig,
    allocation: &mut CrewAllocation,
) -> PlanEntry {
    if !patch.duration.is_finite()
        || patch.duration <= SEGMENT_EPSILON
        || patch.duration > MAX_DURATION_HOURS
    {
        return PlanEntry::Unscheduled {
            patch: patch.clone(),
            reason: REASON_INVALID_DURATION.to_string(),
        };
    }

    let crew = free_crew_series(roster, allocation);
    let params = WindowParams::new(patch.duration)
        .with_weights(config.weights)
        .with_normalize(config.normalize)
        .with_crew_required(Some(f64::from(patch.min_crew)));
    let needed = patch.min_crew as usize;

    // Per-hour counts can pass while no single group covers the whole window,
    // so walk down the ranking until a window can actually be staffed.
    for candidate in rank_start_hours(&crew, load, &params) {
        let assigned = staff_window(roster, allocation, &candidate, needed);
        if assigned.len() < needed {
            continue;
        }

        let start_hour = candidate.start_hour;
        let network_load = load.at(start_hour);
        let available_at_start = free_crew_at(roster, allocation, start_hour).count();
        let priority_score = score_patch(
            patch,
            start_hour,
            day_number,
            network_load,
            available_at_start,
            &config.scoring,
        );

        allocation.assign(candidate.hours(), &assigned);

        return PlanEntry::Scheduled(ScheduledPatch {
            patch: patch.clone(),
            start_hour,
            end_hour: start_hour as f64 + patch.duration,
            assigned_crew: assigned,
            network_load,
            window_score: candidate.score,
            priority_score,
        });
    }

    PlanEntry::Unscheduled {
        patch: patch.clone(),
        reason: REASON_INSUFFICIENT_CREW.to_string(),
    }
}
