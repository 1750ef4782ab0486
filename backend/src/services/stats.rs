//! Catalog and load-profile summaries.

use crate::models::{CrewMember, NetworkLoadSample, Patch};
use crate::routes::stats::{BestHoursResponse, LoadSlot, SystemStats};

/// Number of low-load slots reported in [`SystemStats`].
pub const LOW_LOAD_SLOTS: usize = 5;

impl From<&NetworkLoadSample> for LoadSlot {
    fn from(sample: &NetworkLoadSample) -> Self {
        LoadSlot {
            day: sample.short_day(),
            hour: sample.hour,
            load_kw: round1(sample.load_kilowatts),
            label: sample.short_label(),
        }
    }
}

/// The `n` lowest-load samples, ascending. Equal loads keep their input order.
pub fn best_hours(samples: &[NetworkLoadSample], n: usize) -> Vec<&NetworkLoadSample> {
    let mut sorted: Vec<&NetworkLoadSample> = samples
        .iter()
        .filter(|s| s.load_kilowatts.is_finite())
        .collect();
    sorted.sort_by(|a, b| a.load_kilowatts.total_cmp(&b.load_kilowatts));
    sorted.truncate(n);
    sorted
}

pub fn best_hours_response(samples: &[NetworkLoadSample], n: usize) -> BestHoursResponse {
    let best_hours: Vec<LoadSlot> = best_hours(samples, n).into_iter().map(LoadSlot::from).collect();
    BestHoursResponse {
        optimal_hour: best_hours.first().cloned(),
        best_hours,
    }
}

pub fn system_stats(
    samples: &[NetworkLoadSample],
    roster: &[CrewMember],
    patches: &[Patch],
) -> SystemStats {
    let avg_network_load = if samples.is_empty() {
        0.0
    } else {
        let total: f64 = samples.iter().map(|s| s.load_kilowatts).sum();
        round1(total / samples.len() as f64)
    };

    SystemStats {
        avg_network_load,
        low_load_hours: best_hours(samples, LOW_LOAD_SLOTS)
            .into_iter()
            .map(LoadSlot::from)
            .collect(),
        total_crew_hours: roster.iter().map(CrewMember::available_hour_count).sum(),
        total_crew_members: roster.len(),
        total_patches: patches.len(),
        total_patch_hours: patches.iter().map(|p| p.duration).sum(),
        high_priority_patches: patches.iter().filter(|p| p.is_high_priority()).count(),
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
