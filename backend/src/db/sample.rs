//! Demo catalog used to seed the local repository.
//!
//! The weekly load profile follows a utility-style pattern: weekday business
//! hours are busiest, weekday mornings and evenings moderate, nights and
//! weekend nights quietest. Values vary within each band by a fixed
//! (day, hour) phase so the profile is the same on every run.

use crate::models::{
    CrewMember, NetworkLoadSample, NewPatch, Patch, PatchId, DAYS_PER_WEEK, HOURS_PER_DAY,
};

/// `(low, high)` kW band for an hour of a day.
fn load_band(day_number: usize, hour: usize) -> (f64, f64) {
    if day_number < 5 {
        match hour {
            9..=17 => (45.0, 85.0),
            6..=8 | 18..=22 => (35.0, 55.0),
            _ => (8.0, 25.0),
        }
    } else {
        match hour {
            10..=20 => (25.0, 45.0),
            _ => (5.0, 18.0),
        }
    }
}

/// Deterministic load for one (day, hour), rounded to two decimals.
pub fn sample_load(day_number: usize, hour: usize) -> f64 {
    let (low, high) = load_band(day_number, hour);
    let phase = ((day_number * 5 + hour * 7) % 11) as f64 / 10.0;
    let value = low + (high - low) * phase;
    (value * 100.0).round() / 100.0
}

/// 168 samples, Monday 00:00 through Sunday 23:00.
pub fn sample_network_loads() -> Vec<NetworkLoadSample> {
    (0..DAYS_PER_WEEK)
        .flat_map(|day| {
            (0..HOURS_PER_DAY).map(move |hour| NetworkLoadSample::new(day, hour, sample_load(day, hour)))
        })
        .collect()
}

pub fn sample_crew() -> Vec<CrewMember> {
    vec![
        CrewMember::new("Alice Chen", vec![(0, 8), (20, 24)], 5),
        CrewMember::new("Bob Martinez", vec![(6, 14), (22, 24)], 4),
        CrewMember::new("Carol Davis", vec![(18, 24)], 5),
        CrewMember::new("David Kim", vec![(0, 6), (22, 24)], 3),
        CrewMember::new("Eve Thompson", vec![(1, 9), (19, 24)], 4),
    ]
}

/// Patch definitions without ids; the repository allocates those.
pub fn sample_new_patches() -> Vec<NewPatch> {
    [
        ("Database Security Update", 2.0, 5, 2),
        ("Web Server Patch", 1.0, 3, 1),
        ("Core Network Firmware", 3.0, 5, 3),
        ("Application Server Update", 1.5, 4, 2),
        ("Backup System Patch", 2.0, 2, 1),
    ]
    .into_iter()
    .map(|(name, duration, priority, min_crew)| NewPatch {
        name: name.to_string(),
        duration,
        priority,
        min_crew,
    })
    .collect()
}

/// Sample patches with ids `1..=5`, for callers that do not go through a repository.
pub fn sample_patches() -> Vec<Patch> {
    sample_new_patches()
        .into_iter()
        .zip(1..)
        .map(|(patch, id)| patch.into_patch(PatchId::new(id)))
        .collect()
}
