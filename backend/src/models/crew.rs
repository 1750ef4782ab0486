//! Crew members and roster-level availability.

use serde::{Deserialize, Serialize};

use super::series::{HourlySeries, HOURS_PER_DAY};

/// A crew member with the hours of the day they can work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrewMember {
    pub name: String,
    /// Half-open `[start, end)` hour ranges within one day.
    pub available_hours: Vec<(u32, u32)>,
    /// 1 (junior) to 5 (most skilled).
    pub skill_level: u8,
}

impl CrewMember {
    pub fn new(name: impl Into<String>, available_hours: Vec<(u32, u32)>, skill_level: u8) -> Self {
        Self {
            name: name.into(),
            available_hours,
            skill_level,
        }
    }

    /// True when some range satisfies `start <= hour < end`.
    pub fn is_available(&self, hour: usize) -> bool {
        self.available_hours
            .iter()
            .any(|&(start, end)| (start as usize) <= hour && hour < end as usize)
    }

    /// Total hours covered by all availability ranges.
    pub fn available_hour_count(&self) -> u32 {
        self.available_hours
            .iter()
            .map(|&(start, end)| end.saturating_sub(start))
            .sum()
    }
}

/// Collapse a roster into a crew-availability series: the number of members
/// available at each hour of the day.
pub fn crew_availability_series(roster: &[CrewMember]) -> HourlySeries {
    let mut counts = [0.0; HOURS_PER_DAY];
    for (hour, slot) in counts.iter_mut().enumerate() {
        *slot = roster.iter().filter(|m| m.is_available(hour)).count() as f64;
    }
    // Counts are finite and non-negative by construction.
    HourlySeries::new(counts).unwrap_or_default()
}
