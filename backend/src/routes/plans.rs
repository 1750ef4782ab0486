use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::algorithms::PriorityScore;
use crate::models::Patch;

/// Request to plan the whole patch catalog into one day.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanRequest {
    /// 0 = Monday, 6 = Sunday.
    #[serde(default)]
    pub day_number: usize,
}

/// A patch that found a staffed window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledPatch {
    pub patch: Patch,
    pub start_hour: usize,
    /// `start_hour + duration`; may exceed 24 when the window wraps.
    pub end_hour: f64,
    pub assigned_crew: Vec<String>,
    /// Network load at the start hour.
    pub network_load: f64,
    /// Composite window score from the start-hour search.
    pub window_score: f64,
    pub priority_score: PriorityScore,
}

/// Outcome for one patch in a plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PlanEntry {
    Scheduled(ScheduledPatch),
    Unscheduled { patch: Patch, reason: String },
}

impl PlanEntry {
    pub fn patch(&self) -> &Patch {
        match self {
            PlanEntry::Scheduled(scheduled) => &scheduled.patch,
            PlanEntry::Unscheduled { patch, .. } => patch,
        }
    }

    pub fn is_scheduled(&self) -> bool {
        matches!(self, PlanEntry::Scheduled(_))
    }
}

/// A day plan for the patch catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchedulePlan {
    pub plan_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub day_number: usize,
    pub day_of_week: String,
    pub entries: Vec<PlanEntry>,
    pub scheduled_count: usize,
    pub unscheduled_count: usize,
}

impl SchedulePlan {
    pub fn new(day_number: usize, entries: Vec<PlanEntry>) -> Self {
        let scheduled_count = entries.iter().filter(|e| e.is_scheduled()).count();
        Self {
            plan_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            day_number,
            day_of_week: crate::models::day_name(day_number).to_string(),
            unscheduled_count: entries.len() - scheduled_count,
            scheduled_count,
            entries,
        }
    }
}

pub const CREATE_PLAN: &str = "create_plan";
pub const GET_PLAN: &str = "get_plan";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PatchId;

    fn patch() -> Patch {
        Patch {
            id: PatchId::new(2),
            name: "Web Server Patch".to_string(),
            duration: 1.0,
            priority: 3,
            min_crew: 1,
        }
    }

    #[test]
    fn test_unscheduled_entry_is_tagged() {
        let entry = PlanEntry::Unscheduled {
            patch: patch(),
            reason: "Insufficient crew availability".to_string(),
        };
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["status"], "unscheduled");
        assert_eq!(value["patch"]["id"], 2);
        assert_eq!(value["reason"], "Insufficient crew availability");
    }

    #[test]
    fn test_plan_counts() {
        let plan = SchedulePlan::new(
            5,
            vec![PlanEntry::Unscheduled {
                patch: patch(),
                reason: "none".to_string(),
            }],
        );
        assert_eq!(plan.day_of_week, "Saturday");
        assert_eq!(plan.scheduled_count, 0);
        assert_eq!(plan.unscheduled_count, 1);
    }
}
