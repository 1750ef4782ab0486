use super::*;
use serde_json::json;

#[test]
fn test_patch_id_serializes_as_plain_number() {
    let value = serde_json::to_value(PatchId::new(101)).unwrap();
    assert_eq!(value, json!(101));
    let id: PatchId = serde_json::from_value(json!(7)).unwrap();
    assert_eq!(id, PatchId::new(7));
}

#[test]
fn test_new_patch_fills_missing_fields() {
    let patch: NewPatch = serde_json::from_value(json!({ "name": "Kernel update" })).unwrap();
    assert_eq!(patch.name, "Kernel update");
    assert_eq!(patch.duration, 1.0);
    assert_eq!(patch.priority, 3);
    assert_eq!(patch.min_crew, 1);
}

#[test]
fn test_optimal_schedule_request_defaults() {
    let request: OptimalScheduleRequest = serde_json::from_value(json!({
        "crew_availability": vec![1.0; 24],
        "network_load": vec![1.0; 24],
        "patch_duration_hours": 2.0
    }))
    .unwrap();
    assert_eq!(request.weights, Weights { crew: 1.0, load: 1.0 });
    assert_eq!(request.crew_required, None);
    assert!(request.normalize);
}

#[test]
fn test_unscheduled_entry_is_tagged() {
    let patch = NewPatch::default().into_patch(PatchId::new(1));
    let entry = PlanEntry::Unscheduled {
        patch,
        reason: "Insufficient crew availability".to_string(),
    };
    let value = serde_json::to_value(&entry).unwrap();
    assert_eq!(value["status"], "unscheduled");
    assert_eq!(value["reason"], "Insufficient crew availability");
    assert_eq!(value["patch"]["id"], 1);
}

#[test]
fn test_shortfall_policy_uses_snake_case() {
    let value = serde_json::to_value(CrewShortfallPolicy::ZeroTotal).unwrap();
    assert_eq!(value, json!("zero_total"));
    let config: PriorityScoringConfig = serde_json::from_value(json!({})).unwrap();
    assert_eq!(config, PriorityScoringConfig::default());
}

#[test]
fn test_plan_request_day_defaults_to_monday() {
    let request: PlanRequest = serde_json::from_value(json!({})).unwrap();
    assert_eq!(request.day_number, 0);
}
