//! End-to-end window selection through the public request/response types.

use patch_window::api::{OptimalScheduleRequest, Weights};
use patch_window::routes::optimal_schedule::sample_request;
use patch_window::services::{optimal_schedule, rank_candidates, OptimizeError};

fn flat_request(duration: f64) -> OptimalScheduleRequest {
    OptimalScheduleRequest {
        crew_availability: vec![4.0; 24],
        network_load: vec![20.0; 24],
        patch_duration_hours: duration,
        weights: Weights::default(),
        crew_required: None,
        normalize: true,
    }
}

#[test]
fn test_sample_request_picks_evening_window() {
    let response = optimal_schedule(&sample_request()).unwrap();
    assert_eq!(response.best_start_hour, 19);
    assert_eq!(response.contributions.len(), 3);
    assert_eq!(
        response.contributions.iter().map(|c| c.hour).collect::<Vec<_>>(),
        vec![19, 20, 21]
    );
    assert_eq!(response.contributions[2].weight, 0.5);
}

#[test]
fn test_sample_request_ranking() {
    let ranking = rank_candidates(&sample_request()).unwrap();
    // Starts whose window touches hours 5 or 6 (crew 5 < 6) are excluded.
    assert_eq!(ranking.total, 20);
    assert_eq!(ranking.candidates.len(), 20);
    assert_eq!(ranking.candidates[0].start_hour, 19);
    assert!(ranking
        .candidates
        .windows(2)
        .all(|w| w[0].score >= w[1].score));
    for excluded in [3, 4, 5, 6] {
        assert!(ranking.candidates.iter().all(|c| c.start_hour != excluded));
    }
}

#[test]
fn test_uniform_day_prefers_midnight() {
    let response = optimal_schedule(&flat_request(3.0)).unwrap();
    assert_eq!(response.best_start_hour, 0);
}

#[test]
fn test_quiet_hours_win_over_busy_ones() {
    let mut request = flat_request(2.0);
    request.network_load[14] = 1.0;
    request.network_load[15] = 1.0;
    let response = optimal_schedule(&request).unwrap();
    assert_eq!(response.best_start_hour, 14);
}

#[test]
fn test_full_day_window_wraps_every_hour() {
    let response = optimal_schedule(&flat_request(24.0)).unwrap();
    assert_eq!(response.contributions.len(), 24);
    assert_eq!(response.best_start_hour, 0);
}

#[test]
fn test_short_series_names_field() {
    let mut request = flat_request(1.0);
    request.network_load.pop();
    let err = optimal_schedule(&request).unwrap_err();
    assert_eq!(err.field(), Some("network_load"));
}

#[test]
fn test_negative_crew_value_is_rejected() {
    let mut request = flat_request(1.0);
    request.crew_availability[3] = -1.0;
    let err = optimal_schedule(&request).unwrap_err();
    assert_eq!(err.field(), Some("crew_availability"));
}

#[test]
fn test_duration_bounds() {
    for duration in [0.0, -1.0, 24.5, f64::NAN] {
        let err = optimal_schedule(&flat_request(duration)).unwrap_err();
        assert_eq!(err.field(), Some("patch_duration_hours"), "duration {duration}");
    }
}

#[test]
fn test_negative_weight_is_rejected() {
    let mut request = flat_request(1.0);
    request.weights.load = -0.5;
    let err = optimal_schedule(&request).unwrap_err();
    assert_eq!(err.field(), Some("weights.load"));
}

#[test]
fn test_unreachable_threshold_is_infeasible() {
    let mut request = flat_request(2.0);
    request.crew_required = Some(5.0);

    let err = optimal_schedule(&request).unwrap_err();
    assert!(matches!(err, OptimizeError::Infeasible(_)));
    assert_eq!(err.field(), None);

    let err = rank_candidates(&request).unwrap_err();
    assert!(matches!(err, OptimizeError::Infeasible(_)));
}
