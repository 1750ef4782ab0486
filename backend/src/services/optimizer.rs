//! Window-selection service.
//!
//! Validates an [`OptimalScheduleRequest`] field by field and runs the
//! start-hour search over it. Validation happens entirely before scoring, so a
//! request is either rejected with the name of the offending field, answered
//! with a full best candidate, or reported as infeasible.

use crate::algorithms::window::no_feasible_window;
use crate::algorithms::window::SEGMENT_EPSILON;
use crate::algorithms::{find_optimal_start, rank_start_hours, WindowError, WindowParams};
use crate::models::{FieldError, HourlySeries, SeriesError, MAX_DURATION_HOURS};
use crate::routes::optimal_schedule::{
    CandidateListResponse, OptimalScheduleRequest, OptimalScheduleResponse,
};

/// Failure of a window-selection request.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OptimizeError {
    /// Malformed input, rejected before scoring.
    #[error("Invalid {field}: {message}")]
    Validation { field: String, message: String },

    /// The crew threshold rules out every start hour.
    #[error(transparent)]
    Infeasible(#[from] WindowError),
}

impl OptimizeError {
    /// The request field that failed validation, if any.
    pub fn field(&self) -> Option<&str> {
        match self {
            OptimizeError::Validation { field, .. } => Some(field),
            OptimizeError::Infeasible(_) => None,
        }
    }
}

impl From<SeriesError> for OptimizeError {
    fn from(err: SeriesError) -> Self {
        OptimizeError::Validation {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<FieldError> for OptimizeError {
    fn from(err: FieldError) -> Self {
        OptimizeError::Validation {
            field: err.field,
            message: err.message,
        }
    }
}

/// A request that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedRequest {
    pub crew: HourlySeries,
    pub load: HourlySeries,
    pub params: WindowParams,
}

/// Check every field of `request`.
pub fn validate_request(request: &OptimalScheduleRequest) -> Result<ValidatedRequest, OptimizeError> {
    let crew = HourlySeries::from_slice("crew_availability", &request.crew_availability)?;
    let load = HourlySeries::from_slice("network_load", &request.network_load)?;

    let duration = request.patch_duration_hours;
    if !duration.is_finite() || duration <= SEGMENT_EPSILON || duration > MAX_DURATION_HOURS {
        return Err(FieldError::new(
            "patch_duration_hours",
            format!(
                "must be greater than 0 and at most {} (got {})",
                MAX_DURATION_HOURS, duration
            ),
        )
        .into());
    }

    for (field, value) in [
        ("weights.crew", request.weights.crew),
        ("weights.load", request.weights.load),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(FieldError::new(
                field,
                format!("must be a finite, non-negative number (got {})", value),
            )
            .into());
        }
    }

    if let Some(required) = request.crew_required {
        if !required.is_finite() {
            return Err(FieldError::new(
                "crew_required",
                format!("must be a finite number (got {})", required),
            )
            .into());
        }
    }

    let params = WindowParams::new(duration)
        .with_weights(request.weights)
        .with_crew_required(request.crew_required)
        .with_normalize(request.normalize);

    Ok(ValidatedRequest { crew, load, params })
}

/// Best start hour for `request`.
pub fn optimal_schedule(
    request: &OptimalScheduleRequest,
) -> Result<OptimalScheduleResponse, OptimizeError> {
    let validated = validate_request(request)?;
    let best = find_optimal_start(&validated.crew, &validated.load, &validated.params)?;
    Ok(best.into())
}

/// Every feasible start hour for `request`, best first.
///
/// An empty ranking is reported as infeasible rather than returned as an
/// empty list.
pub fn rank_candidates(
    request: &OptimalScheduleRequest,
) -> Result<CandidateListResponse, OptimizeError> {
    let validated = validate_request(request)?;
    let candidates = rank_start_hours(&validated.crew, &validated.load, &validated.params);
    if candidates.is_empty() {
        return Err(no_feasible_window(&validated.params).into());
    }

    Ok(CandidateListResponse {
        total: candidates.len(),
        candidates,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::Weights;
    use crate::routes::optimal_schedule::sample_request;

    #[test]
    fn test_sample_request_picks_evening_window() {
        let response = optimal_schedule(&sample_request()).unwrap();
        assert_eq!(response.best_start_hour, 19);
        assert_eq!(response.contributions.len(), 3);
        let weight_sum: f64 = response.contributions.iter().map(|c| c.weight).sum();
        assert!((weight_sum - 2.5).abs() < 1e-9);
    }

    #[test]
    fn test_wrong_length_series_names_field() {
        let mut request = sample_request();
        request.network_load.pop();
        let err = optimal_schedule(&request).unwrap_err();
        assert_eq!(err.field(), Some("network_load"));
    }

    #[test]
    fn test_negative_crew_value_names_field() {
        let mut request = sample_request();
        request.crew_availability[3] = -1.0;
        let err = optimal_schedule(&request).unwrap_err();
        assert_eq!(err.field(), Some("crew_availability"));
    }

    #[test]
    fn test_duration_bounds() {
        for duration in [0.0, -1.0, 24.01, f64::NAN] {
            let mut request = sample_request();
            request.patch_duration_hours = duration;
            let err = optimal_schedule(&request).unwrap_err();
            assert_eq!(err.field(), Some("patch_duration_hours"));
        }

        let mut request = sample_request();
        request.patch_duration_hours = 24.0;
        request.crew_required = None;
        assert!(optimal_schedule(&request).is_ok());
    }

    #[test]
    fn test_sub_epsilon_duration_is_rejected_not_scored() {
        let request = OptimalScheduleRequest {
            crew_availability: vec![1.0; 24],
            network_load: vec![1.0; 24],
            patch_duration_hours: 1e-10,
            weights: Weights::default(),
            crew_required: Some(100.0),
            normalize: true,
        };
        let err = optimal_schedule(&request).unwrap_err();
        assert_eq!(err.field(), Some("patch_duration_hours"));
        let err = rank_candidates(&request).unwrap_err();
        assert_eq!(err.field(), Some("patch_duration_hours"));
    }

    #[test]
    fn test_negative_weight_rejected() {
        let mut request = sample_request();
        request.weights = Weights {
            crew: 1.0,
            load: -0.5,
        };
        let err = optimal_schedule(&request).unwrap_err();
        assert_eq!(err.field(), Some("weights.load"));
    }

    #[test]
    fn test_infeasible_threshold_is_typed() {
        let mut request = sample_request();
        request.crew_required = Some(100.0);

        let err = optimal_schedule(&request).unwrap_err();
        assert!(matches!(err, OptimizeError::Infeasible(WindowError::NoFeasibleWindow { .. })));
        assert_eq!(err.field(), None);

        let err = rank_candidates(&request).unwrap_err();
        assert!(matches!(err, OptimizeError::Infeasible(_)));
    }

    #[test]
    fn test_rank_candidates_counts_feasible_starts() {
        let ranked = rank_candidates(&sample_request()).unwrap();
        assert_eq!(ranked.total, 20);
        assert_eq!(ranked.candidates[0].start_hour, 19);
    }
}
