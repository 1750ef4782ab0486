use serde::{Deserialize, Serialize};

/// One low-load slot of the weekly profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadSlot {
    /// Three-letter day, e.g. `"Mon"`.
    pub day: String,
    pub hour: usize,
    /// Rounded to one decimal.
    pub load_kw: f64,
    pub label: String,
}

/// Lowest-load hours of the week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BestHoursResponse {
    pub best_hours: Vec<LoadSlot>,
    pub optimal_hour: Option<LoadSlot>,
}

/// Catalog-wide summary figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemStats {
    pub avg_network_load: f64,
    pub low_load_hours: Vec<LoadSlot>,
    pub total_crew_hours: u32,
    pub total_crew_members: usize,
    pub total_patches: usize,
    pub total_patch_hours: f64,
    pub high_priority_patches: usize,
}

/// 24-hour load forecast for one day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastResponse {
    pub day_number: usize,
    pub day_of_week: String,
    pub predicted_load: Vec<f64>,
}

pub const GET_STATS: &str = "get_stats";
pub const GET_BEST_HOURS: &str = "get_best_hours";
pub const GET_FORECAST: &str = "get_forecast";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_best_hours_serializes_missing_optimum_as_null() {
        let response = BestHoursResponse {
            best_hours: vec![],
            optimal_hour: None,
        };
        let value = serde_json::to_value(&response).unwrap();
        assert!(value["optimal_hour"].is_null());
    }
}
