//! Network load samples and the weekly load profile.

use serde::{Deserialize, Serialize};

use super::series::{HourlySeries, SeriesError, DAYS_PER_WEEK, HOURS_PER_DAY};

/// Day names indexed by day number (0 = Monday).
pub const DAY_NAMES: [&str; DAYS_PER_WEEK] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Name of a day index, wrapping past Sunday.
pub fn day_name(day_number: usize) -> &'static str {
    DAY_NAMES[day_number % DAYS_PER_WEEK]
}

/// Saturday and Sunday.
pub fn is_weekend(day_number: usize) -> bool {
    day_number % DAYS_PER_WEEK >= 5
}

/// Observed (or predicted) network load for one hour of one day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkLoadSample {
    pub hour: usize,
    pub load_kilowatts: f64,
    pub day_of_week: String,
    /// 0 = Monday, 6 = Sunday.
    pub day_number: usize,
}

impl NetworkLoadSample {
    pub fn new(day_number: usize, hour: usize, load_kilowatts: f64) -> Self {
        Self {
            hour,
            load_kilowatts,
            day_of_week: day_name(day_number).to_string(),
            day_number,
        }
    }

    /// Three-letter day abbreviation, e.g. `"Mon"`.
    pub fn short_day(&self) -> String {
        self.day_of_week.chars().take(3).collect()
    }

    /// `"Mon 3:00"` style label.
    pub fn short_label(&self) -> String {
        format!("{} {}:00", self.short_day(), self.hour)
    }
}

/// Extract one day of a weekly profile as an [`HourlySeries`].
///
/// Hours with no sample are an error: the search needs all 24 values.
/// When several samples cover the same hour the last one wins.
pub fn day_series(samples: &[NetworkLoadSample], day_number: usize) -> Result<HourlySeries, SeriesError> {
    let field = format!("network_load[{}]", day_name(day_number));
    let mut values = [None; HOURS_PER_DAY];

    for sample in samples
        .iter()
        .filter(|s| s.day_number == day_number && s.hour < HOURS_PER_DAY)
    {
        values[sample.hour] = Some(sample.load_kilowatts);
    }

    let present: Vec<f64> = values.iter().flatten().copied().collect();
    if present.len() != HOURS_PER_DAY {
        return Err(SeriesError::WrongLength {
            field,
            expected: HOURS_PER_DAY,
            actual: present.len(),
        });
    }

    HourlySeries::from_slice(&field, &present)
}
