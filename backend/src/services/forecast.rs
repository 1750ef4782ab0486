//! Network load forecasting.
//!
//! The window search only needs a 24-value load series, so any source that
//! can predict load per (day, hour) can drive it. [`HistoricalProfileForecaster`]
//! is the shipped implementation: plain means over the observed weekly profile.

use std::collections::HashMap;

use crate::models::{HourlySeries, NetworkLoadSample, DAYS_PER_WEEK, HOURS_PER_DAY};

/// Predicts network load for an hour of a given weekday.
pub trait LoadForecaster: Send + Sync {
    /// Predicted load in kW, or `None` when nothing is known about that hour.
    fn predict(&self, day_number: usize, hour: usize) -> Option<f64>;

    /// Full 24-hour forecast for `day_number`, if every hour is predictable.
    fn forecast_day(&self, day_number: usize) -> Option<HourlySeries> {
        let mut values = [0.0; HOURS_PER_DAY];
        for (hour, slot) in values.iter_mut().enumerate() {
            *slot = self.predict(day_number, hour)?;
        }
        HourlySeries::new(values).ok()
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct Mean {
    sum: f64,
    count: usize,
}

impl Mean {
    fn add(&mut self, value: f64) {
        self.sum += value;
        self.count += 1;
    }

    fn value(&self) -> Option<f64> {
        (self.count > 0).then(|| self.sum / self.count as f64)
    }
}

/// Mean load per (day, hour), falling back to the mean of that hour across
/// every day when the exact slot was never observed.
#[derive(Debug, Clone, Default)]
pub struct HistoricalProfileForecaster {
    by_slot: HashMap<(usize, usize), Mean>,
    by_hour: HashMap<usize, Mean>,
}

impl HistoricalProfileForecaster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a forecaster from observed samples.
    ///
    /// Samples with a non-finite load or an hour outside the day are skipped.
    pub fn fit(samples: &[NetworkLoadSample]) -> Self {
        let mut forecaster = Self::new();
        for sample in samples {
            forecaster.observe(sample);
        }
        log::debug!(
            "fitted load forecaster on {} samples ({} slots)",
            samples.len(),
            forecaster.by_slot.len()
        );
        forecaster
    }

    pub fn observe(&mut self, sample: &NetworkLoadSample) {
        if !sample.load_kilowatts.is_finite() || sample.hour >= HOURS_PER_DAY {
            return;
        }
        let day = sample.day_number % DAYS_PER_WEEK;
        self.by_slot
            .entry((day, sample.hour))
            .or_default()
            .add(sample.load_kilowatts);
        self.by_hour
            .entry(sample.hour)
            .or_default()
            .add(sample.load_kilowatts);
    }

    pub fn is_empty(&self) -> bool {
        self.by_slot.is_empty()
    }
}

impl LoadForecaster for HistoricalProfileForecaster {
    fn predict(&self, day_number: usize, hour: usize) -> Option<f64> {
        let hour = hour % HOURS_PER_DAY;
        self.by_slot
            .get(&(day_number % DAYS_PER_WEEK, hour))
            .and_then(Mean::value)
            .or_else(|| self.by_hour.get(&hour).and_then(Mean::value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_slot_mean() {
        let samples = vec![
            NetworkLoadSample::new(1, 3, 10.0),
            NetworkLoadSample::new(1, 3, 20.0),
            NetworkLoadSample::new(2, 3, 100.0),
        ];
        let forecaster = HistoricalProfileForecaster::fit(&samples);
        assert_eq!(forecaster.predict(1, 3), Some(15.0));
        assert_eq!(forecaster.predict(8, 3), Some(15.0));
    }

    #[test]
    fn test_falls_back_to_hour_mean() {
        let samples = vec![
            NetworkLoadSample::new(0, 4, 10.0),
            NetworkLoadSample::new(1, 4, 30.0),
        ];
        let forecaster = HistoricalProfileForecaster::fit(&samples);
        assert_eq!(forecaster.predict(5, 4), Some(20.0));
        assert_eq!(forecaster.predict(5, 5), None);
    }

    #[test]
    fn test_forecast_day_requires_every_hour() {
        let partial: Vec<NetworkLoadSample> =
            (0..23).map(|h| NetworkLoadSample::new(0, h, 5.0)).collect();
        assert!(HistoricalProfileForecaster::fit(&partial).forecast_day(0).is_none());

        let full: Vec<NetworkLoadSample> =
            (0..24).map(|h| NetworkLoadSample::new(0, h, h as f64)).collect();
        let series = HistoricalProfileForecaster::fit(&full).forecast_day(3).unwrap();
        assert_eq!(series.at(0), 0.0);
        assert_eq!(series.at(23), 23.0);
    }

    #[test]
    fn test_skips_unusable_samples() {
        let samples = vec![
            NetworkLoadSample::new(0, 1, f64::NAN),
            NetworkLoadSample::new(0, 30, 5.0),
        ];
        let forecaster = HistoricalProfileForecaster::fit(&samples);
        assert!(forecaster.is_empty());
        assert_eq!(forecaster.predict(0, 1), None);
    }
}
