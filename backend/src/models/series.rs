//! Fixed-length hourly series.

use serde::{Deserialize, Serialize};

/// Number of hourly samples in one day.
pub const HOURS_PER_DAY: usize = 24;

/// Number of days in a weekly profile.
pub const DAYS_PER_WEEK: usize = 7;

/// Number of hourly samples in one week.
pub const HOURS_PER_WEEK: usize = HOURS_PER_DAY * DAYS_PER_WEEK;

/// Error raised when untrusted input cannot be turned into an [`HourlySeries`].
///
/// Every variant names the offending field so it can be reported back to the
/// caller unchanged.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SeriesError {
    #[error("{field} must contain exactly {expected} values, got {actual}")]
    WrongLength {
        field: String,
        expected: usize,
        actual: usize,
    },

    #[error("{field}[{index}] must be a finite, non-negative number (got {value})")]
    InvalidValue {
        field: String,
        index: usize,
        value: f64,
    },
}

impl SeriesError {
    /// Name of the input field that failed validation.
    pub fn field(&self) -> &str {
        match self {
            SeriesError::WrongLength { field, .. } => field,
            SeriesError::InvalidValue { field, .. } => field,
        }
    }
}

/// Exactly 24 non-negative, finite samples; index 0 is hour 0 of the day.
///
/// Used for both the network load profile (lower is better) and the crew
/// availability profile (higher is better).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct HourlySeries([f64; HOURS_PER_DAY]);

impl HourlySeries {
    /// Build a series from a fixed array, rejecting negative or non-finite samples.
    pub fn new(values: [f64; HOURS_PER_DAY]) -> Result<Self, SeriesError> {
        Self::from_slice("series", &values)
    }

    /// Build a series from an arbitrary slice, reporting failures against `field`.
    pub fn from_slice(field: &str, values: &[f64]) -> Result<Self, SeriesError> {
        if values.len() != HOURS_PER_DAY {
            return Err(SeriesError::WrongLength {
                field: field.to_string(),
                expected: HOURS_PER_DAY,
                actual: values.len(),
            });
        }

        let mut out = [0.0; HOURS_PER_DAY];
        for (index, (slot, &value)) in out.iter_mut().zip(values).enumerate() {
            if !value.is_finite() || value < 0.0 {
                return Err(SeriesError::InvalidValue {
                    field: field.to_string(),
                    index,
                    value,
                });
            }
            *slot = value;
        }

        Ok(Self(out))
    }

    /// A series holding the same value at every hour.
    ///
    /// Negative or non-finite inputs are clamped to zero.
    pub fn splat(value: f64) -> Self {
        let value = if value.is_finite() { value.max(0.0) } else { 0.0 };
        Self([value; HOURS_PER_DAY])
    }

    /// An all-zero series.
    pub fn zeros() -> Self {
        Self([0.0; HOURS_PER_DAY])
    }

    /// Value at `hour`, wrapping past hour 23.
    pub fn at(&self, hour: usize) -> f64 {
        self.0[hour % HOURS_PER_DAY]
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Largest sample in the series.
    pub fn max(&self) -> f64 {
        self.0.iter().copied().fold(0.0, f64::max)
    }
}

impl Default for HourlySeries {
    fn default() -> Self {
        Self::zeros()
    }
}

impl TryFrom<Vec<f64>> for HourlySeries {
    type Error = SeriesError;

    fn try_from(values: Vec<f64>) -> Result<Self, Self::Error> {
        Self::from_slice("series", &values)
    }
}

impl From<HourlySeries> for Vec<f64> {
    fn from(series: HourlySeries) -> Self {
        series.0.to_vec()
    }
}
