//! Exponential trend projection from the latest observed value

use crate::error::{PulseError, Result};
use crate::generator::DEFAULT_INTERVAL_MINUTES;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Default number of projected steps
pub const DEFAULT_FORECAST_STEPS: usize = 12;

/// Default compounding growth per step (5 %)
pub const DEFAULT_GROWTH_FACTOR: f64 = 1.05;

/// A single projected observation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    /// Future timestamp of the prediction
    pub timestamp: DateTime<Utc>,
    /// Predicted value
    pub predicted: f64,
}

/// Forward-looking projection, strictly future and strictly increasing
/// in time
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastSeries {
    points: Vec<ForecastPoint>,
}

impl ForecastSeries {
    fn new(points: Vec<ForecastPoint>) -> Self {
        Self { points }
    }

    /// All projected points, earliest first
    pub fn points(&self) -> &[ForecastPoint] {
        &self.points
    }

    /// Number of projected steps
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the projection is empty
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Predicted value column
    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.predicted).collect()
    }

    /// Timestamp column
    pub fn timestamps(&self) -> Vec<DateTime<Utc>> {
        self.points.iter().map(|p| p.timestamp).collect()
    }

    /// Render the projection as a JSON array for the presentation
    /// surface
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.points)?)
    }
}

/// Naive exponential extrapolation over a single observed value
///
/// Step k predicts `latest_value * growth_factor^k` at
/// `anchor + k * interval`. No smoothing, no bounds, no error term;
/// predictions may leave the clamp ranges of the historical series.
#[derive(Debug, Clone)]
pub struct TrendForecaster {
    steps: usize,
    interval_minutes: u32,
    growth_factor: f64,
}

impl TrendForecaster {
    /// Create a new forecaster
    ///
    /// `steps` and `interval_minutes` must be positive and
    /// `growth_factor` must be finite and positive.
    pub fn new(steps: usize, interval_minutes: u32, growth_factor: f64) -> Result<Self> {
        if steps == 0 {
            return Err(PulseError::InvalidParameter(
                "Step count must be positive".to_string(),
            ));
        }

        if interval_minutes == 0 {
            return Err(PulseError::InvalidParameter(
                "Interval must be positive".to_string(),
            ));
        }

        if !growth_factor.is_finite() || growth_factor <= 0.0 {
            return Err(PulseError::InvalidParameter(
                "Growth factor must be finite and positive".to_string(),
            ));
        }

        Ok(Self {
            steps,
            interval_minutes,
            growth_factor,
        })
    }

    /// Number of projected steps
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Spacing between projected points, in minutes
    pub fn interval_minutes(&self) -> u32 {
        self.interval_minutes
    }

    /// Compounding growth per step
    pub fn growth_factor(&self) -> f64 {
        self.growth_factor
    }

    /// Project forward from the current wall-clock time
    pub fn forecast(&self, latest_value: f64) -> Result<ForecastSeries> {
        self.forecast_from(Utc::now(), latest_value)
    }

    /// Project forward from an explicit anchor time
    ///
    /// `latest_value` must be finite.
    pub fn forecast_from(
        &self,
        anchor: DateTime<Utc>,
        latest_value: f64,
    ) -> Result<ForecastSeries> {
        if !latest_value.is_finite() {
            return Err(PulseError::InvalidParameter(
                "Latest value must be finite".to_string(),
            ));
        }

        let points = (1..=self.steps)
            .map(|k| ForecastPoint {
                timestamp: anchor
                    + Duration::minutes(i64::from(self.interval_minutes) * k as i64),
                predicted: latest_value * self.growth_factor.powi(k as i32),
            })
            .collect();

        log::debug!(
            "projected {} steps from {} at growth factor {}",
            self.steps,
            latest_value,
            self.growth_factor
        );

        Ok(ForecastSeries::new(points))
    }
}

impl Default for TrendForecaster {
    fn default() -> Self {
        Self::new(
            DEFAULT_FORECAST_STEPS,
            DEFAULT_INTERVAL_MINUTES,
            DEFAULT_GROWTH_FACTOR,
        )
        .expect("default forecaster parameters are valid")
    }
}
