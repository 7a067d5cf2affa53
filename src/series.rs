//! Sensor reading tables shared by every pipeline stage

use crate::error::{PulseError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single synthetic sensor observation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorReading {
    /// Timestamp of the observation
    pub timestamp: DateTime<Utc>,
    /// Traffic density in vehicles per minute
    pub traffic_density: f64,
    /// Air quality as PM2.5 concentration in µg/m³
    pub air_quality: f64,
}

/// Sensor metrics tracked by the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    /// Vehicles passing per minute
    TrafficDensity,
    /// PM2.5 particulate concentration
    AirQuality,
}

impl Metric {
    /// Human-readable column label
    pub fn label(&self) -> &'static str {
        match self {
            Metric::TrafficDensity => "Traffic Density",
            Metric::AirQuality => "PM2.5",
        }
    }

    /// Measurement unit
    pub fn unit(&self) -> &'static str {
        match self {
            Metric::TrafficDensity => "vehicles/min",
            Metric::AirQuality => "µg/m³",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label(), self.unit())
    }
}

/// Summary statistics for one metric of a series
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeriesStats {
    /// Arithmetic mean
    pub mean: f64,
    /// Population standard deviation
    pub std_dev: f64,
    /// Smallest observed value
    pub min: f64,
    /// Largest observed value
    pub max: f64,
}

impl fmt::Display for SeriesStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "mean {:.2}, std {:.2}, min {:.2}, max {:.2}",
            self.mean, self.std_dev, self.min, self.max
        )
    }
}

/// Chronologically ordered table of synthetic sensor readings
#[derive(Debug, Clone, PartialEq)]
pub struct HistoricalSeries {
    readings: Vec<SensorReading>,
}

impl HistoricalSeries {
    /// Create a series from a set of readings, sorting them into
    /// chronological order
    pub fn new(mut readings: Vec<SensorReading>) -> Self {
        readings.sort_by(|a, b| a.timestamp.cmp(&b.timestamp));
        Self { readings }
    }

    /// All readings, oldest first
    pub fn readings(&self) -> &[SensorReading] {
        &self.readings
    }

    /// Number of readings in the series
    pub fn len(&self) -> usize {
        self.readings.len()
    }

    /// Check if the series is empty
    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    /// The newest reading, if any
    pub fn latest(&self) -> Option<&SensorReading> {
        self.readings.last()
    }

    /// The first `n` readings, for table snapshots
    pub fn head(&self, n: usize) -> &[SensorReading] {
        &self.readings[..n.min(self.readings.len())]
    }

    /// Timestamp column
    pub fn timestamps(&self) -> Vec<DateTime<Utc>> {
        self.readings.iter().map(|r| r.timestamp).collect()
    }

    /// Traffic density column
    pub fn traffic_values(&self) -> Vec<f64> {
        self.values(Metric::TrafficDensity)
    }

    /// Air quality column
    pub fn air_quality_values(&self) -> Vec<f64> {
        self.values(Metric::AirQuality)
    }

    /// Column values for the given metric
    pub fn values(&self, metric: Metric) -> Vec<f64> {
        self.readings
            .iter()
            .map(|r| match metric {
                Metric::TrafficDensity => r.traffic_density,
                Metric::AirQuality => r.air_quality,
            })
            .collect()
    }

    /// Summary statistics for the given metric
    pub fn stats(&self, metric: Metric) -> Result<SeriesStats> {
        let values = self.values(metric);
        if values.is_empty() {
            return Err(PulseError::DataError(
                "No readings available".to_string(),
            ));
        }

        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
        let min = values.iter().fold(f64::INFINITY, |acc, v| acc.min(*v));
        let max = values.iter().fold(f64::NEG_INFINITY, |acc, v| acc.max(*v));

        Ok(SeriesStats {
            mean,
            std_dev: variance.sqrt(),
            min,
            max,
        })
    }

    /// Render the readings as a JSON array for the presentation surface
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.readings)?)
    }
}
