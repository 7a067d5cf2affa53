//! What-if scenario transforms over a historical series

use crate::error::Result;
use crate::series::HistoricalSeries;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Normalization baseline for the signal cycle, in seconds
///
/// Matches the default slider position, so the traffic multiplier is
/// exactly 1 when the cycle is left untouched.
pub const REFERENCE_CYCLE_SECONDS: f64 = 60.0;

/// User-chosen scenario scalars for one render pass
///
/// The presentation surface owns the valid ranges: cycle in
/// [30, 120] seconds, effectiveness in [0, 50] percent. The transforms
/// themselves accept any numeric values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioParameters {
    /// Traffic signal cycle length in seconds
    pub signal_cycle_seconds: f64,
    /// Estimated PM2.5 reduction from added green cover, in percent
    pub green_zone_effectiveness_pct: f64,
}

impl Default for ScenarioParameters {
    fn default() -> Self {
        Self {
            signal_cycle_seconds: 60.0,
            green_zone_effectiveness_pct: 10.0,
        }
    }
}

/// A base reading extended with the scenario's derived columns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulatedReading {
    /// Timestamp carried over from the base reading
    pub timestamp: DateTime<Utc>,
    /// Observed traffic density in vehicles per minute
    pub traffic_density: f64,
    /// Observed PM2.5 concentration in µg/m³
    pub air_quality: f64,
    /// Traffic density under the adjusted signal timing
    pub simulated_traffic: f64,
    /// PM2.5 concentration under the green-zone intervention
    pub simulated_air_quality: f64,
}

/// Derived table with the same length and timestamps as its base
#[derive(Debug, Clone, PartialEq)]
pub struct SimulatedSeries {
    readings: Vec<SimulatedReading>,
}

impl SimulatedSeries {
    /// All simulated readings, oldest first
    pub fn readings(&self) -> &[SimulatedReading] {
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

    /// Simulated traffic column
    pub fn simulated_traffic_values(&self) -> Vec<f64> {
        self.readings.iter().map(|r| r.simulated_traffic).collect()
    }

    /// Simulated air quality column
    pub fn simulated_air_quality_values(&self) -> Vec<f64> {
        self.readings
            .iter()
            .map(|r| r.simulated_air_quality)
            .collect()
    }

    /// Render the readings as a JSON array for the presentation surface
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.readings)?)
    }
}

/// Apply both intervention transforms elementwise over `base`
///
/// Traffic is scaled by `REFERENCE_CYCLE_SECONDS / signal_cycle_seconds`
/// (shorter cycles model more throughput per unit time), air quality by
/// `1 - green_zone_effectiveness_pct / 100`. The base columns are
/// carried through unchanged; `base` itself is never mutated.
pub fn simulate(base: &HistoricalSeries, params: &ScenarioParameters) -> SimulatedSeries {
    let traffic_scale = REFERENCE_CYCLE_SECONDS / params.signal_cycle_seconds;
    let air_scale = 1.0 - params.green_zone_effectiveness_pct / 100.0;

    let readings = base
        .readings()
        .iter()
        .map(|r| SimulatedReading {
            timestamp: r.timestamp,
            traffic_density: r.traffic_density,
            air_quality: r.air_quality,
            simulated_traffic: r.traffic_density * traffic_scale,
            simulated_air_quality: r.air_quality * air_scale,
        })
        .collect();

    SimulatedSeries { readings }
}
