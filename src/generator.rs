//! Synthetic series generation for the dashboard's live view

use crate::error::{PulseError, Result};
use crate::series::{HistoricalSeries, SensorReading};
use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use rand_distr::{Distribution, Normal};

/// Default number of readings in a generated series
pub const DEFAULT_POINT_COUNT: usize = 100;

/// Default spacing between consecutive readings, in minutes
pub const DEFAULT_INTERVAL_MINUTES: u32 = 5;

/// Clamp bounds for traffic density samples, in vehicles per minute
pub const TRAFFIC_RANGE: (f64, f64) = (20.0, 100.0);

/// Clamp bounds for PM2.5 samples, in µg/m³
pub const AIR_QUALITY_RANGE: (f64, f64) = (10.0, 80.0);

const TRAFFIC_MEAN: f64 = 50.0;
const TRAFFIC_STD_DEV: f64 = 10.0;
const AIR_QUALITY_MEAN: f64 = 35.0;
const AIR_QUALITY_STD_DEV: f64 = 8.0;

/// Generator for synthetic urban sensor series
///
/// Samples traffic density from N(50, 10) clamped into [20, 100] and
/// PM2.5 from N(35, 8) clamped into [10, 80], one reading per interval
/// stepping back from the anchor time.
#[derive(Debug, Clone)]
pub struct SeriesGenerator {
    count: usize,
    interval_minutes: u32,
    traffic_dist: Normal<f64>,
    air_quality_dist: Normal<f64>,
}

impl SeriesGenerator {
    /// Create a new generator
    ///
    /// Both `count` and `interval_minutes` must be positive.
    pub fn new(count: usize, interval_minutes: u32) -> Result<Self> {
        if count == 0 {
            return Err(PulseError::InvalidParameter(
                "Point count must be positive".to_string(),
            ));
        }

        if interval_minutes == 0 {
            return Err(PulseError::InvalidParameter(
                "Interval must be positive".to_string(),
            ));
        }

        let traffic_dist = Normal::new(TRAFFIC_MEAN, TRAFFIC_STD_DEV)
            .map_err(|e| PulseError::InvalidParameter(e.to_string()))?;
        let air_quality_dist = Normal::new(AIR_QUALITY_MEAN, AIR_QUALITY_STD_DEV)
            .map_err(|e| PulseError::InvalidParameter(e.to_string()))?;

        Ok(Self {
            count,
            interval_minutes,
            traffic_dist,
            air_quality_dist,
        })
    }

    /// Number of readings per generated series
    pub fn count(&self) -> usize {
        self.count
    }

    /// Spacing between consecutive readings, in minutes
    pub fn interval_minutes(&self) -> u32 {
        self.interval_minutes
    }

    /// Generate a fresh series anchored at the current wall-clock time
    pub fn generate(&self) -> HistoricalSeries {
        self.generate_at(Utc::now(), &mut rand::thread_rng())
    }

    /// Generate a fresh series with an explicit anchor time and RNG
    ///
    /// The newest reading lands exactly on `now`; a seeded RNG makes
    /// the series reproducible.
    pub fn generate_at<R: Rng + ?Sized>(
        &self,
        now: DateTime<Utc>,
        rng: &mut R,
    ) -> HistoricalSeries {
        let mut timestamps: Vec<DateTime<Utc>> = (0..self.count)
            .map(|i| now - Duration::minutes(i64::from(self.interval_minutes) * i as i64))
            .collect();
        timestamps.sort();

        let readings = timestamps
            .into_iter()
            .map(|timestamp| SensorReading {
                timestamp,
                traffic_density: self
                    .traffic_dist
                    .sample(rng)
                    .clamp(TRAFFIC_RANGE.0, TRAFFIC_RANGE.1),
                air_quality: self
                    .air_quality_dist
                    .sample(rng)
                    .clamp(AIR_QUALITY_RANGE.0, AIR_QUALITY_RANGE.1),
            })
            .collect();

        log::debug!(
            "generated {} readings at {} minute spacing",
            self.count,
            self.interval_minutes
        );

        HistoricalSeries::new(readings)
    }
}

impl Default for SeriesGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_POINT_COUNT, DEFAULT_INTERVAL_MINUTES)
            .expect("default generator parameters are valid")
    }
}
