//! # Urban Pulse
//!
//! A Rust library for the computational core of a synthetic urban
//! sensor dashboard: fabricated traffic and air-quality series, naive
//! exponential trend projection, and slider-driven what-if scenarios.
//!
//! ## Features
//!
//! - Synthetic historical series generation (clamped normal sampling)
//! - Exponential trend forecasting from the latest observation
//! - Scenario simulation with signal-timing and green-zone scalars
//! - TTL-bounded memoization of generated series
//! - CSV and JSON rendering of every table
//!
//! The presentation surface composes the three stages explicitly:
//! generate, then forecast from the latest value, then simulate over
//! the historical table. No stage calls back into the caller or into
//! another stage.
//!
//! ## Quick Start
//!
//! ```rust
//! use urban_pulse::{simulate, ScenarioParameters, SeriesGenerator, TrendForecaster};
//!
//! # fn main() -> urban_pulse::Result<()> {
//! // Fabricate the "live" series
//! let generator = SeriesGenerator::new(100, 5)?;
//! let history = generator.generate();
//!
//! // Project the traffic trend an hour ahead
//! let forecaster = TrendForecaster::new(12, 5, 1.05)?;
//! let latest = history.latest().map(|r| r.traffic_density).unwrap_or_default();
//! let projection = forecaster.forecast(latest)?;
//! assert_eq!(projection.len(), 12);
//!
//! // Rescale for a what-if scenario
//! let params = ScenarioParameters {
//!     signal_cycle_seconds: 45.0,
//!     ..Default::default()
//! };
//! let scenario = simulate(&history, &params);
//! assert_eq!(scenario.len(), history.len());
//! # Ok(())
//! # }
//! ```

pub mod cache;
pub mod error;
pub mod export;
pub mod forecast;
pub mod generator;
pub mod scenario;
pub mod series;

// Re-export commonly used types
pub use crate::cache::{SeriesCache, DEFAULT_CACHE_TTL};
pub use crate::error::{PulseError, Result};
pub use crate::forecast::{
    ForecastPoint, ForecastSeries, TrendForecaster, DEFAULT_FORECAST_STEPS, DEFAULT_GROWTH_FACTOR,
};
pub use crate::generator::{
    SeriesGenerator, AIR_QUALITY_RANGE, DEFAULT_INTERVAL_MINUTES, DEFAULT_POINT_COUNT,
    TRAFFIC_RANGE,
};
pub use crate::scenario::{
    simulate, ScenarioParameters, SimulatedReading, SimulatedSeries, REFERENCE_CYCLE_SECONDS,
};
pub use crate::series::{HistoricalSeries, Metric, SensorReading, SeriesStats};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
