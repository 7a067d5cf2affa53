//! CSV rendering of the pipeline tables for the presentation surface

use crate::error::Result;
use crate::forecast::ForecastSeries;
use crate::scenario::SimulatedSeries;
use crate::series::{HistoricalSeries, Metric};
use csv::Writer;
use std::path::Path;

/// Write a historical series as CSV with labeled, unit-bearing headers
pub fn write_historical_csv<P: AsRef<Path>>(series: &HistoricalSeries, path: P) -> Result<()> {
    let mut writer = Writer::from_path(path)?;

    writer.write_record([
        "Time".to_string(),
        Metric::TrafficDensity.to_string(),
        Metric::AirQuality.to_string(),
    ])?;

    for reading in series.readings() {
        writer.write_record(&[
            reading.timestamp.to_rfc3339(),
            reading.traffic_density.to_string(),
            reading.air_quality.to_string(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

/// Write a forecast series as CSV
pub fn write_forecast_csv<P: AsRef<Path>>(series: &ForecastSeries, path: P) -> Result<()> {
    let mut writer = Writer::from_path(path)?;

    writer.write_record(["Time", "Predicted Value"])?;

    for point in series.points() {
        writer.write_record(&[point.timestamp.to_rfc3339(), point.predicted.to_string()])?;
    }

    writer.flush()?;
    Ok(())
}

/// Write a simulated series as CSV, base columns first, derived columns
/// last
pub fn write_simulated_csv<P: AsRef<Path>>(series: &SimulatedSeries, path: P) -> Result<()> {
    let mut writer = Writer::from_path(path)?;

    writer.write_record([
        "Time".to_string(),
        Metric::TrafficDensity.to_string(),
        Metric::AirQuality.to_string(),
        "Simulated Traffic Density".to_string(),
        "Simulated PM2.5".to_string(),
    ])?;

    for reading in series.readings() {
        writer.write_record(&[
            reading.timestamp.to_rfc3339(),
            reading.traffic_density.to_string(),
            reading.air_quality.to_string(),
            reading.simulated_traffic.to_string(),
            reading.simulated_air_quality.to_string(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}
