use chrono::{Duration, TimeZone, Utc};
use tempfile::tempdir;
use urban_pulse::{
    export, simulate, HistoricalSeries, ScenarioParameters, SensorReading, TrendForecaster,
};

fn base_series() -> HistoricalSeries {
    let start = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();

    let readings = (0..3)
        .map(|i| SensorReading {
            timestamp: start + Duration::minutes(5 * i),
            traffic_density: 40.0 + 10.0 * i as f64,
            air_quality: 20.0 + 5.0 * i as f64,
        })
        .collect();

    HistoricalSeries::new(readings)
}

#[test]
fn historical_csv_has_labeled_header_and_all_rows() {
    let series = base_series();
    let dir = tempdir().unwrap();
    let path = dir.path().join("history.csv");

    export::write_historical_csv(&series, &path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();

    assert_eq!(
        lines[0],
        "Time,Traffic Density (vehicles/min),PM2.5 (µg/m³)"
    );
    assert_eq!(lines.len(), series.len() + 1);
    assert!(lines[1].starts_with("2024-03-01T12:00:00"));
}

#[test]
fn forecast_csv_round_trips_row_count() {
    let anchor = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
    let forecaster = TrendForecaster::new(4, 5, 1.05).unwrap();
    let forecast = forecaster.forecast_from(anchor, 50.0).unwrap();

    let dir = tempdir().unwrap();
    let path = dir.path().join("forecast.csv");

    export::write_forecast_csv(&forecast, &path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();

    assert_eq!(lines[0], "Time,Predicted Value");
    assert_eq!(lines.len(), forecast.len() + 1);
    assert!(lines[1].ends_with("52.5"));
}

#[test]
fn simulated_csv_includes_derived_columns() {
    let base = base_series();
    let simulated = simulate(
        &base,
        &ScenarioParameters {
            signal_cycle_seconds: 30.0,
            green_zone_effectiveness_pct: 50.0,
        },
    );

    let dir = tempdir().unwrap();
    let path = dir.path().join("scenario.csv");

    export::write_simulated_csv(&simulated, &path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();

    assert_eq!(
        lines[0],
        "Time,Traffic Density (vehicles/min),PM2.5 (µg/m³),Simulated Traffic Density,Simulated PM2.5"
    );
    assert_eq!(lines.len(), simulated.len() + 1);

    // 40 vehicles/min doubled, 20 µg/m³ halved
    assert!(lines[1].contains(",80,"));
    assert!(lines[1].ends_with(",10"));
}

#[test]
fn json_rendering_parses_back() {
    let base = base_series();

    let json = base.to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let rows = value.as_array().unwrap();

    assert_eq!(rows.len(), base.len());
    assert_eq!(rows[0]["traffic_density"], 40.0);
    assert_eq!(rows[0]["air_quality"], 20.0);

    let simulated = simulate(&base, &ScenarioParameters::default());
    let simulated_json = simulated.to_json().unwrap();
    let simulated_value: serde_json::Value = serde_json::from_str(&simulated_json).unwrap();

    assert_eq!(
        simulated_value.as_array().unwrap()[0]["simulated_traffic"],
        40.0
    );
}

#[test]
fn forecast_json_parses_back() {
    let anchor = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
    let forecaster = TrendForecaster::new(3, 5, 1.05).unwrap();
    let forecast = forecaster.forecast_from(anchor, 50.0).unwrap();

    let json = forecast.to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let rows = value.as_array().unwrap();

    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0]["predicted"], 52.5);
}

#[test]
fn export_to_an_invalid_path_errors() {
    let series = base_series();

    let result = export::write_historical_csv(&series, "/nonexistent/dir/history.csv");

    assert!(result.is_err());
}
