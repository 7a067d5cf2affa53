use urban_pulse::{
    export, simulate, Metric, ScenarioParameters, SeriesCache, SeriesGenerator, TrendForecaster,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("Urban Pulse: Dashboard Pipeline Demo");
    println!("====================================\n");

    // Stage 1: fabricate the "live" series, memoized the way a
    // refreshing dashboard would consume it
    println!("Generating live sensor data...");
    let generator = SeriesGenerator::new(100, 5)?;
    let mut cache = SeriesCache::with_default_ttl();
    let history = cache.get_or_generate(&generator);

    println!("Generated {} readings\n", history.len());

    println!("Snapshot (first 5 readings):");
    for reading in history.head(5) {
        println!(
            "  {}  traffic {:6.2}  pm2.5 {:6.2}",
            reading.timestamp.format("%Y-%m-%d %H:%M"),
            reading.traffic_density,
            reading.air_quality
        );
    }

    for metric in [Metric::TrafficDensity, Metric::AirQuality] {
        let stats = history.stats(metric)?;
        println!("\n{}: {}", metric, stats);
    }

    // Stage 2: project both metrics an hour ahead from their latest
    // observed values
    println!("\nForecasting the next hour...");
    let forecaster = TrendForecaster::default();

    let latest = history
        .latest()
        .ok_or("generated series is empty")?
        .clone();

    let traffic_forecast = forecaster.forecast(latest.traffic_density)?;
    println!(
        "Traffic forecast ({} steps): {:?}",
        traffic_forecast.len(),
        traffic_forecast.values()
    );

    let air_forecast = forecaster.forecast(latest.air_quality)?;
    println!(
        "PM2.5 forecast ({} steps): {:?}",
        air_forecast.len(),
        air_forecast.values()
    );

    // Stage 3: what-if scenario with slider positions away from the
    // defaults
    println!("\nSimulating interventions...");
    let params = ScenarioParameters {
        signal_cycle_seconds: 45.0,
        green_zone_effectiveness_pct: 25.0,
    };
    let scenario = simulate(&history, &params);

    println!(
        "Signal cycle {} s, green zone {} %:",
        params.signal_cycle_seconds, params.green_zone_effectiveness_pct
    );
    for reading in scenario.readings().iter().take(5) {
        println!(
            "  {}  traffic {:6.2} -> {:6.2}  pm2.5 {:6.2} -> {:6.2}",
            reading.timestamp.format("%Y-%m-%d %H:%M"),
            reading.traffic_density,
            reading.simulated_traffic,
            reading.air_quality,
            reading.simulated_air_quality
        );
    }

    // Hand the tables over the boundary the way a download button would
    let out_dir = std::env::temp_dir().join("urban_pulse_demo");
    std::fs::create_dir_all(&out_dir)?;

    export::write_historical_csv(&history, out_dir.join("history.csv"))?;
    export::write_forecast_csv(&traffic_forecast, out_dir.join("traffic_forecast.csv"))?;
    export::write_simulated_csv(&scenario, out_dir.join("scenario.csv"))?;
    println!("\nTables exported to {}", out_dir.display());

    println!("\nPipeline complete!");

    Ok(())
}
