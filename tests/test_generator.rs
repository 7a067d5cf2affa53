use chrono::{DateTime, Duration, TimeZone, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rstest::rstest;
use urban_pulse::{
    PulseError, SeriesGenerator, AIR_QUALITY_RANGE, DEFAULT_INTERVAL_MINUTES, DEFAULT_POINT_COUNT,
    TRAFFIC_RANGE,
};

fn anchor() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
}

#[test]
fn generates_requested_number_of_rows() {
    let generator = SeriesGenerator::new(100, 5).unwrap();
    let mut rng = StdRng::seed_from_u64(42);

    let series = generator.generate_at(anchor(), &mut rng);

    assert_eq!(series.len(), 100);
    assert!(!series.is_empty());
}

#[test]
fn timestamps_are_chronological_and_evenly_spaced() {
    let generator = SeriesGenerator::new(50, 5).unwrap();
    let mut rng = StdRng::seed_from_u64(7);

    let series = generator.generate_at(anchor(), &mut rng);
    let timestamps = series.timestamps();

    for pair in timestamps.windows(2) {
        assert_eq!(pair[1] - pair[0], Duration::minutes(5));
    }

    assert_eq!(*timestamps.last().unwrap(), anchor());
}

#[test]
fn five_point_series_steps_back_from_anchor() {
    let generator = SeriesGenerator::new(5, 5).unwrap();
    let mut rng = StdRng::seed_from_u64(1);

    let series = generator.generate_at(anchor(), &mut rng);

    let expected: Vec<DateTime<Utc>> = (0..5)
        .rev()
        .map(|i| anchor() - Duration::minutes(5 * i))
        .collect();
    assert_eq!(series.timestamps(), expected);
}

#[test]
fn samples_stay_inside_clamp_bounds() {
    let generator = SeriesGenerator::new(1000, 1).unwrap();
    let mut rng = StdRng::seed_from_u64(99);

    let series = generator.generate_at(anchor(), &mut rng);

    for reading in series.readings() {
        assert!(reading.traffic_density >= TRAFFIC_RANGE.0);
        assert!(reading.traffic_density <= TRAFFIC_RANGE.1);
        assert!(reading.air_quality >= AIR_QUALITY_RANGE.0);
        assert!(reading.air_quality <= AIR_QUALITY_RANGE.1);
    }
}

#[test]
fn seeded_generation_is_reproducible() {
    let generator = SeriesGenerator::new(100, 5).unwrap();

    let mut first_rng = StdRng::seed_from_u64(42);
    let mut second_rng = StdRng::seed_from_u64(42);
    let first = generator.generate_at(anchor(), &mut first_rng);
    let second = generator.generate_at(anchor(), &mut second_rng);

    assert_eq!(first, second);

    let mut other_rng = StdRng::seed_from_u64(43);
    let other = generator.generate_at(anchor(), &mut other_rng);

    assert_ne!(first, other);
}

#[test]
fn latest_reading_sits_on_the_anchor() {
    let generator = SeriesGenerator::new(10, 15).unwrap();
    let mut rng = StdRng::seed_from_u64(5);

    let series = generator.generate_at(anchor(), &mut rng);

    assert_eq!(series.latest().unwrap().timestamp, anchor());
}

#[rstest]
#[case(0, 5)]
#[case(5, 0)]
#[case(0, 0)]
fn rejects_non_positive_parameters(#[case] count: usize, #[case] interval: u32) {
    let result = SeriesGenerator::new(count, interval);

    assert!(matches!(result, Err(PulseError::InvalidParameter(_))));
}

#[test]
fn default_generator_uses_crate_defaults() {
    let generator = SeriesGenerator::default();

    assert_eq!(generator.count(), DEFAULT_POINT_COUNT);
    assert_eq!(generator.interval_minutes(), DEFAULT_INTERVAL_MINUTES);
}
