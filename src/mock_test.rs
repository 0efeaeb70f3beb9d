use super::*;
use time::macros::date;

#[test]
fn seed_collections_have_unique_ids() {
    let workers = workers();
    let mut ids: Vec<&str> = workers.iter().map(|w| w.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), workers.len());

    let bikes = bikes();
    let mut ids: Vec<&str> = bikes.iter().map(|b| b.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), bikes.len());
}

#[test]
fn canned_prediction_carries_a_full_resource_estimate() {
    let canned = prediction();
    assert!((canned.prediction - 285.0).abs() < f64::EPSILON);

    let resources = canned.resources.unwrap();
    assert_eq!(resources.workers_needed, 6);
    assert_eq!(resources.maintenance_staff, 2);
    assert_eq!(resources.distribution.len(), 5);
    assert_eq!(resources.distribution["Central Park"], 86);
}

#[test]
fn historical_covers_one_week_of_hourly_records() {
    let records = historical(date!(2025 - 06 - 16), 7);
    assert_eq!(records.len(), 7 * 24);

    // Ends the day before the base date.
    assert_eq!(records.last().unwrap().date, date!(2025 - 06 - 15));
    assert_eq!(records.first().unwrap().date, date!(2025 - 06 - 09));

    // Hours cycle 0..24 within each day.
    assert_eq!(records[0].hour, 0);
    assert_eq!(records[23].hour, 23);
    assert_eq!(records[24].hour, 0);
}

#[test]
fn historical_is_deterministic_for_a_seed() {
    let a = historical(date!(2025 - 06 - 16), 42);
    let b = historical(date!(2025 - 06 - 16), 42);
    assert_eq!(a, b);

    let c = historical(date!(2025 - 06 - 16), 43);
    assert_ne!(a, c);
}

#[test]
fn weekday_commute_peaks_exceed_night_hours() {
    // 2025-06-16 is a Monday, so the last generated day (06-15) is a Sunday
    // and 06-13 is a Friday.
    let records = historical(date!(2025 - 06 - 16), 1);
    let friday_peak = records
        .iter()
        .find(|r| r.date == date!(2025 - 06 - 13) && r.hour == 17)
        .unwrap();
    let friday_night = records
        .iter()
        .find(|r| r.date == date!(2025 - 06 - 13) && r.hour == 3)
        .unwrap();
    assert!(friday_peak.rentals > friday_night.rentals);
}

#[test]
fn display_tables_are_stable() {
    assert_eq!(weather_impact().len(), 4);
    let stations = top_stations();
    assert_eq!(stations.len(), 5);
    assert_eq!(stations[0].name, "Central Park");
}
