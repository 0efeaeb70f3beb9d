use super::*;

#[test]
fn weekday_codes_cover_sunday_to_saturday() {
    assert_eq!(WEEKDAYS[0].value, 0);
    assert_eq!(WEEKDAYS[0].label, "Sunday");
    assert_eq!(WEEKDAYS[6].value, 6);
    assert_eq!(WEEKDAYS[6].label, "Saturday");
}

#[test]
fn short_labels_align_with_weekday_codes() {
    for (choice, short) in WEEKDAYS.iter().zip(WEEKDAY_SHORT) {
        assert!(choice.label.starts_with(short));
    }
}

#[test]
fn weather_codes_start_at_one() {
    assert_eq!(WEATHER[0].value, 1);
    assert_eq!(WEATHER[3].value, 4);
    assert_eq!(WEATHER[3].label, "Heavy Rain/Snow/Fog");
}

#[test]
fn station_table_matches_distribution_arity() {
    assert_eq!(STATIONS.len(), 5);
    assert_eq!(STATIONS[0], "Central Park");
}

#[test]
fn choices_serialize_as_value_label_pairs() {
    let json = serde_json::to_value(SEASONS[1]).unwrap();
    assert_eq!(json, serde_json::json!({ "value": 2, "label": "Summer" }));
}
