use super::*;
use time::macros::date;

#[test]
fn worker_serde_round_trip_keeps_wire_spellings() {
    let worker = Worker {
        id: "w-1".into(),
        name: "Mike Johnson".into(),
        station: "Riverside".into(),
        shift: Shift::Evening,
        status: WorkerStatus::OnLeave,
    };

    let json = serde_json::to_value(&worker).unwrap();
    assert_eq!(json["status"], "On Leave");
    assert_eq!(json["shift"], "Evening");

    let restored: Worker = serde_json::from_value(json).unwrap();
    assert_eq!(restored, worker);
}

#[test]
fn bike_serde_uses_type_and_last_maintenance_keys() {
    let bike = Bike {
        id: "101".into(),
        kind: BikeType::Electric,
        station: "Central Park".into(),
        status: BikeStatus::InUse,
        last_maintenance: date!(2025 - 03 - 15),
    };

    let json = serde_json::to_value(&bike).unwrap();
    assert_eq!(json["type"], "Electric");
    assert_eq!(json["status"], "In Use");
    assert_eq!(json["lastMaintenance"], "2025-03-15");
    assert!(json.get("kind").is_none());

    let restored: Bike = serde_json::from_value(json).unwrap();
    assert_eq!(restored, bike);
}

#[test]
fn historical_record_parses_upstream_payload() {
    let record: HistoricalRecord = serde_json::from_value(serde_json::json!({
        "date": "2025-04-01",
        "hour": 17,
        "rentals": 350,
        "timestamp": "2025-04-01T17:00:00"
    }))
    .unwrap();

    assert_eq!(record.date, date!(2025 - 04 - 01));
    assert_eq!(record.hour, 17);
    assert_eq!(record.rentals, 350);
}

#[test]
fn historical_record_timestamp_is_optional() {
    let record: HistoricalRecord = serde_json::from_value(serde_json::json!({
        "date": "2025-04-01",
        "hour": 0,
        "rentals": 12
    }))
    .unwrap();
    assert!(record.timestamp.is_none());
}

#[test]
fn drafts_materialize_with_unique_ids() {
    let draft = WorkerDraft {
        name: "Jane Smith".into(),
        station: "Downtown".into(),
        shift: Shift::Afternoon,
        status: WorkerStatus::Active,
    };

    let a = draft.clone().into_worker();
    let b = draft.into_worker();
    assert_ne!(a.id, b.id);
    assert_eq!(a.name, b.name);
}

#[test]
fn draft_with_id_replaces_all_fields_under_same_id() {
    let updated = BikeDraft {
        kind: BikeType::Regular,
        station: "University".into(),
        status: BikeStatus::Maintenance,
        last_maintenance: date!(2025 - 04 - 05),
    }
    .with_id("101".into());

    assert_eq!(updated.id, "101");
    assert_eq!(updated.kind, BikeType::Regular);
    assert_eq!(updated.status, BikeStatus::Maintenance);
}
