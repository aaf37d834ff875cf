//! Unit tests for payload normalization.

use super::*;
use serde_json::json;

fn pid(s: &str) -> PlayerId {
    PlayerId::new(s)
}

#[test]
fn test_name_and_level_present() {
    let record = PlayerRecord::from_payload(json!({"name": "X", "level": 5}), &pid("111"));

    assert!(record.status);
    assert_eq!(record.name, "X");
    assert_eq!(record.level, 5);
    assert_eq!(record.rank, "Unknown");
    assert_eq!(record.kills, 0);
    assert_eq!(record.wins, 0);
}

#[test]
fn test_nickname_used_when_name_absent() {
    let record = PlayerRecord::from_payload(json!({"nickname": "Y"}), &pid("111"));

    assert!(record.status);
    assert_eq!(record.name, "Y");
}

#[test]
fn test_player_name_used_as_last_resort() {
    let record = PlayerRecord::from_payload(json!({"playerName": "Z"}), &pid("111"));

    assert!(record.status);
    assert_eq!(record.name, "Z");
}

#[test]
fn test_name_key_priority_order() {
    let payload = json!({
        "playerName": "third",
        "nickname": "second",
        "name": "first"
    });
    let record = PlayerRecord::from_payload(payload, &pid("111"));

    assert_eq!(record.name, "first");
}

#[test]
fn test_null_name_falls_through_to_next_key() {
    let record =
        PlayerRecord::from_payload(json!({"name": null, "nickname": "Y"}), &pid("111"));

    assert!(record.status);
    assert_eq!(record.name, "Y");
}

#[test]
fn test_numeric_name_is_stringified() {
    let record = PlayerRecord::from_payload(json!({"name": 12345}), &pid("111"));

    assert!(record.status);
    assert_eq!(record.name, "12345");
}

#[test]
fn record_without_name_keeps_numeric_fields() {
    // A record can carry real numeric data yet still count as not-found when
    // no recognized name key was present.
    let record = PlayerRecord::from_payload(json!({"level": 10}), &pid("111"));

    assert!(!record.status);
    assert_eq!(record.name, "Not Found");
    assert_eq!(record.level, 10);
}

#[test]
fn test_all_fields_populated() {
    let payload = json!({
        "name": "Shadow",
        "level": 62,
        "rank": "Heroic",
        "kills": 10234,
        "wins": 871
    });
    let record = PlayerRecord::from_payload(payload, &pid("2233445566"));

    assert!(record.status);
    assert_eq!(record.player_id, "2233445566");
    assert_eq!(record.name, "Shadow");
    assert_eq!(record.level, 62);
    assert_eq!(record.rank, "Heroic");
    assert_eq!(record.kills, 10234);
    assert_eq!(record.wins, 871);
}

#[test]
fn test_numeric_rank_is_stringified() {
    let record = PlayerRecord::from_payload(json!({"name": "X", "rank": 3}), &pid("111"));

    assert_eq!(record.rank, "3");
}

#[test]
fn test_mistyped_fields_keep_defaults() {
    let payload = json!({
        "name": "X",
        "level": "sixty",
        "kills": null,
        "wins": {"total": 3}
    });
    let record = PlayerRecord::from_payload(payload, &pid("111"));

    assert!(record.status);
    assert_eq!(record.level, 0);
    assert_eq!(record.kills, 0);
    assert_eq!(record.wins, 0);
}

#[test]
fn test_non_object_payload_yields_default_record() {
    for payload in [json!([1, 2, 3]), json!("nope"), json!(42), json!(null)] {
        let record = PlayerRecord::from_payload(payload.clone(), &pid("111"));

        assert!(!record.status);
        assert_eq!(record.name, "Not Found");
        assert_eq!(record.level, 0);
        assert_eq!(record.rank, "Unknown");
        assert_eq!(record.raw, payload);
    }
}

#[test]
fn test_raw_payload_is_carried() {
    let payload = json!({"name": "X", "extra": {"deeply": ["nested", 1]}});
    let record = PlayerRecord::from_payload(payload.clone(), &pid("111"));

    assert_eq!(record.raw, payload);
}

#[test]
fn test_record_serializes_to_json() {
    let record = PlayerRecord::from_payload(json!({"name": "X", "level": 7}), &pid("999"));
    let value = serde_json::to_value(&record).unwrap();

    assert_eq!(value["status"], true);
    assert_eq!(value["player_id"], "999");
    assert_eq!(value["name"], "X");
    assert_eq!(value["level"], 7);
    assert_eq!(value["raw"]["name"], "X");
}
