use super::*;

// =============================================================
// BugId
// =============================================================

#[test]
fn bug_id_decodes_numbers_and_strings_to_same_value() {
    let from_number: BugId = serde_json::from_value(serde_json::json!(812345)).unwrap();
    let from_string: BugId = serde_json::from_value(serde_json::json!("812345")).unwrap();
    assert_eq!(from_number, from_string);
    assert_eq!(from_number.as_str(), "812345");
}

#[test]
fn bug_id_trims_surrounding_whitespace() {
    let id: BugId = serde_json::from_value(serde_json::json!("  77 ")).unwrap();
    assert_eq!(id, BugId::from("77"));
}

#[test]
fn bug_id_rejects_empty_negative_and_non_scalar() {
    assert!(serde_json::from_value::<BugId>(serde_json::json!("")).is_err());
    assert!(serde_json::from_value::<BugId>(serde_json::json!(-4)).is_err());
    assert!(serde_json::from_value::<BugId>(serde_json::json!(1.5)).is_err());
    assert!(serde_json::from_value::<BugId>(serde_json::json!({"id": 1})).is_err());
}

#[test]
fn bug_id_serializes_as_plain_string() {
    let json = serde_json::to_value(BugId::from(5_u64)).unwrap();
    assert_eq!(json, serde_json::json!("5"));
}

// =============================================================
// ListKind
// =============================================================

#[test]
fn list_kind_other_flips() {
    assert_eq!(ListKind::Sprint.other(), ListKind::Backlog);
    assert_eq!(ListKind::Backlog.other(), ListKind::Sprint);
}

#[test]
fn list_kind_accepts_bugs_table_alias() {
    let kind: ListKind = serde_json::from_value(serde_json::json!("bugs")).unwrap();
    assert_eq!(kind, ListKind::Sprint);
    assert_eq!(serde_json::to_value(kind).unwrap(), serde_json::json!("sprint"));
}

#[test]
fn list_kind_display_is_lowercase() {
    assert_eq!(ListKind::Sprint.to_string(), "sprint");
    assert_eq!(ListKind::Backlog.to_string(), "backlog");
}

// =============================================================
// BugRecord / PageSnapshot
// =============================================================

#[test]
fn bug_record_missing_or_blank_points_count_as_zero() {
    let missing: BugRecord = serde_json::from_value(serde_json::json!({"id": 1, "list": "sprint"})).unwrap();
    let null: BugRecord = serde_json::from_value(serde_json::json!({"id": 2, "points": null, "list": "backlog"})).unwrap();
    let blank: BugRecord = serde_json::from_value(serde_json::json!({"id": 3, "points": "", "list": "backlog"})).unwrap();
    assert_eq!(missing.points, 0);
    assert_eq!(null.points, 0);
    assert_eq!(blank.points, 0);
}

#[test]
fn bug_record_parses_numeric_string_points() {
    let record: BugRecord =
        serde_json::from_value(serde_json::json!({"id": 9, "points": "8", "original_list": "bugs"})).unwrap();
    assert_eq!(record, BugRecord::new(9_u64, 8, ListKind::Sprint));
}

#[test]
fn bug_record_rejects_negative_points() {
    let result = serde_json::from_value::<BugRecord>(serde_json::json!({"id": 1, "points": -3, "list": "sprint"}));
    assert!(result.is_err());
}

#[test]
fn page_snapshot_baseline_is_optional() {
    let snapshot: PageSnapshot = serde_json::from_value(serde_json::json!({
        "bugs": [{"id": 1, "points": 3, "list": "sprint"}]
    }))
    .unwrap();
    assert_eq!(snapshot.bugs.len(), 1);
    assert!(snapshot.original_bugs.is_none());
}

// =============================================================
// HostEvent
// =============================================================

#[test]
fn host_event_move_decodes_tagged_payload() {
    let event: HostEvent = serde_json::from_value(serde_json::json!({
        "type": "move",
        "bug_id": 44,
        "from": "backlog",
        "to": "sprint"
    }))
    .unwrap();
    assert_eq!(event, HostEvent::Move { bug_id: BugId::from("44"), from: ListKind::Backlog, to: ListKind::Sprint });
}

#[test]
fn host_event_unit_variants_decode() {
    let submit: HostEvent = serde_json::from_str(r#"{"type":"submit"}"#).unwrap();
    let unload: HostEvent = serde_json::from_str(r#"{"type":"unload"}"#).unwrap();
    let saved: HostEvent = serde_json::from_str(r#"{"type":"saved"}"#).unwrap();
    assert_eq!(submit, HostEvent::Submit);
    assert_eq!(unload, HostEvent::Unload);
    assert_eq!(saved, HostEvent::Saved);
}

#[test]
fn host_event_unknown_type_is_rejected() {
    assert!(serde_json::from_str::<HostEvent>(r#"{"type":"drag"}"#).is_err());
}
