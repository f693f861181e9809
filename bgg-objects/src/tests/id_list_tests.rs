use super::*;
use crate::thing::Thing;
use serde_json::json;

fn thing(id: ThingId, name: &str) -> Thing {
    Thing::new(id, Some(name.to_string()))
}

#[test]
fn test_insert_keeps_first_occurrence() {
    let mut list = IdList::new();
    assert!(list.insert(thing(1, "first")));
    assert!(list.insert(thing(2, "second")));
    assert!(!list.insert(thing(1, "replacement")));

    assert_eq!(list.len(), 2);
    assert_eq!(list.ids().collect::<Vec<_>>(), vec![1, 2]);
    assert_eq!(list.get(1).and_then(|t| t.name()), Some("first"));
}

#[test]
fn test_from_records_dedups_in_order() {
    let raw = vec![
        json!({ "id": 1, "name": "a" }),
        json!({ "id": 2, "name": "b" }),
        json!({ "id": "1", "name": "a again" }),
    ];
    let list = IdList::from_records(&raw, EntryKind::Expansion, Thing::from_record).unwrap();
    assert_eq!(list.ids().collect::<Vec<_>>(), vec![1, 2]);
}

#[test]
fn test_missing_id_is_tagged() {
    let raw = vec![json!({ "id": 1 }), json!({ "name": "no id" })];
    let err = IdList::from_records(&raw, EntryKind::Video, Thing::from_record).unwrap_err();
    assert_eq!(
        err,
        InvalidRecordError::entry(EntryKind::Video, InvalidRecordError::missing("id"))
    );
    assert_eq!(
        err.to_string(),
        "invalid video data: missing required field `id`"
    );
}

#[test]
fn test_duplicate_is_skipped_before_building() {
    let mut list = IdList::new();
    list.insert(thing(5, "kept"));

    let raw = json!({ "id": 5 });
    let appended = list
        .insert_record(&raw, EntryKind::Expansion, |_| {
            Err(InvalidRecordError::missing("never built"))
        })
        .unwrap();
    assert!(!appended);
    assert_eq!(list.len(), 1);
}

#[test]
fn test_non_mapping_entry_is_tagged() {
    let mut list: IdList<Thing> = IdList::new();
    let err = list
        .insert_record(&json!(17), EntryKind::ExpandedGame, Thing::from_record)
        .unwrap_err();
    assert!(matches!(
        err,
        InvalidRecordError::InvalidEntry {
            kind: EntryKind::ExpandedGame,
            ..
        }
    ));
    assert!(list.is_empty());
}

#[test]
fn test_serializes_as_plain_sequence() {
    let mut list = IdList::new();
    list.insert(thing(3, "c"));
    let value = serde_json::to_value(&list).unwrap();
    assert_eq!(value, json!([{ "id": 3, "name": "c" }]));
}
