use super::*;
use serde_json::json;

#[test]
fn test_new_rejects_non_mapping() {
    let value = json!([1, 2, 3]);
    let err = Record::new(&value, "game").unwrap_err();
    assert_eq!(err, InvalidRecordError::NotAMapping { what: "game" });
}

#[test]
fn test_attr_missing_key() {
    let value = json!({ "name": "Catan" });
    let record = Record::new(&value, "thing").unwrap();
    assert_eq!(
        record.attr("id").unwrap_err(),
        InvalidRecordError::MissingField { field: "id" }
    );
    assert_eq!(record.attr("name").unwrap(), &json!("Catan"));
}

#[test]
fn test_null_counts_as_absent() {
    let value = json!({ "id": null, "name": null });
    let record = Record::new(&value, "thing").unwrap();
    assert!(!record.contains("id"));
    assert_eq!(record.opt_str("name"), None);
    assert!(record.require_int("id").is_err());
}

#[test]
fn test_int_coercion() {
    let value = json!({ "a": 7, "b": "42", "c": " 13 ", "d": 3.0, "e": 3.5, "f": "seven" });
    let record = Record::new(&value, "r").unwrap();
    assert_eq!(record.opt_int("a"), Some(7));
    assert_eq!(record.opt_int("b"), Some(42));
    assert_eq!(record.opt_int("c"), Some(13));
    assert_eq!(record.opt_int("d"), Some(3));
    assert_eq!(record.opt_int("e"), None);
    assert_eq!(record.lenient_int("f"), Lenient::Malformed("seven".to_string()));
    assert_eq!(record.lenient_int("missing"), Lenient::Absent);
}

#[test]
fn test_require_int_rejects_garbage() {
    let value = json!({ "id": "abc" });
    let record = Record::new(&value, "thing").unwrap();
    assert!(matches!(
        record.require_int("id"),
        Err(InvalidRecordError::InvalidField { field: "id", .. })
    ));
}

#[test]
fn test_float_coercion() {
    let value = json!({ "a": 7.25, "b": "6.5", "c": 3, "d": "NaN", "e": "n/a" });
    let record = Record::new(&value, "r").unwrap();
    assert_eq!(record.opt_float("a"), Some(7.25));
    assert_eq!(record.opt_float("b"), Some(6.5));
    assert_eq!(record.opt_float("c"), Some(3.0));
    assert_eq!(record.opt_float("d"), None);
    assert!(record.lenient_float("e").is_malformed());
}

#[test]
fn test_bool_coercion() {
    let value = json!({ "a": true, "b": 0, "c": "1", "d": "false", "e": "maybe" });
    let record = Record::new(&value, "r").unwrap();
    assert_eq!(record.opt_bool("a"), Some(true));
    assert_eq!(record.opt_bool("b"), Some(false));
    assert_eq!(record.opt_bool("c"), Some(true));
    assert_eq!(record.opt_bool("d"), Some(false));
    assert_eq!(record.opt_bool("e"), None);
}

#[test]
fn test_string_list_keeps_order_and_skips_objects() {
    let value = json!({ "names": ["b", "a", 3, { "x": 1 }, "c"] });
    let record = Record::new(&value, "r").unwrap();
    assert_eq!(record.string_list("names"), vec!["b", "a", "3", "c"]);
    assert!(record.string_list("missing").is_empty());
}

#[test]
fn test_keys_preserve_input_order() {
    let value: serde_json::Value =
        serde_json::from_str(r#"{ "zeta": 1, "alpha": 2, "mid": 3 }"#).unwrap();
    let record = Record::new(&value, "r").unwrap();
    assert_eq!(record.keys().collect::<Vec<_>>(), vec!["zeta", "alpha", "mid"]);
}

#[test]
fn test_list_of_non_sequence_is_empty() {
    let value = json!({ "videos": "none" });
    let record = Record::new(&value, "r").unwrap();
    assert!(record.list("videos").is_empty());
}
