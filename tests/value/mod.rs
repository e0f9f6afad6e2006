use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};

use field_rail::record;
use field_rail::value::{Kind, Record, Value};

pub mod record;

#[test]
fn zero_values_are_empty() {
    let values = [
        Value::Null,
        Value::Bool(false),
        Value::Int(0),
        Value::Uint(0),
        Value::Float(0.0),
        Value::from(""),
        Value::Seq(Vec::new()),
        Value::Map(BTreeMap::new()),
        Value::Optional(None),
    ];
    for value in values {
        assert!(value.is_empty(), "{value:?} should be empty");
    }
}

#[test]
fn non_zero_values_are_not_empty() {
    let values = [
        Value::Bool(true),
        Value::Int(-1),
        Value::Uint(3),
        Value::Float(0.1),
        Value::from(" "),
        Value::from(vec![0]),
        Value::from(Some(1)),
    ];
    for value in values {
        assert!(!value.is_empty(), "{value:?} should not be empty");
    }
}

#[test]
fn optional_emptiness_follows_the_wrapped_value() {
    assert!(Value::from(Some(0)).is_empty());
    assert!(Value::from(Some(Some(""))).is_empty());
    assert!(!Value::from(Some(Some("x"))).is_empty());
}

#[test]
fn record_is_empty_only_when_all_fields_are() {
    assert!(Value::from(Record::new("Empty")).is_empty());
    assert!(Value::from(record!(User { name: "", age: 0 })).is_empty());
    assert!(!Value::from(record!(User { name: "", age: 1 })).is_empty());
}

#[test]
fn conversions_pick_the_matching_variant() {
    assert_eq!(Value::from(-3i8), Value::Int(-3));
    assert_eq!(Value::from(3u16), Value::Uint(3));
    assert_eq!(Value::from(1.5f32), Value::Float(1.5));
    assert_eq!(Value::from('x'), Value::Str("x".into()));
    assert_eq!(Value::from(()), Value::Null);
    assert_eq!(Value::from([1, 2]).kind(), Kind::Seq);

    let map: HashMap<&str, i32> = HashMap::from([("a", 1)]);
    assert_eq!(Value::from(map).get("a"), Some(&Value::Int(1)));
}

#[test]
fn deref_optional_unwraps_one_level() {
    assert_eq!(Value::from(Some(3)).deref_optional(), Some(&Value::Int(3)));
    assert_eq!(Value::from(None::<i32>).deref_optional(), None);
    assert_eq!(Value::Int(3).deref_optional(), Some(&Value::Int(3)));
}

#[test]
fn len_counts_chars_and_elements() {
    assert_eq!(Value::from("héllo").len(), Some(5));
    assert_eq!(Value::from(vec![1, 2, 3]).len(), Some(3));
    assert_eq!(Value::from(Some("ab")).len(), Some(2));
    assert_eq!(Value::Int(10).len(), None);
}

#[test]
fn display_renders_nested_shapes() {
    let seq = Value::from(vec![Value::from(1), Value::from("a"), Value::Null]);
    assert_eq!(seq.to_string(), "[1, a, null]");

    let map = Value::from(BTreeMap::from([("b", 2), ("a", 1)]));
    assert_eq!(map.to_string(), "{a: 1, b: 2}");

    assert_eq!(Value::from(record!(P { x: 1 })).to_string(), "P{x: 1}");
    assert_eq!(Value::from(Some("inner")).to_string(), "inner");
}

#[test]
fn compare_orders_numbers_across_representations() {
    assert_eq!(Value::Uint(u64::MAX).compare(&Value::Int(-1)), Some(Ordering::Greater));
    assert_eq!(Value::Float(2.5).compare(&Value::Int(2)), Some(Ordering::Greater));
    assert_eq!(Value::from(Some(3)).compare(&Value::Int(3)), Some(Ordering::Equal));
    assert_eq!(Value::Float(f64::NAN).compare(&Value::Int(0)), None);
    assert_eq!(Value::from("a").compare(&Value::Int(0)), None);
}

#[test]
fn loose_eq_ignores_numeric_representation() {
    assert!(Value::Int(1).loose_eq(&Value::Float(1.0)));
    assert!(Value::from(vec![1, 2]).loose_eq(&Value::from(vec![1u8, 2u8])));
    assert!(!Value::Int(1).loose_eq(&Value::from("1")));
    assert!(Value::from(None::<i32>).loose_eq(&Value::Null));
}

#[test]
fn kind_names_parse_back() {
    let kinds = [Kind::Null, Kind::Int, Kind::String, Kind::Record, Kind::Optional];
    for kind in kinds {
        assert_eq!(Kind::parse(kind.as_str()), Some(kind));
    }
    assert_eq!(Kind::parse("complex"), None);
    assert!(Kind::Uint.is_numeric());
    assert!(!Kind::String.is_numeric());
}
