use field_rail::record;
use field_rail::value::{Record, Value};

#[test]
fn field_replaces_existing_entries_in_place() {
    let record = Record::new("User").field("name", "ann").field("age", 30).field("name", "bob");

    assert_eq!(record.len(), 2);
    let names: Vec<&str> = record.iter().map(|(name, _)| name).collect();
    assert_eq!(names, ["name", "age"]);
    assert_eq!(record.get("name"), Some(&Value::from("bob")));
}

#[test]
fn record_macro_keeps_literal_order() {
    let record = record!(Order { id: 7u32, items: vec!["a", "b"], note: None::<String> });

    assert_eq!(record.name(), "Order");
    assert_eq!(record.to_string(), "Order{id: 7, items: [a, b], note: null}");
}

#[test]
fn missing_fields_are_absent() {
    let record = record!(Empty {});
    assert!(record.is_empty());
    assert_eq!(record.get("anything"), None);
}
