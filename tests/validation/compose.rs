use std::collections::BTreeMap;
use std::error::Error as _;
use std::sync::atomic::{AtomicUsize, Ordering};

use field_rail::prelude::*;
use field_rail::translate::Registry;
use field_rail::validation::Alternatives;

use super::first_code;

#[test]
fn validate_collects_every_failure_in_order() {
    let name = Valuer::new("", "name", "Name").required();
    let age = Valuer::new(16, "age", "Age").greater_equal_than(18);
    let email = Valuer::new("ann@example.com", "email", "Email").contains("@");

    let errors = validate(&[&name, &age, &email]).unwrap_err().into_errors();
    let fields: Vec<&str> = errors.iter().map(|e| e.field()).collect();
    assert_eq!(fields, ["name", "age"]);

    assert!(validate(&[&email]).is_ok());
    assert!(validate(&[]).is_ok());
}

#[test]
fn check_returns_the_first_failure_only() {
    let name = Valuer::new("", "name", "Name").required();
    let age = Valuer::new(16, "age", "Age").greater_equal_than(18);

    let failure = check(&[&name, &age]).unwrap_err();
    assert_eq!(failure.len(), 1);
    assert_eq!(failure.first().map(|e| e.field()), Some("name"));
}

#[test]
fn every_is_fail_fast() {
    let calls = AtomicUsize::new(0);
    let failing = Valuer::new("", "a", "A").required();
    let counted = Checker::new(|| {
        calls.fetch_add(1, Ordering::SeqCst);
        Ok::<(), Failure>(())
    });

    let all = every(&[&failing, &counted]);
    assert_eq!(first_code(all.validate()).as_deref(), Some("required"));
    assert_eq!(calls.load(Ordering::SeqCst), 0);

    let all = every(&[&counted, &counted]);
    assert!(all.validate().is_ok());
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn some_passes_when_any_validator_passes() {
    let bad = Valuer::new("", "a", "A").required();
    let good = Valuer::new("x", "b", "B").required();

    assert!(some(&[&bad, &bad, &good]).validate().is_ok());
    assert!(some(&[]).validate().is_ok());
}

#[test]
fn some_lists_every_failure_when_none_pass() {
    let phone = Valuer::new("", "phone", "Phone").required();
    let email = Valuer::new("x", "email", "Email").contains("@");

    let failure = some(&[&phone, &email]).validate().unwrap_err();
    let err = failure.first().unwrap();
    assert_eq!(err.code(), "any_of");
    assert_eq!(
        failure.to_string(),
        "at least one of the following must pass:\n  Phone is required\n  Email must contain '@'"
    );

    let alternatives = err.cause().and_then(|c| c.downcast_ref::<Alternatives>()).unwrap();
    let codes: Vec<&str> = alternatives.errors().iter().map(|e| e.code()).collect();
    assert_eq!(codes, ["required", "contains"]);
    assert!(alternatives.source().is_some());
}

#[test]
fn any_of_header_comes_from_the_registry() {
    let missing = Valuer::new("", "phone", "Phone").required();
    let failure = some(&[&missing]).validate().unwrap_err();
    let err = failure.first().unwrap();

    assert_eq!(err.render(&Registry::chinese()), "以下错误至少满足一项：");
}

#[test]
fn combinators_nest() {
    let a = Valuer::new("", "a", "A").required();
    let b = Valuer::new("x", "b", "B").required();
    let c = Valuer::new(5, "c", "C").less_than(3);

    let either = some(&[&a, &b]);
    let all = every(&[&either, &c]);
    assert_eq!(first_code(all.validate()).as_deref(), Some("less_than"));

    let errors = validate(&[&all, &a]).unwrap_err().into_errors();
    assert_eq!(errors.len(), 2);
}

#[test]
fn index_by_selects_the_first_complete_group() {
    let index = IndexBy::new([vec!["", ""], vec!["a", "b"], vec!["c", "d"]]);
    assert_eq!(index.selected(), None);
    assert!(index.validate().is_ok());
    assert_eq!(index.selected(), Some(1));
}

#[test]
fn index_by_rejects_empty_and_partial_groups() {
    let index = IndexBy::new([Vec::<&str>::new(), vec!["a", ""]]);
    let failure = index.validate().unwrap_err();

    assert_eq!(index.selected(), None);
    let err = failure.first().unwrap();
    assert_eq!(err.code(), "index_by");
    assert_eq!(err.render(&Registry::english()), "parameters are incomplete");
    assert_eq!(err.render(&Registry::chinese()), "参数不完整");
}

#[test]
fn index_by_options_customize_the_error() {
    let index = IndexBy::new([vec![""]])
        .with_format("need {what}")
        .with_param("what", "credentials")
        .with_option(ErrorOption::code("login"));
    let failure = index.validate().unwrap_err();
    let err = failure.first().unwrap();

    assert_eq!(err.code(), "login");
    assert_eq!(err.render(&Registry::english()), "need credentials");
}

#[test]
fn checker_passes_engine_errors_through() {
    let checker = Checker::new(|| {
        Err::<(), _>(Error::new("taken").with_subject("email", "Email", "a@b"))
    });
    let failure = checker.validate().unwrap_err();
    let err = failure.first().unwrap();

    assert_eq!(err.code(), "taken");
    assert_eq!(err.field(), "email");
}

#[test]
fn checker_makes_foreign_errors_opaque() {
    let checker = Checker::new(|| Err::<(), _>("database unavailable"));
    let failure = checker.validate().unwrap_err();

    assert_eq!(failure.first().map(|e| e.code()), Some("opaque"));
    assert_eq!(failure.to_string(), "database unavailable");
}

#[test]
fn checker_wrap_binds_the_value() {
    let adult = |age: i32| {
        Checker::wrap(age, |v| {
            if v.as_i64() >= Some(18) {
                Ok(())
            } else {
                Err(Error::new("adult"))
            }
        })
        .validate()
    };

    assert!(adult(21).is_ok());
    assert_eq!(first_code(adult(17)).as_deref(), Some("adult"));
}

#[test]
fn field_map_yields_null_for_missing_keys() {
    let mut form = FieldMap::new([("name", "ann")]);
    assert_eq!(form.field("email", "Email").value(), &Value::Null);
    assert_eq!(form.insert("email", "ann@example.com"), None);
    assert_eq!(form.get("email"), Some(&Value::from("ann@example.com")));

    let email = form.field("email", "Email");
    assert_eq!(email.field(), "email");
    assert_eq!(email.label(), "Email");
}

#[test]
fn field_map_from_records_and_maps() {
    let from_record = FieldMap::from(record!(User { name: "ann" }));
    assert_eq!(from_record.field("name", "Name").value(), &Value::from("ann"));

    let from_map = FieldMap::from(BTreeMap::from([("name", "ann")]));
    assert_eq!(from_map, from_record);
}
