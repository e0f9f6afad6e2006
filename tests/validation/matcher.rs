use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use field_rail::prelude::*;

use super::first_code;

#[test]
fn only_the_matching_branch_runs() {
    let (one, two) = (Arc::new(AtomicUsize::new(0)), Arc::new(AtomicUsize::new(0)));
    let (one_calls, two_calls) = (Arc::clone(&one), Arc::clone(&two));
    let matcher = Matcher::new(2, "n", "N")
        .branch(1, move |v| {
            one_calls.fetch_add(1, Ordering::SeqCst);
            v
        })
        .branch(2, move |v| {
            two_calls.fetch_add(1, Ordering::SeqCst);
            v
        });

    assert!(matcher.validate().is_ok());
    assert_eq!((one.load(Ordering::SeqCst), two.load(Ordering::SeqCst)), (0, 1));
}

#[test]
fn first_equal_candidate_wins() {
    let matcher = Matcher::new(1, "n", "N")
        .branch(1, |v| v.rule("first", |_| false))
        .branch(1, |v| v.rule("second", |_| false));
    assert_eq!(first_code(matcher.validate()).as_deref(), Some("first"));
}

#[test]
fn fallback_runs_when_nothing_matches() {
    let matcher = Matcher::new("x", "n", "N")
        .branch("y", |v| v)
        .fallback(|v| v.rule("fallback", |_| false));
    assert_eq!(first_code(matcher.validate()).as_deref(), Some("fallback"));
}

#[test]
fn no_match_and_no_fallback_passes() {
    let matcher = Matcher::new(3, "n", "N").branch(1, |v| v.rule("never", |_| false));
    assert!(matcher.validate().is_ok());
}

#[test]
fn strict_comparison_distinguishes_numeric_types() {
    let strict = Matcher::new(1.0, "n", "N").branch(1, |v| v.rule("hit", |_| false));
    assert!(strict.validate().is_ok());

    let loose = Matcher::new(1.0, "n", "N").loose().branch(1, |v| v.rule("hit", |_| false));
    assert_eq!(first_code(loose.validate()).as_deref(), Some("hit"));
}

#[test]
fn custom_comparison() {
    let matcher = Matcher::new("ADMIN", "role", "Role")
        .compare(|a, b| a.to_text().eq_ignore_ascii_case(&b.to_text()))
        .branch("admin", |v| v.rule("admin", |_| false));
    assert_eq!(first_code(matcher.validate()).as_deref(), Some("admin"));
}

#[test]
fn handlers_validate_the_matcher_subject() {
    let failure = Matcher::new(Some(5), "n", "N")
        .loose()
        .branch(5, |v| v.less_than(3))
        .validate()
        .unwrap_err();
    let err = failure.first().unwrap();

    assert_eq!(err.code(), "less_than");
    assert_eq!(err.field(), "n");
    assert_eq!(err.value(), &Value::from(Some(5)));
}

#[test]
fn matchers_nest_inside_iteration() {
    let contacts = vec![("email", "ann@example.com"), ("phone", "12ab")];
    let kinds: Vec<Value> = contacts.iter().map(|(kind, _)| Value::from(*kind)).collect();
    let values: Vec<Value> = contacts.iter().map(|(_, value)| Value::from(*value)).collect();

    let result = Valuer::new(kinds, "kinds", "Kinds")
        .every(move |item| {
            let index = item.index().unwrap_or_default();
            let value = values[index].clone();
            Matcher::new(item.value().clone(), "kind", "Kind")
                .branch("email", {
                    let value = value.clone();
                    move |_| Valuer::new(value.clone(), "contact", "Contact").contains("@")
                })
                .branch("phone", move |_| {
                    Valuer::new(value.clone(), "contact", "Contact").is_numeric()
                })
        })
        .validate();

    assert_eq!(first_code(result).as_deref(), Some("is_numeric"));
}
