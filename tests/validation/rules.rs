use field_rail::prelude::*;
use field_rail::translate::Registry;

use super::first_code;

fn passes(valuer: Valuer<'_>) -> bool {
    valuer.validate().is_ok()
}

fn message(valuer: Valuer<'_>) -> String {
    let failure = valuer.validate().unwrap_err();
    failure.first().unwrap().render(&Registry::english())
}

#[test]
fn type_rules() {
    assert!(passes(Valuer::new("x", "v", "V").is_string()));
    let not_string = Valuer::new(1, "v", "V").is_string().validate();
    assert_eq!(first_code(not_string).as_deref(), Some("is_string"));

    assert!(passes(Valuer::new(true, "v", "V").is_bool()));
    assert!(passes(Valuer::new("false", "v", "V").is_bool()));
    assert!(!passes(Valuer::new("yes", "v", "V").is_bool()));

    assert!(passes(Valuer::new(1.5, "v", "V").is_number()));
    assert!(!passes(Valuer::new("1.5", "v", "V").is_number()));

    assert!(passes(Valuer::new("1.5", "v", "V").is_numeric()));
    assert!(passes(Valuer::new(" 42 ", "v", "V").is_numeric()));
    assert!(passes(Valuer::new(7u8, "v", "V").is_numeric()));
    assert!(!passes(Valuer::new("abc", "v", "V").is_numeric()));
    assert!(!passes(Valuer::new("inf", "v", "V").is_numeric()));
}

#[test]
fn length_rules_count_chars_and_elements() {
    assert!(passes(Valuer::new("héllo", "s", "S").length(5)));
    assert!(!passes(Valuer::new(vec![1, 2, 3], "s", "S").max_length(2)));
    assert!(passes(Valuer::new("ab", "s", "S").length_between(2, 4)));
    assert!(!passes(Valuer::new("abcde", "s", "S").length_between(2, 4)));
    assert!(!passes(Valuer::new(42, "s", "S").min_length(1)));
    assert!(passes(Valuer::new(record!(P { x: 1, y: 2 }), "p", "P").length(2)));
}

#[test]
fn not_empty_is_a_rule_on_present_values() {
    assert!(passes(Valuer::new("", "s", "S").not_empty()));
    assert!(passes(Valuer::new("x", "s", "S").not_empty()));
}

#[test]
fn comparison_rules_compare_numbers_and_strings() {
    assert!(passes(Valuer::new(18u8, "age", "Age").greater_equal_than(18)));
    assert!(!passes(Valuer::new(17.5, "age", "Age").greater_equal_than(18)));
    assert!(passes(Valuer::new("b", "c", "C").greater_than("a")));
    assert!(!passes(Valuer::new("10", "c", "C").less_than(50)));
    assert!(passes(Valuer::new(-3, "n", "N").less_equal_than(-3)));
    assert!(!passes(Valuer::new(-3, "n", "N").less_than(-3)));
}

#[test]
fn between_is_inclusive_and_not_between_is_its_complement() {
    assert!(passes(Valuer::new(5, "n", "N").between(1, 5)));
    assert!(passes(Valuer::new(1, "n", "N").between(1, 5)));
    assert!(!passes(Valuer::new(6, "n", "N").between(1, 5)));

    assert!(!passes(Valuer::new(5, "n", "N").not_between(1, 5)));
    assert!(passes(Valuer::new(6, "n", "N").not_between(1, 5)));
    assert!(passes(Valuer::new(-1, "n", "N").not_between(1, 5)));
}

#[test]
fn comparison_failures_carry_their_bounds() {
    assert_eq!(
        message(Valuer::new(0.5, "ratio", "Ratio").between(1, 2)),
        "Ratio must be between 1 and 2"
    );
    assert_eq!(
        message(Valuer::new(3, "n", "N").not_between(1, 5)),
        "N must be less than 1 or greater than 5"
    );
    assert_eq!(message(Valuer::new(9, "n", "N").less_than(3)), "N must be less than 3");
}

#[test]
fn equality_rules_ignore_numeric_representation() {
    assert!(passes(Valuer::new(3u64, "n", "N").equal(3)));
    assert!(!passes(Valuer::new(3, "n", "N").not_equal(3.0)));
    assert!(passes(Valuer::new("a", "n", "N").not_equal("b")));
    assert!(passes(Valuer::new(2u8, "n", "N").one_of([1, 2, 3])));
    assert!(!passes(Valuer::new("4", "n", "N").one_of(["1", "2"])));
}

#[test]
fn equality_failures_render_their_operands() {
    assert_eq!(message(Valuer::new(1, "n", "N").equal(2)), "N must be equal to 2");
    assert_eq!(
        message(Valuer::new("xl", "size", "Size").one_of(["s", "m", "l"])),
        "Size must be one of [s, m, l]"
    );
}

#[test]
fn substring_rules() {
    assert!(passes(Valuer::new("hello world", "s", "S").contains("lo w")));
    assert!(!passes(Valuer::new("hello", "s", "S").contains_any("xyz")));
    assert!(passes(Valuer::new("hello", "s", "S").contains_any("xyo")));
    assert!(passes(Valuer::new("a-b", "s", "S").contains_char('-')));
    assert!(!passes(Valuer::new("a-b", "s", "S").excludes("-")));
    assert!(passes(Valuer::new("abc", "s", "S").excludes_all("xyz")));
    assert!(!passes(Valuer::new("abc", "s", "S").excludes_all("xyc")));
    assert!(!passes(Valuer::new("a b", "s", "S").excludes_char(' ')));
}

#[test]
fn affix_rules() {
    assert!(passes(Valuer::new("https://x", "s", "S").starts_with("https://")));
    assert!(!passes(Valuer::new("_tmp", "s", "S").starts_not_with("_")));
    assert!(passes(Valuer::new("a.rs", "s", "S").ends_with(".rs")));
    assert!(!passes(Valuer::new("a.exe", "s", "S").ends_not_with(".exe")));
}

#[test]
fn character_class_rules() {
    assert!(passes(Valuer::new("abc1", "s", "S").is_lower()));
    assert!(!passes(Valuer::new("aBc", "s", "S").is_lower()));
    assert!(passes(Valuer::new("ABC-1", "s", "S").is_upper()));
    assert!(!passes(Valuer::new("héllo", "s", "S").is_ascii()));
    assert!(passes(Valuer::new("abcXYZ", "s", "S").is_alpha()));
    assert!(!passes(Valuer::new("abc1", "s", "S").is_alpha()));
    assert!(passes(Valuer::new("abc1", "s", "S").is_alphanumeric()));
    assert!(!passes(Valuer::new("abc 1", "s", "S").is_alphanumeric()));
}

#[test]
fn string_rules_check_the_display_form_of_numbers() {
    assert!(passes(Valuer::new(12345, "zip", "Zip").starts_with("123")));
    assert!(passes(Valuer::new(12345, "zip", "Zip").is_alphanumeric()));
}

#[test]
fn string_failures_render_their_params() {
    assert_eq!(
        message(Valuer::new("ann", "email", "Email").contains_char('@')),
        "Email must contain '@'"
    );
    assert_eq!(
        message(Valuer::new("ann", "url", "URL").starts_with("https")),
        "URL must start with 'https'"
    );
    assert_eq!(
        message(Valuer::new("a b", "slug", "Slug").excludes_all(" /")),
        "Slug must not contain any of ' /'"
    );
}
