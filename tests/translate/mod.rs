use field_rail::translate::{substitute, Registry};
use field_rail::types::{Error, Params};

fn label(name: &'static str) -> Params {
    [("label", name)].into_iter().collect()
}

fn registry() -> Registry {
    let mut registry = Registry::new();
    registry.register("required", "{label} is required");
    registry
}

#[test]
fn code_translator_wins_over_template_and_format() {
    let mut registry = registry();
    registry.register_translator("required", |template, params| {
        let label = params.get("label").map(|v| v.to_string()).unwrap_or_default();
        format!("T[{template}|{label}]")
    });

    let params = label("Name");
    assert_eq!(registry.render("required", None, &params), "T[{label} is required|Name]");
    assert_eq!(registry.render("required", Some("custom"), &params), "T[custom|Name]");
}

#[test]
fn translator_without_template_receives_an_empty_one() {
    let mut registry = Registry::new();
    registry.register_translator("ping", |template, _| format!("<{template}>"));
    assert_eq!(registry.render("ping", None, &Params::new()), "<>");
}

#[test]
fn explicit_format_beats_registered_template() {
    let registry = registry();
    let params = label("Name");

    assert_eq!(registry.render("required", Some("{label}!"), &params), "Name!");
    assert_eq!(registry.render("required", Some(""), &params), "Name is required");
}

#[test]
fn default_translator_receives_the_chosen_template() {
    let mut registry = registry();
    registry.set_default_translator(|template, _| template.to_uppercase());
    assert!(registry.default_translator().is_some());

    let params = label("Name");
    assert_eq!(registry.render("required", None, &params), "{LABEL} IS REQUIRED");

    registry.clear_default_translator();
    assert_eq!(registry.render("required", None, &params), "Name is required");
}

#[test]
fn code_translator_beats_default_translator() {
    let mut registry = registry();
    registry
        .set_default_translator(|_, _| "default".to_owned())
        .register_translator("required", |_, _| "specific".to_owned());

    assert_eq!(registry.render("required", None, &Params::new()), "specific");
    assert_eq!(registry.render("other", None, &Params::new()), "default");
}

#[test]
fn substitution_is_literal_and_single_pass() {
    let params: Params = [("a", "{b}"), ("b", "x")].into_iter().collect();

    assert_eq!(substitute("{a}-{b}-{c}", &params), "{b}-x-{c}");
    assert_eq!(substitute("{{b}}", &params), "{x}");
    assert_eq!(substitute("no tokens", &params), "no tokens");
    assert_eq!(substitute("open {b", &params), "open {b");
    assert_eq!(substitute("", &params), "");
}

#[test]
fn catalogs_expose_templates_and_translators() {
    let english = Registry::english();
    assert_eq!(english.template("required"), Some("{label} is required"));
    assert!(english.has_translator("typeof"));
    assert!(!english.has_translator("required"));
    assert!(Registry::new().template("required").is_none());
}

#[test]
fn typeof_translator_names_the_expected_kind() {
    let err = Error::new("typeof").with_subject("age", "Age", "x").with_param("kind", "int");
    assert_eq!(err.render(&Registry::english()), "Age must be an integer");
    assert_eq!(err.render(&Registry::chinese()), "Age不是有效的整数");

    let unknown = Error::new("typeof").with_subject("v", "V", 1).with_param("kind", "optional");
    assert_eq!(unknown.render(&Registry::english()), "V has an invalid type");
    assert_eq!(unknown.render(&Registry::chinese()), "V格式验证失败");
}

#[test]
fn typeof_translator_honors_an_explicit_format() {
    let err = Error::new("typeof")
        .with_subject("age", "Age", "x")
        .with_param("kind", "int")
        .with_format("{label}: want {kind}");
    assert_eq!(err.render(&Registry::english()), "Age: want int");
}

#[test]
fn chinese_catalog_renders_bounds() {
    let err = Error::new("length_between")
        .with_subject("name", "姓名", "a")
        .with_param("min", 2)
        .with_param("max", 8);
    assert_eq!(err.render(&Registry::chinese()), "姓名长度必须大于或等于2且小于或等于8");
}

#[test]
fn debug_lists_registered_codes() {
    let mut registry = Registry::new();
    registry.register("b", "").register("a", "");
    assert_eq!(
        format!("{registry:?}"),
        r#"Registry { codes: ["a", "b"], default_translator: false }"#
    );
}
