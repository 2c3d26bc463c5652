//! Tests for built-in definitions and definition checks.

use form_model::{Effect, MeasurementType, Size, SizeRange};
use form_standards::{
    FormVariant, StandardsError, load_form, load_size_ranges, parse_form, parse_size_ranges,
};

fn rule_listing(variant: FormVariant) -> String {
    let form = load_form(variant).expect("load form");
    form.fields
        .iter()
        .map(|field| format!("{} = {:?} [{}]", field.name, field.default_value, field.rule))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn yarn_calculator_fields() {
    insta::assert_snapshot!(rule_listing(FormVariant::YarnCalculator), @r#"
    yarnLength = "400" [required|numeric|min:50|max:800]
    itemType = "scarf" [required|in:scarf,sweater,dress]
    length = "120" [numeric|min:10|max:300]
    size = "" [string|in:S,M,L,XL]
    sleevesLength = "" [string|in:short,long]
    bodyMeasurements.waist = "" [numeric|min:40|max:180]
    bodyMeasurements.chest = "" [numeric|min:50|max:200]
    bodyMeasurements.hips = "" [numeric|min:60|max:220]
    "#);
}

#[test]
fn registration_fields() {
    insta::assert_snapshot!(rule_listing(FormVariant::Registration), @r#"
    email = "s.jobs@apple.com" [required|email|string|between:5,25]
    password = "" [required|string|between:5,25]
    passwordConfirm = "" [required|string|same:password]
    "#);
}

#[test]
fn yarn_calculator_dependencies() {
    let form = load_form(FormVariant::YarnCalculator).expect("load form");
    let sleeves = form
        .dependencies
        .iter()
        .find(|dep| dep.target == "sleevesLength")
        .expect("sleeves dependency");
    assert_eq!(sleeves.driver, "itemType");
    assert_eq!(
        sleeves.effects_for("sweater"),
        &[Effect::Disable, Effect::Set("long".to_string())]
    );
    assert_eq!(sleeves.effects_for("dress"), &[Effect::Enable, Effect::Noop]);
    assert_eq!(sleeves.effects_for("scarf"), &[Effect::Disable, Effect::Clear]);

    let bound: Vec<_> = form.measurements.iter().map(|m| m.measurement).collect();
    assert_eq!(
        bound,
        vec![
            MeasurementType::Waist,
            MeasurementType::Chest,
            MeasurementType::Hips
        ]
    );
    assert!(form.measurements.iter().all(|m| m.size_field == "size"));
}

#[test]
fn clothing_dependencies_are_symmetric() {
    let form = load_form(FormVariant::Clothing).expect("load form");
    let dress = &form.dependencies[0];
    let pants = &form.dependencies[1];
    assert_eq!(dress.target, "dressColor");
    assert_eq!(pants.target, "pantsColor");
    assert!(dress.effects_for("male").contains(&Effect::Disable));
    assert!(dress.effects_for("female").is_empty());
    assert!(pants.effects_for("female").contains(&Effect::Disable));
    assert!(pants.effects_for("male").is_empty());
}

#[test]
fn size_table_covers_every_size_and_measurement() {
    let table = load_size_ranges().expect("load size ranges");
    assert_eq!(table.sizes().collect::<Vec<_>>(), Size::ALL);
    for size in Size::ALL {
        for measurement in MeasurementType::ALL {
            let range = table.get(size, measurement).expect("range present");
            assert!(range.min < range.max, "{size} {measurement}");
        }
    }
    assert_eq!(
        table.lookup("M", MeasurementType::Waist),
        Some(SizeRange::new(70.0, 80.0))
    );
}

#[test]
fn size_table_rejects_unknown_keys() {
    let err = parse_size_ranges("[XXL]\nwaist = { min = 1, max = 2 }\n", "test").unwrap_err();
    assert!(matches!(err, StandardsError::UnknownSize { ref size } if size == "XXL"));

    let err = parse_size_ranges("[S]\nneck = { min = 1, max = 2 }\n", "test").unwrap_err();
    assert!(matches!(err, StandardsError::UnknownMeasurement { .. }));

    let err = parse_size_ranges("[S]\nwaist = { min = 9, max = 2 }\n", "test").unwrap_err();
    assert!(matches!(err, StandardsError::InvertedRange { .. }));
}

const SMALL_FORM: &str = r#"
id = "small"
title = "Small"

[[fields]]
name = "a"
label = "A"

[[fields]]
name = "b"
label = "B"
rules = "same:a"
"#;

#[test]
fn parse_form_accepts_minimal_definition() {
    let form = parse_form(SMALL_FORM, "small.toml").expect("parse");
    assert_eq!(form.field_names().collect::<Vec<_>>(), vec!["a", "b"]);
    assert!(form.options.validate_on_blur);
}

#[test]
fn parse_form_rejects_nested_plain_field() {
    let source = SMALL_FORM
        .replace("name = \"b\"", "name = \"a.b\"")
        .replace("same:a", "string");
    let err = parse_form(&source, "small.toml").unwrap_err();
    assert_eq!(
        err.to_string(),
        "form small: field `a.b` is nested under field `a`"
    );
}

#[test]
fn parse_form_rejects_duplicate_fields() {
    let source = SMALL_FORM.replace("name = \"b\"", "name = \"a\"");
    let err = parse_form(&source, "small.toml").unwrap_err();
    assert_eq!(err.to_string(), "form small: duplicate field `a`");
}

#[test]
fn parse_form_rejects_unknown_references() {
    let source = SMALL_FORM.replace("same:a", "same:c");
    let err = parse_form(&source, "small.toml").unwrap_err();
    assert_eq!(
        err.to_string(),
        "form small: rule `same:c` of `b` refers to unknown field `c`"
    );

    let source = format!("{SMALL_FORM}\n[[dependencies]]\ndriver = \"z\"\ntarget = \"a\"\n");
    let err = parse_form(&source, "small.toml").unwrap_err();
    assert_eq!(
        err.to_string(),
        "form small: dependency driver refers to unknown field `z`"
    );
}

#[test]
fn parse_form_reports_toml_errors_with_origin() {
    let err = parse_form("id = ", "broken.toml").unwrap_err();
    assert!(matches!(err, StandardsError::Toml { .. }));
    assert!(err.to_string().starts_with("failed to parse TOML broken.toml"));

    let err = parse_form(&SMALL_FORM.replace("same:a", "same"), "small.toml").unwrap_err();
    assert!(err.to_string().contains("requires an argument"));
}

#[test]
fn load_form_file_reports_missing_file() {
    let err = form_standards::load_form_file(std::path::Path::new("/nonexistent/form.toml"))
        .unwrap_err();
    assert!(matches!(err, StandardsError::Io { .. }));
}
