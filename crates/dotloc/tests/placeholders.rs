//! Tests for interpolation, formatting and pluralization passes.

use dotloc::{EvalError, Locale, LocaleNode, params};

fn locale(json: &str) -> Locale {
    Locale::with_tree(LocaleNode::from_json_str(json).unwrap())
}

// =========================================================================
// Plain Interpolation
// =========================================================================

#[test]
fn plain_placeholder() {
    let l = locale(r#"{"a": "X {{n}}"}"#);
    assert_eq!(l.translate("a", &params! { "n" => 5 }).unwrap(), "X 5");
}

#[test]
fn every_occurrence_is_replaced() {
    let l = locale(r#"{"a": "{{w}}-{{w}}-{{w}}"}"#);
    assert_eq!(l.translate("a", &params! { "w" => "ha" }).unwrap(), "ha-ha-ha");
}

#[test]
fn multiple_names() {
    let l = locale(r#"{"a": "{{greeting}}, {{name}}!"}"#);
    let p = params! { "greeting" => "Hello", "name" => "Alice" };
    assert_eq!(l.translate("a", &p).unwrap(), "Hello, Alice!");
}

#[test]
fn each_value_variant_renders_naturally() {
    let l = locale(r#"{"a": "{{i}} {{l}} {{f}} {{s}}"}"#);
    let p = params! { "i" => 1, "l" => 9_000_000_000_i64, "f" => 0.5, "s" => "str" };
    assert_eq!(l.translate("a", &p).unwrap(), "1 9000000000 0.5 str");
}

#[test]
fn missing_replacement_leaves_placeholder() {
    let l = locale(r#"{"a": "Hi {{name}}, {{other}}"}"#);
    assert_eq!(
        l.translate("a", &params! { "name" => "Bo" }).unwrap(),
        "Hi Bo, {{other}}"
    );
}

#[test]
fn no_replacements_returns_template() {
    let l = locale(r#"{"a": "Hi {{name}}"}"#);
    assert_eq!(l.translate("a", &params! {}).unwrap(), "Hi {{name}}");
}

#[test]
fn dotted_placeholder_names() {
    let l = locale(r#"{"a": "Hi {{user.name}}"}"#);
    assert_eq!(
        l.translate("a", &params! { "user.name" => "Ann" }).unwrap(),
        "Hi Ann"
    );
}

#[test]
fn stray_braces_stay_literal() {
    let l = locale(r#"{"a": "{ {{n}} } {{ {{{n}}}"}"#);
    assert_eq!(l.translate("a", &params! { "n" => 1 }).unwrap(), "{ 1 } {{ {1}");
}

#[test]
fn replacement_values_are_not_rescanned_for_placeholders() {
    let l = locale(r#"{"a": "{{x}} {{y}}"}"#);
    let p = params! { "x" => "{{y}}", "y" => "Y" };
    assert_eq!(l.translate("a", &p).unwrap(), "{{y}} Y");
}

// =========================================================================
// Formatted Interpolation
// =========================================================================

#[test]
fn formatted_placeholder() {
    let l = locale(r#"{"a": "{{v.format(%.2f)}}"}"#);
    assert_eq!(l.translate("a", &params! { "v" => 3.14159 }).unwrap(), "3.14");
}

#[test]
fn formatted_placeholder_with_surrounding_spec_text() {
    let l = locale(r#"{"price": "Total: {{amount.format($%,.2f)}}"}"#);
    assert_eq!(
        l.translate("price", &params! { "amount" => 1234.5 }).unwrap(),
        "Total: $1,234.50"
    );
}

#[test]
fn several_formatted_occurrences_with_different_specs() {
    let l = locale(r#"{"a": "{{v.format(%.1f)}} / {{v.format(%05.1f)}}"}"#);
    assert_eq!(l.translate("a", &params! { "v" => 2.26 }).unwrap(), "2.3 / 002.3");
}

#[test]
fn format_directive_suppresses_plain_form_of_same_name() {
    let l = locale(r#"{"a": "{{v}} = {{v.format(%.1f)}}"}"#);
    assert_eq!(
        l.translate("a", &params! { "v" => 1.26 }).unwrap(),
        "{{v}} = 1.3"
    );
}

#[test]
fn format_directive_does_not_affect_other_names() {
    let l = locale(r#"{"a": "{{w}} {{v.format(%d)}}"}"#);
    let p = params! { "w" => "x", "v" => 3 };
    assert_eq!(l.translate("a", &p).unwrap(), "x 3");
}

#[test]
fn invalid_format_spec_is_an_error() {
    let l = locale(r#"{"a": "{{v.format(%q)}}"}"#);
    let err = l.translate("a", &params! { "v" => 1 }).unwrap_err();
    assert!(matches!(err, EvalError::FormatSpec { ref name, ref spec, .. } if name == "v" && spec == "%q"));
}

#[test]
fn incompatible_format_spec_is_an_error() {
    let l = locale(r#"{"a": "{{v.format(%d)}}"}"#);
    let err = l.translate("a", &params! { "v" => "text" }).unwrap_err();
    assert!(matches!(err, EvalError::FormatSpec { .. }));
}

#[test]
fn oversized_format_fields_are_errors_not_crashes() {
    let l = locale(r#"{"p": "{{v.format(%.70000f)}}", "w": "{{v.format(%99999999999999999d)}}"}"#);
    let p = params! { "v" => 1.5 };
    let err = l.translate("p", &p).unwrap_err();
    assert!(matches!(err, EvalError::FormatSpec { ref spec, .. } if spec == "%.70000f"));
    let err = l.translate("w", &params! { "v" => 1 }).unwrap_err();
    assert!(matches!(err, EvalError::FormatSpec { ref message, .. } if message.contains("width")));
}

#[test]
fn format_directive_without_replacement_is_left_alone() {
    let l = locale(r#"{"a": "{{v.format(%q)}}"}"#);
    assert_eq!(l.translate("a", &params! {}).unwrap(), "{{v.format(%q)}}");
}

// =========================================================================
// Pluralization
// =========================================================================

#[test]
fn two_form_plural_with_empty_form() {
    let l = locale(r#"{"a": "{{c}} item{{c.plural(_, s)}}"}"#);
    assert_eq!(l.translate("a", &params! { "c" => 1 }).unwrap(), "1 item");
    assert_eq!(l.translate("a", &params! { "c" => 2 }).unwrap(), "2 items");
    assert_eq!(l.translate("a", &params! { "c" => 0 }).unwrap(), "0 items");
}

#[test]
fn three_form_plural() {
    let l = locale(r#"{"files": "{{n}} {{n.plural(файл, файла, файлов)}}"}"#);
    let t = |n: i32| l.translate("files", &params! { "n" => n }).unwrap();
    assert_eq!(t(1), "1 файл");
    assert_eq!(t(3), "3 файла");
    assert_eq!(t(11), "11 файлов");
    assert_eq!(t(21), "21 файл");
}

#[test]
fn four_form_plural() {
    let l = locale(r#"{"a": "{{n.plural(one, two, few, other)}}"}"#);
    let t = |n: i32| l.translate("a", &params! { "n" => n }).unwrap();
    assert_eq!(t(1), "one");
    assert_eq!(t(2), "two");
    assert_eq!(t(7), "few");
    assert_eq!(t(11), "other");
}

#[test]
fn plural_counts_accept_every_numeric_variant() {
    let l = locale(r#"{"a": "{{n.plural(one, many)}}"}"#);
    assert_eq!(l.translate("a", &params! { "n" => 1_i64 }).unwrap(), "one");
    assert_eq!(l.translate("a", &params! { "n" => 1.0 }).unwrap(), "one");
    assert_eq!(l.translate("a", &params! { "n" => 1.5 }).unwrap(), "many");
    assert_eq!(l.translate("a", &params! { "n" => "1" }).unwrap(), "one");
}

#[test]
fn plural_without_replacement_is_left_alone() {
    let l = locale(r#"{"a": "item{{c.plural(_, s)}}"}"#);
    assert_eq!(
        l.translate("a", &params! { "other" => 1 }).unwrap(),
        "item{{c.plural(_, s)}}"
    );
}

#[test]
fn plural_with_unsupported_form_count_is_an_error() {
    let l = locale(r#"{"a": "{{c.plural(a, b, c, d, e)}}"}"#);
    let err = l.translate("a", &params! { "c" => 1 }).unwrap_err();
    assert_eq!(
        err,
        EvalError::UnsupportedFormCount {
            name: "c".to_string(),
            count: 5,
        }
    );
}

#[test]
fn plural_with_non_numeric_count_is_an_error() {
    let l = locale(r#"{"a": "{{c.plural(a, b)}}"}"#);
    let err = l.translate("a", &params! { "c" => "many" }).unwrap_err();
    assert!(matches!(err, EvalError::NonNumericCount { .. }));
}

#[test]
fn plural_pass_sees_interpolated_text() {
    let l = locale(r#"{"a": "{{suffix}}"}"#);
    let p = params! { "suffix" => "{{n.plural(x, y)}}", "n" => 2 };
    assert_eq!(l.translate("a", &p).unwrap(), "y");
}

// =========================================================================
// Purity
// =========================================================================

#[test]
fn translate_is_repeatable() {
    let l = locale(r#"{"a": "{{c}} item{{c.plural(_, s)}} $t(b)", "b": "{{c.format(%03d)}}"}"#);
    let p = params! { "c" => 7 };
    let first = l.translate("a", &p).unwrap();
    let second = l.translate("a", &p).unwrap();
    assert_eq!(first, "7 items 007");
    assert_eq!(first, second);
    assert_eq!(p.len(), 1);
}
