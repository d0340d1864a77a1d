//! Tests for replacement values and the params! macro.

use dotloc::{LocaleNode, Value, params};

#[test]
fn conversions_pick_variant() {
    assert_eq!(Value::from(7_i32), Value::Int(7));
    assert_eq!(Value::from(7_u32), Value::Long(7));
    assert_eq!(Value::from(7_usize), Value::Long(7));
    assert_eq!(Value::from(usize::MAX), Value::Float(usize::MAX as f64));
    assert_eq!(Value::from(0.5_f32), Value::Float(0.5));
    assert_eq!(Value::from(String::from("x")), Value::String("x".to_string()));
}

#[test]
fn numeric_views() {
    assert_eq!(Value::Int(3).as_f64(), Some(3.0));
    assert_eq!(Value::from(" 2.5 ").as_f64(), Some(2.5));
    assert_eq!(Value::from("many").as_f64(), None);
    assert_eq!(Value::Long(-4).as_i64(), Some(-4));
    assert_eq!(Value::Float(1.0).as_i64(), None);
}

#[test]
fn display_is_natural() {
    assert_eq!(Value::Float(3.0).to_string(), "3");
    assert_eq!(Value::Float(-0.25).to_string(), "-0.25");
    assert_eq!(Value::from("a b").to_string(), "a b");
}

#[test]
fn params_macro_accepts_mixed_values_and_trailing_comma() {
    let p = params! {
        "n" => 2,
        "price" => 9.99,
        "who" => String::from("Ann"),
    };
    assert_eq!(p.len(), 3);
    assert_eq!(p["n"], Value::Int(2));
    assert_eq!(p["price"], Value::Float(9.99));
    assert_eq!(p["who"].as_str(), Some("Ann"));
    assert!(params! {}.is_empty());
}

#[test]
fn locale_tree_serializes_back_to_plain_json() {
    let tree = LocaleNode::from_json_str(r#"{"b": ["x", 1], "a": {"c": null}}"#).unwrap();
    assert_eq!(
        serde_json::to_string(&tree).unwrap(),
        r#"{"a":{"c":""},"b":["x","1"]}"#
    );
}
