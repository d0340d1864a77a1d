//! Tests for value rendering with and without format specs.

use dotloc::Value;
use dotloc::interpreter::{FormatError, MAX_FIELD_WIDTH, render};
use dotloc::parser::{Conversion, ConversionKind, Flags, SpecPiece, parse_format_spec};

fn fmt(value: impl Into<Value>, spec: &str) -> String {
    render(&value.into(), Some(spec)).unwrap()
}

// =========================================================================
// Natural Representation
// =========================================================================

#[test]
fn natural_representation_per_variant() {
    assert_eq!(render(&Value::Int(-7), None).unwrap(), "-7");
    assert_eq!(render(&Value::Long(5_000_000_000), None).unwrap(), "5000000000");
    assert_eq!(render(&Value::Float(2.5), None).unwrap(), "2.5");
    assert_eq!(render(&Value::from("text"), None).unwrap(), "text");
}

// =========================================================================
// Spec Parsing
// =========================================================================

#[test]
fn parses_flags_width_and_precision() {
    let pieces = parse_format_spec("%-+08.3f").unwrap();
    assert_eq!(
        pieces,
        vec![SpecPiece::Conversion(Conversion {
            flags: Flags {
                left_align: true,
                plus_sign: true,
                zero_pad: true,
                ..Flags::default()
            },
            width: Some(8),
            precision: Some(3),
            kind: ConversionKind::Fixed,
        })]
    );
}

#[test]
fn parses_literals_and_escapes() {
    let pieces = parse_format_spec("a%%b%nc").unwrap();
    let text: String = pieces
        .iter()
        .map(|piece| match piece {
            SpecPiece::Literal(s) => s.as_str(),
            SpecPiece::Conversion(_) => "?",
        })
        .collect();
    assert_eq!(text, "a%b\nc");
}

#[test]
fn rejects_unknown_conversion() {
    assert!(parse_format_spec("%q").is_err());
    assert!(parse_format_spec("100%").is_err());
}

// =========================================================================
// Numeric Conversions
// =========================================================================

#[test]
fn fixed_precision() {
    assert_eq!(fmt(3.14159, "%.2f"), "3.14");
    assert_eq!(fmt(2.0, "%f"), "2.000000");
    assert_eq!(fmt(-1.005, "%.1f"), "-1.0");
}

#[test]
fn fixed_widens_integers() {
    assert_eq!(fmt(3, "%.1f"), "3.0");
    assert_eq!(fmt(10_i64, "%.2f"), "10.00");
}

#[test]
fn decimal_with_width_and_flags() {
    assert_eq!(fmt(42, "%d"), "42");
    assert_eq!(fmt(42, "%5d"), "   42");
    assert_eq!(fmt(42, "%-5d|"), "42   |");
    assert_eq!(fmt(42, "%05d"), "00042");
    assert_eq!(fmt(-42, "%05d"), "-0042");
    assert_eq!(fmt(42, "%+d"), "+42");
    assert_eq!(fmt(42, "% d"), " 42");
}

#[test]
fn grouping_separators() {
    assert_eq!(fmt(1_234_567, "%,d"), "1,234,567");
    assert_eq!(fmt(999, "%,d"), "999");
    assert_eq!(fmt(1234.5, "%,.2f"), "1,234.50");
}

#[test]
fn hex_and_octal() {
    assert_eq!(fmt(255, "%x"), "ff");
    assert_eq!(fmt(255, "%X"), "FF");
    assert_eq!(fmt(255, "%#x"), "0xff");
    assert_eq!(fmt(8, "%o"), "10");
    assert_eq!(fmt(-1, "%x"), "ffffffff");
    assert_eq!(fmt(-1_i64, "%x"), "ffffffffffffffff");
}

#[test]
fn exponent_notation() {
    assert_eq!(fmt(12345.678, "%.2e"), "1.23e+04");
    assert_eq!(fmt(0.00012, "%E"), "1.200000E-04");
}

#[test]
fn general_notation() {
    assert_eq!(fmt(0.0001, "%g"), "0.0001");
    assert_eq!(fmt(123456789.0, "%g"), "1.23457e+08");
    assert_eq!(fmt(100.0, "%g"), "100");
    assert_eq!(fmt(0.0, "%g"), "0");
}

#[test]
fn non_finite_floats() {
    assert_eq!(fmt(f64::NAN, "%.2f"), "NaN");
    assert_eq!(fmt(f64::NEG_INFINITY, "%f"), "-Infinity");
}

// =========================================================================
// String Conversions
// =========================================================================

#[test]
fn string_conversion_accepts_any_value() {
    assert_eq!(fmt("abc", "[%s]"), "[abc]");
    assert_eq!(fmt(7, "%s"), "7");
    assert_eq!(fmt("abc", "%5s"), "  abc");
    assert_eq!(fmt("abc", "%-5s|"), "abc  |");
    assert_eq!(fmt("abcdef", "%.3s"), "abc");
    assert_eq!(fmt("abc", "%S"), "ABC");
}

#[test]
fn char_conversion() {
    assert_eq!(fmt(65, "%c"), "A");
    assert_eq!(fmt("z", "%c"), "z");
}

#[test]
fn spec_without_conversion_is_literal() {
    assert_eq!(fmt(1, "fixed text"), "fixed text");
}

// =========================================================================
// Errors
// =========================================================================

#[test]
fn decimal_rejects_float() {
    let err = render(&Value::Float(1.5), Some("%d")).unwrap_err();
    assert!(matches!(err, FormatError::Incompatible { conversion: 'd', kind: "float", .. }));
}

#[test]
fn numeric_conversions_reject_strings() {
    assert!(render(&Value::from("abc"), Some("%.2f")).is_err());
    assert!(render(&Value::from("12"), Some("%d")).is_err());
}

#[test]
fn char_rejects_multi_character_string() {
    assert!(render(&Value::from("ab"), Some("%c")).is_err());
}

#[test]
fn multiple_conversions_are_rejected() {
    let err = render(&Value::Int(1), Some("%d %d")).unwrap_err();
    assert_eq!(err, FormatError::MultipleConversions { count: 2 });
}

#[test]
fn precision_rejected_for_integers() {
    let err = render(&Value::Int(1), Some("%.2d")).unwrap_err();
    assert_eq!(err, FormatError::Precision { conversion: 'd' });
}

#[test]
fn oversized_precision_is_rejected() {
    let err = render(&Value::Float(1.5), Some("%.70000f")).unwrap_err();
    assert_eq!(
        err,
        FormatError::FieldTooLarge {
            field: "precision",
            value: 70000,
            max: MAX_FIELD_WIDTH,
        }
    );
}

#[test]
fn oversized_width_is_rejected() {
    let err = render(&Value::Int(1), Some("%99999999999999999d")).unwrap_err();
    assert!(matches!(err, FormatError::FieldTooLarge { field: "width", .. }));
    assert!(render(&Value::from("x"), Some("%5000s")).is_err());
}

#[test]
fn width_beyond_usize_is_a_parse_error() {
    let err = render(&Value::Int(1), Some("%999999999999999999999999999d")).unwrap_err();
    assert!(matches!(err, FormatError::Parse(_)));
}

#[test]
fn width_and_precision_at_the_limit_are_accepted() {
    let spec = format!("%{MAX_FIELD_WIDTH}.{MAX_FIELD_WIDTH}f");
    let text = render(&Value::Float(1.0), Some(&spec)).unwrap();
    assert_eq!(text.len(), MAX_FIELD_WIDTH + 2);
}
