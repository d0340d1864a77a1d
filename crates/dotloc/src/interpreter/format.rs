//! Rendering replacement values, optionally through a printf-style spec.

use thiserror::Error;

use crate::parser::{Conversion, ConversionKind, ParseError, SpecPiece, parse_format_spec};
use crate::types::Value;

/// Largest width or precision a conversion may request.
pub const MAX_FIELD_WIDTH: usize = 1024;

/// Why a value could not be rendered with a spec.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("spec contains {count} conversions, expected at most one")]
    MultipleConversions { count: usize },

    #[error("conversion '{conversion}' cannot format {kind} value '{value}'")]
    Incompatible {
        conversion: char,
        kind: &'static str,
        value: String,
    },

    #[error("precision is not allowed for conversion '{conversion}'")]
    Precision { conversion: char },

    #[error("{field} {value} exceeds the maximum of {max}")]
    FieldTooLarge {
        field: &'static str,
        value: usize,
        max: usize,
    },
}

/// Render `value`, honoring `spec` when present.
///
/// Without a spec, the value's natural representation is used. With a spec,
/// the text around the single conversion is kept and the conversion renders
/// the value.
///
/// # Example
///
/// ```
/// use dotloc::Value;
/// use dotloc::interpreter::render;
///
/// assert_eq!(render(&Value::Int(5), None).unwrap(), "5");
/// assert_eq!(render(&Value::Float(3.14159), Some("%.2f")).unwrap(), "3.14");
/// assert_eq!(render(&Value::Int(42), Some("[%5d]")).unwrap(), "[   42]");
/// assert!(render(&Value::Float(1.5), Some("%d")).is_err());
/// ```
pub fn render(value: &Value, spec: Option<&str>) -> Result<String, FormatError> {
    let Some(spec) = spec else {
        return Ok(value.to_string());
    };
    let pieces = validate_spec(spec)?;
    let mut output = String::new();
    for piece in &pieces {
        match piece {
            SpecPiece::Literal(text) => output.push_str(text),
            SpecPiece::Conversion(conversion) => output.push_str(&convert(conversion, value)?),
        }
    }
    Ok(output)
}

/// Parse `spec` and check it has at most one conversion, whose width and
/// precision are at most [`MAX_FIELD_WIDTH`].
pub fn validate_spec(spec: &str) -> Result<Vec<SpecPiece>, FormatError> {
    let pieces = parse_format_spec(spec)?;
    let conversions: Vec<&Conversion> = pieces
        .iter()
        .filter_map(|piece| match piece {
            SpecPiece::Conversion(conversion) => Some(conversion),
            SpecPiece::Literal(_) => None,
        })
        .collect();
    if conversions.len() > 1 {
        return Err(FormatError::MultipleConversions {
            count: conversions.len(),
        });
    }
    for conversion in conversions {
        check_field("width", conversion.width)?;
        check_field("precision", conversion.precision)?;
    }
    Ok(pieces)
}

fn check_field(field: &'static str, value: Option<usize>) -> Result<(), FormatError> {
    match value {
        Some(value) if value > MAX_FIELD_WIDTH => Err(FormatError::FieldTooLarge {
            field,
            value,
            max: MAX_FIELD_WIDTH,
        }),
        Some(_) | None => Ok(()),
    }
}

fn convert(conversion: &Conversion, value: &Value) -> Result<String, FormatError> {
    let flags = conversion.flags;
    let numeric = |sign_negative: bool, digits: String| {
        let sign = if sign_negative {
            "-"
        } else if flags.plus_sign {
            "+"
        } else if flags.space_sign {
            " "
        } else {
            ""
        };
        pad_numeric(conversion, sign, &digits)
    };

    match conversion.kind {
        ConversionKind::Decimal => {
            reject_precision(conversion, 'd')?;
            let n = integer(value, 'd')?;
            let mut digits = n.unsigned_abs().to_string();
            if flags.grouping {
                digits = group_thousands(&digits);
            }
            Ok(numeric(n < 0, digits))
        }
        ConversionKind::Hex { upper } => {
            reject_precision(conversion, 'x')?;
            let bits = unsigned_bits(value, 'x')?;
            let mut digits = if upper {
                format!("{bits:X}")
            } else {
                format!("{bits:x}")
            };
            if flags.alternate {
                digits.insert_str(0, if upper { "0X" } else { "0x" });
            }
            Ok(numeric(false, digits))
        }
        ConversionKind::Octal => {
            reject_precision(conversion, 'o')?;
            let bits = unsigned_bits(value, 'o')?;
            let mut digits = format!("{bits:o}");
            if flags.alternate {
                digits.insert(0, '0');
            }
            Ok(numeric(false, digits))
        }
        ConversionKind::Fixed => {
            let v = float(value, 'f')?;
            let digits = finite_or(v, |abs| {
                fixed_digits(abs, conversion.precision.unwrap_or(6), flags.grouping)
            });
            Ok(numeric(v.is_sign_negative() && !v.is_nan(), digits))
        }
        ConversionKind::Exponent { upper } => {
            let v = float(value, 'e')?;
            let digits = finite_or(v, |abs| {
                exponent_digits(abs, conversion.precision.unwrap_or(6), upper)
            });
            Ok(numeric(v.is_sign_negative() && !v.is_nan(), digits))
        }
        ConversionKind::General { upper } => {
            let v = float(value, 'g')?;
            let digits = finite_or(v, |abs| {
                general_digits(abs, conversion.precision.unwrap_or(6), upper, flags.alternate)
            });
            Ok(numeric(v.is_sign_negative() && !v.is_nan(), digits))
        }
        ConversionKind::Str | ConversionKind::UpperStr => {
            let mut text = value.to_string();
            if let Some(precision) = conversion.precision {
                text = text.chars().take(precision).collect();
            }
            if conversion.kind == ConversionKind::UpperStr {
                text = text.to_uppercase();
            }
            Ok(pad_text(conversion, text))
        }
        ConversionKind::Char => {
            reject_precision(conversion, 'c')?;
            Ok(pad_text(conversion, character(value)?.to_string()))
        }
    }
}

fn reject_precision(conversion: &Conversion, c: char) -> Result<(), FormatError> {
    match conversion.precision {
        Some(_) => Err(FormatError::Precision { conversion: c }),
        None => Ok(()),
    }
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Int(_) => "int",
        Value::Long(_) => "long",
        Value::Float(_) => "float",
        Value::String(_) => "string",
    }
}

fn incompatible(conversion: char, value: &Value) -> FormatError {
    FormatError::Incompatible {
        conversion,
        kind: kind_name(value),
        value: value.to_string(),
    }
}

fn integer(value: &Value, conversion: char) -> Result<i64, FormatError> {
    value
        .as_i64()
        .ok_or_else(|| incompatible(conversion, value))
}

/// Two's-complement bits at the value's own width.
fn unsigned_bits(value: &Value, conversion: char) -> Result<u64, FormatError> {
    match value {
        Value::Int(n) => Ok(u64::from(*n as u32)),
        Value::Long(n) => Ok(*n as u64),
        Value::Float(_) | Value::String(_) => Err(incompatible(conversion, value)),
    }
}

fn float(value: &Value, conversion: char) -> Result<f64, FormatError> {
    match value {
        Value::Int(_) | Value::Long(_) | Value::Float(_) => value
            .as_f64()
            .ok_or_else(|| incompatible(conversion, value)),
        Value::String(_) => Err(incompatible(conversion, value)),
    }
}

fn character(value: &Value) -> Result<char, FormatError> {
    match value {
        Value::Int(_) | Value::Long(_) => value
            .as_i64()
            .and_then(|n| u32::try_from(n).ok())
            .and_then(char::from_u32)
            .ok_or_else(|| incompatible('c', value)),
        Value::String(s) => {
            let mut chars = s.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Ok(c),
                _ => Err(incompatible('c', value)),
            }
        }
        Value::Float(_) => Err(incompatible('c', value)),
    }
}

/// Digits for a non-finite float, or `f(|v|)` for a finite one.
fn finite_or(v: f64, f: impl FnOnce(f64) -> String) -> String {
    if v.is_nan() {
        "NaN".to_string()
    } else if v.is_infinite() {
        "Infinity".to_string()
    } else {
        f(v.abs())
    }
}

fn fixed_digits(abs: f64, precision: usize, grouping: bool) -> String {
    let digits = format!("{abs:.precision$}");
    if !grouping {
        return digits;
    }
    match digits.split_once('.') {
        Some((whole, fraction)) => format!("{}.{fraction}", group_thousands(whole)),
        None => group_thousands(&digits),
    }
}

fn exponent_digits(abs: f64, precision: usize, upper: bool) -> String {
    let raw = format!("{abs:.precision$e}");
    let (mantissa, exponent) = raw.split_once('e').unwrap_or((raw.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let sign = if exponent < 0 { '-' } else { '+' };
    let text = format!("{mantissa}e{sign}{:02}", exponent.unsigned_abs());
    if upper { text.to_uppercase() } else { text }
}

/// `%g`: fixed or exponent notation depending on magnitude, trailing zeros
/// removed unless `alternate`.
fn general_digits(abs: f64, precision: usize, upper: bool, alternate: bool) -> String {
    let precision = precision.max(1);
    let exponent = if abs == 0.0 {
        0
    } else {
        let raw = format!("{abs:.prec$e}", prec = precision - 1);
        raw.split_once('e')
            .and_then(|(_, e)| e.parse::<i64>().ok())
            .unwrap_or(0)
    };
    let precision_i = i64::try_from(precision).unwrap_or(i64::MAX);
    let mut text = if exponent < -4 || exponent >= precision_i {
        exponent_digits(abs, precision - 1, upper)
    } else {
        let decimals = usize::try_from(precision_i - 1 - exponent).unwrap_or(0);
        format!("{abs:.decimals$}")
    };
    if !alternate {
        text = strip_trailing_zeros(&text);
    }
    text
}

fn strip_trailing_zeros(text: &str) -> String {
    let (number, exponent) = match text.find(['e', 'E']) {
        Some(index) => text.split_at(index),
        None => (text, ""),
    };
    if !number.contains('.') {
        return text.to_string();
    }
    let trimmed = number.trim_end_matches('0').trim_end_matches('.');
    format!("{trimmed}{exponent}")
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len().div_ceil(3));
    for (index, c) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

fn pad_numeric(conversion: &Conversion, sign: &str, digits: &str) -> String {
    let len = sign.chars().count() + digits.chars().count();
    let fill = conversion.width.unwrap_or(0).saturating_sub(len);
    let flags = conversion.flags;
    if flags.left_align {
        format!("{sign}{digits}{}", " ".repeat(fill))
    } else if flags.zero_pad && digits.starts_with(|c: char| c.is_ascii_digit()) {
        match digits.strip_prefix("0x").or_else(|| digits.strip_prefix("0X")) {
            Some(rest) => format!("{sign}{}{}{rest}", &digits[..2], "0".repeat(fill)),
            None => format!("{sign}{}{digits}", "0".repeat(fill)),
        }
    } else {
        format!("{}{sign}{digits}", " ".repeat(fill))
    }
}

fn pad_text(conversion: &Conversion, text: String) -> String {
    let fill = conversion
        .width
        .unwrap_or(0)
        .saturating_sub(text.chars().count());
    if fill == 0 {
        text
    } else if conversion.flags.left_align {
        format!("{text}{}", " ".repeat(fill))
    } else {
        format!("{}{text}", " ".repeat(fill))
    }
}
