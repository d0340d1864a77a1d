//! printf-style format spec parser using winnow.
//!
//! Grammar:
//! - `%%` is a literal percent sign and `%n` a newline
//! - `%[flags][width][.precision]kind` is a conversion, flags from `-+ 0,#`
//! - everything else is literal text

use winnow::ascii::digit1;
use winnow::combinator::{alt, opt, preceded, repeat};
use winnow::prelude::*;
use winnow::token::{one_of, take_till, take_while};

use super::ast::{Conversion, ConversionKind, Flags, SpecPiece};
use super::error::ParseError;

/// Parse a format spec into literal text and conversions.
///
/// # Example
///
/// ```
/// use dotloc::parser::{SpecPiece, parse_format_spec};
///
/// let pieces = parse_format_spec("%.2f%%").unwrap();
/// assert_eq!(pieces.len(), 2);
/// assert_eq!(pieces[1], SpecPiece::Literal("%".to_string()));
/// ```
pub fn parse_format_spec(spec: &str) -> Result<Vec<SpecPiece>, ParseError> {
    let mut remaining = spec;
    let pieces: Vec<SpecPiece> = repeat(0.., piece)
        .parse_next(&mut remaining)
        .map_err(|e| ParseError::InvalidSpec {
            spec: spec.to_string(),
            column: 1,
            message: e.to_string(),
        })?;
    if !remaining.is_empty() {
        return Err(ParseError::InvalidSpec {
            spec: spec.to_string(),
            column: spec.len() - remaining.len() + 1,
            message: format!("invalid conversion starting at '{remaining}'"),
        });
    }
    Ok(pieces)
}

fn piece(input: &mut &str) -> ModalResult<SpecPiece> {
    alt((
        "%%".value(SpecPiece::Literal("%".to_string())),
        "%n".value(SpecPiece::Literal("\n".to_string())),
        conversion.map(SpecPiece::Conversion),
        take_till(1.., '%').map(|s: &str| SpecPiece::Literal(s.to_string())),
    ))
    .parse_next(input)
}

fn conversion(input: &mut &str) -> ModalResult<Conversion> {
    let _ = '%'.parse_next(input)?;
    let flags = take_while(0.., ['-', '+', ' ', '0', ',', '#'])
        .map(parse_flags)
        .parse_next(input)?;
    let width = opt(digit1.parse_to::<usize>()).parse_next(input)?;
    let precision = opt(preceded('.', digit1.parse_to::<usize>())).parse_next(input)?;
    let kind = conversion_kind(input)?;
    Ok(Conversion {
        flags,
        width,
        precision,
        kind,
    })
}

fn conversion_kind(input: &mut &str) -> ModalResult<ConversionKind> {
    one_of(['d', 'i', 'x', 'X', 'o', 'f', 'F', 'e', 'E', 'g', 'G', 's', 'S', 'c'])
        .map(|c| match c {
            'd' | 'i' => ConversionKind::Decimal,
            'x' => ConversionKind::Hex { upper: false },
            'X' => ConversionKind::Hex { upper: true },
            'o' => ConversionKind::Octal,
            'f' | 'F' => ConversionKind::Fixed,
            'e' => ConversionKind::Exponent { upper: false },
            'E' => ConversionKind::Exponent { upper: true },
            'g' => ConversionKind::General { upper: false },
            'G' => ConversionKind::General { upper: true },
            'S' => ConversionKind::UpperStr,
            'c' => ConversionKind::Char,
            _ => ConversionKind::Str,
        })
        .parse_next(input)
}

fn parse_flags(text: &str) -> Flags {
    let mut flags = Flags::default();
    for c in text.chars() {
        match c {
            '-' => flags.left_align = true,
            '+' => flags.plus_sign = true,
            ' ' => flags.space_sign = true,
            '0' => flags.zero_pad = true,
            ',' => flags.grouping = true,
            _ => flags.alternate = true,
        }
    }
    flags
}
