//! Scanned template pieces and format-spec structures.

/// A piece of a scanned template. All text borrows from the scanned input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Text copied through unchanged.
    Literal(&'a str),

    /// A recognized directive together with its exact source text, so an
    /// unreplaced directive can be written back verbatim.
    Directive { raw: &'a str, directive: Directive<'a> },
}

/// A directive recognized inside a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive<'a> {
    /// `{{name}}`
    Plain { name: &'a str },

    /// `{{name.format(spec)}}`
    Format { name: &'a str, spec: &'a str },

    /// `{{name.plural(forms)}}`, with `forms` still comma-joined.
    Plural { name: &'a str, forms: &'a str },

    /// `$t(key)`
    Reference { key: &'a str },
}

/// Split a plural form list on commas, trimming each form.
///
/// A form written as `_` stands for the empty string.
pub fn plural_forms(forms: &str) -> Vec<String> {
    forms
        .split(',')
        .map(str::trim)
        .map(|form| if form == "_" { String::new() } else { form.to_string() })
        .collect()
}

/// One parsed piece of a printf-style format spec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpecPiece {
    /// Literal output text (`%%` and `%n` are already unescaped).
    Literal(String),

    /// A `%...` conversion consuming the value.
    Conversion(Conversion),
}

/// A single `%[flags][width][.precision]kind` conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Conversion {
    pub flags: Flags,
    pub width: Option<usize>,
    pub precision: Option<usize>,
    pub kind: ConversionKind,
}

/// Conversion flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Flags {
    /// `-`
    pub left_align: bool,
    /// `+`
    pub plus_sign: bool,
    /// ` `
    pub space_sign: bool,
    /// `0`
    pub zero_pad: bool,
    /// `,`
    pub grouping: bool,
    /// `#`
    pub alternate: bool,
}

/// The conversion character of a spec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConversionKind {
    /// `d` / `i`
    Decimal,
    /// `x`, or `X` when `upper`
    Hex { upper: bool },
    /// `o`
    Octal,
    /// `f` / `F`
    Fixed,
    /// `e`, or `E` when `upper`
    Exponent { upper: bool },
    /// `g`, or `G` when `upper`
    General { upper: bool },
    /// `s`
    #[default]
    Str,
    /// `S`
    UpperStr,
    /// `c`
    Char,
}
