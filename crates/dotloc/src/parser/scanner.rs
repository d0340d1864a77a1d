//! Directive scanner using winnow.
//!
//! Splits a template into literal runs and directives. Two scans exist, one per
//! delimiter family:
//! - `{{name}}`, `{{name.format(SPEC)}}`, `{{name.plural(FORMS)}}`
//! - `$t(key)`
//!
//! Scanning is a single forward pass. Text that looks like the start of a
//! directive but does not complete one stays literal. A directive body never
//! spans a nested opening delimiter, so a failed directive is abandoned at
//! the next `{`, `}` or `(` and each input byte is examined a bounded number
//! of times.

use winnow::combinator::{alt, delimited, repeat};
use winnow::error::{ContextError, ErrMode};
use winnow::prelude::*;
use winnow::token::{any, take_till};

use super::ast::{Directive, Segment};

const FORMAT_MARKER: &str = ".format(";
const PLURAL_MARKER: &str = ".plural(";

/// Scan `{{...}}` placeholders.
///
/// Concatenating the `raw`/literal text of every segment reproduces `input`.
///
/// # Example
///
/// ```
/// use dotloc::parser::{Directive, Segment, scan_placeholders};
///
/// let segments = scan_placeholders("Hi {{name}}!");
/// assert_eq!(segments.len(), 3);
/// assert!(matches!(
///     segments[1],
///     Segment::Directive { directive: Directive::Plain { name: "name" }, .. }
/// ));
/// ```
pub fn scan_placeholders(input: &str) -> Vec<Segment<'_>> {
    let mut remaining = input;
    repeat(0.., alt((placeholder, text_until_brace, single_char_literal)))
        .parse_next(&mut remaining)
        .unwrap_or_else(|_: ErrMode<ContextError>| vec![Segment::Literal(input)])
}

/// Scan `$t(key)` references.
pub fn scan_references(input: &str) -> Vec<Segment<'_>> {
    let mut remaining = input;
    repeat(0.., alt((reference, text_until_dollar, single_char_literal)))
        .parse_next(&mut remaining)
        .unwrap_or_else(|_: ErrMode<ContextError>| vec![Segment::Literal(input)])
}

/// Parse `{{inner}}` where `inner` classifies as a directive.
fn placeholder<'a>(input: &mut &'a str) -> ModalResult<Segment<'a>> {
    delimited("{{", take_till(0.., ['{', '}']), "}}")
        .verify_map(classify)
        .with_taken()
        .map(|(directive, raw)| Segment::Directive { raw, directive })
        .parse_next(input)
}

/// Parse `$t(key)` with a non-empty key containing no parentheses.
fn reference<'a>(input: &mut &'a str) -> ModalResult<Segment<'a>> {
    delimited("$t(", take_till(1.., ['(', ')']), ')')
        .with_taken()
        .map(|(key, raw)| Segment::Directive {
            raw,
            directive: Directive::Reference { key },
        })
        .parse_next(input)
}

fn text_until_brace<'a>(input: &mut &'a str) -> ModalResult<Segment<'a>> {
    take_till(1.., '{').map(Segment::Literal).parse_next(input)
}

fn text_until_dollar<'a>(input: &mut &'a str) -> ModalResult<Segment<'a>> {
    take_till(1.., '$').map(Segment::Literal).parse_next(input)
}

/// A lone delimiter character that did not start a directive.
fn single_char_literal<'a>(input: &mut &'a str) -> ModalResult<Segment<'a>> {
    any.take().map(Segment::Literal).parse_next(input)
}

/// Classify the text between `{{` and `}}`.
fn classify(inner: &str) -> Option<Directive<'_>> {
    if inner.is_empty() || inner.contains(['{', '}']) {
        return None;
    }
    if let Some(index) = inner.find(FORMAT_MARKER) {
        let (name, spec) = split_call(inner, index, FORMAT_MARKER)?;
        return Some(Directive::Format { name, spec });
    }
    if let Some(index) = inner.find(PLURAL_MARKER) {
        let (name, forms) = split_call(inner, index, PLURAL_MARKER)?;
        return Some(Directive::Plural { name, forms });
    }
    Some(Directive::Plain { name: inner })
}

/// Split `name.marker(args)` into `name` and `args`. The argument list ends at
/// the first `)`, which must close the placeholder.
fn split_call<'a>(inner: &'a str, index: usize, marker: &str) -> Option<(&'a str, &'a str)> {
    let name = &inner[..index];
    let args = inner[index + marker.len()..].strip_suffix(')')?;
    if name.is_empty() || args.contains(')') {
        return None;
    }
    Some((name, args))
}
