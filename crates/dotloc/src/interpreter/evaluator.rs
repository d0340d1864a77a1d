//! Template evaluation engine.
//!
//! A resolved template goes through three ordered passes, each reading the
//! previous pass's output:
//! 1. interpolation of `{{name}}` and `{{name.format(spec)}}`
//! 2. pluralization of `{{name.plural(forms)}}`
//! 3. expansion of `$t(key)` references through the whole pipeline again

use tracing::debug;

use crate::interpreter::format::render;
use crate::interpreter::plural::select_form;
use crate::interpreter::resolver::resolve_raw;
use crate::interpreter::{EvalContext, EvalError};
use crate::parser::{Directive, Segment, plural_forms, scan_placeholders, scan_references};
use crate::types::{LocaleNode, Value};

/// Resolve `key` in `tree` and evaluate its template.
///
/// The key is pushed onto the context's expansion stack for the duration of
/// its evaluation. A missing key, a key already on the stack, or a stack at
/// its depth ceiling all produce the empty string.
///
/// # Errors
///
/// Returns an error if any template on the expansion chain has:
/// - A format spec that is malformed or does not fit its value
/// - A plural directive with an unsupported number of forms
/// - A plural count replacement that is not numeric
pub fn eval_key(
    tree: &LocaleNode,
    key: &str,
    ctx: &mut EvalContext<'_>,
) -> Result<String, EvalError> {
    if let Err(blocked) = ctx.push_call(key) {
        debug!(key, %blocked, "reference expansion blocked");
        return Ok(String::new());
    }
    let result = match resolve_raw(tree, key) {
        Some(raw) => eval_template(&raw, tree, ctx),
        None => Ok(String::new()),
    };
    ctx.pop_call();
    result
}

/// Run all three passes over `raw`.
pub fn eval_template(
    raw: &str,
    tree: &LocaleNode,
    ctx: &mut EvalContext<'_>,
) -> Result<String, EvalError> {
    let interpolated = interpolate(raw, ctx)?;
    let pluralized = pluralize(&interpolated, ctx)?;
    expand_references(&pluralized, tree, ctx)
}

/// Pass 1: substitute plain and formatted placeholders.
///
/// When the template contains `{{name.format(` anywhere, plain `{{name}}`
/// occurrences of that same name are left untouched. Names without a
/// replacement are always left untouched.
pub fn interpolate(template: &str, ctx: &EvalContext<'_>) -> Result<String, EvalError> {
    let mut output = String::with_capacity(template.len());
    for segment in scan_placeholders(template) {
        let (source, directive) = match segment {
            Segment::Literal(text) => {
                output.push_str(text);
                continue;
            }
            Segment::Directive { raw, directive } => (raw, directive),
        };
        let replaced = match directive {
            Directive::Format { name, spec } => ctx
                .get_param(name)
                .map(|value| render_param(name, value, Some(spec)))
                .transpose()?,
            Directive::Plain { name } if !has_format_directive(template, name) => ctx
                .get_param(name)
                .map(|value| render_param(name, value, None))
                .transpose()?,
            Directive::Plain { .. } | Directive::Plural { .. } | Directive::Reference { .. } => {
                None
            }
        };
        output.push_str(replaced.as_deref().unwrap_or(source));
    }
    Ok(output)
}

/// Pass 2: replace plural directives whose count has a replacement.
pub fn pluralize(text: &str, ctx: &EvalContext<'_>) -> Result<String, EvalError> {
    let mut output = String::with_capacity(text.len());
    for segment in scan_placeholders(text) {
        match segment {
            Segment::Literal(literal) => output.push_str(literal),
            Segment::Directive {
                directive: Directive::Plural { name, forms },
                raw,
            } => {
                let Some(value) = ctx.get_param(name) else {
                    debug!(name, "plural directive has no matching replacement");
                    output.push_str(raw);
                    continue;
                };
                let count = value.as_f64().ok_or_else(|| EvalError::NonNumericCount {
                    name: name.to_string(),
                    value: value.to_string(),
                })?;
                let forms = plural_forms(forms);
                output.push_str(select_form(name, count, &forms)?);
            }
            Segment::Directive { raw, .. } => output.push_str(raw),
        }
    }
    Ok(output)
}

/// Pass 3: expand `$t(key)` references with the same replacements.
pub fn expand_references(
    text: &str,
    tree: &LocaleNode,
    ctx: &mut EvalContext<'_>,
) -> Result<String, EvalError> {
    let mut output = String::with_capacity(text.len());
    for segment in scan_references(text) {
        match segment {
            Segment::Literal(literal) => output.push_str(literal),
            Segment::Directive {
                directive: Directive::Reference { key },
                ..
            } => output.push_str(&eval_key(tree, key, ctx)?),
            Segment::Directive { raw, .. } => output.push_str(raw),
        }
    }
    Ok(output)
}

fn has_format_directive(template: &str, name: &str) -> bool {
    template.contains(&format!("{{{{{name}.format("))
}

fn render_param(name: &str, value: &Value, spec: Option<&str>) -> Result<String, EvalError> {
    render(value, spec).map_err(|e| EvalError::FormatSpec {
        name: name.to_string(),
        spec: spec.unwrap_or_default().to_string(),
        message: e.to_string(),
    })
}
