//! Error types for the dotloc interpreter.

use core::fmt::{Display, Formatter, Result as FmtResult};

use strsim::levenshtein;
use thiserror::Error;

/// Errors that occur while building a locale tree from source text.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The JSON text could not be decoded into a locale tree.
    #[error("invalid locale JSON: {source}")]
    Json {
        #[source]
        source: serde_json::Error,
    },
}

/// An error surfaced by [`Locale::translate`](crate::Locale::translate).
///
/// Missing keys, cyclic references and plural directives without a matching
/// replacement are not errors; they resolve to an empty or unchanged string.
/// The variants here are authoring mistakes in locale data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// A `{{name.format(spec)}}` spec is malformed or does not fit the value.
    #[error("invalid format spec '{spec}' for '{name}': {message}")]
    FormatSpec {
        name: String,
        spec: String,
        message: String,
    },

    /// A `{{name.plural(...)}}` directive lists a number of forms with no
    /// selection rule.
    #[error("plural directive for '{name}' has {count} forms, expected 2, 3 or 4")]
    UnsupportedFormCount { name: String, count: usize },

    /// The replacement used as a plural count is not numeric.
    #[error("plural count '{name}' is not numeric: '{value}'")]
    NonNumericCount { name: String, value: String },
}

/// A problem found by static inspection of a locale tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LintWarning {
    /// `$t(target)` names a key that does not resolve.
    DanglingReference {
        key: String,
        target: String,
        suggestions: Vec<String>,
    },

    /// A chain of references returns to a key already on the chain.
    CyclicReference { chain: Vec<String> },

    /// A plural directive lists an unsupported number of forms.
    UnsupportedPluralForms {
        key: String,
        name: String,
        count: usize,
    },

    /// A format spec does not parse.
    InvalidFormatSpec {
        key: String,
        name: String,
        spec: String,
        message: String,
    },
}

impl LintWarning {
    /// The key the warning was found in.
    pub fn key(&self) -> &str {
        match self {
            LintWarning::DanglingReference { key, .. }
            | LintWarning::UnsupportedPluralForms { key, .. }
            | LintWarning::InvalidFormatSpec { key, .. } => key,
            LintWarning::CyclicReference { chain } => chain.first().map_or("", String::as_str),
        }
    }
}

impl Display for LintWarning {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            LintWarning::DanglingReference {
                key,
                target,
                suggestions,
            } => {
                write!(f, "{key}: reference $t({target}) does not resolve")?;
                if !suggestions.is_empty() {
                    write!(f, "; did you mean: {}?", suggestions.join(", "))?;
                }
                Ok(())
            }
            LintWarning::CyclicReference { chain } => {
                write!(f, "cyclic reference: {}", chain.join(" -> "))
            }
            LintWarning::UnsupportedPluralForms { key, name, count } => write!(
                f,
                "{key}: plural directive for '{name}' has {count} forms, expected 2, 3 or 4"
            ),
            LintWarning::InvalidFormatSpec {
                key,
                name,
                spec,
                message,
            } => write!(f, "{key}: format spec '{spec}' for '{name}': {message}"),
        }
    }
}

/// Compute typo suggestions using Levenshtein distance.
///
/// - distance <= 1 for names <= 3 chars
/// - distance <= 2 for longer names
/// - at most 3 suggestions, closest first
pub fn compute_suggestions(name: &str, available: &[String]) -> Vec<String> {
    let max_distance = if name.len() <= 3 { 1 } else { 2 };
    let mut suggestions: Vec<(usize, String)> = available
        .iter()
        .filter_map(|candidate| {
            let dist = levenshtein(name, candidate);
            if dist <= max_distance && dist > 0 {
                Some((dist, candidate.clone()))
            } else {
                None
            }
        })
        .collect();

    suggestions.sort_by_key(|(dist, _)| *dist);
    suggestions.into_iter().take(3).map(|(_, s)| s).collect()
}
