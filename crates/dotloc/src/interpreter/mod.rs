//! dotloc interpreter for resolving and evaluating translations.
//!
//! This module provides the lookup engine: key path resolution, the three
//! substitution passes, plural selection, value formatting, the locale store,
//! and static lints over locale trees.

mod context;
mod error;
mod evaluator;
mod format;
mod lint;
mod locale;
mod plural;
mod resolver;
mod store;

pub use context::{DEFAULT_MAX_DEPTH, EvalContext, ExpansionBlocked};
pub use error::{EvalError, LintWarning, LoadError, compute_suggestions};
pub use evaluator::{eval_key, eval_template, expand_references, interpolate, pluralize};
pub use format::{FormatError, MAX_FIELD_WIDTH, render, validate_spec};
pub use lint::lint_tree;
pub use locale::Locale;
pub use plural::{plural_index, select_form};
pub use resolver::{ARRAY_SEPARATOR, resolve_raw};
pub use store::LocalizationStore;
