//! Global locale storage for the `global-locale` feature.
//!
//! Provides a lazily created, process-wide `Locale`, removing the need to pass
//! `&Locale` to every call site. Prefer an explicit `Locale` where it can be
//! injected.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::{EvalError, Locale, LocaleNode, Value};

static GLOBAL_LOCALE: LazyLock<Locale> = LazyLock::new(Locale::new);

/// Provides access to the global locale.
pub fn with_locale<T>(f: impl FnOnce(&Locale) -> T) -> T {
    f(&GLOBAL_LOCALE)
}

/// Installs a tree into the global locale.
pub fn set(tree: LocaleNode) {
    GLOBAL_LOCALE.set(tree);
}

/// Translates `key` against the global locale.
pub fn translate(key: &str, params: &HashMap<String, Value>) -> Result<String, EvalError> {
    GLOBAL_LOCALE.translate(key, params)
}
