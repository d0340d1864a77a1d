//! User-facing translation API.
//!
//! [`Locale`] owns a [`LocalizationStore`] and runs lookups against snapshots
//! of it. It replaces a process-wide singleton with an explicit value that
//! callers create, share and inject; see the `global-locale` feature for the
//! singleton form.

use std::collections::HashMap;
use std::sync::Arc;

use bon::Builder;

use crate::interpreter::context::DEFAULT_MAX_DEPTH;
use crate::interpreter::evaluator::eval_key;
use crate::interpreter::store::LocalizationStore;
use crate::interpreter::{EvalContext, EvalError};
use crate::types::{LocaleNode, Value};

/// Translation lookup over a replaceable locale tree.
///
/// `Locale` is `Sync`: any number of threads may call [`translate`] while
/// another installs a new tree with [`set`].
///
/// # Example
///
/// ```
/// use dotloc::{Locale, LocaleNode, params};
///
/// let locale = Locale::new();
/// locale.set(LocaleNode::from_json_str(r#"{
///     "inbox": "{{count}} message{{count.plural(_, s)}}"
/// }"#).unwrap());
///
/// assert_eq!(locale.translate("inbox", &params! { "count" => 1 }).unwrap(), "1 message");
/// assert_eq!(locale.translate("inbox", &params! { "count" => 4 }).unwrap(), "4 messages");
/// assert_eq!(locale.translate("missing", &params! {}).unwrap(), "");
/// ```
///
/// [`translate`]: Locale::translate
/// [`set`]: Locale::set
#[derive(Debug, Builder)]
pub struct Locale {
    /// Maximum number of keys on one `$t(...)` expansion chain, including the
    /// key passed to `translate`. Deeper references resolve to "".
    #[builder(default = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    #[builder(skip)]
    store: LocalizationStore,
}

impl Default for Locale {
    fn default() -> Self {
        Locale::builder().build()
    }
}

impl Locale {
    /// Create an empty locale with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty locale whose store already holds `tree`.
    pub fn with_tree(tree: LocaleNode) -> Self {
        let locale = Self::new();
        locale.set(tree);
        locale
    }

    /// The reference expansion depth ceiling.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Install a new locale tree, replacing the previous one.
    pub fn set(&self, tree: LocaleNode) {
        self.store.set(tree);
    }

    /// Snapshot of the active tree, or `None` before the first `set`.
    pub fn current(&self) -> Option<Arc<LocaleNode>> {
        self.store.current()
    }

    /// Remove the active tree. Lookups return "" until the next `set`.
    pub fn clear(&self) {
        self.store.clear();
    }

    /// Translate `key` with `params`.
    ///
    /// Missing keys, keys resolving to objects, and cyclic or too-deep
    /// references all yield the empty string rather than an error.
    ///
    /// # Errors
    ///
    /// Returns an error when the locale data is malformed for the given
    /// replacements: an invalid format spec, a plural directive with an
    /// unsupported number of forms, or a non-numeric plural count.
    pub fn translate(&self, key: &str, params: &HashMap<String, Value>) -> Result<String, EvalError> {
        let Some(tree) = self.store.current() else {
            return Ok(String::new());
        };
        let mut ctx = EvalContext::with_max_depth(params, self.max_depth);
        eval_key(&tree, key, &mut ctx)
    }
}
