//! Holder of the active locale tree.

use std::sync::{Arc, PoisonError, RwLock};

use tracing::trace;

use crate::types::LocaleNode;

/// Thread-safe holder of the active locale tree.
///
/// The tree sits behind an `Arc` that is swapped wholesale by [`set`]. Readers
/// clone the handle under a short read lock and then work on that snapshot
/// without holding any lock, so a lookup sees either the old tree or the new
/// one, never a mix.
///
/// The store starts empty; [`current`] returns `None` until the first `set`.
///
/// [`set`]: LocalizationStore::set
/// [`current`]: LocalizationStore::current
#[derive(Debug, Default)]
pub struct LocalizationStore {
    tree: RwLock<Option<Arc<LocaleNode>>>,
}

impl LocalizationStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Install `tree`, replacing any previous tree.
    ///
    /// Lookups already holding a snapshot of the previous tree finish against
    /// it; the previous tree is dropped when the last snapshot is.
    pub fn set(&self, tree: LocaleNode) {
        let tree = Arc::new(tree);
        let mut guard = self.tree.write().unwrap_or_else(PoisonError::into_inner);
        *guard = Some(tree);
        trace!("locale tree installed");
    }

    /// Snapshot of the active tree, or `None` before the first `set`.
    pub fn current(&self) -> Option<Arc<LocaleNode>> {
        self.tree
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Remove the active tree, returning the store to its empty state.
    pub fn clear(&self) {
        let mut guard = self.tree.write().unwrap_or_else(PoisonError::into_inner);
        *guard = None;
    }
}
