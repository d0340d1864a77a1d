//! Key path resolution over a locale tree.

use tracing::debug;

use crate::types::{KeyPath, LocaleNode};

/// Separator placed between array elements when an array leaf is resolved.
pub const ARRAY_SEPARATOR: &str = ", ";

/// Resolve a dotted key to its raw, unexpanded template text.
///
/// - A scalar leaf yields its text.
/// - An array leaf yields its elements joined with `", "`; only the joined
///   result is trimmed.
/// - A missing segment, a segment indexing an array or scalar, or a path
///   ending on an object yields `None`.
///
/// # Example
///
/// ```
/// use dotloc::LocaleNode;
/// use dotloc::interpreter::resolve_raw;
///
/// let tree = LocaleNode::from_json_str(r#"{"days": [" Mon", "Tue "]}"#).unwrap();
/// assert_eq!(resolve_raw(&tree, "days").as_deref(), Some("Mon, Tue"));
/// assert_eq!(resolve_raw(&tree, "days.0"), None);
/// ```
pub fn resolve_raw(tree: &LocaleNode, key: &str) -> Option<String> {
    let Some(path) = KeyPath::parse(key) else {
        debug!(key, "malformed key path");
        return None;
    };
    let Some(node) = tree.get_path(&path) else {
        debug!(key, "key not found");
        return None;
    };
    match node {
        LocaleNode::Scalar(text) => Some(text.clone()),
        LocaleNode::Array(items) => {
            let joined = items
                .iter()
                .map(LocaleNode::element_text)
                .collect::<Vec<_>>()
                .join(ARRAY_SEPARATOR);
            Some(joined.trim().to_string())
        }
        LocaleNode::Object(_) => {
            debug!(key, "key resolves to an object, not a leaf");
            None
        }
    }
}
