use core::fmt::{Display, Formatter, Result as FmtResult};

/// A parsed dotted key such as `"menu.file.open"`.
///
/// Segments are split on `.` and must all be non-empty. There is no escaping
/// mechanism, so a literal dot can never appear inside a segment.
///
/// # Example
///
/// ```
/// use dotloc::KeyPath;
///
/// let path = KeyPath::parse("menu.file.open").unwrap();
/// assert_eq!(path.segments(), ["menu", "file", "open"]);
///
/// assert!(KeyPath::parse("menu..open").is_none());
/// assert!(KeyPath::parse("").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyPath {
    segments: Vec<String>,
}

impl KeyPath {
    /// Parse a dotted key. Returns `None` if any segment is empty.
    pub fn parse(key: &str) -> Option<Self> {
        let segments: Vec<String> = key.split('.').map(ToString::to_string).collect();
        if segments.iter().any(String::is_empty) {
            return None;
        }
        Some(Self { segments })
    }

    /// The individual path segments, root first.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl Display for KeyPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.segments.join("."))
    }
}
