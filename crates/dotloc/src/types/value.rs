use core::fmt::{Display, Formatter, Result as FmtResult};

/// A replacement value substituted into `{{name}}` placeholders.
///
/// Exactly one variant is carried at a time. Plural directives coerce the
/// value to a number with [`Value::as_f64`].
///
/// # Example
///
/// ```
/// use dotloc::Value;
///
/// let count: Value = 3.into();
/// assert_eq!(count, Value::Int(3));
///
/// let big: Value = 5_000_000_000_i64.into();
/// assert_eq!(big.to_string(), "5000000000");
///
/// let name: Value = "Alice".into();
/// assert_eq!(name.as_str(), Some("Alice"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A 32-bit integer.
    Int(i32),

    /// A 64-bit integer.
    Long(i64),

    /// A double-precision float.
    Float(f64),

    /// A string value.
    String(String),
}

impl Value {
    /// Numeric view of this value, used for plural selection.
    ///
    /// Strings are parsed as `f64`; returns `None` when they do not parse.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(n) => Some(f64::from(*n)),
            Value::Long(n) => Some(*n as f64),
            Value::Float(f) => Some(*f),
            Value::String(s) => s.trim().parse().ok(),
        }
    }

    /// Integer view of this value. Floats and strings are not integers.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(i64::from(*n)),
            Value::Long(n) => Some(*n),
            Value::Float(_) | Value::String(_) => None,
        }
    }

    /// Get this value as a string, if it is one.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            Value::Int(_) | Value::Long(_) | Value::Float(_) => None,
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Long(n) => write!(f, "{n}"),
            Value::Float(n) => write!(f, "{n}"),
            Value::String(s) => write!(f, "{s}"),
        }
    }
}

// From implementations for common types

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Long(n)
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Long(i64::from(n))
    }
}

impl From<usize> for Value {
    /// Values above `i64::MAX` become the nearest `Float`.
    fn from(n: usize) -> Self {
        i64::try_from(n).map_or(Value::Float(n as f64), Value::Long)
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Float(f64::from(n))
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}
