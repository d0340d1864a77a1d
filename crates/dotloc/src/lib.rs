pub mod interpreter;
pub mod parser;
pub mod types;

#[cfg(feature = "global-locale")]
mod global;

#[cfg(feature = "global-locale")]
pub use global::{set, translate, with_locale};
pub use interpreter::{
    EvalContext, EvalError, LintWarning, LoadError, Locale, LocalizationStore, compute_suggestions,
    lint_tree,
};
pub use types::{KeyPath, LocaleNode, Value};

/// Creates a `HashMap<String, Value>` of replacements from key-value pairs.
///
/// Values are converted via `Into<Value>`, so integers, floats and strings can
/// be passed directly.
///
/// # Example
///
/// ```
/// use dotloc::{params, Value};
///
/// let p = params! { "count" => 3, "name" => "Alice" };
/// assert_eq!(p.len(), 2);
/// assert_eq!(p["count"], Value::Int(3));
/// assert_eq!(p["name"].as_str(), Some("Alice"));
/// ```
#[macro_export]
macro_rules! params {
    {} => {
        ::std::collections::HashMap::<String, $crate::Value>::new()
    };
    { $($key:expr => $value:expr),+ $(,)? } => {
        {
            let mut map = ::std::collections::HashMap::<String, $crate::Value>::new();
            $(
                map.insert($key.to_string(), ::std::convert::Into::<$crate::Value>::into($value));
            )+
            map
        }
    };
}
