//! Template scanning and format-spec parsing.
//!
//! The scanner recognizes `{{...}}` placeholders and `$t(...)` references
//! without interpreting them; the interpreter decides what each directive
//! expands to.

pub mod ast;
pub mod error;
mod format_spec;
mod scanner;

pub use ast::*;
pub use error::ParseError;
pub use format_spec::parse_format_spec;
pub use scanner::{scan_placeholders, scan_references};
