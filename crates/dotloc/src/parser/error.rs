//! Parse error types.

use thiserror::Error;

/// An error that occurred while parsing a format spec.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The spec contains a `%` that does not start a valid conversion.
    #[error("invalid format spec '{spec}' at column {column}: {message}")]
    InvalidSpec {
        spec: String,
        column: usize,
        message: String,
    },
}
