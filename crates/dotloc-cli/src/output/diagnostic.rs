//! Miette diagnostic wrapper for locale load errors.
//!
//! Note: This module has an exception for `unused_assignments` because miette
//! derive macros read struct fields in generated code that rustc cannot track.
#![allow(unused_assignments)]

use std::fs::read_to_string;
use std::path::Path;

use dotloc::{LoadError, LocaleNode};
use miette::{miette, Diagnostic, IntoDiagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// A miette-compatible diagnostic for malformed locale JSON.
///
/// Note: Fields are read by miette derive macros, not directly by code.
#[derive(Debug, Error, Diagnostic)]
#[error("invalid locale file: {message}")]
#[diagnostic(code(dotloc::json))]
pub struct LoadDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("error here")]
    span: SourceSpan,

    message: String,

    #[help]
    help: Option<String>,
}

impl LoadDiagnostic {
    /// Create a diagnostic from a LoadError with source context.
    pub fn from_load_error(path: &Path, content: &str, err: &LoadError) -> Self {
        let LoadError::Json { source } = err;
        let (line, column) = (source.line(), source.column());

        // serde_json reports 1-based positions.
        let offset = content
            .lines()
            .take(line.saturating_sub(1))
            .map(|l| l.len() + 1)
            .sum::<usize>()
            + column.saturating_sub(1);

        // Clamp offset to content length to avoid miette panic on out-of-bounds
        let offset = offset.min(content.len());

        LoadDiagnostic {
            src: NamedSource::new(path.display().to_string(), content.to_string()),
            span: (offset, 1).into(),
            message: source.to_string(),
            help: source
                .is_eof()
                .then(|| "the file ends before the JSON value is complete".to_string()),
        }
    }
}

/// Read and decode a locale file, reporting failures as diagnostics.
pub fn load_locale_file(path: &Path) -> miette::Result<LocaleNode> {
    let content = read_to_string(path)
        .into_diagnostic()
        .map_err(|e| miette!("Failed to read locale file {}: {}", path.display(), e))?;
    LocaleNode::from_json_str(&content)
        .map_err(|e| LoadDiagnostic::from_load_error(path, &content, &e).into())
}
