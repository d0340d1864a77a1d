//! Implementation of the `dotloc check` command.

use std::path::{Path, PathBuf};

use dotloc::{lint_tree, LintWarning};
use miette::IntoDiagnostic;
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;

use crate::output::diagnostic::load_locale_file;

/// Arguments for the check command.
#[derive(Debug, clap::Args)]
pub struct CheckArgs {
    /// Files to check (.json)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for one checked file.
#[derive(Debug, Serialize)]
struct FileReport {
    file: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    warnings: Vec<WarningJson>,
}

#[derive(Debug, Serialize)]
struct WarningJson {
    key: String,
    kind: &'static str,
    message: String,
}

impl From<&LintWarning> for WarningJson {
    fn from(warning: &LintWarning) -> Self {
        WarningJson {
            key: warning.key().to_string(),
            kind: warning_kind(warning),
            message: warning.to_string(),
        }
    }
}

fn warning_kind(warning: &LintWarning) -> &'static str {
    match warning {
        LintWarning::DanglingReference { .. } => "dangling-reference",
        LintWarning::CyclicReference { .. } => "cyclic-reference",
        LintWarning::UnsupportedPluralForms { .. } => "unsupported-plural-forms",
        LintWarning::InvalidFormatSpec { .. } => "invalid-format-spec",
    }
}

/// Run the check command.
///
/// Every file is checked even after a failure. Unreadable or malformed files
/// and files with warnings both make the command exit with `DATAERR`.
pub fn run_check(args: CheckArgs) -> miette::Result<i32> {
    let mut reports = Vec::with_capacity(args.files.len());
    for path in &args.files {
        reports.push(check_file(path, args.json));
    }

    let failed = reports
        .iter()
        .any(|report| report.error.is_some() || !report.warnings.is_empty());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&reports).into_diagnostic()?);
    } else {
        let warning_count: usize = reports.iter().map(|r| r.warnings.len()).sum();
        let status = format!(
            "{} file(s) checked, {} warning(s)",
            reports.len(),
            warning_count
        );
        if failed {
            println!("{}", status.if_supports_color(Stream::Stdout, |t| t.red()));
        } else {
            println!("{}", status.if_supports_color(Stream::Stdout, |t| t.green()));
        }
    }

    Ok(if failed { exitcode::DATAERR } else { exitcode::OK })
}

fn check_file(path: &Path, quiet: bool) -> FileReport {
    let file = path.display().to_string();
    let tree = match load_locale_file(path) {
        Ok(tree) => tree,
        Err(report) => {
            if !quiet {
                eprintln!("{:?}", report);
            }
            return FileReport {
                file,
                error: Some(report.to_string()),
                warnings: Vec::new(),
            };
        }
    };

    let warnings = lint_tree(&tree);
    if !quiet {
        for warning in &warnings {
            println!(
                "{}: {} {}",
                file.if_supports_color(Stream::Stdout, |t| t.bold()),
                "warning:".if_supports_color(Stream::Stdout, |t| t.yellow()),
                warning
            );
        }
    }

    FileReport {
        file,
        error: None,
        warnings: warnings.iter().map(WarningJson::from).collect(),
    }
}
