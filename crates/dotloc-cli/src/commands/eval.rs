//! Implementation of the `dotloc eval` command.

use std::collections::HashMap;
use std::path::PathBuf;

use dotloc::interpreter::DEFAULT_MAX_DEPTH;
use dotloc::{Locale, Value};
use miette::IntoDiagnostic;
use serde::Serialize;

use crate::output::diagnostic::load_locale_file;

/// Arguments for the eval command.
#[derive(Debug, clap::Args)]
pub struct EvalArgs {
    /// Locale file (.json)
    #[arg(long, required = true)]
    pub file: PathBuf,

    /// Dotted key to translate
    #[arg(long, required = true)]
    pub key: String,

    /// Replacements in name=value format (repeatable). Values are read as
    /// an integer, then a float, and otherwise kept as text.
    #[arg(short = 'p', long = "param", value_parser = parse_key_val)]
    pub params: Vec<(String, String)>,

    /// Maximum number of keys on one `$t(...)` chain, counting `--key`
    /// itself. References nested deeper, and cyclic references, expand to
    /// an empty string.
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    pub max_depth: usize,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for eval results.
#[derive(Serialize)]
pub struct EvalResult {
    pub key: String,
    pub result: String,
}

/// Parse a key=value parameter string.
fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| format!("invalid parameter format '{}': expected name=value", s))?;
    Ok((name.to_string(), value.to_string()))
}

/// Pick the narrowest value type the text parses as.
fn parse_value(text: String) -> Value {
    if let Ok(n) = text.parse::<i32>() {
        Value::from(n)
    } else if let Ok(n) = text.parse::<i64>() {
        Value::from(n)
    } else if let Ok(x) = text.parse::<f64>() {
        Value::from(x)
    } else {
        Value::from(text)
    }
}

/// Run the eval command.
pub fn run_eval(args: EvalArgs) -> miette::Result<i32> {
    let tree = load_locale_file(&args.file)?;
    let locale = Locale::builder().max_depth(args.max_depth).build();
    locale.set(tree);

    let params: HashMap<String, Value> = args
        .params
        .into_iter()
        .map(|(k, v)| (k, parse_value(v)))
        .collect();

    match locale.translate(&args.key, &params) {
        Ok(result) => {
            if args.json {
                let output = EvalResult {
                    key: args.key,
                    result,
                };
                println!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
            } else {
                println!("{}", result);
            }
            Ok(exitcode::OK)
        }
        Err(e) => {
            if args.json {
                let output = serde_json::json!({
                    "key": args.key,
                    "error": e.to_string()
                });
                eprintln!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
            } else {
                eprintln!("Evaluation error: {}", e);
            }
            Ok(exitcode::DATAERR)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parameter_values_pick_narrowest_type() {
        assert_eq!(parse_value("42".to_string()), Value::Int(42));
        assert_eq!(parse_value("5000000000".to_string()), Value::Long(5_000_000_000));
        assert_eq!(parse_value("2.5".to_string()), Value::Float(2.5));
        assert_eq!(parse_value("Ann".to_string()), Value::from("Ann"));
    }

    #[test]
    fn key_val_splits_at_first_equals() {
        assert_eq!(
            parse_key_val("expr=a=b").unwrap(),
            ("expr".to_string(), "a=b".to_string())
        );
        assert!(parse_key_val("novalue").is_err());
    }
}
