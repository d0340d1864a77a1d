//! Static lint rules for locale trees.
//!
//! Inspects every leaf template without replacements, reporting references
//! that cannot resolve, reference cycles, and directives that would fail at
//! translation time whatever values are passed.

use std::collections::{BTreeMap, BTreeSet};

use crate::interpreter::error::{LintWarning, compute_suggestions};
use crate::interpreter::format::validate_spec;
use crate::interpreter::resolver::resolve_raw;
use crate::parser::{Directive, Segment, plural_forms, scan_placeholders, scan_references};
use crate::types::LocaleNode;

/// Runs all lint rules over `tree`, returning warnings in key order with
/// cycles last.
///
/// # Example
///
/// ```
/// use dotloc::{LintWarning, LocaleNode, lint_tree};
///
/// let tree = LocaleNode::from_json_str(r#"{
///     "title": "Welcome",
///     "banner": "$t(titel)!"
/// }"#).unwrap();
///
/// let warnings = lint_tree(&tree);
/// assert_eq!(warnings.len(), 1);
/// assert!(matches!(&warnings[0], LintWarning::DanglingReference { target, .. } if target == "titel"));
/// ```
pub fn lint_tree(tree: &LocaleNode) -> Vec<LintWarning> {
    let keys = tree.leaf_keys();
    let mut warnings = Vec::new();
    let mut graph: BTreeMap<&str, Vec<String>> = BTreeMap::new();

    for key in &keys {
        let Some(raw) = resolve_raw(tree, key) else {
            continue;
        };
        lint_placeholders(key, &raw, &mut warnings);
        let targets = lint_references(tree, key, &raw, &keys, &mut warnings);
        graph.insert(key, targets);
    }

    lint_cycles(&graph, &mut warnings);
    warnings
}

fn lint_placeholders(key: &str, raw: &str, warnings: &mut Vec<LintWarning>) {
    for segment in scan_placeholders(raw) {
        let Segment::Directive { directive, .. } = segment else {
            continue;
        };
        match directive {
            Directive::Plural { name, forms } => {
                let count = plural_forms(forms).len();
                if !(2..=4).contains(&count) {
                    warnings.push(LintWarning::UnsupportedPluralForms {
                        key: key.to_string(),
                        name: name.to_string(),
                        count,
                    });
                }
            }
            Directive::Format { name, spec } => {
                if let Err(e) = validate_spec(spec) {
                    warnings.push(LintWarning::InvalidFormatSpec {
                        key: key.to_string(),
                        name: name.to_string(),
                        spec: spec.to_string(),
                        message: e.to_string(),
                    });
                }
            }
            Directive::Plain { .. } | Directive::Reference { .. } => {}
        }
    }
}

/// Reports dangling references and returns the targets that do resolve.
fn lint_references(
    tree: &LocaleNode,
    key: &str,
    raw: &str,
    keys: &[String],
    warnings: &mut Vec<LintWarning>,
) -> Vec<String> {
    let mut targets = Vec::new();
    for segment in scan_references(raw) {
        let Segment::Directive {
            directive: Directive::Reference { key: target },
            ..
        } = segment
        else {
            continue;
        };
        if resolve_raw(tree, target).is_some() {
            targets.push(target.to_string());
        } else {
            warnings.push(LintWarning::DanglingReference {
                key: key.to_string(),
                target: target.to_string(),
                suggestions: compute_suggestions(target, keys),
            });
        }
    }
    targets
}

/// Reports each reference cycle once, starting from its smallest key.
fn lint_cycles(graph: &BTreeMap<&str, Vec<String>>, warnings: &mut Vec<LintWarning>) {
    let mut cycles: BTreeSet<Vec<String>> = BTreeSet::new();
    for &start in graph.keys() {
        let mut visited = BTreeSet::new();
        let mut path = vec![start];
        find_cycles(graph, start, &mut path, &mut visited, &mut cycles);
    }
    warnings.extend(
        cycles
            .into_iter()
            .map(|chain| LintWarning::CyclicReference { chain }),
    );
}

/// Depth-first search for paths returning to `start` through keys greater
/// than `start`, so every cycle is found from its smallest key only.
fn find_cycles<'a>(
    graph: &'a BTreeMap<&str, Vec<String>>,
    start: &'a str,
    path: &mut Vec<&'a str>,
    visited: &mut BTreeSet<&'a str>,
    cycles: &mut BTreeSet<Vec<String>>,
) {
    let Some(&current) = path.last() else {
        return;
    };
    let Some(targets) = graph.get(current) else {
        return;
    };
    for target in targets {
        let target = target.as_str();
        if target == start {
            let mut chain: Vec<String> = path.iter().map(ToString::to_string).collect();
            chain.push(start.to_string());
            cycles.insert(chain);
        } else if target > start && visited.insert(target) {
            path.push(target);
            find_cycles(graph, start, path, visited, cycles);
            path.pop();
        }
    }
}
