//! Evaluation context for tracking state during recursive reference expansion.

use std::collections::HashMap;

use thiserror::Error;

use crate::types::Value;

/// Default ceiling on nested `$t(...)` expansion, counting the requested key.
pub const DEFAULT_MAX_DEPTH: usize = 8;

/// Why a key could not be entered. Both cases are soft misses.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExpansionBlocked {
    /// The key is already being expanded further up the chain.
    #[error("cyclic reference: {}", chain.join(" -> "))]
    Cycle { chain: Vec<String> },

    /// Expanding the key would exceed the depth ceiling.
    #[error("reference depth {max_depth} exceeded at '{key}'")]
    MaxDepth { key: String, max_depth: usize },
}

/// Evaluation context carrying state through recursive expansion.
///
/// The context tracks:
/// - Replacements shared by every key on the chain
/// - Keys currently being expanded, for cycle detection
/// - The depth ceiling
pub struct EvalContext<'a> {
    /// Replacements available during evaluation.
    params: &'a HashMap<String, Value>,
    /// Keys being expanded, outermost first.
    call_stack: Vec<String>,
    /// Maximum allowed stack length.
    max_depth: usize,
}

impl<'a> EvalContext<'a> {
    /// Create new context with replacements.
    pub fn new(params: &'a HashMap<String, Value>) -> Self {
        Self::with_max_depth(params, DEFAULT_MAX_DEPTH)
    }

    /// Create context with custom max depth.
    pub fn with_max_depth(params: &'a HashMap<String, Value>, max_depth: usize) -> Self {
        Self {
            params,
            call_stack: Vec::new(),
            max_depth,
        }
    }

    /// Get a replacement value.
    pub fn get_param(&self, name: &str) -> Option<&'a Value> {
        self.params.get(name)
    }

    /// Check if a key is currently being expanded.
    pub fn is_in_call_stack(&self, key: &str) -> bool {
        self.call_stack.iter().any(|k| k == key)
    }

    /// Push a key onto the expansion stack.
    pub fn push_call(&mut self, key: &str) -> Result<(), ExpansionBlocked> {
        if self.is_in_call_stack(key) {
            let mut chain = self.call_stack.clone();
            chain.push(key.to_string());
            return Err(ExpansionBlocked::Cycle { chain });
        }
        if self.call_stack.len() >= self.max_depth {
            return Err(ExpansionBlocked::MaxDepth {
                key: key.to_string(),
                max_depth: self.max_depth,
            });
        }
        self.call_stack.push(key.to_string());
        Ok(())
    }

    /// Pop a key from the expansion stack.
    pub fn pop_call(&mut self) {
        self.call_stack.pop();
    }

    /// Get current expansion depth.
    pub fn depth(&self) -> usize {
        self.call_stack.len()
    }

    /// Keys being expanded, outermost first.
    pub fn call_stack(&self) -> &[String] {
        &self.call_stack
    }
}
