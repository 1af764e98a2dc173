//! Tenza Config - Pure configuration data structures
//!
//! This crate contains only data structures, no logic or global state.
//! It serves as the shared configuration vocabulary across all Tenza crates.

use serde::{Deserialize, Serialize};

/// Configuration for lexer behavior
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexerConfig {
    /// Whether to emit a token-level trace while scanning
    #[serde(default)]
    pub trace_tokens: bool,
}

/// Configuration for parser limits
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Maximum nesting depth of the recursive descent (arrays, groups, unary chains)
    #[serde(default = "default_max_nesting_depth")]
    pub max_nesting_depth: usize,
}

fn default_max_nesting_depth() -> usize {
    256
}

/// Front-end phase enum for phase-specific configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Lexer,
    Parser,
}

impl Phase {
    /// Get the string name of the phase
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Lexer => "lexer",
            Phase::Parser => "parser",
        }
    }

    /// Get the log target name for this phase
    pub fn target(&self) -> String {
        format!("tenza::{}", self.as_str())
    }
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            trace_tokens: false,
        }
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_nesting_depth: default_max_nesting_depth(),
        }
    }
}
