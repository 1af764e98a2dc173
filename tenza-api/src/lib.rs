//! Tenza API - Parse orchestration layer
//!
//! Provides the single public entry point for turning source text into an
//! AST, including:
//! - lexing + parsing orchestration
//! - configuration abstraction (RunConfig)
//! - unified error handling (TenzaError)
//!
//! For CLI convenience, this crate provides a global read-only config
//! singleton. For library use, prefer the explicit
//! `parse_with_config(source, &config)` API.

use tracing::{debug, info};

// Re-export config
pub mod config;
pub use config::{config as get_config, init as init_config, is_initialized, RunConfig};

// Re-export config types from tenza_config
pub use tenza_config::{LexerConfig, ParserConfig, Phase};

// Re-export error
pub mod error;
pub use error::{LexError, SyntaxError, TenzaError};

// Re-export core types
pub use tenza_core::lexer::{Token, TokenKind};
pub use tenza_core::parser::{Node, NodeKind};

use tenza_core::lexer::Lexer;
use tenza_core::parser::Parser;

/// Parse source text into an AST with the default configuration
///
/// Empty input produces `Ok(None)`: no AST, but not an error. The returned
/// AST is owned by the caller and immutable; every invocation owns its own
/// token buffer, so concurrent or repeated calls never share state.
pub fn parse(source: &str) -> Result<Option<Node>, TenzaError> {
    parse_with_config(source, &config::config())
}

/// Parse with explicit configuration
///
/// This is the recommended API for library users.
pub fn parse_with_config(source: &str, config: &RunConfig) -> Result<Option<Node>, TenzaError> {
    info!(target: "tenza::api", chars = source.len(), "Starting parse");

    let tokens = Lexer::new(source).tokenize()?;
    debug!(target: "tenza::api", count = tokens.len(), "Lexing complete");
    if config.lexer.trace_tokens {
        for token in &tokens {
            debug!(
                target: "tenza::api",
                kind = ?token.kind,
                lexeme = %token.lexeme,
                position = token.position,
                "Token"
            );
        }
    }

    let ast = Parser::with_config(tokens, &config.parser).parse()?;
    info!(target: "tenza::api", produced = ast.is_some(), "Parse complete");
    Ok(ast)
}

/// Tokenize source text without parsing (diagnostic tooling)
pub fn tokenize(source: &str) -> Result<Vec<Token>, TenzaError> {
    let tokens = Lexer::new(source).tokenize()?;
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tenza_core::parser::SyntaxErrorKind;

    #[test]
    fn test_parse_returns_owned_ast() {
        let ast = parse("a := 1 + 2").unwrap().unwrap();
        assert!(matches!(*ast, NodeKind::Definition(_)));
    }

    #[test]
    fn test_parse_empty_is_none() {
        assert_eq!(parse("").unwrap(), None);
    }

    #[test]
    fn test_lexer_error_is_unified() {
        let err = parse("1.2.3").unwrap_err();
        assert_eq!(err.phase(), Phase::Lexer);
    }

    #[test]
    fn test_parser_error_is_unified() {
        let err = parse("[1, 2").unwrap_err();
        assert_eq!(err.phase(), Phase::Parser);
        assert!(matches!(
            err,
            TenzaError::Parser(SyntaxError {
                kind: SyntaxErrorKind::UnterminatedArray,
                ..
            })
        ));
    }

    #[test]
    fn test_parse_with_explicit_config() {
        let config = RunConfig {
            parser: ParserConfig {
                max_nesting_depth: 4,
            },
            ..Default::default()
        };
        let err = parse_with_config("----1", &config).unwrap_err();
        assert_eq!(err.phase(), Phase::Parser);
    }

    #[test]
    fn test_tokenize_export() {
        let tokens = tokenize("1+2").unwrap();
        assert_eq!(tokens.len(), 4);
        assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::End));
    }

    #[test]
    fn test_independent_calls_yield_equal_asts() {
        let a = parse("x = f(r) ** 2").unwrap();
        let b = parse("x = f(r) ** 2").unwrap();
        assert_eq!(a, b);
    }
}
