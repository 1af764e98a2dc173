//! Tenza Core - Front end for the Tenza expression notation (pure logic, no IO)
//!
//! Contains the character stream, lexer, token stream, and recursive-descent
//! parser. Only operates on in-memory data structures, no file IO or terminal
//! output.
//!
//! Configuration is passed explicitly via parameters, not via global state:
//! every call to [`parser::Parser::parse`] owns its own token buffer and
//! cursors, so independent invocations never share state.

pub mod lexer;
pub mod parser;

// Re-export common types
pub use lexer::{LexError, Lexer, Token, TokenKind};
pub use parser::{Node, NodeKind, Parser, SyntaxError, SyntaxErrorKind};

// Re-export config types from tenza-config
pub use tenza_config::{LexerConfig, ParserConfig, Phase};
