//! API 错误类型
//!
//! 词法与语法错误通过同一条结果通道返回给调用方，
//! 由调用方（CLI 或嵌入方）决定呈现方式。

use tenza_config::Phase;
use thiserror::Error;

/// 词法错误（结构化）
pub use tenza_core::lexer::LexError;

/// 语法错误（结构化）
pub use tenza_core::parser::SyntaxError;

/// Tenza 错误类型
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TenzaError {
    /// 词法分析错误
    #[error("{0}")]
    Lexer(#[from] LexError),

    /// 语法分析错误
    #[error("{0}")]
    Parser(#[from] SyntaxError),
}

impl TenzaError {
    /// 获取错误对应的字符偏移（如果有）
    pub fn position(&self) -> Option<usize> {
        match self {
            TenzaError::Lexer(e) => Some(e.position()),
            TenzaError::Parser(e) => e.position(),
        }
    }

    /// 获取出错的阶段
    pub fn phase(&self) -> Phase {
        match self {
            TenzaError::Lexer(_) => Phase::Lexer,
            TenzaError::Parser(_) => Phase::Parser,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tenza_core::parser::SyntaxErrorKind;

    #[test]
    fn test_lexer_error_phase() {
        let err = TenzaError::from(LexError::IllegalCharacter { ch: '#', position: 2 });
        assert_eq!(err.phase(), Phase::Lexer);
        assert_eq!(err.position(), Some(2));
    }

    #[test]
    fn test_parser_error_phase() {
        let err = TenzaError::from(SyntaxError::at_eof(SyntaxErrorKind::UnterminatedArray));
        assert_eq!(err.phase(), Phase::Parser);
        assert_eq!(err.position(), None);
    }

    #[test]
    fn test_error_display_passthrough() {
        let err = TenzaError::from(LexError::IllegalNumber {
            text: "1.2.3".to_string(),
            position: 0,
        });
        assert!(format!("{err}").contains("1.2.3"));
    }
}
