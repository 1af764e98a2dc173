//! Lexer 错误类型
//!
//! 词法错误对当前 tokenize 调用都是致命的：不恢复、不降级，
//! 携带出错文本与字符偏移供调用方渲染诊断。

/// 词法错误
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    /// 数字字面量包含多个小数点
    #[error("illegal number '{text}' at offset {position}")]
    IllegalNumber { text: String, position: usize },

    /// 运算符字符串中存在任何宽度都无法匹配的位置
    #[error("unknown operator '{ch}' at offset {position}")]
    UnknownOperator { ch: char, position: usize },

    /// 不属于任何字符类的字符
    #[error("illegal character '{ch}' at offset {position}")]
    IllegalCharacter { ch: char, position: usize },
}

impl LexError {
    /// 错误对应的字符偏移
    pub fn position(&self) -> usize {
        match self {
            LexError::IllegalNumber { position, .. }
            | LexError::UnknownOperator { position, .. }
            | LexError::IllegalCharacter { position, .. } => *position,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LexError::IllegalNumber {
            text: "1.2.3".to_string(),
            position: 4,
        };
        let display = format!("{err}");
        assert!(display.contains("1.2.3"));
        assert!(display.contains("4"));
    }

    #[test]
    fn test_error_position() {
        let err = LexError::IllegalCharacter { ch: '#', position: 7 };
        assert_eq!(err.position(), 7);
    }
}
