//! 语法错误类型
//!
//! 解析失败即中止：不做恢复，不返回部分 AST。

/// 语法错误，包含位置信息
#[derive(Debug, Clone, PartialEq)]
pub struct SyntaxError {
    /// 错误类型
    pub kind: SyntaxErrorKind,
    /// 错误发生的位置
    pub location: ErrorLocation,
}

/// 错误位置信息
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ErrorLocation {
    /// 源文本中的字符偏移
    At(usize),
    /// 输入末尾
    Eof,
}

/// 语法错误类型
#[derive(Debug, Clone, PartialEq)]
pub enum SyntaxErrorKind {
    /// 意外的token
    UnexpectedToken {
        found: String,
        expected: Vec<String>,
    },
    /// 意外的输入结束
    UnexpectedEndOfInput,
    /// 数组缺少右方括号
    UnterminatedArray,
    /// 函数调用缺少右括号
    UnterminatedFunctionCall,
    /// 分组缺少右括号
    UnterminatedGroup,
    /// 数字字面量超出可表示范围
    InvalidNumber(String),
    /// 嵌套深度超过限制
    NestingTooDeep { limit: usize },
}

impl SyntaxError {
    /// 在指定偏移创建错误
    pub fn at(kind: SyntaxErrorKind, position: usize) -> Self {
        Self {
            kind,
            location: ErrorLocation::At(position),
        }
    }

    /// 在输入末尾创建错误
    pub fn at_eof(kind: SyntaxErrorKind) -> Self {
        Self {
            kind,
            location: ErrorLocation::Eof,
        }
    }

    /// 获取字符偏移（如果可用）
    pub fn position(&self) -> Option<usize> {
        match self.location {
            ErrorLocation::At(offset) => Some(offset),
            ErrorLocation::Eof => None,
        }
    }
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // 位置前缀
        let location_prefix = match self.location {
            ErrorLocation::At(offset) => format!("offset {offset}"),
            ErrorLocation::Eof => "EOF".to_string(),
        };

        // 错误消息
        let message = match &self.kind {
            SyntaxErrorKind::UnexpectedToken { found, expected } => {
                if expected.is_empty() {
                    format!("Unexpected token '{found}'")
                } else {
                    format!(
                        "Unexpected token '{}', expected: {}",
                        found,
                        expected.join(", ")
                    )
                }
            }
            SyntaxErrorKind::UnexpectedEndOfInput => "Unexpected end of input".to_string(),
            SyntaxErrorKind::UnterminatedArray => {
                "Unterminated array, expected closing ']'".to_string()
            }
            SyntaxErrorKind::UnterminatedFunctionCall => {
                "Unterminated function call, expected closing ')'".to_string()
            }
            SyntaxErrorKind::UnterminatedGroup => {
                "Unterminated group, expected closing ')'".to_string()
            }
            SyntaxErrorKind::InvalidNumber(s) => {
                format!("Invalid number literal: '{s}'")
            }
            SyntaxErrorKind::NestingTooDeep { limit } => {
                format!("Expression nesting exceeds the limit of {limit}")
            }
        };

        write!(f, "[{location_prefix}] {message}")
    }
}

impl std::error::Error for SyntaxError {}

/// 解析结果类型
pub type ParseResult<T> = Result<T, SyntaxError>;
