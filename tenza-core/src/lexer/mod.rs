//! Tenza 词法分析器
//!
//! 将源文本转换为 Token 序列：
//! - 对象/函数名（含张量下标标点）
//! - 数字（整数与浮点）
//! - 运算符（单字符、双字符、三字符，最长匹配）

pub mod error;
pub mod lexer;
pub mod stream;
pub mod tables;
pub mod token;

pub use error::LexError;
pub use lexer::{tokenize, Lexer};
pub use stream::CharStream;
pub use token::{Token, TokenKind};
