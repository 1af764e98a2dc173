//! Tenza 语法分析器
//!
//! 递归下降，固定优先级文法，输出不可变 AST。

pub mod ast;
pub mod error;
pub mod parser;
pub mod stream;

// 重新导出常用类型
pub use ast::{
    ArrayLiteral, Assignment, BinaryOp, Definition, FunctionCall, Identifier, Node, NodeKind,
    Number, NumberValue, UnaryOp,
};
pub use error::{ErrorLocation, ParseResult, SyntaxError, SyntaxErrorKind};
pub use parser::Parser;
pub use stream::TokenStream;
