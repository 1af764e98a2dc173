//! AST 节点定义与构造
//!
//! 节点一经构造不可变，子节点在构造时传入并被父节点独占，
//! 整棵树没有共享引用与回边。每个变体对应一个纯构造函数。

use serde::Serialize;
use std::fmt;

use crate::lexer::TokenKind;

// 节点指针别名
pub type Node = Box<NodeKind>;

/// AST 节点枚举
///
/// 下游求值器对该变体集做穷尽匹配；
/// 二元节点恰有两个子节点，一元节点恰有一个
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum NodeKind {
    // 数字字面量（整数或浮点）
    Number(Number),
    // 对象引用
    Identifier(Identifier),
    // 数组字面量
    ArrayLiteral(ArrayLiteral),
    // 函数调用
    FunctionCall(FunctionCall),
    // 一元运算
    UnaryOp(UnaryOp),
    // 二元运算（算术、比较、逻辑）
    BinaryOp(BinaryOp),
    // 赋值 '='
    Assignment(Assignment),
    // 定义 ':='
    Definition(Definition),
}

/// 数字字面量的值
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum NumberValue {
    Integer(i64),
    Float(f64),
}

// 数字字面量结构体
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Number {
    pub value: NumberValue,
    pub position: usize,
}

// 对象引用结构体
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Identifier {
    pub name: String,
    pub position: usize,
}

// 数组字面量结构体
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArrayLiteral {
    pub elements: Vec<Node>,
    pub position: usize,
}

// 函数调用结构体
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FunctionCall {
    pub name: String,
    pub arguments: Vec<Node>,
    pub position: usize,
}

// 一元运算结构体
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnaryOp {
    pub op: TokenKind,
    pub operand: Node,
    pub position: usize,
}

// 二元运算结构体
//
// `op` 保留原始 TokenKind，`^` 与 `**` 在下游仍可区分
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BinaryOp {
    pub op: TokenKind,
    pub left: Node,
    pub right: Node,
    pub position: usize,
}

// 赋值结构体
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assignment {
    pub target: Node,
    pub value: Node,
    pub position: usize,
}

// 定义结构体
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Definition {
    pub target: Node,
    pub value: Node,
    pub position: usize,
}

// 纯构造函数：每个变体一个，接收已构造的子节点与源位置
impl NodeKind {
    pub fn integer(value: i64, position: usize) -> Node {
        Box::new(NodeKind::Number(Number {
            value: NumberValue::Integer(value),
            position,
        }))
    }

    pub fn float(value: f64, position: usize) -> Node {
        Box::new(NodeKind::Number(Number {
            value: NumberValue::Float(value),
            position,
        }))
    }

    pub fn identifier(name: impl Into<String>, position: usize) -> Node {
        Box::new(NodeKind::Identifier(Identifier {
            name: name.into(),
            position,
        }))
    }

    pub fn array(elements: Vec<Node>, position: usize) -> Node {
        Box::new(NodeKind::ArrayLiteral(ArrayLiteral { elements, position }))
    }

    pub fn function_call(name: impl Into<String>, arguments: Vec<Node>, position: usize) -> Node {
        Box::new(NodeKind::FunctionCall(FunctionCall {
            name: name.into(),
            arguments,
            position,
        }))
    }

    pub fn unary(op: TokenKind, operand: Node, position: usize) -> Node {
        Box::new(NodeKind::UnaryOp(UnaryOp {
            op,
            operand,
            position,
        }))
    }

    pub fn binary(op: TokenKind, left: Node, right: Node, position: usize) -> Node {
        Box::new(NodeKind::BinaryOp(BinaryOp {
            op,
            left,
            right,
            position,
        }))
    }

    pub fn assignment(target: Node, value: Node, position: usize) -> Node {
        Box::new(NodeKind::Assignment(Assignment {
            target,
            value,
            position,
        }))
    }

    pub fn definition(target: Node, value: Node, position: usize) -> Node {
        Box::new(NodeKind::Definition(Definition {
            target,
            value,
            position,
        }))
    }
}

/// 运算符的文本形式（用于 Display）
fn op_symbol(kind: TokenKind) -> &'static str {
    match kind {
        TokenKind::Plus => "+",
        TokenKind::Minus => "-",
        TokenKind::Star => "*",
        TokenKind::Slash => "/",
        TokenKind::Caret => "^",
        TokenKind::DoubleStar => "**",
        TokenKind::Ampersand => "&",
        TokenKind::Pipe => "|",
        TokenKind::LessThan => "<",
        TokenKind::LessThanEqual => "<=",
        TokenKind::GreaterThan => ">",
        TokenKind::GreaterThanEqual => ">=",
        TokenKind::DoubleEqual => "==",
        TokenKind::ExclamationEqual => "!=",
        _ => "?",
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::Number(n) => match &n.value {
                NumberValue::Integer(v) => write!(f, "{}", v),
                NumberValue::Float(v) => write!(f, "{}", v),
            },
            NodeKind::Identifier(id) => write!(f, "{}", id.name),
            NodeKind::ArrayLiteral(array) => {
                let elements = array
                    .elements
                    .iter()
                    .map(|e| e.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "[{}]", elements)
            }
            NodeKind::FunctionCall(call) => {
                let args = call
                    .arguments
                    .iter()
                    .map(|a| a.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "{}({})", call.name, args)
            }
            NodeKind::UnaryOp(un) => write!(f, "({}{})", op_symbol(un.op), un.operand),
            NodeKind::BinaryOp(bin) => {
                write!(f, "({} {} {})", bin.left, op_symbol(bin.op), bin.right)
            }
            NodeKind::Assignment(a) => write!(f, "{} = {}", a.target, a.value),
            NodeKind::Definition(d) => write!(f, "{} := {}", d.target, d.value),
        }
    }
}
