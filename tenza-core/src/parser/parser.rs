//! 递归下降解析器
//!
//! 按固定优先级文法驱动 Token 流，自低向高：
//!
//! ```text
//! equation  := OBJECT ('=' | ':=') statement | statement
//! statement := bool_expr (('&' | '|') bool_expr)*
//! bool_expr := expr (('<'|'<='|'>'|'>='|'=='|'!=') expr)*
//! expr      := term (('+' | '-') term)*
//! term      := power (('*' | '/') power)*
//! power     := atom (('^' | '**') atom)*
//! atom      := INTEGER | FLOAT | OBJECT | '+' atom | '-' atom
//!            | '[' (statement (',' statement)*)? ']'
//!            | FUNCTION '(' (OBJECT (',' OBJECT)*)? ')'
//!            | '(' expr ')'
//! ```
//!
//! 每一层二元循环都向左折叠，产生严格左结合的链；幂运算层同样
//! 从左到右折叠（`a ^ b ^ c` 分组为 `(a ^ b) ^ c`）。
//! 解析即错即停：不恢复、不重同步、不返回部分 AST。

use tracing::{debug, trace};

use tenza_config::ParserConfig;

use super::ast::{Node, NodeKind};
use super::error::{ErrorLocation, ParseResult, SyntaxError, SyntaxErrorKind};
use super::stream::TokenStream;
use crate::lexer::{Token, TokenKind};

/// 解析器
///
/// 显式持有自己的 Token 流与深度计数，
/// 所有文法规则都是其方法，没有任何环境态
pub struct Parser {
    tokens: TokenStream,
    max_nesting_depth: usize,
    depth: usize,
}

impl Parser {
    /// 用默认限制创建解析器，接管 token 序列
    pub fn new(tokens: Vec<Token>) -> Self {
        Self::with_config(tokens, &ParserConfig::default())
    }

    /// 用显式配置创建解析器
    pub fn with_config(tokens: Vec<Token>, config: &ParserConfig) -> Self {
        Self {
            tokens: TokenStream::new(tokens),
            max_nesting_depth: config.max_nesting_depth,
            depth: 0,
        }
    }

    /// 解析整段输入
    ///
    /// 空输入（只有 End 标记）返回 `Ok(None)`：没有 AST，也不是错误
    pub fn parse(mut self) -> ParseResult<Option<Node>> {
        trace!(target: "tenza::parser", tokens = self.tokens.len(), "Parsing token sequence");

        self.tokens.advance(); // 预读第一个token
        if self.at_end() {
            debug!(target: "tenza::parser", "Empty input, no AST produced");
            return Ok(None);
        }

        let node = self.equation()?;

        // 顶层规则之后必须是 End，残留 token 是结构错误
        if !self.at_end() {
            return Err(self.error_here(SyntaxErrorKind::UnexpectedToken {
                found: self.current_token_text(),
                expected: vec!["end of input".to_string()],
            }));
        }

        debug!(target: "tenza::parser", "Parse complete");
        Ok(Some(node))
    }

    // ==================== 游标辅助 ====================

    /// 当前 token 的种类（流耗尽按 End 计）
    fn current_kind(&self) -> TokenKind {
        self.tokens
            .current()
            .map(|token| token.kind)
            .unwrap_or(TokenKind::End)
    }

    /// 是否已到输入末尾
    fn at_end(&self) -> bool {
        self.current_kind() == TokenKind::End
    }

    /// 检查当前token是否为指定类型
    fn check(&self, kind: TokenKind) -> bool {
        self.current_kind() == kind
    }

    /// 当前 token 的字符偏移（End 按其自身偏移计）
    fn current_offset(&self) -> usize {
        self.tokens.current().map(|token| token.position).unwrap_or(0)
    }

    /// 获取当前token的位置信息
    fn current_location(&self) -> ErrorLocation {
        match self.tokens.current() {
            Some(token) if token.kind != TokenKind::End => ErrorLocation::At(token.position),
            _ => ErrorLocation::Eof,
        }
    }

    /// 获取当前token的文本表示
    fn current_token_text(&self) -> String {
        match self.tokens.current() {
            Some(token) if token.kind != TokenKind::End => format!("{:?}", token.kind),
            _ => "EOF".to_string(),
        }
    }

    /// 创建带有当前位置的错误
    fn error_here(&self, kind: SyntaxErrorKind) -> SyntaxError {
        SyntaxError {
            kind,
            location: self.current_location(),
        }
    }

    // ==================== 文法规则 ====================

    /// 解析顶层规则：赋值 / 定义的特例，否则落回普通语句
    fn equation(&mut self) -> ParseResult<Node> {
        if let Some(token) = self.tokens.current() {
            if token.kind == TokenKind::Object {
                let name = token.lexeme.clone();
                let name_position = token.position;

                match self.tokens.peek(1).map(|next| next.kind) {
                    Some(op @ (TokenKind::Equal | TokenKind::ColonEqual)) => {
                        let target = NodeKind::identifier(name, name_position);
                        self.tokens.advance(); // 越过对象名，停在运算符上
                        let op_position = self.current_offset();
                        self.tokens.advance(); // 消费 '=' / ':='
                        let value = self.statement()?;
                        return Ok(if op == TokenKind::Equal {
                            NodeKind::assignment(target, value, op_position)
                        } else {
                            NodeKind::definition(target, value, op_position)
                        });
                    }
                    _ => {}
                }
            }
        }
        self.statement()
    }

    /// 解析语句：逻辑与 / 或 链
    fn statement(&mut self) -> ParseResult<Node> {
        let mut result = self.bool_expr()?;
        while matches!(self.current_kind(), TokenKind::Ampersand | TokenKind::Pipe) {
            let op = self.current_kind();
            let op_position = self.current_offset();
            self.tokens.advance();
            let right = self.bool_expr()?;
            result = NodeKind::binary(op, result, right, op_position);
        }
        Ok(result)
    }

    /// 解析比较链
    fn bool_expr(&mut self) -> ParseResult<Node> {
        let mut result = self.expr()?;
        while matches!(
            self.current_kind(),
            TokenKind::LessThan
                | TokenKind::LessThanEqual
                | TokenKind::GreaterThan
                | TokenKind::GreaterThanEqual
                | TokenKind::DoubleEqual
                | TokenKind::ExclamationEqual
        ) {
            let op = self.current_kind();
            let op_position = self.current_offset();
            self.tokens.advance();
            let right = self.expr()?;
            result = NodeKind::binary(op, result, right, op_position);
        }
        Ok(result)
    }

    /// 解析加减
    fn expr(&mut self) -> ParseResult<Node> {
        let mut result = self.term()?;
        while matches!(self.current_kind(), TokenKind::Plus | TokenKind::Minus) {
            let op = self.current_kind();
            let op_position = self.current_offset();
            self.tokens.advance();
            let right = self.term()?;
            result = NodeKind::binary(op, result, right, op_position);
        }
        Ok(result)
    }

    /// 解析乘除
    fn term(&mut self) -> ParseResult<Node> {
        let mut result = self.power()?;
        while matches!(self.current_kind(), TokenKind::Star | TokenKind::Slash) {
            let op = self.current_kind();
            let op_position = self.current_offset();
            self.tokens.advance();
            let right = self.power()?;
            result = NodeKind::binary(op, result, right, op_position);
        }
        Ok(result)
    }

    /// 解析幂
    ///
    /// 循环向左折叠：`a ^ b ^ c` 分组为 `(a ^ b) ^ c`，
    /// 与常见数学约定（右结合）不同，按既有语义保留
    fn power(&mut self) -> ParseResult<Node> {
        let mut result = self.atom()?;
        while matches!(self.current_kind(), TokenKind::Caret | TokenKind::DoubleStar) {
            let op = self.current_kind();
            let op_position = self.current_offset();
            self.tokens.advance();
            let right = self.atom()?;
            result = NodeKind::binary(op, result, right, op_position);
        }
        Ok(result)
    }

    /// 解析原子（带嵌套深度保护）
    fn atom(&mut self) -> ParseResult<Node> {
        if self.depth >= self.max_nesting_depth {
            return Err(self.error_here(SyntaxErrorKind::NestingTooDeep {
                limit: self.max_nesting_depth,
            }));
        }
        self.depth += 1;
        let result = self.atom_inner();
        self.depth -= 1;
        result
    }

    /// 原子规则本体：对 TokenKind 的封闭匹配
    fn atom_inner(&mut self) -> ParseResult<Node> {
        let token = match self.tokens.current() {
            Some(token) if token.kind != TokenKind::End => token.clone(),
            _ => return Err(SyntaxError::at_eof(SyntaxErrorKind::UnexpectedEndOfInput)),
        };

        match token.kind {
            TokenKind::Integer => {
                self.tokens.advance();
                let value = token.lexeme.parse::<i64>().map_err(|_| {
                    SyntaxError::at(
                        SyntaxErrorKind::InvalidNumber(token.lexeme.clone()),
                        token.position,
                    )
                })?;
                Ok(NodeKind::integer(value, token.position))
            }
            TokenKind::Float => {
                self.tokens.advance();
                let value = token.lexeme.parse::<f64>().map_err(|_| {
                    SyntaxError::at(
                        SyntaxErrorKind::InvalidNumber(token.lexeme.clone()),
                        token.position,
                    )
                })?;
                Ok(NodeKind::float(value, token.position))
            }
            TokenKind::Object => {
                self.tokens.advance();
                Ok(NodeKind::identifier(token.lexeme, token.position))
            }
            TokenKind::Plus | TokenKind::Minus => {
                self.tokens.advance();
                let operand = self.atom()?;
                Ok(NodeKind::unary(token.kind, operand, token.position))
            }
            TokenKind::LeftSquareBracket => self.array_literal(token.position),
            TokenKind::Function => self.function_call(token),
            TokenKind::LeftParenthesis => {
                self.tokens.advance(); // 消费 '('
                let result = self.expr()?;
                if !self.check(TokenKind::RightParenthesis) {
                    return Err(self.error_here(SyntaxErrorKind::UnterminatedGroup));
                }
                self.tokens.advance(); // 消费 ')'
                Ok(result)
            }
            _ => Err(self.error_here(SyntaxErrorKind::UnexpectedToken {
                found: self.current_token_text(),
                expected: vec!["expression".to_string()],
            })),
        }
    }

    /// 解析数组字面量（当前 token 为 '['）
    fn array_literal(&mut self, position: usize) -> ParseResult<Node> {
        self.tokens.advance(); // 消费 '['

        let mut elements = Vec::new();
        if !self.check(TokenKind::RightSquareBracket) && !self.at_end() {
            elements.push(self.statement()?);
            while self.check(TokenKind::Comma) {
                self.tokens.advance();
                elements.push(self.statement()?);
            }
        }

        if !self.check(TokenKind::RightSquareBracket) {
            return Err(self.error_here(SyntaxErrorKind::UnterminatedArray));
        }
        self.tokens.advance(); // 消费 ']'
        Ok(NodeKind::array(elements, position))
    }

    /// 解析函数调用（当前 token 为 FUNCTION；参数是对象名列表）
    fn function_call(&mut self, token: Token) -> ParseResult<Node> {
        self.tokens.advance(); // 越过函数名

        if !self.check(TokenKind::LeftParenthesis) {
            return Err(self.error_here(SyntaxErrorKind::UnexpectedToken {
                found: self.current_token_text(),
                expected: vec!["(".to_string()],
            }));
        }
        self.tokens.advance(); // 消费 '('

        let mut arguments = Vec::new();
        if self.check(TokenKind::Object) {
            arguments.push(self.argument()?);
            while self.check(TokenKind::Comma) {
                self.tokens.advance();
                arguments.push(self.argument()?);
            }
        }

        if !self.check(TokenKind::RightParenthesis) {
            return Err(self.error_here(SyntaxErrorKind::UnterminatedFunctionCall));
        }
        self.tokens.advance(); // 消费 ')'
        Ok(NodeKind::function_call(token.lexeme, arguments, token.position))
    }

    /// 解析一个函数参数（对象名）
    fn argument(&mut self) -> ParseResult<Node> {
        match self.tokens.current() {
            Some(token) if token.kind == TokenKind::Object => {
                let node = NodeKind::identifier(token.lexeme.clone(), token.position);
                self.tokens.advance();
                Ok(node)
            }
            _ => Err(self.error_here(SyntaxErrorKind::UnexpectedToken {
                found: self.current_token_text(),
                expected: vec!["identifier".to_string()],
            })),
        }
    }
}
