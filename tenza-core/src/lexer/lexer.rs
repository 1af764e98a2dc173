//! Lexer 主入口
//!
//! `tokenize` 把源文本一次性转换为 Token 序列：
//! 1. 跳过空白
//! 2. 字母开头 → 对象/函数名扫描
//! 3. 数字开头 → 数字扫描（按小数点个数区分整数/浮点）
//! 4. 运算符字符 → 贪婪取整段连续运算符字符，再按最长匹配重新切分
//! 5. 末尾追加 End 标记
//!
//! Token 序列由本次调用独占：没有任何进程级缓冲区，
//! 重复或并发调用互不影响。

use tracing::{debug, trace, warn};

use super::error::LexError;
use super::stream::CharStream;
use super::tables;
use super::token::{Token, TokenKind};

/// 词法分析器
///
/// 每次 tokenize 拥有自己的字符流与输出缓冲
pub struct Lexer {
    stream: CharStream,
    tokens: Vec<Token>,
}

/// 便捷入口：对整段文本做词法分析
pub fn tokenize(text: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(text).tokenize()
}

impl Lexer {
    /// 创建新的 Lexer
    pub fn new(text: &str) -> Self {
        Self {
            stream: CharStream::new(text),
            tokens: Vec::new(),
        }
    }

    /// 执行词法分析，消费自身并返回 Token 序列
    pub fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
        trace!(target: "tenza::lexer", chars = self.stream.len(), "Tokenizing input");

        self.stream.advance();
        while let Some(c) = self.stream.current() {
            if tables::is_whitespace_char(c) {
                self.stream.advance();
            } else if tables::is_letter(c) {
                self.scan_object();
            } else if tables::is_digit(c) {
                self.scan_number()?;
            } else if tables::is_operator_char(c) {
                self.scan_operators()?;
            } else {
                let position = self.stream.position();
                warn!(target: "tenza::lexer", %c, position, "Illegal character");
                return Err(LexError::IllegalCharacter { ch: c, position });
            }
        }

        self.tokens.push(Token::end(self.stream.position()));
        debug!(target: "tenza::lexer", count = self.tokens.len(), "Tokenization complete");
        Ok(self.tokens)
    }

    fn push_token(&mut self, kind: TokenKind, lexeme: String, position: usize) {
        trace!(
            target: "tenza::lexer",
            ?kind,
            lexeme = %lexeme,
            position,
            "Produced token"
        );
        self.tokens.push(Token::new(kind, lexeme, position));
    }

    /// 扫描对象名或函数名
    ///
    /// 预读决定名称边界：名称后紧跟 `(` 即为函数名，
    /// 参数列表由 Parser 负责，Lexer 不消费括号
    fn scan_object(&mut self) {
        let start = self.stream.position();
        let mut name = String::new();

        while let Some(c) = self.stream.current() {
            name.push(c);
            match self.stream.peek(1) {
                Some('(') => {
                    self.stream.advance();
                    self.push_token(TokenKind::Function, name, start);
                    return;
                }
                Some(next) if tables::is_object_char(next) => self.stream.advance(),
                // 预读不再是对象字符（或到达末尾），名称结束
                _ => {
                    self.stream.advance();
                    self.push_token(TokenKind::Object, name, start);
                    return;
                }
            }
        }
    }

    /// 扫描数字：连续消费数字与小数点，按小数点个数分类
    fn scan_number(&mut self) -> Result<(), LexError> {
        let start = self.stream.position();
        let mut number = String::new();

        while let Some(c) = self.stream.current() {
            if tables::is_digit(c) || c == '.' {
                number.push(c);
                self.stream.advance();
            } else {
                break;
            }
        }

        let kind = match number.matches('.').count() {
            0 => TokenKind::Integer,
            1 => TokenKind::Float,
            _ => {
                warn!(target: "tenza::lexer", number = %number, "Illegal number");
                return Err(LexError::IllegalNumber {
                    text: number,
                    position: start,
                });
            }
        };
        self.push_token(kind, number, start);
        Ok(())
    }

    /// 扫描运算符
    ///
    /// 先贪婪收集整段连续的运算符字符，再从左到右按
    /// 三字符 > 双字符 > 单字符的顺序做最长匹配切分
    fn scan_operators(&mut self) -> Result<(), LexError> {
        let run_start = self.stream.position();
        let mut ops: Vec<char> = Vec::new();

        while let Some(c) = self.stream.current() {
            if !tables::is_operator_char(c) {
                break;
            }
            ops.push(c);
            self.stream.advance();
        }

        let mut i = 0;
        while i < ops.len() {
            if i + 2 < ops.len() {
                if let Some(kind) = tables::triple_match(ops[i], ops[i + 1], ops[i + 2]) {
                    let lexeme: String = ops[i..i + 3].iter().collect();
                    self.push_token(kind, lexeme, run_start + i);
                    i += 3;
                    continue;
                }
            }
            if i + 1 < ops.len() {
                if let Some(kind) = tables::double_match(ops[i], ops[i + 1]) {
                    let lexeme: String = ops[i..i + 2].iter().collect();
                    self.push_token(kind, lexeme, run_start + i);
                    i += 2;
                    continue;
                }
            }
            match tables::single_match(ops[i]) {
                Some(kind) => {
                    self.push_token(kind, ops[i].to_string(), run_start + i);
                    i += 1;
                }
                None => {
                    return Err(LexError::UnknownOperator {
                        ch: ops[i],
                        position: run_start + i,
                    });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<TokenKind> {
        tokenize(input)
            .unwrap()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn test_tokenize_simple_sum() {
        let tokens = tokenize("1+2").unwrap();
        assert_eq!(tokens.len(), 4);
        assert_eq!(tokens[0].kind, TokenKind::Integer);
        assert_eq!(tokens[0].lexeme, "1");
        assert_eq!(tokens[1].kind, TokenKind::Plus);
        assert_eq!(tokens[2].kind, TokenKind::Integer);
        assert_eq!(tokens[2].lexeme, "2");
        assert_eq!(tokens[3].kind, TokenKind::End);
    }

    #[test]
    fn test_tokenize_positions() {
        let tokens = tokenize("a + bc").unwrap();
        assert_eq!(tokens[0].position, 0);
        assert_eq!(tokens[1].position, 2);
        assert_eq!(tokens[2].position, 4);
        assert_eq!(tokens[3].position, 6); // End
    }

    #[test]
    fn test_maximal_munch_less_equal() {
        // 必须是 <=，而不是 < 后跟 =
        let tokens = tokenize("a<=b").unwrap();
        assert_eq!(
            tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
            vec![
                TokenKind::Object,
                TokenKind::LessThanEqual,
                TokenKind::Object,
                TokenKind::End
            ]
        );
    }

    #[test]
    fn test_maximal_munch_triple_over_double() {
        let tokens = tokenize("a **= b").unwrap();
        assert_eq!(tokens[1].kind, TokenKind::DoubleStarEqual);
        assert_eq!(tokens[1].lexeme, "**=");
    }

    #[test]
    fn test_maximal_munch_run_resegmentation() {
        // 连续运算符串 "**=**" 切分为 **= 和 **
        let tokens = tokenize("1**=**2").unwrap();
        assert_eq!(tokens[1].kind, TokenKind::DoubleStarEqual);
        assert_eq!(tokens[2].kind, TokenKind::DoubleStar);
    }

    #[test]
    fn test_alternate_not_equal() {
        let tokens = tokenize("a<>b").unwrap();
        assert_eq!(tokens[1].kind, TokenKind::ExclamationEqual);
        assert_eq!(tokens[1].lexeme, "<>");
    }

    #[test]
    fn test_definition_operator() {
        let tokens = tokenize("a:=1").unwrap();
        assert_eq!(
            tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
            vec![
                TokenKind::Object,
                TokenKind::ColonEqual,
                TokenKind::Integer,
                TokenKind::End
            ]
        );
        assert_eq!(tokens[0].lexeme, "a");
    }

    #[test]
    fn test_integer_and_float() {
        let tokens = tokenize("12 3.5 7.").unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Integer);
        assert_eq!(tokens[1].kind, TokenKind::Float);
        assert_eq!(tokens[1].lexeme, "3.5");
        // 末尾小数点仍是一个小数点，按浮点处理
        assert_eq!(tokens[2].kind, TokenKind::Float);
        assert_eq!(tokens[2].lexeme, "7.");
    }

    #[test]
    fn test_illegal_number() {
        let err = tokenize("1.2.3").unwrap_err();
        assert_eq!(
            err,
            LexError::IllegalNumber {
                text: "1.2.3".to_string(),
                position: 0
            }
        );
    }

    #[test]
    fn test_illegal_character() {
        let err = tokenize("1 + #").unwrap_err();
        assert!(matches!(err, LexError::IllegalCharacter { ch: '#', position: 4 }));
    }

    #[test]
    fn test_object_with_subscript_punctuation() {
        // 张量记法：上下标标点属于名称本身
        let tokens = tokenize("T^{a}_{b}").unwrap();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].kind, TokenKind::Object);
        assert_eq!(tokens[0].lexeme, "T^{a}_{b}");
    }

    #[test]
    fn test_caret_binds_to_name_without_spaces() {
        // 无空格时 ^ 被并入对象名；幂运算需要空格或 **
        let tokens = tokenize("x^2").unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Object);
        assert_eq!(tokens[0].lexeme, "x^2");

        let spaced = tokenize("x ^ 2").unwrap();
        assert_eq!(spaced[1].kind, TokenKind::Caret);
    }

    #[test]
    fn test_function_token() {
        let tokens = tokenize("B(r)").unwrap();
        assert_eq!(
            tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
            vec![
                TokenKind::Function,
                TokenKind::LeftParenthesis,
                TokenKind::Object,
                TokenKind::RightParenthesis,
                TokenKind::End
            ]
        );
        assert_eq!(tokens[0].lexeme, "B");
    }

    #[test]
    fn test_function_name_ending_in_digit() {
        let tokens = tokenize("f2(x)").unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Function);
        assert_eq!(tokens[0].lexeme, "f2");
    }

    #[test]
    fn test_empty_input_yields_end_only() {
        let tokens = tokenize("").unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::End);
    }

    #[test]
    fn test_whitespace_only_input() {
        let tokens = tokenize("  \t ").unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::End);
    }

    #[test]
    fn test_tokenize_is_deterministic() {
        assert_eq!(kinds("g_{m}{n} * d ** 2"), kinds("g_{m}{n} * d ** 2"));
    }

    #[test]
    fn test_array_assignment_statement() {
        let tokens = tokenize("x := [1, 2.5, r]").unwrap();
        let expected = vec![
            TokenKind::Object,
            TokenKind::ColonEqual,
            TokenKind::LeftSquareBracket,
            TokenKind::Integer,
            TokenKind::Comma,
            TokenKind::Float,
            TokenKind::Comma,
            TokenKind::Object,
            TokenKind::RightSquareBracket,
            TokenKind::End,
        ];
        assert_eq!(tokens.iter().map(|t| t.kind).collect::<Vec<_>>(), expected);
    }
}
