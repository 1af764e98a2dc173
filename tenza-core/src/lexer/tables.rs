//! 字符分类与运算符查找表
//!
//! 运算符表是固定的声明式映射：字符序列到 TokenKind 的精确匹配，
//! 按宽度分为单字符、双字符、三字符三张互不重叠的表。

use super::token::TokenKind;

/// 单字符运算符表
pub static SINGLE_OPERATORS: &[(char, TokenKind)] = &[
    ('*', TokenKind::Star),
    ('-', TokenKind::Minus),
    ('+', TokenKind::Plus),
    ('=', TokenKind::Equal),
    ('[', TokenKind::LeftSquareBracket),
    (']', TokenKind::RightSquareBracket),
    ('(', TokenKind::LeftParenthesis),
    (')', TokenKind::RightParenthesis),
    ('{', TokenKind::LeftCurlyBrace),
    ('}', TokenKind::RightCurlyBrace),
    ('^', TokenKind::Caret),
    ('/', TokenKind::Slash),
    ('|', TokenKind::Pipe),
    ('&', TokenKind::Ampersand),
    ('!', TokenKind::Exclamation),
    ('~', TokenKind::Tilde),
    ('>', TokenKind::GreaterThan),
    ('<', TokenKind::LessThan),
    (':', TokenKind::Colon),
    ('.', TokenKind::Dot),
    (',', TokenKind::Comma),
    (';', TokenKind::Semicolon),
    ('@', TokenKind::At),
    ('%', TokenKind::Percent),
];

/// 双字符运算符表
///
/// `<>` 是不等号的另一种写法，与 `!=` 映射到同一种类
pub static DOUBLE_OPERATORS: &[(&str, TokenKind)] = &[
    ("!=", TokenKind::ExclamationEqual),
    ("%=", TokenKind::PercentEqual),
    ("&=", TokenKind::AmpersandEqual),
    ("+=", TokenKind::PlusEqual),
    (":=", TokenKind::ColonEqual),
    ("==", TokenKind::DoubleEqual),
    ("||", TokenKind::DoublePipe),
    ("@=", TokenKind::AtEqual),
    ("^=", TokenKind::CaretEqual),
    ("|=", TokenKind::PipeEqual),
    ("**", TokenKind::DoubleStar),
    ("*=", TokenKind::StarEqual),
    (">=", TokenKind::GreaterThanEqual),
    (">>", TokenKind::RightShift),
    ("//", TokenKind::DoubleSlash),
    ("/=", TokenKind::SlashEqual),
    ("-=", TokenKind::MinusEqual),
    ("->", TokenKind::Arrow),
    ("<=", TokenKind::LessThanEqual),
    ("<<", TokenKind::LeftShift),
    ("<>", TokenKind::ExclamationEqual),
];

/// 三字符运算符表
pub static TRIPLE_OPERATORS: &[(&str, TokenKind)] = &[
    ("**=", TokenKind::DoubleStarEqual),
    ("...", TokenKind::Ellipsis),
    ("//=", TokenKind::DoubleSlashEqual),
    ("<<=", TokenKind::LeftShiftEqual),
    (">>=", TokenKind::RightShiftEqual),
];

/// 查找单字符运算符
pub fn single_match(c: char) -> Option<TokenKind> {
    SINGLE_OPERATORS
        .iter()
        .find(|(op, _)| *op == c)
        .map(|(_, kind)| *kind)
}

/// 查找双字符运算符
pub fn double_match(c1: char, c2: char) -> Option<TokenKind> {
    DOUBLE_OPERATORS
        .iter()
        .find(|(op, _)| {
            let mut it = op.chars();
            it.next() == Some(c1) && it.next() == Some(c2)
        })
        .map(|(_, kind)| *kind)
}

/// 查找三字符运算符
pub fn triple_match(c1: char, c2: char, c3: char) -> Option<TokenKind> {
    TRIPLE_OPERATORS
        .iter()
        .find(|(op, _)| {
            let mut it = op.chars();
            it.next() == Some(c1) && it.next() == Some(c2) && it.next() == Some(c3)
        })
        .map(|(_, kind)| *kind)
}

/// 空白字符（空格与制表符）
pub fn is_whitespace_char(c: char) -> bool {
    c == ' ' || c == '\t'
}

/// 字母
pub fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// 数字
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// 张量下标标点（可出现在对象名中的非字母字符）
///
/// `:` 不在此集合中：对象名吸收 `:` 会把 `a:=1` 切成 `a:` 与 `=`，
/// 使定义运算符 `:=` 永远无法出现在名称之后
pub fn is_subscript_punct(c: char) -> bool {
    matches!(c, '_' | '{' | '}' | '^' | ';')
}

/// 对象名字符：字母、数字、下标标点
pub fn is_object_char(c: char) -> bool {
    is_letter(c) || is_digit(c) || is_subscript_punct(c)
}

/// 运算符字符集
pub fn is_operator_char(c: char) -> bool {
    matches!(
        c,
        '*' | '-'
            | '+'
            | '='
            | '['
            | ']'
            | '('
            | ')'
            | '{'
            | '}'
            | '^'
            | '/'
            | '|'
            | '&'
            | '!'
            | '~'
            | '>'
            | '<'
            | ':'
            | ';'
            | '.'
            | ','
            | '@'
            | '%'
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_match() {
        assert_eq!(single_match('+'), Some(TokenKind::Plus));
        assert_eq!(single_match('^'), Some(TokenKind::Caret));
        assert_eq!(single_match('a'), None);
    }

    #[test]
    fn test_double_match() {
        assert_eq!(double_match('<', '='), Some(TokenKind::LessThanEqual));
        assert_eq!(double_match(':', '='), Some(TokenKind::ColonEqual));
        assert_eq!(double_match('*', '*'), Some(TokenKind::DoubleStar));
        assert_eq!(double_match('+', '+'), None);
    }

    #[test]
    fn test_double_match_alternate_not_equal() {
        // `<>` 与 `!=` 同种类
        assert_eq!(double_match('<', '>'), Some(TokenKind::ExclamationEqual));
        assert_eq!(double_match('!', '='), Some(TokenKind::ExclamationEqual));
    }

    #[test]
    fn test_triple_match() {
        assert_eq!(triple_match('*', '*', '='), Some(TokenKind::DoubleStarEqual));
        assert_eq!(triple_match('.', '.', '.'), Some(TokenKind::Ellipsis));
        assert_eq!(triple_match('<', '<', '<'), None);
    }

    #[test]
    fn test_tables_have_no_duplicate_entries() {
        // 每张表内部按字符序列互不重复
        for (i, (a, _)) in SINGLE_OPERATORS.iter().enumerate() {
            for (b, _) in &SINGLE_OPERATORS[i + 1..] {
                assert_ne!(a, b, "duplicate single operator '{}'", a);
            }
        }
        for (i, (a, _)) in DOUBLE_OPERATORS.iter().enumerate() {
            for (b, _) in &DOUBLE_OPERATORS[i + 1..] {
                assert_ne!(a, b, "duplicate double operator '{}'", a);
            }
        }
        for (i, (a, _)) in TRIPLE_OPERATORS.iter().enumerate() {
            for (b, _) in &TRIPLE_OPERATORS[i + 1..] {
                assert_ne!(a, b, "duplicate triple operator '{}'", a);
            }
        }
    }

    #[test]
    fn test_every_operator_char_has_single_entry() {
        // 运算符字符集与单字符表保持一致
        for (op, _) in SINGLE_OPERATORS {
            assert!(is_operator_char(*op), "'{}' missing from operator set", op);
        }
    }

    #[test]
    fn test_object_char_classification() {
        assert!(is_object_char('a'));
        assert!(is_object_char('Z'));
        assert!(is_object_char('7'));
        assert!(is_object_char('_'));
        assert!(is_object_char('{'));
        assert!(is_object_char('}'));
        assert!(is_object_char('^'));
        assert!(is_object_char(';'));
        assert!(!is_object_char(':'));
        assert!(!is_object_char('('));
        assert!(!is_object_char('+'));
        assert!(!is_object_char(' '));
    }
}
