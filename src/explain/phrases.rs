//! Explanation text for each token category.

use phf::{Map, phf_map};

use crate::lang::Text;

use super::token::TokenKind;

pub const HEADER: Text = Text::new("Regular Expression Explanation:", "正则表达式解释:");

pub const BACKSLASH: Text = Text::new("Match a backslash character", "匹配反斜杠字符");

/// Prefix for an escape with no entry in [`ESCAPES`]; the char follows in quotes.
pub const ESCAPED_CHAR: Text = Text::new("Match escaped character", "匹配转义字符");

/// Prefix for a literal; the char follows in quotes.
pub const LITERAL_CHAR: Text = Text::new("Match character", "匹配字符");

/// Explanations for `\<c>` keyed by `c`.
pub static ESCAPES: Map<char, Text> = phf_map! {
    'd' => Text::new("Match any digit (0-9)", "匹配任何数字 (0-9)"),
    'w' => Text::new(
        "Match any word character (letter, digit, underscore)",
        "匹配任何单词字符 (字母、数字、下划线)"
    ),
    's' => Text::new("Match any whitespace character", "匹配任何空白字符"),
    'D' => Text::new("Match any non-digit character", "匹配任何非数字字符"),
    'W' => Text::new("Match any non-word character", "匹配任何非单词字符"),
    'S' => Text::new("Match any non-whitespace character", "匹配任何非空白字符"),
    'b' => Text::new("Match a word boundary", "匹配单词边界"),
    'B' => Text::new("Match a non-word boundary", "匹配非单词边界"),
    '\\' => BACKSLASH,
};

/// Text for categories whose explanation does not depend on the token text.
///
/// `Escape` and `Literal` are handled by [`super::Token::explanation`];
/// they fall back to the special-character text here.
pub fn fixed(kind: TokenKind) -> Text {
    match kind {
        TokenKind::AnchorStart => Text::new("Match the start of a line", "匹配行的开头"),
        TokenKind::AnchorEnd => Text::new("Match the end of a line", "匹配行的结尾"),
        TokenKind::AnyChar => Text::new(
            "Match any single character (except newline)",
            "匹配任何单个字符(换行符除外)",
        ),
        TokenKind::CharClass => {
            Text::new("Match any character in the set", "匹配字符集中的任意一个字符")
        }
        TokenKind::UnclosedCharClass => {
            Text::new("Unclosed character set", "未闭合的字符集")
        }
        TokenKind::Group => Text::new("Capturing group", "捕获组"),
        TokenKind::UnclosedGroup => Text::new("Unclosed capturing group", "未闭合的捕获组"),
        TokenKind::QuantifierRange => Text::new(
            "Quantifier, specifies how many times the preceding element can occur",
            "量词，指定前面元素的重复次数",
        ),
        TokenKind::UnclosedQuantifier => Text::new("Unclosed quantifier", "未闭合的量词"),
        TokenKind::QuantifierStar => Text::new(
            "Match the preceding element zero or more times",
            "匹配前面的元素零次或多次",
        ),
        TokenKind::QuantifierPlus => Text::new(
            "Match the preceding element one or more times",
            "匹配前面的元素一次或多次",
        ),
        TokenKind::QuantifierOpt => Text::new(
            "Match the preceding element zero or one time",
            "匹配前面的元素零次或一次",
        ),
        TokenKind::Alternation => Text::new("OR operator", "或操作符"),
        TokenKind::Escape | TokenKind::Literal | TokenKind::SpecialChar => {
            Text::new("Special character", "特殊字符")
        }
    }
}
