//! Element-by-element explanation of regular expression patterns.
//!
//! # Token categories
//!
//! | Source         | Kind                    |
//! |----------------|-------------------------|
//! | `\c`           | `Escape`                |
//! | `^` `$`        | `AnchorStart` `AnchorEnd` |
//! | `.`            | `AnyChar`               |
//! | `[...]`        | `CharClass`             |
//! | `(...)`        | `Group`                 |
//! | `{...}`        | `QuantifierRange`       |
//! | `*` `+` `?`    | `QuantifierStar` `QuantifierPlus` `QuantifierOpt` |
//! | `\|`           | `Alternation`           |
//! | alphanumeric   | `Literal`               |
//! | anything else  | `SpecialChar`           |
//!
//! An opening `[`, `(` or `{` with no closing partner later in the pattern
//! becomes a one-character `Unclosed*` token and scanning resumes right
//! after it.

mod phrases;
pub mod scanner;
pub mod token;

use crate::lang::Lang;

pub use scanner::{Tokens, explain};
pub use token::{Token, TokenKind};

/// Render the explanation of `pattern`: a header line followed by one
/// `"  <span> - <explanation>"` line per token.
pub fn render_explanation(pattern: &str, lang: Lang) -> String {
    let mut out = String::new();
    out.push_str(phrases::HEADER.get(lang));
    out.push('\n');
    let mut count = 0usize;
    for token in explain(pattern) {
        out.push_str(&format!("  {} - {}\n", token.text, token.explanation(lang)));
        count += 1;
    }
    tracing::debug!(tokens = count, "explained pattern");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn explanations(pattern: &str) -> Vec<(String, TokenKind, String)> {
        explain(pattern)
            .map(|t| (t.text.to_string(), t.kind, t.explanation(Lang::En).into_owned()))
            .collect()
    }

    #[test]
    fn known_escape_uses_table() {
        let tokens = explanations(r"\d");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].0, r"\d");
        assert_eq!(tokens[0].1, TokenKind::Escape);
        assert_eq!(tokens[0].2, "Match any digit (0-9)");
    }

    #[test]
    fn every_table_escape_is_explained() {
        for (esc, expected) in [
            (r"\w", "Match any word character (letter, digit, underscore)"),
            (r"\s", "Match any whitespace character"),
            (r"\D", "Match any non-digit character"),
            (r"\W", "Match any non-word character"),
            (r"\S", "Match any non-whitespace character"),
            (r"\b", "Match a word boundary"),
            (r"\B", "Match a non-word boundary"),
            (r"\\", "Match a backslash character"),
        ] {
            let tokens = explanations(esc);
            assert_eq!(tokens.len(), 1, "{esc}");
            assert_eq!(tokens[0].2, expected, "{esc}");
        }
    }

    #[test]
    fn unknown_escape_names_the_char() {
        let tokens = explanations(r"\q");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].1, TokenKind::Escape);
        assert_eq!(tokens[0].2, "Match escaped character 'q'");
    }

    #[test]
    fn trailing_backslash_explained_as_backslash() {
        let tokens = explanations("\\");
        assert_eq!(tokens[0].1, TokenKind::SpecialChar);
        assert_eq!(tokens[0].2, "Match a backslash character");
    }

    #[test]
    fn literal_and_special() {
        let tokens = explanations("a-");
        assert_eq!(tokens[0].2, "Match character 'a'");
        assert_eq!(tokens[1].2, "Special character");
    }

    #[test]
    fn chinese_explanations() {
        let token = explain(r"\d").next().unwrap();
        assert_eq!(token.explanation(Lang::Zh), "匹配任何数字 (0-9)");
        let token = explain("x").next().unwrap();
        assert_eq!(token.explanation(Lang::Zh), "匹配字符 'x'");
    }

    #[test]
    fn render_empty_pattern_is_header_only() {
        assert_eq!(
            render_explanation("", Lang::En),
            "Regular Expression Explanation:\n"
        );
    }

    #[test]
    fn render_lists_each_token() {
        let expected = "Regular Expression Explanation:\n\
                        \x20 ^ - Match the start of a line\n\
                        \x20 [ - Unclosed character set\n\
                        \x20 a - Match character 'a'\n\
                        \x20 {2} - Quantifier, specifies how many times the preceding element can occur\n\
                        \x20 | - OR operator\n\
                        \x20 (b) - Capturing group\n";
        assert_eq!(render_explanation("^[a{2}|(b)", Lang::En), expected);
    }

    #[test]
    fn render_chinese_header() {
        assert!(render_explanation(".", Lang::Zh).starts_with("正则表达式解释:\n"));
    }
}
