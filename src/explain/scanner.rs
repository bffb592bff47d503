//! Single-pass tokenizer for regular expression patterns.
//!
//! The scanner never fails. Each step consumes at least one character, and a
//! bracket without its closing partner degrades to a one-character
//! "unclosed" token so the rest of the pattern is still explained.

use std::iter::FusedIterator;

use super::token::{Token, TokenKind};

/// Scan `pattern` into tokens.
///
/// The returned iterator is lazy and cheap to clone; a clone restarts from
/// the clone point.
pub fn explain(pattern: &str) -> Tokens<'_> {
    Tokens { pattern, pos: 0 }
}

/// Iterator over the tokens of a pattern, in source order.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    pattern: &'a str,
    pos: usize,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        let rest = &self.pattern[self.pos..];
        let mut chars = rest.chars();
        let ch = chars.next()?;

        let (len, kind) = match ch {
            '\\' => match chars.next() {
                Some(escaped) => (1 + escaped.len_utf8(), TokenKind::Escape),
                None => (1, TokenKind::SpecialChar),
            },
            '^' => (1, TokenKind::AnchorStart),
            '$' => (1, TokenKind::AnchorEnd),
            '.' => (1, TokenKind::AnyChar),
            '[' => delimited(rest, ']', TokenKind::CharClass, TokenKind::UnclosedCharClass),
            '(' => delimited(rest, ')', TokenKind::Group, TokenKind::UnclosedGroup),
            '{' => delimited(
                rest,
                '}',
                TokenKind::QuantifierRange,
                TokenKind::UnclosedQuantifier,
            ),
            '*' => (1, TokenKind::QuantifierStar),
            '+' => (1, TokenKind::QuantifierPlus),
            '?' => (1, TokenKind::QuantifierOpt),
            '|' => (1, TokenKind::Alternation),
            c if c.is_alphanumeric() => (c.len_utf8(), TokenKind::Literal),
            c => (c.len_utf8(), TokenKind::SpecialChar),
        };

        self.pos += len;
        Some(Token::new(&rest[..len], kind))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.pattern.len() - self.pos;
        (usize::from(remaining > 0), Some(remaining))
    }
}

impl FusedIterator for Tokens<'_> {}

/// Consume `rest` up to and including the first `close`, or only the
/// one-byte opening delimiter when `close` never appears.
///
/// Returns the byte length consumed and the kind to report.
fn delimited(
    rest: &str,
    close: char,
    closed: TokenKind,
    unclosed: TokenKind,
) -> (usize, TokenKind) {
    match rest[1..].find(close) {
        Some(end) => (1 + end + close.len_utf8(), closed),
        None => (1, unclosed),
    }
}
