//! Token types produced by the explainer.

use std::borrow::Cow;

use crate::lang::Lang;

use super::phrases;

/// The category of a scanned token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// An alphanumeric character matched literally.
    Literal,
    /// A backslash followed by one character, e.g. `\d`.
    Escape,
    /// `^`
    AnchorStart,
    /// `$`
    AnchorEnd,
    /// `.`
    AnyChar,
    /// `[...]`, up to the first `]`.
    CharClass,
    /// `(...)`, up to the first `)`.
    Group,
    /// `{...}`, up to the first `}`.
    QuantifierRange,
    /// `*`
    QuantifierStar,
    /// `+`
    QuantifierPlus,
    /// `?`
    QuantifierOpt,
    /// `|`
    Alternation,
    /// A `[` with no `]` after it.
    UnclosedCharClass,
    /// A `(` with no `)` after it.
    UnclosedGroup,
    /// A `{` with no `}` after it.
    UnclosedQuantifier,
    /// Any other character, including a trailing lone backslash.
    SpecialChar,
}

/// A classified span of a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// The exact source text consumed by this token.
    pub text: &'a str,
    pub kind: TokenKind,
}

impl<'a> Token<'a> {
    pub fn new(text: &'a str, kind: TokenKind) -> Self {
        Self { text, kind }
    }

    /// The human-readable explanation of this token in `lang`.
    pub fn explanation(&self, lang: Lang) -> Cow<'static, str> {
        match self.kind {
            TokenKind::Escape => {
                let escaped = self.text.chars().nth(1).unwrap_or('\\');
                match phrases::ESCAPES.get(&escaped) {
                    Some(text) => Cow::Borrowed(text.get(lang)),
                    None => Cow::Owned(format!(
                        "{} '{}'",
                        phrases::ESCAPED_CHAR.get(lang),
                        escaped
                    )),
                }
            }
            TokenKind::Literal => Cow::Owned(format!(
                "{} '{}'",
                phrases::LITERAL_CHAR.get(lang),
                self.text
            )),
            TokenKind::SpecialChar if self.text == "\\" => {
                Cow::Borrowed(phrases::BACKSLASH.get(lang))
            }
            kind => Cow::Borrowed(phrases::fixed(kind).get(lang)),
        }
    }
}
