//! Explain regular expressions and emit code that compiles them.
//!
//! # Example
//!
//! ```rust
//! use regen::{Lang, Modifiers, TokenKind, emit, explain};
//!
//! let kinds: Vec<TokenKind> = explain(r"\d+[").map(|t| t.kind).collect();
//! assert_eq!(
//!     kinds,
//!     [TokenKind::Escape, TokenKind::QuantifierPlus, TokenKind::UnclosedCharClass]
//! );
//!
//! let first = explain(r"\d").next().unwrap();
//! assert_eq!(first.explanation(Lang::En), "Match any digit (0-9)");
//!
//! let modifiers = Modifiers { case_insensitive: true, ..Default::default() };
//! let code = emit(r"\d+", "javascript", modifiers).unwrap();
//! assert_eq!(code, "// JavaScript Regular Expression\nconst pattern = /\\d+/i;\n");
//!
//! assert_eq!(emit(r"\d+", "cobol", modifiers), None);
//! ```

pub mod emit;
pub mod explain;
mod lang;
pub mod preset;
pub mod report;
pub mod wizard;

pub use emit::{Modifier, Modifiers, Target, TargetProfile, emit};
pub use explain::{Token, TokenKind, Tokens, explain, render_explanation};
pub use lang::{Lang, Text};
pub use preset::Preset;
pub use report::{GenerationOptions, apply_anchors, render_report};
