//! The "Generated Result" block shown after a pattern has been built.

use anyhow::{Result, anyhow};

use crate::emit::{self, Modifiers};
use crate::explain::render_explanation;
use crate::lang::{Lang, Text};

const TITLE: Text = Text::new("Generated Result:", "生成结果:");
const PATTERN_LABEL: Text = Text::new("Regular Expression: ", "正则表达式: ");
const DESCRIPTION_LABEL: Text = Text::new("Description: ", "描述: ");
const UNKNOWN_FORMAT: Text = Text::new("Unknown output format", "未知的输出格式");

/// What to produce for a pattern.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationOptions {
    /// Wrap the pattern in `^...$`.
    pub match_whole_line: bool,
    pub modifiers: Modifiers,
    /// Include the element-by-element explanation.
    pub explain: bool,
    /// Target id for a code fragment; `None` prints the plain pattern only.
    pub target: Option<String>,
}

/// Anchor `pattern` to the whole line when requested.
pub fn apply_anchors(pattern: &str, match_whole_line: bool) -> String {
    if match_whole_line {
        format!("^{pattern}$")
    } else {
        pattern.to_string()
    }
}

/// Horizontal rule framing the report.
pub fn rule(lang: Lang) -> &'static str {
    match lang {
        Lang::En => "------------------------------------------------------------",
        Lang::Zh => "------------------------------------",
    }
}

/// Render the report for an already anchored `pattern`.
///
/// Fails only when `options.target` names an unknown target.
pub fn render_report(
    pattern: &str,
    description: &str,
    options: &GenerationOptions,
    lang: Lang,
) -> Result<String> {
    let code = match options.target.as_deref() {
        Some(id) => Some(
            emit::emit(pattern, id, options.modifiers)
                .ok_or_else(|| anyhow!("{} '{}'", UNKNOWN_FORMAT.get(lang), id))?,
        ),
        None => None,
    };

    let mut out = String::new();
    out.push_str(TITLE.get(lang));
    out.push('\n');
    out.push_str(rule(lang));
    out.push('\n');
    out.push_str(PATTERN_LABEL.get(lang));
    out.push_str(pattern);
    out.push('\n');
    if !description.is_empty() {
        out.push_str(DESCRIPTION_LABEL.get(lang));
        out.push_str(description);
        out.push('\n');
    }
    if options.explain {
        out.push('\n');
        out.push_str(&render_explanation(pattern, lang));
        out.push('\n');
    }
    if let Some(code) = code {
        out.push('\n');
        out.push_str(&code);
        out.push('\n');
    }
    out.push_str(rule(lang));
    out.push('\n');
    Ok(out)
}
