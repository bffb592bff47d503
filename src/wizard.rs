//! Interactive, question-and-answer construction of a pattern.
//!
//! The wizard talks through a [`Prompt`] so it can be driven by a scripted
//! mock in tests. It returns the rendered report instead of
//! printing it.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use itertools::Itertools;

use crate::emit::Target;
use crate::lang::{Lang, Text};
use crate::preset::{self, Preset};
use crate::report::{GenerationOptions, apply_anchors, render_report, rule};

/// Line-oriented user interaction.
pub trait Prompt {
    /// Write text without a trailing newline and flush it.
    fn write_str(&mut self, s: &str) -> Result<()>;

    /// Read one line without its line terminator. `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>>;
}

/// A [`Prompt`] over the process's stdin and stdout.
pub struct StdioPrompt;

impl Prompt for StdioPrompt {
    fn write_str(&mut self, s: &str) -> Result<()> {
        let mut out = io::stdout().lock();
        out.write_all(s.as_bytes())?;
        out.flush()?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }
}

/// A [`Prompt`] that replays queued answers and records everything written.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MockPrompt {
    answers: std::collections::VecDeque<String>,
    pub output: String,
}

#[cfg(test)]
impl MockPrompt {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            output: String::new(),
        }
    }
}

#[cfg(test)]
impl Prompt for MockPrompt {
    fn write_str(&mut self, s: &str) -> Result<()> {
        self.output.push_str(s);
        Ok(())
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        Ok(self.answers.pop_front())
    }
}

const TITLE: Text = Text::new(
    "Regen Wizard Mode - Interactive Regular Expression Generator",
    "Regen 向导模式 - 交互式正则表达式生成",
);
const MODE_MENU: Text = Text::new(
    "Select generation mode:\n1. Use preset pattern\n2. Custom build pattern\n3. Combine multiple patterns\n",
    "选择生成模式:\n1. 使用预设模式\n2. 自定义构建模式\n3. 组合多个模式\n",
);
const CHOICE_1_3: Text = Text::new("Enter your choice (1-3)", "请输入选择(1-3)");
const CHOICE_1_2: Text = Text::new("Enter your choice (1-2)", "请输入选择(1-2)");
const AVAILABLE_PRESETS: Text = Text::new("\nAvailable preset patterns:\n", "\n可用的预设模式:\n");
const ENTER_PRESET: Text = Text::new("\nEnter preset pattern name", "\n输入预设模式名称");
const CUSTOM_TITLE: Text = Text::new("\nCustom Regular Expression Builder\n", "\n自定义正则表达式构建\n");
const ENTER_PATTERN: Text = Text::new("Enter regular expression pattern", "输入正则表达式模式");
const ENTER_DESCRIPTION: Text = Text::new("Enter pattern description (optional)", "输入模式描述(可选)");
const CUSTOM_DESCRIPTION: Text = Text::new("Custom pattern", "自定义模式");
const COMBINE_TITLE: Text = Text::new(
    "\nCombine Multiple Regular Expression Patterns\n",
    "\n组合多个正则表达式模式\n",
);
const CURRENT_PATTERN: Text = Text::new("\nCurrent pattern: ", "\n当前模式: ");
const NONE: Text = Text::new("None", "无");
const COMBINE_MENU: Text = Text::new(
    "\n1. Add preset pattern\n2. Add custom pattern\n3. Finish building\n",
    "\n1. 添加预设模式\n2. 添加自定义模式\n3. 完成构建\n",
);
const OPTIONS_TITLE: Text = Text::new("\nRegular Expression Options:\n", "\n正则表达式选项:\n");
const ASK_WHOLE_LINE: Text = Text::new(
    "Match whole line (add ^ and $)? (y/n)",
    "匹配整行(添加 ^ 和 $)? (y/n)",
);
const ASK_CASE: Text = Text::new("Case insensitive? (y/n)", "不区分大小写? (y/n)");
const ASK_MULTILINE: Text = Text::new("Multiline mode? (y/n)", "多行模式? (y/n)");
const ASK_DOT_ALL: Text = Text::new(
    "Dot matches all characters (including newline)? (y/n)",
    "dot匹配所有字符(包括换行符)? (y/n)",
);
const ASK_EXPLAIN: Text = Text::new("Output regex explanation? (y/n)", "输出正则表达式解释? (y/n)");
const FORMAT_MENU: Text = Text::new(
    "\nOutput Format Options:\n1. Plain regular expression\n2. With language code snippet\n",
    "\n输出格式选项:\n1. 纯正则表达式\n2. 带语言代码片段\n",
);
const AVAILABLE_LANGUAGES: Text = Text::new("\nAvailable languages:\n", "\n可用的语言:\n");
const ENTER_LANGUAGE: Text = Text::new("Enter language", "输入语言");
const ERROR: Text = Text::new("Error: ", "错误: ");

/// One piece of the pattern being assembled.
struct Component {
    pattern: String,
    description: String,
}

/// Run the wizard to completion and return the rendered report.
pub fn run(prompt: &mut dyn Prompt, lang: Lang) -> Result<String> {
    prompt.write_str(&format!("{}\n{}\n\n", TITLE.get(lang), rule(lang)))?;
    prompt.write_str(MODE_MENU.get(lang))?;

    let mut components = Vec::new();
    match ask(prompt, lang, CHOICE_1_3, "1")?.as_str() {
        "1" => {
            let name = choose_preset(prompt, lang)?;
            components.push(preset_component(preset::require(&name, lang)?, lang));
        }
        "2" => {
            prompt.write_str(CUSTOM_TITLE.get(lang))?;
            components.push(ask_custom(prompt, lang)?);
        }
        "3" => combine(prompt, lang, &mut components)?,
        other => tracing::debug!(choice = other, "unrecognised wizard mode"),
    }

    let pattern: String = components.iter().map(|c| c.pattern.as_str()).collect();
    let description = components.iter().map(|c| c.description.as_str()).join(", ");
    let options = ask_options(prompt, lang)?;
    let pattern = apply_anchors(&pattern, options.match_whole_line);
    render_report(&pattern, &description, &options, lang)
}

/// Print `question [default]: ` and read the answer, substituting `default`
/// for an empty answer or end of input.
fn ask(prompt: &mut dyn Prompt, lang: Lang, question: Text, default: &str) -> Result<String> {
    let mut line = question.get(lang).to_string();
    if !default.is_empty() {
        line.push_str(&format!(" [{default}]"));
    }
    line.push_str(": ");
    prompt.write_str(&line)?;

    let answer = prompt.read_line()?.unwrap_or_default();
    if answer.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(answer)
    }
}

fn ask_yes_no(prompt: &mut dyn Prompt, lang: Lang, question: Text, default: &str) -> Result<bool> {
    Ok(ask(prompt, lang, question, default)? == "y")
}

/// List the presets and read a name.
fn choose_preset(prompt: &mut dyn Prompt, lang: Lang) -> Result<String> {
    let mut listing = AVAILABLE_PRESETS.get(lang).to_string();
    for preset in preset::sorted() {
        listing.push_str(&format!(
            "  {:<12} - {} ({})\n",
            preset.name,
            preset.pattern,
            preset.description.get(lang)
        ));
    }
    prompt.write_str(&listing)?;

    ask(prompt, lang, ENTER_PRESET, "")
}

fn preset_component(preset: &Preset, lang: Lang) -> Component {
    Component {
        pattern: preset.pattern.to_string(),
        description: preset.label(lang),
    }
}

fn ask_custom(prompt: &mut dyn Prompt, lang: Lang) -> Result<Component> {
    let pattern = ask(prompt, lang, ENTER_PATTERN, "")?;
    let description = ask(prompt, lang, ENTER_DESCRIPTION, "")?;
    let description = if description.is_empty() {
        CUSTOM_DESCRIPTION.get(lang).to_string()
    } else {
        description
    };
    Ok(Component {
        pattern,
        description,
    })
}

/// Add presets and custom pieces until the user finishes. An unknown preset
/// name is reported and the loop continues.
fn combine(prompt: &mut dyn Prompt, lang: Lang, components: &mut Vec<Component>) -> Result<()> {
    prompt.write_str(COMBINE_TITLE.get(lang))?;
    loop {
        let current = if components.is_empty() {
            NONE.get(lang).to_string()
        } else {
            components.iter().map(|c| c.pattern.as_str()).collect()
        };
        prompt.write_str(&format!("{}{}\n", CURRENT_PATTERN.get(lang), current))?;
        prompt.write_str(COMBINE_MENU.get(lang))?;

        match ask(prompt, lang, CHOICE_1_3, "3")?.as_str() {
            "1" => {
                let name = choose_preset(prompt, lang)?;
                match preset::require(&name, lang) {
                    Ok(preset) => components.push(preset_component(preset, lang)),
                    Err(err) => prompt.write_str(&format!("{}{}\n", ERROR.get(lang), err))?,
                }
            }
            "2" => components.push(ask_custom(prompt, lang)?),
            "3" => return Ok(()),
            _ => {}
        }
    }
}

fn ask_options(prompt: &mut dyn Prompt, lang: Lang) -> Result<GenerationOptions> {
    prompt.write_str(OPTIONS_TITLE.get(lang))?;
    let mut options = GenerationOptions {
        match_whole_line: ask_yes_no(prompt, lang, ASK_WHOLE_LINE, "n")?,
        ..Default::default()
    };
    options.modifiers.case_insensitive = ask_yes_no(prompt, lang, ASK_CASE, "n")?;
    options.modifiers.multiline = ask_yes_no(prompt, lang, ASK_MULTILINE, "n")?;
    options.modifiers.dot_all = ask_yes_no(prompt, lang, ASK_DOT_ALL, "n")?;
    options.explain = ask_yes_no(prompt, lang, ASK_EXPLAIN, "y")?;

    prompt.write_str(FORMAT_MENU.get(lang))?;
    if ask(prompt, lang, CHOICE_1_2, "1")? == "2" {
        let mut listing = AVAILABLE_LANGUAGES.get(lang).to_string();
        for target in Target::ALL {
            listing.push_str(&format!("  {} - {}\n", target.id(), target.profile().name));
        }
        prompt.write_str(&listing)?;
        let id = ask(prompt, lang, ENTER_LANGUAGE, "")?;
        if !id.is_empty() {
            options.target = Some(id);
        }
    }
    Ok(options)
}
