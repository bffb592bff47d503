//! Per-language recipes for emitting a compiled pattern.
//!
//! Each [`Target`] owns one static [`TargetProfile`]. Adding a language means
//! adding a variant, a profile and an entry in [`TARGET_IDS`].

use itertools::{Either, Itertools};
use phf::{Map, phf_map};

use super::literal::LiteralStyle;
use super::modifiers::{Modifier, Modifiers};

/// A supported output language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    Cpp,
    Python,
    Java,
    JavaScript,
    Go,
    Rust,
}

/// Target identifiers accepted on the command line.
static TARGET_IDS: Map<&'static str, Target> = phf_map! {
    "cpp" => Target::Cpp,
    "go" => Target::Go,
    "java" => Target::Java,
    "javascript" => Target::JavaScript,
    "python" => Target::Python,
    "rust" => Target::Rust,
};

impl Target {
    /// All targets, in the order they are listed to users.
    pub const ALL: [Target; 6] = [
        Target::Cpp,
        Target::Python,
        Target::Java,
        Target::JavaScript,
        Target::Go,
        Target::Rust,
    ];

    /// Look up a target by its exact identifier.
    pub fn from_id(id: &str) -> Option<Target> {
        TARGET_IDS.get(id).copied()
    }

    pub fn id(self) -> &'static str {
        match self {
            Target::Cpp => "cpp",
            Target::Python => "python",
            Target::Java => "java",
            Target::JavaScript => "javascript",
            Target::Go => "go",
            Target::Rust => "rust",
        }
    }

    pub fn profile(self) -> &'static TargetProfile {
        match self {
            Target::Cpp => &CPP,
            Target::Python => &PYTHON,
            Target::Java => &JAVA,
            Target::JavaScript => &JAVASCRIPT,
            Target::Go => &GO,
            Target::Rust => &RUST,
        }
    }
}

/// Builds the declaration from the rendered literal and the flag pieces of
/// the enabled, supported modifiers.
type Declare = fn(literal: &str, flags: &[&str]) -> String;

/// Everything needed to emit a pattern for one language.
pub struct TargetProfile {
    pub target: Target,
    /// Display name, e.g. `"JavaScript"`.
    pub name: &'static str,
    /// Line-comment introducer.
    pub comment: &'static str,
    pub imports: &'static [&'static str],
    pub literal: LiteralStyle,
    /// Flag piece per modifier, indexed in [`Modifier::ALL`] order.
    /// `None` marks a modifier the target cannot express.
    pub flags: [Option<&'static str>; 3],
    pub declare: Declare,
}

impl TargetProfile {
    pub fn flag(&self, modifier: Modifier) -> Option<&'static str> {
        let index = match modifier {
            Modifier::CaseInsensitive => 0,
            Modifier::Multiline => 1,
            Modifier::DotAll => 2,
        };
        self.flags[index]
    }

    /// Render the full code fragment: header comment, imports, a note for any
    /// modifier that could not be applied, and the declaration.
    pub fn render(&self, pattern: &str, modifiers: Modifiers) -> String {
        let literal = self.literal.render(pattern);
        let (flags, unsupported): (Vec<&str>, Vec<Modifier>) =
            modifiers.enabled().partition_map(|m| match self.flag(m) {
                Some(piece) => Either::Left(piece),
                None => Either::Right(m),
            });

        let mut out = format!("{} {} Regular Expression\n", self.comment, self.name);
        for line in self.imports {
            out.push_str(line);
            out.push('\n');
        }
        if !self.imports.is_empty() {
            out.push('\n');
        }
        if !unsupported.is_empty() {
            out.push_str(&format!(
                "{} Note: {} not supported by {} flags; not applied\n",
                self.comment,
                unsupported.iter().map(|m| m.name()).join(", "),
                self.name
            ));
        }
        out.push_str(&(self.declare)(&literal, &flags));
        out.push('\n');
        out
    }
}

/// `<call>(<literal>)` or `<call>(<literal>, <f1> | <f2>)`.
fn call_with_flags(call: &str, literal: &str, flags: &[&str]) -> String {
    if flags.is_empty() {
        format!("{call}({literal})")
    } else {
        format!("{call}({literal}, {})", flags.join(" | "))
    }
}

static CPP: TargetProfile = TargetProfile {
    target: Target::Cpp,
    name: "C++",
    comment: "//",
    imports: &["#include <regex>"],
    literal: LiteralStyle::CppRaw,
    flags: [
        Some("std::regex_constants::icase"),
        Some("std::regex_constants::multiline"),
        None,
    ],
    declare: |literal, flags| format!("{};", call_with_flags("std::regex pattern", literal, flags)),
};

static PYTHON: TargetProfile = TargetProfile {
    target: Target::Python,
    name: "Python",
    comment: "#",
    imports: &["import re"],
    literal: LiteralStyle::PythonRaw,
    flags: [Some("re.IGNORECASE"), Some("re.MULTILINE"), Some("re.DOTALL")],
    declare: |literal, flags| {
        format!("pattern = {}", call_with_flags("re.compile", literal, flags))
    },
};

static JAVA: TargetProfile = TargetProfile {
    target: Target::Java,
    name: "Java",
    comment: "//",
    imports: &["import java.util.regex.Pattern;"],
    literal: LiteralStyle::Quoted,
    flags: [
        Some("Pattern.CASE_INSENSITIVE"),
        Some("Pattern.MULTILINE"),
        Some("Pattern.DOTALL"),
    ],
    declare: |literal, flags| {
        format!(
            "Pattern pattern = {};",
            call_with_flags("Pattern.compile", literal, flags)
        )
    },
};

static JAVASCRIPT: TargetProfile = TargetProfile {
    target: Target::JavaScript,
    name: "JavaScript",
    comment: "//",
    imports: &[],
    literal: LiteralStyle::Slashes,
    flags: [Some("i"), Some("m"), Some("s")],
    declare: |literal, flags| format!("const pattern = {literal}{};", flags.concat()),
};

static GO: TargetProfile = TargetProfile {
    target: Target::Go,
    name: "Go",
    comment: "//",
    imports: &["import \"regexp\""],
    literal: LiteralStyle::Backtick,
    flags: [None, None, None],
    declare: |literal, _| format!("pattern := regexp.MustCompile({literal})"),
};

static RUST: TargetProfile = TargetProfile {
    target: Target::Rust,
    name: "Rust",
    comment: "//",
    imports: &["use regex::Regex;"],
    literal: LiteralStyle::RustRaw,
    flags: [
        Some(".case_insensitive(true)"),
        Some(".multi_line(true)"),
        Some(".dot_matches_new_line(true)"),
    ],
    declare: |literal, flags| {
        if flags.is_empty() {
            return format!("let pattern = Regex::new({literal}).unwrap();");
        }
        let mut out = format!("let pattern: Regex = regex::RegexBuilder::new({literal})");
        for flag in flags {
            out.push_str("\n    ");
            out.push_str(flag);
        }
        out.push_str("\n    .build()\n    .unwrap();");
        out
    },
};
