//! String-literal syntaxes used to embed a pattern in source code.

/// How a target spells the pattern in source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralStyle {
    /// `"..."` with C-style escapes.
    Quoted,
    /// `r"..."`, falling back to [`LiteralStyle::Quoted`] when the raw form
    /// cannot hold the pattern.
    PythonRaw,
    /// `R"delim(...)delim"`.
    CppRaw,
    /// `r#"..."#` with as many `#` as the pattern needs, falling back to
    /// [`LiteralStyle::Quoted`] for a carriage return.
    RustRaw,
    /// `` `...` ``, falling back to [`LiteralStyle::Quoted`] when the pattern
    /// contains a back-tick or a carriage return.
    Backtick,
    /// `/.../` regex literal.
    Slashes,
}

impl LiteralStyle {
    pub fn render(self, pattern: &str) -> String {
        match self {
            LiteralStyle::Quoted => quoted(pattern),
            LiteralStyle::PythonRaw => {
                if python_raw_safe(pattern) {
                    format!("r\"{pattern}\"")
                } else {
                    quoted(pattern)
                }
            }
            LiteralStyle::CppRaw => {
                let delim = cpp_raw_delimiter(pattern);
                format!("R\"{delim}({pattern}){delim}\"")
            }
            LiteralStyle::RustRaw if pattern.contains('\r') => quoted(pattern),
            LiteralStyle::RustRaw => {
                let hashes = "#".repeat(rust_raw_hashes(pattern));
                format!("r{hashes}\"{pattern}\"{hashes}")
            }
            LiteralStyle::Backtick => {
                if pattern.contains(['`', '\r']) {
                    quoted(pattern)
                } else {
                    format!("`{pattern}`")
                }
            }
            LiteralStyle::Slashes => format!("/{}/", escape_slashes(pattern)),
        }
    }
}

/// Escape `pattern` for a double-quoted C-family string literal.
///
/// Backslash and double quote are escaped, as are the line-breaking and tab
/// characters that a quoted literal cannot hold verbatim.
pub fn escape_quoted(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() + 2);
    for ch in pattern.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out
}

fn quoted(pattern: &str) -> String {
    format!("\"{}\"", escape_quoted(pattern))
}

/// A Python raw string cannot contain its quote, a line break, or end in an
/// odd run of backslashes.
fn python_raw_safe(pattern: &str) -> bool {
    let trailing = pattern.chars().rev().take_while(|&c| c == '\\').count();
    trailing % 2 == 0 && !pattern.contains(['"', '\n', '\r'])
}

/// Pick the shortest raw-string delimiter whose terminator `)delim"` does
/// not occur in `pattern`.
fn cpp_raw_delimiter(pattern: &str) -> String {
    if !pattern.contains(")\"") {
        return String::new();
    }
    (0..)
        .map(|n| format!("re{n}"))
        .find(|delim| !pattern.contains(&format!("){delim}\"")))
        .unwrap_or_default()
}

/// Number of `#` needed so no `"#…` run in `pattern` terminates the literal.
fn rust_raw_hashes(pattern: &str) -> usize {
    let mut needed = 0;
    for (i, _) in pattern.match_indices('"') {
        let run = pattern[i + 1..].chars().take_while(|&c| c == '#').count();
        needed = needed.max(run + 1);
    }
    needed
}

/// Escape every `/` that is not already escaped, and line breaks, so the
/// pattern fits between regex-literal slashes. An unpaired trailing
/// backslash is doubled so it cannot swallow the closing slash.
fn escape_slashes(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() + 1);
    let mut escaped = false;
    for ch in pattern.chars() {
        match ch {
            '/' if !escaped => out.push_str("\\/"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            c => out.push(c),
        }
        escaped = ch == '\\' && !escaped;
    }
    if escaped {
        out.push('\\');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Undo the escapes a C-family quoted literal applies.
    fn unescape_quoted(literal: &str) -> String {
        let inner = &literal[1..literal.len() - 1];
        let mut out = String::new();
        let mut chars = inner.chars();
        while let Some(c) = chars.next() {
            if c != '\\' {
                out.push(c);
                continue;
            }
            match chars.next() {
                Some('n') => out.push('\n'),
                Some('r') => out.push('\r'),
                Some('t') => out.push('\t'),
                Some(other) => out.push(other),
                None => panic!("dangling escape in {literal}"),
            }
        }
        out
    }

    #[test]
    fn quoted_escapes_backslash_and_quote() {
        assert_eq!(LiteralStyle::Quoted.render(r#"\d"x"#), r#""\\d\"x""#);
    }

    #[test]
    fn quoted_round_trips() {
        for pattern in [r#"a\"b"#, r"\\", r#"""#, "x\ny\t", r#"\d+"\s*"#] {
            let literal = LiteralStyle::Quoted.render(pattern);
            assert_eq!(unescape_quoted(&literal), pattern);
        }
    }

    #[test]
    fn python_raw_when_possible() {
        assert_eq!(LiteralStyle::PythonRaw.render(r"\d+\\"), r#"r"\d+\\""#);
        assert_eq!(LiteralStyle::PythonRaw.render(r"a\"), r#""a\\""#);
        assert_eq!(LiteralStyle::PythonRaw.render(r#"say "hi""#), r#""say \"hi\"""#);
    }

    #[test]
    fn cpp_raw_picks_free_delimiter() {
        assert_eq!(LiteralStyle::CppRaw.render(r"(\d)"), r#"R"((\d))""#);
        assert_eq!(LiteralStyle::CppRaw.render(r#"(a)"b"#), r#"R"re0((a)"b)re0""#);
        assert_eq!(
            LiteralStyle::CppRaw.render(r#"(a)"(b)re0""#),
            r#"R"re1((a)"(b)re0")re1""#
        );
    }

    #[test]
    fn rust_raw_counts_hashes() {
        assert_eq!(LiteralStyle::RustRaw.render(r"\d"), r#"r"\d""#);
        assert_eq!(LiteralStyle::RustRaw.render(r#"a"b"#), r##"r#"a"b"#"##);
        assert_eq!(LiteralStyle::RustRaw.render(r##"a"#b"##), r###"r##"a"#b"##"###);
        assert_eq!(LiteralStyle::RustRaw.render("a\rb"), r#""a\rb""#);
    }

    #[test]
    fn backtick_falls_back_to_quoted() {
        assert_eq!(LiteralStyle::Backtick.render(r"\d"), r"`\d`");
        assert_eq!(LiteralStyle::Backtick.render("a`b"), "\"a`b\"");
        assert_eq!(LiteralStyle::Backtick.render("a\rb"), r#""a\rb""#);
    }

    #[test]
    fn slashes_escape_bare_slashes_only() {
        assert_eq!(LiteralStyle::Slashes.render("a/b"), r"/a\/b/");
        assert_eq!(LiteralStyle::Slashes.render(r"a\/b"), r"/a\/b/");
        assert_eq!(LiteralStyle::Slashes.render(r"a\\/b"), r"/a\\\/b/");
    }

    #[test]
    fn slashes_close_after_trailing_backslash() {
        assert_eq!(LiteralStyle::Slashes.render(r"a\"), r"/a\\/");
        assert_eq!(LiteralStyle::Slashes.render(r"a\\"), r"/a\\/");
        assert_eq!(LiteralStyle::Slashes.render("\\"), r"/\\/");
    }
}
