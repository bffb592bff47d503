//! Code fragments that compile a pattern in another language.
//!
//! | Target       | Literal            | Modifiers                          |
//! |--------------|--------------------|------------------------------------|
//! | `cpp`        | `R"(...)"`         | `std::regex_constants::*` OR'd; no dot-all |
//! | `python`     | `r"..."`           | `re.*` OR'd                        |
//! | `java`       | `"..."` escaped    | `Pattern.*` OR'd                   |
//! | `javascript` | `/.../`            | suffix letters `ims`               |
//! | `go`         | `` `...` ``        | none                               |
//! | `rust`       | `r"..."`           | `RegexBuilder` methods             |
//!
//! Modifiers always appear in the order case-insensitive, multiline, dot-all.

pub mod literal;
pub mod modifiers;
pub mod targets;

pub use literal::{LiteralStyle, escape_quoted};
pub use modifiers::{Modifier, Modifiers};
pub use targets::{Target, TargetProfile};

/// Emit a code fragment compiling `pattern` for the target named `target_id`.
///
/// Returns `None` when `target_id` names no supported target.
pub fn emit(pattern: &str, target_id: &str, modifiers: Modifiers) -> Option<String> {
    let Some(target) = Target::from_id(target_id) else {
        tracing::debug!(id = target_id, "unknown emission target");
        return None;
    };
    tracing::trace!(id = target.id(), ?modifiers, "emitting pattern");
    Some(target.profile().render(pattern, modifiers))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all() -> Modifiers {
        Modifier::ALL.into_iter().collect()
    }

    fn with(list: &[Modifier]) -> Modifiers {
        list.iter().copied().collect()
    }

    #[test]
    fn unknown_target_emits_nothing() {
        assert_eq!(emit(r"\d+", "cobol", Modifiers::default()), None);
        assert_eq!(emit("", "cobol", all()), None);
        assert_eq!(emit("x", "", all()), None);
    }

    #[test]
    fn javascript_plain() {
        assert_eq!(
            emit(r"\d+", "javascript", Modifiers::default()).unwrap(),
            "// JavaScript Regular Expression\nconst pattern = /\\d+/;\n"
        );
    }

    #[test]
    fn javascript_suffix_order_skips_multiline() {
        let modifiers = with(&[Modifier::DotAll, Modifier::CaseInsensitive]);
        let out = emit("a", "javascript", modifiers).unwrap();
        assert!(out.contains("const pattern = /a/is;"), "{out}");
        assert!(!out.contains("/si"));
    }

    #[test]
    fn python_or_constants_are_deterministic() {
        let first = emit(r"\w+", "python", all()).unwrap();
        let second = emit(r"\w+", "python", all()).unwrap();
        assert_eq!(first, second);
        assert_eq!(
            first,
            "# Python Regular Expression\n\
             import re\n\
             \n\
             pattern = re.compile(r\"\\w+\", re.IGNORECASE | re.MULTILINE | re.DOTALL)\n"
        );
    }

    #[test]
    fn java_escapes_and_ors_constants() {
        let modifiers = with(&[Modifier::Multiline, Modifier::CaseInsensitive]);
        let out = emit(r#"\d"x"#, "java", modifiers).unwrap();
        assert_eq!(
            out,
            "// Java Regular Expression\n\
             import java.util.regex.Pattern;\n\
             \n\
             Pattern pattern = Pattern.compile(\"\\\\d\\\"x\", Pattern.CASE_INSENSITIVE | Pattern.MULTILINE);\n"
        );
    }

    #[test]
    fn java_all_modifiers_in_fixed_order() {
        let out = emit("a", "java", all()).unwrap();
        assert!(out.contains(
            "Pattern.compile(\"a\", Pattern.CASE_INSENSITIVE | Pattern.MULTILINE | Pattern.DOTALL);"
        ));
    }

    #[test]
    fn cpp_notes_missing_dot_all() {
        let out = emit(r"\d", "cpp", all()).unwrap();
        assert_eq!(
            out,
            "// C++ Regular Expression\n\
             #include <regex>\n\
             \n\
             // Note: dot-all not supported by C++ flags; not applied\n\
             std::regex pattern(R\"(\\d)\", std::regex_constants::icase | std::regex_constants::multiline);\n"
        );
    }

    #[test]
    fn cpp_without_modifiers_has_no_flags() {
        let out = emit("a", "cpp", Modifiers::default()).unwrap();
        assert!(out.ends_with("std::regex pattern(R\"(a)\");\n"));
        assert!(!out.contains("Note"));
    }

    #[test]
    fn go_has_no_flags() {
        assert_eq!(
            emit(r"\d", "go", Modifiers::default()).unwrap(),
            "// Go Regular Expression\nimport \"regexp\"\n\npattern := regexp.MustCompile(`\\d`)\n"
        );
        let out = emit(r"\d", "go", with(&[Modifier::CaseInsensitive])).unwrap();
        assert!(out.contains("// Note: case-insensitive not supported by Go flags; not applied\n"));
        assert!(out.ends_with("pattern := regexp.MustCompile(`\\d`)\n"));
    }

    #[test]
    fn rust_plain_and_builder() {
        assert_eq!(
            emit(r"\d", "rust", Modifiers::default()).unwrap(),
            "// Rust Regular Expression\nuse regex::Regex;\n\nlet pattern = Regex::new(r\"\\d\").unwrap();\n"
        );
        let modifiers = with(&[Modifier::DotAll, Modifier::CaseInsensitive]);
        let out = emit(r"\d", "rust", modifiers).unwrap();
        assert!(out.ends_with(
            "let pattern: Regex = regex::RegexBuilder::new(r\"\\d\")\n\
             \x20   .case_insensitive(true)\n\
             \x20   .dot_matches_new_line(true)\n\
             \x20   .build()\n\
             \x20   .unwrap();\n"
        ));
    }

    #[test]
    fn carriage_return_uses_quoted_literal() {
        let go = emit("a\rb", "go", Modifiers::default()).unwrap();
        assert!(go.ends_with("pattern := regexp.MustCompile(\"a\\rb\")\n"), "{go}");
        let rust = emit("a\rb", "rust", Modifiers::default()).unwrap();
        assert!(rust.ends_with("let pattern = Regex::new(\"a\\rb\").unwrap();\n"), "{rust}");
        assert!(!go.contains('\r') && !rust.contains('\r'));
    }

    #[test]
    fn javascript_trailing_backslash_keeps_literal_closed() {
        let out = emit("a\\", "javascript", Modifiers::default()).unwrap();
        assert!(out.ends_with("const pattern = /a\\\\/;\n"), "{out}");
    }

    #[test]
    fn every_target_emits_header_and_pattern() {
        for target in Target::ALL {
            let out = emit("abc", target.id(), Modifiers::default()).unwrap();
            let profile = target.profile();
            assert!(out.starts_with(profile.comment));
            assert!(out.contains(profile.name));
            assert!(out.contains("abc"));
            assert!(out.ends_with('\n'));
        }
    }
}
