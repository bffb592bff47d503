//! Named, ready-made patterns.
//!
//! Preset patterns are opaque strings; they are shown and used verbatim,
//! never validated or corrected.

use anyhow::{Result, anyhow};
use itertools::Itertools;
use phf::{Map, phf_map};

use crate::lang::{Lang, Text};

const LABEL: Text = Text::new("Preset pattern: ", "预设模式: ");
const UNKNOWN: Text = Text::new("Unknown preset pattern", "未知的预设模式");

#[derive(Debug)]
pub struct Preset {
    pub name: &'static str,
    pub pattern: &'static str,
    pub description: Text,
}

impl Preset {
    /// Description shown in reports for a pattern taken from this preset.
    pub fn label(&self, lang: Lang) -> String {
        format!("{}{}", LABEL.get(lang), self.name)
    }
}

/// Preset table keyed by name. Please keep names sorted alphabetically.
static PRESETS: Map<&'static str, Preset> = phf_map! {
    "credit-card" => Preset {
        name: "credit-card",
        pattern: r"\d{4}[- ]?\d{4}[- ]?\d{4}[- ]?\d{4}",
        description: Text::new("Credit card number", "信用卡号码"),
    },
    "date" => Preset {
        name: "date",
        pattern: r"\d{4}-\d{2}-\d{2}",
        description: Text::new("Date (YYYY-MM-DD)", "日期模式 (YYYY-MM-DD)"),
    },
    "email" => Preset {
        name: "email",
        pattern: r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}",
        description: Text::new("Email address", "电子邮件模式"),
    },
    "hex" => Preset {
        name: "hex",
        pattern: r"#?([a-fA-F0-9]{6}|[a-fA-F0-9]{3})",
        description: Text::new("Hexadecimal color code", "十六进制颜色代码"),
    },
    "ip" => Preset {
        name: "ip",
        pattern: r"(\d{1,3}\.){3}\d{1,3}",
        description: Text::new("IP address", "IP地址模式"),
    },
    "phone" => Preset {
        name: "phone",
        pattern: r"\+?\d{1,3}[-.\s]?$?\d{3}$?[-.\s]?\d{3}[-.\s]?\d{4}",
        description: Text::new("Phone number", "电话号码模式"),
    },
    "time" => Preset {
        name: "time",
        pattern: r"\d{2}:\d{2}(:\d{2})?",
        description: Text::new("Time (HH:MM:SS)", "时间模式 (HH:MM:SS)"),
    },
    "url" => Preset {
        name: "url",
        pattern: r"https?:\/\/(www\.)?[-a-zA-Z0-9@:%._\+~#=]{1,256}\.[a-zA-Z0-9()]{1,6}\b([-a-zA-Z0-9()@:%_\+.~#?&//=]*)",
        description: Text::new("URL", "URL模式"),
    },
};

/// Look up a preset by exact name.
pub fn lookup(name: &str) -> Option<&'static Preset> {
    PRESETS.get(name)
}

/// Look up a preset, failing with a user-facing error for unknown names.
pub fn require(name: &str, lang: Lang) -> Result<&'static Preset> {
    lookup(name).ok_or_else(|| anyhow!("{} '{}'", UNKNOWN.get(lang), name))
}

/// All presets in alphabetical order of name.
pub fn sorted() -> Vec<&'static Preset> {
    PRESETS.values().sorted_by_key(|p| p.name).collect()
}

/// Comma-separated preset names, for help and error text.
pub fn names() -> String {
    sorted().iter().map(|p| p.name).join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_known_and_unknown() {
        assert_eq!(lookup("date").map(|p| p.pattern), Some(r"\d{4}-\d{2}-\d{2}"));
        assert!(lookup("Date").is_none());
        assert!(lookup("zip").is_none());
    }

    #[test]
    fn require_reports_unknown_name() {
        assert_eq!(require("ip", Lang::En).unwrap().name, "ip");
        assert_eq!(
            require("zip", Lang::En).unwrap_err().to_string(),
            "Unknown preset pattern 'zip'"
        );
        assert_eq!(
            require("zip", Lang::Zh).unwrap_err().to_string(),
            "未知的预设模式 'zip'"
        );
    }

    #[test]
    fn label_names_preset() {
        let email = lookup("email").unwrap();
        assert_eq!(email.label(Lang::En), "Preset pattern: email");
        assert_eq!(email.label(Lang::Zh), "预设模式: email");
    }

    #[test]
    fn keys_match_names() {
        for (key, preset) in PRESETS.entries() {
            assert_eq!(*key, preset.name);
        }
    }

    #[test]
    fn sorted_is_alphabetical() {
        assert_eq!(
            names(),
            "credit-card, date, email, hex, ip, phone, time, url"
        );
    }

    #[test]
    fn phone_pattern_kept_verbatim() {
        let phone = lookup("phone").unwrap();
        assert_eq!(phone.pattern.matches("$?").count(), 2);
    }
}
