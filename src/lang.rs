//! Prose language selection for user-visible text.
//!
//! Token categories and target profiles are language independent; only the
//! explanation strings, report labels and prompts are looked up per [`Lang`].

/// The language used for explanations, report labels and prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lang {
    #[default]
    En,
    Zh,
}

/// Locale variables consulted by [`Lang::from_env`], in priority order.
const LOCALE_VARS: [&str; 3] = ["LANG", "LC_ALL", "LC_MESSAGES"];

/// Locale fragments that select Chinese prose.
const CHINESE_LOCALES: [&str; 4] = ["zh_cn", "zh-tw", "zh_hk", "zh_sg"];

impl Lang {
    /// Detect the prose language from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Detect the prose language using `lookup` to read locale variables.
    ///
    /// The first variable that is set decides; later ones are not consulted
    /// even if the first holds a non-Chinese locale.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let Some(value) = LOCALE_VARS.iter().find_map(|&name| lookup(name)) else {
            return Lang::En;
        };
        let value = value.to_lowercase();
        if CHINESE_LOCALES.iter().any(|loc| value.contains(loc)) {
            Lang::Zh
        } else {
            Lang::En
        }
    }
}

/// A piece of prose in every supported language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Text {
    pub en: &'static str,
    pub zh: &'static str,
}

impl Text {
    pub const fn new(en: &'static str, zh: &'static str) -> Self {
        Self { en, zh }
    }

    pub fn get(&self, lang: Lang) -> &'static str {
        match lang {
            Lang::En => self.en,
            Lang::Zh => self.zh,
        }
    }
}
