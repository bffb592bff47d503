//! Matching-behaviour modifiers shared by every emission target.

/// One of the three independent modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modifier {
    CaseInsensitive,
    Multiline,
    DotAll,
}

impl Modifier {
    /// Canonical order. Every flag list a target emits follows it.
    pub const ALL: [Modifier; 3] = [
        Modifier::CaseInsensitive,
        Modifier::Multiline,
        Modifier::DotAll,
    ];

    /// Suffix letter used by regex-literal syntaxes.
    pub fn letter(self) -> char {
        match self {
            Modifier::CaseInsensitive => 'i',
            Modifier::Multiline => 'm',
            Modifier::DotAll => 's',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Modifier::CaseInsensitive => "case-insensitive",
            Modifier::Multiline => "multiline",
            Modifier::DotAll => "dot-all",
        }
    }
}

/// The set of enabled modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub case_insensitive: bool,
    pub multiline: bool,
    pub dot_all: bool,
}

impl Modifiers {
    pub fn contains(&self, modifier: Modifier) -> bool {
        match modifier {
            Modifier::CaseInsensitive => self.case_insensitive,
            Modifier::Multiline => self.multiline,
            Modifier::DotAll => self.dot_all,
        }
    }

    pub fn is_empty(&self) -> bool {
        !(self.case_insensitive || self.multiline || self.dot_all)
    }

    /// Enabled modifiers in canonical order.
    pub fn enabled(&self) -> impl Iterator<Item = Modifier> + '_ {
        Modifier::ALL.into_iter().filter(|m| self.contains(*m))
    }

    /// Suffix letters for the enabled modifiers, e.g. `"is"`.
    pub fn suffix(&self) -> String {
        self.enabled().map(Modifier::letter).collect()
    }
}

impl FromIterator<Modifier> for Modifiers {
    fn from_iter<I: IntoIterator<Item = Modifier>>(iter: I) -> Self {
        let mut modifiers = Modifiers::default();
        for modifier in iter {
            match modifier {
                Modifier::CaseInsensitive => modifiers.case_insensitive = true,
                Modifier::Multiline => modifiers.multiline = true,
                Modifier::DotAll => modifiers.dot_all = true,
            }
        }
        modifiers
    }
}
