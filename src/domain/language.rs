// src/domain/language.rs

use serde::{Deserialize, Serialize};

/// Display languages the site serves. Always passed explicitly; nothing in
/// the codebase reads the language from ambient state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Arabic,
    English,
    Turkish,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::Arabic => "ar",
            Language::English => "en",
            Language::Turkish => "tr",
        }
    }

    /// Value for the html `dir` attribute.
    pub fn dir(&self) -> &'static str {
        match self {
            Language::Arabic => "rtl",
            Language::English | Language::Turkish => "ltr",
        }
    }

    /// Parses a language code; anything unrecognized is English.
    pub fn from_code(code: &str) -> Language {
        match code {
            "ar" => Language::Arabic,
            "tr" => Language::Turkish,
            _ => Language::English,
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::English
    }
}

/// A string stored in all three site languages.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Localized {
    pub ar: String,
    pub en: String,
    pub tr: String,
}

impl Localized {
    pub fn new(
        ar: impl Into<String>,
        en: impl Into<String>,
        tr: impl Into<String>,
    ) -> Localized {
        Localized {
            ar: ar.into(),
            en: en.into(),
            tr: tr.into(),
        }
    }

    /// The value for `lang`, falling back to English when that field is empty.
    pub fn in_lang(&self, lang: Language) -> &str {
        let preferred = match lang {
            Language::Arabic => &self.ar,
            Language::English => &self.en,
            Language::Turkish => &self.tr,
        };
        if preferred.is_empty() {
            &self.en
        } else {
            preferred
        }
    }

    pub fn is_empty(&self) -> bool {
        self.ar.is_empty() && self.en.is_empty() && self.tr.is_empty()
    }

    /// True when `needle_lower` occurs in any language variant. The needle
    /// must already be lowercased.
    pub fn contains_ci(&self, needle_lower: &str) -> bool {
        [&self.ar, &self.en, &self.tr]
            .iter()
            .any(|s| s.to_lowercase().contains(needle_lower))
    }
}
