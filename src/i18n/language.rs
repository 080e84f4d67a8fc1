// SPDX-License-Identifier: MPL-2.0
//! The closed set of supported interface languages.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use unic_langid::LanguageIdentifier;

/// A supported interface language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Tr,
    Et,
}

impl Language {
    /// Every supported language, in selector order.
    pub const ALL: [Language; 3] = [Language::En, Language::Tr, Language::Et];

    /// Returns the two-letter code used in storage and paths.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Tr => "tr",
            Language::Et => "et",
        }
    }

    /// Returns the language's name in that language.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Tr => "Türkçe",
            Language::Et => "Eesti",
        }
    }

    #[must_use]
    pub fn flag(self) -> &'static str {
        match self {
            Language::En => "🇺🇸",
            Language::Tr => "🇹🇷",
            Language::Et => "🇪🇪",
        }
    }

    /// Matches an exact supported code (`"tr"`), nothing looser.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|lang| lang.code() == code)
    }

    /// Maps a locale tag such as `tr-TR` or `et_EE.UTF-8` to a supported
    /// language using only its primary language subtag.
    #[must_use]
    pub fn from_locale_tag(tag: &str) -> Option<Self> {
        // POSIX locales carry an encoding suffix and underscores.
        let tag = tag.split('.').next().unwrap_or(tag).replace('_', "-");
        let primary = match tag.parse::<LanguageIdentifier>() {
            Ok(langid) => langid.language.as_str().to_ascii_lowercase(),
            Err(_) => tag.split('-').next().unwrap_or("").to_ascii_lowercase(),
        };
        Self::from_code(&primary)
    }

    /// Returns the Fluent language identifier for this language.
    #[must_use]
    pub fn langid(self) -> LanguageIdentifier {
        let mut langid = LanguageIdentifier::default();
        // The codes are valid ISO 639-1 subtags.
        if let Ok(language) = self.code().parse() {
            langid.language = language;
        }
        langid
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| Error::UnsupportedLanguage(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip_through_from_str() {
        for lang in Language::ALL {
            assert_eq!(lang.code().parse::<Language>(), Ok(lang));
        }
    }

    #[test]
    fn from_str_rejects_unsupported_codes() {
        assert_eq!(
            "de".parse::<Language>(),
            Err(Error::UnsupportedLanguage("de".into()))
        );
        assert!("EN".parse::<Language>().is_err());
        assert!("".parse::<Language>().is_err());
    }

    #[test]
    fn locale_tags_map_by_primary_subtag() {
        assert_eq!(Language::from_locale_tag("tr-TR"), Some(Language::Tr));
        assert_eq!(Language::from_locale_tag("et"), Some(Language::Et));
        assert_eq!(Language::from_locale_tag("en-GB"), Some(Language::En));
        assert_eq!(Language::from_locale_tag("et_EE.UTF-8"), Some(Language::Et));
        assert_eq!(Language::from_locale_tag("fr-FR"), None);
        assert_eq!(Language::from_locale_tag(""), None);
    }

    #[test]
    fn langid_matches_code() {
        assert_eq!(Language::Tr.langid().to_string(), "tr");
    }

    #[test]
    fn default_is_english() {
        assert_eq!(Language::default(), Language::En);
    }
}
