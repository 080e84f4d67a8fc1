// SPDX-License-Identifier: MPL-2.0
//! Initial language resolution.

use super::STORAGE_KEY;
use crate::application::port::location::first_segment;
use crate::application::port::{KeyValueStore, LocaleSource, Location};
use crate::i18n::Language;

/// Where the initial language came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Storage,
    Path,
    Locale,
    Fallback,
}

/// Picks the initial language: storage, then path, then locale, then `fallback`.
///
/// Unrecognized values at any step are skipped, never coerced.
pub fn resolve(
    storage: &dyn KeyValueStore,
    location: &dyn Location,
    locale: &dyn LocaleSource,
    fallback: Language,
) -> (Language, Source) {
    if let Some(lang) = storage
        .get(STORAGE_KEY)
        .and_then(|code| Language::from_code(&code))
    {
        return (lang, Source::Storage);
    }

    let path = location.path();
    if let Some(lang) = first_segment(&path).and_then(Language::from_code) {
        return (lang, Source::Path);
    }

    if let Some(lang) = locale
        .preferred_locale()
        .and_then(|tag| Language::from_locale_tag(&tag))
    {
        return (lang, Source::Locale);
    }

    (fallback, Source::Fallback)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::{FixedLocale, MemoryStore, RouteLocation};

    #[test]
    fn unsupported_persisted_value_is_skipped() {
        let storage = MemoryStore::with_entry(STORAGE_KEY, "de");
        let (lang, source) = resolve(
            &storage,
            &RouteLocation::new("/et"),
            &FixedLocale::default(),
            Language::En,
        );
        assert_eq!((lang, source), (Language::Et, Source::Path));
    }

    #[test]
    fn path_segment_must_match_exactly() {
        let (lang, source) = resolve(
            &MemoryStore::default(),
            &RouteLocation::new("/tracks"),
            &FixedLocale::default(),
            Language::Et,
        );
        assert_eq!((lang, source), (Language::Et, Source::Fallback));
    }

    #[test]
    fn locale_prefix_is_used() {
        let (lang, source) = resolve(
            &MemoryStore::default(),
            &RouteLocation::default(),
            &FixedLocale::new("tr-TR"),
            Language::En,
        );
        assert_eq!((lang, source), (Language::Tr, Source::Locale));
    }

    #[test]
    fn missing_locale_uses_fallback() {
        let (lang, source) = resolve(
            &MemoryStore::default(),
            &RouteLocation::default(),
            &FixedLocale::default(),
            Language::Tr,
        );
        assert_eq!((lang, source), (Language::Tr, Source::Fallback));
    }
}
