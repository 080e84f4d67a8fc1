// SPDX-License-Identifier: MPL-2.0
//! Language context: the single active interface language.
//!
//! A [`LanguageContext`] is created once at startup and passed by reference
//! to every component that renders text. It owns its storage and location
//! collaborators, so persistence and route rewriting happen in one place.
//!
//! # Resolution Order
//!
//! The initial language is the first match of:
//! 1. the value persisted under [`STORAGE_KEY`]
//! 2. the first segment of the current path (`/tr/blog` → `tr`)
//! 3. the preferred locale's primary subtag (`et-EE` → `et`)
//! 4. the configured fallback
//!
//! # Example
//!
//! ```
//! use nuvo_ui::i18n::Language;
//! use nuvo_ui::infrastructure::{FixedLocale, MemoryStore, RouteLocation};
//! use nuvo_ui::language::LanguageContext;
//!
//! let mut ctx = LanguageContext::new(
//!     Box::new(MemoryStore::default()),
//!     Box::new(RouteLocation::new("/en/blog")),
//!     &FixedLocale::new("tr-TR"),
//!     Language::En,
//! );
//! assert_eq!(ctx.language(), Language::En); // path wins over locale
//!
//! ctx.change_language(Language::Et);
//! assert_eq!(ctx.path(), "/et/blog");
//! ```

mod resolve;

pub use resolve::{resolve, Source};

use crate::application::port::location::{first_segment, with_first_segment};
use crate::application::port::{KeyValueStore, LocaleSource, Location};
use crate::error::{Error, Result};
use crate::i18n::Language;
use std::fmt;

/// Storage key holding the persisted language code.
pub const STORAGE_KEY: &str = "language";

pub struct LanguageContext {
    language: Language,
    storage: Box<dyn KeyValueStore>,
    location: Box<dyn Location>,
}

impl fmt::Debug for LanguageContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LanguageContext")
            .field("language", &self.language)
            .field("path", &self.location.path())
            .finish_non_exhaustive()
    }
}

impl LanguageContext {
    /// Resolves the initial language and persists it.
    pub fn new(
        storage: Box<dyn KeyValueStore>,
        location: Box<dyn Location>,
        locale: &dyn LocaleSource,
        fallback: Language,
    ) -> Self {
        let (language, source) = resolve(storage.as_ref(), location.as_ref(), locale, fallback);
        tracing::info!(%language, ?source, "language resolved");

        let mut ctx = Self {
            language,
            storage,
            location,
        };
        ctx.persist();
        ctx
    }

    #[must_use]
    pub fn language(&self) -> Language {
        self.language
    }

    #[must_use]
    pub fn path(&self) -> String {
        self.location.path()
    }

    /// Replaces the current route. Used by navigation, not by language changes.
    pub fn navigate(&mut self, path: &str) {
        self.location.replace_path(path);
    }

    /// Switches the active language.
    ///
    /// The change is applied in memory first, then persisted; a storage
    /// failure is logged and does not undo the change. When the current path
    /// starts with a language segment it is rewritten to the new code.
    pub fn change_language(&mut self, language: Language) {
        if language != self.language {
            tracing::info!(from = %self.language, to = %language, "language changed");
        }
        self.language = language;
        self.persist();
        self.rewrite_path();
    }

    /// String boundary for [`change_language`](Self::change_language).
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedLanguage`] for codes outside the supported
    /// set; state, storage and path are left untouched.
    pub fn change_language_code(&mut self, code: &str) -> Result<Language> {
        let language: Language = code.parse()?;
        self.change_language(language);
        Ok(language)
    }

    fn persist(&mut self) {
        if let Err(error) = self.storage.set(STORAGE_KEY, self.language.code()) {
            tracing::warn!(%error, language = %self.language, "failed to persist language");
        }
    }

    fn rewrite_path(&mut self) {
        let path = self.location.path();
        let has_language_segment = first_segment(&path)
            .and_then(Language::from_code)
            .is_some();
        if has_language_segment {
            let rewritten = with_first_segment(&path, self.language.code());
            if rewritten != path {
                self.location.replace_path(&rewritten);
            }
        }
    }
}

/// Returns the context, or a descriptive error when no provider is in scope.
///
/// Components that may be mounted without a provider take an
/// `Option<&LanguageContext>` and call this first.
///
/// # Errors
///
/// Returns [`Error::MissingLanguageProvider`] when `ctx` is `None`.
pub fn require(ctx: Option<&LanguageContext>) -> Result<&LanguageContext> {
    ctx.ok_or(Error::MissingLanguageProvider)
}
