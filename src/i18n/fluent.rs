// SPDX-License-Identifier: MPL-2.0
use super::Language;
use crate::application::port::Translate;
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use std::fmt;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

/// Fluent bundles for every supported language plus the active one.
pub struct I18n {
    bundles: HashMap<Language, FluentBundle<FluentResource>>,
    current: Language,
}

impl fmt::Debug for I18n {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("I18n")
            .field("current", &self.current)
            .field("bundles", &self.bundles.len())
            .finish()
    }
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(Language::default())
    }
}

impl I18n {
    /// Loads the embedded `.ftl` files. A file that fails to parse is logged
    /// and skipped; lookups for that language then use the fallbacks.
    #[must_use]
    pub fn new(current: Language) -> Self {
        let mut bundles = HashMap::new();

        for lang in Language::ALL {
            let filename = format!("{}.ftl", lang.code());
            let Some(file) = Asset::get(&filename) else {
                tracing::warn!(%filename, "missing translation file");
                continue;
            };
            let source = String::from_utf8_lossy(file.data.as_ref()).to_string();
            let resource = match FluentResource::try_new(source) {
                Ok(resource) => resource,
                Err((resource, errors)) => {
                    tracing::warn!(%filename, count = errors.len(), "translation file has syntax errors");
                    resource
                }
            };
            let mut bundle = FluentBundle::new(vec![lang.langid()]);
            bundle.set_use_isolating(false);
            if let Err(errors) = bundle.add_resource(resource) {
                tracing::warn!(%filename, count = errors.len(), "duplicate translation entries");
            }
            bundles.insert(lang, bundle);
        }

        Self { bundles, current }
    }

    #[must_use]
    pub fn current(&self) -> Language {
        self.current
    }

    pub fn set_language(&mut self, language: Language) {
        self.current = language;
    }

    /// Translates `key`, returning `MISSING: key` when it has no entry.
    #[must_use]
    pub fn tr(&self, key: &str) -> String {
        self.lookup(key, None)
            .unwrap_or_else(|| format!("MISSING: {}", key))
    }

    /// Translates `key` with named arguments, e.g. `{ $language }`.
    #[must_use]
    pub fn tr_with_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, *value);
        }
        self.lookup(key, Some(&fluent_args))
            .unwrap_or_else(|| format!("MISSING: {}", key))
    }

    fn lookup(&self, key: &str, args: Option<&FluentArgs<'_>>) -> Option<String> {
        let bundle = self.bundles.get(&self.current)?;
        let pattern = bundle.get_message(key)?.value()?;
        let mut errors = vec![];
        let value = bundle.format_pattern(pattern, args, &mut errors);
        if errors.is_empty() {
            Some(value.to_string())
        } else {
            tracing::debug!(key, ?errors, "translation formatting failed");
            None
        }
    }
}

impl Translate for I18n {
    fn translate(&self, key: &str, fallback: &str) -> String {
        self.lookup(key, None)
            .unwrap_or_else(|| fallback.to_string())
    }
}
