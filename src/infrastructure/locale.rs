// SPDX-License-Identifier: MPL-2.0
//! Locale preference adapters.

use crate::application::port::LocaleSource;

/// Reads the operating system's locale.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLocale;

impl LocaleSource for SystemLocale {
    fn preferred_locale(&self) -> Option<String> {
        sys_locale::get_locale()
    }
}

/// A fixed locale tag; `None` behaves like a system without a locale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixedLocale(pub Option<String>);

impl FixedLocale {
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self(Some(tag.to_string()))
    }
}

impl LocaleSource for FixedLocale {
    fn preferred_locale(&self) -> Option<String> {
        self.0.clone()
    }
}
