// SPDX-License-Identifier: MPL-2.0
//! Locale preference port.

/// Source of the user's preferred locale tag, e.g. `tr-TR`.
pub trait LocaleSource {
    fn preferred_locale(&self) -> Option<String>;
}
