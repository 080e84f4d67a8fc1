// SPDX-License-Identifier: MPL-2.0
//! Translation lookup port.

pub trait Translate {
    /// Returns the translation of `key`, or `fallback` when there is none.
    fn translate(&self, key: &str, fallback: &str) -> String;
}
