// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support.
//!
//! - [`Language`]: the closed set of supported codes (`en`, `tr`, `et`)
//! - [`fluent::I18n`]: embedded Fluent bundles and the `translate` lookup

pub mod fluent;
mod language;

pub use language::Language;
