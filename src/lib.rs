// SPDX-License-Identifier: MPL-2.0
//! `nuvo_ui` is a component library built with the Iced GUI framework.
//!
//! Its core is the toast notification lifecycle and a language context
//! resolved from storage, the current route and the system locale. Around
//! them sit presentational components (alerts, buttons, modal, navbar,
//! language selector, connectivity banner) and a showcase application.

pub mod app;
pub mod application;
pub mod config;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod language;
pub mod ui;
