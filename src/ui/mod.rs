// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! exposes its state, a `Message`, an `update` returning an `Event` for the
//! parent, and a `view`.
//!
//! # Components
//!
//! - [`notifications`] - Toast records, their lifecycle and the toast container
//! - [`alert`] - Severity-colored alert box, also used to render toasts
//! - [`navbar`] - Navigation bar with scroll-aware styling
//! - [`language_selector`] - Language dropdown
//! - [`network_status`] - Offline / back-online banner
//! - [`modal`] - Modal dialog with backdrop and escape handling
//! - [`dialog`] - Modal with a description and action buttons
//! - [`button`] - Button with loading, disabled and full-width states
//!
//! # Shared Infrastructure
//!
//! - [`events`] - Shared event sources with scoped listeners
//! - [`timer`] - One-shot cancellable timers polled by ticks
//! - [`styles`] - Centralized styling (buttons, containers, tooltips)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod alert;
pub mod button;
pub mod design_tokens;
pub mod dialog;
pub mod events;
pub mod language_selector;
pub mod modal;
pub mod navbar;
pub mod network_status;
pub mod notifications;
pub mod styles;
pub mod timer;
