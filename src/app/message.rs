// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the showcase.

use crate::ui::dialog;
use crate::ui::modal;
use crate::ui::navbar;
use crate::ui::network_status;
use crate::ui::notifications::{NotificationMessage, Severity};
use iced::keyboard;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Notification(NotificationMessage),
    Network(network_status::Message),
    Modal(modal::Message),
    Dialog(dialog::Message),
    /// Push a demo toast of the given severity.
    ShowToast(Severity),
    OpenModal,
    OpenDialog,
    /// Flip the simulated connection state.
    ToggleConnectivity,
    /// Vertical offset of the page content.
    Scrolled(f32),
    KeyPressed(keyboard::Key),
    WindowResized(f32),
    Tick(Instant),
}

/// Runtime flags passed from the CLI into the application.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Language code to persist before the language context starts
    /// (e.g. `tr`). Unsupported codes are ignored with a warning.
    pub lang: Option<String>,
    /// Initial in-app route, e.g. `/et/blog`.
    pub path: Option<String>,
}
