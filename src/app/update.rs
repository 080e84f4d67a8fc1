// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.

use super::{view, Message, COMPACT_WIDTH};
use crate::application::port::Connectivity;
use crate::i18n::fluent::I18n;
use crate::infrastructure::SharedConnectivity;
use crate::language::LanguageContext;
use crate::ui::dialog::{self, Action, Dialog};
use crate::ui::events::EventSource;
use crate::ui::modal::{self, Modal};
use crate::ui::navbar::{self, Event as NavbarEvent, Section};
use crate::ui::network_status::{self, NetworkStatus};
use crate::ui::notifications::{self, Notification, Severity};
use crate::ui::styles::button::Variant;
use iced::widget::scrollable::AbsoluteOffset;
use iced::widget::{operation, Id};
use iced::{keyboard, Task};
use std::time::{Duration, Instant};

/// Index of the confirming action in the showcase dialog.
const DIALOG_CONFIRM: usize = 1;

/// Mutable view of the application state handed to the handlers.
pub struct UpdateContext<'a> {
    pub i18n: &'a mut I18n,
    pub language: &'a mut LanguageContext,
    pub notifications: &'a mut notifications::Manager,
    pub toast_duration: Duration,
    pub navbar: &'a mut navbar::State,
    pub network: &'a mut NetworkStatus,
    pub connectivity: &'a SharedConnectivity,
    pub modal: &'a mut Modal,
    pub dialog: &'a mut Dialog,
    pub scroll_events: &'a EventSource<f32>,
    pub key_events: &'a EventSource<keyboard::Key>,
    pub compact: &'a mut bool,
}

pub fn update(ctx: &mut UpdateContext<'_>, message: Message) -> Task<Message> {
    match message {
        Message::Navbar(message) => return handle_navbar_message(ctx, message),
        Message::Notification(message) => {
            ctx.notifications.handle_message(&message);
        }
        Message::Network(message) => {
            if network_status::Event::OpenOfflinePage == ctx.network.update(message) {
                ctx.language.navigate("/offline");
            }
        }
        Message::Modal(message) => {
            if modal::Event::CloseRequested == ctx.modal.update(message) {
                ctx.modal.close();
            }
        }
        Message::Dialog(message) => handle_dialog_message(ctx, message),
        Message::ShowToast(severity) => show_demo_toast(ctx, severity),
        Message::OpenModal => {
            ctx.modal.title = Some(ctx.i18n.tr("showcase-modal-title"));
            ctx.modal.open(ctx.key_events);
        }
        Message::OpenDialog => {
            *ctx.dialog = Dialog::new(ctx.i18n.tr("showcase-dialog-title"))
                .description(ctx.i18n.tr("showcase-dialog-description"))
                .action(Action::new(ctx.i18n.tr("dialog-cancel")).variant(Variant::Ghost))
                .action(Action::new(ctx.i18n.tr("dialog-confirm")).variant(Variant::Primary));
            ctx.dialog.open(ctx.key_events);
        }
        Message::ToggleConnectivity => {
            ctx.connectivity.set_online(!ctx.connectivity.is_online());
        }
        Message::Scrolled(offset) => ctx.scroll_events.emit(&offset),
        Message::KeyPressed(key) => {
            ctx.key_events.emit(&key);
            if ctx.modal.take_escape_request() {
                ctx.modal.close();
            }
            if ctx.dialog.take_escape_request() {
                ctx.dialog.close();
            }
        }
        Message::WindowResized(width) => {
            *ctx.compact = width < COMPACT_WIDTH;
            if !*ctx.compact {
                ctx.navbar.menu_open = false;
            }
        }
        Message::Tick(now) => handle_tick(ctx, now),
    }
    Task::none()
}

fn handle_navbar_message(ctx: &mut UpdateContext<'_>, message: navbar::Message) -> Task<Message> {
    match navbar::update(message, ctx.navbar, ctx.language.language()) {
        NavbarEvent::None => Task::none(),
        NavbarEvent::Navigate { target } => {
            if target.starts_with('/') {
                ctx.language.navigate(&target);
            } else {
                tracing::debug!(%target, "ignoring non-route link");
            }
            Task::none()
        }
        NavbarEvent::ScrollTo(section) => scroll_to_section(ctx, section),
        NavbarEvent::LanguageSelected(language) => {
            ctx.language.change_language(language);
            ctx.i18n.set_language(language);
            Task::none()
        }
    }
}

/// Sections live on the home page; from any other route go home first.
fn scroll_to_section(ctx: &mut UpdateContext<'_>, section: Section) -> Task<Message> {
    if !navbar::is_home_route(&ctx.language.path()) {
        let home = format!("/{}", ctx.language.language().code());
        ctx.language.navigate(&home);
    }

    let Some(y) = view::section_offset(section) else {
        return Task::none();
    };
    tracing::debug!(section = section.id(), y, "scroll to section");
    operation::scroll_to(Id::new(view::PAGE_ID), AbsoluteOffset { x: 0.0, y })
}

fn handle_dialog_message(ctx: &mut UpdateContext<'_>, message: dialog::Message) {
    match ctx.dialog.update(message) {
        dialog::Event::None => {}
        dialog::Event::CloseRequested => ctx.dialog.close(),
        dialog::Event::Action(index) => {
            ctx.dialog.close();
            if index == DIALOG_CONFIRM {
                show_demo_toast(ctx, Severity::Success);
            }
        }
    }
}

fn show_demo_toast(ctx: &mut UpdateContext<'_>, severity: Severity) {
    let (title_key, message_key) = match severity {
        Severity::Success => ("toast-success-title", "toast-success-message"),
        Severity::Info => ("toast-info-title", "toast-info-message"),
        Severity::Warning => ("toast-warning-title", "toast-warning-message"),
        Severity::Error => ("toast-error-title", "toast-error-message"),
    };

    // Errors stay until closed
    let duration = if severity == Severity::Error {
        Duration::ZERO
    } else {
        ctx.toast_duration
    };

    ctx.notifications.push(
        Notification::new(severity, ctx.i18n.tr(message_key))
            .with_title(ctx.i18n.tr(title_key))
            .with_duration(duration),
    );
}

fn handle_tick(ctx: &mut UpdateContext<'_>, now: Instant) {
    let removed = ctx.notifications.tick(now);
    if !removed.is_empty() {
        tracing::trace!(count = removed.len(), "toasts removed on tick");
    }
    ctx.network.tick(now);
}
